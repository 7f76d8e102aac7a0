use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::warn;

use crate::api::models::{AwardBountyRequest, ReportSubmission};
use crate::api::AppState;
use crate::errors::BountyError;
use crate::models::{ActivityType, HacktivityEvent, Report};
use crate::notify::dispatch_webhook;
use crate::utils::currency::format_bounty_label;
use crate::validate::validate_report;

#[derive(Deserialize)]
pub struct ListReportsQuery {
    pub reporter_uid: Option<String>,
    pub program: Option<String>,
}

pub async fn submit_report(
    State(state): State<AppState>,
    Json(submission): Json<ReportSubmission>,
) -> Result<(StatusCode, Json<Value>), BountyError> {
    let report = validate_report(&submission)?;
    state.db.insert_report(&report)?;

    // Counter and feed updates are best-effort; the report itself is in.
    if let Some(program_id) = &submission.program_id {
        if let Err(e) = state.db.increment_reports_count(program_id) {
            warn!(program_id, error = %e, "Failed to bump program report counter");
        }
    }
    if let Err(e) = state.db.leaderboard_record_submission(&report.reporter_uid, &report.reporter_name) {
        warn!(reporter_uid = %report.reporter_uid, error = %e, "Failed to update leaderboard");
    }

    publish_activity(&state, &report, ActivityType::ReportSubmitted, report.bounty.clone());

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Report submitted successfully!",
            "report": report,
        })),
    ))
}

pub async fn list_reports(
    State(state): State<AppState>,
    Query(query): Query<ListReportsQuery>,
) -> Result<Json<Value>, BountyError> {
    let reports = match (&query.reporter_uid, &query.program) {
        (Some(uid), _) => state.db.reports_by_reporter(uid)?,
        (None, Some(program)) => state.db.reports_by_program(program)?,
        (None, None) => state.db.list_reports()?,
    };
    Ok(Json(json!({ "reports": reports, "total": reports.len() })))
}

pub async fn get_report(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, BountyError> {
    match state.db.get_report(&id)? {
        Some(report) => Ok(Json(serde_json::to_value(report)?)),
        None => Err(BountyError::NotFound(format!("Report {} not found", id))),
    }
}

pub async fn award_bounty(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<AwardBountyRequest>,
) -> Result<Json<Value>, BountyError> {
    if !req.amount.is_finite() || req.amount <= 0.0 {
        return Err(BountyError::Validation(
            "amount must be a positive number".to_string(),
        ));
    }

    let label = format_bounty_label(req.amount);
    let report = state.db.award_bounty(&id, &label)?;

    if let Err(e) = state.db.increment_resolved_count(&report.program_name) {
        warn!(program = %report.program_name, error = %e, "Failed to bump resolved counter");
    }

    let reputation = req.reputation.unwrap_or_else(|| report.severity.default_reputation());
    if let Err(e) = state.db.leaderboard_record_award(&report.reporter_uid, &report.reporter_name, req.amount, reputation) {
        warn!(reporter_uid = %report.reporter_uid, error = %e, "Failed to update leaderboard");
    }
    if let Err(e) = state.db.add_reputation(&report.reporter_uid, reputation) {
        warn!(reporter_uid = %report.reporter_uid, error = %e, "Failed to update profile reputation");
    }

    publish_activity(&state, &report, ActivityType::BountyAwarded, label);

    Ok(Json(json!({
        "message": "Bounty awarded successfully!",
        "report": report,
    })))
}

/// Appends a feed event and pushes it to subscribers. Feed failures are
/// logged, never surfaced to the submitting caller.
fn publish_activity(state: &AppState, report: &Report, activity_type: ActivityType, bounty: String) {
    let event = HacktivityEvent {
        id: uuid::Uuid::new_v4().to_string(),
        activity_type,
        reporter_name: report.reporter_name.clone(),
        reporter_uid: report.reporter_uid.clone(),
        program_name: report.program_name.clone(),
        title: report.title.clone(),
        severity: report.severity,
        bounty,
        timestamp: Utc::now().to_rfc3339(),
    };

    if let Err(e) = state.db.insert_hacktivity(&event) {
        warn!(error = %e, "Failed to append hacktivity event");
        return;
    }

    match serde_json::to_value(&event) {
        Ok(record) => {
            state.hub.publish("hacktivity", record.clone());
            if let Some(url) = &state.webhook_url {
                dispatch_webhook(url.clone(), "hacktivity", record);
            }
        }
        Err(e) => warn!(error = %e, "Failed to serialize hacktivity event"),
    }
}
