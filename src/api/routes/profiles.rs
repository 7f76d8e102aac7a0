use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};
use std::str::FromStr;

use crate::api::models::UpsertProfileRequest;
use crate::api::AppState;
use crate::errors::BountyError;
use crate::models::{Profile, Role};
use crate::stats::aggregate_user;

pub async fn upsert_profile(
    State(state): State<AppState>,
    Json(req): Json<UpsertProfileRequest>,
) -> Result<(StatusCode, Json<Value>), BountyError> {
    let role = match req.role.as_deref() {
        Some(raw) => Role::from_str(raw).map_err(BountyError::Validation)?,
        None => Role::Researcher,
    };

    let profile = Profile {
        id: req.id,
        name: req.name,
        email: req.email,
        role,
        company_name: req.company_name,
        reputation: 0,
    };
    state.db.upsert_profile(&profile)?;

    Ok((StatusCode::CREATED, Json(json!({ "profile": profile }))))
}

pub async fn get_profile(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, BountyError> {
    match state.db.get_profile(&id)? {
        Some(profile) => Ok(Json(serde_json::to_value(profile)?)),
        None => Err(BountyError::NotFound(format!("Profile {} not found", id))),
    }
}

/// Profile page statistics, derived from the user's report rows on
/// every read.
pub async fn get_profile_stats(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, BountyError> {
    let reports = state.db.reports_by_reporter(&id)?;
    let stats = aggregate_user(&reports);
    Ok(Json(serde_json::to_value(stats)?))
}
