use chrono::Utc;
use serde::Deserialize;
use std::str::FromStr;

use crate::errors::BountyError;
use crate::models::{Report, ReportStatus, Severity, NO_BOUNTY};

/// Raw report submission as it arrives over the API. Everything is
/// optional here; `validate_report` decides what is mandatory.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReportSubmission {
    pub title: Option<String>,
    pub program_name: Option<String>,
    pub program_id: Option<String>,
    pub severity: Option<String>,
    pub vulnerable_url: Option<String>,
    pub description: Option<String>,
    pub steps_to_reproduce: Option<String>,
    pub cwe_id: Option<String>,
    /// Arrives as a form string; parsed to f64 during normalization.
    pub cvss_score: Option<String>,
    pub proof_of_concept: Option<String>,
    pub impact_assessment: Option<String>,
    pub suggested_fix: Option<String>,
    pub reporter_name: Option<String>,
    pub reporter_uid: Option<String>,
}

fn present(field: &Option<String>) -> bool {
    field.as_deref().is_some_and(|v| !v.trim().is_empty())
}

/// Validates a submission and produces the normalized report row.
///
/// Mandatory: title, program_name, severity, vulnerable_url, description,
/// steps_to_reproduce and an authenticated reporter_uid. Severity must be
/// one of the four recognized values. Status is forced to `pending` and
/// the bounty to the "N/A" sentinel; both timestamps are set to now.
pub fn validate_report(submission: &ReportSubmission) -> Result<Report, BountyError> {
    let mut missing = Vec::new();
    if !present(&submission.title) {
        missing.push("title");
    }
    if !present(&submission.program_name) {
        missing.push("program_name");
    }
    if !present(&submission.severity) {
        missing.push("severity");
    }
    if !present(&submission.vulnerable_url) {
        missing.push("vulnerable_url");
    }
    if !present(&submission.description) {
        missing.push("description");
    }
    if !present(&submission.steps_to_reproduce) {
        missing.push("steps_to_reproduce");
    }
    if !present(&submission.reporter_uid) {
        missing.push("reporter_uid");
    }
    if !missing.is_empty() {
        return Err(BountyError::missing_fields(&missing));
    }

    let severity = Severity::from_str(submission.severity.as_deref().unwrap_or_default())
        .map_err(BountyError::Validation)?;

    // Unparsable scores are dropped rather than rejected, matching the
    // silent degradation applied to currency labels.
    let cvss_score = submission
        .cvss_score
        .as_deref()
        .and_then(|s| s.trim().parse::<f64>().ok());

    let now = Utc::now().to_rfc3339();
    Ok(Report {
        id: uuid::Uuid::new_v4().to_string(),
        title: submission.title.clone().unwrap_or_default(),
        program_name: submission.program_name.clone().unwrap_or_default(),
        severity,
        status: ReportStatus::Pending,
        reporter_name: submission.reporter_name.clone().unwrap_or_default(),
        reporter_uid: submission.reporter_uid.clone().unwrap_or_default(),
        submitted_at: now.clone(),
        last_activity: now,
        cvss_score,
        weakness: submission.cwe_id.clone(),
        vulnerable_url: submission.vulnerable_url.clone().unwrap_or_default(),
        description: submission.description.clone().unwrap_or_default(),
        steps_to_reproduce: submission.steps_to_reproduce.clone().unwrap_or_default(),
        proof_of_concept: submission.proof_of_concept.clone(),
        impact_assessment: submission.impact_assessment.clone(),
        suggested_fix: submission.suggested_fix.clone(),
        bounty: NO_BOUNTY.to_string(),
    })
}
