use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use std::str::FromStr;

use crate::api::AppState;
use crate::errors::BountyError;
use crate::models::Severity;

#[derive(Deserialize)]
pub struct FeedQuery {
    /// One of the four severities, or "all"/absent for everything.
    pub severity: Option<String>,
}

pub async fn list_hacktivity(
    State(state): State<AppState>,
    Query(query): Query<FeedQuery>,
) -> Result<Json<Value>, BountyError> {
    let severity = match query.severity.as_deref() {
        None | Some("all") => None,
        Some(raw) => Some(Severity::from_str(raw).map_err(BountyError::Validation)?),
    };

    let events = state.db.list_hacktivity(severity)?;
    Ok(Json(json!({ "hacktivity": events, "total": events.len() })))
}
