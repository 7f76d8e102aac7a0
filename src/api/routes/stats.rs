use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::api::AppState;
use crate::errors::BountyError;

/// Aggregate counts for the admin dashboard.
pub async fn get_counts(
    State(state): State<AppState>,
) -> Result<Json<Value>, BountyError> {
    Ok(Json(json!({
        "programs": state.db.count_programs()?,
        "reports": state.db.count_reports()?,
        "researchers": state.db.count_researchers()?,
    })))
}
