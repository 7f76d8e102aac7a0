use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::api::AppState;
use crate::errors::BountyError;

#[derive(Deserialize)]
pub struct LeaderboardQuery {
    pub limit: Option<usize>,
}

pub async fn get_leaderboard(
    State(state): State<AppState>,
    Query(query): Query<LeaderboardQuery>,
) -> Result<Json<Value>, BountyError> {
    let limit = query.limit.unwrap_or(20);
    let leaderboard = state.db.leaderboard_top(limit)?;
    Ok(Json(json!({ "leaderboard": leaderboard, "total": leaderboard.len() })))
}
