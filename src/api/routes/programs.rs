use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};

use crate::api::models::ProgramRegistration;
use crate::api::AppState;
use crate::errors::BountyError;
use crate::validate::validate_program;

pub async fn create_program(
    State(state): State<AppState>,
    Json(registration): Json<ProgramRegistration>,
) -> Result<(StatusCode, Json<Value>), BountyError> {
    let program = validate_program(&registration)?;
    state.db.insert_program(&program)?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Program added successfully!",
            "program": program,
        })),
    ))
}

pub async fn list_programs(
    State(state): State<AppState>,
) -> Result<Json<Value>, BountyError> {
    let programs = state.db.list_programs()?;
    Ok(Json(json!({ "programs": programs, "total": programs.len() })))
}

pub async fn get_program(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, BountyError> {
    match state.db.get_program(&id)? {
        Some(program) => Ok(Json(serde_json::to_value(program)?)),
        None => Err(BountyError::NotFound(format!("Program {} not found", id))),
    }
}
