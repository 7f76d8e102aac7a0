use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use crate::errors::BountyError;

impl IntoResponse for BountyError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match &self {
            BountyError::Validation(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            BountyError::NotFound(_) => (StatusCode::NOT_FOUND, self.to_string()),
            BountyError::Config(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            BountyError::Upstream(_) => (StatusCode::BAD_GATEWAY, self.to_string()),
            _ => (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()),
        };

        (status, Json(json!({"error": message}))).into_response()
    }
}
