use thiserror::Error;

#[derive(Debug, Error)]
pub enum BountyError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Upstream service error: {0}")]
    Upstream(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl BountyError {
    /// Validation failure naming every offending field at once.
    pub fn missing_fields(fields: &[&str]) -> Self {
        BountyError::Validation(format!("Missing required fields: {}", fields.join(", ")))
    }
}
