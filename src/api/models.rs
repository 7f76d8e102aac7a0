use serde::Deserialize;

pub use crate::validate::{ProgramRegistration, ReportSubmission};

/// Body of `POST /api/reports/{id}/bounty`.
#[derive(Deserialize)]
pub struct AwardBountyRequest {
    /// Awarded amount in base currency units.
    pub amount: f64,
    /// Reputation points for the reporter; defaults by severity.
    pub reputation: Option<i64>,
}

/// Body of `POST /api/profiles`.
#[derive(Deserialize)]
pub struct UpsertProfileRequest {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Option<String>,
    pub company_name: Option<String>,
}
