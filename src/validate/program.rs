use chrono::Utc;
use serde::Deserialize;

use crate::errors::BountyError;
use crate::models::Program;
use crate::stats::logo_initials;

/// Raw program registration as submitted by an admin or company user.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProgramRegistration {
    pub name: Option<String>,
    pub company: Option<String>,
    pub description: Option<String>,
    pub min_bounty: Option<f64>,
    pub max_bounty: Option<f64>,
    pub logo: Option<String>,
    pub bounty_range: Option<String>,
    pub vulnerability_types: Option<Vec<String>>,
    pub scope: Option<Vec<String>>,
    pub average_time: Option<String>,
    pub rating: Option<f64>,
    pub status: Option<String>,
    pub is_new: Option<bool>,
    pub launched_at: Option<String>,
    pub total_paid: Option<String>,
}

fn present(field: &Option<String>) -> bool {
    field.as_deref().is_some_and(|v| !v.trim().is_empty())
}

/// Validates a registration and fills the defaults: logo initials from
/// the company name, a "$min - $max" range label, launch timestamp now,
/// is_new true, empty tag and scope lists, zeroed counters.
///
/// Bounty bounds must be non-negative and min must not exceed max.
pub fn validate_program(registration: &ProgramRegistration) -> Result<Program, BountyError> {
    let mut missing = Vec::new();
    if !present(&registration.name) {
        missing.push("name");
    }
    if !present(&registration.company) {
        missing.push("company");
    }
    if !present(&registration.description) {
        missing.push("description");
    }
    if registration.min_bounty.is_none() {
        missing.push("min_bounty");
    }
    if registration.max_bounty.is_none() {
        missing.push("max_bounty");
    }
    if !missing.is_empty() {
        return Err(BountyError::missing_fields(&missing));
    }

    let min_bounty = registration.min_bounty.unwrap_or_default();
    let max_bounty = registration.max_bounty.unwrap_or_default();
    if min_bounty < 0.0 || max_bounty < 0.0 {
        return Err(BountyError::Validation(
            "Bounty bounds must be non-negative".to_string(),
        ));
    }
    if min_bounty > max_bounty {
        return Err(BountyError::Validation(
            "min_bounty must not exceed max_bounty".to_string(),
        ));
    }

    let company = registration.company.clone().unwrap_or_default();
    let logo = registration
        .logo
        .clone()
        .filter(|l| !l.trim().is_empty())
        .unwrap_or_else(|| logo_initials(&company));
    let bounty_range = registration
        .bounty_range
        .clone()
        .filter(|r| !r.trim().is_empty())
        .unwrap_or_else(|| format!("${} - ${}", min_bounty, max_bounty));

    Ok(Program {
        id: uuid::Uuid::new_v4().to_string(),
        name: registration.name.clone().unwrap_or_default(),
        company,
        description: registration.description.clone().unwrap_or_default(),
        logo,
        bounty_range,
        min_bounty,
        max_bounty,
        vulnerability_types: registration.vulnerability_types.clone().unwrap_or_default(),
        scope: registration.scope.clone().unwrap_or_default(),
        reports_count: 0,
        resolved_count: 0,
        researchers_count: 0,
        total_paid: registration.total_paid.clone().unwrap_or_else(|| "$0".to_string()),
        critical_vulns: 0,
        average_time: registration.average_time.clone().unwrap_or_else(|| "N/A".to_string()),
        rating: registration.rating.unwrap_or(0.0),
        status: registration.status.clone().unwrap_or_else(|| "active".to_string()),
        is_new: registration.is_new.unwrap_or(true),
        launched_at: registration
            .launched_at
            .clone()
            .unwrap_or_else(|| Utc::now().to_rfc3339()),
    })
}
