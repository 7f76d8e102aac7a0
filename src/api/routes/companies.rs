use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::{json, Value};
use std::collections::BTreeMap;

use crate::api::AppState;
use crate::errors::BountyError;
use crate::models::{CompanyAggregate, Program};
use crate::stats::{aggregate_company, logo_initials};

/// Companies never exist as rows; each one is derived from the program
/// rows sharing its company name.
pub async fn list_companies(
    State(state): State<AppState>,
) -> Result<Json<Value>, BountyError> {
    let programs = state.db.list_programs()?;

    let mut by_company: BTreeMap<String, Vec<Program>> = BTreeMap::new();
    for program in programs {
        by_company.entry(program.company.clone()).or_default().push(program);
    }

    let companies: Vec<CompanyAggregate> = by_company
        .iter()
        .map(|(name, programs)| aggregate_company(name, programs))
        .collect();

    Ok(Json(json!({ "companies": companies, "total": companies.len() })))
}

pub async fn get_company(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<Value>, BountyError> {
    // Company pages are addressed by slug ("acme-corp" -> "acme corp").
    let company_name = name.replace('-', " ");

    let programs = state.db.programs_by_company(&company_name)?;
    if !programs.is_empty() {
        return Ok(Json(serde_json::to_value(aggregate_company(&company_name, &programs))?));
    }

    // A company without programs still gets a page if a profile claims it.
    if state.db.company_profile_exists(&company_name)? {
        let placeholder = CompanyAggregate {
            name: company_name.clone(),
            description: format!("{} is a new company on SecureBounty.", company_name),
            logo: logo_initials(&company_name),
            total_paid: "$0M".to_string(),
            critical_vulns: 0,
            active_programs_count: 0,
            programs: Vec::new(),
        };
        return Ok(Json(serde_json::to_value(placeholder)?));
    }

    Err(BountyError::NotFound(format!("Company {} not found", company_name)))
}
