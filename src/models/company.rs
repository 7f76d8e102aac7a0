use serde::{Deserialize, Serialize};

/// Slice of a program shown on a company page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgramSummary {
    pub id: String,
    pub name: String,
    pub description: String,
    pub bounty_range: String,
}

/// View model for a company page, derived from the company's program
/// rows on every read. Never stored, so it can lag concurrent edits.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyAggregate {
    pub name: String,
    pub description: String,
    pub logo: String,
    /// Sum of each program's paid label, re-formatted as "$X.XM".
    pub total_paid: String,
    pub critical_vulns: i64,
    pub active_programs_count: usize,
    pub programs: Vec<ProgramSummary>,
}

/// Derived per-researcher statistics shown on the profile page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserStats {
    pub reports_count: usize,
    pub bounties_earned: f64,
    pub critical_findings: usize,
}
