use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Bounty label used when no bounty has been awarded yet.
pub const NO_BOUNTY: &str = "N/A";

/// Severity of a reported vulnerability, ordered from most to least severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "critical",
            Severity::High => "high",
            Severity::Medium => "medium",
            Severity::Low => "low",
        }
    }

    /// Reputation points granted with a bounty award when the company
    /// does not specify its own amount.
    pub fn default_reputation(&self) -> i64 {
        match self {
            Severity::Critical => 50,
            Severity::High => 25,
            Severity::Medium => 15,
            Severity::Low => 7,
        }
    }
}

impl FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "critical" => Ok(Severity::Critical),
            "high" => Ok(Severity::High),
            "medium" => Ok(Severity::Medium),
            "low" => Ok(Severity::Low),
            other => Err(format!("unrecognized severity '{}'", other)),
        }
    }
}

/// Triage lifecycle of a report. All transitions happen in the store;
/// the core only ever writes `Pending` (on submission) and `Resolved`
/// (on bounty award).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportStatus {
    Pending,
    Triaged,
    Resolved,
    Duplicate,
    Rejected,
}

impl ReportStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportStatus::Pending => "pending",
            ReportStatus::Triaged => "triaged",
            ReportStatus::Resolved => "resolved",
            ReportStatus::Duplicate => "duplicate",
            ReportStatus::Rejected => "rejected",
        }
    }
}

/// A researcher's vulnerability report against a program.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub id: String,
    pub title: String,
    pub program_name: String,
    pub severity: Severity,
    pub status: ReportStatus,
    pub reporter_name: String,
    pub reporter_uid: String,
    /// RFC 3339 submission timestamp.
    pub submitted_at: String,
    /// RFC 3339 timestamp of the last triage/award activity.
    pub last_activity: String,
    pub cvss_score: Option<f64>,
    /// CWE identifier, e.g. "CWE-89".
    pub weakness: Option<String>,
    pub vulnerable_url: String,
    pub description: String,
    pub steps_to_reproduce: String,
    pub proof_of_concept: Option<String>,
    pub impact_assessment: Option<String>,
    pub suggested_fix: Option<String>,
    /// Awarded bounty label ("$1,500") or the "N/A" sentinel.
    pub bounty: String,
}
