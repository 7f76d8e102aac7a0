use serde::{Deserialize, Serialize};

/// A company's published bounty program: scope, reward terms and the
/// display counters the marketplace keeps alongside them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Program {
    pub id: String,
    pub name: String,
    pub company: String,
    pub description: String,
    /// Two-letter initials shown where the company has no uploaded logo.
    pub logo: String,
    /// Display label, e.g. "$500 - $15000".
    pub bounty_range: String,
    pub min_bounty: f64,
    pub max_bounty: f64,
    /// Ordered vulnerability-type tags, e.g. ["XSS", "SQLi"].
    pub vulnerability_types: Vec<String>,
    /// Ordered in-scope assets.
    pub scope: Vec<String>,
    pub reports_count: i64,
    pub resolved_count: i64,
    pub researchers_count: i64,
    /// Cumulative paid label, e.g. "$1.2M" or "$500K".
    pub total_paid: String,
    pub critical_vulns: i64,
    /// Average resolution time label or "N/A".
    pub average_time: String,
    pub rating: f64,
    pub status: String,
    pub is_new: bool,
    /// RFC 3339 launch timestamp.
    pub launched_at: String,
}
