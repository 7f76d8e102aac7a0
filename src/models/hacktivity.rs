use serde::{Deserialize, Serialize};
use super::report::Severity;

/// Kind of event on the public hacktivity feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityType {
    ReportSubmitted,
    BountyAwarded,
}

impl ActivityType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityType::ReportSubmitted => "report_submitted",
            ActivityType::BountyAwarded => "bounty_awarded",
        }
    }
}

/// One entry in the public feed of submissions and awards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HacktivityEvent {
    pub id: String,
    #[serde(rename = "type")]
    pub activity_type: ActivityType,
    pub reporter_name: String,
    pub reporter_uid: String,
    pub program_name: String,
    pub title: String,
    pub severity: Severity,
    pub bounty: String,
    /// RFC 3339 timestamp.
    pub timestamp: String,
}
