use std::str::FromStr;

use crate::errors::BountyError;
use crate::models::{ActivityType, HacktivityEvent, Severity};
use super::Database;

fn row_to_event(row: &rusqlite::Row) -> rusqlite::Result<HacktivityEvent> {
    let type_str: String = row.get(1)?;
    let severity_str: String = row.get(6)?;
    let activity_type = if type_str == "bounty_awarded" {
        ActivityType::BountyAwarded
    } else {
        ActivityType::ReportSubmitted
    };
    Ok(HacktivityEvent {
        id: row.get(0)?,
        activity_type,
        reporter_name: row.get(2)?,
        reporter_uid: row.get(3)?,
        program_name: row.get(4)?,
        title: row.get(5)?,
        severity: Severity::from_str(&severity_str).unwrap_or(Severity::Low),
        bounty: row.get(7)?,
        timestamp: row.get(8)?,
    })
}

impl Database {
    pub fn insert_hacktivity(&self, event: &HacktivityEvent) -> Result<(), BountyError> {
        let conn = self.conn.lock().unwrap();
        conn.execute(
            "INSERT INTO hacktivity (id, type, reporter_name, reporter_uid, program_name, title, severity, bounty, timestamp) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
            rusqlite::params![
                event.id,
                event.activity_type.as_str(),
                event.reporter_name,
                event.reporter_uid,
                event.program_name,
                event.title,
                event.severity.as_str(),
                event.bounty,
                event.timestamp,
            ],
        ).map_err(|e| BountyError::Database(format!("Failed to insert hacktivity: {}", e)))?;
        Ok(())
    }

    /// Feed entries newest first, optionally narrowed to one severity.
    pub fn list_hacktivity(&self, severity: Option<Severity>) -> Result<Vec<HacktivityEvent>, BountyError> {
        let conn = self.conn.lock().unwrap();
        let mut events = Vec::new();

        match severity {
            Some(sev) => {
                let mut stmt = conn.prepare(
                    "SELECT id, type, reporter_name, reporter_uid, program_name, title, severity, bounty, timestamp FROM hacktivity WHERE severity = ?1 ORDER BY timestamp DESC",
                ).map_err(|e| BountyError::Database(format!("Query failed: {}", e)))?;
                let rows = stmt.query_map(rusqlite::params![sev.as_str()], row_to_event)
                    .map_err(|e| BountyError::Database(format!("Query error: {}", e)))?;
                for row in rows {
                    events.push(row.map_err(|e| BountyError::Database(format!("Row error: {}", e)))?);
                }
            }
            None => {
                let mut stmt = conn.prepare(
                    "SELECT id, type, reporter_name, reporter_uid, program_name, title, severity, bounty, timestamp FROM hacktivity ORDER BY timestamp DESC",
                ).map_err(|e| BountyError::Database(format!("Query failed: {}", e)))?;
                let rows = stmt.query_map([], row_to_event)
                    .map_err(|e| BountyError::Database(format!("Query error: {}", e)))?;
                for row in rows {
                    events.push(row.map_err(|e| BountyError::Database(format!("Row error: {}", e)))?);
                }
            }
        }
        Ok(events)
    }
}
