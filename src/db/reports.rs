use chrono::Utc;
use std::str::FromStr;

use crate::errors::BountyError;
use crate::models::{Report, ReportStatus, Severity};
use super::Database;

const REPORT_COLUMNS: &str = "id, title, program_name, severity, status, reporter_name, reporter_uid, submitted_at, last_activity, cvss_score, weakness, vulnerable_url, description, steps_to_reproduce, proof_of_concept, impact_assessment, suggested_fix, bounty";

fn row_to_report(row: &rusqlite::Row) -> rusqlite::Result<Report> {
    let severity_str: String = row.get(3)?;
    let status_str: String = row.get(4)?;

    // Rows predating the severity check fall back to the lowest tier.
    let severity = Severity::from_str(&severity_str).unwrap_or(Severity::Low);
    let status: ReportStatus = serde_json::from_value(serde_json::Value::String(status_str))
        .unwrap_or(ReportStatus::Pending);

    Ok(Report {
        id: row.get(0)?,
        title: row.get(1)?,
        program_name: row.get(2)?,
        severity,
        status,
        reporter_name: row.get(5)?,
        reporter_uid: row.get(6)?,
        submitted_at: row.get(7)?,
        last_activity: row.get(8)?,
        cvss_score: row.get(9)?,
        weakness: row.get(10)?,
        vulnerable_url: row.get(11)?,
        description: row.get(12)?,
        steps_to_reproduce: row.get(13)?,
        proof_of_concept: row.get(14)?,
        impact_assessment: row.get(15)?,
        suggested_fix: row.get(16)?,
        bounty: row.get(17)?,
    })
}

impl Database {
    pub fn insert_report(&self, report: &Report) -> Result<(), BountyError> {
        let conn = self.conn.lock().unwrap();
        conn.execute(
            "INSERT INTO reports (id, title, program_name, severity, status, reporter_name, reporter_uid, submitted_at, last_activity, cvss_score, weakness, vulnerable_url, description, steps_to_reproduce, proof_of_concept, impact_assessment, suggested_fix, bounty) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16, ?17, ?18)",
            rusqlite::params![
                report.id,
                report.title,
                report.program_name,
                report.severity.as_str(),
                report.status.as_str(),
                report.reporter_name,
                report.reporter_uid,
                report.submitted_at,
                report.last_activity,
                report.cvss_score,
                report.weakness,
                report.vulnerable_url,
                report.description,
                report.steps_to_reproduce,
                report.proof_of_concept,
                report.impact_assessment,
                report.suggested_fix,
                report.bounty,
            ],
        ).map_err(|e| BountyError::Database(format!("Failed to insert report: {}", e)))?;
        Ok(())
    }

    pub fn get_report(&self, id: &str) -> Result<Option<Report>, BountyError> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn.prepare(&format!("SELECT {} FROM reports WHERE id = ?1", REPORT_COLUMNS))
            .map_err(|e| BountyError::Database(format!("Query failed: {}", e)))?;
        match stmt.query_row(rusqlite::params![id], row_to_report) {
            Ok(report) => Ok(Some(report)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(BountyError::Database(format!("Query error: {}", e))),
        }
    }

    pub fn reports_by_reporter(&self, reporter_uid: &str) -> Result<Vec<Report>, BountyError> {
        self.query_reports(
            &format!("SELECT {} FROM reports WHERE reporter_uid = ?1 ORDER BY submitted_at DESC", REPORT_COLUMNS),
            rusqlite::params![reporter_uid],
        )
    }

    pub fn reports_by_program(&self, program_name: &str) -> Result<Vec<Report>, BountyError> {
        self.query_reports(
            &format!("SELECT {} FROM reports WHERE program_name = ?1 ORDER BY submitted_at DESC", REPORT_COLUMNS),
            rusqlite::params![program_name],
        )
    }

    pub fn list_reports(&self) -> Result<Vec<Report>, BountyError> {
        self.query_reports(
            &format!("SELECT {} FROM reports ORDER BY submitted_at DESC", REPORT_COLUMNS),
            rusqlite::params![],
        )
    }

    fn query_reports<P: rusqlite::Params>(&self, sql: &str, params: P) -> Result<Vec<Report>, BountyError> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn.prepare(sql)
            .map_err(|e| BountyError::Database(format!("Query failed: {}", e)))?;
        let rows = stmt.query_map(params, row_to_report)
            .map_err(|e| BountyError::Database(format!("Query error: {}", e)))?;

        let mut reports = Vec::new();
        for row in rows {
            reports.push(row.map_err(|e| BountyError::Database(format!("Row error: {}", e)))?);
        }
        Ok(reports)
    }

    /// Marks a report resolved with the awarded bounty label and returns
    /// the updated row.
    pub fn award_bounty(&self, id: &str, bounty_label: &str) -> Result<Report, BountyError> {
        {
            let conn = self.conn.lock().unwrap();
            let updated = conn.execute(
                "UPDATE reports SET bounty = ?2, status = 'resolved', last_activity = ?3 WHERE id = ?1",
                rusqlite::params![id, bounty_label, Utc::now().to_rfc3339()],
            ).map_err(|e| BountyError::Database(format!("Update failed: {}", e)))?;
            if updated == 0 {
                return Err(BountyError::NotFound(format!("Report {} not found", id)));
            }
        }
        self.get_report(id)?
            .ok_or_else(|| BountyError::NotFound(format!("Report {} not found", id)))
    }

    pub fn count_reports(&self) -> Result<i64, BountyError> {
        let conn = self.conn.lock().unwrap();
        conn.query_row("SELECT COUNT(*) FROM reports", [], |row| row.get(0))
            .map_err(|e| BountyError::Database(format!("Count failed: {}", e)))
    }
}
