use crate::errors::BountyError;
use crate::models::Program;
use super::Database;

fn row_to_program(row: &rusqlite::Row) -> rusqlite::Result<Program> {
    let vulnerability_types: String = row.get(8)?;
    let scope: String = row.get(9)?;
    Ok(Program {
        id: row.get(0)?,
        name: row.get(1)?,
        company: row.get(2)?,
        description: row.get(3)?,
        logo: row.get(4)?,
        bounty_range: row.get(5)?,
        min_bounty: row.get(6)?,
        max_bounty: row.get(7)?,
        vulnerability_types: serde_json::from_str(&vulnerability_types).unwrap_or_default(),
        scope: serde_json::from_str(&scope).unwrap_or_default(),
        reports_count: row.get(10)?,
        resolved_count: row.get(11)?,
        researchers_count: row.get(12)?,
        total_paid: row.get(13)?,
        critical_vulns: row.get(14)?,
        average_time: row.get(15)?,
        rating: row.get(16)?,
        status: row.get(17)?,
        is_new: row.get::<_, i64>(18)? != 0,
        launched_at: row.get(19)?,
    })
}

const PROGRAM_COLUMNS: &str = "id, name, company, description, logo, bounty_range, min_bounty, max_bounty, vulnerability_types, scope, reports_count, resolved_count, researchers_count, total_paid, critical_vulns, average_time, rating, status, is_new, launched_at";

impl Database {
    pub fn insert_program(&self, program: &Program) -> Result<(), BountyError> {
        let conn = self.conn.lock().unwrap();
        conn.execute(
            "INSERT INTO programs (id, name, company, description, logo, bounty_range, min_bounty, max_bounty, vulnerability_types, scope, reports_count, resolved_count, researchers_count, total_paid, critical_vulns, average_time, rating, status, is_new, launched_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16, ?17, ?18, ?19, ?20)",
            rusqlite::params![
                program.id,
                program.name,
                program.company,
                program.description,
                program.logo,
                program.bounty_range,
                program.min_bounty,
                program.max_bounty,
                serde_json::to_string(&program.vulnerability_types)?,
                serde_json::to_string(&program.scope)?,
                program.reports_count,
                program.resolved_count,
                program.researchers_count,
                program.total_paid,
                program.critical_vulns,
                program.average_time,
                program.rating,
                program.status,
                program.is_new as i64,
                program.launched_at,
            ],
        ).map_err(|e| BountyError::Database(format!("Failed to insert program: {}", e)))?;
        Ok(())
    }

    pub fn get_program(&self, id: &str) -> Result<Option<Program>, BountyError> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn.prepare(&format!("SELECT {} FROM programs WHERE id = ?1", PROGRAM_COLUMNS))
            .map_err(|e| BountyError::Database(format!("Query failed: {}", e)))?;
        match stmt.query_row(rusqlite::params![id], row_to_program) {
            Ok(program) => Ok(Some(program)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(BountyError::Database(format!("Query error: {}", e))),
        }
    }

    pub fn list_programs(&self) -> Result<Vec<Program>, BountyError> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn.prepare(&format!("SELECT {} FROM programs ORDER BY launched_at DESC", PROGRAM_COLUMNS))
            .map_err(|e| BountyError::Database(format!("Query failed: {}", e)))?;
        let rows = stmt.query_map([], row_to_program)
            .map_err(|e| BountyError::Database(format!("Query error: {}", e)))?;

        let mut programs = Vec::new();
        for row in rows {
            programs.push(row.map_err(|e| BountyError::Database(format!("Row error: {}", e)))?);
        }
        Ok(programs)
    }

    pub fn programs_by_company(&self, company: &str) -> Result<Vec<Program>, BountyError> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn.prepare(&format!("SELECT {} FROM programs WHERE company = ?1 ORDER BY launched_at DESC", PROGRAM_COLUMNS))
            .map_err(|e| BountyError::Database(format!("Query failed: {}", e)))?;
        let rows = stmt.query_map(rusqlite::params![company], row_to_program)
            .map_err(|e| BountyError::Database(format!("Query error: {}", e)))?;

        let mut programs = Vec::new();
        for row in rows {
            programs.push(row.map_err(|e| BountyError::Database(format!("Row error: {}", e)))?);
        }
        Ok(programs)
    }

    /// Bumps the submission counter after a report lands. Lost updates
    /// under concurrent submissions are tolerated for this display value.
    pub fn increment_reports_count(&self, program_id: &str) -> Result<(), BountyError> {
        let conn = self.conn.lock().unwrap();
        conn.execute(
            "UPDATE programs SET reports_count = reports_count + 1 WHERE id = ?1",
            rusqlite::params![program_id],
        ).map_err(|e| BountyError::Database(format!("Update failed: {}", e)))?;
        Ok(())
    }

    pub fn increment_resolved_count(&self, program_name: &str) -> Result<(), BountyError> {
        let conn = self.conn.lock().unwrap();
        conn.execute(
            "UPDATE programs SET resolved_count = resolved_count + 1 WHERE name = ?1",
            rusqlite::params![program_name],
        ).map_err(|e| BountyError::Database(format!("Update failed: {}", e)))?;
        Ok(())
    }

    pub fn count_programs(&self) -> Result<i64, BountyError> {
        let conn = self.conn.lock().unwrap();
        conn.query_row("SELECT COUNT(*) FROM programs", [], |row| row.get(0))
            .map_err(|e| BountyError::Database(format!("Count failed: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::{validate_program, ProgramRegistration};

    fn make_program(name: &str, company: &str) -> Program {
        validate_program(&ProgramRegistration {
            name: Some(name.to_string()),
            company: Some(company.to_string()),
            description: Some("All public assets".to_string()),
            min_bounty: Some(100.0),
            max_bounty: Some(10000.0),
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn test_db_insert_and_get_program() {
        let db = Database::in_memory().unwrap();
        let program = make_program("Acme Web", "Acme Corp");
        db.insert_program(&program).unwrap();

        let fetched = db.get_program(&program.id).unwrap().unwrap();
        assert_eq!(fetched.name, "Acme Web");
        assert_eq!(fetched.logo, "AC");
        assert_eq!(fetched.bounty_range, "$100 - $10000");
        assert!(fetched.is_new);
        assert!(fetched.scope.is_empty());
    }

    #[test]
    fn test_db_get_missing_program() {
        let db = Database::in_memory().unwrap();
        assert!(db.get_program("nope").unwrap().is_none());
    }

    #[test]
    fn test_db_programs_by_company() {
        let db = Database::in_memory().unwrap();
        db.insert_program(&make_program("Web", "Acme Corp")).unwrap();
        db.insert_program(&make_program("Mobile", "Acme Corp")).unwrap();
        db.insert_program(&make_program("Other", "Globex")).unwrap();

        let acme = db.programs_by_company("Acme Corp").unwrap();
        assert_eq!(acme.len(), 2);
        assert_eq!(db.programs_by_company("Globex").unwrap().len(), 1);
        assert!(db.programs_by_company("Initech").unwrap().is_empty());
    }

    #[test]
    fn test_db_increment_reports_count() {
        let db = Database::in_memory().unwrap();
        let program = make_program("Web", "Acme Corp");
        db.insert_program(&program).unwrap();

        db.increment_reports_count(&program.id).unwrap();
        db.increment_reports_count(&program.id).unwrap();

        let fetched = db.get_program(&program.id).unwrap().unwrap();
        assert_eq!(fetched.reports_count, 2);
    }

    #[test]
    fn test_db_count_programs() {
        let db = Database::in_memory().unwrap();
        assert_eq!(db.count_programs().unwrap(), 0);
        db.insert_program(&make_program("Web", "Acme Corp")).unwrap();
        assert_eq!(db.count_programs().unwrap(), 1);
    }
}
