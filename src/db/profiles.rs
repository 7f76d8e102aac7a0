use std::str::FromStr;

use crate::errors::BountyError;
use crate::models::{Profile, Role};
use super::Database;

fn row_to_profile(row: &rusqlite::Row) -> rusqlite::Result<Profile> {
    let role_str: String = row.get(3)?;
    Ok(Profile {
        id: row.get(0)?,
        name: row.get(1)?,
        email: row.get(2)?,
        role: Role::from_str(&role_str).unwrap_or(Role::Researcher),
        company_name: row.get(4)?,
        reputation: row.get(5)?,
    })
}

impl Database {
    pub fn upsert_profile(&self, profile: &Profile) -> Result<(), BountyError> {
        let conn = self.conn.lock().unwrap();
        conn.execute(
            "INSERT INTO profiles (id, name, email, role, company_name, reputation) VALUES (?1, ?2, ?3, ?4, ?5, ?6)
             ON CONFLICT(id) DO UPDATE SET name = excluded.name, email = excluded.email, role = excluded.role, company_name = excluded.company_name",
            rusqlite::params![
                profile.id,
                profile.name,
                profile.email,
                profile.role.as_str(),
                profile.company_name,
                profile.reputation,
            ],
        ).map_err(|e| BountyError::Database(format!("Failed to upsert profile: {}", e)))?;
        Ok(())
    }

    pub fn get_profile(&self, id: &str) -> Result<Option<Profile>, BountyError> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn.prepare(
            "SELECT id, name, email, role, company_name, reputation FROM profiles WHERE id = ?1",
        ).map_err(|e| BountyError::Database(format!("Query failed: {}", e)))?;
        match stmt.query_row(rusqlite::params![id], row_to_profile) {
            Ok(profile) => Ok(Some(profile)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(BountyError::Database(format!("Query error: {}", e))),
        }
    }

    /// True when any profile claims the company name. Used for company
    /// pages of companies that have not published a program yet.
    pub fn company_profile_exists(&self, company_name: &str) -> Result<bool, BountyError> {
        let conn = self.conn.lock().unwrap();
        let count: i64 = conn.query_row(
            "SELECT COUNT(*) FROM profiles WHERE company_name = ?1",
            rusqlite::params![company_name],
            |row| row.get(0),
        ).map_err(|e| BountyError::Database(format!("Count failed: {}", e)))?;
        Ok(count > 0)
    }

    pub fn add_reputation(&self, id: &str, points: i64) -> Result<(), BountyError> {
        let conn = self.conn.lock().unwrap();
        conn.execute(
            "UPDATE profiles SET reputation = reputation + ?2 WHERE id = ?1",
            rusqlite::params![id, points],
        ).map_err(|e| BountyError::Database(format!("Update failed: {}", e)))?;
        Ok(())
    }

    pub fn count_researchers(&self) -> Result<i64, BountyError> {
        let conn = self.conn.lock().unwrap();
        conn.query_row(
            "SELECT COUNT(*) FROM profiles WHERE role = 'researcher'",
            [],
            |row| row.get(0),
        ).map_err(|e| BountyError::Database(format!("Count failed: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_profile(id: &str, role: Role) -> Profile {
        Profile {
            id: id.to_string(),
            name: "Jordan".to_string(),
            email: "jordan@example.com".to_string(),
            role,
            company_name: matches!(role, Role::Company).then(|| "Acme Corp".to_string()),
            reputation: 0,
        }
    }

    #[test]
    fn test_db_upsert_and_get_profile() {
        let db = Database::in_memory().unwrap();
        db.upsert_profile(&make_profile("uid-1", Role::Researcher)).unwrap();

        let profile = db.get_profile("uid-1").unwrap().unwrap();
        assert_eq!(profile.role, Role::Researcher);
        assert_eq!(profile.reputation, 0);
    }

    #[test]
    fn test_db_upsert_keeps_reputation() {
        let db = Database::in_memory().unwrap();
        db.upsert_profile(&make_profile("uid-1", Role::Researcher)).unwrap();
        db.add_reputation("uid-1", 50).unwrap();

        // Re-upserting profile details must not reset earned reputation.
        let mut updated = make_profile("uid-1", Role::Researcher);
        updated.name = "Jordan K".to_string();
        db.upsert_profile(&updated).unwrap();

        let profile = db.get_profile("uid-1").unwrap().unwrap();
        assert_eq!(profile.name, "Jordan K");
        assert_eq!(profile.reputation, 50);
    }

    #[test]
    fn test_db_company_profile_exists() {
        let db = Database::in_memory().unwrap();
        db.upsert_profile(&make_profile("uid-c", Role::Company)).unwrap();
        assert!(db.company_profile_exists("Acme Corp").unwrap());
        assert!(!db.company_profile_exists("Globex").unwrap());
    }

    #[test]
    fn test_db_count_researchers() {
        let db = Database::in_memory().unwrap();
        db.upsert_profile(&make_profile("uid-1", Role::Researcher)).unwrap();
        db.upsert_profile(&make_profile("uid-2", Role::Researcher)).unwrap();
        db.upsert_profile(&make_profile("uid-c", Role::Company)).unwrap();
        assert_eq!(db.count_researchers().unwrap(), 2);
    }
}
