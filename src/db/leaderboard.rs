use crate::errors::BountyError;
use crate::models::LeaderboardEntry;
use super::Database;

impl Database {
    /// Records a submission on the reporter's leaderboard row, creating
    /// it on first contact. Rows are keyed by the reporter uid.
    pub fn leaderboard_record_submission(&self, uid: &str, name: &str) -> Result<(), BountyError> {
        let conn = self.conn.lock().unwrap();
        conn.execute(
            "INSERT INTO leaderboard (id, name, username, reports_count) VALUES (?1, ?2, ?2, 1)
             ON CONFLICT(id) DO UPDATE SET reports_count = reports_count + 1",
            rusqlite::params![uid, name],
        ).map_err(|e| BountyError::Database(format!("Leaderboard update failed: {}", e)))?;
        Ok(())
    }

    /// Records an awarded bounty: adds the amount to the running total
    /// and the reputation points to the score.
    pub fn leaderboard_record_award(&self, uid: &str, name: &str, amount: f64, reputation: i64) -> Result<(), BountyError> {
        let conn = self.conn.lock().unwrap();
        conn.execute(
            "INSERT INTO leaderboard (id, name, username, reputation, bounties_total) VALUES (?1, ?2, ?2, ?3, ?4)
             ON CONFLICT(id) DO UPDATE SET reputation = reputation + ?3, bounties_total = bounties_total + ?4",
            rusqlite::params![uid, name, reputation, amount],
        ).map_err(|e| BountyError::Database(format!("Leaderboard update failed: {}", e)))?;
        Ok(())
    }

    /// Top researchers by reputation, ranks assigned from the ordering.
    pub fn leaderboard_top(&self, limit: usize) -> Result<Vec<LeaderboardEntry>, BountyError> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn.prepare(
            "SELECT id, name, username, country, reputation, reports_count, bounties_total FROM leaderboard ORDER BY reputation DESC LIMIT ?1",
        ).map_err(|e| BountyError::Database(format!("Query failed: {}", e)))?;

        let rows = stmt.query_map(rusqlite::params![limit as i64], |row: &rusqlite::Row| {
            Ok(LeaderboardEntry {
                id: row.get(0)?,
                rank: 0,
                name: row.get(1)?,
                username: row.get(2)?,
                country: row.get(3)?,
                reputation: row.get(4)?,
                reports_count: row.get(5)?,
                bounties_total: row.get(6)?,
            })
        }).map_err(|e| BountyError::Database(format!("Query error: {}", e)))?;

        let mut entries = Vec::new();
        for row in rows {
            entries.push(row.map_err(|e| BountyError::Database(format!("Row error: {}", e)))?);
        }
        for (i, entry) in entries.iter_mut().enumerate() {
            entry.rank = i + 1;
        }
        Ok(entries)
    }
}
