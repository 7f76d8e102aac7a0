use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Researcher,
    Company,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Researcher => "researcher",
            Role::Company => "company",
            Role::Admin => "admin",
        }
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "researcher" => Ok(Role::Researcher),
            "company" => Ok(Role::Company),
            "admin" => Ok(Role::Admin),
            other => Err(format!("unrecognized role '{}'", other)),
        }
    }
}

/// An account profile. Authentication itself lives in the external
/// identity provider; this mirrors the public profile row keyed by
/// the provider's user id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub company_name: Option<String>,
    pub reputation: i64,
}

/// A row on the researcher leaderboard. `rank` is assigned from the
/// reputation ordering at read time, never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub id: String,
    pub rank: usize,
    pub name: String,
    pub username: String,
    pub country: String,
    pub reputation: i64,
    pub reports_count: i64,
    pub bounties_total: f64,
}
