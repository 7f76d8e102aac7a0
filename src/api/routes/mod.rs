pub mod health;
pub mod programs;
pub mod companies;
pub mod reports;
pub mod hacktivity;
pub mod leaderboard;
pub mod profiles;
pub mod stats;
