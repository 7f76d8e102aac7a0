pub mod connection;
pub mod schema;
pub mod programs;
pub mod reports;
pub mod profiles;
pub mod leaderboard;
pub mod hacktivity;

pub use connection::Database;
