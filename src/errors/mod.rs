pub mod types;

pub use types::BountyError;
