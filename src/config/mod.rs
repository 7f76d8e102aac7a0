pub mod parser;
pub mod types;

pub use parser::parse_config;
pub use types::{AuthConfig, ServerConfig};
