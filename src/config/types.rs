use serde::{Deserialize, Serialize};

/// Optional YAML server configuration. CLI flags win over config values;
/// everything here has a sensible default.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct ServerConfig {
    pub server: Option<HttpConfig>,
    pub database: Option<DatabaseConfig>,
    pub notify: Option<NotifyConfig>,
    pub auth: Option<AuthConfig>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HttpConfig {
    pub host: Option<String>,
    pub port: Option<u16>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    pub path: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NotifyConfig {
    /// External listener that receives every published change event.
    pub webhook_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    /// Bearer token required on mutating routes. Overrides the
    /// SECUREBOUNTY_API_TOKEN environment variable when set.
    pub api_token: Option<String>,
}
