use std::path::Path;
use crate::errors::BountyError;
use super::types::ServerConfig;

pub async fn parse_config(path: &Path) -> Result<ServerConfig, BountyError> {
    if !path.exists() {
        return Err(BountyError::Config(format!("Config file not found: {}", path.display())));
    }

    let metadata = tokio::fs::metadata(path).await?;
    if metadata.len() > 1_048_576 {
        return Err(BountyError::Config("Config file exceeds 1MB limit".into()));
    }

    let content = tokio::fs::read_to_string(path).await?;
    let config: ServerConfig = serde_yaml::from_str(&content)?;

    validate_semantics(&config)?;

    Ok(config)
}

fn validate_semantics(config: &ServerConfig) -> Result<(), BountyError> {
    if let Some(server) = &config.server {
        if server.port == Some(0) {
            return Err(BountyError::Config("server.port must be non-zero".into()));
        }
    }
    if let Some(notify) = &config.notify {
        if let Some(url) = &notify.webhook_url {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(BountyError::Config(format!(
                    "notify.webhook_url must be an http(s) URL, got '{}'",
                    url
                )));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    async fn parse_str(yaml: &str) -> Result<ServerConfig, BountyError> {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(yaml.as_bytes()).unwrap();
        parse_config(file.path()).await
    }

    #[tokio::test]
    async fn test_parse_full_config() {
        let config = parse_str(
            "server:\n  host: 0.0.0.0\n  port: 9000\ndatabase:\n  path: ./data/bounty.db\nnotify:\n  webhook_url: https://hooks.example.com/feed\nauth:\n  api_token: hunter2\n",
        ).await.unwrap();
        assert_eq!(config.server.unwrap().port, Some(9000));
        assert_eq!(config.database.unwrap().path.as_deref(), Some("./data/bounty.db"));
        assert_eq!(config.auth.unwrap().api_token.as_deref(), Some("hunter2"));
    }

    #[tokio::test]
    async fn test_empty_config_is_valid() {
        let config = parse_str("{}\n").await.unwrap();
        assert!(config.server.is_none());
    }

    #[tokio::test]
    async fn test_missing_file_rejected() {
        let err = parse_config(Path::new("/nonexistent/config.yaml")).await.unwrap_err();
        assert!(matches!(err, BountyError::Config(_)));
    }

    #[tokio::test]
    async fn test_bad_webhook_scheme_rejected() {
        let err = parse_str("notify:\n  webhook_url: ftp://example.com\n").await.unwrap_err();
        assert!(matches!(err, BountyError::Config(_)));
    }

    #[tokio::test]
    async fn test_zero_port_rejected() {
        let err = parse_str("server:\n  port: 0\n").await.unwrap_err();
        assert!(matches!(err, BountyError::Config(_)));
    }
}
