use std::path::PathBuf;
use tracing::info;

use crate::api;
use crate::cli::commands::ServeArgs;
use crate::config;
use crate::errors::BountyError;

pub async fn handle_serve(args: ServeArgs) -> Result<(), BountyError> {
    // Config file values fill in; CLI flags keep their defaults only
    // when the config is silent.
    let mut host = args.host;
    let mut port = args.port;
    let mut db_path = args.db;
    let mut webhook_url = None;
    let mut api_token = std::env::var("SECUREBOUNTY_API_TOKEN")
        .ok()
        .filter(|t| !t.is_empty());

    if let Some(config_path) = &args.config {
        let config = config::parse_config(&PathBuf::from(config_path)).await?;
        if let Some(server) = config.server {
            if let Some(h) = server.host {
                host = h;
            }
            if let Some(p) = server.port {
                port = p;
            }
        }
        if let Some(database) = config.database {
            if let Some(path) = database.path {
                db_path = path;
            }
        }
        if let Some(notify) = config.notify {
            webhook_url = notify.webhook_url;
        }
        if let Some(auth) = config.auth {
            if auth.api_token.is_some() {
                api_token = auth.api_token;
            }
        }
    }

    info!(host = %host, port, db = %db_path, auth = api_token.is_some(), "Starting API server");

    let state = api::create_app_state(&db_path, webhook_url, api_token)?;
    let app = api::build_router(state);

    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on {}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| BountyError::Internal(format!("Server error: {}", e)))?;

    Ok(())
}
