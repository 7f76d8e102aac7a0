pub mod routes;
pub mod models;
pub mod errors;
pub mod auth;

use std::sync::Arc;
use axum::middleware;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::db::Database;
use crate::errors::BountyError;
use crate::notify::SubscriptionHub;

#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub hub: Arc<SubscriptionHub>,
    pub webhook_url: Option<String>,
    /// Bearer token required on mutating routes; `None` runs open.
    pub api_token: Option<String>,
}

pub fn create_app_state(
    db_path: &str,
    webhook_url: Option<String>,
    api_token: Option<String>,
) -> Result<AppState, BountyError> {
    let db = Database::new(db_path)?;
    Ok(AppState {
        db,
        hub: Arc::new(SubscriptionHub::new()),
        webhook_url,
        api_token,
    })
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(routes::health::health_check))
        .route("/api/programs", get(routes::programs::list_programs).post(routes::programs::create_program))
        .route("/api/programs/:id", get(routes::programs::get_program))
        .route("/api/companies", get(routes::companies::list_companies))
        .route("/api/companies/:name", get(routes::companies::get_company))
        .route("/api/reports", get(routes::reports::list_reports).post(routes::reports::submit_report))
        .route("/api/reports/:id", get(routes::reports::get_report))
        .route("/api/reports/:id/bounty", post(routes::reports::award_bounty))
        .route("/api/hacktivity", get(routes::hacktivity::list_hacktivity))
        .route("/api/leaderboard", get(routes::leaderboard::get_leaderboard))
        .route("/api/profiles", post(routes::profiles::upsert_profile))
        .route("/api/profiles/:id", get(routes::profiles::get_profile))
        .route("/api/profiles/:id/stats", get(routes::profiles::get_profile_stats))
        .route("/api/stats", get(routes::stats::get_counts))
        .layer(middleware::from_fn_with_state(state.clone(), auth::api_auth_middleware))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
