//! Axum application setup
//!
//! Creates and configures the Axum application with routes and middleware.

use crate::{config::Settings, session::BrowserManager};
use axum::{
    Router, middleware,
    routing::{get, post},
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Browser lifecycle manager
    pub manager: Arc<BrowserManager>,
    /// Application settings
    pub settings: Arc<Settings>,
    /// Server start time for uptime calculation
    pub start_time: std::time::Instant,
}

/// Create the main Axum application with routes and middleware
///
/// Fails when the configured proxy descriptors cannot be parsed.
pub fn create_app(settings: Settings) -> crate::Result<Router> {
    let manager = Arc::new(BrowserManager::new(settings.clone())?);
    Ok(create_app_with_manager(manager, Arc::new(settings)))
}

/// Create the application around an existing manager
///
/// The server CLI shares the manager with its shutdown path so a final
/// close can reach the same browser the handlers use.
pub fn create_app_with_manager(manager: Arc<BrowserManager>, settings: Arc<Settings>) -> Router {
    if settings.server.api_key.is_none() {
        tracing::warn!("API key not configured, authenticated routes accept any caller");
    }

    let state = AppState {
        manager,
        settings,
        start_time: std::time::Instant::now(),
    };

    // /ping sits outside the auth layer so health probes never need a key
    Router::new()
        .route("/navigate", post(super::handlers::navigate))
        .route("/cleanup", post(super::handlers::cleanup))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            super::handlers::require_api_key,
        ))
        .route("/ping", get(super::handlers::ping))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
