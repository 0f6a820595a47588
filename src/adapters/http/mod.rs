//! HTTP adapters - REST API implementations.
//!
//! [`app_router`] assembles the full service: the strategy session API,
//! a health check, request tracing, and CORS.

pub mod strategy;

pub use strategy::{strategy_router, StrategyAppState};

use axum::{
    http::{header, HeaderValue},
    routing::get,
    Json, Router,
};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

/// GET /health
async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Allows every origin unless an explicit list is configured.
fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = server
        .cors_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    let layer = CorsLayer::new()
        .allow_methods(Any)
        .allow_headers(Any)
        .expose_headers([header::CONTENT_DISPOSITION]);
    if origins.is_empty() {
        layer.allow_origin(Any)
    } else {
        layer.allow_origin(AllowOrigin::list(origins))
    }
}

/// Builds the complete application router.
pub fn app_router(state: StrategyAppState, server: &ServerConfig) -> Router {
    Router::new()
        .route("/health", get(health))
        .merge(strategy_router())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(server))
}
