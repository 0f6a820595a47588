//! Axum router configuration for strategy session endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    close_session, copy_document, export_document, generate_strategy, get_document, get_session,
    reset_session, start_session, submit_message, StrategyAppState,
};

/// Create the session API router, mounted at `/api/sessions`.
///
/// # Routes
///
/// - `POST /` - Start a session
/// - `GET /:id` - Session state
/// - `DELETE /:id` - Close a session
/// - `POST /:id/messages` - Submit an answer
/// - `POST /:id/reset` - Start over
/// - `POST /:id/generate` - Generate the strategy
/// - `GET /:id/document` - Rendered notepad text
/// - `GET /:id/document/export` - Download as a text file
/// - `POST /:id/document/copy` - Copy to clipboard
pub fn strategy_routes() -> Router<StrategyAppState> {
    Router::new()
        .route("/", post(start_session))
        .route("/:id", get(get_session).delete(close_session))
        .route("/:id/messages", post(submit_message))
        .route("/:id/reset", post(reset_session))
        .route("/:id/generate", post(generate_strategy))
        .route("/:id/document", get(get_document))
        .route("/:id/document/export", get(export_document))
        .route("/:id/document/copy", post(copy_document))
}

/// Create the complete strategy module router.
///
/// # Example
///
/// ```ignore
/// let app = strategy_router().with_state(state);
/// ```
pub fn strategy_router() -> Router<StrategyAppState> {
    Router::new().nest("/api/sessions", strategy_routes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::time::Duration;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use crate::adapters::ai::MockStrategyGenerator;
    use crate::adapters::document::{InMemoryClipboard, LocalFileExporter};
    use crate::adapters::storage::InMemorySessionStore;
    use crate::application::MessagePacer;
    use crate::config::PacingConfig;

    fn state(dir: &std::path::Path) -> StrategyAppState {
        StrategyAppState {
            store: Arc::new(InMemorySessionStore::new()),
            generator: Arc::new(MockStrategyGenerator::new()),
            exporter: Arc::new(LocalFileExporter::new(dir)),
            clipboard: Arc::new(InMemoryClipboard::new()),
            pacer: MessagePacer::new(PacingConfig::immediate()),
            generation_timeout: Duration::from_secs(5),
        }
    }

    #[tokio::test]
    async fn router_mounts_start_endpoint() {
        let dir = tempfile::TempDir::new().unwrap();
        let app = strategy_router().with_state(state(dir.path()));

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/sessions")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
    }

    #[tokio::test]
    async fn unknown_session_is_404() {
        let dir = tempfile::TempDir::new().unwrap();
        let app = strategy_router().with_state(state(dir.path()));

        let response = app
            .oneshot(
                Request::builder()
                    .uri(format!("/api/sessions/{}", uuid::Uuid::new_v4()))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
