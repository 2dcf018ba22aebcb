//! HTTP routes for service status endpoints.

use axum::{routing::get, Router};

use super::handlers::{health, topics, SystemState};

/// Creates the status router. `/health` sits at the root, `/api/topics` under the API.
pub fn system_routes(state: SystemState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/topics", get(topics))
        .with_state(state)
}
