//! HTTP routes for session endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    answer_dilemma, clear_session, drain_notifications, generate_dilemma, get_session,
    list_answers, next_dilemma, SessionHandlers,
};

/// Creates the session router, mounted at `/api`.
pub fn session_routes(handlers: SessionHandlers) -> Router {
    Router::new()
        .route("/session", get(get_session).delete(clear_session))
        .route("/session/answers", get(list_answers).post(answer_dilemma))
        .route("/session/next", post(next_dilemma))
        .route("/session/generate", post(generate_dilemma))
        .route("/notifications", get(drain_notifications))
        .with_state(handlers)
}
