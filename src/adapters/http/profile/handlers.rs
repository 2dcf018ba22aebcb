//! HTTP handlers for profile endpoints.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::application::handlers::profile::GetProfileHandler;
use crate::application::SessionRuntime;

use super::dto::ProfileResponse;

#[derive(Clone)]
pub struct ProfileHandlers {
    get_handler: Arc<GetProfileHandler>,
}

impl ProfileHandlers {
    pub fn new(runtime: Arc<SessionRuntime>) -> Self {
        Self {
            get_handler: Arc::new(GetProfileHandler::new(runtime)),
        }
    }
}

/// GET /api/profile - Ethical profile of the current session
pub async fn get_profile(State(handlers): State<ProfileHandlers>) -> Response {
    let profile = handlers.get_handler.handle().await;
    (StatusCode::OK, Json(ProfileResponse::from(profile))).into_response()
}
