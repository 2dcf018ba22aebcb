//! HTTP adapters - REST API implementations.
//!
//! Each area has its own adapter exposing DTOs, handlers and routes.
//! [`api_router`] assembles them into the application router.

pub mod error;
pub mod profile;
pub mod session;
pub mod system;

use std::sync::Arc;
use std::time::Duration;

use axum::{http::HeaderValue, Router};
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::warn;

use crate::application::SessionRuntime;
use crate::ports::RagService;

pub use error::{ApiError, ErrorResponse};
pub use profile::{profile_routes, ProfileHandlers};
pub use session::{session_routes, SessionHandlers};
pub use system::{system_routes, SystemState};

/// Cross-cutting HTTP settings applied to every route.
#[derive(Debug, Clone)]
pub struct HttpSettings {
    pub request_timeout: Duration,
    pub cors_origins: Vec<String>,
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            request_timeout: Duration::from_secs(150),
            cors_origins: Vec::new(),
        }
    }
}

/// Builds the full application router.
pub fn api_router(
    runtime: Arc<SessionRuntime>,
    rag: Option<Arc<dyn RagService>>,
    settings: &HttpSettings,
) -> Router {
    let api = Router::new()
        .merge(session_routes(SessionHandlers::new(runtime.clone())))
        .merge(profile_routes(ProfileHandlers::new(runtime)));

    Router::new()
        .nest("/api", api)
        .merge(system_routes(SystemState::new(rag)))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors_layer(&settings.cors_origins))
                .layer(TimeoutLayer::new(settings.request_timeout)),
        )
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    if origins.is_empty() {
        return layer.allow_origin(Any);
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(%origin, "Ignoring unparseable CORS origin");
                None
            }
        })
        .collect();
    layer.allow_origin(AllowOrigin::list(allowed))
}
