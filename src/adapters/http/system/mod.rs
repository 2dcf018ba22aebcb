//! HTTP adapter for health and catalogue endpoints.

mod handlers;
mod routes;

pub use handlers::{
    CatalogueSource, HealthResponse, RagStatus, SystemState, TopicsResponse,
};
pub use routes::system_routes;
