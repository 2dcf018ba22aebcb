//! HTTP adapter for profile endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::ProfileResponse;
pub use handlers::ProfileHandlers;
pub use routes::profile_routes;
