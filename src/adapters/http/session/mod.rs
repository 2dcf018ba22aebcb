//! HTTP adapter for session endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    AnswerListResponse, AnswerRequest, AnswerResponse, AnsweredDilemmaResponse,
    CurrentDilemmaResponse, DilemmaResponse, GenerateRequest, NotificationResponse,
    SessionResponse,
};
pub use handlers::SessionHandlers;
pub use routes::session_routes;
