//! HTTP handlers for session endpoints.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::application::handlers::session::{
    AdvanceDilemmaHandler, AnswerDilemmaCommand, AnswerDilemmaHandler, ClearSessionHandler,
    DrainNotificationsHandler, GenerateDilemmaHandler, GetSessionHandler, ListAnswersHandler,
};
use crate::application::SessionRuntime;

use super::super::error::{rejection_response, ApiError};
use super::dto::{
    AnswerListResponse, AnswerRequest, AnswerResponse, CurrentDilemmaResponse, GenerateRequest,
    NotificationResponse, SessionResponse,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct SessionHandlers {
    get_handler: Arc<GetSessionHandler>,
    answer_handler: Arc<AnswerDilemmaHandler>,
    list_answers_handler: Arc<ListAnswersHandler>,
    advance_handler: Arc<AdvanceDilemmaHandler>,
    generate_handler: Arc<GenerateDilemmaHandler>,
    clear_handler: Arc<ClearSessionHandler>,
    notifications_handler: Arc<DrainNotificationsHandler>,
}

impl SessionHandlers {
    pub fn new(runtime: Arc<SessionRuntime>) -> Self {
        Self {
            get_handler: Arc::new(GetSessionHandler::new(runtime.clone())),
            answer_handler: Arc::new(AnswerDilemmaHandler::new(runtime.clone())),
            list_answers_handler: Arc::new(ListAnswersHandler::new(runtime.clone())),
            advance_handler: Arc::new(AdvanceDilemmaHandler::new(runtime.clone())),
            generate_handler: Arc::new(GenerateDilemmaHandler::new(runtime.clone())),
            clear_handler: Arc::new(ClearSessionHandler::new(runtime.clone())),
            notifications_handler: Arc::new(DrainNotificationsHandler::new(runtime)),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// GET /api/session - Current session view
pub async fn get_session(State(handlers): State<SessionHandlers>) -> Response {
    let snapshot = handlers.get_handler.handle().await;
    (StatusCode::OK, Json(SessionResponse::from(snapshot))).into_response()
}

/// POST /api/session/answers - Answer the current dilemma
pub async fn answer_dilemma(
    State(handlers): State<SessionHandlers>,
    body: Result<Json<AnswerRequest>, JsonRejection>,
) -> Response {
    let Json(req) = match body {
        Ok(body) => body,
        Err(rejection) => return rejection_response(rejection),
    };

    let cmd = AnswerDilemmaCommand {
        response: req.response,
    };

    match handlers.answer_handler.handle(cmd).await {
        Ok(result) => (StatusCode::CREATED, Json(AnswerResponse::from(result))).into_response(),
        Err(e) => ApiError(e).into_response(),
    }
}

/// GET /api/session/answers - List recorded answers
pub async fn list_answers(State(handlers): State<SessionHandlers>) -> Response {
    let answers = handlers.list_answers_handler.handle().await;
    (StatusCode::OK, Json(AnswerListResponse::from(answers))).into_response()
}

/// POST /api/session/next - Show the next corpus dilemma
pub async fn next_dilemma(State(handlers): State<SessionHandlers>) -> Response {
    match handlers.advance_handler.handle().await {
        Ok(current) => (StatusCode::OK, Json(CurrentDilemmaResponse::from(current))).into_response(),
        Err(e) => ApiError(e).into_response(),
    }
}

/// POST /api/session/generate - Generate a dilemma remotely
pub async fn generate_dilemma(
    State(handlers): State<SessionHandlers>,
    body: Option<Json<GenerateRequest>>,
) -> Response {
    let req = body.map(|Json(req)| req).unwrap_or_default();
    let cmd = req.into_command(&mut rand::thread_rng());

    match handlers.generate_handler.handle(cmd).await {
        Ok(result) => (StatusCode::OK, Json(CurrentDilemmaResponse::from(result))).into_response(),
        Err(e) => ApiError(e).into_response(),
    }
}

/// DELETE /api/session - Clear the session and start a new one
pub async fn clear_session(State(handlers): State<SessionHandlers>) -> Response {
    match handlers.clear_handler.handle().await {
        Ok(snapshot) => (StatusCode::OK, Json(SessionResponse::from(snapshot))).into_response(),
        Err(e) => ApiError(e).into_response(),
    }
}

/// GET /api/notifications - Take pending notifications
pub async fn drain_notifications(State(handlers): State<SessionHandlers>) -> Response {
    let notifications: Vec<NotificationResponse> = handlers
        .notifications_handler
        .handle()
        .await
        .into_iter()
        .map(Into::into)
        .collect();
    (StatusCode::OK, Json(notifications)).into_response()
}
