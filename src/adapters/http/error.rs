//! Error responses for the HTTP API.
//!
//! Every response with a status of 400 or above carries an
//! [`ErrorResponse`] body.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::collections::BTreeMap;

use crate::domain::foundation::{DomainError, ErrorCode};

/// Standard error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    pub details: BTreeMap<String, String>,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: BTreeMap::new(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new("BAD_REQUEST", message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new("INTERNAL_ERROR", message)
    }
}

impl From<&DomainError> for ErrorResponse {
    fn from(err: &DomainError) -> Self {
        Self {
            code: err.code.to_string(),
            message: err.message.clone(),
            details: err
                .details
                .iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
        }
    }
}

/// HTTP status for a domain error code.
pub fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::ValidationFailed => StatusCode::BAD_REQUEST,
        ErrorCode::SessionNotFound | ErrorCode::DilemmaNotFound => StatusCode::NOT_FOUND,
        ErrorCode::InvalidStateTransition | ErrorCode::ReflectionInProgress => {
            StatusCode::CONFLICT
        }
        ErrorCode::GenerationFailed => StatusCode::BAD_GATEWAY,
        ErrorCode::RemoteUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        ErrorCode::StorageError | ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Wrapper turning a `DomainError` into a response.
#[derive(Debug)]
pub struct ApiError(pub DomainError);

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = status_for(self.0.code);
        if status.is_server_error() {
            tracing::error!(error = %self.0, "Request failed");
        }
        (status, Json(ErrorResponse::from(&self.0))).into_response()
    }
}

/// Response for a request body that failed to parse.
pub fn rejection_response(rejection: JsonRejection) -> Response {
    let mut body = ErrorResponse::bad_request("Invalid request body");
    body.details
        .insert("reason".to_string(), rejection.body_text());
    (rejection.status(), Json(body)).into_response()
}
