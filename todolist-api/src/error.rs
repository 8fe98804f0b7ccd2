/// Error handling for the API server
///
/// This module provides a unified error type that maps to HTTP responses.
/// Handlers return `Result<T, ApiError>` which automatically converts to
/// the appropriate HTTP status code and JSON body.
///
/// Two body shapes are on the wire, matching what the web client expects:
/// bad requests carry `{"error": "..."}`; not-found outcomes carry
/// `{"message": "..."}`. Internal errors log the detail and send only a
/// generic `{"error": "..."}` message to the caller.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// API result type alias
pub type ApiResult<T> = Result<T, ApiError>;

/// Unified API error type
#[derive(Debug)]
pub enum ApiError {
    /// Bad request (400) - e.g., a blank status value
    BadRequest(String),

    /// Not found (404) - unknown task, or a status the service rejected
    NotFound(String),

    /// Internal server error (500) - the message is the generic text shown
    /// to the caller; the underlying cause is logged where it occurred
    Internal(String),
}

/// Body shape for 400 and 500 responses
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Human-readable error message
    pub error: String,
}

/// Body shape for 404 responses
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageBody {
    /// Human-readable message
    pub message: String,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            ApiError::NotFound(msg) => write!(f, "Not found: {}", msg),
            ApiError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorBody { error: msg }),
            )
                .into_response(),
            ApiError::NotFound(msg) => (
                StatusCode::NOT_FOUND,
                Json(MessageBody { message: msg }),
            )
                .into_response(),
            ApiError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorBody { error: msg }),
                )
                    .into_response()
            }
        }
    }
}

/// Convert sqlx errors to API errors
///
/// Used where a handler propagates a storage failure with `?` rather than
/// mapping it to an endpoint-specific message. No internal detail reaches
/// the caller; the error itself is logged here.
impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        tracing::error!(error = %err, "Database error");
        ApiError::Internal("An unexpected error occurred.".to_string())
    }
}
