//! Unified error handling.
//!
//! Provides a unified `AppError` type for route handlers. All handlers
//! return `Result<T, AppError>`; error responses are JSON objects of the
//! shape `{"error": "<message>"}`, and server-side failures are logged and
//! surfaced as an opaque `internal_error` without leaking internals.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::store::StoreError;

/// Application-level error type for the server.
#[derive(Debug, Error)]
pub enum AppError {
    /// Malformed or out-of-range client input. The message names the first
    /// violated constraint.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Missing or incorrect admin token.
    #[error("Unauthorized")]
    Unauthorized,

    /// Referenced entity absent.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Document store operation failed.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// JSON error body, matching the wire shape of every error response.
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if matches!(self, Self::Store(_) | Self::Internal(_)) {
            tracing::error!(error = %self, "Request error");
        }

        let status = match &self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Store(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // Don't expose internal error details to clients
        let message = match &self {
            Self::Validation(msg) => msg.clone(),
            Self::Unauthorized => "unauthorized".to_string(),
            Self::NotFound(what) => format!("{what} not found"),
            Self::Store(_) | Self::Internal(_) => "internal_error".to_string(),
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
