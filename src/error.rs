//! Application error type and its HTTP representation.
//!
//! Every handler-level failure is rendered as a single-line JSON envelope:
//!
//! ```json
//! { "error": "URL not found" }
//! ```
//!
//! Server-side failures never leak details to the client; they are logged
//! and reported as `"Server error"`.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

/// Message returned to clients for every 5xx response.
pub const SERVER_ERROR_MESSAGE: &str = "Server error";

/// JSON body of an error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Errors produced by services and handlers.
#[derive(Debug, Error)]
pub enum AppError {
    /// Client-correctable input problem (HTTP 400).
    #[error("{0}")]
    Validation(String),

    /// Requested resource does not exist (HTTP 404).
    #[error("{0}")]
    NotFound(String),

    /// Database unreachable or a query failed (HTTP 500).
    #[error("Storage error: {0}")]
    Storage(#[from] sqlx::Error),

    /// Any other server-side failure (HTTP 500).
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Storage(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message shown to the client.
    pub fn public_message(&self) -> String {
        match self {
            AppError::Validation(message) | AppError::NotFound(message) => message.clone(),
            AppError::Storage(_) | AppError::Internal(_) => SERVER_ERROR_MESSAGE.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }

        let body = ErrorBody {
            error: self.public_message(),
        };

        (status, Json(body)).into_response()
    }
}
