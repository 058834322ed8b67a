//! Orderdesk — API error types.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use orderdesk_core::error::ValidationError;
use serde::Serialize;
use thiserror::Error;

/// Startup and runtime errors for the API server.
#[derive(Debug, Error)]
pub enum AppError {
    /// A required environment variable is missing or invalid.
    #[error("configuration error: {0}")]
    Config(String),

    /// Network binding or I/O error.
    #[error("server error: {0}")]
    Server(#[from] std::io::Error),
}

/// JSON body returned for error responses.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Machine-readable error code.
    pub error: &'static str,
    /// Human-readable error message.
    pub message: String,
}

/// Request-scoped errors, mapped onto HTTP responses.
///
/// Validation failures are caller-correctable and never a server fault;
/// not-found is a plain two-case outcome of the lookup. Neither is fatal
/// to the process.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request was rejected by the order validator.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No order exists with the requested id.
    #[error("order not found with id: {0}")]
    OrderNotFound(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_code) = match &self {
            Self::Validation(_) => (StatusCode::BAD_REQUEST, "validation_error"),
            Self::OrderNotFound(_) => (StatusCode::NOT_FOUND, "order_not_found"),
        };

        let body = ErrorBody {
            error: error_code,
            message: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}
