//! Error handling and HTTP error conversion
//!
//! This module defines how generation errors are translated to HTTP error
//! responses.
//!
//! # Architecture
//!
//! Domain errors from `codegen_core` are converted to HTTP responses at the
//! handler boundary. Every error body has the same shape:
//!
//! ```json
//! { "detail": "The barcode type 'foo' is not valid." }
//! ```
//!
//! | Class        | Status |
//! |--------------|--------|
//! | Client       | 400    |
//! | Unknown route| 404    |
//! | Timed out    | 408    |
//! | Validation   | 422    |
//! | Encoding     | 500    |

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use codegen_core::{ErrorClass, GenerationError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Standard error response for all API errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable error message
    pub detail: String,
}

impl ErrorResponse {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}

/// Axum response wrapper for API errors
///
/// # Example
///
/// ```rust,ignore
/// async fn handler() -> Result<Response, ApiError> {
///     let png = generate_qr(&request, &limits)
///         .map_err(|e| ApiError::generation("QR code", e))?;
///     Ok(png_response(png))
/// }
/// ```
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request was rejected before any encoding (400)
    #[error("{0}")]
    BadRequest(String),

    /// No route matches the request (404)
    #[error("{0}")]
    NotFound(String),

    /// The request did not complete within the configured timeout (408)
    #[error("{0}")]
    Timeout(String),

    /// A query parameter is missing, malformed, or out of range (422)
    #[error("{0}")]
    Validation(String),

    /// Encoding or rendering failed (500)
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    /// Create a client error
    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::BadRequest(message.into())
    }

    /// Create a not found error
    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError::NotFound(message.into())
    }

    /// Create a timeout error
    pub fn timeout(message: impl Into<String>) -> Self {
        ApiError::Timeout(message.into())
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::Validation(message.into())
    }

    /// Create an internal server error
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::Internal(message.into())
    }

    /// Convert a generation error raised while producing a `kind` image.
    ///
    /// Rejected requests keep their own message; encoder failures are
    /// wrapped so the client can tell which generator failed.
    pub fn generation(kind: &str, err: GenerationError) -> Self {
        match err.class() {
            ErrorClass::Client => ApiError::BadRequest(err.to_string()),
            ErrorClass::Validation => ApiError::Validation(err.to_string()),
            ErrorClass::Encoding => ApiError::Internal(format!(
                "An error occurred while generating the {}: {}",
                kind, err
            )),
        }
    }

    /// HTTP status code for this error
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Timeout(_) => StatusCode::REQUEST_TIMEOUT,
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        // Log error server-side
        log_error(&self, status);

        (status, Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}

/// Log error with appropriate level based on HTTP status
fn log_error(error: &ApiError, status: StatusCode) {
    if status.is_server_error() {
        tracing::error!("API error: {} - {}", status, error);
    } else {
        tracing::warn!("API error: {} - {}", status, error);
    }
}

/// Errors raised while loading the server configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value '{value}' for {variable}: {reason}")]
    InvalidValue {
        variable: String,
        value: String,
        reason: String,
    },
}

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;
