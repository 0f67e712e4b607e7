//! API error types with HTTP status code mapping.
//!
//! [`ApiError`] is the central error type for request handling. Each
//! variant maps to a specific HTTP status code and structured JSON error
//! response.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::EntryId;
use crate::lookup::LookupError;

/// Message returned to clients when the nutrition lookup fails. The
/// upstream cause is logged, never sent back.
const LOOKUP_FAILED_MESSAGE: &str = "failed to fetch nutrition data";

/// Structured JSON error response body.
///
/// All error responses follow this shape:
/// ```json
/// {
///   "error": {
///     "code": 2001,
///     "message": "entry not found: 42"
///   }
/// }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Structured error payload.
    pub error: ErrorBody,
}

/// Inner error body with numeric code and human-readable message.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    /// Numeric error code.
    #[schema(example = 2001)]
    pub code: u32,
    /// Human-readable error message.
    #[schema(example = "entry not found: 42")]
    pub message: String,
}

/// Server-side error enum with HTTP status code mapping.
///
/// # Error Code Ranges
///
/// | Range     | Category   | HTTP Status               |
/// |-----------|------------|---------------------------|
/// | 1000–1999 | Validation | 400 Bad Request           |
/// | 2000–2999 | Not Found  | 404 Not Found             |
/// | 3000–3999 | Server     | 500 Internal Server Error |
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Request body failed validation.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Path identifier is not a positive integer.
    #[error("invalid entry id: {0:?}")]
    InvalidEntryId(String),

    /// No entry with the given identifier.
    #[error("entry not found: {0}")]
    EntryNotFound(EntryId),

    /// The nutrition lookup failed.
    #[error("nutrition lookup failed: {0}")]
    Lookup(#[from] LookupError),
}

impl ApiError {
    /// Returns the numeric error code for this variant.
    #[must_use]
    pub const fn error_code(&self) -> u32 {
        match self {
            Self::InvalidRequest(_) => 1001,
            Self::InvalidEntryId(_) => 1002,
            Self::EntryNotFound(_) => 2001,
            Self::Lookup(_) => 3001,
        }
    }

    /// Returns the HTTP status code for this variant.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidRequest(_) | Self::InvalidEntryId(_) => StatusCode::BAD_REQUEST,
            Self::EntryNotFound(_) => StatusCode::NOT_FOUND,
            Self::Lookup(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message safe to show to clients.
    fn public_message(&self) -> String {
        match self {
            Self::Lookup(_) => LOOKUP_FAILED_MESSAGE.to_string(),
            other => other.to_string(),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::InvalidRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorResponse {
            error: ErrorBody {
                code: self.error_code(),
                message: self.public_message(),
            },
        };
        let mut response = axum::Json(body).into_response();
        *response.status_mut() = status;
        response
    }
}
