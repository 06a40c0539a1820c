//! API error type with HTTP status code mapping.
//!
//! [`ApiError`] is what handlers return. Every variant maps to a status
//! code and a flat JSON body `{"error": "<message>"}`. Store failures are
//! logged here and replaced by a generic message so no internal detail
//! reaches the client.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use utoipa::ToSchema;

use crate::persistence::StoreError;

/// Message returned when a required field is missing or empty.
pub const MISSING_FIELDS: &str = "Todos os campos são obrigatórios.";
/// Message returned when the email is already registered.
pub const DUPLICATE_EMAIL: &str = "Email já existe.";
/// Message returned for any store failure.
pub const INTERNAL_ERROR: &str = "Erro interno do servidor.";

/// JSON error response body.
///
/// ```json
/// { "error": "Email já existe." }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable, client-safe message.
    pub error: String,
}

/// Errors surfaced by the request handlers.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request is missing data or carries malformed values.
    #[error("{0}")]
    Validation(String),

    /// The email violates the store's unique constraint.
    #[error("email already exists")]
    DuplicateKey,

    /// The store failed; the payload is logged, never returned.
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

impl ApiError {
    /// Returns the HTTP status code for this variant.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::DuplicateKey => StatusCode::CONFLICT,
            Self::Unavailable(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Returns the message sent to the client.
    #[must_use]
    pub fn public_message(&self) -> String {
        match self {
            Self::Validation(msg) => msg.clone(),
            Self::DuplicateKey => DUPLICATE_EMAIL.to_string(),
            Self::Unavailable(_) => INTERNAL_ERROR.to_string(),
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::DuplicateKey => Self::DuplicateKey,
            StoreError::Unavailable(detail) => Self::Unavailable(detail),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let Self::Unavailable(detail) = &self {
            tracing::error!(error = %detail, "store operation failed");
        }
        let body = ErrorResponse {
            error: self.public_message(),
        };
        (self.status_code(), axum::Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_errors_map_to_status_codes() {
        let dup = ApiError::from(StoreError::DuplicateKey);
        assert_eq!(dup.status_code(), StatusCode::CONFLICT);

        let down = ApiError::from(StoreError::Unavailable("connection refused".to_string()));
        assert_eq!(down.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn unavailable_detail_is_not_exposed() {
        let err = ApiError::Unavailable("password authentication failed".to_string());
        assert_eq!(err.public_message(), INTERNAL_ERROR);
    }

    #[test]
    fn validation_message_is_passed_through() {
        let err = ApiError::Validation(MISSING_FIELDS.to_string());
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.public_message(), MISSING_FIELDS);
    }
}
