//! HTTP error handling and response types.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use validator::ValidationErrors;

use crate::db::RepositoryError;

/// Storage failures surface at most this many characters of detail.
const STORAGE_DETAIL_LIMIT: usize = 120;

/// API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional structured details (e.g. per-field validation errors)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ApiError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }
}

/// Application error type for HTTP handlers.
#[derive(Debug)]
pub enum AppError {
    /// Invalid request payload
    BadRequest(String),
    /// Field-level validation failure
    Validation(ValidationErrors),
    /// Internal server error
    Internal(String),
    /// Storage failure
    Repository(RepositoryError),
}

/// Truncate a message to `limit` characters.
pub(crate) fn truncate_message(message: &str, limit: usize) -> String {
    message.chars().take(limit).collect()
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, ApiError::new("BAD_REQUEST", msg))
            }
            AppError::Validation(errors) => {
                let details = serde_json::to_value(&errors).unwrap_or(serde_json::Value::Null);
                (
                    StatusCode::BAD_REQUEST,
                    ApiError::new("VALIDATION_ERROR", "Invalid contact payload")
                        .with_details(details),
                )
            }
            AppError::Internal(msg) => {
                tracing::error!("internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ApiError::new(
                        "INTERNAL_ERROR",
                        truncate_message(&msg, STORAGE_DETAIL_LIMIT),
                    ),
                )
            }
            AppError::Repository(e) => {
                tracing::error!("storage error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ApiError::new(
                        "STORAGE_ERROR",
                        truncate_message(&e.to_string(), STORAGE_DETAIL_LIMIT),
                    ),
                )
            }
        };

        (status, Json(error)).into_response()
    }
}

impl From<RepositoryError> for AppError {
    fn from(err: RepositoryError) -> Self {
        AppError::Repository(err)
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        AppError::Validation(errors)
    }
}
