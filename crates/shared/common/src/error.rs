//! Unified error handling.
//!
//! Provides a single error type for the services and its conversion to
//! Axum HTTP responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use domain::DomainError;
use serde::Serialize;
use thiserror::Error;

/// Application error types.
#[derive(Error, Debug)]
pub enum AppError {
    // Domain failures (message is part of the contract)
    #[error("{0}")]
    BusinessRule(String),

    #[error("{0}")]
    Authentication(String),

    /// An operation was called in a state its caller must rule out,
    /// e.g. updating an entry that was never saved.
    #[error("Precondition violated: {0}")]
    Precondition(&'static str),

    // Resource errors
    #[error("Resource not found")]
    NotFound,

    // Malformed request input
    #[error("{0}")]
    Validation(String),

    // External service errors
    #[cfg(feature = "database")]
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    // Internal
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Error response body for HTTP
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    code: String,
    message: String,
}

impl AppError {
    /// Get error code for client
    pub fn code(&self) -> &'static str {
        match self {
            AppError::BusinessRule(_) => "BUSINESS_RULE",
            AppError::Authentication(_) => "AUTHENTICATION_FAILED",
            AppError::Precondition(_) => "PRECONDITION_FAILED",
            AppError::NotFound => "NOT_FOUND",
            AppError::Validation(_) => "VALIDATION_ERROR",
            #[cfg(feature = "database")]
            AppError::Database(_) => "DATABASE_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Get HTTP status code
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BusinessRule(_) | AppError::Authentication(_) | AppError::Validation(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::NotFound => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get user-facing message (hides internal details)
    pub fn user_message(&self) -> String {
        match self {
            // Show full message for client errors
            AppError::BusinessRule(msg) => msg.clone(),
            AppError::Authentication(msg) => msg.clone(),
            AppError::Validation(msg) => msg.clone(),

            // Hide details for defects and infrastructure errors
            AppError::Precondition(what) => {
                tracing::error!("Precondition violated: {}", what);
                "An internal error occurred".to_string()
            }
            #[cfg(feature = "database")]
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                "A database error occurred".to_string()
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "An internal error occurred".to_string()
            }

            AppError::NotFound => self.to_string(),
        }
    }
}

// =============================================================================
// HTTP Response (Axum)
// =============================================================================

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorResponse {
            error: ErrorBody {
                code: self.code().to_string(),
                message: self.user_message(),
            },
        };

        (status, Json(body)).into_response()
    }
}

// =============================================================================
// Domain Error Conversion
// =============================================================================

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::BusinessRule(msg) => AppError::BusinessRule(msg),
            DomainError::Authentication(msg) => AppError::Authentication(msg),
        }
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Extension trait for Option -> AppError conversion
pub trait OptionExt<T> {
    fn ok_or_not_found(self) -> AppResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_not_found(self) -> AppResult<T> {
        self.ok_or(AppError::NotFound)
    }
}

/// Convenience constructors
impl AppError {
    pub fn business_rule(msg: impl Into<String>) -> Self {
        AppError::BusinessRule(msg.into())
    }

    pub fn authentication(msg: impl Into<String>) -> Self {
        AppError::Authentication(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use domain::{MSG_INVALID_CREDENTIAL, MSG_INVALID_MONTH};

    async fn body_json(err: AppError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn business_rule_is_bad_request_with_message() {
        let (status, body) = body_json(AppError::from(DomainError::business_rule(MSG_INVALID_MONTH))).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "BUSINESS_RULE");
        assert_eq!(body["error"]["message"], MSG_INVALID_MONTH);
    }

    #[tokio::test]
    async fn authentication_is_bad_request_with_message() {
        let (status, body) = body_json(AppError::authentication(MSG_INVALID_CREDENTIAL)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["message"], MSG_INVALID_CREDENTIAL);
    }

    #[tokio::test]
    async fn precondition_is_hidden_from_client() {
        let (status, body) = body_json(AppError::Precondition("entry id is required")).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"]["message"], "An internal error occurred");
    }

    #[test]
    fn missing_option_becomes_not_found() {
        let missing: Option<u8> = None;
        assert!(matches!(missing.ok_or_not_found(), Err(AppError::NotFound)));
    }
}
