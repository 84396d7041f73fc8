//! Application error types
//!
//! Unified error handling for the transport boundary. Domain outcomes pass
//! through unchanged; everything else is classified here.

use forum_core::DomainError;
use serde::Serialize;
use std::fmt;

/// Application-wide error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Authentication errors
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Invalid token")]
    InvalidToken,

    #[error("Token expired")]
    TokenExpired,

    #[error("Missing authentication")]
    MissingAuth,

    // Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    // Resource errors
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    // Database errors
    #[error("Database error: {0}")]
    Database(String),

    // Internal errors
    #[error("Internal server error")]
    Internal(#[source] anyhow::Error),

    // Domain errors
    #[error(transparent)]
    Domain(#[from] DomainError),

    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// Get HTTP status code for this error
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            // 400 Bad Request
            Self::Validation(_) => 400,

            // 401 Unauthorized
            Self::InvalidCredentials | Self::InvalidToken | Self::TokenExpired | Self::MissingAuth => 401,

            // 404 Not Found
            Self::NotFound(_) => 404,

            // 409 Conflict
            Self::Conflict(_) => 409,

            // 500 Internal Server Error
            Self::Database(_) | Self::Internal(_) | Self::Config(_) => 500,

            // Map domain errors to appropriate status codes
            Self::Domain(e) => {
                if e.is_not_found() {
                    404
                } else if e.is_forbidden() {
                    403
                } else if e.is_validation() {
                    400
                } else if e.is_conflict() {
                    409
                } else {
                    500
                }
            }
        }
    }

    /// Get error code for API responses
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::InvalidToken => "INVALID_TOKEN",
            Self::TokenExpired => "TOKEN_EXPIRED",
            Self::MissingAuth => "MISSING_AUTH",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::NotFound(_) => "NOT_FOUND",
            Self::Conflict(_) => "CONFLICT",
            Self::Database(_) => "DATABASE_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
            Self::Config(_) => "CONFIG_ERROR",
            Self::Domain(e) => e.code(),
        }
    }

    /// Check if this is a client error (4xx)
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        let status = self.status_code();
        (400..500).contains(&status)
    }

    /// Check if this is a server error (5xx)
    #[must_use]
    pub fn is_server_error(&self) -> bool {
        let status = self.status_code();
        (500..600).contains(&status)
    }

    /// Create a not found error for a resource type
    #[must_use]
    pub fn not_found(resource: impl fmt::Display) -> Self {
        Self::NotFound(resource.to_string())
    }

    /// Create a validation error
    #[must_use]
    pub fn validation(msg: impl fmt::Display) -> Self {
        Self::Validation(msg.to_string())
    }

    /// Create an internal error from any error
    pub fn internal(err: impl Into<anyhow::Error>) -> Self {
        Self::Internal(err.into())
    }
}

/// Error response structure for API responses
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    /// Build the response body for an error.
    ///
    /// Server errors keep their detail out of the body; clients get the
    /// generic message while the detail goes to the logs.
    #[must_use]
    pub fn from_error(error: &AppError) -> Self {
        let message = if error.is_server_error() {
            "Internal server error".to_string()
        } else {
            error.to_string()
        };

        Self {
            code: error.error_code().to_string(),
            message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use forum_core::Id;

    #[test]
    fn test_status_codes() {
        assert_eq!(AppError::MissingAuth.status_code(), 401);
        assert_eq!(AppError::Validation("bad".into()).status_code(), 400);
        assert_eq!(AppError::not_found("User 1").status_code(), 404);
        assert_eq!(AppError::Conflict("dup".into()).status_code(), 409);
        assert_eq!(AppError::Database("down".into()).status_code(), 500);
    }

    #[test]
    fn test_domain_error_mapping() {
        let err = AppError::Domain(DomainError::PostNotFound(Id::new(1)));
        assert_eq!(err.status_code(), 404);
        assert_eq!(err.error_code(), "UNKNOWN_POST");

        let err = AppError::Domain(DomainError::NotOwner);
        assert_eq!(err.status_code(), 403);

        let err = AppError::Domain(DomainError::AlreadyReacted);
        assert_eq!(err.status_code(), 409);

        let err = AppError::Domain(DomainError::EmptyUpdate);
        assert_eq!(err.status_code(), 400);
    }

    #[test]
    fn test_server_error_message_opaque() {
        let err = AppError::Database("password=hunter2 leaked".into());
        let response = ErrorResponse::from_error(&err);
        assert_eq!(response.message, "Internal server error");
        assert_eq!(response.code, "DATABASE_ERROR");
    }

    #[test]
    fn test_client_error_message_preserved() {
        let err = AppError::Validation("Title cannot be empty".into());
        let response = ErrorResponse::from_error(&err);
        assert!(response.message.contains("Title cannot be empty"));
    }
}
