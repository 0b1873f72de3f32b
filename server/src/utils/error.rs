//! Unified error handling
//!
//! Application error taxonomy and the JSON error body:
//! - [`AppError`] - application error enum, maps onto HTTP status codes
//! - [`AppResult`] - handler result alias
//!
//! | Variant | Status |
//! |---------|--------|
//! | Validation | 400 |
//! | Unauthorized / TokenExpired / InvalidToken | 401 |
//! | Forbidden | 403 |
//! | NotFound | 404 |
//! | Conflict / NoCapacity | 409 |
//! | Database / Internal | 500 |
//!
//! Database and internal errors are logged with full detail but surfaced to
//! the client as a generic message. `NoCapacity` always carries the
//! human-readable reason so the caller can display it.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::error;

/// JSON body for error responses
///
/// ```json
/// { "error": "No tables available", "reason": "No available tables for the selected seating and guests." }
/// ```
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Application error enum
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // ========== Authentication errors (4xx) ==========
    #[error("Authentication required")]
    Unauthorized,

    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token")]
    InvalidToken,

    #[error("Permission denied: {0}")]
    Forbidden(String),

    // ========== Business logic errors (4xx) ==========
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Resource conflict: {0}")]
    Conflict(String),

    #[error("No tables available")]
    NoCapacity {
        /// Displayable reason (seating type and party size)
        reason: String,
    },

    #[error("Validation failed: {0}")]
    Validation(String),

    // ========== System errors (5xx) ==========
    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                ErrorBody::new("Please login first"),
            ),
            AppError::TokenExpired => (StatusCode::UNAUTHORIZED, ErrorBody::new("Token expired")),
            AppError::InvalidToken => (StatusCode::UNAUTHORIZED, ErrorBody::new("Invalid token")),

            AppError::Forbidden(msg) => (StatusCode::FORBIDDEN, ErrorBody::new(msg)),

            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, ErrorBody::new(msg)),

            AppError::Conflict(msg) => (StatusCode::CONFLICT, ErrorBody::new(msg)),

            AppError::NoCapacity { reason } => (
                StatusCode::CONFLICT,
                ErrorBody {
                    error: "No tables available".to_string(),
                    reason: Some(reason.clone()),
                },
            ),

            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, ErrorBody::new(msg)),

            // Log detail, surface a generic message
            AppError::Database(msg) => {
                error!(target: "database", error = %msg, "Database error occurred");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody::new("Database error"),
                )
            }
            AppError::Internal(msg) => {
                error!(target: "internal", error = %msg, "Internal error occurred");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody::new("Internal server error"),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

impl ErrorBody {
    fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            reason: None,
        }
    }
}

// ========== Helper Constructors ==========

impl AppError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn database(msg: impl Into<String>) -> Self {
        Self::Database(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    pub fn forbidden(msg: impl Into<String>) -> Self {
        Self::Forbidden(msg.into())
    }

    /// No table satisfies the requested constraints — a normal business
    /// outcome, not a fault
    pub fn no_capacity(reason: impl Into<String>) -> Self {
        Self::NoCapacity {
            reason: reason.into(),
        }
    }

    /// Unified message to prevent username enumeration during login
    pub fn invalid_credentials() -> Self {
        Self::Validation("Invalid username or password".to_string())
    }
}

/// Result type for API handlers
pub type AppResult<T> = Result<T, AppError>;
