//! Unified error handling for the service and HTTP layers.
//!
//! A closed set of error kinds, propagated unchanged from the store through
//! the service to the HTTP boundary, where each kind maps to its own status
//! and code.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use domain::DomainError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Application error kinds.
#[derive(Error, Debug)]
pub enum AppError {
    /// Required field missing or malformed identifier
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Email failed format validation
    #[error("Invalid email format")]
    InvalidEmail,

    /// No row matched the identifier
    #[error("User not found")]
    UserNotFound,

    /// Anything the storage layer reports that is not a "no rows" condition
    #[error("Storage fault: {0}")]
    StorageFault(#[from] sea_orm::DbErr),
}

/// Error response body for HTTP
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

impl AppError {
    /// Get error code for client
    pub fn code(&self) -> &'static str {
        match self {
            AppError::InvalidInput(_) => "INVALID_INPUT",
            AppError::InvalidEmail => "INVALID_EMAIL",
            AppError::UserNotFound => "USER_NOT_FOUND",
            AppError::StorageFault(_) => "STORAGE_FAULT",
        }
    }

    /// Get HTTP status code
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AppError::InvalidEmail => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::UserNotFound => StatusCode::NOT_FOUND,
            AppError::StorageFault(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get user-facing message (hides storage details)
    pub fn user_message(&self) -> String {
        match self {
            AppError::InvalidInput(msg) => msg.clone(),
            AppError::StorageFault(e) => {
                tracing::error!("Storage fault: {:?}", e);
                "A database error occurred".to_string()
            }
            _ => self.to_string(),
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
            DomainError::InvalidInput(msg) => AppError::InvalidInput(msg),
            DomainError::InvalidEmail => AppError::InvalidEmail,
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
        self.ok_or(AppError::UserNotFound)
    }
}

/// Convenience constructors
impl AppError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        AppError::InvalidInput(msg.into())
    }
}
