//! Domain-level errors.
//!
//! These errors represent business rule violations detected before any
//! storage access. They are independent of infrastructure concerns (HTTP,
//! database).

use thiserror::Error;

/// Domain-specific errors for validation failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A required field is missing or an identifier is malformed
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Email does not match `local-part@domain.tld`
    #[error("Invalid email format")]
    InvalidEmail,
}

impl DomainError {
    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        DomainError::InvalidInput(msg.into())
    }
}

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
