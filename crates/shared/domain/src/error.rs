//! Domain-level errors.
//!
//! These errors represent business rule violations and domain logic failures.
//! They are independent of infrastructure concerns (HTTP, database).

use thiserror::Error;

use crate::validation::ValidationFailure;

/// Domain-specific errors for business rule violations.
#[derive(Error, Debug, Clone)]
pub enum DomainError {
    /// A single rule was violated
    #[error("Validation error: {0}")]
    Validation(String),

    /// One or more fields failed validation
    #[error("{0}")]
    InvalidFields(ValidationFailure),

    /// Input could not be read as the expected shape at all
    #[error("Malformed input: {0}")]
    Malformed(String),

    /// Unknown role string
    #[error("Unknown role: {0}")]
    UnknownRole(String),

    /// Internal domain error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl DomainError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        DomainError::Validation(msg.into())
    }

    /// Create a malformed-input error
    pub fn malformed(msg: impl Into<String>) -> Self {
        DomainError::Malformed(msg.into())
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        DomainError::Internal(msg.into())
    }
}

impl From<ValidationFailure> for DomainError {
    fn from(failure: ValidationFailure) -> Self {
        DomainError::InvalidFields(failure)
    }
}

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
