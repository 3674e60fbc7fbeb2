//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic business failures; storage and
/// transport concerns belong to their own crates.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Creation input failed validation (missing/empty field, bad enum value).
    #[error("validation failed: {0}")]
    Validation(String),

    /// An identifier string did not parse.
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// No order with the requested id exists.
    #[error("order not found")]
    NotFound,
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }
}
