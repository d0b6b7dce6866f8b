//! Domain error model.

use thiserror::Error;

/// Result type used by the shared domain primitives.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error for values that cross crate boundaries (identifiers,
/// ingredient names).
///
/// Order lifecycle failures have their own richer type in the orders crate.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. unknown ingredient name).
    #[error("validation failed: {0}")]
    Validation(String),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }
}
