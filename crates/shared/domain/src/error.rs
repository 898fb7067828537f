//! Domain-level errors.
//!
//! The entities themselves are plain data and never fail; the only fallible
//! operation this crate owns is turning text back into a typed identifier.
//! Errors are independent of infrastructure concerns (HTTP, gRPC, database).

use thiserror::Error;

/// Domain-specific errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An identifier could not be parsed from its textual form
    #[error("Invalid identifier: {0}")]
    InvalidId(String),
}

impl DomainError {
    /// Create an invalid-identifier error
    pub fn invalid_id(msg: impl Into<String>) -> Self {
        DomainError::InvalidId(msg.into())
    }
}

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
