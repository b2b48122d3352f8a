//! Registry error taxonomy.
//!
//! These are domain outcomes, not transport codes: the HTTP layer maps
//! them to status codes. None of them poison the store; after any error
//! the registry remains valid and usable.

use thiserror::Error;

/// Errors produced by registry operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// Unknown id referenced by get/update/delete, or no candidate left
    /// for a nearest-neighbor query.
    #[error("{0}")]
    NotFound(String),

    /// Create with an id that is already present.
    #[error("{0}")]
    Conflict(String),

    /// Missing or non-numeric required field, or an invalid combination
    /// of query inputs.
    #[error("{0}")]
    InvalidInput(String),
}

impl RegistryError {
    /// Create a not-found error.
    pub fn not_found(msg: impl Into<String>) -> Self {
        RegistryError::NotFound(msg.into())
    }

    /// Create a conflict error.
    pub fn conflict(msg: impl Into<String>) -> Self {
        RegistryError::Conflict(msg.into())
    }

    /// Create an invalid-input error.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        RegistryError::InvalidInput(msg.into())
    }
}

/// Result type alias for registry operations.
pub type Result<T> = std::result::Result<T, RegistryError>;
