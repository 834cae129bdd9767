//! Errors reported by external proposal stores

use thiserror::Error;

/// Errors that can occur when talking to an external proposal store
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Store unavailable: {0}")]
    Unavailable(String),

    #[error("Timeout")]
    Timeout,
}

impl StoreError {
    pub fn not_found(what: impl std::fmt::Display) -> Self {
        StoreError::NotFound(what.to_string())
    }
}
