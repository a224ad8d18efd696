//! Error types raised by repository implementations.

use pity_core::StateError;
use thiserror::Error;

/// Errors surfaced by repository implementations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("state repository lock was poisoned")]
    LockPoisoned,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(String),

    #[error("corrupted data: {0}")]
    CorruptedData(String),

    /// The stored counters decoded but violate the state bounds.
    #[error("stored state is invalid: {0}")]
    InvalidState(#[from] StateError),
}

pub type Result<T> = std::result::Result<T, RepositoryError>;
