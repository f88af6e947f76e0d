//! Errors raised while saving or loading session state.

use thiserror::Error;

/// Errors surfaced by repository implementations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("session store lock was poisoned")]
    LockPoisoned,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to encode or decode session state: {0}")]
    Serialization(String),

    #[error("player id {0:?} cannot be used as a session key")]
    InvalidPlayerId(String),
}

pub type Result<T> = std::result::Result<T, RepositoryError>;
