//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from worker coordination, repositories, and request
//! decoding so clients can bubble them up with consistent context. Rule
//! violations are not errors at this level: they come back as a rejected
//! [`super::ActionReply`].
use thiserror::Error;
use tokio::sync::oneshot;

use game_core::IntegrityError;

pub use super::request::RequestError;
pub use crate::repository::RepositoryError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("session worker command channel closed")]
    CommandChannelClosed,

    #[error("session worker reply channel closed")]
    ReplyChannelClosed(#[source] oneshot::error::RecvError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error(transparent)]
    InvalidRequest(#[from] RequestError),

    #[error("session manager requires oracles to be configured before building")]
    MissingOracles,

    #[error("failed to create session state for player {player_id}")]
    InitialState {
        player_id: String,
        #[source]
        source: IntegrityError,
    },
}
