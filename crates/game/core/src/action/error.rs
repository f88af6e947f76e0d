//! Action validation errors.
//!
//! Display strings are the human-readable reasons returned to the caller.

use crate::env::IntegrityError;
use crate::error::{ErrorSeverity, GameError};

/// Reasons a player action is rejected. The session state is left untouched.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ActionError {
    #[error("Cannot play cards outside of fighting phase.")]
    NotFighting,

    #[error("Not player's turn.")]
    NotPlayerTurn,

    #[error("No card ready to play.")]
    NoCardReady,

    #[error("Not enough energy to play {card} (Cost: {cost}, Have: {energy}).")]
    InsufficientEnergy {
        card: String,
        cost: i32,
        energy: i32,
    },

    #[error("Cannot select rewards outside of reward phase.")]
    NotRewardPhase,

    #[error("Invalid card index ({index}) for current reward options.")]
    InvalidRewardIndex { index: i32 },

    #[error("Cannot start battle now.")]
    CannotStartBattle,

    /// Content is broken badly enough that the transition cannot complete.
    #[error(transparent)]
    Integrity(#[from] IntegrityError),
}

impl GameError for ActionError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::NotPlayerTurn | Self::InsufficientEnergy { .. } => ErrorSeverity::Recoverable,
            Self::NotFighting
            | Self::NoCardReady
            | Self::NotRewardPhase
            | Self::InvalidRewardIndex { .. }
            | Self::CannotStartBattle => ErrorSeverity::Validation,
            Self::Integrity(error) => error.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NotFighting => "ACTION_NOT_FIGHTING",
            Self::NotPlayerTurn => "ACTION_NOT_PLAYER_TURN",
            Self::NoCardReady => "ACTION_NO_CARD_READY",
            Self::InsufficientEnergy { .. } => "ACTION_INSUFFICIENT_ENERGY",
            Self::NotRewardPhase => "ACTION_NOT_REWARD_PHASE",
            Self::InvalidRewardIndex { .. } => "ACTION_INVALID_REWARD_INDEX",
            Self::CannotStartBattle => "ACTION_CANNOT_START_BATTLE",
            Self::Integrity(error) => error.error_code(),
        }
    }
}
