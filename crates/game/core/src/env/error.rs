//! Data-integrity errors raised when state references missing catalog data.

use crate::error::{ErrorSeverity, GameError};

use super::{BuffId, CardId};
use crate::state::Side;

/// A state or card referenced an id the catalog does not know.
///
/// These never reject a player action on their own: the engine logs them and
/// treats the offending card or effect as a no-op.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum IntegrityError {
    #[error("card definition not found: {0}")]
    MissingCard(CardId),

    #[error("buff definition not found: {0}")]
    MissingBuff(BuffId),

    #[error("catalog defines no enemies")]
    NoEnemies,

    #[error("card {card} has an effect of unknown type {kind:?}")]
    UnknownEffect { card: CardId, kind: String },

    #[error("{side} hp {hp} outside 0..={max_hp}")]
    HpOutOfBounds {
        side: Side,
        hp: i32,
        max_hp: i32,
    },
}

impl GameError for IntegrityError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::NoEnemies | Self::HpOutOfBounds { .. } => ErrorSeverity::Fatal,
            Self::MissingCard(_) | Self::MissingBuff(_) | Self::UnknownEffect { .. } => {
                ErrorSeverity::Internal
            }
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::MissingCard(_) => "INTEGRITY_MISSING_CARD",
            Self::MissingBuff(_) => "INTEGRITY_MISSING_BUFF",
            Self::NoEnemies => "INTEGRITY_NO_ENEMIES",
            Self::UnknownEffect { .. } => "INTEGRITY_UNKNOWN_EFFECT",
            Self::HpOutOfBounds { .. } => "INTEGRITY_HP_OUT_OF_BOUNDS",
        }
    }
}
