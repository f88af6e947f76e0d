//! Error types for the action execution pipeline.

use crate::action::{ActionError, ActionKind};
use crate::error::{ErrorSeverity, GameError};

/// Identifies which stage of the transition pipeline produced an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TransitionPhase {
    PreValidate,
    Apply,
    PostValidate,
}

impl TransitionPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransitionPhase::PreValidate => "pre_validate",
            TransitionPhase::Apply => "apply",
            TransitionPhase::PostValidate => "post_validate",
        }
    }
}

/// Errors surfaced while executing an action through the game engine.
///
/// A failure in `pre_validate` leaves the state untouched. Failures in later
/// phases may leave it partially mutated; callers execute against a working
/// copy and discard it on error.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{action} {} failed: {error}", .phase.as_str())]
pub struct ExecuteError {
    pub action: ActionKind,
    pub phase: TransitionPhase,
    #[source]
    pub error: ActionError,
}

impl ExecuteError {
    pub fn new(action: ActionKind, phase: TransitionPhase, error: ActionError) -> Self {
        Self {
            action,
            phase,
            error,
        }
    }

    /// Human-readable reason suitable for a rejection reply.
    pub fn reason(&self) -> String {
        self.error.to_string()
    }
}

impl GameError for ExecuteError {
    fn severity(&self) -> ErrorSeverity {
        self.error.severity()
    }

    fn error_code(&self) -> &'static str {
        self.error.error_code()
    }
}
