//! Combat state machine and action execution pipeline.
//!
//! The [`GameEngine`] is the authoritative reducer for [`GameState`]. Every
//! player action flows through `execute()`, which validates it against the
//! current phase and turn, applies it, and runs the end-of-step checks. When
//! an action hands the turn to the enemy, the whole enemy turn resolves inside
//! the same call.

mod errors;
pub(crate) mod fight;
pub(crate) mod rewards;
mod transition;
pub(crate) mod turns;

pub use errors::{ExecuteError, TransitionPhase};

use crate::action::PlayerAction;
use crate::combat::CombatEvent;
use crate::env::GameEnv;
use crate::state::GameState;

/// Complete outcome of action execution.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActionOutcome {
    /// Everything that happened, in resolution order, including the enemy
    /// turn when one ran.
    pub events: Vec<CombatEvent>,
}

/// Game engine that validates and applies player actions.
///
/// All state mutations flow through the three-phase action pipeline:
/// pre_validate → apply → post_validate
pub struct GameEngine<'a> {
    state: &'a mut GameState,
}

impl<'a> GameEngine<'a> {
    /// Creates a new game engine with the given state.
    pub fn new(state: &'a mut GameState) -> Self {
        Self { state }
    }

    /// Executes an action by routing it through its transition pipeline.
    ///
    /// A rejected action never mutates the state during validation; errors
    /// from later phases should be handled by discarding the state.
    pub fn execute(
        &mut self,
        env: GameEnv<'_>,
        action: &PlayerAction,
    ) -> Result<ActionOutcome, ExecuteError> {
        let events = transition::execute_transition(action, self.state, &env)?;

        tracing::debug!(
            target: "game_core::engine",
            action = %action.kind(),
            phase = %self.state.phase,
            turn = %self.state.turn,
            floor = self.state.floor,
            events = events.len(),
            "action executed"
        );

        Ok(ActionOutcome { events })
    }

    pub fn state(&self) -> &GameState {
        self.state
    }
}
