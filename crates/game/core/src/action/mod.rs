//! Player actions.
//!
//! Each action is a small struct implementing [`ActionTransition`]: validation
//! reads the state before anything changes, `apply` mutates it, and
//! `post_validate` checks the result. [`PlayerAction`] is the closed set the
//! engine accepts.
mod battle;
mod error;
mod play;
mod reward;

pub use battle::{NewGameAction, StartBattleAction};
pub use error::ActionError;
pub use play::AutoPlayCardAction;
pub use reward::SelectRewardAction;

use crate::combat::CombatEvent;
use crate::env::GameEnv;
use crate::state::GameState;

/// Defines how a concrete action variant mutates game state.
pub trait ActionTransition {
    type Error;

    /// Validates pre-conditions using the state **before** mutation.
    fn pre_validate(&self, _state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Applies the action by mutating the game state directly. Implementations
    /// may assume that `pre_validate` has already run successfully.
    fn apply(
        &self,
        state: &mut GameState,
        env: &GameEnv<'_>,
        events: &mut Vec<CombatEvent>,
    ) -> Result<(), Self::Error>;

    /// Validates post-conditions using the state **after** mutation.
    fn post_validate(&self, _state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Name of an action as it appears on the wire.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::IntoStaticStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[strum(serialize_all = "camelCase")]
pub enum ActionKind {
    StartBattle,
    AutoPlayCard,
    SelectReward,
    NewGame,
}

/// Every action a player can submit.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PlayerAction {
    StartBattle(StartBattleAction),
    AutoPlayCard(AutoPlayCardAction),
    SelectReward(SelectRewardAction),
    NewGame(NewGameAction),
}

impl PlayerAction {
    pub fn start_battle() -> Self {
        Self::StartBattle(StartBattleAction)
    }

    pub fn auto_play_card() -> Self {
        Self::AutoPlayCard(AutoPlayCardAction)
    }

    /// `-1` skips the current reward set.
    pub fn select_reward(card_index: i32) -> Self {
        Self::SelectReward(SelectRewardAction { card_index })
    }

    pub fn new_game(seed: u64) -> Self {
        Self::NewGame(NewGameAction { seed })
    }

    pub fn kind(&self) -> ActionKind {
        match self {
            Self::StartBattle(_) => ActionKind::StartBattle,
            Self::AutoPlayCard(_) => ActionKind::AutoPlayCard,
            Self::SelectReward(_) => ActionKind::SelectReward,
            Self::NewGame(_) => ActionKind::NewGame,
        }
    }
}
