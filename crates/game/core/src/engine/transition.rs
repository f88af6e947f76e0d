//! Action transition dispatch and execution logic.

use crate::action::{ActionError, ActionTransition, PlayerAction};
use crate::combat::CombatEvent;
use crate::env::GameEnv;
use crate::state::GameState;

use super::errors::{ExecuteError, TransitionPhase};

/// Executes a transition through the three-phase pipeline.
///
/// Phases:
/// 1. `pre_validate` - Check preconditions before mutation
/// 2. `apply` - Mutate the game state
/// 3. `post_validate` - Verify postconditions after mutation
#[inline]
fn drive_transition<T>(
    transition: &T,
    state: &mut GameState,
    env: &GameEnv<'_>,
    events: &mut Vec<CombatEvent>,
) -> Result<(), (TransitionPhase, ActionError)>
where
    T: ActionTransition<Error = ActionError>,
{
    transition
        .pre_validate(state, env)
        .map_err(|error| (TransitionPhase::PreValidate, error))?;

    transition
        .apply(state, env, events)
        .map_err(|error| (TransitionPhase::Apply, error))?;

    transition
        .post_validate(state, env)
        .map_err(|error| (TransitionPhase::PostValidate, error))
}

/// Routes each action to its transition.
pub(super) fn execute_transition(
    action: &PlayerAction,
    state: &mut GameState,
    env: &GameEnv<'_>,
) -> Result<Vec<CombatEvent>, ExecuteError> {
    let mut events = Vec::new();
    let result = match action {
        PlayerAction::StartBattle(transition) => {
            drive_transition(transition, state, env, &mut events)
        }
        PlayerAction::AutoPlayCard(transition) => {
            drive_transition(transition, state, env, &mut events)
        }
        PlayerAction::SelectReward(transition) => {
            drive_transition(transition, state, env, &mut events)
        }
        PlayerAction::NewGame(transition) => drive_transition(transition, state, env, &mut events),
    };

    result
        .map(|()| events)
        .map_err(|(phase, error)| ExecuteError::new(action.kind(), phase, error))
}
