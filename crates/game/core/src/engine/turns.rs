//! Turn hand-over, the enemy turn and combat-end checks.

use crate::combat::{CombatEvent, resolve_card};
use crate::env::GameEnv;
use crate::state::{GameState, Phase, Side};

use super::rewards;

/// Whether the player keeps the turn after a card: momentum below the cap
/// and an affordable card staged.
pub(crate) fn player_can_continue(state: &GameState, env: &GameEnv<'_>) -> bool {
    if state.player.combatant.momentum >= env.config().momentum_cap {
        return false;
    }
    match state.player.staged_card(env) {
        Some(Ok(card)) => card.cost <= state.player.energy,
        _ => false,
    }
}

/// Ends the player's turn and resolves the enemy turn that follows.
pub(crate) fn end_player_turn(state: &mut GameState, env: &GameEnv<'_>, events: &mut Vec<CombatEvent>) {
    end_turn(state, Side::Player, events);
    state.player.combatant.momentum = 0;
    state.turn = Side::Enemy;
    state.last_enemy_card = None;

    run_enemy_turn(state, env, events);
}

/// Runs the whole enemy turn synchronously. The enemy always plays the first
/// entry of its action list against the player.
pub(crate) fn run_enemy_turn(state: &mut GameState, env: &GameEnv<'_>, events: &mut Vec<CombatEvent>) {
    events.push(CombatEvent::TurnStarted { side: Side::Enemy });
    state.enemy.combatant.start_turn();
    if check_combat_end(state, env, events) {
        return;
    }

    match state.enemy.intent().cloned() {
        Some(card_id) => {
            state.last_enemy_card = Some(card_id.clone());
            match env.card(&card_id) {
                Ok(card) => {
                    events.push(CombatEvent::CardPlayed {
                        side: Side::Enemy,
                        card: card_id,
                        cost: card.cost,
                    });
                    resolve_card(state, env, card, Side::Enemy, Side::Player, events);
                }
                Err(error) => {
                    tracing::warn!(target: "game_core::engine", %error, "enemy card skipped");
                }
            }
        }
        None => {
            tracing::debug!(
                target: "game_core::engine",
                enemy = %state.enemy.enemy_id,
                "enemy has no actions"
            );
        }
    }
    if check_combat_end(state, env, events) {
        return;
    }

    end_turn(state, Side::Enemy, events);
    if check_combat_end(state, env, events) {
        return;
    }

    begin_player_turn(state, env, events);
}

/// Hands the turn back to the player with full energy.
///
/// An empty card slot is refilled so the player is never left without a
/// playable action.
fn begin_player_turn(state: &mut GameState, env: &GameEnv<'_>, events: &mut Vec<CombatEvent>) {
    state.turn = Side::Player;
    state.player.energy = state.player.max_energy;
    state.player.combatant.start_turn();
    state.last_enemy_card = None;
    events.push(CombatEvent::TurnStarted { side: Side::Player });

    if state.player.next_card.is_none() {
        state.player.draw(&mut state.rng, env, events);
    }
}

fn end_turn(state: &mut GameState, side: Side, events: &mut Vec<CombatEvent>) {
    let expired = state.combatant_mut(side).end_turn();
    events.extend(
        expired
            .into_iter()
            .map(|buff| CombatEvent::BuffRemoved { side, buff }),
    );
    events.push(CombatEvent::TurnEnded { side });
}

/// Moves the session out of the fight once either side is defeated.
///
/// Returns `true` when the session is no longer fighting, including when it
/// was not fighting to begin with.
pub(crate) fn check_combat_end(state: &mut GameState, env: &GameEnv<'_>, events: &mut Vec<CombatEvent>) -> bool {
    if !state.is_fighting() {
        return true;
    }

    if state.player.combatant.is_defeated() {
        state.phase = Phase::GameOver;
        state.turn = Side::Player;
        state.currency = state.floor.saturating_mul(env.config().currency_per_floor);
        events.push(CombatEvent::PhaseChanged {
            from: Phase::Fighting,
            to: Phase::GameOver,
        });
        tracing::info!(
            target: "game_core::engine",
            floor = state.floor,
            currency = state.currency,
            "player defeated"
        );
        return true;
    }

    if state.enemy.combatant.is_defeated() {
        state.phase = Phase::Reward;
        state.turn = Side::Player;
        state.player.combatant.momentum = 0;
        state.player.combatant.clear_combat_modifiers();
        state.enemy.combatant.clear_combat_modifiers();
        state.floor += 1;
        state.reward_options = rewards::generate_reward_sets(state, env);
        state.current_reward_set = 0;
        events.push(CombatEvent::PhaseChanged {
            from: Phase::Fighting,
            to: Phase::Reward,
        });
        tracing::info!(
            target: "game_core::engine",
            enemy = %state.enemy.enemy_id,
            floor = state.floor,
            reward_sets = state.reward_options.len(),
            "enemy defeated"
        );
        return true;
    }

    false
}
