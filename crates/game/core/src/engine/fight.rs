use crate::combat::CombatEvent;
use crate::env::{GameEnv, IntegrityError};
use crate::state::{EnemyState, GameState, Phase, Side};

/// Sets up the fight for the current floor once rewards are settled.
///
/// Spawns the floor's enemy, redeals the player's whole collection, restores
/// combat resources and stages the first card. Fails without touching the
/// state when the catalog has no enemies.
pub(crate) fn start_next_fight(
    state: &mut GameState,
    env: &GameEnv<'_>,
    events: &mut Vec<CombatEvent>,
) -> Result<(), IntegrityError> {
    let definition = env
        .catalog()
        .enemy_for_floor(state.floor)
        .ok_or(IntegrityError::NoEnemies)?;

    let from = state.phase;
    state.enemy = EnemyState::spawn(definition, state.floor, env.config());
    state.reward_options.clear();
    state.current_reward_set = 0;
    state.phase = Phase::Fighting;
    state.turn = Side::Player;
    state.last_enemy_card = None;

    state.player.reset_combat_resources();
    state.player.reset_deck(&mut state.rng, env);

    events.push(CombatEvent::PhaseChanged {
        from,
        to: Phase::Fighting,
    });
    events.push(CombatEvent::BattleStarted {
        floor: state.floor,
        enemy: state.enemy.enemy_id.clone(),
    });
    state.player.draw(&mut state.rng, env, events);

    tracing::info!(
        target: "game_core::engine",
        floor = state.floor,
        enemy = %state.enemy.enemy_id,
        max_hp = state.enemy.combatant.max_hp,
        deck = state.player.all_cards.len(),
        "next fight started"
    );
    Ok(())
}
