use crate::combat::{CombatEvent, resolve_card};
use crate::engine::turns;
use crate::env::GameEnv;
use crate::state::{GameState, Side};

use super::{ActionError, ActionTransition};

/// Plays the staged card, draws the next one and ends the turn when the
/// player can no longer continue.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AutoPlayCardAction;

impl ActionTransition for AutoPlayCardAction {
    type Error = ActionError;

    fn pre_validate(&self, state: &GameState, env: &GameEnv<'_>) -> Result<(), Self::Error> {
        if !state.is_fighting() {
            return Err(ActionError::NotFighting);
        }
        if state.turn != Side::Player {
            return Err(ActionError::NotPlayerTurn);
        }
        let card = match state.player.staged_card(env) {
            Some(Ok(card)) => card,
            Some(Err(error)) => {
                tracing::warn!(target: "game_core::action", %error, "staged card cannot be resolved");
                return Err(ActionError::NoCardReady);
            }
            None => return Err(ActionError::NoCardReady),
        };
        if card.cost > state.player.energy {
            return Err(ActionError::InsufficientEnergy {
                card: card.name.clone(),
                cost: card.cost,
                energy: state.player.energy,
            });
        }
        Ok(())
    }

    fn apply(
        &self,
        state: &mut GameState,
        env: &GameEnv<'_>,
        events: &mut Vec<CombatEvent>,
    ) -> Result<(), Self::Error> {
        let card_id = state.player.next_card.take().ok_or(ActionError::NoCardReady)?;
        let card = env.card(&card_id)?;

        state.player.energy -= card.cost;
        events.push(CombatEvent::CardPlayed {
            side: Side::Player,
            card: card_id.clone(),
            cost: card.cost,
        });

        let target = if card.targets_opponent() {
            Side::Enemy
        } else {
            Side::Player
        };
        resolve_card(state, env, card, Side::Player, target, events);

        let momentum = env.config().momentum_for_cost(card.cost);
        state.player.combatant.momentum += momentum;
        events.push(CombatEvent::MomentumGained { amount: momentum });

        state.player.discard_pile.push(card_id);
        state.player.draw(&mut state.rng, env, events);

        tracing::debug!(
            target: "game_core::action",
            card = %card.id,
            energy = state.player.energy,
            momentum = state.player.combatant.momentum,
            "card played"
        );

        if turns::check_combat_end(state, env, events) {
            return Ok(());
        }
        if !turns::player_can_continue(state, env) {
            turns::end_player_turn(state, env, events);
        }
        Ok(())
    }

    fn post_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        state.check_invariants().map_err(ActionError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::PlayerAction;
    use crate::config::GameConfig;
    use crate::engine::GameEngine;
    use crate::env::{CardDefinition, CardEffect, Catalog, EnemyDefinition, PcgRng};
    use crate::state::Phase;

    fn catalog() -> Catalog {
        Catalog::new(
            vec![
                CardDefinition::new("strike", "Strike", 1).with_effect(CardEffect::Damage { value: 6 }),
                CardDefinition::new("defend", "Defend", 1).with_effect(CardEffect::Block { value: 5 }),
                CardDefinition::new("bash", "Bash", 2)
                    .with_effect(CardEffect::Damage { value: 8 })
                    .with_effect(CardEffect::Block { value: 3 }),
            ],
            vec![],
            vec![EnemyDefinition::new("slime", "Slime", 15).with_deck(["strike".into()])],
        )
    }

    fn fighting(catalog: &Catalog, config: &GameConfig) -> GameState {
        let env = GameEnv::new(catalog, config, &PcgRng);
        let mut state = GameState::new("p1", 11, &env).expect("enemies defined");
        state.phase = Phase::Fighting;
        state
    }

    #[test]
    fn rejects_outside_fighting_phase() {
        let (catalog, config) = (catalog(), GameConfig::default());
        let env = GameEnv::new(&catalog, &config, &PcgRng);
        let mut state = GameState::new("p1", 1, &env).expect("enemies defined");
        let before = state.clone();

        let error = GameEngine::new(&mut state)
            .execute(env, &PlayerAction::auto_play_card())
            .expect_err("pre_battle phase");

        assert_eq!(error.error, ActionError::NotFighting);
        assert_eq!(state, before);
    }

    #[test]
    fn insufficient_energy_leaves_state_unchanged() {
        let (catalog, config) = (catalog(), GameConfig::default());
        let env = GameEnv::new(&catalog, &config, &PcgRng);
        let mut state = fighting(&catalog, &config);
        state.player.next_card = Some("bash".into());
        state.player.energy = 1;
        let before = state.clone();

        let error = GameEngine::new(&mut state)
            .execute(env, &PlayerAction::auto_play_card())
            .expect_err("not enough energy");

        assert_eq!(
            error.error.to_string(),
            "Not enough energy to play Bash (Cost: 2, Have: 1)."
        );
        assert_eq!(state, before);
    }

    #[test]
    fn strike_damages_enemy_and_stages_next_card() {
        let (catalog, config) = (catalog(), GameConfig::default());
        let env = GameEnv::new(&catalog, &config, &PcgRng);
        let mut state = fighting(&catalog, &config);
        state.player.combatant.hp = 50;
        state.enemy.combatant.hp = 14;
        state.player.next_card = Some("strike".into());
        let discard_before = state.player.discard_pile.len();

        GameEngine::new(&mut state)
            .execute(env, &PlayerAction::auto_play_card())
            .expect("playable");

        assert_eq!(state.enemy.combatant.hp, 8);
        assert_eq!(state.player.discard_pile.len(), discard_before + 1);
        assert!(state.player.next_card.is_some());
        assert_eq!(state.player.energy, 2);
        assert_eq!(state.player.combatant.momentum, 1);
        assert_eq!(state.turn, Side::Player);
    }

    #[test]
    fn defend_targets_self() {
        let (catalog, config) = (catalog(), GameConfig::default());
        let env = GameEnv::new(&catalog, &config, &PcgRng);
        let mut state = fighting(&catalog, &config);
        state.player.next_card = Some("defend".into());

        GameEngine::new(&mut state)
            .execute(env, &PlayerAction::auto_play_card())
            .expect("playable");

        assert_eq!(state.player.combatant.block, 5);
        assert_eq!(state.enemy.combatant.hp, state.enemy.combatant.max_hp);
    }

    #[test]
    fn momentum_cap_ends_turn_and_enemy_acts() {
        let (catalog, config) = (catalog(), GameConfig::default());
        let env = GameEnv::new(&catalog, &config, &PcgRng);
        let mut state = fighting(&catalog, &config);
        state.player.next_card = Some("defend".into());
        state.player.combatant.momentum = config.momentum_cap - 1;

        let outcome = GameEngine::new(&mut state)
            .execute(env, &PlayerAction::auto_play_card())
            .expect("playable");

        // defend's block expired at the end of the player's turn, so the
        // slime's strike landed in full
        assert_eq!(state.player.combatant.hp, config.player_max_hp - 6);
        assert_eq!(state.player.combatant.momentum, 0);
        assert_eq!(state.player.combatant.block, 0);
        assert_eq!(state.turn, Side::Player);
        assert_eq!(state.player.energy, state.player.max_energy);
        assert_eq!(state.last_enemy_card, None);
        assert!(outcome.events.contains(&CombatEvent::CardPlayed {
            side: Side::Enemy,
            card: "strike".into(),
            cost: 1,
        }));
    }

    #[test]
    fn lethal_hit_enters_reward_phase() {
        let (catalog, config) = (catalog(), GameConfig::default());
        let env = GameEnv::new(&catalog, &config, &PcgRng);
        let mut state = fighting(&catalog, &config);
        state.enemy.combatant.hp = 3;
        state.player.next_card = Some("strike".into());

        GameEngine::new(&mut state)
            .execute(env, &PlayerAction::auto_play_card())
            .expect("playable");

        assert_eq!(state.phase, Phase::Reward);
        assert_eq!(state.floor, 2);
        assert_eq!(state.enemy.combatant.hp, 0);
        assert!(!state.reward_options.is_empty());
        assert_eq!(state.player.combatant.momentum, 0);
    }
}
