use crate::combat::CombatEvent;
use crate::env::GameEnv;
use crate::state::{GameState, Phase};

use super::{ActionError, ActionTransition};

/// Leaves the pre-battle screen and stages the first card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StartBattleAction;

impl ActionTransition for StartBattleAction {
    type Error = ActionError;

    fn pre_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        if state.phase != Phase::PreBattle {
            return Err(ActionError::CannotStartBattle);
        }
        Ok(())
    }

    fn apply(
        &self,
        state: &mut GameState,
        env: &GameEnv<'_>,
        events: &mut Vec<CombatEvent>,
    ) -> Result<(), Self::Error> {
        state.phase = Phase::Fighting;
        events.push(CombatEvent::PhaseChanged {
            from: Phase::PreBattle,
            to: Phase::Fighting,
        });
        events.push(CombatEvent::BattleStarted {
            floor: state.floor,
            enemy: state.enemy.enemy_id.clone(),
        });
        state.player.draw(&mut state.rng, env, events);

        tracing::info!(
            target: "game_core::action",
            floor = state.floor,
            enemy = %state.enemy.enemy_id,
            "battle started"
        );
        Ok(())
    }
}

/// Replaces the session with a fresh run. Accepted in every phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NewGameAction {
    /// Seed of the new run's roll stream.
    pub seed: u64,
}

impl ActionTransition for NewGameAction {
    type Error = ActionError;

    fn apply(
        &self,
        state: &mut GameState,
        env: &GameEnv<'_>,
        events: &mut Vec<CombatEvent>,
    ) -> Result<(), Self::Error> {
        let fresh = GameState::new(state.player.combatant.id.clone(), self.seed, env)?;
        *state = fresh;
        events.push(CombatEvent::GameStarted {
            floor: state.floor,
            enemy: state.enemy.enemy_id.clone(),
        });

        tracing::info!(target: "game_core::action", seed = self.seed, "new game");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::PlayerAction;
    use crate::config::GameConfig;
    use crate::engine::GameEngine;
    use crate::env::{CardDefinition, CardEffect, Catalog, EnemyDefinition, PcgRng};

    fn catalog() -> Catalog {
        Catalog::new(
            vec![
                CardDefinition::new("strike", "Strike", 1).with_effect(CardEffect::Damage { value: 6 }),
                CardDefinition::new("defend", "Defend", 1).with_effect(CardEffect::Block { value: 5 }),
            ],
            vec![],
            vec![EnemyDefinition::new("slime", "Slime", 15).with_deck(["strike".into()])],
        )
    }

    #[test]
    fn start_battle_stages_first_card() {
        let (catalog, config) = (catalog(), GameConfig::default());
        let env = GameEnv::new(&catalog, &config, &PcgRng);
        let mut state = GameState::new("p1", 8, &env).expect("enemies defined");

        GameEngine::new(&mut state)
            .execute(env, &PlayerAction::start_battle())
            .expect("pre_battle phase");

        assert_eq!(state.phase, Phase::Fighting);
        assert!(state.player.next_card.is_some());
        assert_eq!(state.player.draw_pile.len(), config.starting_deck.len() - 1);
    }

    #[test]
    fn start_battle_twice_is_rejected() {
        let (catalog, config) = (catalog(), GameConfig::default());
        let env = GameEnv::new(&catalog, &config, &PcgRng);
        let mut state = GameState::new("p1", 8, &env).expect("enemies defined");
        let mut engine = GameEngine::new(&mut state);

        engine
            .execute(env, &PlayerAction::start_battle())
            .expect("first start");
        let error = engine
            .execute(env, &PlayerAction::start_battle())
            .expect_err("already fighting");
        assert_eq!(error.error, ActionError::CannotStartBattle);
    }

    #[test]
    fn new_game_resets_any_phase() {
        let (catalog, config) = (catalog(), GameConfig::default());
        let env = GameEnv::new(&catalog, &config, &PcgRng);
        let mut state = GameState::new("p1", 8, &env).expect("enemies defined");
        state.phase = Phase::GameOver;
        state.floor = 7;
        state.currency = 70;

        GameEngine::new(&mut state)
            .execute(env, &PlayerAction::new_game(99))
            .expect("always allowed");

        assert_eq!(state.phase, Phase::PreBattle);
        assert_eq!(state.floor, 1);
        assert_eq!(state.currency, 0);
        assert_eq!(state.player.combatant.id, "p1");
        assert_eq!(state.rng.seed, 99);
    }
}
