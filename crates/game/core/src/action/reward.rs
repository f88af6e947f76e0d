use crate::combat::CombatEvent;
use crate::config::GameConfig;
use crate::engine::fight;
use crate::env::GameEnv;
use crate::state::{GameState, Phase};

use super::{ActionError, ActionTransition};

/// Takes a card from the current reward set, or skips it with `-1`.
/// Finishing the last set starts the next fight.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SelectRewardAction {
    pub card_index: i32,
}

impl SelectRewardAction {
    fn is_skip(&self) -> bool {
        self.card_index == GameConfig::SKIP_REWARD
    }
}

impl ActionTransition for SelectRewardAction {
    type Error = ActionError;

    fn pre_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        if state.phase != Phase::Reward {
            return Err(ActionError::NotRewardPhase);
        }
        if self.is_skip() {
            return Ok(());
        }
        let offered = state.current_rewards().map_or(0, <[_]>::len);
        match usize::try_from(self.card_index) {
            Ok(index) if index < offered => Ok(()),
            _ => Err(ActionError::InvalidRewardIndex {
                index: self.card_index,
            }),
        }
    }

    fn apply(
        &self,
        state: &mut GameState,
        env: &GameEnv<'_>,
        events: &mut Vec<CombatEvent>,
    ) -> Result<(), Self::Error> {
        let chosen = if self.is_skip() {
            None
        } else {
            usize::try_from(self.card_index)
                .ok()
                .and_then(|index| state.current_rewards()?.get(index).cloned())
        };

        if let Some(card) = &chosen {
            state.player.discard_pile.push(card.clone());
            state.player.all_cards.push(card.clone());
        }
        tracing::debug!(
            target: "game_core::action",
            set = state.current_reward_set,
            card = ?chosen,
            "reward resolved"
        );
        events.push(CombatEvent::RewardChosen { card: chosen });

        state.current_reward_set += 1;
        if state.current_reward_set >= state.reward_options.len() {
            fight::start_next_fight(state, env, events)?;
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
    use crate::engine::GameEngine;
    use crate::env::{CardDefinition, CardEffect, CardId, Catalog, EnemyDefinition, PcgRng};
    use crate::state::Side;

    fn catalog() -> Catalog {
        Catalog::new(
            vec![
                CardDefinition::new("strike", "Strike", 1).with_effect(CardEffect::Damage { value: 6 }),
                CardDefinition::new("defend", "Defend", 1).with_effect(CardEffect::Block { value: 5 }),
                CardDefinition::new("bash", "Bash", 2).with_effect(CardEffect::Damage { value: 8 }),
                CardDefinition::new("quick_slash", "Quick Slash", 0)
                    .with_effect(CardEffect::Damage { value: 3 }),
            ],
            vec![],
            vec![
                EnemyDefinition::new("slime", "Slime", 15).with_deck(["strike".into()]),
                EnemyDefinition::new("cultist", "Cultist", 30).with_deck(["strike".into()]),
            ],
        )
    }

    fn in_reward_phase(env: &GameEnv<'_>) -> GameState {
        let mut state = GameState::new("p1", 3, env).expect("enemies defined");
        state.phase = Phase::Reward;
        state.floor = 2;
        state.reward_options = vec![
            vec!["bash".into(), "quick_slash".into()],
            vec!["quick_slash".into()],
        ];
        state
    }

    #[test]
    fn rejects_out_of_range_index() {
        let (catalog, config) = (catalog(), GameConfig::default());
        let env = GameEnv::new(&catalog, &config, &PcgRng);
        let mut state = in_reward_phase(&env);
        let before = state.clone();

        for index in [2, -2, 40] {
            let error = GameEngine::new(&mut state)
                .execute(env, &PlayerAction::select_reward(index))
                .expect_err("index out of range");
            assert_eq!(error.error, ActionError::InvalidRewardIndex { index });
        }
        assert_eq!(state, before);
    }

    #[test]
    fn rejects_outside_reward_phase() {
        let (catalog, config) = (catalog(), GameConfig::default());
        let env = GameEnv::new(&catalog, &config, &PcgRng);
        let mut state = GameState::new("p1", 3, &env).expect("enemies defined");

        let error = GameEngine::new(&mut state)
            .execute(env, &PlayerAction::select_reward(0))
            .expect_err("pre_battle phase");
        assert_eq!(error.error, ActionError::NotRewardPhase);
    }

    #[test]
    fn chosen_card_joins_collection() {
        let (catalog, config) = (catalog(), GameConfig::default());
        let env = GameEnv::new(&catalog, &config, &PcgRng);
        let mut state = in_reward_phase(&env);

        GameEngine::new(&mut state)
            .execute(env, &PlayerAction::select_reward(0))
            .expect("valid index");

        assert_eq!(state.current_reward_set, 1);
        assert_eq!(state.phase, Phase::Reward);
        assert_eq!(state.player.all_cards.last(), Some(&CardId::from("bash")));
        assert_eq!(state.player.discard_pile.last(), Some(&CardId::from("bash")));
    }

    #[test]
    fn finishing_last_set_starts_next_fight() {
        let (catalog, config) = (catalog(), GameConfig::default());
        let env = GameEnv::new(&catalog, &config, &PcgRng);
        let mut state = in_reward_phase(&env);
        state.player.combatant.block = 4;
        state.player.energy = 0;

        let mut engine = GameEngine::new(&mut state);
        engine
            .execute(env, &PlayerAction::select_reward(1))
            .expect("valid index");
        engine
            .execute(env, &PlayerAction::select_reward(-1))
            .expect("skip");

        assert_eq!(state.phase, Phase::Fighting);
        assert_eq!(state.turn, Side::Player);
        assert_eq!(state.enemy.enemy_id.as_str(), "cultist");
        assert_eq!(state.enemy.combatant.hp, config.scaled_enemy_hp(30, 2));
        assert!(state.reward_options.is_empty());
        assert_eq!(state.player.all_cards.len(), 9);
        assert_eq!(state.player.draw_pile.len() + 1, state.player.all_cards.len());
        assert!(state.player.discard_pile.is_empty());
        assert!(state.player.next_card.is_some());
        assert_eq!(state.player.energy, state.player.max_energy);
        assert_eq!(state.player.combatant.block, 0);
    }

    #[test]
    fn skip_with_no_sets_advances_immediately() {
        let (catalog, config) = (catalog(), GameConfig::default());
        let env = GameEnv::new(&catalog, &config, &PcgRng);
        let mut state = in_reward_phase(&env);
        state.reward_options.clear();

        let error = GameEngine::new(&mut state)
            .execute(env, &PlayerAction::select_reward(0))
            .expect_err("nothing to pick");
        assert_eq!(error.error, ActionError::InvalidRewardIndex { index: 0 });

        GameEngine::new(&mut state)
            .execute(env, &PlayerAction::select_reward(-1))
            .expect("skip");
        assert_eq!(state.phase, Phase::Fighting);
    }
}
