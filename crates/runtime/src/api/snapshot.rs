//! Client-facing views of session state.
//!
//! Snapshots resolve catalog ids into full definitions where a client needs
//! to render them (the staged card, reward options) and reduce piles to their
//! sizes. They are derived on demand and never stored.

use serde::{Deserialize, Serialize};

use game_core::{
    Buff, BuffDefinition, BuffDuration, CardDefinition, CardId, CatalogOracle, CombatantState,
    EnemyDefinition, EnemyId, GameConfig, GameState, Phase, Side,
};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuffView {
    pub id: String,
    pub name: String,
    pub description: String,
    pub stacks: i32,
    /// Remaining turns; `None` while `permanent` is set.
    pub duration: Option<u32>,
    pub permanent: bool,
}

impl From<&Buff> for BuffView {
    fn from(buff: &Buff) -> Self {
        let duration = match buff.duration {
            BuffDuration::Turns(turns) => Some(turns),
            BuffDuration::Permanent => None,
        };
        Self {
            id: buff.id.to_string(),
            name: buff.name.clone(),
            description: buff.description.clone(),
            stacks: buff.stacks,
            duration,
            permanent: buff.duration.is_permanent(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CombatantView {
    pub id: String,
    pub name: String,
    pub hp: i32,
    pub max_hp: i32,
    pub block: i32,
    pub momentum: i32,
    pub buffs: Vec<BuffView>,
}

impl From<&CombatantState> for CombatantView {
    fn from(combatant: &CombatantState) -> Self {
        Self {
            id: combatant.id.clone(),
            name: combatant.name.clone(),
            hp: combatant.hp,
            max_hp: combatant.max_hp,
            block: combatant.block,
            momentum: combatant.momentum,
            buffs: combatant.buffs.iter().map(BuffView::from).collect(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerView {
    #[serde(flatten)]
    pub combatant: CombatantView,
    pub energy: i32,
    pub max_energy: i32,
    pub draw_pile_size: usize,
    pub discard_pile_size: usize,
    pub all_cards_size: usize,
    pub next_card: Option<CardDefinition>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnemyView {
    #[serde(flatten)]
    pub combatant: CombatantView,
    pub enemy_id: EnemyId,
    /// Enemies play one card per turn regardless of energy, so this always
    /// equals `max_energy`.
    pub energy: i32,
    pub max_energy: i32,
    pub description: String,
    /// Card the enemy will play on its next turn.
    pub intent: Option<CardId>,
}

/// Full session view pushed to clients after every accepted action.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StateSnapshot {
    pub floor: u32,
    pub phase: Phase,
    pub turn: Side,
    pub player: PlayerView,
    pub enemy: EnemyView,
    /// Present in the reward phase only.
    pub reward_options: Option<Vec<Vec<CardDefinition>>>,
    pub current_reward_set: Option<usize>,
    pub currency: u32,
    pub last_enemy_card: Option<CardId>,
}

impl StateSnapshot {
    pub fn capture(state: &GameState, catalog: &dyn CatalogOracle) -> Self {
        let player = &state.player;
        let enemy = &state.enemy;

        let in_reward = state.phase == Phase::Reward;
        let reward_options = in_reward.then(|| {
            state
                .reward_options
                .iter()
                .map(|set| {
                    set.iter()
                        .filter_map(|id| catalog.card(id).cloned())
                        .collect()
                })
                .collect()
        });

        Self {
            floor: state.floor,
            phase: state.phase,
            turn: state.turn,
            player: PlayerView {
                combatant: CombatantView::from(&player.combatant),
                energy: player.energy,
                max_energy: player.max_energy,
                draw_pile_size: player.draw_pile.len(),
                discard_pile_size: player.discard_pile.len(),
                all_cards_size: player.all_cards.len(),
                next_card: player
                    .next_card
                    .as_ref()
                    .and_then(|id| catalog.card(id).cloned()),
            },
            enemy: EnemyView {
                combatant: CombatantView::from(&enemy.combatant),
                enemy_id: enemy.enemy_id.clone(),
                energy: enemy.max_energy,
                max_energy: enemy.max_energy,
                description: enemy.description.clone(),
                intent: enemy.intent().cloned(),
            },
            reward_options,
            current_reward_set: in_reward.then_some(state.current_reward_set),
            currency: state.currency,
            last_enemy_card: state.last_enemy_card.clone(),
        }
    }
}

/// Static content sent once when a client connects.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogSnapshot {
    pub cards: Vec<CardDefinition>,
    pub buffs: Vec<BuffDefinition>,
    pub enemies: Vec<EnemyDefinition>,
    pub config: GameConfig,
}

impl CatalogSnapshot {
    pub fn capture(catalog: &dyn CatalogOracle, config: &GameConfig) -> Self {
        Self {
            cards: catalog.cards().to_vec(),
            buffs: catalog.buffs().to_vec(),
            enemies: catalog.enemies().to_vec(),
            config: config.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{
        BuffModifier, CardEffect, Catalog, GameEnv, PcgRng, Rarity,
    };

    fn catalog() -> Catalog {
        Catalog::new(
            vec![
                CardDefinition::new("strike", "Strike", 1)
                    .with_rarity(Rarity::Basic)
                    .with_effect(CardEffect::Damage { value: 6 }),
                CardDefinition::new("defend", "Defend", 1)
                    .with_rarity(Rarity::Basic)
                    .with_effect(CardEffect::Block { value: 5 }),
                CardDefinition::new("uppercut", "Uppercut", 2)
                    .with_effect(CardEffect::Damage { value: 13 }),
            ],
            vec![BuffDefinition::new("strength", "Strength", BuffModifier::Strength).permanent()],
            vec![EnemyDefinition::new("slime", "Slime", 15).with_deck(["strike".into()])],
        )
    }

    #[test]
    fn snapshot_serializes_camel_case_and_hides_rewards_outside_reward_phase() {
        let catalog = catalog();
        let config = GameConfig::default();
        let env = GameEnv::new(&catalog, &config, &PcgRng);
        let mut state = GameState::new("p1", 3, &env).expect("enemies defined");
        state.reward_options = vec![vec!["uppercut".into()]];

        let json = serde_json::to_value(StateSnapshot::capture(&state, &catalog)).expect("json");

        assert_eq!(json["phase"], "pre_battle");
        assert_eq!(json["player"]["maxHp"], 75);
        assert_eq!(json["player"]["drawPileSize"], 8);
        assert_eq!(json["player"]["allCardsSize"], 8);
        assert_eq!(json["enemy"]["enemyId"], "slime");
        assert_eq!(json["enemy"]["intent"], "strike");
        assert!(json["rewardOptions"].is_null());
        assert!(json["currentRewardSet"].is_null());
    }

    #[test]
    fn reward_options_resolve_to_definitions() {
        let catalog = catalog();
        let config = GameConfig::default();
        let env = GameEnv::new(&catalog, &config, &PcgRng);
        let mut state = GameState::new("p1", 3, &env).expect("enemies defined");
        state.phase = Phase::Reward;
        state.reward_options = vec![vec!["uppercut".into(), "missing".into()]];
        state.player.next_card = Some("defend".into());

        let snapshot = StateSnapshot::capture(&state, &catalog);

        let sets = snapshot.reward_options.expect("reward phase");
        assert_eq!(sets[0].len(), 1);
        assert_eq!(sets[0][0].name, "Uppercut");
        assert_eq!(snapshot.current_reward_set, Some(0));
        assert_eq!(snapshot.player.next_card.map(|card| card.name), Some("Defend".into()));
    }

    #[test]
    fn permanent_buffs_have_no_duration() {
        let catalog = catalog();
        let strength = catalog.buff(&"strength".into()).expect("defined");
        let mut combatant = CombatantState::new("p1", "Player", 10);
        combatant.buffs.apply(strength, 2, BuffDuration::Permanent);

        let view = CombatantView::from(&combatant);
        assert_eq!(view.buffs[0].duration, None);
        assert!(view.buffs[0].permanent);
        assert_eq!(view.buffs[0].stacks, 2);
    }
}
