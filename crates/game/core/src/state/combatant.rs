use crate::config::GameConfig;
use crate::env::{BuffId, CardId, EnemyDefinition, EnemyId};

use super::BuffLedger;

/// Result of applying damage to a combatant.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DamageReport {
    /// Portion absorbed by block.
    pub blocked: i32,
    /// Portion subtracted from hp (after flooring at zero).
    pub hp_lost: i32,
}

/// Fields shared by the player and the enemy.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatantState {
    pub id: String,
    pub name: String,
    pub hp: i32,
    pub max_hp: i32,
    pub block: i32,
    pub momentum: i32,
    pub buffs: BuffLedger,
}

impl CombatantState {
    pub fn new(id: impl Into<String>, name: impl Into<String>, max_hp: i32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            hp: max_hp,
            max_hp,
            block: 0,
            momentum: 0,
            buffs: BuffLedger::new(),
        }
    }

    /// Block absorbs damage first; the remainder reduces hp, floored at 0.
    pub fn take_damage(&mut self, amount: i32) -> DamageReport {
        let amount = amount.max(0);
        let blocked = self.block.min(amount);
        self.block -= blocked;

        let remaining = amount - blocked;
        let hp_before = self.hp;
        self.hp = (self.hp - remaining).max(0);

        DamageReport {
            blocked,
            hp_lost: hp_before - self.hp,
        }
    }

    pub fn gain_block(&mut self, amount: i32) {
        self.block = self.block.saturating_add(amount.max(0));
    }

    /// Start-of-turn hook. No built-in buff reacts here yet.
    pub fn start_turn(&mut self) {}

    /// End-of-turn tick: buff durations count down, then block resets.
    /// Returns the ids of buffs that expired.
    pub fn end_turn(&mut self) -> Vec<BuffId> {
        let expired = self.buffs.tick();
        self.block = 0;
        expired
    }

    /// Drops everything that only lives for one fight.
    pub fn clear_combat_modifiers(&mut self) {
        self.buffs.clear();
        self.block = 0;
    }

    pub fn is_defeated(&self) -> bool {
        self.hp <= 0
    }
}

/// The human side of a session.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerState {
    pub combatant: CombatantState,
    pub energy: i32,
    pub max_energy: i32,
    /// Draw pile; the last element is the top card.
    pub draw_pile: Vec<CardId>,
    pub discard_pile: Vec<CardId>,
    /// Single staged card played by the next `autoPlayCard`.
    pub next_card: Option<CardId>,
    /// Permanent collection every fight is dealt from.
    pub all_cards: Vec<CardId>,
}

impl PlayerState {
    pub const NAME: &'static str = "Player";

    /// Player as configured at the start of a run. The draw pile is the
    /// starting deck in configured order; callers shuffle it.
    pub fn new(id: impl Into<String>, config: &GameConfig) -> Self {
        Self {
            combatant: CombatantState::new(id, Self::NAME, config.player_max_hp),
            energy: config.player_start_energy,
            max_energy: config.player_start_energy,
            draw_pile: config.starting_deck.clone(),
            discard_pile: Vec::new(),
            next_card: None,
            all_cards: config.starting_deck.clone(),
        }
    }

    /// Energy, block, momentum and buffs back to their fight-start values.
    pub fn reset_combat_resources(&mut self) {
        self.energy = self.max_energy;
        self.combatant.momentum = 0;
        self.combatant.clear_combat_modifiers();
    }

    /// Cards owned in total across draw pile, discard pile and the staged slot.
    pub fn cards_in_play(&self) -> usize {
        self.draw_pile.len() + self.discard_pile.len() + usize::from(self.next_card.is_some())
    }
}

/// The AI-controlled side of a session.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnemyState {
    pub combatant: CombatantState,
    pub enemy_id: EnemyId,
    pub max_energy: i32,
    /// Positional action list; never drawn or discarded.
    pub deck: Vec<CardId>,
    pub description: String,
}

impl EnemyState {
    /// Fresh enemy for `floor`, with max hp scaled by the floor.
    pub fn spawn(definition: &EnemyDefinition, floor: u32, config: &GameConfig) -> Self {
        let max_hp = config.scaled_enemy_hp(definition.max_hp, floor);
        Self {
            combatant: CombatantState::new(
                definition.id.as_str(),
                definition.name.clone(),
                max_hp,
            ),
            enemy_id: definition.id.clone(),
            max_energy: definition.max_energy,
            deck: definition.deck.clone(),
            description: definition.description.clone(),
        }
    }

    /// Card the enemy plays this turn.
    pub fn intent(&self) -> Option<&CardId> {
        self.deck.first()
    }
}
