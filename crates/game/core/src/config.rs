use crate::env::{CardId, Rarity};

/// Relative weights used when rolling the rarity of a reward card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RarityWeights {
    pub common: u32,
    pub uncommon: u32,
    pub rare: u32,
}

impl RarityWeights {
    pub const DEFAULT_COMMON: u32 = 60;
    pub const DEFAULT_UNCOMMON: u32 = 30;
    pub const DEFAULT_RARE: u32 = 10;

    /// Weight of a rarity tier. Basic cards never appear as rewards.
    pub fn weight(&self, rarity: Rarity) -> u32 {
        match rarity {
            Rarity::Basic => 0,
            Rarity::Common => self.common,
            Rarity::Uncommon => self.uncommon,
            Rarity::Rare => self.rare,
        }
    }

    /// Moves `shift_per_floor` weight per floor above the first from common
    /// into the uncommon and rare tiers (half each). Common never drops below 0.
    pub fn for_floor(&self, floor: u32, shift_per_floor: u32) -> Self {
        let shift = floor.saturating_sub(1).saturating_mul(shift_per_floor);
        let moved = shift.min(self.common);
        let to_rare = moved / 2;
        Self {
            common: self.common - moved,
            uncommon: self.uncommon.saturating_add(moved - to_rare),
            rare: self.rare.saturating_add(to_rare),
        }
    }
}

impl Default for RarityWeights {
    fn default() -> Self {
        Self {
            common: Self::DEFAULT_COMMON,
            uncommon: Self::DEFAULT_UNCOMMON,
            rare: Self::DEFAULT_RARE,
        }
    }
}

/// Game configuration constants and tunable parameters.
///
/// Every balance number the rules consult lives here so content packs can
/// override them from `config.toml` without touching code.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    pub player_max_hp: i32,
    pub player_start_energy: i32,
    /// Momentum at or above this value ends the player's turn.
    pub momentum_cap: i32,
    pub starting_deck: Vec<CardId>,

    pub momentum_per_card: i32,
    pub momentum_per_zero_cost_card: i32,
    pub momentum_per_shuffle: i32,

    /// Cards offered per reward set.
    pub reward_choices: usize,
    /// Reward sets offered after each won fight.
    pub reward_sets: usize,
    pub currency_per_floor: u32,

    /// Percent of base max hp added to an enemy for every floor above the first.
    pub enemy_hp_growth_percent: u32,
    pub rarity_weights: RarityWeights,
    pub rarity_shift_per_floor: u32,
}

impl GameConfig {
    // ===== rule constants =====
    /// Damage multiplier against vulnerable targets, as a fraction (x1.5).
    pub const VULNERABLE_NUMERATOR: i32 = 3;
    pub const VULNERABLE_DENOMINATOR: i32 = 2;
    /// Turns a non-permanent buff lasts when applied by a card.
    pub const DEFAULT_BUFF_DURATION: u32 = 1;
    /// Reward index that skips the current set.
    pub const SKIP_REWARD: i32 = -1;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_PLAYER_MAX_HP: i32 = 75;
    pub const DEFAULT_PLAYER_START_ENERGY: i32 = 3;
    pub const DEFAULT_MOMENTUM_CAP: i32 = 10;
    pub const DEFAULT_MOMENTUM_PER_CARD: i32 = 1;
    pub const DEFAULT_MOMENTUM_PER_ZERO_COST_CARD: i32 = 2;
    pub const DEFAULT_MOMENTUM_PER_SHUFFLE: i32 = 3;
    pub const DEFAULT_REWARD_CHOICES: usize = 3;
    pub const DEFAULT_REWARD_SETS: usize = 2;
    pub const DEFAULT_CURRENCY_PER_FLOOR: u32 = 10;
    pub const DEFAULT_ENEMY_HP_GROWTH_PERCENT: u32 = 10;
    pub const DEFAULT_RARITY_SHIFT_PER_FLOOR: u32 = 4;

    pub fn new() -> Self {
        let starting_deck = core::iter::repeat_n(CardId::from("strike"), 4)
            .chain(core::iter::repeat_n(CardId::from("defend"), 4))
            .collect();

        Self {
            player_max_hp: Self::DEFAULT_PLAYER_MAX_HP,
            player_start_energy: Self::DEFAULT_PLAYER_START_ENERGY,
            momentum_cap: Self::DEFAULT_MOMENTUM_CAP,
            starting_deck,
            momentum_per_card: Self::DEFAULT_MOMENTUM_PER_CARD,
            momentum_per_zero_cost_card: Self::DEFAULT_MOMENTUM_PER_ZERO_COST_CARD,
            momentum_per_shuffle: Self::DEFAULT_MOMENTUM_PER_SHUFFLE,
            reward_choices: Self::DEFAULT_REWARD_CHOICES,
            reward_sets: Self::DEFAULT_REWARD_SETS,
            currency_per_floor: Self::DEFAULT_CURRENCY_PER_FLOOR,
            enemy_hp_growth_percent: Self::DEFAULT_ENEMY_HP_GROWTH_PERCENT,
            rarity_weights: RarityWeights::default(),
            rarity_shift_per_floor: Self::DEFAULT_RARITY_SHIFT_PER_FLOOR,
        }
    }

    /// Momentum granted for playing a card of the given cost.
    pub fn momentum_for_cost(&self, cost: i32) -> i32 {
        if cost == 0 {
            self.momentum_per_zero_cost_card
        } else {
            self.momentum_per_card
        }
    }

    /// Max hp of an enemy with `base_hp` spawned on `floor`.
    pub fn scaled_enemy_hp(&self, base_hp: i32, floor: u32) -> i32 {
        let growth = i64::from(floor.saturating_sub(1)) * i64::from(self.enemy_hp_growth_percent);
        let scaled = i64::from(base_hp) * (100 + growth) / 100;
        i32::try_from(scaled).unwrap_or(i32::MAX).max(1)
    }

    /// Whether the card id belongs to the fixed starting deck.
    pub fn is_starting_card(&self, id: &CardId) -> bool {
        self.starting_deck.iter().any(|card| card == id)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_balance_sheet() {
        let config = GameConfig::default();
        assert_eq!(config.player_max_hp, 75);
        assert_eq!(config.player_start_energy, 3);
        assert_eq!(config.momentum_cap, 10);
        assert_eq!(config.starting_deck.len(), 8);
        assert_eq!(
            config
                .starting_deck
                .iter()
                .filter(|id| id.as_str() == "strike")
                .count(),
            4
        );
    }

    #[test]
    fn momentum_depends_on_cost() {
        let config = GameConfig::default();
        assert_eq!(config.momentum_for_cost(0), 2);
        assert_eq!(config.momentum_for_cost(1), 1);
        assert_eq!(config.momentum_for_cost(3), 1);
    }

    #[test]
    fn enemy_hp_scales_with_floor() {
        let config = GameConfig::default();
        assert_eq!(config.scaled_enemy_hp(15, 1), 15);
        assert_eq!(config.scaled_enemy_hp(15, 2), 16);
        assert_eq!(config.scaled_enemy_hp(20, 6), 30);
    }

    #[test]
    fn rarity_weights_shift_towards_rare_cards() {
        let weights = RarityWeights::default();
        assert_eq!(weights.for_floor(1, 4), weights);

        let shifted = weights.for_floor(3, 4);
        assert_eq!(shifted.common, 52);
        assert_eq!(shifted.uncommon, 34);
        assert_eq!(shifted.rare, 14);

        let drained = weights.for_floor(100, 4);
        assert_eq!(drained.common, 0);
        assert_eq!(drained.uncommon + drained.rare, 100);
    }
}
