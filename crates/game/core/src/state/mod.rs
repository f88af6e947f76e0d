//! Canonical session state.
//!
//! [`GameState`] is the single root owned by one session. It stores catalog
//! ids rather than definitions; the engine resolves ids through the
//! [`crate::env::CatalogOracle`] when it needs card or enemy data.
mod buffs;
mod combatant;
mod deck;

pub use buffs::{Buff, BuffDuration, BuffLedger};
pub use combatant::{CombatantState, DamageReport, EnemyState, PlayerState};
pub use deck::DrawOutcome;

use crate::env::{CardId, GameEnv, IntegrityError, RngOracle, RngStream, compute_seed};

/// Coarse lifecycle of a session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::IntoStaticStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    #[default]
    #[strum(serialize = "pre_battle")]
    #[cfg_attr(feature = "serde", serde(rename = "pre_battle"))]
    PreBattle,
    #[strum(serialize = "fighting")]
    #[cfg_attr(feature = "serde", serde(rename = "fighting"))]
    Fighting,
    #[strum(serialize = "reward")]
    #[cfg_attr(feature = "serde", serde(rename = "reward"))]
    Reward,
    #[strum(serialize = "gameOver")]
    #[cfg_attr(feature = "serde", serde(rename = "gameOver"))]
    GameOver,
}

/// Whose turn it is, and which combatant an effect reads or writes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::IntoStaticStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[strum(serialize_all = "camelCase")]
pub enum Side {
    #[default]
    Player,
    Enemy,
}

impl Side {
    pub fn opponent(self) -> Self {
        match self {
            Self::Player => Self::Enemy,
            Self::Enemy => Self::Player,
        }
    }
}

/// Position in the deterministic roll stream of a session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RngState {
    pub seed: u64,
    /// Incremented by every roll.
    pub nonce: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed, nonce: 0 }
    }

    pub fn next_u32(&mut self, oracle: &dyn RngOracle, stream: RngStream) -> u32 {
        let seed = compute_seed(self.seed, self.nonce, stream);
        self.nonce = self.nonce.wrapping_add(1);
        oracle.next_u32(seed)
    }

    /// Uniform index in `0..bound`. Returns 0 when `bound` is 0.
    pub fn below(&mut self, oracle: &dyn RngOracle, stream: RngStream, bound: usize) -> usize {
        if bound <= 1 {
            return 0;
        }
        let bound = u32::try_from(bound).unwrap_or(u32::MAX);
        (self.next_u32(oracle, stream) % bound) as usize
    }

    /// In-place Fisher–Yates shuffle.
    pub fn shuffle<T>(&mut self, oracle: &dyn RngOracle, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = self.below(oracle, RngStream::Shuffle, i + 1);
            items.swap(i, j);
        }
    }
}

/// Root state of one player session.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    /// 1-based; incremented on every won fight.
    pub floor: u32,
    pub phase: Phase,
    pub turn: Side,
    pub player: PlayerState,
    pub enemy: EnemyState,
    /// Reward sets offered after the last won fight.
    pub reward_options: Vec<Vec<CardId>>,
    pub current_reward_set: usize,
    pub currency: u32,
    /// Card the enemy played during the turn currently being resolved.
    pub last_enemy_card: Option<CardId>,
    pub rng: RngState,
}

impl GameState {
    /// Fresh run: full hp, starting deck shuffled, floor 1, waiting for
    /// `startBattle`.
    pub fn new(player_id: impl Into<String>, seed: u64, env: &GameEnv<'_>) -> Result<Self, IntegrityError> {
        let config = env.config();
        let floor = 1;
        let enemy = env
            .catalog()
            .enemy_for_floor(floor)
            .ok_or(IntegrityError::NoEnemies)?;

        for card in &config.starting_deck {
            if env.catalog().card(card).is_none() {
                tracing::warn!(
                    target: "game_core::state",
                    card = %card,
                    "starting deck references unknown card"
                );
            }
        }

        let mut state = Self {
            floor,
            phase: Phase::PreBattle,
            turn: Side::Player,
            player: PlayerState::new(player_id, config),
            enemy: EnemyState::spawn(enemy, floor, config),
            reward_options: Vec::new(),
            current_reward_set: 0,
            currency: 0,
            last_enemy_card: None,
            rng: RngState::new(seed),
        };
        state.rng.shuffle(env.rng(), &mut state.player.draw_pile);
        Ok(state)
    }

    pub fn combatant(&self, side: Side) -> &CombatantState {
        match side {
            Side::Player => &self.player.combatant,
            Side::Enemy => &self.enemy.combatant,
        }
    }

    pub fn combatant_mut(&mut self, side: Side) -> &mut CombatantState {
        match side {
            Side::Player => &mut self.player.combatant,
            Side::Enemy => &mut self.enemy.combatant,
        }
    }

    /// Reward set the player is currently choosing from.
    pub fn current_rewards(&self) -> Option<&[CardId]> {
        self.reward_options
            .get(self.current_reward_set)
            .map(Vec::as_slice)
    }

    pub fn is_fighting(&self) -> bool {
        self.phase == Phase::Fighting
    }

    /// Checks hp bounds on both sides.
    pub fn check_invariants(&self) -> Result<(), IntegrityError> {
        for side in [Side::Player, Side::Enemy] {
            let combatant = self.combatant(side);
            if combatant.hp < 0 || combatant.hp > combatant.max_hp || combatant.block < 0 {
                return Err(IntegrityError::HpOutOfBounds {
                    side,
                    hp: combatant.hp,
                    max_hp: combatant.max_hp,
                });
            }
        }
        Ok(())
    }
}
