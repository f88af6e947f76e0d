//! Deterministic combat rules for the deck battler.
//!
//! `game-core` defines the canonical rules (actions, engine, session state)
//! and exposes pure APIs that can be reused by the session runtime and by
//! offline tools. All state mutation flows through [`engine::GameEngine`], and
//! supporting crates depend on the types re-exported here.
pub mod action;
pub mod combat;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod state;

pub use action::{
    ActionError, ActionKind, ActionTransition, AutoPlayCardAction, NewGameAction, PlayerAction,
    SelectRewardAction, StartBattleAction,
};
pub use combat::CombatEvent;
pub use config::{GameConfig, RarityWeights};
pub use engine::{ActionOutcome, ExecuteError, GameEngine, TransitionPhase};
pub use env::{
    BuffDefinition, BuffId, BuffModifier, CardDefinition, CardEffect, CardId, Catalog,
    CatalogOracle, EnemyDefinition, EnemyId, GameEnv, IntegrityError, PcgRng, Rarity, RngOracle,
};
pub use error::{ErrorSeverity, GameError};
pub use state::{
    Buff, BuffDuration, BuffLedger, CombatantState, EnemyState, GameState, Phase, PlayerState,
    RngState, Side,
};
