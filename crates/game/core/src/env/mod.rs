//! Read-only data consulted by the rules.
//!
//! The catalog exposes card, buff and enemy definitions; the RNG oracle turns
//! seeds into rolls. [`GameEnv`] bundles them with the [`GameConfig`] so the
//! engine can access everything it needs without hard coupling to concrete
//! implementations.
mod buffs;
mod cards;
mod catalog;
mod enemies;
mod error;
mod ids;
mod rng;

pub use buffs::{BuffDefinition, BuffModifier};
pub use cards::{CardDefinition, CardEffect, Rarity};
pub use catalog::{Catalog, CatalogOracle};
pub use enemies::EnemyDefinition;
pub use error::IntegrityError;
pub use ids::{BuffId, CardId, EnemyId};
pub use rng::{PcgRng, RngOracle, RngStream, compute_seed};

use crate::config::GameConfig;

/// Aggregates the read-only collaborators required by the engine.
#[derive(Clone, Copy)]
pub struct GameEnv<'a> {
    catalog: &'a dyn CatalogOracle,
    config: &'a GameConfig,
    rng: &'a dyn RngOracle,
}

impl<'a> GameEnv<'a> {
    pub fn new(
        catalog: &'a dyn CatalogOracle,
        config: &'a GameConfig,
        rng: &'a dyn RngOracle,
    ) -> Self {
        Self {
            catalog,
            config,
            rng,
        }
    }

    pub fn catalog(&self) -> &'a dyn CatalogOracle {
        self.catalog
    }

    pub fn config(&self) -> &'a GameConfig {
        self.config
    }

    pub fn rng(&self) -> &'a dyn RngOracle {
        self.rng
    }

    /// Looks up a card, reporting a missing definition as an integrity error.
    pub fn card(&self, id: &CardId) -> Result<&'a CardDefinition, IntegrityError> {
        self.catalog
            .card(id)
            .ok_or_else(|| IntegrityError::MissingCard(id.clone()))
    }

    /// Looks up a buff, reporting a missing definition as an integrity error.
    pub fn buff(&self, id: &BuffId) -> Result<&'a BuffDefinition, IntegrityError> {
        self.catalog
            .buff(id)
            .ok_or_else(|| IntegrityError::MissingBuff(id.clone()))
    }
}

impl core::fmt::Debug for GameEnv<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("GameEnv")
            .field("cards", &self.catalog.cards().len())
            .field("buffs", &self.catalog.buffs().len())
            .field("enemies", &self.catalog.enemies().len())
            .field("config", self.config)
            .finish()
    }
}
