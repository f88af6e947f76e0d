//! Shared static content for every session.
//!
//! [`OracleManager`] bundles the catalog and balance config behind `Arc`s so
//! each session worker can build [`game_core::GameEnv`] views on demand. The
//! data is immutable at runtime; dynamic state lives in session workers and
//! repositories.
use std::path::Path;
use std::sync::Arc;

use game_content::{ContentFactory, LoadResult};
use game_core::{Catalog, CatalogOracle, GameConfig, GameEnv, PcgRng};

/// Manages the content oracles and provides unified access
#[derive(Clone)]
pub struct OracleManager {
    pub(crate) catalog: Arc<Catalog>,
    pub(crate) config: Arc<GameConfig>,
    pub(crate) rng: PcgRng,
}

impl OracleManager {
    /// Creates a new oracle manager
    pub fn new(catalog: Arc<Catalog>, config: Arc<GameConfig>) -> Self {
        Self {
            catalog,
            config,
            rng: PcgRng, // PcgRng is stateless
        }
    }

    /// Oracles backed by the content pack compiled into `game-content`.
    pub fn builtin() -> LoadResult<Self> {
        let (config, catalog) = game_content::builtin::catalog()?;
        Ok(Self::new(Arc::new(catalog), Arc::new(config)))
    }

    /// Oracles backed by a content data directory.
    pub fn from_data_dir(data_dir: &Path) -> LoadResult<Self> {
        let (config, catalog) = ContentFactory::new(data_dir)
            .load_pack()?
            .into_catalog()?;
        Ok(Self::new(Arc::new(catalog), Arc::new(config)))
    }

    /// Converts oracle manager into GameEnv for game-core
    pub fn as_game_env(&self) -> GameEnv<'_> {
        GameEnv::new(self.catalog.as_ref(), self.config.as_ref(), &self.rng)
    }

    pub fn catalog(&self) -> &dyn CatalogOracle {
        self.catalog.as_ref()
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }
}
