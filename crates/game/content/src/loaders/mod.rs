//! Content loaders for reading game data from files.
//!
//! Each loader parses one file format into game-core definitions. The
//! [`ContentFactory`] ties them together for a data directory and
//! [`validate_content`] checks cross references before a catalog is built.

pub mod buffs;
pub mod cards;
pub mod config;
pub mod enemies;
pub mod factory;
pub mod validate;

pub use buffs::BuffLoader;
pub use cards::{CardLoader, EffectSpec};
pub use config::ConfigLoader;
pub use enemies::EnemyLoader;
pub use factory::{ContentFactory, ContentPack};
pub use validate::validate_content;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
