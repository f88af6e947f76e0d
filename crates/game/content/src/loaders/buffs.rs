//! Buff catalog loader.

use std::path::Path;

use game_core::BuffDefinition;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Buff catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuffCatalog {
    pub buffs: Vec<BuffDefinition>,
}

/// Loader for buff catalog from RON files.
pub struct BuffLoader;

impl BuffLoader {
    pub fn load(path: &Path) -> LoadResult<Vec<BuffDefinition>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<Vec<BuffDefinition>> {
        let catalog: BuffCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse buff catalog RON: {}", e))?;

        Ok(catalog.buffs)
    }
}
