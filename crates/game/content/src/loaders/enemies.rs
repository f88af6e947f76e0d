//! Enemy roster loader.

use std::path::Path;

use game_core::EnemyDefinition;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Enemy roster structure for RON files. Order matters: floors cycle through
/// the list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyRoster {
    pub enemies: Vec<EnemyDefinition>,
}

/// Loader for the enemy roster from RON files.
pub struct EnemyLoader;

impl EnemyLoader {
    pub fn load(path: &Path) -> LoadResult<Vec<EnemyDefinition>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<Vec<EnemyDefinition>> {
        let roster: EnemyRoster = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse enemy roster RON: {}", e))?;

        if let Some(enemy) = roster.enemies.iter().find(|enemy| enemy.max_hp <= 0) {
            anyhow::bail!("enemy '{}' has non-positive max hp {}", enemy.id, enemy.max_hp);
        }

        Ok(roster.enemies)
    }
}
