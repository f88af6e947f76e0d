//! Game configuration loader.

use std::path::Path;

use game_core::GameConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for game configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Missing keys fall back to [`GameConfig::default`], so a file only needs
    /// the values it overrides.
    pub fn load(path: &Path) -> LoadResult<GameConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse config data from TOML text.
    pub fn parse(content: &str) -> LoadResult<GameConfig> {
        let config: GameConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        if config.momentum_cap <= 0 {
            anyhow::bail!("momentum_cap must be positive, got {}", config.momentum_cap);
        }
        if config.player_max_hp <= 0 {
            anyhow::bail!("player_max_hp must be positive, got {}", config.player_max_hp);
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_keeps_defaults() {
        let config = ConfigLoader::parse(
            r#"
            momentum_cap = 6
            starting_deck = ["strike", "strike", "defend"]

            [rarity_weights]
            rare = 20
            "#,
        )
        .expect("valid config");

        assert_eq!(config.momentum_cap, 6);
        assert_eq!(config.starting_deck.len(), 3);
        assert_eq!(config.player_max_hp, GameConfig::DEFAULT_PLAYER_MAX_HP);
        assert_eq!(config.rarity_weights.rare, 20);
        assert_eq!(config.rarity_weights.common, 60);
    }

    #[test]
    fn rejects_non_positive_cap() {
        let err = ConfigLoader::parse("momentum_cap = 0").unwrap_err();
        assert!(err.to_string().contains("momentum_cap"));
    }

    #[test]
    fn load_reads_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "player_max_hp = 50\n").expect("write");

        let config = ConfigLoader::load(&path).expect("load");
        assert_eq!(config.player_max_hp, 50);
    }

    #[test]
    fn load_reports_missing_file() {
        let err = ConfigLoader::load(Path::new("/nonexistent/config.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read file"));
    }
}
