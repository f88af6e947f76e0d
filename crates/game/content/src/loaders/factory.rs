//! Content factory for building catalogs from data files.

use std::path::{Path, PathBuf};

use game_core::{BuffDefinition, CardDefinition, Catalog, EnemyDefinition, GameConfig};

use crate::loaders::{BuffLoader, CardLoader, ConfigLoader, EnemyLoader, LoadResult, validate_content};

/// Everything a session runtime needs from a content source.
#[derive(Clone, Debug)]
pub struct ContentPack {
    pub config: GameConfig,
    pub cards: Vec<CardDefinition>,
    pub buffs: Vec<BuffDefinition>,
    pub enemies: Vec<EnemyDefinition>,
}

impl ContentPack {
    /// Runs [`validate_content`] over the pack.
    pub fn validate(&self) -> LoadResult<usize> {
        validate_content(&self.config, &self.cards, &self.buffs, &self.enemies)
    }

    /// Validates the pack and splits it into the config and a lookup catalog.
    pub fn into_catalog(self) -> LoadResult<(GameConfig, Catalog)> {
        let dangling = self.validate()?;
        tracing::info!(
            target: "game_content::loaders",
            cards = self.cards.len(),
            buffs = self.buffs.len(),
            enemies = self.enemies.len(),
            dangling,
            "content pack loaded"
        );
        Ok((
            self.config,
            Catalog::new(self.cards, self.buffs, self.enemies),
        ))
    }
}

/// Content factory that loads all game content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml   (optional)
/// ├── cards.ron
/// ├── buffs.ron
/// └── enemies.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load game configuration from `config.toml`, falling back to
    /// [`GameConfig::default`] when the file does not exist.
    pub fn load_config(&self) -> LoadResult<GameConfig> {
        let path = self.data_dir.join("config.toml");
        if !path.exists() {
            tracing::info!(
                target: "game_content::loaders",
                path = %path.display(),
                "no config.toml, using default game config"
            );
            return Ok(GameConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load card catalog from `cards.ron`.
    pub fn load_cards(&self) -> LoadResult<Vec<CardDefinition>> {
        CardLoader::load(&self.data_dir.join("cards.ron"))
    }

    /// Load buff catalog from `buffs.ron`.
    pub fn load_buffs(&self) -> LoadResult<Vec<BuffDefinition>> {
        BuffLoader::load(&self.data_dir.join("buffs.ron"))
    }

    /// Load enemy roster from `enemies.ron`.
    pub fn load_enemies(&self) -> LoadResult<Vec<EnemyDefinition>> {
        EnemyLoader::load(&self.data_dir.join("enemies.ron"))
    }

    /// Load every file of the directory into one pack.
    pub fn load_pack(&self) -> LoadResult<ContentPack> {
        Ok(ContentPack {
            config: self.load_config()?,
            cards: self.load_cards()?,
            buffs: self.load_buffs()?,
            enemies: self.load_enemies()?,
        })
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::CatalogOracle;

    #[test]
    fn test_factory_paths() {
        let factory = ContentFactory::new("/tmp/data");
        assert_eq!(factory.data_dir(), Path::new("/tmp/data"));
    }

    #[test]
    fn loads_pack_without_config() {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::write(
            dir.path().join("cards.ron"),
            r#"(cards: [(id: "strike", name: "Strike", cost: 1, rarity: basic, effects: [(kind: "damage", value: Some(6))])])"#,
        )
        .expect("write cards");
        std::fs::write(dir.path().join("buffs.ron"), "(buffs: [])").expect("write buffs");
        std::fs::write(
            dir.path().join("enemies.ron"),
            r#"(enemies: [(id: "slime", name: "Slime", maxHp: 15, maxEnergy: 1, deck: ["strike"])])"#,
        )
        .expect("write enemies");

        let pack = ContentFactory::new(dir.path()).load_pack().expect("load");
        assert_eq!(pack.config, GameConfig::default());

        let (_, catalog) = pack.into_catalog().expect("valid pack");
        assert!(catalog.card(&"strike".into()).is_some());
        assert_eq!(catalog.enemy_for_floor(3).map(|e| e.id.as_str()), Some("slime"));
    }

    #[test]
    fn missing_cards_file_is_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let err = ContentFactory::new(dir.path()).load_cards().unwrap_err();
        assert!(err.to_string().contains("cards.ron"));
    }
}
