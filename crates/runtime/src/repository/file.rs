//! File-based StateRepository implementation.

use std::fs;
use std::path::{Path, PathBuf};

use game_core::GameState;

use super::error::{RepositoryError, Result};
use super::traits::StateRepository;

/// File-based implementation of StateRepository.
///
/// Stores one bincode file per player, `session_{hex(player_id)}.bin`,
/// written to a temp file first and renamed into place. Hex keeps any
/// player id a valid, flat file name.
pub struct FileStateRepository {
    base_dir: PathBuf,
}

const FILE_PREFIX: &str = "session_";
const FILE_SUFFIX: &str = ".bin";

impl FileStateRepository {
    /// Create a new file-based state repository.
    pub fn new(base_dir: impl AsRef<Path>) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        fs::create_dir_all(&base_dir).map_err(RepositoryError::Io)?;
        Ok(Self { base_dir })
    }

    /// Get the path to a state file.
    fn state_path(&self, player_id: &str) -> Result<PathBuf> {
        if player_id.is_empty() {
            return Err(RepositoryError::InvalidPlayerId(player_id.to_owned()));
        }
        Ok(self.base_dir.join(format!(
            "{FILE_PREFIX}{}{FILE_SUFFIX}",
            hex::encode(player_id.as_bytes())
        )))
    }

    /// Inverse of [`Self::state_path`]; `None` for foreign files.
    fn player_id_from_file_name(filename: &str) -> Option<String> {
        let encoded = filename
            .strip_prefix(FILE_PREFIX)?
            .strip_suffix(FILE_SUFFIX)?;
        let bytes = hex::decode(encoded).ok()?;
        String::from_utf8(bytes).ok().filter(|id| !id.is_empty())
    }
}

impl StateRepository for FileStateRepository {
    fn save(&self, player_id: &str, state: &GameState) -> Result<()> {
        let path = self.state_path(player_id)?;
        let temp_path = path.with_extension("bin.tmp");

        let bytes =
            bincode::serialize(state).map_err(|e| RepositoryError::Serialization(e.to_string()))?;

        fs::write(&temp_path, bytes).map_err(RepositoryError::Io)?;
        fs::rename(&temp_path, &path).map_err(RepositoryError::Io)?;

        tracing::debug!(
            target: "runtime::repository",
            player_id,
            path = %path.display(),
            "saved session state"
        );

        Ok(())
    }

    fn load(&self, player_id: &str) -> Result<Option<GameState>> {
        let path = self.state_path(player_id)?;

        if !path.exists() {
            return Ok(None);
        }

        let bytes = fs::read(&path).map_err(RepositoryError::Io)?;
        let state: GameState = bincode::deserialize(&bytes)
            .map_err(|e| RepositoryError::Serialization(e.to_string()))?;

        tracing::debug!(
            target: "runtime::repository",
            player_id,
            path = %path.display(),
            "loaded session state"
        );

        Ok(Some(state))
    }

    fn exists(&self, player_id: &str) -> bool {
        self.state_path(player_id)
            .map(|path| path.exists())
            .unwrap_or(false)
    }

    fn delete(&self, player_id: &str) -> Result<()> {
        let path = self.state_path(player_id)?;

        if path.exists() {
            fs::remove_file(&path).map_err(RepositoryError::Io)?;
            tracing::debug!(target: "runtime::repository", player_id, "deleted session state");
        }

        Ok(())
    }

    fn list_players(&self) -> Result<Vec<String>> {
        let mut players = Vec::new();

        let entries = fs::read_dir(&self.base_dir).map_err(RepositoryError::Io)?;

        for entry in entries {
            let entry = entry.map_err(RepositoryError::Io)?;
            let path = entry.path();

            if let Some(player_id) = path
                .file_name()
                .and_then(|s| s.to_str())
                .and_then(Self::player_id_from_file_name)
            {
                players.push(player_id);
            }
        }

        players.sort_unstable();
        Ok(players)
    }
}
