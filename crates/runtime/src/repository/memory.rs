//! In-memory StateRepository implementation for tests and local runs.

use std::collections::HashMap;
use std::sync::RwLock;

use game_core::GameState;

use super::error::{RepositoryError, Result};
use super::traits::StateRepository;

/// In-memory implementation of StateRepository.
///
/// Stores states indexed by player id; nothing survives the process.
pub struct InMemoryStateRepo {
    states: RwLock<HashMap<String, GameState>>,
}

impl InMemoryStateRepo {
    /// Create a new empty in-memory repository.
    pub fn new() -> Self {
        Self {
            states: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryStateRepo {
    fn default() -> Self {
        Self::new()
    }
}

impl StateRepository for InMemoryStateRepo {
    fn save(&self, player_id: &str, state: &GameState) -> Result<()> {
        let mut states = self
            .states
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        states.insert(player_id.to_owned(), state.clone());
        Ok(())
    }

    fn load(&self, player_id: &str) -> Result<Option<GameState>> {
        let states = self
            .states
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(states.get(player_id).cloned())
    }

    fn exists(&self, player_id: &str) -> bool {
        self.states
            .read()
            .map(|states| states.contains_key(player_id))
            .unwrap_or(false)
    }

    fn delete(&self, player_id: &str) -> Result<()> {
        let mut states = self
            .states
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        states.remove(player_id);
        Ok(())
    }

    fn list_players(&self) -> Result<Vec<String>> {
        let states = self
            .states
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        let mut players: Vec<String> = states.keys().cloned().collect();
        players.sort_unstable();
        Ok(players)
    }
}
