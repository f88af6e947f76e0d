//! Repository contract for saving and loading session state.

use game_core::GameState;

use super::error::Result;

/// Repository for session state persistence and loading
///
/// Sessions are keyed by the opaque player id. The session worker saves after
/// every accepted action; the session manager loads when a player reconnects
/// after the process restarted.
pub trait StateRepository: Send + Sync {
    /// Save the state of a player's session, replacing any previous one
    fn save(&self, player_id: &str, state: &GameState) -> Result<()>;

    /// Load a player's session state
    fn load(&self, player_id: &str) -> Result<Option<GameState>>;

    /// Check if a state exists
    fn exists(&self, player_id: &str) -> bool;

    /// Delete a state
    fn delete(&self, player_id: &str) -> Result<()>;

    /// List all player ids with a saved state
    fn list_players(&self) -> Result<Vec<String>> {
        Ok(vec![])
    }
}
