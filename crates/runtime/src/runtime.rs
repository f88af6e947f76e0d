//! Session manager and builder.
//!
//! [`SessionManager`] maps player ids to running session workers. Each worker
//! owns one [`GameState`] and processes its commands in order; workers of
//! different players run independently. The map itself is the only state
//! shared between sessions.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{RwLock, broadcast, mpsc};

use game_core::{GameState, PlayerAction};

use crate::api::{ActionReply, ActionRequest, Result, RuntimeError, SessionEvent, SessionHandle};
use crate::oracle::OracleManager;
use crate::repository::StateRepository;
use crate::workers::{Command, SessionWorker};

/// Channel sizing and seeding for the session manager.
#[derive(Clone, Debug)]
pub struct RuntimeConfig {
    /// Capacity of each session's broadcast channel.
    pub event_buffer_size: usize,
    /// Capacity of each session's command queue.
    pub command_buffer_size: usize,
    /// Fixed seed for every new game; random when unset.
    pub seed: Option<u64>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            event_buffer_size: 100,
            command_buffer_size: 32,
            seed: None,
        }
    }
}

/// Owns every live session.
///
/// Sessions are created on first contact and live as long as the manager.
pub struct SessionManager {
    config: RuntimeConfig,
    oracles: OracleManager,
    repository: Option<Arc<dyn StateRepository>>,
    sessions: RwLock<HashMap<String, SessionHandle>>,
}

impl SessionManager {
    /// Create a new session manager builder
    pub fn builder() -> SessionManagerBuilder {
        SessionManagerBuilder::new()
    }

    pub fn oracles(&self) -> &OracleManager {
        &self.oracles
    }

    /// Seed for a fresh run.
    pub fn next_seed(&self) -> u64 {
        self.config.seed.unwrap_or_else(rand::random)
    }

    /// Handle to the player's session, creating it on first contact.
    ///
    /// A new session resumes the repository's saved state when there is one.
    /// The initial state is built before the map is locked for writing, so a
    /// slow repository never blocks lookups of other sessions.
    pub async fn session(&self, player_id: &str) -> Result<SessionHandle> {
        if let Some(handle) = self.sessions.read().await.get(player_id) {
            return Ok(handle.clone());
        }

        let state = self.initial_state(player_id)?;

        let mut sessions = self.sessions.write().await;
        if let Some(handle) = sessions.get(player_id) {
            // Lost the race against a concurrent first contact.
            return Ok(handle.clone());
        }

        let handle = self.spawn_session(player_id, state);
        sessions.insert(player_id.to_owned(), handle.clone());

        tracing::info!(
            target: "runtime::session",
            player_id,
            sessions = sessions.len(),
            "session created"
        );
        Ok(handle)
    }

    /// Connects a client: returns the session handle, the `init` message and a
    /// receiver for every later state update.
    pub async fn connect(
        &self,
        player_id: &str,
    ) -> Result<(SessionHandle, SessionEvent, broadcast::Receiver<SessionEvent>)> {
        let handle = self.session(player_id).await?;
        let updates = handle.subscribe();
        let init = handle.init_event().await?;
        Ok((handle, init, updates))
    }

    /// Execute an already decoded action for a player.
    pub async fn dispatch(&self, player_id: &str, action: PlayerAction) -> Result<ActionReply> {
        self.session(player_id).await?.dispatch(action).await
    }

    /// Decode and execute a wire request. Malformed requests fail with
    /// [`RuntimeError::InvalidRequest`] without touching the session.
    pub async fn handle_request(
        &self,
        player_id: &str,
        request: ActionRequest,
    ) -> Result<ActionReply> {
        let action = request.into_action(|| self.next_seed())?;
        self.dispatch(player_id, action).await
    }

    pub async fn session_count(&self) -> usize {
        self.sessions.read().await.len()
    }

    fn initial_state(&self, player_id: &str) -> Result<GameState> {
        if let Some(repository) = &self.repository {
            match repository.load(player_id) {
                Ok(Some(state)) => {
                    tracing::info!(target: "runtime::session", player_id, floor = state.floor, "session resumed");
                    return Ok(state);
                }
                Ok(None) => {}
                Err(error) => tracing::warn!(
                    target: "runtime::session",
                    player_id,
                    %error,
                    "saved session unreadable, starting a new run"
                ),
            }
        }

        let env = self.oracles.as_game_env();
        GameState::new(player_id, self.next_seed(), &env).map_err(|source| {
            RuntimeError::InitialState {
                player_id: player_id.to_owned(),
                source,
            }
        })
    }

    fn spawn_session(&self, player_id: &str, state: GameState) -> SessionHandle {
        let (command_tx, command_rx) = mpsc::channel::<Command>(self.config.command_buffer_size);
        let (event_tx, _event_rx) = broadcast::channel::<SessionEvent>(self.config.event_buffer_size);

        let worker = SessionWorker::new(
            player_id.to_owned(),
            state,
            self.oracles.clone(),
            self.repository.clone(),
            command_rx,
            event_tx.clone(),
        );
        tokio::spawn(async move {
            worker.run().await;
        });

        SessionHandle::new(player_id.to_owned(), command_tx, event_tx)
    }
}

/// Builder for [`SessionManager`] with flexible configuration.
pub struct SessionManagerBuilder {
    config: RuntimeConfig,
    oracles: Option<OracleManager>,
    repository: Option<Arc<dyn StateRepository>>,
}

impl SessionManagerBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            oracles: None,
            repository: None,
        }
    }

    /// Override runtime configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Set required oracle manager
    pub fn oracles(mut self, oracles: OracleManager) -> Self {
        self.oracles = Some(oracles);
        self
    }

    /// Persist sessions to `repository` (optional)
    pub fn repository(mut self, repository: Arc<dyn StateRepository>) -> Self {
        self.repository = Some(repository);
        self
    }

    /// Build the session manager
    pub fn build(self) -> Result<SessionManager> {
        let oracles = self.oracles.ok_or(RuntimeError::MissingOracles)?;
        let config = RuntimeConfig {
            event_buffer_size: self.config.event_buffer_size.max(1),
            command_buffer_size: self.config.command_buffer_size.max(1),
            ..self.config
        };

        Ok(SessionManager {
            config,
            oracles,
            repository: self.repository,
            sessions: RwLock::new(HashMap::new()),
        })
    }
}
