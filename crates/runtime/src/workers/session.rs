//! Session worker that owns the authoritative [`game_core::GameState`] of one
//! player.
//!
//! Receives commands from [`crate::SessionHandle`], executes actions via
//! [`game_core::GameEngine`], persists accepted states and publishes
//! [`SessionEvent`] notifications.

use std::sync::Arc;

use tokio::sync::{broadcast, mpsc, oneshot};
use tracing::{debug, error, warn};

use game_core::{ExecuteError, GameEngine, GameError, GameState, PlayerAction};

use crate::api::{ActionReply, CatalogSnapshot, SessionEvent, StateSnapshot};
use crate::oracle::OracleManager;
use crate::repository::StateRepository;

/// Commands that can be sent to the session worker
pub enum Command {
    /// Execute a player action. The reply is sent once the enemy turn that
    /// may follow has fully resolved.
    Dispatch {
        action: PlayerAction,
        reply: oneshot::Sender<ActionReply>,
    },
    /// Query the current game state (read-only).
    QueryState { reply: oneshot::Sender<GameState> },
    /// Build the connection greeting: current snapshot plus static catalog.
    Init { reply: oneshot::Sender<SessionEvent> },
}

/// Background task that processes one session's commands strictly in order.
pub struct SessionWorker {
    player_id: String,
    state: GameState,
    oracles: OracleManager,
    repository: Option<Arc<dyn StateRepository>>,
    command_rx: mpsc::Receiver<Command>,
    event_tx: broadcast::Sender<SessionEvent>,
}

impl SessionWorker {
    /// Creates a new session worker.
    pub fn new(
        player_id: String,
        state: GameState,
        oracles: OracleManager,
        repository: Option<Arc<dyn StateRepository>>,
        command_rx: mpsc::Receiver<Command>,
        event_tx: broadcast::Sender<SessionEvent>,
    ) -> Self {
        Self {
            player_id,
            state,
            oracles,
            repository,
            command_rx,
            event_tx,
        }
    }

    /// Main worker loop. Ends once every handle has been dropped.
    pub async fn run(mut self) {
        while let Some(cmd) = self.command_rx.recv().await {
            self.handle_command(cmd);
        }
        debug!(target: "runtime::session", player_id = %self.player_id, "session worker stopped");
    }

    fn handle_command(&mut self, cmd: Command) {
        match cmd {
            Command::Dispatch { action, reply } => {
                let result = self.dispatch(action);
                if reply.send(result).is_err() {
                    debug!(
                        target: "runtime::session",
                        player_id = %self.player_id,
                        "caller dropped before the reply was sent"
                    );
                }
            }
            Command::QueryState { reply } => {
                let _ = reply.send(self.state.clone());
            }
            Command::Init { reply } => {
                let _ = reply.send(self.init_event());
            }
        }
    }

    fn init_event(&self) -> SessionEvent {
        let catalog = self.oracles.catalog();
        SessionEvent::Init {
            game_state: Box::new(StateSnapshot::capture(&self.state, catalog)),
            catalog: Box::new(CatalogSnapshot::capture(catalog, self.oracles.config())),
        }
    }

    fn dispatch(&mut self, action: PlayerAction) -> ActionReply {
        // Execute against a cloned state to avoid partial mutations on failure
        let env = self.oracles.as_game_env();
        let mut working_state = self.state.clone();
        let mut staging_engine = GameEngine::new(&mut working_state);

        match staging_engine.execute(env, &action) {
            Ok(outcome) => {
                self.state = working_state;
                self.persist();

                let update = SessionEvent::StateUpdate {
                    game_state: Box::new(StateSnapshot::capture(
                        &self.state,
                        self.oracles.catalog(),
                    )),
                    events: outcome.events,
                };
                if self.event_tx.send(update).is_err() {
                    debug!(
                        target: "runtime::session",
                        player_id = %self.player_id,
                        "no subscribers for state update"
                    );
                }

                debug!(
                    target: "runtime::session",
                    player_id = %self.player_id,
                    action = %action.kind(),
                    phase = %self.state.phase,
                    floor = self.state.floor,
                    "action accepted"
                );
                ActionReply::accepted()
            }
            Err(error) => {
                self.log_rejection(&error);
                ActionReply::rejected(error.reason())
            }
        }
    }

    fn persist(&self) {
        let Some(repository) = &self.repository else {
            return;
        };
        if let Err(error) = repository.save(&self.player_id, &self.state) {
            warn!(
                target: "runtime::session",
                player_id = %self.player_id,
                %error,
                "failed to persist session state"
            );
        }
    }

    fn log_rejection(&self, error: &ExecuteError) {
        let severity = error.severity();
        if severity.is_internal() {
            error!(
                target: "runtime::session",
                player_id = %self.player_id,
                action = %error.action,
                phase = error.phase.as_str(),
                severity = severity.as_str(),
                code = error.error_code(),
                error = %error.error,
                "action execution failed"
            );
        } else {
            debug!(
                target: "runtime::session",
                player_id = %self.player_id,
                action = %error.action,
                phase = error.phase.as_str(),
                severity = severity.as_str(),
                code = error.error_code(),
                error = %error.error,
                "action rejected"
            );
        }
    }
}
