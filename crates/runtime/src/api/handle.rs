//! Cloneable façade for issuing commands to one session.
//!
//! [`SessionHandle`] hides channel plumbing and offers async helpers for
//! dispatching actions or streaming session events.
use tokio::sync::{broadcast, mpsc, oneshot};

use game_core::{GameState, PlayerAction};

use super::errors::{Result, RuntimeError};
use super::events::{ActionReply, SessionEvent};
use crate::workers::Command;

/// Client-facing handle to interact with a session worker
#[derive(Clone)]
pub struct SessionHandle {
    player_id: String,
    command_tx: mpsc::Sender<Command>,
    event_tx: broadcast::Sender<SessionEvent>,
}

impl SessionHandle {
    pub(crate) fn new(
        player_id: String,
        command_tx: mpsc::Sender<Command>,
        event_tx: broadcast::Sender<SessionEvent>,
    ) -> Self {
        Self {
            player_id,
            command_tx,
            event_tx,
        }
    }

    pub fn player_id(&self) -> &str {
        &self.player_id
    }

    /// Execute an action against the session.
    ///
    /// Rule violations are reported through the reply; `Err` means the worker
    /// could not be reached.
    pub async fn dispatch(&self, action: PlayerAction) -> Result<ActionReply> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.command_tx
            .send(Command::Dispatch {
                action,
                reply: reply_tx,
            })
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;

        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)
    }

    /// Query the current game state (read-only snapshot)
    pub async fn query_state(&self) -> Result<GameState> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.command_tx
            .send(Command::QueryState { reply: reply_tx })
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;

        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)
    }

    /// Build the `init` message for a newly connected client.
    pub async fn init_event(&self) -> Result<SessionEvent> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.command_tx
            .send(Command::Init { reply: reply_tx })
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;

        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)
    }

    /// Subscribe to state updates published after accepted actions.
    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.event_tx.subscribe()
    }
}
