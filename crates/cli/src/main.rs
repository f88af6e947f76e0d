//! Line-oriented front end for the deck battler engine.
//!
//! Reads JSON requests from stdin and writes session messages to stdout, one
//! JSON document per line. Logs go to stderr.
mod config;
mod logging;
mod protocol;

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::sync::{broadcast, mpsc};

use runtime::{
    FileStateRepository, OracleManager, RuntimeError, SessionEvent, SessionManager,
    StateRepository,
};

use crate::config::CliConfig;
use crate::protocol::{Inbound, InboundCommand, Outbound};

/// Lines queued for stdout, already encoded.
type OutputSender = mpsc::UnboundedSender<String>;

const SHUTDOWN_GRACE: Duration = Duration::from_secs(2);

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let config = CliConfig::from_env();
    let _log_guard = logging::setup_logging(config.log_dir.as_deref())?;

    let manager = Arc::new(build_manager(&config)?);
    let (out_tx, out_rx) = mpsc::unbounded_channel::<String>();
    let writer = tokio::spawn(write_lines(out_rx));

    let mut app = App {
        manager,
        default_player: config.player_id().to_owned(),
        connected: HashSet::new(),
        out_tx,
    };

    let default_player = app.default_player.clone();
    app.connect(&default_player).await?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        app.handle_line(line).await?;
    }

    tracing::info!("stdin closed, shutting down");
    drop(app);
    // Forwarders release the writer once their sessions shut down.
    if tokio::time::timeout(SHUTDOWN_GRACE, writer).await.is_err() {
        tracing::warn!("stdout writer did not drain in time");
    }
    Ok(())
}

fn build_manager(config: &CliConfig) -> Result<SessionManager> {
    let oracles = match &config.data_dir {
        Some(dir) => {
            tracing::info!("Loading content from {}", dir.display());
            OracleManager::from_data_dir(dir)
                .with_context(|| format!("failed to load content from {}", dir.display()))?
        }
        None => OracleManager::builtin().context("failed to load built-in content")?,
    };

    let mut builder = SessionManager::builder()
        .config(config.runtime.clone())
        .oracles(oracles);

    if config.enable_persistence {
        let dir = config
            .save_dir()
            .context("no save directory available; set BATTLER_SAVE_DIR")?;
        let repository: Arc<dyn StateRepository> = Arc::new(FileStateRepository::new(&dir)?);
        tracing::info!("Persisting sessions to {}", dir.display());
        builder = builder.repository(repository);
    }

    Ok(builder.build()?)
}

struct App {
    manager: Arc<SessionManager>,
    default_player: String,
    connected: HashSet<String>,
    out_tx: OutputSender,
}

impl App {
    async fn handle_line(&mut self, line: &str) -> Result<()> {
        let inbound = match Inbound::parse(line) {
            Ok(inbound) => inbound,
            Err(err) => {
                tracing::warn!("rejected input line: {err}");
                let player_id = self.default_player.clone();
                self.emit(&player_id, Outbound::Error(err.to_string()));
                return Ok(());
            }
        };
        let player_id = inbound
            .player_id
            .unwrap_or_else(|| self.default_player.clone());

        match inbound.command {
            InboundCommand::Connect => {
                if let Err(err) = self.connect(&player_id).await {
                    self.report_failure(&player_id, err);
                }
                Ok(())
            }
            InboundCommand::Action(request) => {
                if !self.connected.contains(&player_id)
                    && let Err(err) = self.connect(&player_id).await
                {
                    self.report_failure(&player_id, err);
                    return Ok(());
                }
                match self.manager.handle_request(&player_id, request).await {
                    Ok(reply) => self.emit(&player_id, Outbound::Reply(reply)),
                    Err(RuntimeError::InvalidRequest(err)) => {
                        tracing::warn!(player_id = %player_id, "rejected request: {err}");
                        self.emit(&player_id, Outbound::Error(err.to_string()));
                    }
                    Err(err) => self.report_failure(&player_id, err),
                }
                Ok(())
            }
        }
    }

    /// Emits `init` and, on first contact, starts forwarding the player's
    /// state updates. A repeated connect only replays `init`.
    async fn connect(&mut self, player_id: &str) -> runtime::Result<()> {
        let (_handle, init, updates) = self.manager.connect(player_id).await?;
        self.emit(player_id, Outbound::Event(init));

        if self.connected.insert(player_id.to_owned()) {
            tokio::spawn(forward_updates(
                player_id.to_owned(),
                updates,
                self.out_tx.clone(),
            ));
        }
        Ok(())
    }

    fn report_failure(&self, player_id: &str, err: RuntimeError) {
        tracing::error!(player_id, "session failure: {err}");
        self.emit(player_id, Outbound::Error(err.to_string()));
    }

    fn emit(&self, player_id: &str, message: Outbound) {
        emit(&self.out_tx, player_id, &message);
    }
}

fn emit(out_tx: &OutputSender, player_id: &str, message: &Outbound) {
    match message.encode(player_id) {
        Ok(line) => {
            if out_tx.send(line).is_err() {
                tracing::debug!(player_id, "stdout writer closed");
            }
        }
        Err(err) => tracing::error!(player_id, "failed to encode message: {err}"),
    }
}

async fn forward_updates(
    player_id: String,
    mut updates: broadcast::Receiver<SessionEvent>,
    out_tx: OutputSender,
) {
    loop {
        match updates.recv().await {
            Ok(event) => emit(&out_tx, &player_id, &Outbound::Event(event)),
            Err(broadcast::error::RecvError::Lagged(skipped)) => {
                tracing::warn!(player_id = %player_id, skipped, "update stream lagged");
            }
            Err(broadcast::error::RecvError::Closed) => break,
        }
        if out_tx.is_closed() {
            break;
        }
    }
}

async fn write_lines(mut lines: mpsc::UnboundedReceiver<String>) {
    let mut stdout = tokio::io::stdout();
    while let Some(mut line) = lines.recv().await {
        line.push('\n');
        if let Err(err) = stdout.write_all(line.as_bytes()).await {
            tracing::error!("failed to write to stdout: {err}");
            break;
        }
        if let Err(err) = stdout.flush().await {
            tracing::error!("failed to flush stdout: {err}");
            break;
        }
    }
}
