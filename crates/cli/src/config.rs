//! Process configuration read from the environment.
use std::env;
use std::path::PathBuf;

use runtime::RuntimeConfig;

/// Configuration required to bootstrap the session manager and I/O loop.
#[derive(Clone, Debug, Default)]
pub struct CliConfig {
    pub runtime: RuntimeConfig,
    /// Content directory; the built-in pack is used when unset.
    pub data_dir: Option<PathBuf>,
    /// Player connected at startup and used for requests without `playerId`.
    pub player_id: Option<String>,
    pub enable_persistence: bool,
    pub save_data_dir: Option<PathBuf>,
    /// Also write logs to a file in this directory.
    pub log_dir: Option<PathBuf>,
}

impl CliConfig {
    pub const DEFAULT_PLAYER_ID: &'static str = "player";

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `BATTLER_DATA_DIR` - Content directory (default: built-in content)
    /// - `BATTLER_PLAYER_ID` - Default player id (default: `player`)
    /// - `BATTLER_EVENT_BUFFER` - Per-session broadcast capacity (default: 100)
    /// - `BATTLER_COMMAND_BUFFER` - Per-session command queue size (default: 32)
    /// - `BATTLER_SEED` - Fixed seed for every new game (default: random)
    /// - `BATTLER_PERSIST` - Save sessions to disk (default: false)
    /// - `BATTLER_SAVE_DIR` - Directory for session saves (default: platform-specific)
    /// - `BATTLER_LOG_DIR` - Directory for a log file (default: stderr only)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(capacity) = read_env::<usize>("BATTLER_EVENT_BUFFER") {
            config.runtime.event_buffer_size = capacity.max(1);
        }
        if let Some(capacity) = read_env::<usize>("BATTLER_COMMAND_BUFFER") {
            config.runtime.command_buffer_size = capacity.max(1);
        }
        config.runtime.seed = read_env::<u64>("BATTLER_SEED");

        if let Some(enable) = read_env::<bool>("BATTLER_PERSIST") {
            config.enable_persistence = enable;
        } else if env::var("BATTLER_PERSIST").is_ok() {
            // Also accept just setting the variable without value as "true"
            config.enable_persistence = true;
        }

        config.data_dir = env::var("BATTLER_DATA_DIR").ok().map(PathBuf::from);
        config.player_id = env::var("BATTLER_PLAYER_ID")
            .ok()
            .filter(|id| !id.trim().is_empty());
        config.save_data_dir = env::var("BATTLER_SAVE_DIR").ok().map(PathBuf::from);
        config.log_dir = env::var("BATTLER_LOG_DIR").ok().map(PathBuf::from);

        config
    }

    pub fn player_id(&self) -> &str {
        self.player_id.as_deref().unwrap_or(Self::DEFAULT_PLAYER_ID)
    }

    /// Where session saves go when persistence is enabled.
    pub fn save_dir(&self) -> Option<PathBuf> {
        self.save_data_dir.clone().or_else(|| {
            directories::ProjectDirs::from("", "", "battler")
                .map(|dirs| dirs.data_dir().join("sessions"))
        })
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
