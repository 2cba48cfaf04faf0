//! Game configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tictactoe_core::Player;
use tracing::{debug, info, instrument};

/// Settings for a game session and its logging.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Symbols of the first and second player.
    #[serde(default = "default_players")]
    players: [String; 2],

    /// Tracing filter used when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    log_filter: String,

    /// File the terminal UI writes its logs to.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,
}

fn default_players() -> [String; 2] {
    ["X".to_string(), "O".to_string()]
}

fn default_log_filter() -> String {
    "info,tictactoe_core=debug".to_string()
}

fn default_log_file() -> PathBuf {
    PathBuf::from("tictactoe_bus.log")
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            players: default_players(),
            log_filter: default_log_filter(),
            log_file: default_log_file(),
        }
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        Self::from_toml(&content)
    }

    /// Parses and validates configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;

        info!(players = ?config.players, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if given and present, defaults otherwise.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) if path.exists() => Self::from_file(path),
            Some(path) => {
                info!(path = %path.display(), "Config file not found, using defaults");
                Ok(Self::default())
            }
            None => Ok(Self::default()),
        }
    }

    /// The two players built from the configured symbols.
    pub fn to_players(&self) -> [Player; 2] {
        let [first, second] = &self.players;
        [Player::new(first.as_str()), Player::new(second.as_str())]
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let [first, second] = &self.players;
        if first.trim().is_empty() || second.trim().is_empty() {
            return Err(ConfigError::new("Player symbols must not be empty".to_string()));
        }
        if first == second {
            return Err(ConfigError::new(format!(
                "Player symbols must differ, both are {:?}",
                first
            )));
        }
        Ok(())
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
