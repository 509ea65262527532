//! Session configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use strictly_noughts::Mark;
use tracing::{debug, info, instrument};

/// Who sits at the board.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum GameMode {
    /// Two people share the terminal.
    #[display("two-player")]
    TwoPlayer,
    /// One person against the computer.
    #[default]
    #[display("computer")]
    Computer,
}

/// Settings for a terminal session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
pub struct SessionConfig {
    /// Two-player or against the computer.
    #[serde(default)]
    mode: GameMode,

    /// The mark the computer plays in computer mode.
    #[serde(default = "default_computer_mark")]
    computer_mark: Mark,

    /// Pause before the computer's move so the board can be read.
    #[serde(default = "default_computer_delay_ms")]
    computer_delay_ms: u64,

    /// Display name for X.
    #[serde(default = "default_player_x_name")]
    player_x_name: String,

    /// Display name for O.
    #[serde(default = "default_player_o_name")]
    player_o_name: String,
}

fn default_computer_mark() -> Mark {
    Mark::O
}

fn default_computer_delay_ms() -> u64 {
    500
}

fn default_player_x_name() -> String {
    "Player X".to_string()
}

fn default_player_o_name() -> String {
    "Player O".to_string()
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            mode: GameMode::default(),
            computer_mark: default_computer_mark(),
            computer_delay_ms: default_computer_delay_ms(),
            player_x_name: default_player_x_name(),
            player_o_name: default_player_o_name(),
        }
    }
}

impl SessionConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(mode = %config.mode, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise falls back to defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// The computer's pause as a duration.
    pub fn computer_delay(&self) -> Duration {
        Duration::from_millis(self.computer_delay_ms)
    }

    /// Display name for `mark`.
    pub fn name_for(&self, mark: Mark) -> &str {
        match mark {
            Mark::X => &self.player_x_name,
            Mark::O => &self.player_o_name,
        }
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
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
