//! Match configuration.

use crate::games::tictactoe::Player;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Display preferences for a match, loaded from a TOML file.
///
/// Both fields default, so a config file can set one name, both, or
/// be absent entirely.
#[derive(Debug, Clone, Getters, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Display name for the opening player (mark X).
    #[serde(default = "default_player_one")]
    player_one: String,

    /// Display name for the second player (mark O).
    #[serde(default = "default_player_two")]
    player_two: String,
}

fn default_player_one() -> String {
    Player::One.to_string()
}

fn default_player_two() -> String {
    Player::Two.to_string()
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            player_one: default_player_one(),
            player_two: default_player_two(),
        }
    }
}

impl MatchConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self =
            toml::from_str(&content).map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(
            player_one = %config.player_one,
            player_two = %config.player_two,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Loads the config at `path`, or falls back to defaults when the
    /// file does not exist. A file that exists but fails to parse is
    /// still an error.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("No config file, using default player names");
            Ok(Self::default())
        }
    }

    /// Display name for `player`.
    pub fn name_of(&self, player: Player) -> &str {
        match player {
            Player::One => &self.player_one,
            Player::Two => &self.player_two,
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
