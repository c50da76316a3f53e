//! Display configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use super_tictactoe::Symbols;
use tracing::{debug, info, instrument};

/// How the board is drawn.
///
/// Every field is optional in the file; missing ones fall back to the
/// defaults.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Player one's mark.
    player_one: char,

    /// Player two's mark.
    player_two: char,

    /// Mark for a drawn sub-board in the summary.
    draw: char,

    /// Mark for an empty cell.
    empty: char,

    /// Prompt shown before each move.
    prompt: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        let symbols = Symbols::default();
        Self {
            player_one: symbols.player_one,
            player_two: symbols.player_two,
            draw: symbols.draw,
            empty: symbols.empty,
            prompt: "> ".to_string(),
        }
    }
}

impl DisplayConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        info!("Config loaded successfully");
        Ok(config)
    }

    /// Loads the file if it exists, otherwise returns the defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Symbols for the engine's renderer.
    pub fn symbols(&self) -> Symbols {
        Symbols {
            player_one: self.player_one,
            player_two: self.player_two,
            draw: self.draw,
            empty: self.empty,
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let marks = [self.player_one, self.player_two, self.draw, self.empty];
        for (i, a) in marks.iter().enumerate() {
            if marks[i + 1..].contains(a) {
                return Err(ConfigError::new(format!("Symbol '{}' is used twice", a)));
            }
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
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
