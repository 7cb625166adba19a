//! Application configuration loaded from TOML.

use crate::surfaces::SymbolSelectors;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tally_tictactoe::Symbol;
use tracing::{debug, info, instrument, warn};

/// User-facing settings for a play session.
#[derive(Debug, Clone, Getters, Serialize, Deserialize)]
pub struct TallyConfig {
    /// Symbols offered by player one's selector.
    #[serde(default = "default_player_one_options")]
    player_one_options: Vec<String>,

    /// Symbols offered by player two's selector, matched to player one's by index.
    #[serde(default = "default_player_two_options")]
    player_two_options: Vec<String>,

    /// Option index selected at startup.
    #[serde(default)]
    initial_option: usize,

    /// File receiving log output while the terminal UI is running.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,

    /// Filter used when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    log_filter: String,
}

fn default_player_one_options() -> Vec<String> {
    ["X", "O", "+", "#"].map(String::from).to_vec()
}

fn default_player_two_options() -> Vec<String> {
    ["O", "X", "-", "@"].map(String::from).to_vec()
}

fn default_log_file() -> PathBuf {
    PathBuf::from("tally_games.log")
}

fn default_log_filter() -> String {
    "info,tally_games=debug,tally_tictactoe=debug".to_string()
}

impl Default for TallyConfig {
    fn default() -> Self {
        Self {
            player_one_options: default_player_one_options(),
            player_two_options: default_player_two_options(),
            initial_option: 0,
            log_file: default_log_file(),
            log_filter: default_log_filter(),
        }
    }
}

impl TallyConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        config.selectors()?;
        info!(
            options = config.player_one_options.len(),
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Loads the file if it exists, falling back to defaults otherwise.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Overrides the startup option index.
    pub fn with_initial_option(mut self, index: usize) -> Self {
        self.initial_option = index;
        self
    }

    /// Overrides the log file.
    pub fn with_log_file(mut self, path: PathBuf) -> Self {
        self.log_file = path;
        self
    }

    /// Builds the yoked symbol selectors described by this config.
    ///
    /// # Errors
    ///
    /// Fails if the option lists are empty or of different lengths, if an
    /// option is not a single character, or if `initial_option` is out of
    /// range.
    #[instrument(skip(self))]
    pub fn selectors(&self) -> Result<SymbolSelectors, ConfigError> {
        let one = parse_options("player_one_options", &self.player_one_options)?;
        let two = parse_options("player_two_options", &self.player_two_options)?;

        if one.len() != two.len() {
            return Err(ConfigError::new(format!(
                "Symbol option lists differ in length ({} vs {})",
                one.len(),
                two.len()
            )));
        }
        if self.initial_option >= one.len() {
            return Err(ConfigError::new(format!(
                "initial_option {} is out of range (0-{})",
                self.initial_option,
                one.len() - 1
            )));
        }
        for (index, (a, b)) in one.iter().zip(&two).enumerate() {
            if a == b {
                warn!(index, symbol = %a, "Option gives both players the same symbol");
            }
        }

        SymbolSelectors::new(one, two, self.initial_option)
            .ok_or_else(|| ConfigError::new("Symbol option lists are empty or uneven".to_string()))
    }
}

fn parse_options(field: &str, options: &[String]) -> Result<Vec<Symbol>, ConfigError> {
    if options.is_empty() {
        return Err(ConfigError::new(format!("{} is empty", field)));
    }
    options
        .iter()
        .map(|option| {
            option
                .parse::<Symbol>()
                .map_err(|e| ConfigError::new(format!("Invalid entry in {}: {}", field, e)))
        })
        .collect()
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_build_selectors() {
        let selectors = TallyConfig::default().selectors().unwrap();
        assert_eq!(selectors.len(), 4);
        let (one, two) = selectors.current();
        assert_eq!(one.as_char(), 'X');
        assert_eq!(two.as_char(), 'O');
    }

    #[test]
    fn test_initial_option_out_of_range() {
        let config = TallyConfig::default().with_initial_option(4);
        let err = config.selectors().unwrap_err();
        assert!(err.message.contains("out of range"));
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: TallyConfig = toml::from_str("initial_option = 2").unwrap();
        assert_eq!(config.initial_option(), &2);
        assert_eq!(config.log_file(), &PathBuf::from("tally_games.log"));
        let (one, two) = config.selectors().unwrap().current();
        assert_eq!((one.as_char(), two.as_char()), ('+', '-'));
    }
}
