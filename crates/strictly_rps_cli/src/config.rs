//! Game configuration.
//!
//! Settings come from an optional TOML file; command-line flags
//! override individual values. With neither, the defaults give the
//! classic behavior: `scores.txt` in the working directory and an
//! unseeded opponent.

use crate::input::DEFAULT_MAX_INPUT_ERRORS;
use crate::score_log::DEFAULT_SCORES_FILE;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Settings for one game session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Where finished sessions are appended.
    #[serde(default = "default_scores_file")]
    scores_file: PathBuf,

    /// Consecutive read failures tolerated before the session ends.
    #[serde(default = "default_max_input_errors")]
    max_input_errors: usize,

    /// Fixed opponent seed; unseeded when absent.
    #[serde(default)]
    seed: Option<u64>,
}

#[instrument]
fn default_scores_file() -> PathBuf {
    PathBuf::from(DEFAULT_SCORES_FILE)
}

#[instrument]
fn default_max_input_errors() -> usize {
    DEFAULT_MAX_INPUT_ERRORS
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            scores_file: default_scores_file(),
            max_input_errors: default_max_input_errors(),
            seed: None,
        }
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file cannot be read, does not parse,
    /// or holds invalid values.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        info!(scores_file = %config.scores_file.display(), "Config loaded successfully");
        Ok(config)
    }

    /// Replaces any value for which an override is given.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the merged values are invalid.
    #[instrument(skip(self))]
    pub fn with_overrides(
        mut self,
        scores_file: Option<PathBuf>,
        max_input_errors: Option<usize>,
        seed: Option<u64>,
    ) -> Result<Self, ConfigError> {
        if let Some(path) = scores_file {
            self.scores_file = path;
        }
        if let Some(max) = max_input_errors {
            self.max_input_errors = max;
        }
        if seed.is_some() {
            self.seed = seed;
        }
        self.validate()?;
        Ok(self)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.max_input_errors == 0 {
            return Err(ConfigError::new(
                "max_input_errors must be at least 1".to_string(),
            ));
        }
        if self.scores_file.as_os_str().is_empty() {
            return Err(ConfigError::new("scores_file must not be empty".to_string()));
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
