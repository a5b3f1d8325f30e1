//! Command-line interface for strictly_rps.

use crate::config::{ConfigError, GameConfig};
use clap::Parser;
use std::path::PathBuf;
use tracing::instrument;

/// Strictly RPS - rock, paper, scissors against the computer
#[derive(Parser, Debug)]
#[command(name = "strictly_rps")]
#[command(about = "Rock-paper-scissors against a random opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// File that finished sessions are appended to [default: scores.txt]
    #[arg(long)]
    pub scores_file: Option<PathBuf>,

    /// Consecutive input read failures before the session ends [default: 5]
    #[arg(long)]
    pub max_input_errors: Option<usize>,

    /// Seed the opponent for a reproducible session
    #[arg(long)]
    pub seed: Option<u64>,

    /// Tracing filter, e.g. "debug" or "strictly_rps_cli=trace" (overrides RUST_LOG)
    #[arg(long)]
    pub log_level: Option<String>,
}

impl Cli {
    /// Builds the effective config: file values first, then flags.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the config file is unreadable or the
    /// merged values are invalid.
    #[instrument(skip(self))]
    pub fn game_config(&self) -> Result<GameConfig, ConfigError> {
        let base = match &self.config {
            Some(path) => GameConfig::from_file(path)?,
            None => GameConfig::default(),
        };
        base.with_overrides(
            self.scores_file.clone(),
            self.max_input_errors,
            self.seed,
        )
    }
}
