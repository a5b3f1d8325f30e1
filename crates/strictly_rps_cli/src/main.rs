//! Strictly RPS - terminal game
//!
//! Plays until the player confirms exit, then appends the session
//! score to the log.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use std::io;
use strictly_rps_cli::{Cli, GameSession, InputReader, RandomOpponent, ScoreLog};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.log_level.as_deref());

    let config = cli.game_config()?;
    debug!(?config, "Effective configuration");

    let opponent = match config.seed() {
        Some(seed) => RandomOpponent::seeded(*seed),
        None => RandomOpponent::new(),
    };

    let session = GameSession::new(
        opponent,
        InputReader::with_max_errors(io::stdin().lock(), *config.max_input_errors()),
        io::stdout().lock(),
        ScoreLog::new(config.scores_file()),
    );

    let summary = session.run()?;
    info!(
        score = ?summary.score(),
        exit = %summary.exit(),
        "Goodbye"
    );

    Ok(())
}

/// Logs go to stderr so they never interleave with the game on stdout.
fn init_tracing(level: Option<&str>) {
    let filter = match level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
