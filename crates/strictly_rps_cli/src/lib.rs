//! Strictly RPS - rock-paper-scissors in the terminal
//!
//! Plays rounds against a random opponent over a line-based prompt,
//! keeps a running score, and appends the final score of each session
//! to a plain-text log.
//!
//! # Architecture
//!
//! - **Opponent**: move source behind a trait (random or scripted)
//! - **Input**: prompting reader with exit confirmation
//! - **Session**: the round loop and its state machine
//! - **Score log**: append-only `scores.txt`
//!
//! Game rules and the scoreboard live in the `strictly_rps` crate.
//!
//! # Example
//!
//! ```no_run
//! use std::io;
//! use strictly_rps_cli::{GameSession, InputReader, RandomOpponent, ScoreLog};
//!
//! # fn example() -> Result<(), strictly_rps_cli::SessionError> {
//! let session = GameSession::new(
//!     RandomOpponent::new(),
//!     InputReader::new(io::stdin().lock()),
//!     io::stdout().lock(),
//!     ScoreLog::new("scores.txt"),
//! );
//! let summary = session.run()?;
//! println!("{} rounds", summary.outcomes().len());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod input;
mod opponent;
pub mod render;
mod score_log;
mod session;

pub use cli::Cli;
pub use config::{ConfigError, GameConfig};
pub use input::{
    CONFIRM_TOKENS, Choice, DEFAULT_MAX_INPUT_ERRORS, EXIT_TOKENS, ExitReason, InputReader,
    normalize,
};
pub use opponent::{Opponent, RandomOpponent, ScriptedOpponent};
pub use score_log::{
    DEFAULT_SCORES_FILE, ScoreLog, ScoreLogEntry, ScoreLogError, TIMESTAMP_FORMAT,
};
pub use session::{GameSession, Phase, SessionError, SessionSummary};

// Game types, re-exported so callers need only this crate.
pub use strictly_rps::{Move, RoundOutcome, ScoreBoard, ScoreState, Verdict, resolve};
