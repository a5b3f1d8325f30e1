//! Append-only session score log.
//!
//! One line per finished session:
//! `YYYY-MM-DD HH:MM:SS | player_wins | computer_wins | draws`.
//! Lines are never read back or rewritten.

use chrono::{Local, NaiveDateTime};
use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_new::new;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use strictly_rps::ScoreState;
use tracing::{debug, error, info, instrument};

/// Default log location, relative to the working directory.
pub const DEFAULT_SCORES_FILE: &str = "scores.txt";

/// `strftime` pattern for the timestamp column.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Score log error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Score log error: {} at {}:{}", message, file, line)]
pub struct ScoreLogError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ScoreLogError {
    /// Creates a new score log error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// One persisted session result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, new, Getters)]
pub struct ScoreLogEntry {
    /// Local time the session ended.
    timestamp: NaiveDateTime,
    /// Final counters.
    score: ScoreState,
}

impl ScoreLogEntry {
    /// Formats the entry as a log line, without the trailing newline.
    #[instrument(skip(self))]
    pub fn to_line(&self) -> String {
        format!(
            "{} | {} | {} | {}",
            self.timestamp.format(TIMESTAMP_FORMAT),
            self.score.player_wins(),
            self.score.computer_wins(),
            self.score.draws()
        )
    }
}

/// Handle to the score log file.
///
/// Holds only the path; the file is opened and closed inside each
/// append.
#[derive(Debug, Clone)]
pub struct ScoreLog {
    path: PathBuf,
}

impl ScoreLog {
    /// Creates a log handle for the given path.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn new(path: impl AsRef<Path>) -> Self {
        debug!("Creating ScoreLog");
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Path of the log file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends the final score stamped with the current local time.
    ///
    /// # Errors
    ///
    /// Returns [`ScoreLogError`] if the file cannot be opened or written.
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub fn persist(&self, score: ScoreState) -> Result<ScoreLogEntry, ScoreLogError> {
        self.persist_at(score, Local::now().naive_local())
    }

    /// Appends the final score with an explicit timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`ScoreLogError`] if the file cannot be opened or written.
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub fn persist_at(
        &self,
        score: ScoreState,
        timestamp: NaiveDateTime,
    ) -> Result<ScoreLogEntry, ScoreLogError> {
        let entry = ScoreLogEntry::new(timestamp, score);
        self.append(&entry)?;
        Ok(entry)
    }

    /// Appends one entry as a single line.
    ///
    /// # Errors
    ///
    /// Returns [`ScoreLogError`] if the file cannot be opened or written.
    #[instrument(skip(self, entry), fields(path = %self.path.display()))]
    pub fn append(&self, entry: &ScoreLogEntry) -> Result<(), ScoreLogError> {
        let line = format!("{}\n", entry.to_line());

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| {
                error!(error = %e, "Failed to open score log");
                ScoreLogError::new(format!(
                    "Failed to open '{}': {}",
                    self.path.display(),
                    e
                ))
            })?;

        file.write_all(line.as_bytes()).map_err(|e| {
            error!(error = %e, "Failed to write score log");
            ScoreLogError::new(format!(
                "Failed to write '{}': {}",
                self.path.display(),
                e
            ))
        })?;

        info!(entry = %line.trim_end(), "Session score saved");
        Ok(())
    }
}

impl Default for ScoreLog {
    fn default() -> Self {
        Self::new(DEFAULT_SCORES_FILE)
    }
}
