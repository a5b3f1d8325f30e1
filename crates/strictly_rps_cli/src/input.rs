//! Line-based player input.
//!
//! The reader keeps prompting until it gets a move or a confirmed exit.
//! Bad input never escalates: it is reported to the player and the
//! prompt is repeated. Only failures writing the prompt itself are
//! returned as errors.

use crate::render;
use derive_more::Display;
use std::io::{self, BufRead, Write};
use strictly_rps::Move;
use tracing::{debug, info, instrument, warn};

/// Tokens that start the exit flow.
pub const EXIT_TOKENS: [&str; 4] = ["exit", "quit", "q", "выход"];

/// Tokens accepted as "yes" when confirming exit.
pub const CONFIRM_TOKENS: [&str; 4] = ["д", "y", "yes", "да"];

/// Consecutive read failures tolerated before giving up on the stream.
pub const DEFAULT_MAX_INPUT_ERRORS: usize = 5;

/// Why a session is ending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ExitReason {
    /// The player asked to leave and confirmed.
    #[display("confirmed")]
    Confirmed,
    /// The input stream reached end-of-file.
    #[display("input closed")]
    InputClosed,
    /// Too many consecutive read failures.
    #[display("input failed")]
    InputFailed,
}

/// What the player asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    /// Play a round with this move.
    Move(Move),
    /// End the session.
    Exit(ExitReason),
}

/// Trims and lowercases raw input.
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// One line read from the stream.
enum Line {
    Text(String),
    Closed,
    Failed,
}

/// Prompting reader over any buffered input.
#[derive(Debug)]
pub struct InputReader<R> {
    input: R,
    max_errors: usize,
    consecutive_errors: usize,
}

impl<R: BufRead> InputReader<R> {
    /// Creates a reader with the default error budget.
    pub fn new(input: R) -> Self {
        Self::with_max_errors(input, DEFAULT_MAX_INPUT_ERRORS)
    }

    /// Creates a reader that gives up after `max_errors` consecutive
    /// read failures.
    pub fn with_max_errors(input: R, max_errors: usize) -> Self {
        Self {
            input,
            max_errors,
            consecutive_errors: 0,
        }
    }

    /// Prompts until the player picks a move or confirms exit.
    ///
    /// # Errors
    ///
    /// Returns an error only if writing to `out` fails.
    #[instrument(skip_all)]
    pub fn read_choice(&mut self, out: &mut impl Write) -> io::Result<Choice> {
        loop {
            let raw = match self.prompt(out, render::MOVE_PROMPT)? {
                Line::Text(raw) => raw,
                Line::Closed => return Ok(Choice::Exit(ExitReason::InputClosed)),
                Line::Failed if self.exhausted() => {
                    return Ok(Choice::Exit(ExitReason::InputFailed));
                }
                Line::Failed => continue,
            };

            let token = normalize(&raw);
            if EXIT_TOKENS.contains(&token.as_str()) {
                match self.confirm_exit(out)? {
                    Some(reason) => return Ok(Choice::Exit(reason)),
                    None => continue,
                }
            }

            match Move::from_token(&token) {
                Some(choice) => {
                    debug!(%choice, "Player chose move");
                    return Ok(Choice::Move(choice));
                }
                None => {
                    debug!(input = %token, "Rejected input");
                    out.write_all(render::invalid_move().as_bytes())?;
                }
            }
        }
    }

    /// Asks for exit confirmation. `None` means the player declined.
    #[instrument(skip_all)]
    fn confirm_exit(&mut self, out: &mut impl Write) -> io::Result<Option<ExitReason>> {
        match self.prompt(out, render::CONFIRM_PROMPT)? {
            Line::Text(raw) => {
                let answer = normalize(&raw);
                if CONFIRM_TOKENS.contains(&answer.as_str()) {
                    info!("Exit confirmed");
                    Ok(Some(ExitReason::Confirmed))
                } else {
                    debug!(answer = %answer, "Exit declined");
                    Ok(None)
                }
            }
            Line::Closed => Ok(Some(ExitReason::InputClosed)),
            Line::Failed if self.exhausted() => Ok(Some(ExitReason::InputFailed)),
            Line::Failed => Ok(None),
        }
    }

    /// Writes a prompt and reads one line.
    fn prompt(&mut self, out: &mut impl Write, prompt: &str) -> io::Result<Line> {
        out.write_all(prompt.as_bytes())?;
        out.flush()?;

        let mut buf = String::new();
        match self.input.read_line(&mut buf) {
            Ok(0) => {
                info!("Input stream closed");
                Ok(Line::Closed)
            }
            Ok(_) => {
                self.consecutive_errors = 0;
                Ok(Line::Text(buf))
            }
            Err(e) => {
                self.consecutive_errors += 1;
                warn!(error = %e, attempts = self.consecutive_errors, "Failed to read input");
                out.write_all(render::input_error(&e).as_bytes())?;
                Ok(Line::Failed)
            }
        }
    }

    fn exhausted(&self) -> bool {
        self.consecutive_errors >= self.max_errors
    }
}
