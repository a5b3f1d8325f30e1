//! The game loop.
//!
//! A session moves through a small state machine:
//!
//! ```text
//! Prompting -> RoundResolved -> Prompting ...
//! Prompting -> ExitConfirmed -> Terminated
//! ```
//!
//! Each round completes, score display included, before the next prompt.

use crate::input::{Choice, ExitReason, InputReader};
use crate::opponent::Opponent;
use crate::render;
use crate::score_log::{ScoreLog, ScoreLogError};
use derive_getters::Getters;
use derive_more::{Display, Error};
use std::io::{self, BufRead, Write};
use strictly_rps::{Move, RoundOutcome, ScoreBoard, ScoreState, resolve};
use tracing::{debug, info, instrument};

/// Session error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Session error: {} at {}:{}", message, file, line)]
pub struct SessionError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl SessionError {
    /// Creates a new session error with caller location tracking.
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

impl From<io::Error> for SessionError {
    #[track_caller]
    fn from(err: io::Error) -> Self {
        Self::new(format!("Terminal I/O error: {}", err))
    }
}

impl From<ScoreLogError> for SessionError {
    #[track_caller]
    fn from(err: ScoreLogError) -> Self {
        Self::new(format!("Could not save scores: {}", err.message))
    }
}

/// Where the loop currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for the player.
    Prompting,
    /// A round just finished and the score has been shown.
    RoundResolved,
    /// The player is leaving; scores not yet saved, farewell not yet shown.
    ExitConfirmed(ExitReason),
    /// Scores saved, nothing left to do.
    Terminated(ExitReason),
}

/// What a finished session looked like.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct SessionSummary {
    /// Final counters.
    score: ScoreState,
    /// Outcome of every round, in order.
    outcomes: Vec<RoundOutcome>,
    /// How the session ended.
    exit: ExitReason,
}

/// One interactive session against an opponent.
pub struct GameSession<O, R, W> {
    opponent: O,
    input: InputReader<R>,
    output: W,
    score_log: ScoreLog,
    board: ScoreBoard,
    outcomes: Vec<RoundOutcome>,
    phase: Phase,
}

impl<O, R, W> GameSession<O, R, W>
where
    O: Opponent,
    R: BufRead,
    W: Write,
{
    /// Creates a session with a zeroed scoreboard.
    #[instrument(skip_all, fields(opponent = %opponent.name(), score_log = %score_log.path().display()))]
    pub fn new(opponent: O, input: InputReader<R>, output: W, score_log: ScoreLog) -> Self {
        info!("Creating new game session");
        Self {
            opponent,
            input,
            output,
            score_log,
            board: ScoreBoard::new(),
            outcomes: Vec::new(),
            phase: Phase::Prompting,
        }
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Current counters.
    pub fn score(&self) -> ScoreState {
        self.board.snapshot()
    }

    /// Plays rounds until the player leaves, then saves the score.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError`] if the terminal cannot be written or the
    /// score log cannot be saved.
    #[instrument(skip(self))]
    pub fn run(mut self) -> Result<SessionSummary, SessionError> {
        self.output.write_all(render::banner().as_bytes())?;

        loop {
            if let Phase::Terminated(exit) = self.phase {
                let summary = SessionSummary {
                    score: self.board.snapshot(),
                    outcomes: self.outcomes,
                    exit,
                };
                info!(score = ?summary.score, rounds = summary.outcomes.len(), %exit, "Session finished");
                return Ok(summary);
            }
            self.step()?;
        }
    }

    /// Advances the state machine by one transition and returns the new
    /// phase. Stepping a terminated session is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError`] if the terminal cannot be written or the
    /// score log cannot be saved.
    #[instrument(skip(self), fields(phase = ?self.phase))]
    pub fn step(&mut self) -> Result<Phase, SessionError> {
        let next = match self.phase {
            Phase::Prompting => match self.input.read_choice(&mut self.output)? {
                Choice::Move(player) => {
                    self.play_round(player)?;
                    Phase::RoundResolved
                }
                Choice::Exit(reason) => Phase::ExitConfirmed(reason),
            },
            Phase::RoundResolved => Phase::Prompting,
            Phase::ExitConfirmed(reason) => {
                self.save()?;
                self.output.write_all(render::farewell().as_bytes())?;
                self.output.flush()?;
                Phase::Terminated(reason)
            }
            Phase::Terminated(reason) => Phase::Terminated(reason),
        };
        debug!(?next, "Phase transition");
        self.phase = next;
        Ok(next)
    }

    /// Plays one round: opponent move, resolution, score update, display.
    #[instrument(skip(self))]
    fn play_round(&mut self, player: Move) -> Result<(), SessionError> {
        let computer = self.opponent.next_move();
        self.output
            .write_all(render::reveal(player, computer).as_bytes())?;

        let verdict = resolve(player, computer);
        self.output.write_all(render::verdict(&verdict).as_bytes())?;

        self.board.update(verdict.outcome());
        self.outcomes.push(verdict.outcome());

        self.output
            .write_all(render::score(&self.board.snapshot()).as_bytes())?;
        self.output.flush()?;
        Ok(())
    }

    /// Appends the final score. The score log reports its own failures.
    fn save(&self) -> Result<(), SessionError> {
        let entry = self.score_log.persist(self.board.snapshot())?;
        debug!(line = %entry.to_line(), "Score persisted");
        Ok(())
    }
}
