//! Session scorekeeping.

use crate::types::RoundOutcome;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Counters for one session.
///
/// The sum of all three counters always equals the number of
/// completed rounds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScoreState {
    player_wins: u32,
    computer_wins: u32,
    draws: u32,
}

impl ScoreState {
    /// Creates a state with explicit counters.
    pub fn new(player_wins: u32, computer_wins: u32, draws: u32) -> Self {
        Self {
            player_wins,
            computer_wins,
            draws,
        }
    }

    /// Rounds won by the player.
    pub fn player_wins(&self) -> u32 {
        self.player_wins
    }

    /// Rounds won by the computer.
    pub fn computer_wins(&self) -> u32 {
        self.computer_wins
    }

    /// Rounds that ended in a draw.
    pub fn draws(&self) -> u32 {
        self.draws
    }

    /// Total completed rounds.
    pub fn rounds(&self) -> u32 {
        self.player_wins + self.computer_wins + self.draws
    }
}

/// Score tracker owned by the game loop.
///
/// Counters only move forward, one step per round.
#[derive(Debug, Clone, Default)]
pub struct ScoreBoard {
    state: ScoreState,
}

impl ScoreBoard {
    /// Creates a zeroed scoreboard.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the outcome of one round.
    #[instrument(skip(self))]
    pub fn update(&mut self, outcome: RoundOutcome) {
        match outcome {
            RoundOutcome::PlayerWin => self.state.player_wins += 1,
            RoundOutcome::ComputerWin => self.state.computer_wins += 1,
            RoundOutcome::Draw => self.state.draws += 1,
        }
        debug!(score = ?self.state, "Score updated");
    }

    /// Returns a copy of the current counters.
    pub fn snapshot(&self) -> ScoreState {
        self.state
    }
}
