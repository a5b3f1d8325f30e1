//! Round resolution.
//!
//! Pure functions only. Inputs are already-validated moves, so every
//! pair in the 3x3 domain has an answer.

use crate::types::{Move, RoundOutcome};
use tracing::{debug, instrument};

/// Result of resolving one round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verdict {
    /// Human-readable announcement.
    message: &'static str,
    /// Who took the round.
    outcome: RoundOutcome,
}

impl Verdict {
    /// Human-readable announcement.
    pub fn message(&self) -> &'static str {
        self.message
    }

    /// Who took the round.
    pub fn outcome(&self) -> RoundOutcome {
        self.outcome
    }
}

/// Resolves a round between the player and the computer.
#[instrument]
pub fn resolve(player: Move, computer: Move) -> Verdict {
    let outcome = if player == computer {
        RoundOutcome::Draw
    } else if player.beats() == computer {
        RoundOutcome::PlayerWin
    } else {
        RoundOutcome::ComputerWin
    };
    debug!(%outcome, "Round resolved");

    Verdict {
        message: outcome.message(),
        outcome,
    }
}
