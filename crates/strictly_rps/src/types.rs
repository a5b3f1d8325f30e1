//! Core domain types for rock-paper-scissors.

use derive_more::Display;
use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoEnumIterator};

/// A move a player can throw.
///
/// Displays as its single-letter input token. `Move::iter()` walks the
/// moves in prompt order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
pub enum Move {
    /// Камень.
    #[display("к")]
    Rock,
    /// Ножницы.
    #[display("н")]
    Scissors,
    /// Бумага.
    #[display("б")]
    Paper,
}

impl Move {
    /// Returns the input token for this move.
    pub fn token(self) -> &'static str {
        match self {
            Move::Rock => "к",
            Move::Scissors => "н",
            Move::Paper => "б",
        }
    }

    /// Returns the full name shown in prompts.
    pub fn label(self) -> &'static str {
        match self {
            Move::Rock => "камень",
            Move::Scissors => "ножницы",
            Move::Paper => "бумага",
        }
    }

    /// Looks up a move by its exact token.
    ///
    /// The token must already be normalized (trimmed, lowercase).
    pub fn from_token(token: &str) -> Option<Move> {
        Move::iter().find(|m| m.token() == token)
    }

    /// Returns the move this one defeats.
    pub fn beats(self) -> Move {
        match self {
            Move::Rock => Move::Scissors,
            Move::Scissors => Move::Paper,
            Move::Paper => Move::Rock,
        }
    }
}

/// Outcome of a single round, from the player's side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
pub enum RoundOutcome {
    /// The human player won.
    #[display("player")]
    PlayerWin,
    /// The computer won.
    #[display("computer")]
    ComputerWin,
    /// Both threw the same move.
    #[display("draw")]
    Draw,
}

impl RoundOutcome {
    /// The same round seen from the other side of the table.
    pub fn flipped(self) -> Self {
        match self {
            RoundOutcome::PlayerWin => RoundOutcome::ComputerWin,
            RoundOutcome::ComputerWin => RoundOutcome::PlayerWin,
            RoundOutcome::Draw => RoundOutcome::Draw,
        }
    }

    /// Fixed message announcing this outcome.
    pub fn message(self) -> &'static str {
        match self {
            RoundOutcome::PlayerWin => "🎉 Вы победили!",
            RoundOutcome::ComputerWin => "💻 Компьютер победил!",
            RoundOutcome::Draw => "🤝 Ничья!",
        }
    }
}
