//! Opponent trait and implementations.

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IteratorRandom;
use strictly_rps::Move;
use strum::IntoEnumIterator;
use tracing::{debug, instrument};

/// Something that throws moves against the player.
///
/// This is the only place non-determinism enters a session.
pub trait Opponent {
    /// Picks the next move.
    fn next_move(&mut self) -> Move;

    /// Returns the opponent's display name.
    fn name(&self) -> &str;
}

/// Opponent that picks uniformly at random, with replacement.
#[derive(Debug)]
pub struct RandomOpponent {
    name: String,
    rng: StdRng,
}

impl RandomOpponent {
    /// Creates an opponent seeded from the thread-local generator.
    #[instrument]
    pub fn new() -> Self {
        Self {
            name: "Компьютер".to_string(),
            rng: StdRng::from_rng(&mut rand::rng()),
        }
    }

    /// Creates an opponent with a fixed seed, for reproducible sessions.
    #[instrument]
    pub fn seeded(seed: u64) -> Self {
        debug!(seed, "Seeding opponent");
        Self {
            name: "Компьютер".to_string(),
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomOpponent {
    fn default() -> Self {
        Self::new()
    }
}

impl Opponent for RandomOpponent {
    fn next_move(&mut self) -> Move {
        // EnumIter reports an exact size, so this is a single uniform draw.
        let choice = Move::iter()
            .choose(&mut self.rng)
            .unwrap_or(Move::Rock);
        debug!(opponent = %self.name, %choice, "Opponent chose move");
        choice
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Opponent that replays a fixed sequence of moves, wrapping around.
#[derive(Debug, Clone)]
pub struct ScriptedOpponent {
    name: String,
    moves: Vec<Move>,
    cursor: usize,
}

impl ScriptedOpponent {
    /// Creates a scripted opponent. Returns `None` for an empty script.
    #[instrument(skip(moves))]
    pub fn new(moves: impl IntoIterator<Item = Move>) -> Option<Self> {
        let moves: Vec<Move> = moves.into_iter().collect();
        if moves.is_empty() {
            return None;
        }
        Some(Self {
            name: "Script".to_string(),
            moves,
            cursor: 0,
        })
    }
}

impl Opponent for ScriptedOpponent {
    fn next_move(&mut self) -> Move {
        let choice = self.moves[self.cursor % self.moves.len()];
        self.cursor += 1;
        debug!(opponent = %self.name, %choice, "Scripted move");
        choice
    }

    fn name(&self) -> &str {
        &self.name
    }
}
