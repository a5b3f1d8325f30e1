//! Pure rock-paper-scissors game logic.
//!
//! Moves, the cyclic beats-relation, round resolution and the
//! per-session scoreboard. Nothing here touches I/O; the application
//! crate wires these into a terminal game loop.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod rules;
mod score;
mod types;

pub use rules::{Verdict, resolve};
pub use score::{ScoreBoard, ScoreState};
pub use types::{Move, RoundOutcome};
