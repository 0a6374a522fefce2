//! Status line and phase for the presentation layer.

use crate::game::GameState;
use crate::line::Line;
use crate::outcome::Outcome;
use crate::types::Mark;
use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Whether the game still accepts moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum Phase {
    /// Moves are accepted.
    #[display("In Progress")]
    InProgress,
    /// Won or drawn; only reset changes the board.
    #[display("Finished")]
    Finished,
}

/// Human-facing game status.
///
/// `Display` renders the status text shown above the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum Status {
    /// Game continues with `next` to move.
    #[display("Next player: {}", next)]
    InProgress {
        /// The mark on turn.
        next: Mark,
    },
    /// `winner` completed `line`.
    #[display("Winner: {}", winner)]
    Won {
        /// The winning mark.
        winner: Mark,
        /// The completed line.
        line: Line,
    },
    /// Full board, no winner.
    #[display("Draw game")]
    Draw,
}

impl Status {
    /// Short badge label for the status.
    pub fn badge(&self) -> &'static str {
        match self {
            Status::InProgress { .. } => "In Progress",
            Status::Won { .. } => "Game Over",
            Status::Draw => "Draw",
        }
    }
}

impl From<&GameState> for Status {
    fn from(game: &GameState) -> Self {
        match *game.outcome() {
            Outcome::None => Status::InProgress { next: *game.turn() },
            Outcome::Win { player, line } => Status::Won {
                winner: player,
                line,
            },
            Outcome::Draw => Status::Draw,
        }
    }
}
