//! What happened to a move request.
//!
//! Illegal moves are not errors: the game ignores them and reports why,
//! and callers are free to drop the report.

use crate::position::Position;
use crate::types::Mark;
use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Why a move request left the game unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum Rejection {
    /// The index does not name a cell.
    #[display("index {} is outside the board", _0)]
    OutOfRange(usize),

    /// The cell already holds a mark.
    #[display("{} is already occupied", _0)]
    Occupied(Position),

    /// The game has a winner or is drawn.
    #[display("the game is already over")]
    GameOver,
}

/// Report returned by [`GameState::apply_move`](crate::GameState::apply_move).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum Placement {
    /// `mark` now occupies `position`.
    #[display("{} -> {}", mark, position)]
    Placed {
        /// The mark that moved.
        mark: Mark,
        /// Where it was placed.
        position: Position,
    },

    /// Nothing changed.
    #[display("ignored: {}", _0)]
    Ignored(Rejection),
}

impl Placement {
    /// True when the board changed.
    pub fn is_placed(&self) -> bool {
        matches!(self, Placement::Placed { .. })
    }

    /// The rejection reason for an ignored move.
    pub fn rejection(&self) -> Option<Rejection> {
        match self {
            Placement::Ignored(reason) => Some(*reason),
            Placement::Placed { .. } => None,
        }
    }
}
