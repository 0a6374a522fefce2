//! Named positions on the 3x3 board.
//!
//! Positions are row-major: `index = row * 3 + col` with rows and columns
//! counted from zero. The 1-based `display_*` accessors exist only for
//! rendering.

use crate::board::Board;
use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoEnumIterator};
use tracing::instrument;

/// A position on the board (0-8).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, EnumIter,
)]
pub enum Position {
    /// Index 0
    TopLeft,
    /// Index 1
    TopCenter,
    /// Index 2
    TopRight,
    /// Index 3
    MiddleLeft,
    /// Index 4
    Center,
    /// Index 5
    MiddleRight,
    /// Index 6
    BottomLeft,
    /// Index 7
    BottomCenter,
    /// Index 8
    BottomRight,
}

impl Position {
    /// All 9 positions in row-major order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Creates a position from a board index, `None` outside 0-8.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Creates a position from zero-based row and column.
    pub fn from_row_col(row: usize, col: usize) -> Option<Self> {
        if row < 3 && col < 3 {
            Self::from_index(row * 3 + col)
        } else {
            None
        }
    }

    /// Board index (0-8).
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Zero-based row.
    pub fn row(self) -> usize {
        self.to_index() / 3
    }

    /// Zero-based column.
    pub fn col(self) -> usize {
        self.to_index() % 3
    }

    /// One-based row, for display.
    pub fn display_row(self) -> usize {
        self.row() + 1
    }

    /// One-based column, for display.
    pub fn display_col(self) -> usize {
        self.col() + 1
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Returns the positions that are still empty on `board`, row-major.
    #[instrument(skip(board))]
    pub fn empty_cells(board: &Board) -> Vec<Position> {
        Self::iter().filter(|pos| board.get(*pos).is_empty()).collect()
    }
}

impl From<Position> for usize {
    fn from(pos: Position) -> Self {
        pos.to_index()
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trips_through_all() {
        for (i, pos) in Position::iter().enumerate() {
            assert_eq!(pos.to_index(), i);
            assert_eq!(Position::from_index(i), Some(pos));
        }
        assert_eq!(Position::from_index(9), None);
    }

    #[test]
    fn test_empty_cells_row_major() {
        let board: Board = "X...O...X".parse().unwrap();
        assert_eq!(
            Position::empty_cells(&board),
            vec![
                Position::TopCenter,
                Position::TopRight,
                Position::MiddleLeft,
                Position::MiddleRight,
                Position::BottomLeft,
                Position::BottomCenter,
            ]
        );
    }

    #[test]
    fn test_row_col() {
        assert_eq!((Position::MiddleRight.row(), Position::MiddleRight.col()), (1, 2));
        assert_eq!(Position::BottomLeft.display_row(), 3);
        assert_eq!(Position::BottomLeft.display_col(), 1);
        assert_eq!(Position::from_row_col(2, 2), Some(Position::BottomRight));
        assert_eq!(Position::from_row_col(3, 0), None);
    }
}
