//! The 3x3 board and its text notation.
//!
//! The notation is nine cells in row-major order: `X`/`x`, `O`/`o`, and one
//! of `.`, `-`, `_` or a space for an empty cell. Newlines and `|` between
//! cells are ignored, so the output of [`Board`]'s `Display` parses back.

use crate::position::Position;
use crate::types::{Cell, Mark};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// 3x3 board, row-major.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; 9],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// The cell at `pos`.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.to_index()]
    }

    /// The cell at a raw index, `None` outside 0-8.
    pub fn cell(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// All cells, row-major.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// True when every cell holds a mark.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }

    /// True when no cell holds a mark.
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|c| c.is_empty())
    }

    /// Number of cells holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.cells
            .iter()
            .filter(|c| **c == Cell::Occupied(mark))
            .count()
    }

    /// Writes a mark. Only the game state mutates boards.
    pub(crate) fn place(&mut self, pos: Position, mark: Mark) {
        self.cells[pos.to_index()] = Cell::Occupied(mark);
    }
}

impl From<[Cell; 9]> for Board {
    fn from(cells: [Cell; 9]) -> Self {
        Self { cells }
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, cell) in self.cells.iter().enumerate() {
            let symbol = cell.mark().map_or('.', Mark::symbol);
            write!(f, "{}", symbol)?;
            match i % 3 {
                2 if i < 8 => writeln!(f)?,
                2 => {}
                _ => write!(f, "|")?,
            }
        }
        Ok(())
    }
}

/// Failure to parse board notation.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum BoardError {
    /// The notation did not contain exactly nine cells.
    #[display("expected 9 cells, found {}", _0)]
    WrongCellCount(#[error(not(source))] usize),

    /// A character that is neither a mark nor an empty marker.
    #[display("invalid cell {:?} at cell {}", found, index)]
    InvalidCell {
        /// Offending character.
        found: char,
        /// Cell index it would have occupied.
        index: usize,
    },
}

impl FromStr for Board {
    type Err = BoardError;

    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = [Cell::Empty; 9];
        let mut count = 0;

        for ch in s.chars().filter(|c| *c != '|' && *c != '\n' && *c != '\r') {
            let cell = match ch {
                'X' | 'x' => Cell::Occupied(Mark::X),
                'O' | 'o' => Cell::Occupied(Mark::O),
                '.' | '-' | '_' | ' ' => Cell::Empty,
                found => return Err(BoardError::InvalidCell { found, index: count }),
            };
            if let Some(slot) = cells.get_mut(count) {
                *slot = cell;
            }
            count += 1;
        }

        if count != 9 {
            return Err(BoardError::WrongCellCount(count));
        }
        Ok(Self { cells })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_compact() {
        let board: Board = "XO.X.O..X".parse().unwrap();
        assert_eq!(board.get(Position::TopLeft), Cell::Occupied(Mark::X));
        assert_eq!(board.get(Position::TopCenter), Cell::Occupied(Mark::O));
        assert_eq!(board.get(Position::TopRight), Cell::Empty);
        assert_eq!(board.count(Mark::X), 3);
        assert_eq!(board.count(Mark::O), 2);
    }

    #[test]
    fn test_display_parses_back() {
        let board: Board = "xo-ox-__x".parse().unwrap();
        let text = board.to_string();
        assert_eq!(text, "X|O|.\nO|X|.\n.|.|X");
        assert_eq!(text.parse::<Board>().unwrap(), board);
    }

    #[test]
    fn test_parse_ignores_separators_and_crlf() {
        let board: Board = "X|O|.\r\n.|X|.\r\nO|.|X".parse().unwrap();
        assert_eq!(board, "XO..X.O.X".parse::<Board>().unwrap());
        // a space is an empty cell, a tab is not a cell at all
        assert_eq!("X O......".parse::<Board>().unwrap().cell(1), Some(Cell::Empty));
        assert_eq!(
            "X\tO......".parse::<Board>(),
            Err(BoardError::InvalidCell {
                found: '\t',
                index: 1
            })
        );
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("XO".parse::<Board>(), Err(BoardError::WrongCellCount(2)));
        assert_eq!(
            "XOXOXOXOXO".parse::<Board>(),
            Err(BoardError::WrongCellCount(10))
        );
        assert_eq!(
            "XO?......".parse::<Board>(),
            Err(BoardError::InvalidCell {
                found: '?',
                index: 2
            })
        );
    }

    #[test]
    fn test_full_and_empty() {
        assert!(Board::new().is_empty());
        assert!(!Board::new().is_full());
        let full: Board = "XOXOXOOXO".parse().unwrap();
        assert!(full.is_full());
        assert_eq!(full.cell(9), None);
    }
}
