//! The eight winning lines.

use crate::position::Position::{self, *};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

/// Which kind of line a [`Line`] is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum LineKind {
    /// Horizontal, zero-based row number.
    #[display("row {}", _0)]
    Row(usize),
    /// Vertical, zero-based column number.
    #[display("column {}", _0)]
    Column(usize),
    /// Top-left to bottom-right.
    #[display("diagonal")]
    Diagonal,
    /// Top-right to bottom-left.
    #[display("anti-diagonal")]
    AntiDiagonal,
}

/// Three positions that win when all hold the same mark.
///
/// Only the eight canonical triples in [`Line::ALL`] can be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "[usize; 3]", into = "[usize; 3]")]
pub struct Line([Position; 3]);

impl Line {
    /// All lines in evaluation order: rows, columns, diagonals.
    ///
    /// When a board matches several lines the earliest one wins.
    pub const ALL: [Line; 8] = [
        Line([TopLeft, TopCenter, TopRight]),
        Line([MiddleLeft, Center, MiddleRight]),
        Line([BottomLeft, BottomCenter, BottomRight]),
        Line([TopLeft, MiddleLeft, BottomLeft]),
        Line([TopCenter, Center, BottomCenter]),
        Line([TopRight, MiddleRight, BottomRight]),
        Line([TopLeft, Center, BottomRight]),
        Line([TopRight, Center, BottomLeft]),
    ];

    /// The three positions.
    pub fn positions(self) -> [Position; 3] {
        self.0
    }

    /// The three board indices.
    pub fn indices(self) -> [usize; 3] {
        self.0.map(Position::to_index)
    }

    /// Whether `pos` lies on this line.
    pub fn contains(self, pos: Position) -> bool {
        self.0.contains(&pos)
    }

    /// Classifies the line.
    pub fn kind(self) -> LineKind {
        let [a, b, _] = self.0;
        if a.row() == b.row() {
            LineKind::Row(a.row())
        } else if a.col() == b.col() {
            LineKind::Column(a.col())
        } else if a == TopLeft {
            LineKind::Diagonal
        } else {
            LineKind::AntiDiagonal
        }
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [a, b, c] = self.indices();
        write!(f, "{}, {}, {}", a, b, c)
    }
}

/// A triple that is not one of the eight winning lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("{:?} is not a winning line", indices)]
pub struct LineError {
    /// The rejected indices.
    pub indices: [usize; 3],
}

impl TryFrom<[usize; 3]> for Line {
    type Error = LineError;

    fn try_from(indices: [usize; 3]) -> Result<Self, Self::Error> {
        Line::ALL
            .into_iter()
            .find(|line| line.indices() == indices)
            .ok_or(LineError { indices })
    }
}

impl From<Line> for [usize; 3] {
    fn from(line: Line) -> Self {
        line.indices()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_order() {
        let all: Vec<[usize; 3]> = Line::ALL.iter().map(|l| l.indices()).collect();
        assert_eq!(
            all,
            vec![
                [0, 1, 2],
                [3, 4, 5],
                [6, 7, 8],
                [0, 3, 6],
                [1, 4, 7],
                [2, 5, 8],
                [0, 4, 8],
                [2, 4, 6],
            ]
        );
    }

    #[test]
    fn test_kinds() {
        assert_eq!(Line::ALL[1].kind(), LineKind::Row(1));
        assert_eq!(Line::ALL[5].kind(), LineKind::Column(2));
        assert_eq!(Line::ALL[6].kind(), LineKind::Diagonal);
        assert_eq!(Line::ALL[7].kind(), LineKind::AntiDiagonal);
    }

    #[test]
    fn test_try_from_rejects_non_lines() {
        assert_eq!(Line::try_from([2, 4, 6]), Ok(Line::ALL[7]));
        assert_eq!(
            Line::try_from([0, 1, 3]),
            Err(LineError {
                indices: [0, 1, 3]
            })
        );
        // order matters: lines are stored ascending
        assert!(Line::try_from([2, 1, 0]).is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Line::ALL[0].to_string(), "0, 1, 2");
        assert!(Line::ALL[4].contains(Position::Center));
    }
}
