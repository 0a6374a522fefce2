//! Outcome evaluation.

use crate::board::Board;
use crate::line::Line;
use crate::rules;
use crate::types::Mark;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Result of evaluating a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Outcome {
    /// Nobody has won and the board has open cells.
    #[default]
    None,
    /// `player` completed `line`.
    Win {
        /// The winning mark.
        player: Mark,
        /// The completed line.
        line: Line,
    },
    /// Full board without a completed line.
    Draw,
}

impl Outcome {
    /// True for `Win` and `Draw`.
    pub fn is_decided(&self) -> bool {
        !matches!(self, Outcome::None)
    }

    /// The winning mark, if any.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            Outcome::Win { player, .. } => Some(*player),
            _ => None,
        }
    }

    /// The winning line, if any.
    pub fn line(&self) -> Option<Line> {
        match self {
            Outcome::Win { line, .. } => Some(*line),
            _ => None,
        }
    }
}

/// Evaluates `board`.
///
/// Lines are checked in [`Line::ALL`] order and the first completed one is
/// reported. Otherwise a full board is a draw.
#[instrument]
pub fn evaluate(board: &Board) -> Outcome {
    if let Some((player, line)) = rules::winning_line(board) {
        Outcome::Win { player, line }
    } else if board.is_full() {
        Outcome::Draw
    } else {
        Outcome::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_none() {
        assert_eq!(evaluate(&Board::new()), Outcome::None);
        assert!(!Outcome::None.is_decided());
    }

    #[test]
    fn test_win_carries_line() {
        let outcome = evaluate(&"X..XO.XO.".parse().unwrap());
        assert_eq!(outcome.winner(), Some(Mark::X));
        assert_eq!(outcome.line().map(Line::indices), Some([0, 3, 6]));
        assert!(outcome.is_decided());
    }

    #[test]
    fn test_draw() {
        let outcome = evaluate(&"XOXOXOOXO".parse().unwrap());
        assert_eq!(outcome, Outcome::Draw);
        assert_eq!(outcome.winner(), None);
        assert_eq!(outcome.line(), None);
    }

    #[test]
    fn test_full_board_with_line_is_win_not_draw() {
        let outcome = evaluate(&"XXXOOXXOO".parse().unwrap());
        assert_eq!(outcome.winner(), Some(Mark::X));
    }
}
