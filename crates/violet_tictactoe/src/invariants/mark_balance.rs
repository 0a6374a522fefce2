//! Mark balance: X moves first and turns alternate.

use super::Invariant;
use crate::board::Board;
use crate::game::GameState;
use crate::types::Mark;

/// Invariant: X count minus O count is 0 or 1.
pub struct MarkBalanceInvariant;

impl MarkBalanceInvariant {
    /// Checks a bare board.
    pub fn holds_for(board: &Board) -> bool {
        let x = board.count(Mark::X);
        let o = board.count(Mark::O);
        x == o || x == o + 1
    }
}

impl Invariant<GameState> for MarkBalanceInvariant {
    fn holds(game: &GameState) -> bool {
        Self::holds_for(game.board())
    }

    fn description() -> &'static str {
        "X has placed as many marks as O, or one more"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_balanced_boards_hold() {
        for notation in [".........", "X........", "XO.......", "XOXXOOOXX"] {
            assert!(MarkBalanceInvariant::holds_for(&notation.parse().unwrap()));
        }
    }

    #[test]
    fn test_unbalanced_boards_violate() {
        for notation in ["O........", "XX.......", "XXXO....."] {
            assert!(!MarkBalanceInvariant::holds_for(&notation.parse().unwrap()));
        }
    }
}
