//! Draw detection.

use super::win::winning_line;
use crate::board::Board;
use tracing::instrument;

/// A full board with no completed line.
#[instrument]
pub fn is_draw(board: &Board) -> bool {
    board.is_full() && winning_line(board).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_not_draw() {
        assert!(!is_draw(&Board::new()));
    }

    #[test]
    fn test_partial_board_not_draw() {
        assert!(!is_draw(&"XOXOXO...".parse().unwrap()));
    }

    #[test]
    fn test_draw_detection() {
        // X O X / O X X / O X O
        assert!(is_draw(&"XOXOXXOXO".parse().unwrap()));
    }

    #[test]
    fn test_not_draw_if_full_with_winner() {
        // X X X / O O X / X O O
        assert!(!is_draw(&"XXXOOXXOO".parse().unwrap()));
    }
}
