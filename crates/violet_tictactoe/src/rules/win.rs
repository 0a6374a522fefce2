//! Win detection.

use crate::board::Board;
use crate::line::Line;
use crate::types::{Cell, Mark};
use tracing::instrument;

/// The mark owning `line` on `board`, if all three cells match.
fn line_owner(board: &Board, line: Line) -> Option<Mark> {
    let [a, b, c] = line.positions().map(|pos| board.get(pos));
    match a {
        Cell::Occupied(mark) if a == b && b == c => Some(mark),
        _ => None,
    }
}

/// Returns the first completed line in [`Line::ALL`] order.
///
/// Only malformed boards can complete more than one line; the earliest
/// line listed is reported.
#[instrument]
pub fn winning_line(board: &Board) -> Option<(Mark, Line)> {
    Line::ALL
        .into_iter()
        .find_map(|line| line_owner(board, line).map(|mark| (mark, line)))
}

/// Every mark that owns at least one completed line.
pub fn winners(board: &Board) -> Vec<Mark> {
    let mut marks: Vec<Mark> = Line::ALL
        .into_iter()
        .filter_map(|line| line_owner(board, line))
        .collect();
    marks.sort_by_key(|m| m.symbol());
    marks.dedup();
    marks
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(winning_line(&Board::new()), None);
    }

    #[test]
    fn test_winner_top_row() {
        assert_eq!(
            winning_line(&board("XXXOO....")),
            Some((Mark::X, Line::ALL[0]))
        );
    }

    #[test]
    fn test_winner_anti_diagonal() {
        assert_eq!(
            winning_line(&board("XXOXO.O..")),
            Some((Mark::O, Line::ALL[7]))
        );
    }

    #[test]
    fn test_no_winner_incomplete() {
        assert_eq!(winning_line(&board("XX.OO....")), None);
    }

    #[test]
    fn test_earliest_line_wins_tie() {
        // Row 0 and column 0 both complete; row 0 is listed first.
        let b = board("XXXX..X..");
        assert_eq!(winning_line(&b), Some((Mark::X, Line::ALL[0])));
    }

    #[test]
    fn test_winners_reports_both_marks() {
        let b = board("XXXOOO...");
        assert_eq!(winners(&b), vec![Mark::O, Mark::X]);
        assert_eq!(winning_line(&b), Some((Mark::X, Line::ALL[0])));
    }
}
