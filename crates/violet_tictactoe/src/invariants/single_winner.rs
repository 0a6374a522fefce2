//! At most one mark can own a completed line.

use super::Invariant;
use crate::game::GameState;
use crate::rules;

/// Invariant: no board has winning lines for both marks.
pub struct SingleWinnerInvariant;

impl Invariant<GameState> for SingleWinnerInvariant {
    fn holds(game: &GameState) -> bool {
        rules::winners(game.board()).len() <= 1
    }

    fn description() -> &'static str {
        "At most one mark has completed a line"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Mark;

    #[test]
    fn test_double_line_for_one_mark_holds() {
        // X completes row 0 and column 0 with its fifth mark.
        let game = GameState::from_board("XXXXOOXOO".parse().unwrap()).unwrap();
        assert_eq!(game.outcome().winner(), Some(Mark::X));
        assert!(SingleWinnerInvariant::holds(&game));
    }

    #[test]
    fn test_both_marks_winning_violates() {
        let game = GameState::from_parts_unchecked("XXXOOO...".parse().unwrap(), Mark::X);
        assert!(!SingleWinnerInvariant::holds(&game));
    }
}
