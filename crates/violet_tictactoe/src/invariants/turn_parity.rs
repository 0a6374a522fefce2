//! Turn parity: the mark on turn follows from the mark counts.

use super::Invariant;
use crate::game::GameState;
use crate::types::Mark;

/// Invariant: X is on turn exactly when both marks have been placed
/// equally often.
pub struct TurnParityInvariant;

impl TurnParityInvariant {
    /// The mark that should be on turn for the given counts.
    pub fn expected_turn(x_count: usize, o_count: usize) -> Mark {
        if x_count == o_count { Mark::X } else { Mark::O }
    }
}

impl Invariant<GameState> for TurnParityInvariant {
    fn holds(game: &GameState) -> bool {
        let board = game.board();
        *game.turn() == Self::expected_turn(board.count(Mark::X), board.count(Mark::O))
    }

    fn description() -> &'static str {
        "Turn alternates X, O, X, ... starting with X"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turn_flips_with_each_move() {
        let mut game = GameState::new();
        assert!(TurnParityInvariant::holds(&game));
        game.apply_move(0);
        assert_eq!(*game.turn(), Mark::O);
        assert!(TurnParityInvariant::holds(&game));
    }

    #[test]
    fn test_wrong_turn_violates() {
        let game = GameState::from_parts_unchecked("X........".parse().unwrap(), Mark::X);
        assert!(!TurnParityInvariant::holds(&game));
    }
}
