//! Checkable game invariants.
//!
//! Invariants are logical properties that must hold for every reachable
//! game state. They are asserted in debug builds after each move and are
//! testable on their own.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("invariant violated: {}", description)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: &'static str,
}

impl InvariantViolation {
    /// Creates a violation for invariant `I`.
    pub fn of<S, I: Invariant<S>>() -> Self {
        Self {
            description: I::description(),
        }
    }
}

/// A set of invariants checked together.
///
/// Implemented for 2- and 3-tuples of [`Invariant`]s.
pub trait InvariantSet<S> {
    /// Returns every violation, or `Ok(())` when all invariants hold.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn collect(violations: Vec<InvariantViolation>) -> Result<(), Vec<InvariantViolation>> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        if !I1::holds(state) {
            violations.push(InvariantViolation::of::<S, I1>());
        }
        if !I2::holds(state) {
            violations.push(InvariantViolation::of::<S, I2>());
        }
        collect(violations)
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        if !I1::holds(state) {
            violations.push(InvariantViolation::of::<S, I1>());
        }
        if !I2::holds(state) {
            violations.push(InvariantViolation::of::<S, I2>());
        }
        if !I3::holds(state) {
            violations.push(InvariantViolation::of::<S, I3>());
        }
        collect(violations)
    }
}

pub mod mark_balance;
pub mod single_winner;
pub mod turn_parity;

pub use mark_balance::MarkBalanceInvariant;
pub use single_winner::SingleWinnerInvariant;
pub use turn_parity::TurnParityInvariant;

/// All game invariants as a composable set.
pub type GameInvariants = (
    MarkBalanceInvariant,
    TurnParityInvariant,
    SingleWinnerInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, GameState};

    #[test]
    fn test_invariant_set_holds_for_new_game() {
        assert!(GameInvariants::check_all(&GameState::new()).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves() {
        let mut game = GameState::new();
        for index in [4, 0, 8] {
            game.apply_move(index);
        }
        assert!(GameInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_invariant_set_detects_violations() {
        let board: Board = "XXXOOO...".parse().unwrap();
        // Both marks own a row and O is wrongly on turn.
        let game = GameState::from_parts_unchecked(board, crate::Mark::O);
        let violations = GameInvariants::check_all(&game).unwrap_err();
        assert_eq!(violations.len(), 2);
        assert_eq!(
            violations[0].description,
            TurnParityInvariant::description()
        );
        assert_eq!(
            violations[1].description,
            SingleWinnerInvariant::description()
        );
    }

    #[test]
    fn test_two_invariants_as_set() {
        type TwoInvariants = (MarkBalanceInvariant, TurnParityInvariant);
        assert!(TwoInvariants::check_all(&GameState::new()).is_ok());
    }
}
