//! Authoritative game state: board, turn and cached outcome.

use crate::board::Board;
use crate::invariants::{GameInvariants, InvariantSet, MarkBalanceInvariant, TurnParityInvariant};
use crate::line::Line;
use crate::outcome::{Outcome, evaluate};
use crate::placement::{Placement, Rejection};
use crate::position::Position;
use crate::rules;
use crate::status::{Phase, Status};
use crate::types::Mark;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// A board that no sequence of legal moves can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum GameStateError {
    /// X must have placed as many marks as O, or one more.
    #[display("unbalanced marks: {} X, {} O", x, o)]
    Unbalanced {
        /// Number of X marks.
        x: usize,
        /// Number of O marks.
        o: usize,
    },

    /// Both marks have completed a line.
    #[display("both marks have completed a line")]
    BothWin,

    /// A mark was placed after `winner` completed a line.
    #[display("a move was played after {} won", winner)]
    PlayedAfterWin {
        /// The mark owning the completed line.
        winner: Mark,
    },
}

/// Board, turn and outcome of one game.
///
/// The outcome is cached and refreshed on every successful move and on
/// reset. Serializes as its board; turn and outcome are derived again on
/// deserialization, which rejects unreachable boards.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters, Serialize, Deserialize)]
#[serde(try_from = "Board", into = "Board")]
pub struct GameState {
    /// The nine cells.
    board: Board,
    /// The mark that moves next.
    turn: Mark,
    /// Outcome of `board`.
    outcome: Outcome,
}

impl GameState {
    /// Creates a new game: empty board, X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            turn: Mark::X,
            outcome: Outcome::None,
        }
    }

    /// Restores a game from a board snapshot.
    ///
    /// The turn is X when both marks have been placed equally often and O
    /// otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`GameStateError`] when the board is not reachable by legal
    /// play from an empty board.
    #[instrument(skip(board), fields(board = %board))]
    pub fn from_board(board: Board) -> Result<Self, GameStateError> {
        let x = board.count(Mark::X);
        let o = board.count(Mark::O);
        if !MarkBalanceInvariant::holds_for(&board) {
            return Err(GameStateError::Unbalanced { x, o });
        }
        if rules::winners(&board).len() > 1 {
            return Err(GameStateError::BothWin);
        }
        // Play stops on the winning move, so the winner moved last.
        if let Some((winner, _)) = rules::winning_line(&board) {
            let moved_last = match winner {
                Mark::X => x == o + 1,
                Mark::O => x == o,
            };
            if !moved_last {
                return Err(GameStateError::PlayedAfterWin { winner });
            }
        }

        Ok(Self {
            board,
            turn: TurnParityInvariant::expected_turn(x, o),
            outcome: evaluate(&board),
        })
    }

    #[cfg(test)]
    pub(crate) fn from_parts_unchecked(board: Board, turn: Mark) -> Self {
        Self {
            board,
            turn,
            outcome: evaluate(&board),
        }
    }

    /// Places the current turn's mark at `index` (0-8) and passes the turn.
    ///
    /// Out-of-range indices, occupied cells and finished games leave the
    /// state untouched; the returned [`Placement`] says which case applied.
    #[instrument(skip(self), fields(turn = %self.turn))]
    pub fn apply_move(&mut self, index: usize) -> Placement {
        let Some(position) = Position::from_index(index) else {
            debug!(index, "Ignoring move outside the board");
            return Placement::Ignored(Rejection::OutOfRange(index));
        };
        self.apply(position)
    }

    /// Places the current turn's mark at `position`.
    ///
    /// See [`GameState::apply_move`].
    #[instrument(skip(self), fields(turn = %self.turn))]
    pub fn apply(&mut self, position: Position) -> Placement {
        if self.outcome.is_decided() {
            debug!(%position, "Ignoring move after game end");
            return Placement::Ignored(Rejection::GameOver);
        }
        if !self.board.get(position).is_empty() {
            debug!(%position, "Ignoring move on occupied cell");
            return Placement::Ignored(Rejection::Occupied(position));
        }

        let mark = self.turn;
        self.board.place(position, mark);
        self.turn = mark.opponent();
        self.outcome = evaluate(&self.board);
        debug_assert!(GameInvariants::check_all(&*self).is_ok());

        debug!(%mark, %position, "Mark placed");
        if self.outcome.is_decided() {
            info!(outcome = ?self.outcome, "Game finished");
        }
        Placement::Placed { mark, position }
    }

    /// Clears the board and gives the turn back to X.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        *self = Self::new();
        debug!("Game reset");
    }

    /// Presentation status derived from the current state.
    pub fn status(&self) -> Status {
        Status::from(self)
    }

    /// Whether moves are still accepted.
    pub fn phase(&self) -> Phase {
        if self.is_finished() {
            Phase::Finished
        } else {
            Phase::InProgress
        }
    }

    /// True once the game is won or drawn.
    pub fn is_finished(&self) -> bool {
        self.outcome.is_decided()
    }

    /// The winning line, if the game is won.
    pub fn winning_line(&self) -> Option<Line> {
        self.outcome.line()
    }

    /// True when `position` belongs to the winning line.
    pub fn is_highlighted(&self, position: Position) -> bool {
        self.winning_line().is_some_and(|line| line.contains(position))
    }

    /// True when a move at `position` would be accepted right now.
    pub fn is_playable(&self, position: Position) -> bool {
        !self.is_finished() && self.board.get(position).is_empty()
    }

    /// Positions that would accept a move right now, row-major.
    pub fn playable_positions(&self) -> Vec<Position> {
        if self.is_finished() {
            Vec::new()
        } else {
            Position::empty_cells(&self.board)
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl TryFrom<Board> for GameState {
    type Error = GameStateError;

    fn try_from(board: Board) -> Result<Self, Self::Error> {
        Self::from_board(board)
    }
}

impl From<GameState> for Board {
    fn from(game: GameState) -> Self {
        game.board
    }
}
