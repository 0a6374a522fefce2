//! Violet tic-tac-toe - the game core behind the single-page board.
//!
//! The crate owns the board, decides which moves are legal and evaluates
//! the outcome. Rendering and accessibility text live in the presentation
//! layer, which reads [`GameState`] and calls [`GameState::apply_move`] and
//! [`GameState::reset`].
//!
//! # Example
//!
//! ```
//! use violet_tictactoe::{GameState, Mark, Outcome};
//!
//! let mut game = GameState::new();
//! for index in [0, 4, 1, 3, 2] {
//!     game.apply_move(index);
//! }
//! assert_eq!(game.outcome().winner(), Some(Mark::X));
//! assert_eq!(game.status().to_string(), "Winner: X");
//!
//! // Finished games ignore further moves.
//! assert!(!game.apply_move(8).is_placed());
//!
//! game.reset();
//! assert_eq!(*game.outcome(), Outcome::None);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod game;
mod line;
mod outcome;
mod placement;
mod position;
mod status;
mod types;

pub mod invariants;
pub mod rules;

pub use board::{Board, BoardError};
pub use game::{GameState, GameStateError};
pub use line::{Line, LineError, LineKind};
pub use outcome::{Outcome, evaluate};
pub use placement::{Placement, Rejection};
pub use position::Position;
pub use status::{Phase, Status};
pub use types::{Cell, Mark};
