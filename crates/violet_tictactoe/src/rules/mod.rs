//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board) snapshot. Nothing here
//! holds state, so every function returns the same answer for the same
//! board.

pub mod draw;
pub mod win;

pub use draw::is_draw;
pub use win::{winners, winning_line};
