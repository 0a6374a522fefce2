//! Text rendering of a game.

use violet_tictactoe::{Cell, GameState, Position};

/// Renders the board as a 3x3 grid.
///
/// Cells on the winning line are bracketed. Empty cells show their 1-based
/// number when `show_indices` is set and `.` otherwise.
pub fn board(game: &GameState, show_indices: bool) -> String {
    let mut rows = Vec::with_capacity(3);
    for row in Position::ALL.chunks(3) {
        let cells: Vec<String> = row
            .iter()
            .map(|&pos| {
                let symbol = match game.board().get(pos) {
                    Cell::Occupied(mark) => mark.to_string(),
                    Cell::Empty if show_indices => (pos.to_index() + 1).to_string(),
                    Cell::Empty => ".".to_string(),
                };
                if game.is_highlighted(pos) {
                    format!("[{}]", symbol)
                } else {
                    format!(" {} ", symbol)
                }
            })
            .collect();
        rows.push(cells.join("|"));
    }
    rows.join("\n---+---+---\n")
}

/// Renders the status line, prefixed with its badge.
pub fn status(game: &GameState) -> String {
    let status = game.status();
    format!("[{}] {}", status.badge(), status)
}

/// Board followed by status.
pub fn game(game: &GameState, show_indices: bool) -> String {
    format!("{}\n{}", board(game, show_indices), status(game))
}
