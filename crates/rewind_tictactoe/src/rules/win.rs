//! Win detection logic for tic-tac-toe.

use crate::{Board, Cell, Mark};
use tracing::instrument;

/// The eight winning lines, scanned in this order.
///
/// Rows top to bottom, then columns left to right, then the two diagonals.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Checks if there is a winner on the board.
///
/// Returns the mark of the first completed line in [`WINNING_LINES`] order,
/// `None` otherwise. A board with completed lines for both marks cannot be
/// reached through play; which mark is reported for such a board is not
/// part of the contract.
#[instrument(level = "trace")]
pub fn check_winner(board: &Board) -> Option<Mark> {
    let cells = board.cells();
    for [a, b, c] in WINNING_LINES {
        let cell = cells[a];
        if let Cell::Occupied(mark) = cell
            && cell == cells[b]
            && cell == cells[c]
        {
            return Some(mark);
        }
    }

    None
}
