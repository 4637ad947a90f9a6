//! Game rules for tic-tac-toe.
//!
//! Pure functions of a single board. Nothing here looks at history or at
//! whose turn it is, so a board's outcome is the same no matter how it was
//! reached or revisited.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{WINNING_LINES, check_winner};

use crate::{Board, Outcome};
use tracing::instrument;

/// Evaluates a board: a completed line wins, a full board draws,
/// anything else is still in progress.
///
/// The board must be reachable through alternating play. For boards with
/// completed lines for both marks the result is unspecified.
#[instrument]
pub fn evaluate_outcome(board: &Board) -> Outcome {
    if let Some(mark) = check_winner(board) {
        Outcome::Won(mark)
    } else if is_full(board) {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}
