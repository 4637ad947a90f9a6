//! Alternating mark invariant: X and O alternate, X first.

use super::Invariant;
use crate::{Cell, GameState, Mark};

/// Invariant: the board at step `k` holds `(k + 1) / 2` X marks and
/// `k / 2` O marks.
///
/// Together with [`SingleCellDeltaInvariant`](super::SingleCellDeltaInvariant)
/// this means step `k` was played by `Mark::for_step(k - 1)`, and that
/// the derived `next_to_move` agrees with the board being viewed.
pub struct AlternatingMarkInvariant;

impl Invariant<GameState> for AlternatingMarkInvariant {
    fn holds(state: &GameState) -> bool {
        state.history().iter().enumerate().all(|(step, board)| {
            let count = |mark: Mark| {
                board
                    .cells()
                    .iter()
                    .filter(|cell| **cell == Cell::Occupied(mark))
                    .count()
            };
            count(Mark::X) == step.div_ceil(2) && count(Mark::O) == step / 2
        })
    }

    fn description() -> &'static str {
        "Marks alternate X, O, X, ... starting with X"
    }
}
