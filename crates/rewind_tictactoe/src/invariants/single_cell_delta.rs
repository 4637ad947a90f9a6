//! Single-cell delta invariant: each step fills exactly one empty cell.

use super::Invariant;
use crate::{Cell, GameState};

/// Invariant: `history[k]` and `history[k - 1]` differ in exactly one cell,
/// and that cell was empty in `history[k - 1]`.
pub struct SingleCellDeltaInvariant;

impl Invariant<GameState> for SingleCellDeltaInvariant {
    fn holds(state: &GameState) -> bool {
        let history = state.history();
        history.iter().zip(history.iter().skip(1)).all(|(before, after)| {
            let mut changed = before
                .cells()
                .iter()
                .zip(after.cells())
                .filter(|(b, a)| b != a);

            matches!(
                (changed.next(), changed.next()),
                (Some((Cell::Empty, _)), None)
            )
        })
    }

    fn description() -> &'static str {
        "Each step fills exactly one previously empty cell"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, Mark};

    #[test]
    fn test_played_game_holds() {
        let state = [4, 0, 8, 2, 1, 7]
            .into_iter()
            .fold(GameState::new(), |s, cell| s.apply_move(cell));
        assert_eq!(state.len(), 7);
        assert!(SingleCellDeltaInvariant::holds(&state));
    }

    #[test]
    fn test_two_cells_in_one_step_violates() {
        let mut state = GameState::new().apply_move(0);
        state.history[1] = Board::new()
            .with_mark(0, Mark::X)
            .and_then(|b| b.with_mark(1, Mark::O))
            .unwrap();
        assert!(!SingleCellDeltaInvariant::holds(&state));
    }

    #[test]
    fn test_overwritten_cell_violates() {
        let mut state = GameState::new().apply_move(0).apply_move(1);
        state.history[2] = Board::new().with_mark(0, Mark::O).unwrap();
        assert!(!SingleCellDeltaInvariant::holds(&state));
    }

    #[test]
    fn test_unchanged_step_violates() {
        let mut state = GameState::new().apply_move(0);
        let board = state.board();
        state.history.push_back(board);
        assert!(!SingleCellDeltaInvariant::holds(&state));
    }
}
