//! Step bounds invariant: the viewed step is always a recorded one.

use super::Invariant;
use crate::{Board, GameState};

/// Invariant: `current_step` indexes into a non-empty history that starts
/// with the empty board.
pub struct StepInBoundsInvariant;

impl Invariant<GameState> for StepInBoundsInvariant {
    fn holds(state: &GameState) -> bool {
        let history = state.history();
        history.front() == Some(&Board::new()) && state.current_step() < history.len()
    }

    fn description() -> &'static str {
        "Current step indexes a history that starts with the empty board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Mark;

    #[test]
    fn test_new_game_holds() {
        assert!(StepInBoundsInvariant::holds(&GameState::new()));
    }

    #[test]
    fn test_rejected_jump_holds() {
        let state = GameState::new().apply_move(0).jump_to(7);
        assert!(StepInBoundsInvariant::holds(&state));
        assert_eq!(state.current_step(), 1);
    }

    #[test]
    fn test_step_past_end_violates() {
        let mut state = GameState::new().apply_move(0);
        state.current_step = 2;
        assert!(!StepInBoundsInvariant::holds(&state));
    }

    #[test]
    fn test_non_empty_start_violates() {
        let mut state = GameState::new();
        state.history[0] = Board::new().with_mark(4, Mark::X).unwrap();
        assert!(!StepInBoundsInvariant::holds(&state));
    }
}
