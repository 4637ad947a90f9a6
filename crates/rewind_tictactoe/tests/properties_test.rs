//! Property tests over boards and reachable states.

use proptest::prelude::*;
use rewind_tictactoe::invariants::{InvariantSet, RewindInvariants};
use rewind_tictactoe::rules::WINNING_LINES;
use rewind_tictactoe::{Board, Cell, GameState, Mark, Outcome, evaluate_outcome};

/// A user input: click a cell (possibly off-board) or jump to a step.
#[derive(Debug, Clone, Copy)]
enum Input {
    Click(usize),
    Jump(usize),
}

fn input() -> impl Strategy<Value = Input> {
    prop_oneof![
        3 => (0usize..11).prop_map(Input::Click),
        1 => (0usize..12).prop_map(Input::Jump),
    ]
}

fn run(inputs: &[Input]) -> GameState {
    inputs
        .iter()
        .fold(GameState::new(), |state, input| match *input {
            Input::Click(cell) => state.apply_move(cell),
            Input::Jump(step) => state.jump_to(step),
        })
}

fn cell() -> impl Strategy<Value = Cell> {
    prop_oneof![
        Just(Cell::Empty),
        Just(Cell::Occupied(Mark::X)),
        Just(Cell::Occupied(Mark::O)),
    ]
}

fn completed_lines(board: &Board, mark: Mark) -> usize {
    WINNING_LINES
        .iter()
        .filter(|line| {
            line.iter()
                .all(|&i| board.get(i) == Some(Cell::Occupied(mark)))
        })
        .count()
}

proptest! {
    #[test]
    fn reachable_states_satisfy_invariants(inputs in prop::collection::vec(input(), 0..40)) {
        let state = run(&inputs);
        prop_assert!(RewindInvariants::check_all(&state).is_ok());
    }

    #[test]
    fn next_to_move_follows_step_parity(inputs in prop::collection::vec(input(), 0..40)) {
        let state = run(&inputs);
        prop_assert_eq!(state.next_to_move() == Mark::X, state.current_step() % 2 == 0);
    }

    #[test]
    fn rejected_moves_are_idempotent(
        inputs in prop::collection::vec(input(), 0..40),
        cell in 0usize..11,
    ) {
        let state = run(&inputs);
        if state.try_apply_move(cell).is_err() {
            let once = state.apply_move(cell);
            let twice = once.apply_move(cell);
            prop_assert_eq!(&once, &state);
            prop_assert_eq!(&twice, &state);
        }
    }

    #[test]
    fn move_then_jump_back_restores_board(
        inputs in prop::collection::vec(input(), 0..40),
        cell in 0usize..9,
    ) {
        let state = run(&inputs);
        let moved = state.apply_move(cell);
        let at_new = moved.jump_to(moved.current_step());
        let back = at_new.jump_to(state.current_step());
        prop_assert_eq!(back.board(), state.board());
    }

    #[test]
    fn unique_winner_is_reported(cells in prop::array::uniform9(cell())) {
        let board = Board::from_cells(cells);
        let x_lines = completed_lines(&board, Mark::X);
        let o_lines = completed_lines(&board, Mark::O);

        if x_lines > 0 && o_lines == 0 {
            prop_assert_eq!(evaluate_outcome(&board), Outcome::Won(Mark::X));
        }
        if o_lines > 0 && x_lines == 0 {
            prop_assert_eq!(evaluate_outcome(&board), Outcome::Won(Mark::O));
        }
        if x_lines == 0 && o_lines == 0 {
            let expected = if board.legal_cells().is_empty() {
                Outcome::Draw
            } else {
                Outcome::InProgress
            };
            prop_assert_eq!(evaluate_outcome(&board), expected);
        }
    }
}
