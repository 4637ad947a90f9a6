//! Rewindable game state.
//!
//! A [`GameState`] is the whole session: every board produced so far plus
//! the step currently being viewed. Operations never mutate a state; they
//! return a new one that shares unchanged history with the old.

use crate::rules::evaluate_outcome;
use crate::types::{Board, Cell, Mark, Outcome};
use derive_more::Display;
use im::Vector;
use serde::Serialize;
use std::ops::Range;
use tracing::{debug, instrument};

/// Why a move or jump was absorbed without changing the state.
///
/// These are routine outcomes of user input, not failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Rejection {
    /// The board at the current step is already decided.
    #[display("Game is already over")]
    GameOver,

    /// The target cell already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(usize),

    /// The target cell is not on the board.
    #[display("Cell {} is out of range (must be 0-8)", _0)]
    OutOfRange(usize),

    /// The jump target is not a recorded step.
    #[display("Step {} is out of range (history has {} steps)", step, len)]
    StepOutOfRange {
        /// Requested step.
        step: usize,
        /// History length at the time of the request.
        len: usize,
    },
}

/// Complete game state: history ledger plus the step being viewed.
///
/// `current_step` always indexes into `history`, and `history[0]` is the
/// empty board. The mark to move and the outcome are derived from
/// `current_step` and the board there, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameState {
    pub(crate) history: Vector<Board>,
    pub(crate) current_step: usize,
}

impl GameState {
    /// Creates a new game: one empty board, step 0, X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: Vector::unit(Board::new()),
            current_step: 0,
        }
    }

    /// Board at the current step.
    pub fn board(&self) -> Board {
        self.history[self.current_step]
    }

    /// Mark due to move at the current step.
    pub fn next_to_move(&self) -> Mark {
        Mark::for_step(self.current_step)
    }

    /// Outcome of the board at the current step, computed fresh.
    pub fn outcome(&self) -> Outcome {
        evaluate_outcome(&self.board())
    }

    /// Index of the step being viewed.
    pub fn current_step(&self) -> usize {
        self.current_step
    }

    /// All recorded boards, including any future beyond the current step.
    pub fn history(&self) -> &Vector<Board> {
        &self.history
    }

    /// Number of recorded boards.
    pub fn len(&self) -> usize {
        self.history.len()
    }

    /// Always false: history holds at least the empty board.
    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// Valid jump targets.
    pub fn steps(&self) -> Range<usize> {
        0..self.history.len()
    }

    /// Checks whether the current step is the last recorded one.
    pub fn is_at_latest(&self) -> bool {
        self.current_step + 1 == self.history.len()
    }

    /// Cell index that was played to reach `step`.
    ///
    /// `None` for step 0 and for steps outside the history.
    pub fn move_at(&self, step: usize) -> Option<usize> {
        let before = self.history.get(step.checked_sub(1)?)?;
        let after = self.history.get(step)?;
        before
            .cells()
            .iter()
            .zip(after.cells())
            .position(|(b, a)| b != a)
    }

    /// Places the next mark at `cell`, reporting why a move was refused.
    ///
    /// On success the history is truncated to `current_step + 1` boards
    /// before the new board is appended, so any future left behind by an
    /// earlier jump is discarded.
    #[instrument(skip(self), fields(step = self.current_step, len = self.history.len()))]
    pub fn try_apply_move(&self, cell: usize) -> Result<GameState, Rejection> {
        if self.outcome().is_terminal() {
            return Err(Rejection::GameOver);
        }

        let board = self.board();
        match board.get(cell) {
            None => return Err(Rejection::OutOfRange(cell)),
            Some(Cell::Occupied(_)) => return Err(Rejection::CellOccupied(cell)),
            Some(Cell::Empty) => {}
        }

        let mark = self.next_to_move();
        let next = board
            .with_mark(cell, mark)
            .ok_or(Rejection::OutOfRange(cell))?;

        let mut history = self.history.clone();
        history.truncate(self.current_step + 1);
        history.push_back(next);
        let current_step = history.len() - 1;

        debug!(%mark, cell, current_step, "Move applied");
        Ok(Self {
            history,
            current_step,
        })
    }

    /// Places the next mark at `cell`.
    ///
    /// Illegal moves are no-ops: the returned state equals `self`.
    pub fn apply_move(&self, cell: usize) -> GameState {
        self.try_apply_move(cell).unwrap_or_else(|_| self.clone())
    }

    /// Moves the view to `step` without touching history.
    #[instrument(skip(self), fields(len = self.history.len()))]
    pub fn try_jump_to(&self, step: usize) -> Result<GameState, Rejection> {
        if step >= self.history.len() {
            return Err(Rejection::StepOutOfRange {
                step,
                len: self.history.len(),
            });
        }

        Ok(Self {
            history: self.history.clone(),
            current_step: step,
        })
    }

    /// Moves the view to `step`. Out-of-range steps are no-ops.
    pub fn jump_to(&self, step: usize) -> GameState {
        self.try_jump_to(step).unwrap_or_else(|_| self.clone())
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// Places the next mark at `cell`; illegal moves return `state` unchanged.
pub fn apply_move(state: &GameState, cell: usize) -> GameState {
    state.apply_move(cell)
}

/// Moves the view to `step`; out-of-range steps return `state` unchanged.
pub fn jump_to(state: &GameState, step: usize) -> GameState {
    state.jump_to(step)
}
