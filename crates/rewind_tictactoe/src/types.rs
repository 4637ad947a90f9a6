//! Core domain types for tic-tac-toe.

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;

/// Mark placed by a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum Mark {
    /// Mark X (moves first, on even steps).
    #[display("X")]
    X,
    /// Mark O (moves second, on odd steps).
    #[display("O")]
    O,
}

impl Mark {
    /// Returns the mark due to move at `step`.
    ///
    /// X moves on even steps and O on odd steps, so step 0 (the empty
    /// board) always has X to move.
    pub fn for_step(step: usize) -> Self {
        if step % 2 == 0 { Mark::X } else { Mark::O }
    }
}

/// A cell on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    #[default]
    Empty,
    /// Cell holding a mark.
    Occupied(Mark),
}

impl Cell {
    /// Returns the mark in this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(mark) => Some(mark),
        }
    }

    /// Checks whether the cell is empty.
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

/// Immutable 3x3 board snapshot.
///
/// A board never changes once built. Placing a mark with
/// [`Board::with_mark`] produces a new board and leaves the original intact,
/// which is what lets history entries be shared freely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; CELL_COUNT],
        }
    }

    /// Builds a board from explicit cells.
    ///
    /// No legality check is made; boards built this way may be
    /// unreachable through play.
    pub fn from_cells(cells: [Cell; CELL_COUNT]) -> Self {
        Self { cells }
    }

    /// Gets the cell at the given index (0-8).
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Checks if a cell is empty. Out-of-range indices are never empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Cell::Empty))
    }

    /// Returns a copy of this board with `mark` placed at `index`.
    ///
    /// Returns `None` when the index is out of range.
    pub fn with_mark(&self, index: usize, mark: Mark) -> Option<Self> {
        let mut cells = self.cells;
        *cells.get_mut(index)? = Cell::Occupied(mark);
        Some(Self { cells })
    }

    /// Returns all cells.
    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// Indices of the empty cells, ascending.
    pub fn legal_cells(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(index, _)| index)
            .collect()
    }

    /// Number of occupied cells.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    /// Formats the board as a human-readable grid.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let symbol = match self.cells[row * 3 + col] {
                    Cell::Empty => ' ',
                    Cell::Occupied(Mark::X) => 'X',
                    Cell::Occupied(Mark::O) => 'O',
                };
                result.push(symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

/// Result of evaluating a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// No line completed and at least one empty cell.
    InProgress,
    /// A mark completed a line.
    Won(Mark),
    /// Board full with no completed line.
    Draw,
}

impl Outcome {
    /// Returns the winning mark, if any.
    pub fn winner(self) -> Option<Mark> {
        match self {
            Outcome::Won(mark) => Some(mark),
            Outcome::InProgress | Outcome::Draw => None,
        }
    }

    /// Checks whether further moves are refused.
    pub fn is_terminal(self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mark_for_step_parity() {
        assert_eq!(Mark::for_step(0), Mark::X);
        assert_eq!(Mark::for_step(1), Mark::O);
        assert_eq!(Mark::for_step(8), Mark::X);
    }

    #[test]
    fn test_mark_for_step_alternates_every_step() {
        for step in 0..CELL_COUNT {
            assert_ne!(Mark::for_step(step), Mark::for_step(step + 1));
        }
    }

    #[test]
    fn test_with_mark_leaves_original_untouched() {
        let board = Board::new();
        let next = board.with_mark(4, Mark::X).unwrap();

        assert!(board.is_empty(4));
        assert_eq!(next.get(4), Some(Cell::Occupied(Mark::X)));
        assert_eq!(next.occupied_count(), 1);
    }

    #[test]
    fn test_with_mark_out_of_range() {
        assert_eq!(Board::new().with_mark(9, Mark::O), None);
        assert!(!Board::new().is_empty(9));
    }

    #[test]
    fn test_legal_cells() {
        let board = Board::new()
            .with_mark(0, Mark::X)
            .and_then(|b| b.with_mark(8, Mark::O))
            .unwrap();
        assert_eq!(board.legal_cells(), vec![1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_display_grid() {
        let board = Board::new()
            .with_mark(0, Mark::X)
            .and_then(|b| b.with_mark(4, Mark::O))
            .unwrap();
        assert_eq!(board.display(), "X| | \n-+-+-\n |O| \n-+-+-\n | | ");
    }

    #[test]
    fn test_outcome_terminality() {
        assert!(!Outcome::InProgress.is_terminal());
        assert!(Outcome::Draw.is_terminal());
        assert_eq!(Outcome::Won(Mark::O).winner(), Some(Mark::O));
        assert_eq!(Outcome::Draw.winner(), None);
        assert_eq!(Outcome::InProgress.winner(), None);
    }
}
