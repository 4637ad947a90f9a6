//! Pure tic-tac-toe game logic with a rewindable move history.
//!
//! # Architecture
//!
//! - **Types**: marks, cells, immutable board snapshots and outcomes
//! - **Rules**: win/draw evaluation as pure functions of a board
//! - **State**: the history ledger, move application and time travel
//! - **Invariants**: properties every reachable state satisfies
//!
//! Illegal input is never an error here. A move onto an occupied cell, a
//! move after the game is decided, or a jump past the recorded history all
//! leave the state unchanged.
//!
//! # Example
//!
//! ```
//! use rewind_tictactoe::{GameState, Mark, Outcome};
//!
//! let state = GameState::new().apply_move(4).apply_move(0);
//! assert_eq!(state.next_to_move(), Mark::X);
//!
//! let rewound = state.jump_to(0);
//! assert_eq!(rewound.outcome(), Outcome::InProgress);
//! assert_eq!(rewound.len(), 3);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod invariants;
mod position;
pub mod rules;
mod state;
mod types;

pub use position::Position;
pub use rules::evaluate_outcome;
pub use state::{GameState, Rejection, apply_move, jump_to};
pub use types::{Board, CELL_COUNT, Cell, Mark, Outcome};
