//! Rewind - tic-tac-toe with full move history and time travel.
//!
//! The game logic lives in [`rewind_tictactoe`]. This crate is the
//! presentation side: it turns clicks and jump requests into engine calls
//! and projects the engine state into labels, a status line and jump
//! targets.
//!
//! # Architecture
//!
//! - **Adapter**: [`GameController`] and its view projections
//! - **Script**: text form of clicks and jumps for headless replays
//! - **Config**: TOML configuration for the binary
//! - **TUI**: ratatui front end over the adapter
//!
//! # Example
//!
//! ```
//! use rewind_games::GameController;
//!
//! let mut controller = GameController::new();
//! assert!(controller.click(4));
//! assert!(!controller.click(4));
//! assert_eq!(controller.status(), "Next player: O");
//!
//! assert!(controller.jump(0));
//! assert_eq!(controller.jump_targets().len(), 2);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod adapter;
mod config;
mod script;
mod tui;

// Crate-level exports - Presentation adapter
pub use adapter::{GameController, GameView, JumpTarget, cell_label, jump_label, status_line};

// Crate-level exports - Move scripts
pub use script::{Action, ScriptError, ScriptReport, apply_script, parse_script};

// Crate-level exports - Configuration
pub use config::{ConfigError, RewindConfig};

// Crate-level exports - Terminal UI
pub use tui::{App, Focus, run_tui};

// Crate-level exports - Game types
pub use rewind_tictactoe::{
    Board, Cell, GameState, Mark, Outcome, Position, Rejection, evaluate_outcome,
};
