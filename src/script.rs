//! Move scripts: a compact text form of clicks and jumps.
//!
//! Tokens are separated by commas or whitespace. A number (0-8) or a
//! position label such as `center` is a click; `@N` or `jN` jumps to
//! step N.
//!
//! ```
//! use rewind_games::{Action, parse_script};
//!
//! let actions = parse_script("4, 0 @1 top-left").unwrap();
//! assert_eq!(
//!     actions,
//!     vec![Action::Click(4), Action::Click(0), Action::Jump(1), Action::Click(0)]
//! );
//! ```

use std::str::FromStr;

use derive_getters::Getters;
use derive_more::{Display, Error};
use rewind_tictactoe::Position;
use tracing::{debug, instrument};

use crate::adapter::GameController;

/// A single presentation input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Action {
    /// Click on a cell.
    #[display("{}", _0)]
    Click(usize),
    /// Jump to a recorded step.
    #[display("@{}", _0)]
    Jump(usize),
}

impl FromStr for Action {
    type Err = ScriptError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let token = token.trim();

        if let Some(step) = token
            .strip_prefix('@')
            .or_else(|| token.strip_prefix('j'))
        {
            return step
                .parse::<usize>()
                .map(Action::Jump)
                .map_err(|_| ScriptError::new(token, "jump target must be a step number"));
        }

        // Clicks are not range-checked here: an off-board click is a legal
        // input that the engine absorbs.
        if let Ok(cell) = token.parse::<usize>() {
            return Ok(Action::Click(cell));
        }

        Position::from_label_or_number(token)
            .map(|pos| Action::Click(pos.to_index()))
            .ok_or_else(|| ScriptError::new(token, "expected a cell, a position label or @step"))
    }
}

/// Script parse error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Script error: {} in token '{}' at {}:{}", message, token, file, line)]
pub struct ScriptError {
    /// Offending token.
    pub token: String,
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ScriptError {
    /// Creates a new script error with caller location tracking.
    #[track_caller]
    pub fn new(token: impl Into<String>, message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            token: token.into(),
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Parses a whole script into actions.
#[instrument]
pub fn parse_script(script: &str) -> Result<Vec<Action>, ScriptError> {
    script
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(str::parse::<Action>)
        .collect()
}

/// Tally of a script run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters)]
pub struct ScriptReport {
    /// Actions that changed the state.
    accepted: usize,
    /// Actions the engine absorbed as no-ops.
    absorbed: usize,
}

/// Feeds `actions` through `controller` in order.
#[instrument(skip(controller, actions), fields(count = actions.len()))]
pub fn apply_script(controller: &mut GameController, actions: &[Action]) -> ScriptReport {
    let mut report = ScriptReport::default();
    for action in actions {
        let accepted = match *action {
            Action::Click(cell) => controller.click(cell),
            Action::Jump(step) => controller.jump(step),
        };
        if accepted {
            report.accepted += 1;
        } else {
            debug!(%action, "Script action absorbed");
            report.absorbed += 1;
        }
    }
    report
}
