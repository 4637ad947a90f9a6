//! Presentation adapter between user input and the game engine.
//!
//! The controller owns the current [`GameState`] and turns clicks and jump
//! requests into engine calls. Everything it shows (cell labels, the status
//! line, jump targets) is projected from that state on demand.

use derive_getters::Getters;
use derive_new::new;
use rewind_tictactoe::{Cell, GameState, Mark, Outcome, Rejection};
use serde::Serialize;
use tracing::{debug, info, instrument};

/// A history entry the user can jump to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters, new)]
pub struct JumpTarget {
    /// Step this target jumps to.
    step: usize,
    /// Button label.
    label: String,
    /// Whether this is the step currently shown.
    current: bool,
}

/// Everything a front end needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct GameView {
    /// Labels for cells 0-8, row-major.
    cells: [&'static str; 9],
    /// Status line.
    status: String,
    /// One target per recorded step.
    jump_targets: Vec<JumpTarget>,
}

/// Drives a [`GameState`] from presentation events.
#[derive(Debug, Clone, Default)]
pub struct GameController {
    state: GameState,
}

impl GameController {
    /// Creates a controller for a fresh game.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a controller over an existing state, such as one built by
    /// replaying a script.
    pub fn with_state(state: GameState) -> Self {
        Self { state }
    }

    /// Returns the current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Handles a click on `cell`.
    ///
    /// Returns `true` if the move was accepted. Rejected clicks leave the
    /// state as it was.
    #[instrument(skip(self), fields(step = self.state.current_step()))]
    pub fn click(&mut self, cell: usize) -> bool {
        self.settle(self.state.try_apply_move(cell))
    }

    /// Handles a request to jump to `step`.
    ///
    /// Returns `true` if the jump was accepted.
    #[instrument(skip(self), fields(step = self.state.current_step()))]
    pub fn jump(&mut self, target: usize) -> bool {
        self.settle(self.state.try_jump_to(target))
    }

    /// Starts over with a fresh game, dropping all history.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        info!(len = self.state.len(), "Restarting game");
        self.state = GameState::new();
    }

    fn settle(&mut self, result: Result<GameState, Rejection>) -> bool {
        match result {
            Ok(state) => {
                info!(
                    step = state.current_step(),
                    len = state.len(),
                    "State updated"
                );
                self.state = state;
                true
            }
            Err(rejection) => {
                debug!(%rejection, "Input absorbed");
                false
            }
        }
    }

    /// Labels for the nine cells of the board being viewed.
    pub fn cell_labels(&self) -> [&'static str; 9] {
        let cells = *self.state.board().cells();
        cells.map(cell_label)
    }

    /// One jump target per recorded step.
    pub fn jump_targets(&self) -> Vec<JumpTarget> {
        let current = self.state.current_step();
        self.state
            .steps()
            .map(|step| JumpTarget::new(step, jump_label(step), step == current))
            .collect()
    }

    /// Status line for the board being viewed.
    pub fn status(&self) -> String {
        status_line(self.state.outcome(), self.state.next_to_move())
    }

    /// Plain-text rendering of the board, status line and jump targets.
    ///
    /// The current jump target is marked with `*`.
    pub fn text_summary(&self) -> String {
        let mut out = self.state.board().display();
        out.push_str("\n\n");
        out.push_str(&self.status());
        out.push('\n');
        for target in self.jump_targets() {
            let marker = if *target.current() { '*' } else { ' ' };
            out.push_str(&format!("\n{} {}", marker, target.label()));
        }
        out
    }

    /// Projects the current state into a [`GameView`].
    pub fn view(&self) -> GameView {
        GameView {
            cells: self.cell_labels(),
            status: self.status(),
            jump_targets: self.jump_targets(),
        }
    }
}

/// Renderable label for a cell: blank, `"X"` or `"O"`.
pub fn cell_label(cell: Cell) -> &'static str {
    match cell {
        Cell::Empty => "",
        Cell::Occupied(Mark::X) => "X",
        Cell::Occupied(Mark::O) => "O",
    }
}

/// Label for the jump target at `step`.
pub fn jump_label(step: usize) -> String {
    if step == 0 {
        "Go to game start".to_string()
    } else {
        format!("Go to move #{}", step)
    }
}

/// Status line for an outcome with `next` to move.
pub fn status_line(outcome: Outcome, next: Mark) -> String {
    if let Some(mark) = outcome.winner() {
        format!("Winner: {}", mark)
    } else if outcome == Outcome::Draw {
        "Draw!!".to_string()
    } else {
        format!("Next player: {}", next)
    }
}
