//! Application state and key handling.

use crossterm::event::KeyCode;
use derive_getters::Getters;
use rewind_tictactoe::Position;
use tracing::{debug, instrument};

use super::input::{digit_cell, move_cursor};
use crate::adapter::GameController;

/// Pane that receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Arrow keys move the board cursor.
    #[default]
    Board,
    /// Arrow keys move through the jump targets.
    History,
}

impl Focus {
    fn toggle(self) -> Self {
        match self {
            Focus::Board => Focus::History,
            Focus::History => Focus::Board,
        }
    }
}

/// Main application state.
///
/// Game logic lives in the [`GameController`]; the app only adds what the
/// terminal needs on top: a cursor, a focused pane and a selected jump
/// target.
#[derive(Debug, Getters)]
pub struct App {
    controller: GameController,
    cursor: Position,
    focus: Focus,
    selected: usize,
    cell_hints: bool,
    notice: Option<String>,
    should_quit: bool,
}

impl App {
    /// Creates a new application with a fresh game.
    pub fn new(cell_hints: bool) -> Self {
        Self {
            controller: GameController::new(),
            cursor: Position::Center,
            focus: Focus::Board,
            selected: 0,
            cell_hints,
            notice: None,
            should_quit: false,
        }
    }

    /// Handles a key press.
    #[instrument(skip(self), fields(focus = ?self.focus))]
    pub fn handle_key(&mut self, key: KeyCode) {
        self.notice = None;

        match key {
            KeyCode::Char('q') | KeyCode::Esc => {
                debug!("Quit requested");
                self.should_quit = true;
            }
            KeyCode::Tab => {
                self.focus = self.focus.toggle();
                self.selected = self.controller.state().current_step();
            }
            KeyCode::Char('r') => {
                self.controller.restart();
                self.selected = 0;
            }
            _ => match self.focus {
                Focus::Board => self.handle_board_key(key),
                Focus::History => self.handle_history_key(key),
            },
        }
    }

    fn handle_board_key(&mut self, key: KeyCode) {
        if let Some(pos) = digit_cell(key) {
            self.cursor = pos;
            self.place();
            return;
        }

        match key {
            KeyCode::Enter | KeyCode::Char(' ') => self.place(),
            _ => self.cursor = move_cursor(self.cursor, key),
        }
    }

    fn handle_history_key(&mut self, key: KeyCode) {
        let last = self.controller.state().len() - 1;
        match key {
            KeyCode::Up => self.selected = self.selected.saturating_sub(1),
            KeyCode::Down => self.selected = (self.selected + 1).min(last),
            KeyCode::Home => self.selected = 0,
            KeyCode::End => self.selected = last,
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.controller.jump(self.selected);
            }
            _ => {}
        }
    }

    fn place(&mut self) {
        if self.controller.click(self.cursor.to_index()) {
            self.selected = self.controller.state().current_step();
        } else {
            self.notice = Some(format!("{} is not playable", self.cursor.label()));
        }
    }
}
