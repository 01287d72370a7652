//! Application state and key dispatch.

use crate::games::tictactoe::{GameHistory, HistoryView, Position, Symbols};
use crossterm::event::KeyCode;
use tracing::debug;

use super::input::{digit_to_position, move_cursor};

/// Which pane receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// The 3x3 board.
    Board,
    /// The list of history entries.
    History,
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    history: GameHistory,
    symbols: Symbols,
    cursor: Position,
    focus: Focus,
    selected: usize,
    should_quit: bool,
}

impl App {
    /// Creates a new application with an empty game.
    pub fn new(symbols: Symbols) -> Self {
        Self {
            history: GameHistory::new(),
            symbols,
            cursor: Position::Center,
            focus: Focus::Board,
            selected: 0,
            should_quit: false,
        }
    }

    /// The game history.
    pub fn history(&self) -> &GameHistory {
        &self.history
    }

    /// Presentation view of the history.
    pub fn view(&self) -> HistoryView<'_> {
        HistoryView::new(&self.history, &self.symbols)
    }

    /// Player symbols.
    pub fn symbols(&self) -> &Symbols {
        &self.symbols
    }

    /// Board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Focused pane.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Highlighted history entry.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Whether the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles one key press.
    pub fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => {
                debug!("Quit requested");
                self.should_quit = true;
            }
            KeyCode::Char('r') => self.restart(),
            KeyCode::Tab => self.toggle_focus(),
            _ => match self.focus {
                Focus::Board => self.handle_board_key(key),
                Focus::History => self.handle_history_key(key),
            },
        }
    }

    fn handle_board_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Enter | KeyCode::Char(' ') => self.play(self.cursor),
            KeyCode::Char(c) => {
                if let Some(position) = digit_to_position(c) {
                    self.cursor = position;
                    self.play(position);
                }
            }
            _ => self.cursor = move_cursor(self.cursor, key),
        }
    }

    fn handle_history_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Up | KeyCode::Char('k') => self.selected = self.selected.saturating_sub(1),
            KeyCode::Down | KeyCode::Char('j') => {
                self.selected = (self.selected + 1).min(self.history.len() - 1);
            }
            KeyCode::Enter => {
                // The list only offers existing entries.
                if self.history.jump_to(self.selected).is_ok() {
                    self.focus = Focus::Board;
                }
            }
            _ => {}
        }
    }

    fn play(&mut self, position: Position) {
        let outcome = self.history.apply_move(position);
        debug!(?outcome, "Board input");
        self.selected = self.history.step();
    }

    fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Board => {
                self.selected = self.history.step();
                Focus::History
            }
            Focus::History => Focus::Board,
        };
    }

    /// Restarts the game.
    pub fn restart(&mut self) {
        debug!("Restarting game");
        self.history.restart();
        self.cursor = Position::Center;
        self.focus = Focus::Board;
        self.selected = 0;
    }
}
