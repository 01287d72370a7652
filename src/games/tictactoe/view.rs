//! Presentation model for a [`GameHistory`].
//!
//! Everything a front end shows is derived here from the history: the
//! status line, one label per history entry, and the board as text.

use super::{GameHistory, GameStatus, Player};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// The marks shown for each player.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Symbols {
    /// Symbol for X, the first mover.
    #[serde(default = "default_x")]
    x: String,
    /// Symbol for O.
    #[serde(default = "default_o")]
    o: String,
}

fn default_x() -> String {
    "X".to_string()
}

fn default_o() -> String {
    "O".to_string()
}

impl Symbols {
    /// Symbol for `player`.
    pub fn of(&self, player: Player) -> &str {
        match player {
            Player::X => &self.x,
            Player::O => &self.o,
        }
    }
}

impl Default for Symbols {
    fn default() -> Self {
        Self {
            x: default_x(),
            o: default_o(),
        }
    }
}

/// Read-only view of a history for display.
#[derive(Debug, Clone, Copy)]
pub struct HistoryView<'a> {
    history: &'a GameHistory,
    symbols: &'a Symbols,
}

impl<'a> HistoryView<'a> {
    /// Creates a view.
    pub fn new(history: &'a GameHistory, symbols: &'a Symbols) -> Self {
        Self { history, symbols }
    }

    /// Label of the history control for `step`.
    pub fn step_label(step: usize) -> String {
        if step == 0 {
            "Go to game start".to_string()
        } else {
            format!("Go to move #{}", step)
        }
    }

    /// One label per history entry, in order.
    pub fn step_labels(&self) -> Vec<String> {
        (0..self.history.len()).map(Self::step_label).collect()
    }

    /// Status line for the current step.
    pub fn status_line(&self) -> String {
        match self.history.status() {
            GameStatus::Won(winner) => format!("Winner: {}", self.symbols.of(winner)),
            GameStatus::Draw => "Draw".to_string(),
            GameStatus::InProgress => {
                format!("Next player: {}", self.symbols.of(self.history.next_player()))
            }
        }
    }

    /// Current board as a text grid.
    pub fn board_text(&self) -> String {
        self.history
            .current()
            .display_with(|player| self.symbols.of(player).to_string())
    }

    /// Board, status and history list as one block of text.
    ///
    /// The entry at the current step is marked with `>`.
    pub fn render(&self) -> String {
        let mut out = format!("{}\n\n{}\n", self.board_text(), self.status_line());
        for (step, label) in self.step_labels().iter().enumerate() {
            let marker = if step == self.history.step() { '>' } else { ' ' };
            out.push_str(&format!("{} {}. {}\n", marker, step, label));
        }
        out
    }
}
