//! Strictly Rewind - tic-tac-toe with move history and time travel.
//!
//! # Architecture
//!
//! - **Rules**: pure win and draw detection over a single board
//! - **History**: every board reached so far plus the step being viewed;
//!   moves from an earlier step discard the later entries
//! - **View**: status line and history labels derived from the history
//! - **Replay**: applies a move list and renders the result as text or JSON
//! - **TUI**: terminal front end driving the history
//!
//! # Example
//!
//! ```
//! use strictly_rewind::{GameHistory, Player, Position};
//!
//! let mut history = GameHistory::new();
//! history.apply_move(Position::Center);
//! history.apply_move(Position::TopLeft);
//! assert_eq!(history.next_player(), Player::X);
//!
//! // Rewind to the start: X is to move again.
//! history.jump_to(0).unwrap();
//! assert_eq!(history.next_player(), Player::X);
//! assert_eq!(history.len(), 3);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod games;
mod replay;
mod tui;

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig};

// Crate-level exports - Replay
pub use replay::{render_replay, replay_moves, MoveToken, ReplayFormat, UnknownMove};

// Crate-level exports - Terminal UI
pub use tui::run_tui;

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    contracts, invariants, rules, Board, GameHistory, GameStatus, HistoryEntry, HistoryError,
    HistoryView, Move, MoveOutcome, Player, Position, Rejection, Square, Symbols,
};
