//! Tic-tac-toe with a rewindable move history.

mod action;
pub mod contracts;
mod history;
pub mod invariants;
mod position;
pub mod rules;
mod types;
mod view;

pub use action::{Move, MoveOutcome, Rejection};
pub use history::{GameHistory, HistoryEntry, HistoryError};
pub use position::Position;
pub use types::{Board, GameStatus, Player, Square};
pub use view::{HistoryView, Symbols};
