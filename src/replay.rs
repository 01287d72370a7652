//! Non-interactive replay of a move list.
//!
//! Backs the `replay` subcommand: moves are applied in order, illegal ones
//! are skipped, and the result is rendered as text or JSON.

use crate::games::tictactoe::{GameHistory, HistoryError, HistoryView, Position, Symbols};
use derive_more::{Display, Error};
use std::str::FromStr;
use tracing::{debug, instrument};

/// One move as written on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveToken {
    /// A square named by index (0-8) or label ("top-left").
    Square(Position),
    /// A number that names no square. Replaying it is a no-op.
    Index(usize),
}

/// A move token that is neither a number nor a square label.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Unknown move '{}' (expected 0-8 or a label like top-left)", input)]
pub struct UnknownMove {
    input: String,
}

impl FromStr for MoveToken {
    type Err = UnknownMove;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(position) = Position::from_label_or_number(s) {
            return Ok(MoveToken::Square(position));
        }
        s.trim()
            .parse::<usize>()
            .map(MoveToken::Index)
            .map_err(|_| UnknownMove {
                input: s.to_string(),
            })
    }
}

/// How a replayed history is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReplayFormat {
    /// Board, status line and history labels.
    #[default]
    Text,
    /// The whole history as pretty-printed JSON.
    Json,
}

/// Applies `moves` to a fresh history, then jumps to `jump` if given.
///
/// # Errors
///
/// Returns [`HistoryError::StepOutOfRange`] if `jump` names no entry.
#[instrument(skip(moves), fields(moves = moves.len()))]
pub fn replay_moves(
    moves: &[MoveToken],
    jump: Option<usize>,
) -> Result<GameHistory, HistoryError> {
    let mut history = GameHistory::new();
    for token in moves {
        let outcome = match *token {
            MoveToken::Square(position) => history.apply_move(position),
            MoveToken::Index(index) => history.apply_index(index),
        };
        debug!(?token, ?outcome, "Replayed move");
    }

    if let Some(step) = jump {
        history.jump_to(step)?;
    }
    Ok(history)
}

/// Renders a replayed history in the requested format.
///
/// # Errors
///
/// Fails only if JSON serialization fails.
pub fn render_replay(
    history: &GameHistory,
    symbols: &Symbols,
    format: ReplayFormat,
) -> Result<String, serde_json::Error> {
    match format {
        ReplayFormat::Text => Ok(HistoryView::new(history, symbols).render()),
        ReplayFormat::Json => serde_json::to_string_pretty(history),
    }
}
