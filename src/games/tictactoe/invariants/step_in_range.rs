//! Step-in-range invariant: the history is never empty and the step indexes it.

use super::super::{Board, GameHistory};
use super::Invariant;

/// Invariant: The history starts from the empty board and `step < len`.
pub struct StepInRangeInvariant;

impl Invariant<GameHistory> for StepInRangeInvariant {
    fn holds(history: &GameHistory) -> bool {
        let Some(first) = history.entries().first() else {
            return false;
        };
        *first.board() == Board::new()
            && first.last_move().is_none()
            && history.step() < history.len()
    }

    fn description() -> &'static str {
        "History starts from the empty board and the step indexes an entry"
    }
}
