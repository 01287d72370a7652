//! History consistency invariant: entry `i` holds exactly `i` marks.

use super::super::GameHistory;
use super::Invariant;

/// Invariant: The number of occupied squares equals the entry's index.
///
/// No moves are missing, no squares are filled without a move.
pub struct HistoryConsistentInvariant;

impl Invariant<GameHistory> for HistoryConsistentInvariant {
    fn holds(history: &GameHistory) -> bool {
        history
            .entries()
            .iter()
            .enumerate()
            .all(|(i, entry)| entry.board().occupied_count() == i)
    }

    fn description() -> &'static str {
        "Entry index matches number of occupied squares"
    }
}
