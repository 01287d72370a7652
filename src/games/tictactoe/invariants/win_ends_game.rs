//! Win-ends-game invariant: nothing is played after a completed line.

use super::super::{rules, GameHistory};
use super::Invariant;

/// Invariant: Only the last entry may hold a winning line.
pub struct WinEndsGameInvariant;

impl Invariant<GameHistory> for WinEndsGameInvariant {
    fn holds(history: &GameHistory) -> bool {
        let entries = history.entries();
        entries[..entries.len().saturating_sub(1)]
            .iter()
            .all(|entry| rules::check_winner(entry.board()).is_none())
    }

    fn description() -> &'static str {
        "No move follows a winning board"
    }
}
