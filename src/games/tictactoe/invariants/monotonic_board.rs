//! Monotonic board invariant: each entry adds exactly one mark.

use super::super::GameHistory;
use super::Invariant;

/// Invariant: Every entry is its predecessor plus the recorded move.
///
/// The move's square must be empty on the previous board, and placing the
/// move there must reproduce the entry's board exactly. Marks are never
/// removed or overwritten along the line of play.
pub struct MonotonicBoardInvariant;

impl Invariant<GameHistory> for MonotonicBoardInvariant {
    fn holds(history: &GameHistory) -> bool {
        history.entries().windows(2).all(|pair| {
            let (prev, next) = (&pair[0], &pair[1]);
            match next.last_move() {
                Some(mov) => {
                    prev.board().is_empty(mov.position)
                        && prev.board().with_mark(mov.position, mov.player) == *next.board()
                }
                None => false,
            }
        })
    }

    fn description() -> &'static str {
        "Each entry adds exactly one mark to its predecessor"
    }
}
