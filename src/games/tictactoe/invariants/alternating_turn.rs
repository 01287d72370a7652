//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::super::{GameHistory, Player};
use super::Invariant;

/// Invariant: Players alternate turns.
///
/// Entry `i` (for `i > 0`) was produced by [`Player::to_move_at`]`(i - 1)`,
/// so the first move is always X's.
pub struct AlternatingTurnInvariant;

impl Invariant<GameHistory> for AlternatingTurnInvariant {
    fn holds(history: &GameHistory) -> bool {
        history
            .entries()
            .iter()
            .enumerate()
            .skip(1)
            .all(|(i, entry)| {
                entry.last_move().map(|m| m.player) == Some(Player::to_move_at(i - 1))
            })
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
