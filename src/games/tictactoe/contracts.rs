//! Contract-based validation for tic-tac-toe.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use super::action::Rejection;
use super::history::GameHistory;
use super::invariants::{HistoryInvariants, InvariantSet, InvariantViolation};
use super::{rules, Position};
use tracing::instrument;

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
///
/// - Precondition: {P(state, action)} - must hold before applying action
/// - Postcondition: {Q(before, after)} - must hold after applying action
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), Rejection>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), InvariantViolation>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: The board at the current step has no winner.
pub struct GameUndecided;

impl GameUndecided {
    /// Rejects any move once a line is complete.
    #[instrument(level = "trace", skip(history))]
    pub fn check(history: &GameHistory) -> Result<(), Rejection> {
        match rules::check_winner(history.current()) {
            Some(winner) => Err(Rejection::GameWon(winner)),
            None => Ok(()),
        }
    }
}

/// Precondition: The square at the move's position must be empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Rejects moves onto a marked square.
    #[instrument(level = "trace", skip(history))]
    pub fn check(position: Position, history: &GameHistory) -> Result<(), Rejection> {
        if history.current().is_empty(position) {
            Ok(())
        } else {
            Err(Rejection::SquareOccupied(position))
        }
    }
}

/// Composite precondition: the game is undecided and the square is free.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    pub fn check(position: Position, history: &GameHistory) -> Result<(), Rejection> {
        GameUndecided::check(history)?;
        SquareIsEmpty::check(position, history)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for playing a move into the history.
///
/// Preconditions:
/// - No winner at the current step
/// - Square must be empty
///
/// Postconditions:
/// - Entries up to the old step are untouched
/// - Exactly one entry follows them and the step points at it
/// - All history invariants still hold
pub struct MoveContract;

impl Contract<GameHistory, Position> for MoveContract {
    fn pre(history: &GameHistory, position: &Position) -> Result<(), Rejection> {
        LegalMove::check(*position, history)
    }

    fn post(before: &GameHistory, after: &GameHistory) -> Result<(), InvariantViolation> {
        let kept = before.step() + 1;
        if after.len() != kept + 1 || after.step() != kept {
            return Err(InvariantViolation::new(
                "Move must truncate to the current step and append one entry",
            ));
        }
        if after.entries()[..kept] != before.entries()[..kept] {
            return Err(InvariantViolation::new("Move must not rewrite earlier entries"));
        }

        HistoryInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            InvariantViolation::new(format!("Postcondition failed: {}", descriptions))
        })
    }
}
