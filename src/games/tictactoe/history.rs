//! Linear game history with time travel.
//!
//! [`GameHistory`] owns every board reached on the current line of play and
//! a cursor (the *step*) selecting the board being viewed. The player to
//! move is never stored; it follows from the parity of the step, so jumping
//! backwards restores the right turn for free. Playing a move from an
//! earlier step discards every later entry before appending.

use super::action::{Move, MoveOutcome, Rejection};
use super::contracts::{Contract, MoveContract};
use super::{rules, Board, GameStatus, Player, Position};
use serde::Serialize;
use tracing::{debug, instrument};

/// One board in the history, with the move that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HistoryEntry {
    board: Board,
    last_move: Option<Move>,
}

impl HistoryEntry {
    fn start() -> Self {
        Self {
            board: Board::new(),
            last_move: None,
        }
    }

    pub(super) fn after(board: Board, player: Player, position: Position) -> Self {
        Self {
            board,
            last_move: Some(Move::new(player, position)),
        }
    }

    /// The board snapshot.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The move that produced this entry; `None` for the game start.
    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }
}

/// Error raised by history navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum HistoryError {
    /// The requested step does not exist.
    #[display("Step {} is out of range (history has {} entries)", step, len)]
    StepOutOfRange {
        /// Requested step.
        step: usize,
        /// Number of entries in the history.
        len: usize,
    },
}

/// Append-only sequence of boards plus the step currently viewed.
///
/// Invariants:
/// - never empty; entry 0 is the empty board
/// - `step < len`
/// - entry `i` differs from entry `i - 1` by exactly one mark, placed by
///   [`Player::to_move_at`]`(i - 1)`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameHistory {
    pub(super) entries: Vec<HistoryEntry>,
    pub(super) step: usize,
}

impl GameHistory {
    /// Creates a history holding only the empty starting board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            entries: vec![HistoryEntry::start()],
            step: 0,
        }
    }

    /// Builds a history by applying `positions` in order.
    ///
    /// Illegal moves are skipped exactly as [`GameHistory::apply_move`]
    /// would skip them.
    #[instrument(skip_all)]
    pub fn replay<I>(positions: I) -> Self
    where
        I: IntoIterator<Item = Position>,
    {
        let mut history = Self::new();
        for position in positions {
            history.apply_move(position);
        }
        history
    }

    /// Plays the next move at `position` from the current step.
    ///
    /// If the current board already has a winner or the square is taken,
    /// nothing changes and the rejection is reported. Otherwise every entry
    /// past the current step is dropped, the new board is appended and the
    /// step advances to it.
    #[instrument(skip(self), fields(step = self.step, len = self.entries.len()))]
    pub fn apply_move(&mut self, position: Position) -> MoveOutcome {
        if let Err(rejection) = MoveContract::pre(&*self, &position) {
            return MoveOutcome::Ignored(rejection);
        }

        #[cfg(debug_assertions)]
        let before = self.clone();

        let action = Move::new(self.next_player(), position);
        let board = self.current().with_mark(position, action.player);

        self.entries.truncate(self.step + 1);
        self.entries
            .push(HistoryEntry::after(board, action.player, action.position));
        self.step = self.entries.len() - 1;

        debug!(%action, step = self.step, "Move applied");

        #[cfg(debug_assertions)]
        {
            let post = MoveContract::post(&before, &*self);
            debug_assert!(post.is_ok(), "{post:?}");
        }

        MoveOutcome::Applied(action)
    }

    /// Plays the next move at a raw board index (0-8).
    ///
    /// Indices off the board are ignored like any other illegal move.
    pub fn apply_index(&mut self, index: usize) -> MoveOutcome {
        match Position::from_index(index) {
            Some(position) => self.apply_move(position),
            None => MoveOutcome::Ignored(Rejection::OffBoard(index)),
        }
    }

    /// Moves the cursor to `step` without touching the entries.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::StepOutOfRange`] if no such entry exists;
    /// the history is left unchanged.
    #[instrument(skip(self), fields(from = self.step))]
    pub fn jump_to(&mut self, step: usize) -> Result<(), HistoryError> {
        if step >= self.entries.len() {
            return Err(HistoryError::StepOutOfRange {
                step,
                len: self.entries.len(),
            });
        }
        self.step = step;
        debug!(step, next = %self.next_player(), "Jumped");
        Ok(())
    }

    /// Discards everything and returns to the empty board.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        debug!(discarded = self.entries.len() - 1, "Restarting");
        *self = Self::new();
    }

    /// The entry at the current step.
    pub fn current_entry(&self) -> &HistoryEntry {
        &self.entries[self.step]
    }

    /// The board at the current step.
    pub fn current(&self) -> &Board {
        &self.current_entry().board
    }

    /// The current step.
    pub fn step(&self) -> usize {
        self.step
    }

    /// Number of entries, including the starting board.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false; a history holds at least the starting board.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries on the current line of play.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// The player whose mark the next move places.
    pub fn next_player(&self) -> Player {
        Player::to_move_at(self.step)
    }

    /// Winner on the current board, if any.
    pub fn winner(&self) -> Option<Player> {
        rules::check_winner(self.current())
    }

    /// Winning line on the current board, if any.
    pub fn winning_line(&self) -> Option<[Position; 3]> {
        rules::winning_line(self.current()).map(|(_, line)| line)
    }

    /// Whether the current board is a draw.
    pub fn is_draw(&self) -> bool {
        rules::is_draw(self.current())
    }

    /// Status of the current board.
    pub fn status(&self) -> GameStatus {
        GameStatus::of(self.current())
    }

    /// Squares still open on the current board.
    ///
    /// Empty once the board has a winner.
    pub fn valid_moves(&self) -> Vec<Position> {
        if self.winner().is_some() {
            return Vec::new();
        }
        Position::valid_moves(self.current())
    }
}

impl Default for GameHistory {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Square;
    use Position::*;

    #[test]
    fn test_new_history_has_single_empty_entry() {
        let history = GameHistory::new();
        assert_eq!(history.len(), 1);
        assert_eq!(history.step(), 0);
        assert!(!history.is_empty());
        assert_eq!(*history.current(), Board::new());
        assert_eq!(history.current_entry().last_move(), None);
        assert_eq!(history.next_player(), Player::X);
    }

    #[test]
    fn test_apply_move_appends_and_advances() {
        let mut history = GameHistory::new();
        let outcome = history.apply_move(Center);
        assert_eq!(outcome, MoveOutcome::Applied(Move::new(Player::X, Center)));
        assert_eq!(history.len(), 2);
        assert_eq!(history.step(), 1);
        assert_eq!(history.current().get(Center), Square::Occupied(Player::X));
        assert_eq!(history.next_player(), Player::O);
    }

    #[test]
    fn test_occupied_square_is_ignored() {
        let mut history = GameHistory::new();
        history.apply_move(Center);
        let before = history.clone();

        let outcome = history.apply_move(Center);
        assert_eq!(outcome, MoveOutcome::Ignored(Rejection::SquareOccupied(Center)));
        assert_eq!(history, before);
    }

    #[test]
    fn test_moves_after_win_are_ignored() {
        let mut history = GameHistory::replay([TopLeft, Center, TopCenter, BottomLeft, TopRight]);
        assert_eq!(history.winner(), Some(Player::X));
        let len = history.len();

        let outcome = history.apply_move(BottomRight);
        assert_eq!(outcome, MoveOutcome::Ignored(Rejection::GameWon(Player::X)));
        assert_eq!(history.len(), len);
        assert!(history.valid_moves().is_empty());
    }

    #[test]
    fn test_off_board_index_is_ignored() {
        let mut history = GameHistory::new();
        assert_eq!(history.apply_index(9), MoveOutcome::Ignored(Rejection::OffBoard(9)));
        assert_eq!(history.len(), 1);
        assert!(history.apply_index(8).is_applied());
    }

    #[test]
    fn test_jump_keeps_entries() {
        let mut history = GameHistory::replay([TopLeft, Center, TopCenter]);
        history.jump_to(1).unwrap();
        assert_eq!(history.step(), 1);
        assert_eq!(history.len(), 4);
        assert_ne!(history.step() + 1, history.len());
        assert_eq!(history.next_player(), Player::O);
    }

    #[test]
    fn test_jump_out_of_range_is_an_error() {
        let mut history = GameHistory::replay([TopLeft]);
        assert_eq!(
            history.jump_to(2),
            Err(HistoryError::StepOutOfRange { step: 2, len: 2 })
        );
        assert_eq!(history.step(), 1);
    }

    #[test]
    fn test_move_after_rewind_truncates_future() {
        let mut history = GameHistory::replay([TopLeft, Center, TopCenter, BottomLeft]);
        history.jump_to(1).unwrap();

        history.apply_move(BottomRight);
        assert_eq!(history.len(), 3);
        assert_eq!(history.step() + 1, history.len());
        assert_eq!(history.current().get(BottomRight), Square::Occupied(Player::O));
        assert!(history.current().is_empty(Center));
    }

    #[test]
    fn test_rewind_to_winning_position_lifts_the_block() {
        let mut history = GameHistory::replay([TopLeft, Center, TopCenter, BottomLeft, TopRight]);
        history.jump_to(4).unwrap();
        assert_eq!(history.winner(), None);
        assert!(history.apply_move(BottomRight).is_applied());
        assert_eq!(history.len(), 6);
    }

    #[test]
    fn test_restart() {
        let mut history = GameHistory::replay([TopLeft, Center]);
        history.restart();
        assert_eq!(history, GameHistory::new());
    }
}
