//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Position};
use tracing::instrument;

/// The eight winning lines, in evaluation order: rows, columns, diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Returns the first line in [`LINES`] holding three identical marks,
/// together with the owning player.
#[instrument(level = "trace")]
pub fn winning_line(board: &Board) -> Option<(Player, [Position; 3])> {
    LINES.iter().find_map(|&[a, b, c]| {
        let player = board.get(a).player()?;
        (board.get(b) == board.get(a) && board.get(c) == board.get(a))
            .then_some((player, [a, b, c]))
    })
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has three in a row,
/// `None` otherwise. Should a malformed board hold several winning lines,
/// the first one in [`LINES`] decides.
#[instrument(level = "trace")]
pub fn check_winner(board: &Board) -> Option<Player> {
    winning_line(board).map(|(player, _)| player)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Square;

    fn board_with(x: &[Position], o: &[Position]) -> Board {
        let mut board = Board::new();
        for pos in x {
            board = board.with_mark(*pos, Player::X);
        }
        for pos in o {
            board = board.with_mark(*pos, Player::O);
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(check_winner(&Board::new()), None);
    }

    #[test]
    fn test_every_line_wins_for_either_player() {
        for line in LINES {
            for player in [Player::X, Player::O] {
                let mut board = Board::new();
                for pos in line {
                    board = board.with_mark(pos, player);
                }
                assert_eq!(check_winner(&board), Some(player), "line {line:?}");
                assert_eq!(winning_line(&board), Some((player, line)));
            }
        }
    }

    #[test]
    fn test_winner_diagonal() {
        let board = board_with(&[Position::TopRight, Position::Center], &[Position::TopLeft])
            .with_mark(Position::BottomLeft, Player::X);
        assert_eq!(check_winner(&board), Some(Player::X));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = board_with(&[Position::TopLeft, Position::TopCenter], &[Position::TopRight]);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_first_line_wins_on_malformed_board() {
        // X owns the middle row, O the top row; rows are checked top-down.
        let board = board_with(
            &[Position::MiddleLeft, Position::Center, Position::MiddleRight],
            &[Position::TopLeft, Position::TopCenter, Position::TopRight],
        );
        assert_eq!(check_winner(&board), Some(Player::O));

        // X owns the left column, O the right one.
        let x = Square::Occupied(Player::X);
        let o = Square::Occupied(Player::O);
        let e = Square::Empty;
        let board = Board::from_squares([x, e, o, x, e, o, x, e, o]);
        assert_eq!(check_winner(&board), Some(Player::X));
        assert_eq!(
            winning_line(&board).map(|(_, line)| line),
            Some([Position::TopLeft, Position::MiddleLeft, Position::BottomLeft])
        );
    }
}
