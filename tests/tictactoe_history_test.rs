//! Tests for the rewindable game history.

use strictly_rewind::{
    invariants::InvariantSet, GameHistory, GameStatus, HistoryError, MoveOutcome, Player, Position,
    Rejection, Square,
};

fn play(indices: &[usize]) -> GameHistory {
    let mut history = GameHistory::new();
    for &index in indices {
        assert!(history.apply_index(index).is_applied(), "move {index} rejected");
    }
    history
}

#[test]
fn test_first_mover_wins_top_row() {
    let history = play(&[0, 4, 1, 5, 2]);

    assert_eq!(history.winner(), Some(Player::X));
    assert_eq!(history.status(), GameStatus::Won(Player::X));
    assert_eq!(
        history.winning_line(),
        Some([Position::TopLeft, Position::TopCenter, Position::TopRight])
    );
    assert_eq!(history.len(), 6);
}

#[test]
fn test_full_board_draw() {
    // X O X / O O X / X X O
    let history = play(&[0, 4, 2, 1, 7, 3, 5, 8, 6]);

    assert_eq!(history.winner(), None);
    assert!(history.is_draw());
    assert_eq!(history.status(), GameStatus::Draw);
    assert!(history.current().squares().iter().all(|s| *s != Square::Empty));
    assert!(history.valid_moves().is_empty());
}

#[test]
fn test_rewind_to_start_replays_first_move_identically() {
    let mut history = play(&[0, 4, 8]);
    let original_first = history.entries()[1];

    history.jump_to(0).unwrap();
    assert_eq!(history.apply_index(0), MoveOutcome::Applied(original_first.last_move().unwrap()));

    assert_eq!(history.len(), 2);
    assert_eq!(history.entries()[1], original_first);
}

#[test]
fn test_occupied_square_never_changes_history() {
    let mut history = play(&[4, 0]);
    for index in [4, 0] {
        let before = history.clone();
        assert_eq!(
            history.apply_index(index),
            MoveOutcome::Ignored(Rejection::SquareOccupied(Position::from_index(index).unwrap()))
        );
        assert_eq!(history, before);
    }
}

#[test]
fn test_no_move_after_win_changes_length() {
    let mut history = play(&[0, 4, 1, 5, 2]);
    for index in 0..9 {
        history.apply_index(index);
        assert_eq!(history.len(), 6);
        assert_eq!(history.step(), 5);
    }
}

#[test]
fn test_next_player_follows_step_parity_after_any_jump() {
    let mut history = play(&[4, 0, 8, 2, 6, 1]);
    for step in (0..history.len()).rev().chain(0..history.len()) {
        history.jump_to(step).unwrap();
        let expected = if step % 2 == 0 { Player::X } else { Player::O };
        assert_eq!(history.next_player(), expected, "step {step}");
    }
}

#[test]
fn test_move_after_rewind_discards_future() {
    let mut history = play(&[4, 0, 8, 2]);
    history.jump_to(2).unwrap();

    let outcome = history.apply_index(6);
    assert_eq!(
        outcome,
        MoveOutcome::Applied(strictly_rewind::Move::new(Player::X, Position::BottomLeft))
    );
    assert_eq!(history.len(), 4);
    assert_eq!(history.step(), 3);
    // Entries 3 and 4 of the old line are gone.
    assert!(history.current().is_empty(Position::BottomRight));
    assert!(history.current().is_empty(Position::TopRight));
    assert!(
        history
            .entries()
            .iter()
            .all(|entry| entry.board().get(Position::BottomRight) == Square::Empty)
    );
}

#[test]
fn test_jump_out_of_range_leaves_history_alone() {
    let mut history = play(&[4]);
    let before = history.clone();
    assert_eq!(
        history.jump_to(7),
        Err(HistoryError::StepOutOfRange { step: 7, len: 2 })
    );
    assert_eq!(history, before);
}

#[test]
fn test_invariants_hold_through_branching_play() {
    let mut history = GameHistory::new();
    let script: &[(Option<usize>, usize)] = &[
        (None, 4),
        (None, 0),
        (None, 8),
        (Some(1), 2),
        (None, 6),
        (Some(0), 3),
        (None, 5),
    ];
    for &(jump, index) in script {
        if let Some(step) = jump {
            history.jump_to(step).unwrap();
        }
        history.apply_index(index);
        assert!(strictly_rewind::invariants::HistoryInvariants::check_all(&history).is_ok());
    }
    assert_eq!(history.len(), 3);
}

#[test]
fn test_history_serializes_to_json() {
    let history = play(&[4]);
    let json = serde_json::to_value(&history).unwrap();
    assert_eq!(json["step"], 1);
    assert_eq!(json["entries"].as_array().unwrap().len(), 2);
    assert_eq!(json["entries"][1]["last_move"]["position"], "Center");
    assert_eq!(json["entries"][1]["last_move"]["player"], "X");
}
