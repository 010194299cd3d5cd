//! Tests for per-move legality on the board.

use strictly_checkers::{Board, BoardPreset, Color, Move, MoveError, MoveKind, Piece, Position};

fn check(board: &Board, mv: Move) -> Result<MoveKind, MoveError> {
    board.copy(false).check_move(&mv, Color::Red)
}

#[test]
fn test_off_board_squares_are_rejected_first() {
    let board = Board::new();
    assert_eq!(check(&board, Move::from_coords(5, 0, 8, 1)), Err(MoveError::InvalidSpace));
    assert_eq!(check(&board, Move::from_coords(-1, 0, 0, 1)), Err(MoveError::InvalidSpace));
    assert_eq!(check(&board, Move::from_coords(3, 3, 3, 9)), Err(MoveError::InvalidSpace));
    for mv in [
        Move::from_coords(i32::MIN, 0, 5, 0),
        Move::from_coords(5, 0, i32::MAX, i32::MAX),
        Move::from_coords(i32::MAX, i32::MIN, i32::MAX - 2, i32::MIN + 2),
    ] {
        assert_eq!(check(&board, mv), Err(MoveError::InvalidSpace), "{mv}");
    }
}

#[test]
fn test_occupancy_checks() {
    let board = Board::new();
    assert_eq!(check(&board, Move::from_coords(4, 1, 3, 0)), Err(MoveError::NoPiece));
    assert_eq!(check(&board, Move::from_coords(2, 1, 3, 0)), Err(MoveError::WrongOwner));
    assert_eq!(
        check(&board, Move::from_coords(6, 1, 5, 0)),
        Err(MoveError::OccupiedDestination)
    );
}

#[test]
fn test_shape_and_direction_checks() {
    let board = Board::new();
    assert_eq!(check(&board, Move::from_coords(5, 0, 4, 1)), Ok(MoveKind::Simple));
    assert_eq!(check(&board, Move::from_coords(5, 0, 3, 0)), Err(MoveError::InvalidMove));
    assert_eq!(check(&board, Move::from_coords(5, 0, 3, 2)), Err(MoveError::JumpOverNothing));
    assert_eq!(check(&board, Move::from_coords(6, 1, 4, 3)), Err(MoveError::JumpOverOwnPiece));

    let lone = Board::with_pieces([(Position::new(4, 3), Piece::Single(Color::Red))])
        .expect("valid layout");
    assert_eq!(check(&lone, Move::from_coords(4, 3, 5, 4)), Err(MoveError::IllegalMove));
}

#[test]
fn test_sequencing_within_a_turn() {
    let mut board = Board::new();
    let first = Move::from_coords(5, 0, 4, 1);
    assert_eq!(board.check_move(&first, Color::Red), Ok(MoveKind::Simple));
    board.make_move(&first);
    assert_eq!(
        board.check_move(&Move::from_coords(5, 2, 4, 3), Color::Red),
        Err(MoveError::DoubleMove)
    );
    assert_eq!(
        board.check_move(&Move::from_coords(5, 2, 3, 0), Color::Red),
        Err(MoveError::JumpAfterMove)
    );

    let mut board = BoardPreset::Jump.build();
    let jump = Move::from_coords(5, 6, 3, 4);
    assert_eq!(board.check_move(&jump, Color::Red), Ok(MoveKind::Jump));
    board.make_move(&jump);
    assert_eq!(
        board.check_move(&Move::from_coords(4, 1, 3, 0), Color::Red),
        Err(MoveError::MoveAfterJump)
    );
}

#[test]
fn test_follow_up_jump_must_use_the_landing_piece() {
    let mut board = BoardPreset::MultiJump.build();
    let first = Move::from_coords(6, 1, 4, 3);
    assert_eq!(board.check_move(&first, Color::Red), Ok(MoveKind::Jump));
    board.make_move(&first);
    assert_eq!(
        board.check_move(&Move::from_coords(5, 4, 3, 6), Color::Red),
        Err(MoveError::JumpWithDifferentPiece)
    );
    assert_eq!(
        board.check_move(&Move::from_coords(4, 3, 2, 5), Color::Red),
        Ok(MoveKind::Jump)
    );
}

#[test]
fn test_forced_jump_rejects_every_simple_move() {
    for preset in [BoardPreset::Jump, BoardPreset::MultiJump, BoardPreset::JumpingKing] {
        let board = preset.build();
        assert!(board.player_can_jump(Color::Red), "{preset}");
        for (from, piece) in board.pieces_of(Color::Red) {
            for (rows, cells) in [(-1, -1), (-1, 1), (1, -1), (1, 1)] {
                let to = from.offset(rows, cells);
                let open = board.space(to).is_some_and(|space| space.is_open());
                if !open {
                    continue;
                }
                let mv = Move::new(from, to);
                let expected = Err(MoveError::ForcedJump);
                assert_eq!(check(&board, mv), expected, "{preset}: {piece:?} {mv}");
            }
        }
    }
}

#[test]
fn test_committed_jump_clears_the_captured_square() {
    let mut board = Board::new();
    board
        .place(Position::new(4, 3), Piece::Single(Color::White))
        .expect("playable square");
    let jump = Move::from_coords(5, 2, 3, 4);
    assert_eq!(board.check_move(&jump, Color::Red), Ok(MoveKind::Jump));
    board.make_move(&jump);
    assert_eq!(board.piece_at(Position::new(4, 3)), None);
    assert_eq!(board.piece_at(Position::new(3, 4)), Some(Piece::Single(Color::Red)));
}

/// After a jump the board remembers whether the moved piece can jump again.
/// That cached answer must match a fresh probe from the landing square on an
/// independent copy of the resulting board.
#[test]
fn test_follow_up_jump_cache_matches_fresh_probe() {
    let mut compared = 0;
    for preset in [BoardPreset::MultiJump, BoardPreset::JumpingKing, BoardPreset::Jump] {
        let board = preset.build();
        for (from, piece) in board.pieces_of(Color::Red) {
            for (rows, cells) in [(-2, -2), (-2, 2), (2, -2), (2, 2)] {
                let jump = Move::new(from, from.offset(rows, cells));
                let mut after = board.copy(false);
                if after.check_move(&jump, Color::Red) != Ok(MoveKind::Jump) {
                    continue;
                }
                after.make_move(&jump);
                let independent = after.copy(false);
                assert_eq!(
                    after.player_has_jump(),
                    piece.has_jump(&independent, jump.end),
                    "{preset}: {jump}"
                );
                assert_eq!(
                    after.player_has_jump(),
                    independent.has_jump_from(piece, jump.end),
                    "{preset}: {jump}"
                );
                compared += 1;
            }
        }
    }
    assert!(compared >= 4, "only {compared} jumps exercised");
}

#[test]
fn test_scans_agree_across_orientations() {
    for preset in [BoardPreset::Standard, BoardPreset::Jump, BoardPreset::NoMoves] {
        let board = preset.build();
        let flipped = board.copy(true);
        for color in [Color::Red, Color::White] {
            assert_eq!(board.player_can_jump(color), flipped.player_can_jump(color));
            assert_eq!(board.moves_remaining(color), flipped.moves_remaining(color));
            assert_eq!(board.piece_count(color), flipped.piece_count(color));
        }
    }
}

#[test]
fn test_no_moves_layout_leaves_white_stuck() {
    let board = BoardPreset::NoMoves.build();
    assert!(board.pieces_remaining(Color::White));
    assert!(!board.moves_remaining(Color::White));
    assert!(board.moves_remaining(Color::Red));
}
