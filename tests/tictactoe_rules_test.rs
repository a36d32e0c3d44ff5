//! Tests for board evaluation.

use strictly_minimax::{
    Board, Evaluation, MoveError, Position, Square, TicTacToePlayer as Player, WIN_LINES, evaluate,
};

/// Decodes a base-3 number into a board: digit 0 = empty, 1 = X, 2 = O.
fn board_from_code(mut code: u32) -> Board {
    let mut squares = [Square::Empty; 9];
    for sq in squares.iter_mut() {
        *sq = match code % 3 {
            1 => Square::Occupied(Player::X),
            2 => Square::Occupied(Player::O),
            _ => Square::Empty,
        };
        code /= 3;
    }
    Board::from_squares(squares)
}

fn line_owner(board: &Board, player: Player) -> bool {
    WIN_LINES.iter().any(|line| {
        line.positions()
            .iter()
            .all(|&pos| board.get(pos) == Square::Occupied(player))
    })
}

#[test]
fn test_evaluate_matches_definition_on_every_board() {
    for code in 0..3u32.pow(9) {
        let board = board_from_code(code);
        let has_line = line_owner(&board, Player::X) || line_owner(&board, Player::O);

        match evaluate(&board) {
            Evaluation::Win { player, line } => {
                assert!(line_owner(&board, player), "code {code}");
                assert!(
                    line.positions()
                        .iter()
                        .all(|&pos| board.get(pos) == Square::Occupied(player)),
                    "code {code}"
                );
            }
            Evaluation::Tie => {
                assert!(board.is_full(), "code {code}");
                assert!(!has_line, "code {code}");
            }
            Evaluation::InProgress => {
                assert!(!board.is_full(), "code {code}");
                assert!(!has_line, "code {code}");
            }
        }
    }
}

#[test]
fn test_evaluate_is_idempotent() {
    for code in (0..3u32.pow(9)).step_by(97) {
        let board = board_from_code(code);
        let before = board;
        let first = evaluate(&board);
        let second = evaluate(&board);
        assert_eq!(first, second);
        assert_eq!(board, before);
    }
}

#[test]
fn test_first_line_in_order_reported() {
    // X owns the middle row and the center column (not reachable in play).
    let board = board_from_code(0)
        .apply_move(Position::MiddleLeft, Player::X)
        .and_then(|b| b.apply_move(Position::Center, Player::X))
        .and_then(|b| b.apply_move(Position::MiddleRight, Player::X))
        .and_then(|b| b.apply_move(Position::TopCenter, Player::X))
        .and_then(|b| b.apply_move(Position::BottomCenter, Player::X))
        .expect("all squares empty");

    assert_eq!(
        evaluate(&board),
        Evaluation::Win {
            player: Player::X,
            line: WIN_LINES[1],
        }
    );
}

#[test]
fn test_apply_move_rejects_occupied_and_keeps_original() {
    let board = Board::new()
        .apply_move(Position::Center, Player::X)
        .expect("empty square");
    let result = board.apply_move(Position::Center, Player::O);
    assert_eq!(result, Err(MoveError::CellOccupied(Position::Center)));
    assert_eq!(board.get(Position::Center), Square::Occupied(Player::X));
}

#[test]
fn test_apply_move_is_pure() {
    let board = Board::new();
    let next = board
        .apply_move(Position::TopLeft, Player::O)
        .expect("empty square");
    assert_eq!(board, Board::new());
    assert_eq!(next.get(Position::TopLeft), Square::Occupied(Player::O));
    assert_eq!(next.empty_positions().len(), 8);
}

#[test]
fn test_position_round_trip_and_input() {
    for (index, pos) in Position::ALL.iter().enumerate() {
        assert_eq!(pos.to_index(), index);
        assert_eq!(Position::from_index(index), Some(*pos));
        assert_eq!(Position::from_input(&(index + 1).to_string()), Some(*pos));
        assert_eq!(Position::from_input(pos.label()), Some(*pos));
    }
    assert_eq!(Position::from_index(9), None);
    assert_eq!(Position::from_input("0"), None);
    assert_eq!(Position::from_input("middle"), None);
}

#[test]
fn test_display_numbers_empty_squares() {
    let board = Board::new()
        .apply_move(Position::TopLeft, Player::X)
        .and_then(|b| b.apply_move(Position::BottomRight, Player::O))
        .expect("empty squares");
    assert_eq!(board.display(), "X|2|3\n-+-+-\n4|5|6\n-+-+-\n7|8|O");
}
