//! Tests for the minimax opponent.

use rand::SeedableRng;
use rand::rngs::StdRng;
use strictly_minimax::{
    Board, Difficulty, Evaluation, GameSession, GameState, LOSS_SCORE, MemoryStore, Outcome,
    Position, ScoreTracker, SessionConfig, Square, TIE_SCORE, TicTacToePlayer as Player,
    WIN_SCORE, best_move, evaluate, play_match,
};

fn board_from(marks: &str) -> Board {
    let mut squares = [Square::Empty; 9];
    for (sq, c) in squares.iter_mut().zip(marks.chars()) {
        *sq = match c {
            'X' => Square::Occupied(Player::X),
            'O' => Square::Occupied(Player::O),
            _ => Square::Empty,
        };
    }
    Board::from_squares(squares)
}

fn session() -> GameSession {
    let scores = ScoreTracker::new(Box::new(MemoryStore::new()));
    GameSession::new("minimax".to_string(), SessionConfig::default(), scores)
        .with_rng(StdRng::seed_from_u64(7))
}

/// Plays every possible opponent reply against the hard computer and checks
/// the computer never loses.
fn explore(board: Board, to_move: Player, computer: Player, games: &mut u32) {
    match evaluate(&board) {
        Evaluation::Win { player, .. } => {
            assert_eq!(player, computer, "computer lost:\n{}", board.display());
            *games += 1;
            return;
        }
        Evaluation::Tie => {
            *games += 1;
            return;
        }
        Evaluation::InProgress => {}
    }

    if to_move == computer {
        let result = best_move(&board, computer);
        assert!(
            *result.score() >= TIE_SCORE,
            "losing score:\n{}",
            board.display()
        );
        let next = board
            .apply_move(*result.position(), computer)
            .expect("search picks an empty square");
        explore(next, to_move.opponent(), computer, games);
    } else {
        for pos in board.empty_positions() {
            let next = board.apply_move(pos, to_move).expect("empty square");
            explore(next, to_move.opponent(), computer, games);
        }
    }
}

#[test]
fn test_blocks_open_diagonal() {
    // X holds 0 and 4; only 8 stops the diagonal.
    let board = board_from("X___X_O__");
    let result = best_move(&board, Player::O);
    assert_eq!(*result.position(), Position::BottomRight);
    assert_eq!(*result.score(), TIE_SCORE);
}

#[test]
fn test_lost_position_without_o_mark_picks_lowest_index() {
    // Blocking 8 still loses to a fork, so every reply scores the same.
    let board = board_from("X___X____");
    let result = best_move(&board, Player::O);
    assert_eq!(*result.position(), Position::TopCenter);
    assert_eq!(*result.score(), LOSS_SCORE);
}

#[test]
fn test_completes_own_row() {
    let board = board_from("OO_XX____");
    let result = best_move(&board, Player::O);
    assert_eq!(*result.position(), Position::TopRight);
    assert_eq!(*result.score(), WIN_SCORE);
}

#[test]
fn test_equal_losing_scores_resolve_to_lowest_index() {
    // O threatens 1, 3 and 4 at once; whatever X does, O wins next move.
    let board = board_from("O_O__XOXX");
    assert_eq!(evaluate(&board), Evaluation::InProgress);
    let result = best_move(&board, Player::X);
    assert_eq!(*result.position(), Position::TopCenter);
    assert_eq!(*result.score(), LOSS_SCORE);
}

#[test]
fn test_two_winning_squares_prefer_lower_index() {
    // 1 loses to X at 8; O wins at either 5 or 8.
    let board = board_from("O_XOO_XX_");
    let result = best_move(&board, Player::O);
    assert_eq!(*result.position(), Position::MiddleRight);
    assert_eq!(*result.score(), WIN_SCORE);
}

#[test]
fn test_search_is_deterministic() {
    let board = board_from("____X____");
    let first = best_move(&board, Player::O);
    for _ in 0..3 {
        assert_eq!(best_move(&board, Player::O), first);
    }
}

#[test]
fn test_opening_move_is_top_left_with_tie_score() {
    // Every opening draws under perfect play, so the lowest index is chosen.
    let result = best_move(&Board::new(), Player::X);
    assert_eq!(*result.position(), Position::TopLeft);
    assert_eq!(*result.score(), TIE_SCORE);
}

#[test]
fn test_hard_vs_hard_always_ties() {
    let mut session = session();
    let mut rng = StdRng::seed_from_u64(1);
    for first in [Player::X, Player::O] {
        let record = play_match(
            &mut session,
            first,
            Difficulty::Hard,
            Difficulty::Hard,
            &mut rng,
        )
        .expect("legal match");
        assert_eq!(*record.outcome(), Outcome::Draw);
        assert_eq!(record.moves().len(), 9);
        assert_eq!(record.moves()[0].player, first);
    }
    assert_eq!(*session.scores().tie(), 2);
}

#[test]
fn test_hard_never_loses_moving_second() {
    let mut games = 0;
    explore(Board::new(), Player::X, Player::O, &mut games);
    assert!(games > 0);
}

#[test]
fn test_hard_never_loses_moving_first() {
    let mut games = 0;
    explore(Board::new(), Player::X, Player::X, &mut games);
    assert!(games > 0);
}

#[test]
fn test_hard_beats_easy_or_draws() {
    let mut session = session();
    let mut rng = StdRng::seed_from_u64(42);
    for game in 0..20 {
        let first = if game % 2 == 0 { Player::X } else { Player::O };
        let record = play_match(
            &mut session,
            first,
            Difficulty::Easy,
            Difficulty::Hard,
            &mut rng,
        )
        .expect("legal match");
        assert_ne!(*record.outcome(), Outcome::Winner(Player::X));
    }
    assert_eq!(*session.scores().x(), 0);
}

#[test]
fn test_easy_picks_an_empty_square() {
    let board = board_from("XOXOX____");
    let state = GameState::from_position(board, Player::O);
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..50 {
        let pos = Difficulty::Easy.select_move(&state, &mut rng);
        assert!(board.is_empty(pos));
    }
}
