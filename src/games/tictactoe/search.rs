//! Exhaustive minimax search for tic-tac-toe.
//!
//! Every empty square is tried in ascending index order and the full game
//! tree below it is scored. Terminal positions score [`WIN_SCORE`] when the
//! maximizing player has won, [`LOSS_SCORE`] when the other player has won and
//! [`TIE_SCORE`] otherwise. Scores carry no depth information, so a win in one
//! ply and a win in five plies are worth the same.
//!
//! Candidates replace the kept best only on strict improvement. Among equally
//! scored moves the lowest index is therefore always chosen, which makes the
//! engine's play fully reproducible.
//!
//! The tree has at most 9! leaves; no pruning or transposition table is used.

use super::rules::{Evaluation, evaluate};
use super::{Board, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Score of a position the maximizing player has won.
pub const WIN_SCORE: i8 = 10;
/// Score of a drawn position.
pub const TIE_SCORE: i8 = 0;
/// Score of a position the maximizing player has lost.
pub const LOSS_SCORE: i8 = -10;

/// The move chosen by the search and its minimax value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct SearchResult {
    /// Square to play.
    position: Position,
    /// Minimax value from the maximizer's side.
    score: i8,
}

/// Returns the optimal move for `maximizer`, who must be the player to move.
///
/// # Panics
///
/// Panics if the board is already won, tied or full. Searching a finished
/// game is a caller bug, not a recoverable input error.
#[instrument(skip(board), fields(board = %board.display()))]
pub fn best_move(board: &Board, maximizer: Player) -> SearchResult {
    search(board, maximizer, maximizer)
}

/// Returns the optimal move for `to_move`, scored from `maximizer`'s side.
///
/// # Panics
///
/// Panics if the board is terminal.
pub fn search(board: &Board, to_move: Player, maximizer: Player) -> SearchResult {
    let evaluation = evaluate(board);
    assert!(
        !evaluation.is_terminal(),
        "search invoked on a finished board: {:?}",
        evaluation
    );

    let mut scratch = *board;
    let node = minimax(&mut scratch, to_move, maximizer);
    let position = node
        .position
        .expect("a non-terminal board always has an empty square");
    debug!(?position, score = node.score, player = %to_move, "Search complete");
    SearchResult {
        position,
        score: node.score,
    }
}

/// Value of a node; leaves carry no move.
struct Node {
    position: Option<Position>,
    score: i8,
}

fn minimax(board: &mut Board, to_move: Player, maximizer: Player) -> Node {
    match evaluate(board) {
        Evaluation::Win { player, .. } => {
            let score = if player == maximizer {
                WIN_SCORE
            } else {
                LOSS_SCORE
            };
            return Node {
                position: None,
                score,
            };
        }
        Evaluation::Tie => {
            return Node {
                position: None,
                score: TIE_SCORE,
            };
        }
        Evaluation::InProgress => {}
    }

    let maximizing = to_move == maximizer;
    let mut best: Option<Node> = None;

    for pos in Position::ALL {
        if !board.is_empty(pos) {
            continue;
        }

        board.set(pos, Square::Occupied(to_move));
        let score = minimax(board, to_move.opponent(), maximizer).score;
        board.set(pos, Square::Empty);

        let improves = match &best {
            None => true,
            Some(kept) if maximizing => score > kept.score,
            Some(kept) => score < kept.score,
        };
        if improves {
            best = Some(Node {
                position: Some(pos),
                score,
            });
        }
    }

    // InProgress guarantees at least one empty square, so `best` is set.
    best.unwrap_or(Node {
        position: None,
        score: TIE_SCORE,
    })
}
