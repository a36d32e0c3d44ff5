//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating game state
//! according to tic-tac-toe rules. Rules are separated from board
//! storage so the search engine and the session share one evaluator.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{WIN_LINES, WinLine, check_winner};

use super::{Board, Player};
use serde::{Deserialize, Serialize};

/// Result of evaluating a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Evaluation {
    /// No winner and at least one empty square.
    InProgress,
    /// A player owns a complete line.
    Win {
        /// The winning player.
        player: Player,
        /// The first complete line found.
        line: WinLine,
    },
    /// Board is full with no winning line.
    Tie,
}

impl Evaluation {
    /// Returns true for `Win` and `Tie`.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Evaluation::InProgress)
    }
}

/// Evaluates the board: winning lines first, then a full-board check.
///
/// Called at every search node, so it does not open a span.
pub fn evaluate(board: &Board) -> Evaluation {
    if let Some((player, line)) = check_winner(board) {
        return Evaluation::Win { player, line };
    }
    if is_full(board) {
        return Evaluation::Tie;
    }
    Evaluation::InProgress
}
