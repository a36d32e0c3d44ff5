//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Position, Square};
use serde::{Deserialize, Serialize};

/// Three positions whose uniform occupancy wins the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinLine(pub [Position; 3]);

impl WinLine {
    /// Returns the positions on this line.
    pub fn positions(&self) -> [Position; 3] {
        self.0
    }
}

/// The eight winning lines, in evaluation order.
pub const WIN_LINES: [WinLine; 8] = [
    // Rows
    WinLine([
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
    ]),
    WinLine([
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ]),
    WinLine([
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ]),
    // Columns
    WinLine([
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ]),
    WinLine([
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ]),
    WinLine([
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ]),
    // Diagonals
    WinLine([Position::TopLeft, Position::Center, Position::BottomRight]),
    WinLine([Position::TopRight, Position::Center, Position::BottomLeft]),
];

/// Checks if there is a winner on the board.
///
/// Returns the first fully occupied line in [`WIN_LINES`] order together
/// with its owner, `None` otherwise.
pub fn check_winner(board: &Board) -> Option<(Player, WinLine)> {
    for line in WIN_LINES {
        let [a, b, c] = line.0;
        let sq = board.get(a);
        if let Square::Occupied(player) = sq
            && sq == board.get(b)
            && sq == board.get(c)
        {
            return Some((player, line));
        }
    }

    None
}
