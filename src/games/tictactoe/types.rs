//! Core domain types for tic-tac-toe.

use super::action::MoveError;
use super::position::Position;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Player {
    /// Player X.
    X,
    /// Player O.
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Builds a board from squares in row-major order.
    ///
    /// No legality check is made, so boards that could never arise from
    /// alternating play (two winning lines, uneven mark counts) are accepted.
    pub fn from_squares(squares: [Square; 9]) -> Self {
        Self { squares }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Overwrites the square at the given position.
    pub(crate) fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.to_index()] = square;
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Checks if every square is occupied.
    pub fn is_full(&self) -> bool {
        self.squares.iter().all(|s| *s != Square::Empty)
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Returns the empty positions in ascending index order.
    pub fn empty_positions(&self) -> Vec<Position> {
        Position::ALL
            .iter()
            .copied()
            .filter(|pos| self.is_empty(*pos))
            .collect()
    }

    /// Returns a copy of the board with `player`'s mark placed at `pos`.
    ///
    /// The original board is left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::CellOccupied`] if the square already holds a mark.
    #[instrument(skip(self))]
    pub fn apply_move(&self, pos: Position, player: Player) -> Result<Board, MoveError> {
        if !self.is_empty(pos) {
            return Err(MoveError::CellOccupied(pos));
        }
        let mut next = *self;
        next.set(pos, Square::Occupied(player));
        Ok(next)
    }

    /// Formats the board as a human-readable string.
    ///
    /// Empty squares show their 1-based number so players can pick them.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                let symbol = match self.squares[pos] {
                    Square::Empty => (pos + 1).to_string(),
                    Square::Occupied(player) => player.to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Canonical game state owned by a [`crate::GameSession`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    current_player: Player,
    active: bool,
}

impl GameState {
    /// Creates an inactive state with an empty board and `X` to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::X,
            active: false,
        }
    }

    /// Creates an active state with an empty board.
    pub fn started(first_player: Player) -> Self {
        Self {
            board: Board::new(),
            current_player: first_player,
            active: true,
        }
    }

    /// Creates an active state from an arbitrary position.
    pub fn from_position(board: Board, current_player: Player) -> Self {
        Self {
            board,
            current_player,
            active: true,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the current player.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns whether the game still accepts moves.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Replaces the board with one produced by [`Board::apply_move`].
    pub(crate) fn commit(&mut self, next: Board) {
        debug_assert!(
            self.board
                .squares()
                .iter()
                .zip(next.squares())
                .all(|(before, after)| *before == Square::Empty || before == after),
            "occupied square was reassigned"
        );
        self.board = next;
    }

    /// Hands the turn to the other player.
    pub(crate) fn pass_turn(&mut self) {
        self.current_player = self.current_player.opponent();
    }

    /// Marks the game as finished.
    pub(crate) fn deactivate(&mut self) {
        self.active = false;
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
