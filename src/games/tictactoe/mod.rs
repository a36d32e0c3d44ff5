//! Tic-tac-toe board, rules and search.

mod action;
mod phases;
mod position;
pub mod rules;
pub mod search;
mod types;

pub use action::{Move, MoveError};
pub use phases::{GamePhase, Outcome};
pub use position::Position;
pub use rules::{Evaluation, WIN_LINES, WinLine, evaluate};
pub use search::SearchResult;
pub use types::{Board, GameState, Player, Square};
