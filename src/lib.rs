//! Strictly Minimax library - tic-tac-toe with an unbeatable opponent
//!
//! # Architecture
//!
//! - **Games**: board, rules and exhaustive minimax search
//! - **Policy**: easy (random) or hard (search) move selection
//! - **Session**: the turn-taking state machine with deferred computer moves
//! - **Scores**: win/tie tallies behind a pluggable store
//! - **Driver**: tokio event loop that runs a session and its thinking delays
//!
//! # Example
//!
//! ```
//! use strictly_minimax::{
//!     GameSession, MemoryStore, Position, ScoreTracker, SessionConfig,
//!     TicTacToePlayer as Player,
//! };
//!
//! let scores = ScoreTracker::new(Box::new(MemoryStore::new()));
//! let mut session = GameSession::new("demo".to_string(), SessionConfig::default(), scores);
//!
//! session.start(SessionConfig::default());
//! let transition = session.submit_move(Position::TopLeft, Player::X).unwrap();
//!
//! // O is the computer by default; its move is handed back for scheduling.
//! let ticket = transition.computer_turn.unwrap();
//! session.play_computer_turn(ticket).unwrap();
//! assert_eq!(session.state().current_player(), Player::X);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod arena;
mod config;
mod driver;
mod games;
mod policy;
mod scores;
mod session;
mod terminal;

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, Evaluation, GamePhase, GameState, Move, MoveError, Outcome, Player as TicTacToePlayer,
    Position, SearchResult, Square, WIN_LINES, WinLine, evaluate,
};

// Crate-level exports - Rules and search
pub use games::tictactoe::rules::{check_winner, is_draw, is_full};
pub use games::tictactoe::search::{LOSS_SCORE, TIE_SCORE, WIN_SCORE, best_move, search};

// Crate-level exports - Move selection
pub use policy::Difficulty;

// Crate-level exports - Session management
pub use session::{
    ComputerTurn, GameMode, GameObserver, GameSession, GameSnapshot, SessionConfig, SessionId,
    Transition,
};

// Crate-level exports - Scores
pub use scores::{
    FileStore, MemoryStore, SCORES_KEY, ScoreRecord, ScoreStore, ScoreTracker, StoreError,
};

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig};

// Crate-level exports - Event loop and terminal front end
pub use arena::{MatchRecord, play_match};
pub use driver::{Command, GameDriver, GameEvent};
pub use terminal::{HELP, Input, parse_input, print_events, read_commands, render};
