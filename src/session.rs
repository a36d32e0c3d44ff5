//! Game session: the turn-taking state machine.
//!
//! A [`GameSession`] owns one game's canonical state. Callers drive it
//! through commands (`start`, `submit_move`, `new_game`, `reset_scores`) and
//! observe it through immutable [`GameSnapshot`]s.
//!
//! The computer never moves synchronously. When it becomes the computer's
//! turn the session hands back a [`ComputerTurn`] ticket; the caller waits
//! (the "thinking" delay) and then passes the ticket to
//! [`GameSession::play_computer_turn`]. Tickets name the session generation
//! and ply they were issued for, so a ticket that outlives a restart is
//! dropped instead of landing on the new board.

use crate::games::tictactoe::{
    Board, Evaluation, GamePhase, GameState, MoveError, Outcome, Player, Position, WinLine,
    evaluate,
};
use crate::policy::Difficulty;
use crate::scores::{ScoreRecord, ScoreTracker};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Unique identifier for a game session.
pub type SessionId = String;

/// Who controls the two marks.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum GameMode {
    /// Two humans share the board.
    Pvp,
    /// One human plays against the computer.
    #[default]
    Cpu,
}

/// Settings latched when a game starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Player who moves first.
    pub first_player: Player,
    /// Human vs human or human vs computer.
    pub mode: GameMode,
    /// Computer strategy (ignored in PvP).
    pub difficulty: Difficulty,
    /// Mark played by the computer (ignored in PvP).
    pub computer: Player,
}

impl SessionConfig {
    /// Returns the computer's mark in CPU mode.
    pub fn computer_player(&self) -> Option<Player> {
        match self.mode {
            GameMode::Cpu => Some(self.computer),
            GameMode::Pvp => None,
        }
    }

    /// Returns the human's mark in CPU mode.
    pub fn human_player(&self) -> Option<Player> {
        self.computer_player().map(Player::opponent)
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            first_player: Player::X,
            mode: GameMode::Cpu,
            difficulty: Difficulty::Hard,
            computer: Player::O,
        }
    }
}

/// Ticket for a deferred computer move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_getters::Getters)]
pub struct ComputerTurn {
    /// Session generation the move was scheduled in.
    generation: u64,
    /// Number of moves on the board when it was scheduled.
    ply: u8,
}

/// Immutable view of a session, delivered to observers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct GameSnapshot {
    /// Board contents.
    board: Board,
    /// Player to move (or who moved last once finished).
    current_player: Player,
    /// Whether moves are accepted.
    active: bool,
    /// State machine phase.
    phase: GamePhase,
    /// Completed line, if the game was won.
    winning_line: Option<WinLine>,
    /// Result, if the game is over.
    outcome: Option<Outcome>,
    /// Running tallies.
    scores: ScoreRecord,
}

/// Receives a snapshot after every accepted mutation.
pub trait GameObserver: Send {
    /// Called with the state right after a change.
    fn on_snapshot(&mut self, snapshot: &GameSnapshot);
}

impl<F> GameObserver for F
where
    F: FnMut(&GameSnapshot) + Send,
{
    fn on_snapshot(&mut self, snapshot: &GameSnapshot) {
        self(snapshot)
    }
}

/// Result of an accepted command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    /// State after the command.
    pub snapshot: GameSnapshot,
    /// Set when the computer must move next; schedule it, then hand it back.
    pub computer_turn: Option<ComputerTurn>,
}

/// A single tic-tac-toe session.
pub struct GameSession {
    id: SessionId,
    preferences: SessionConfig,
    config: SessionConfig,
    state: GameState,
    phase: GamePhase,
    winning_line: Option<WinLine>,
    generation: u64,
    ply: u8,
    scores: ScoreTracker,
    observers: Vec<Box<dyn GameObserver>>,
    rng: StdRng,
}

impl GameSession {
    /// Creates a session that has not started yet.
    #[instrument(skip(scores))]
    pub fn new(id: SessionId, preferences: SessionConfig, scores: ScoreTracker) -> Self {
        info!(session_id = %id, "Creating new game session");
        Self {
            id,
            preferences,
            config: preferences,
            state: GameState::new(),
            phase: GamePhase::NotStarted,
            winning_line: None,
            generation: 0,
            ply: 0,
            scores,
            observers: Vec::new(),
            rng: StdRng::from_os_rng(),
        }
    }

    /// Replaces the random source used by the easy strategy.
    pub fn with_rng(mut self, rng: StdRng) -> Self {
        self.rng = rng;
        self
    }

    /// Registers an observer for future snapshots.
    pub fn subscribe(&mut self, observer: impl GameObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Session ID.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Current phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Canonical game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Settings of the running game.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Settings the next game will start with.
    pub fn preferences(&self) -> &SessionConfig {
        &self.preferences
    }

    /// Number of times a game has been started in this session.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Running tallies.
    pub fn scores(&self) -> ScoreRecord {
        self.scores.record()
    }

    /// Updates the preferences; the running game keeps its latched settings.
    #[instrument(skip(self), fields(session_id = %self.id))]
    pub fn configure(&mut self, preferences: SessionConfig) {
        debug!("Preferences updated for next game");
        self.preferences = preferences;
    }

    /// Returns true when the computer is the player to move.
    pub fn is_computer_turn(&self) -> bool {
        matches!(
            (self.phase, self.config.computer_player()),
            (GamePhase::InProgress(to_move), Some(computer)) if to_move == computer
        )
    }

    /// Starts a fresh game with `config`, abandoning any game in progress.
    ///
    /// Any outstanding [`ComputerTurn`] becomes stale.
    #[instrument(skip(self), fields(session_id = %self.id))]
    pub fn start(&mut self, config: SessionConfig) -> Transition {
        self.generation += 1;
        self.ply = 0;
        self.preferences = config;
        self.config = config;
        self.state = GameState::started(config.first_player);
        self.phase = GamePhase::InProgress(config.first_player);
        self.winning_line = None;

        info!(
            generation = self.generation,
            first = %config.first_player,
            mode = %config.mode,
            difficulty = %config.difficulty,
            "Game started"
        );
        self.transition()
    }

    /// Starts a new game with the current preferences.
    #[instrument(skip(self), fields(session_id = %self.id))]
    pub fn new_game(&mut self) -> Transition {
        let preferences = self.preferences;
        self.start(preferences)
    }

    /// Places `player`'s mark at `position`.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameNotActive`] unless a game is in progress
    /// - [`MoveError::CellOccupied`] if the square is taken
    /// - [`MoveError::NotYourTurn`] if `player` is not to move
    #[instrument(skip(self), fields(session_id = %self.id))]
    pub fn submit_move(
        &mut self,
        position: Position,
        player: Player,
    ) -> Result<Transition, MoveError> {
        let GamePhase::InProgress(to_move) = self.phase else {
            debug!(phase = %self.phase, "Move rejected, game not active");
            return Err(MoveError::GameNotActive);
        };

        let next = self
            .state
            .board()
            .apply_move(position, player)
            .inspect_err(|e| {
                debug!(error = %e, "Move rejected");
            })?;

        if player != to_move {
            debug!(%player, %to_move, "Move rejected, wrong turn");
            return Err(MoveError::NotYourTurn(player));
        }

        Ok(self.commit(next, position, player))
    }

    /// Plays a deferred computer move if `ticket` is still current.
    ///
    /// Returns `None` (and changes nothing) when the ticket belongs to an
    /// earlier game or ply, or the computer is no longer to move.
    #[instrument(skip(self), fields(session_id = %self.id))]
    pub fn play_computer_turn(&mut self, ticket: ComputerTurn) -> Option<Transition> {
        if ticket.generation != self.generation || ticket.ply != self.ply {
            debug!(
                generation = self.generation,
                ply = self.ply,
                "Discarding stale computer move"
            );
            return None;
        }
        if !self.is_computer_turn() {
            debug!(phase = %self.phase, "Discarding computer move, not its turn");
            return None;
        }

        let computer = self.state.current_player();
        let position = self
            .config
            .difficulty
            .select_move(&self.state, &mut self.rng);
        match self.state.board().apply_move(position, computer) {
            Ok(next) => Some(self.commit(next, position, computer)),
            Err(e) => {
                warn!(error = %e, "Computer chose an illegal move");
                None
            }
        }
    }

    /// Zeroes the tallies.
    #[instrument(skip(self), fields(session_id = %self.id))]
    pub fn reset_scores(&mut self) -> GameSnapshot {
        self.scores.reset();
        let snapshot = self.snapshot();
        self.notify(&snapshot);
        snapshot
    }

    /// Builds a snapshot of the current state.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            board: *self.state.board(),
            current_player: self.state.current_player(),
            active: self.state.is_active(),
            phase: self.phase,
            winning_line: self.winning_line,
            outcome: self.phase.outcome(),
            scores: self.scores.record(),
        }
    }

    fn commit(&mut self, next: Board, position: Position, player: Player) -> Transition {
        self.state.commit(next);
        self.ply += 1;
        debug!(%player, ?position, ply = self.ply, "Move applied");

        let evaluation = evaluate(self.state.board());
        match Outcome::from_evaluation(&evaluation) {
            Some(outcome) => {
                if let Evaluation::Win { line, .. } = evaluation {
                    self.winning_line = Some(line);
                }
                self.state.deactivate();
                self.phase = GamePhase::Finished(outcome);
                info!(%outcome, "Game finished");
                self.scores.increment(outcome);
            }
            None => {
                self.state.pass_turn();
                self.phase = GamePhase::InProgress(self.state.current_player());
            }
        }

        self.transition()
    }

    fn transition(&mut self) -> Transition {
        let snapshot = self.snapshot();
        self.notify(&snapshot);
        let computer_turn = self.is_computer_turn().then_some(ComputerTurn {
            generation: self.generation,
            ply: self.ply,
        });
        if computer_turn.is_some() {
            debug!(
                generation = self.generation,
                ply = self.ply,
                "Computer move due"
            );
        }
        Transition {
            snapshot,
            computer_turn,
        }
    }

    fn notify(&mut self, snapshot: &GameSnapshot) {
        for observer in &mut self.observers {
            observer.on_snapshot(snapshot);
        }
    }
}
