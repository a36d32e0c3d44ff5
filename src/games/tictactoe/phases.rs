//! Lifecycle phases of a game session.

use super::Player;
use super::rules::Evaluation;
use serde::{Deserialize, Serialize};

/// Outcome of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Player won the game.
    Winner(Player),
    /// Game ended in a draw.
    Draw,
}

impl Outcome {
    /// Converts a terminal evaluation into an outcome.
    pub fn from_evaluation(evaluation: &Evaluation) -> Option<Self> {
        match evaluation {
            Evaluation::InProgress => None,
            Evaluation::Win { player, .. } => Some(Outcome::Winner(*player)),
            Evaluation::Tie => Some(Outcome::Draw),
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner(player) => write!(f, "Player {} wins", player),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// Turn state machine phase.
///
/// `Finished` is terminal; only a new start leaves it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// No game has been started yet.
    NotStarted,
    /// Game is ongoing with the given player to move.
    InProgress(Player),
    /// Game has ended.
    Finished(Outcome),
}

impl GamePhase {
    /// Returns the player to move, if the game is in progress.
    pub fn to_move(&self) -> Option<Player> {
        match self {
            GamePhase::InProgress(player) => Some(*player),
            _ => None,
        }
    }

    /// Returns the outcome, if the game is finished.
    pub fn outcome(&self) -> Option<Outcome> {
        match self {
            GamePhase::Finished(outcome) => Some(*outcome),
            _ => None,
        }
    }
}

impl std::fmt::Display for GamePhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GamePhase::NotStarted => write!(f, "Ready to start"),
            GamePhase::InProgress(player) => write!(f, "Player {} to move", player),
            GamePhase::Finished(outcome) => write!(f, "Game over. {}", outcome),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_accessors() {
        assert_eq!(GamePhase::NotStarted.to_move(), None);
        assert_eq!(GamePhase::NotStarted.outcome(), None);
        assert_eq!(GamePhase::InProgress(Player::O).to_move(), Some(Player::O));
        assert_eq!(GamePhase::InProgress(Player::O).outcome(), None);

        let finished = GamePhase::Finished(Outcome::Winner(Player::X));
        assert_eq!(finished.to_move(), None);
        assert_eq!(finished.outcome(), Some(Outcome::Winner(Player::X)));
    }
}
