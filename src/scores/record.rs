//! Persisted score record.

use crate::games::tictactoe::Outcome;
use crate::games::tictactoe::Player;
use serde::{Deserialize, Serialize};

/// Win and tie counts across games.
///
/// Serialized as `{"X": n, "O": n, "TIE": n}`. Missing fields default to zero
/// so a partial record merges over an empty one.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters,
)]
pub struct ScoreRecord {
    /// Games won by X.
    #[serde(rename = "X", default)]
    x: u32,
    /// Games won by O.
    #[serde(rename = "O", default)]
    o: u32,
    /// Drawn games.
    #[serde(rename = "TIE", default)]
    tie: u32,
}

impl ScoreRecord {
    /// Creates a record with explicit counts.
    pub fn new(x: u32, o: u32, tie: u32) -> Self {
        Self { x, o, tie }
    }

    /// Returns the number of wins for `player`.
    pub fn wins(&self, player: Player) -> u32 {
        match player {
            Player::X => self.x,
            Player::O => self.o,
        }
    }

    /// Counts one more game with the given outcome.
    pub fn increment(&mut self, outcome: Outcome) {
        let slot = match outcome {
            Outcome::Winner(Player::X) => &mut self.x,
            Outcome::Winner(Player::O) => &mut self.o,
            Outcome::Draw => &mut self.tie,
        };
        *slot = slot.saturating_add(1);
    }

    /// Total number of finished games.
    pub fn total(&self) -> u32 {
        self.x.saturating_add(self.o).saturating_add(self.tie)
    }
}

impl std::fmt::Display for ScoreRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "X: {}  O: {}  Ties: {}", self.x, self.o, self.tie)
    }
}
