//! Move selection for the computer player.

use crate::games::tictactoe::{GameState, Position, search};
use rand::Rng;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// How the computer picks its moves.
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
pub enum Difficulty {
    /// Uniformly random empty square, no lookahead.
    Easy,
    /// Full minimax search; never loses.
    #[default]
    Hard,
}

impl Difficulty {
    /// Chooses a move for the player to move in `state`.
    ///
    /// Must only be called for an active game; the player to move is treated
    /// as the computer.
    ///
    /// # Panics
    ///
    /// Panics if the board has no empty square or is already decided.
    #[instrument(skip(state, rng), fields(player = %state.current_player()))]
    pub fn select_move<R: Rng + ?Sized>(self, state: &GameState, rng: &mut R) -> Position {
        debug_assert!(state.is_active(), "move requested for an inactive game");
        let computer = state.current_player();

        let position = match self {
            Difficulty::Hard => *search::best_move(state.board(), computer).position(),
            Difficulty::Easy => {
                let open = state.board().empty_positions();
                *open
                    .choose(rng)
                    .expect("an active game always has an empty square")
            }
        };

        debug!(difficulty = %self, ?position, "Computer selected move");
        position
    }
}
