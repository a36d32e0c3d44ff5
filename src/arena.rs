//! Computer-vs-computer matches.

use crate::games::tictactoe::{Move, MoveError, Outcome, Player};
use crate::policy::Difficulty;
use crate::session::{GameMode, GameSession, SessionConfig};
use rand::Rng;
use tracing::{info, instrument};

/// Record of one finished match.
#[derive(Debug, Clone, PartialEq, Eq, derive_getters::Getters)]
pub struct MatchRecord {
    /// How the game ended.
    outcome: Outcome,
    /// Moves in play order.
    moves: Vec<Move>,
}

/// Plays one game where both marks are chosen by a [`Difficulty`].
///
/// The session is restarted in PvP mode so every move goes through
/// [`GameSession::submit_move`] exactly as a human's would, and the result
/// is counted in the session's tallies. The session's preferences are left
/// as they were.
#[instrument(skip(session, rng), fields(session_id = %session.id()))]
pub fn play_match<R: Rng + ?Sized>(
    session: &mut GameSession,
    first_player: Player,
    x: Difficulty,
    o: Difficulty,
    rng: &mut R,
) -> Result<MatchRecord, MoveError> {
    let preferences = *session.preferences();
    session.start(SessionConfig {
        first_player,
        mode: GameMode::Pvp,
        ..preferences
    });
    session.configure(preferences);

    let mut moves = Vec::with_capacity(9);
    loop {
        let phase = session.phase();
        if let Some(outcome) = phase.outcome() {
            info!(%outcome, moves = moves.len(), "Match finished");
            return Ok(MatchRecord { outcome, moves });
        }
        let to_move = phase.to_move().ok_or(MoveError::GameNotActive)?;

        let strategy = match to_move {
            Player::X => x,
            Player::O => o,
        };
        let position = strategy.select_move(session.state(), rng);
        session.submit_move(position, to_move)?;
        moves.push(Move::new(to_move, position));
    }
}
