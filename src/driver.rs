//! Event loop that owns a [`GameSession`] and runs deferred computer moves.

use crate::config::GameConfig;
use crate::games::tictactoe::{MoveError, Player, Position};
use crate::session::{ComputerTurn, GameSession, GameSnapshot, SessionConfig};
use anyhow::Result;
use tokio::sync::mpsc;
use tracing::{debug, info, instrument, warn};

/// Commands accepted by the driver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Start a game with the current preferences.
    NewGame,
    /// Change the preferences used by the next game.
    Configure(SessionConfig),
    /// Place a mark for the local player.
    Submit(Position),
    /// Zero the score tallies.
    ResetScores,
    /// A thinking delay elapsed; play the computer's move if still due.
    ComputerTurn(ComputerTurn),
    /// Stop the loop.
    Quit,
}

/// Messages sent from the driver to the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// Game state updated.
    Snapshot(GameSnapshot),
    /// The computer is thinking about its next move.
    ComputerThinking,
    /// A submitted move was refused.
    Rejected(MoveError),
}

/// Serializes all commands against one session.
///
/// Computer moves are deferred: each [`ComputerTurn`] ticket is parked in a
/// sleeping task and fed back through the command channel when it wakes, so
/// the session is only ever touched from the loop in [`GameDriver::run`].
pub struct GameDriver {
    session: GameSession,
    config: GameConfig,
    commands_rx: mpsc::UnboundedReceiver<Command>,
    commands_tx: mpsc::WeakUnboundedSender<Command>,
    event_tx: mpsc::UnboundedSender<GameEvent>,
}

impl GameDriver {
    /// Creates a driver and the handle used to send it commands.
    ///
    /// The loop ends on [`Command::Quit`] or when every handle is dropped.
    #[instrument(skip_all, fields(session_id = %session.id()))]
    pub fn new(
        mut session: GameSession,
        config: GameConfig,
        event_tx: mpsc::UnboundedSender<GameEvent>,
    ) -> (Self, mpsc::UnboundedSender<Command>) {
        let (commands_tx, commands_rx) = mpsc::unbounded_channel();

        let snapshots = event_tx.clone();
        session.subscribe(move |snapshot: &GameSnapshot| {
            if snapshots
                .send(GameEvent::Snapshot(snapshot.clone()))
                .is_err()
            {
                debug!("UI receiver gone, dropping snapshot");
            }
        });

        let driver = Self {
            session,
            config,
            commands_rx,
            commands_tx: commands_tx.downgrade(),
            event_tx,
        };
        (driver, commands_tx)
    }

    /// Runs until quit, returning the session for inspection.
    pub async fn run(mut self) -> Result<GameSession> {
        info!(session_id = %self.session.id(), "Starting game driver");

        while let Some(command) = self.commands_rx.recv().await {
            if command == Command::Quit {
                info!("Quit requested");
                break;
            }
            self.dispatch(command);
        }

        info!("Game driver stopped");
        Ok(self.session)
    }

    #[instrument(skip(self))]
    fn dispatch(&mut self, command: Command) {
        let computer_turn = match command {
            Command::NewGame => self.session.new_game().computer_turn,
            Command::Configure(preferences) => {
                self.session.configure(preferences);
                None
            }
            Command::Submit(position) => {
                let player = self.local_player();
                match self.session.submit_move(position, player) {
                    Ok(transition) => transition.computer_turn,
                    Err(e) => {
                        debug!(error = %e, "Move rejected");
                        self.emit(GameEvent::Rejected(e));
                        None
                    }
                }
            }
            Command::ResetScores => {
                self.session.reset_scores();
                None
            }
            Command::ComputerTurn(ticket) => self
                .session
                .play_computer_turn(ticket)
                .and_then(|transition| transition.computer_turn),
            Command::Quit => None,
        };

        if let Some(ticket) = computer_turn {
            self.schedule(ticket);
        }
    }

    /// The mark local input plays: the human's in CPU mode, else whoever is to move.
    fn local_player(&self) -> Player {
        self.session
            .config()
            .human_player()
            .unwrap_or_else(|| self.session.state().current_player())
    }

    /// Sends an event to the UI; a closed receiver only drops the event.
    fn emit(&self, event: GameEvent) {
        if self.event_tx.send(event).is_err() {
            debug!("UI receiver gone, dropping event");
        }
    }

    fn schedule(&self, ticket: ComputerTurn) {
        let delay = self.config.thinking_delay(*ticket.ply());
        debug!(?ticket, ?delay, "Scheduling computer move");
        self.emit(GameEvent::ComputerThinking);

        let commands = self.commands_tx.clone();
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            match commands.upgrade() {
                Some(tx) => {
                    if tx.send(Command::ComputerTurn(ticket)).is_err() {
                        warn!("Driver stopped before computer move");
                    }
                }
                None => debug!("Driver stopped before computer move"),
            }
        });
    }
}
