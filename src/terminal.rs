//! Line-oriented terminal front end.
//!
//! Reads commands from stdin and prints snapshots to stdout. Logging goes to
//! stderr so it never interleaves with the board.

use crate::driver::{Command, GameEvent};
use crate::games::tictactoe::{GamePhase, Outcome, Position};
use crate::session::GameSnapshot;
use anyhow::Result;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing::{debug, instrument};

/// Help text shown on start and after unrecognized input.
pub const HELP: &str =
    "Enter a square (1-9 or a name like \"center\"), n = new game, r = reset scores, q = quit";

/// Result of parsing one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// A command for the driver.
    Command(Command),
    /// Blank line.
    Empty,
    /// Anything else.
    Unknown(String),
}

/// Parses a line typed by the player.
#[instrument]
pub fn parse_input(line: &str) -> Input {
    let trimmed = line.trim();
    match trimmed.to_ascii_lowercase().as_str() {
        "" => Input::Empty,
        "n" | "new" => Input::Command(Command::NewGame),
        "r" | "reset" => Input::Command(Command::ResetScores),
        "q" | "quit" | "exit" => Input::Command(Command::Quit),
        _ => match Position::from_input(trimmed) {
            Some(position) => Input::Command(Command::Submit(position)),
            None => Input::Unknown(trimmed.to_string()),
        },
    }
}

/// Renders a snapshot for the terminal.
pub fn render(snapshot: &GameSnapshot) -> String {
    let status = match snapshot.phase() {
        GamePhase::NotStarted => "Press n to start".to_string(),
        GamePhase::InProgress(player) => format!("{}'s turn", player),
        GamePhase::Finished(Outcome::Winner(player)) => format!("{} wins!", player),
        GamePhase::Finished(Outcome::Draw) => "Draw!".to_string(),
    };

    let mut out = format!("\n{}\n\n{}\n", snapshot.board().display(), status);
    if let Some(line) = snapshot.winning_line() {
        let cells: Vec<_> = line.positions().iter().map(|p| p.label()).collect();
        out.push_str(&format!("Winning line: {}\n", cells.join(", ")));
    }
    out.push_str(&format!("Score  {}\n", snapshot.scores()));
    out
}

/// Forwards stdin lines to the driver until EOF or quit.
pub async fn read_commands(commands: mpsc::UnboundedSender<Command>) -> Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Some(line) = lines.next_line().await? {
        match parse_input(&line) {
            Input::Command(command) => {
                let quit = command == Command::Quit;
                commands.send(command)?;
                if quit {
                    return Ok(());
                }
            }
            Input::Empty => {}
            Input::Unknown(text) => {
                debug!(input = %text, "Unrecognized input");
                println!("{}", HELP);
            }
        }
    }

    debug!("stdin closed");
    commands.send(Command::Quit)?;
    Ok(())
}

/// Prints driver events until the driver hangs up.
pub async fn print_events(mut events: mpsc::UnboundedReceiver<GameEvent>) {
    while let Some(event) = events.recv().await {
        match event {
            GameEvent::Snapshot(snapshot) => print!("{}", render(&snapshot)),
            GameEvent::ComputerThinking => println!("Computer is thinking..."),
            GameEvent::Rejected(e) => println!("{}", e),
        }
    }
}
