//! Strictly Minimax - Unified CLI
//!
//! Terminal tic-tac-toe against an unbeatable minimax opponent.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command, PlayArgs};
use rand::SeedableRng;
use rand::rngs::StdRng;
use strictly_minimax::{
    Difficulty, FileStore, GameConfig, GameDriver, GameSession, HELP, ScoreTracker,
    TicTacToePlayer as Player, play_match, print_events, read_commands,
};
use tokio::sync::mpsc;
use tracing::{info, instrument};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    initialize_tracing();

    let config = GameConfig::load_or_default(&cli.config)
        .with_context(|| format!("Failed to load {}", cli.config.display()))?;

    match cli.command {
        Command::Play(args) => run_play(config, args).await,
        Command::Selfplay { games } => run_selfplay(config, games),
        Command::Scores { reset } => run_scores(config, reset),
    }
}

/// Play interactively in the terminal
#[instrument(skip(config))]
async fn run_play(config: GameConfig, args: PlayArgs) -> Result<()> {
    let config = apply_overrides(config, args);
    info!(session = ?config.session(), "Starting terminal game");

    let session = GameSession::new(
        "terminal".to_string(),
        config.session(),
        open_scores(&config),
    );
    let (event_tx, event_rx) = mpsc::unbounded_channel();
    let (driver, commands) = GameDriver::new(session, config, event_tx);

    println!("{}", HELP);
    commands
        .send(strictly_minimax::Command::NewGame)
        .context("Driver stopped before the first game")?;

    let printer = tokio::spawn(print_events(event_rx));
    let reader = tokio::spawn(read_commands(commands));

    let session = driver.run().await?;
    reader.abort();

    // The session's observer holds the last event sender.
    let scores = session.scores();
    drop(session);
    printer.await.context("Event printer panicked")?;

    println!("Final score  {}", scores);
    Ok(())
}

/// Let the hard strategy play both sides
#[instrument(skip(config))]
fn run_selfplay(config: GameConfig, games: u32) -> Result<()> {
    let mut session = GameSession::new(
        "selfplay".to_string(),
        config.session(),
        open_scores(&config),
    );
    let mut rng = StdRng::from_os_rng();

    for game in 0..games {
        let first = if game % 2 == 0 { Player::X } else { Player::O };
        let record = play_match(
            &mut session,
            first,
            Difficulty::Hard,
            Difficulty::Hard,
            &mut rng,
        )?;
        let moves: Vec<String> = record.moves().iter().map(|m| m.to_string()).collect();
        println!("Game {}: {} ({})", game + 1, record.outcome(), moves.join(", "));
    }

    println!("Score  {}", session.scores());
    Ok(())
}

/// Show or reset the persisted scores
#[instrument(skip(config))]
fn run_scores(config: GameConfig, reset: bool) -> Result<()> {
    let mut tracker = open_scores(&config);
    if reset {
        tracker.reset();
        println!("Scores reset");
    } else {
        println!("Score  {}", tracker.record());
    }
    Ok(())
}

fn open_scores(config: &GameConfig) -> ScoreTracker {
    ScoreTracker::new(Box::new(FileStore::new(config.scores_dir())))
}

fn apply_overrides(mut config: GameConfig, args: PlayArgs) -> GameConfig {
    if let Some(mode) = args.mode {
        config = config.with_mode(mode);
    }
    if let Some(difficulty) = args.difficulty {
        config = config.with_difficulty(difficulty);
    }
    if let Some(first) = args.first {
        config = config.with_first_player(first);
    }
    if let Some(computer) = args.computer {
        config = config.with_computer(computer);
    }
    config
}

fn initialize_tracing() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("warn,strictly_minimax=info")),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
