//! Command-line interface for strictly_minimax.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use strictly_minimax::{Difficulty, GameMode, TicTacToePlayer as Player};

/// Strictly Minimax - tic-tac-toe against an unbeatable opponent
#[derive(Parser, Debug)]
#[command(name = "strictly_minimax")]
#[command(about = "Tic-tac-toe with a minimax opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML preferences file
    #[arg(short, long, global = true, default_value = "strictly_minimax.toml")]
    pub config: PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal
    Play(PlayArgs),

    /// Let the hard computer play itself
    Selfplay {
        /// Number of games to play
        #[arg(short, long, default_value = "2")]
        games: u32,
    },

    /// Show the persisted scores
    Scores {
        /// Zero the scores instead of showing them
        #[arg(long)]
        reset: bool,
    },
}

/// Overrides for the preferences file
#[derive(Args, Debug, Default)]
pub struct PlayArgs {
    /// pvp or cpu
    #[arg(long)]
    pub mode: Option<GameMode>,

    /// easy or hard
    #[arg(long)]
    pub difficulty: Option<Difficulty>,

    /// Player who moves first (x or o)
    #[arg(long)]
    pub first: Option<Player>,

    /// Mark played by the computer (x or o)
    #[arg(long)]
    pub computer: Option<Player>,
}
