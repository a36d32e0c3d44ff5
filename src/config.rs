//! Player preferences loaded from TOML.

use crate::games::tictactoe::Player;
use crate::policy::Difficulty;
use crate::session::{GameMode, SessionConfig};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Game preferences.
///
/// Every field has a default, so an empty file (or none at all) is valid:
///
/// ```toml
/// first_player = "X"
/// mode = "cpu"
/// difficulty = "hard"
/// computer = "O"
/// opening_delay_ms = 350
/// reply_delay_ms = 250
/// scores_dir = ".strictly_minimax"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Player who moves first.
    first_player: Player,

    /// `pvp` or `cpu`.
    mode: GameMode,

    /// `easy` or `hard`.
    difficulty: Difficulty,

    /// Mark played by the computer in CPU mode.
    computer: Player,

    /// Thinking delay before the computer's opening move.
    opening_delay_ms: u64,

    /// Thinking delay before every other computer move.
    reply_delay_ms: u64,

    /// Directory holding the persisted score record.
    scores_dir: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        let session = SessionConfig::default();
        Self {
            first_player: session.first_player,
            mode: session.mode,
            difficulty: session.difficulty,
            computer: session.computer,
            opening_delay_ms: 350,
            reply_delay_ms: 250,
            scores_dir: PathBuf::from(".strictly_minimax"),
        }
    }
}

impl GameConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(mode = %config.mode, difficulty = %config.difficulty, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise returns defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Session settings to latch at the next start.
    pub fn session(&self) -> SessionConfig {
        SessionConfig {
            first_player: self.first_player,
            mode: self.mode,
            difficulty: self.difficulty,
            computer: self.computer,
        }
    }

    /// Delay before the computer moves at `ply` (0 = opening move).
    pub fn thinking_delay(&self, ply: u8) -> Duration {
        let ms = if ply == 0 {
            self.opening_delay_ms
        } else {
            self.reply_delay_ms
        };
        Duration::from_millis(ms)
    }

    /// Overrides the first player.
    pub fn with_first_player(mut self, first_player: Player) -> Self {
        self.first_player = first_player;
        self
    }

    /// Overrides the mode.
    pub fn with_mode(mut self, mode: GameMode) -> Self {
        self.mode = mode;
        self
    }

    /// Overrides the difficulty.
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Overrides the computer's mark.
    pub fn with_computer(mut self, computer: Player) -> Self {
        self.computer = computer;
        self
    }

    /// Overrides both thinking delays.
    pub fn with_delays(mut self, opening: Duration, reply: Duration) -> Self {
        self.opening_delay_ms = u64::try_from(opening.as_millis()).unwrap_or(u64::MAX);
        self.reply_delay_ms = u64::try_from(reply.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// Overrides the score directory.
    pub fn with_scores_dir(mut self, scores_dir: impl Into<PathBuf>) -> Self {
        self.scores_dir = scores_dir.into();
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
