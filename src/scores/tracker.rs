//! Score tracking on top of a [`ScoreStore`].

use super::{ScoreRecord, ScoreStore};
use crate::games::tictactoe::Outcome;
use tracing::{debug, info, instrument, warn};

/// Key under which the score record is persisted.
pub const SCORES_KEY: &str = "ttt_scores";

/// Accumulates game results and persists them.
///
/// Persistence failures never reach the caller: a record that cannot be read
/// loads as zeros and a failed save leaves the in-memory tallies intact.
#[derive(Debug)]
pub struct ScoreTracker {
    store: Box<dyn ScoreStore>,
    record: ScoreRecord,
}

impl ScoreTracker {
    /// Creates a tracker and loads the stored record.
    #[instrument(skip(store))]
    pub fn new(store: Box<dyn ScoreStore>) -> Self {
        let mut tracker = Self {
            store,
            record: ScoreRecord::default(),
        };
        tracker.record = tracker.load();
        tracker
    }

    /// Reads the persisted record, falling back to zeros on missing or bad data.
    #[instrument(skip(self))]
    pub fn load(&self) -> ScoreRecord {
        let raw = match self.store.read(SCORES_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!("No stored scores, starting from zero");
                return ScoreRecord::default();
            }
            Err(e) => {
                warn!(error = %e, "Failed to read scores, starting from zero");
                return ScoreRecord::default();
            }
        };

        match serde_json::from_str::<ScoreRecord>(&raw) {
            Ok(record) => {
                info!(%record, "Loaded scores");
                record
            }
            Err(e) => {
                warn!(error = %e, "Stored scores are malformed, starting from zero");
                ScoreRecord::default()
            }
        }
    }

    /// Returns the current tallies.
    pub fn record(&self) -> ScoreRecord {
        self.record
    }

    /// Counts a finished game and persists the new tallies.
    #[instrument(skip(self))]
    pub fn increment(&mut self, outcome: Outcome) {
        self.record.increment(outcome);
        info!(record = %self.record, "Score updated");
        self.save();
    }

    /// Zeroes all tallies and persists the empty record.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.record = ScoreRecord::default();
        info!("Scores reset");
        self.save();
    }

    /// Persists the current tallies. Failures are logged and ignored.
    #[instrument(skip(self))]
    pub fn save(&mut self) {
        let encoded = match serde_json::to_string(&self.record) {
            Ok(encoded) => encoded,
            Err(e) => {
                warn!(error = %e, "Failed to encode scores");
                return;
            }
        };
        if let Err(e) = self.store.write(SCORES_KEY, &encoded) {
            warn!(error = %e, "Failed to save scores");
        }
    }
}
