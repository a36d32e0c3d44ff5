//! Win/tie tallies and their persistence.

mod error;
mod record;
mod store;
mod tracker;

pub use error::StoreError;
pub use record::ScoreRecord;
pub use store::{FileStore, MemoryStore, ScoreStore};
pub use tracker::{SCORES_KEY, ScoreTracker};
