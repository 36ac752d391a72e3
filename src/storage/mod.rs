//! Persistence and statistics collaborators.
//!
//! Paths are carried in an explicit [`StorageConfig`]; the rules engine never
//! touches the filesystem.

#![cfg(feature = "std")]

pub mod save;
pub mod stats;

pub use save::SaveStore;
pub use stats::{Outcome, StatsLog, StatsRecord, STATS_HEADER};

use std::path::PathBuf;

pub const DEFAULT_SAVE_FILE: &str = "regicide_save.bin";
pub const DEFAULT_STATS_FILE: &str = "regicide_stats.log";

/// File locations used by the I/O layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageConfig {
    pub save_path: PathBuf,
    pub stats_path: PathBuf,
}

impl StorageConfig {
    pub fn new(save_path: impl Into<PathBuf>, stats_path: impl Into<PathBuf>) -> Self {
        Self {
            save_path: save_path.into(),
            stats_path: stats_path.into(),
        }
    }

    pub fn save_store(&self) -> SaveStore {
        SaveStore::new(&self.save_path)
    }

    pub fn stats_log(&self) -> StatsLog {
        StatsLog::new(&self.stats_path)
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self::new(DEFAULT_SAVE_FILE, DEFAULT_STATS_FILE)
    }
}
