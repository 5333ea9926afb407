//! High score persistence
//!
//! Features:
//! - `ScoreStore` trait so the front end picks the backing storage
//! - Versioned JSON envelope on disk (temp file + rename)
//! - In-memory store for tests and headless runs

pub mod envelope;
pub mod file;

use std::fmt;
use std::io;

pub use envelope::{SCORE_FORMAT_VERSION, ScoreEnvelope};
pub use file::{FileScoreStore, default_score_path};

/// Errors from reading or writing persisted data
#[derive(Debug)]
pub enum PersistenceError {
    Io(io::Error),
    Parse(serde_json::Error),
    UnsupportedVersion { found: u32 },
}

impl fmt::Display for PersistenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "storage I/O error: {e}"),
            Self::Parse(e) => write!(f, "malformed JSON: {e}"),
            Self::UnsupportedVersion { found } => {
                write!(f, "unsupported score format version {found}")
            }
        }
    }
}

impl std::error::Error for PersistenceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Parse(e) => Some(e),
            Self::UnsupportedVersion { .. } => None,
        }
    }
}

impl From<io::Error> for PersistenceError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for PersistenceError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e)
    }
}

/// A single persisted best score
pub trait ScoreStore {
    /// Stored best score, 0 if nothing was saved yet
    fn load_high_score(&self) -> Result<u64, PersistenceError>;

    fn save_high_score(&mut self, score: u64) -> Result<(), PersistenceError>;
}

/// Keeps the score in memory only
#[derive(Debug, Clone, Default)]
pub struct MemoryScoreStore {
    high_score: Option<u64>,
    /// Number of successful saves
    pub saves: u32,
}

impl MemoryScoreStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_score(score: u64) -> Self {
        Self {
            high_score: Some(score),
            saves: 0,
        }
    }
}

impl ScoreStore for MemoryScoreStore {
    fn load_high_score(&self) -> Result<u64, PersistenceError> {
        Ok(self.high_score.unwrap_or(0))
    }

    fn save_high_score(&mut self, score: u64) -> Result<(), PersistenceError> {
        self.high_score = Some(score);
        self.saves += 1;
        Ok(())
    }
}
