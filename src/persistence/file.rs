//! JSON file backed score store

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::envelope::ScoreEnvelope;
use super::{PersistenceError, ScoreStore};

/// `$HOME/.brick_breaker_score.json`, or the working directory without HOME
pub fn default_score_path() -> PathBuf {
    let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
    PathBuf::from(home).join(".brick_breaker_score.json")
}

/// Stores the score envelope in a single file
#[derive(Debug, Clone)]
pub struct FileScoreStore {
    path: PathBuf,
}

impl FileScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn tmp_path(&self) -> PathBuf {
        self.path.with_extension("tmp")
    }
}

impl ScoreStore for FileScoreStore {
    fn load_high_score(&self) -> Result<u64, PersistenceError> {
        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::info!("No high score at {}, starting fresh", self.path.display());
                return Ok(0);
            }
            Err(e) => return Err(e.into()),
        };
        let envelope = ScoreEnvelope::decode(&json)?;
        log::info!("Loaded high score {}", envelope.high_score);
        Ok(envelope.high_score)
    }

    fn save_high_score(&mut self, score: u64) -> Result<(), PersistenceError> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)?;
        }

        // Write then rename so a crash never leaves a half-written file
        let tmp = self.tmp_path();
        fs::write(&tmp, ScoreEnvelope::new(score).encode()?)?;
        fs::rename(&tmp, &self.path)?;
        log::info!("High score {} saved to {}", score, self.path.display());
        Ok(())
    }
}
