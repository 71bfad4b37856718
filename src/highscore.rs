//! Persistent best score.
//!
//! Stored as a small JSON document, `{"high_score": 1200}`. A bare integer is
//! also accepted when reading so hand-edited files keep working.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
struct HighScoreFile {
    high_score: u32,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(untagged)]
enum StoredScore {
    Document(HighScoreFile),
    Bare(u32),
}

impl From<StoredScore> for u32 {
    fn from(stored: StoredScore) -> Self {
        match stored {
            StoredScore::Document(doc) => doc.high_score,
            StoredScore::Bare(n) => n,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighScoreStore {
    path: PathBuf,
}

impl HighScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Stored high score, or 0 when nothing has been saved yet.
    pub fn load(&self) -> Result<u32> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(0),
            Err(e) => {
                return Err(e).with_context(|| format!("reading {}", self.path.display()));
            }
        };
        if text.trim().is_empty() {
            return Ok(0);
        }
        let stored: StoredScore = serde_json::from_str(&text)
            .with_context(|| format!("parsing {}", self.path.display()))?;
        Ok(stored.into())
    }

    /// Save `score` if it beats the stored value. Returns whether it did.
    pub fn record(&self, score: u32) -> Result<bool> {
        if score <= self.load()? {
            return Ok(false);
        }
        let json = serde_json::to_string(&HighScoreFile { high_score: score })?;
        fs::write(&self.path, json)
            .with_context(|| format!("writing {}", self.path.display()))?;
        Ok(true)
    }
}
