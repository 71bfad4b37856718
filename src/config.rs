//! Runtime configuration for the terminal binary.

use std::env;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

/// Default high-score file, relative to the working directory.
pub const DEFAULT_HIGH_SCORE_PATH: &str = ".block-drop-highscore.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub seed: u32,
    /// `None` when persistence is disabled.
    pub high_score_path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            seed: clock_seed(),
            high_score_path: Some(PathBuf::from(DEFAULT_HIGH_SCORE_PATH)),
        }
    }
}

impl AppConfig {
    /// Read `BLOCK_DROP_SEED`, `BLOCK_DROP_HIGH_SCORE_PATH` and
    /// `BLOCK_DROP_HIGH_SCORE_DISABLED`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`AppConfig::from_env`] with an injectable variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let seed = lookup("BLOCK_DROP_SEED")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or_else(clock_seed);

        let disabled = lookup("BLOCK_DROP_HIGH_SCORE_DISABLED")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        let high_score_path = if disabled {
            None
        } else {
            let path = lookup("BLOCK_DROP_HIGH_SCORE_PATH")
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| DEFAULT_HIGH_SCORE_PATH.to_string());
            Some(PathBuf::from(path))
        };

        Self {
            seed,
            high_score_path,
        }
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u32 ^ d.as_secs() as u32)
        .unwrap_or(1)
}
