//! Block Drop (workspace facade crate).
//!
//! Re-exports the engine, input, and terminal crates under one name and adds
//! the pieces that only the terminal binary needs: environment configuration
//! and the persistent high score.

pub mod config;
pub mod highscore;

pub use block_drop_core as core;
pub use block_drop_input as input;
pub use block_drop_term as term;
pub use block_drop_types as types;

pub use config::AppConfig;
pub use highscore::HighScoreStore;
