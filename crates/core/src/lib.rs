//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and simulation logic.
//! It has **zero dependencies** on UI, networking, or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Testable**: Comprehensive unit tests for all game rules
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`board`]: fixed-size grid with collision detection and line clearing
//! - [`config`]: board size and seed for a new game
//! - [`game_state`]: active piece, scoring, gravity, and the piece lifecycle
//! - [`pieces`]: tetromino shape matrices, rotation, and kick search
//! - [`rng`]: uniform random piece selection
//! - [`scoring`]: line-clear points, leveling, and gravity speed
//! - [`snapshot`]: read-only view handed to presentation layers
//!
//! # Game Rules
//!
//! - **Random pieces**: each next piece is a uniform pick of the 7 kinds (no bag)
//! - **Rotation**: clockwise only, with a simple kick search (sideways, then up, then down)
//! - **Locking**: a piece locks the moment a downward move is blocked (no lock delay)
//! - **Scoring**: `[0, 40, 100, 300, 1200][lines] * level`, level = `lines / 10 + 1`
//! - **Game over**: the next piece cannot be placed at the spawn position
//!
//! # Example
//!
//! ```
//! use block_drop_core::{GameConfig, GameState};
//! use block_drop_types::GameAction;
//!
//! let mut game = GameState::new(GameConfig::with_seed(12345));
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::Rotate);
//! game.apply_action(GameAction::HardDrop);
//!
//! assert_eq!(game.board().filled_count(), 4);
//! assert_eq!(game.score(), 0); // no line cleared yet
//! ```
//!
//! # Timing
//!
//! Call [`GameState::tick`](game_state::GameState::tick) every frame with the elapsed
//! time. The piece drops one row once the accumulated time exceeds the level's
//! interval (1000ms at level 1, 100ms faster per level, never below 100ms).

pub mod board;
pub mod config;
pub mod game_state;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use block_drop_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use config::{ConfigError, GameConfig};
pub use game_state::{spawn, GameState, MoveOutcome, Tetromino};
pub use pieces::{find_rotation, Shape};
pub use rng::{random_piece, SimpleRng};
pub use scoring::{drop_interval_ms, level_for_lines, line_clear_points};
pub use snapshot::GameSnapshot;
