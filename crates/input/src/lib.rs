//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::GameAction`] and classifies
//! press/release pairs as swipe or tap gestures.

pub mod gesture;
pub mod map;

pub use block_drop_types as types;

pub use gesture::{classify_swipe, SwipeTracker, DEFAULT_SWIPE_THRESHOLD};
pub use map::{handle_key_event, should_quit};
