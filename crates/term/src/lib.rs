//! Terminal presentation for the game.
//!
//! Frames are composed into a plain [`FrameBuffer`] by [`GameView`] (pure,
//! testable) and flushed by [`TerminalRenderer`], which only rewrites rows
//! that changed. Board cells are two columns wide to keep blocks square.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use block_drop_core as core;
pub use block_drop_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, HudInfo, Viewport};
pub use renderer::{encode_frame, TerminalRenderer};
