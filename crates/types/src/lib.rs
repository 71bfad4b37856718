//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (engine logic, terminal rendering, input mapping).
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9, left to right)
//! - **Height**: 20 rows (indexed 0-19, top to bottom)
//!
//! # Gravity
//!
//! The drop interval shrinks by 100ms per level and bottoms out at 100ms:
//!
//! | Level | Interval |
//! |-------|----------|
//! | 1 | 1000ms |
//! | 2 | 900ms |
//! | 5 | 600ms |
//! | 10+ | 100ms |
//!
//! # Examples
//!
//! ```
//! use block_drop_types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! let parsed = PieceKind::from_letter('t').unwrap();
//! assert_eq!(parsed, PieceKind::T);
//! assert_eq!(parsed.rgb(), (0xA0, 0x00, 0xF0));
//! assert_eq!(PieceKind::from_letter('#'), None);
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Frame period of the terminal loop in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Drop interval at level 1
pub const BASE_DROP_MS: u32 = 1000;

/// Drop interval reduction per level
pub const DROP_STEP_MS: u32 = 100;

/// Fastest drop interval
pub const DROP_INTERVAL_MIN_MS: u32 = 100;

/// Points per number of simultaneously cleared lines (0, 1, 2, 3, 4+), before the level multiplier.
pub const LINE_POINTS: [u32; 5] = [0, 40, 100, 300, 1200];

/// Lines needed per level.
pub const LINES_PER_LEVEL: u32 = 10;

/// Tetromino piece kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl PieceKind {
    /// Every piece kind, in canonical order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];

    /// Uppercase display letter
    pub fn letter(&self) -> char {
        match self {
            PieceKind::I => 'I',
            PieceKind::J => 'J',
            PieceKind::L => 'L',
            PieceKind::O => 'O',
            PieceKind::S => 'S',
            PieceKind::T => 'T',
            PieceKind::Z => 'Z',
        }
    }

    /// Parse an uppercase or lowercase display letter.
    pub fn from_letter(ch: char) -> Option<Self> {
        match ch.to_ascii_uppercase() {
            'I' => Some(PieceKind::I),
            'J' => Some(PieceKind::J),
            'L' => Some(PieceKind::L),
            'O' => Some(PieceKind::O),
            'S' => Some(PieceKind::S),
            'T' => Some(PieceKind::T),
            'Z' => Some(PieceKind::Z),
            _ => None,
        }
    }

    /// Display color as `(r, g, b)`.
    pub const fn rgb(&self) -> (u8, u8, u8) {
        match self {
            PieceKind::I => (0x00, 0xF0, 0xF0), // cyan
            PieceKind::J => (0x00, 0x00, 0xF0), // blue
            PieceKind::L => (0xF0, 0xA0, 0x00), // orange
            PieceKind::O => (0xF0, 0xF0, 0x00), // yellow
            PieceKind::S => (0x00, 0xF0, 0x00), // green
            PieceKind::T => (0xA0, 0x00, 0xF0), // purple
            PieceKind::Z => (0xF0, 0x00, 0x00), // red
        }
    }
}

/// Game actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    MoveLeft,
    MoveRight,
    SoftDrop,
    HardDrop,
    Rotate,
    Pause,
    Restart,
}

/// Cell on the board (None = empty, Some = filled with piece kind)
pub type Cell = Option<PieceKind>;
