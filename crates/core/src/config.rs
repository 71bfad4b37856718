//! Game configuration

use std::fmt;

use crate::types::{BOARD_HEIGHT, BOARD_WIDTH};

/// Largest supported board side. Keeps every coordinate inside `i8`.
pub const MAX_BOARD_SIDE: u8 = 64;

/// Invalid configuration values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    InvalidWidth(u8),
    InvalidHeight(u8),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidWidth(w) => {
                write!(f, "board width {} outside 1..={}", w, MAX_BOARD_SIDE)
            }
            ConfigError::InvalidHeight(h) => {
                write!(f, "board height {} outside 1..={}", h, MAX_BOARD_SIDE)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Parameters for a new game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    width: u8,
    height: u8,
    seed: u32,
}

impl GameConfig {
    pub fn new(width: u8, height: u8, seed: u32) -> Result<Self, ConfigError> {
        if width == 0 || width > MAX_BOARD_SIDE {
            return Err(ConfigError::InvalidWidth(width));
        }
        if height == 0 || height > MAX_BOARD_SIDE {
            return Err(ConfigError::InvalidHeight(height));
        }
        Ok(Self {
            width,
            height,
            seed,
        })
    }

    /// Default board size with the given seed.
    pub fn with_seed(seed: u32) -> Self {
        Self {
            width: BOARD_WIDTH,
            height: BOARD_HEIGHT,
            seed,
        }
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::with_seed(1)
    }
}
