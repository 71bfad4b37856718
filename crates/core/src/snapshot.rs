use crate::board::Board;
use crate::game_state::Tetromino;
use crate::types::PieceKind;

/// Read-only view of a game for presentation layers.
///
/// `board` already has the active piece merged in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    pub board: Board,
    pub active: Option<Tetromino>,
    pub next: PieceKind,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub paused: bool,
    pub game_over: bool,
}

impl GameSnapshot {
    pub fn playable(&self) -> bool {
        !self.game_over && !self.paused
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: Board::new(),
            active: None,
            next: PieceKind::I,
            score: 0,
            level: 1,
            lines: 0,
            paused: false,
            game_over: false,
        }
    }
}
