//! Pieces module - tetromino shape matrices and rotation
//!
//! Every piece kind has a canonical square 0/1 matrix (I = 4x4, O = 2x2,
//! the rest 3x3). [`Shape`] is a small `Copy` value, so a piece in play always
//! owns its matrix and rotating it can never touch the shared templates.
//!
//! Rotation is clockwise only (transpose, then reverse each row) and is resolved
//! against the board with a simplified kick search, not the SRS kick tables:
//! horizontal offsets first, then the same offsets one row up, then one row down.

use arrayvec::ArrayVec;

use crate::board::Board;
use crate::types::PieceKind;

/// Largest side length of any shape matrix
pub const MAX_SHAPE_SIZE: usize = 4;

/// Horizontal kick offsets, tried in order
pub const KICK_OFFSETS_X: [i8; 5] = [0, 1, -1, 2, -2];

/// Vertical kick offsets tried after the purely horizontal pass (up before down)
pub const KICK_OFFSETS_Y: [i8; 2] = [-1, 1];

/// A square 0/1 shape matrix of side 2..=4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    size: u8,
    cells: [[bool; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE],
}

impl Shape {
    /// Build a shape from matrix rows (`1` = filled).
    ///
    /// # Panics
    ///
    /// Panics if the matrix is not square or larger than 4x4.
    pub fn from_matrix<const N: usize>(rows: [[u8; N]; N]) -> Self {
        assert!(N <= MAX_SHAPE_SIZE, "shape larger than {}x{}", MAX_SHAPE_SIZE, MAX_SHAPE_SIZE);
        let mut cells = [[false; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        for (y, row) in rows.iter().enumerate() {
            for (x, &v) in row.iter().enumerate() {
                cells[y][x] = v != 0;
            }
        }
        Self {
            size: N as u8,
            cells,
        }
    }

    /// A fresh copy of the canonical shape for `kind`
    pub fn of(kind: PieceKind) -> Self {
        match kind {
            PieceKind::I => Self::from_matrix([
                [0, 0, 0, 0],
                [1, 1, 1, 1],
                [0, 0, 0, 0],
                [0, 0, 0, 0],
            ]),
            PieceKind::J => Self::from_matrix([[1, 0, 0], [1, 1, 1], [0, 0, 0]]),
            PieceKind::L => Self::from_matrix([[0, 0, 1], [1, 1, 1], [0, 0, 0]]),
            PieceKind::O => Self::from_matrix([[1, 1], [1, 1]]),
            PieceKind::S => Self::from_matrix([[0, 1, 1], [1, 1, 0], [0, 0, 0]]),
            PieceKind::T => Self::from_matrix([[0, 1, 0], [1, 1, 1], [0, 0, 0]]),
            PieceKind::Z => Self::from_matrix([[1, 1, 0], [0, 1, 1], [0, 0, 0]]),
        }
    }

    /// Side length of the matrix
    pub fn size(&self) -> u8 {
        self.size
    }

    /// Offsets `(dx, dy)` of every filled cell, row by row
    pub fn minos(&self) -> ArrayVec<(i8, i8), 16> {
        let n = self.size as usize;
        let mut out = ArrayVec::new();
        for y in 0..n {
            for x in 0..n {
                if self.cells[y][x] {
                    out.push((x as i8, y as i8));
                }
            }
        }
        out
    }

    /// The matrix rotated 90° clockwise (transpose + reverse rows).
    pub fn rotated_cw(&self) -> Self {
        let n = self.size as usize;
        let mut cells = [[false; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        for y in 0..n {
            for x in 0..n {
                cells[y][x] = self.cells[n - 1 - x][y];
            }
        }
        Self {
            size: self.size,
            cells,
        }
    }
}

/// Resolve a clockwise rotation of `shape` anchored at (x, y).
///
/// Returns the first non-colliding `(x, y, rotated)` candidate, or `None` when
/// every kick offset collides.
pub fn find_rotation(board: &Board, x: i8, y: i8, shape: &Shape) -> Option<(i8, i8, Shape)> {
    let rotated = shape.rotated_cw();

    let rows = std::iter::once(0).chain(KICK_OFFSETS_Y);
    for dy in rows {
        for dx in KICK_OFFSETS_X {
            let (nx, ny) = (x.saturating_add(dx), y.saturating_add(dy));
            if !board.collides(nx, ny, &rotated) {
                return Some((nx, ny, rotated));
            }
        }
    }

    None
}
