//! Board module - manages the game grid
//!
//! The board is a fixed-size grid where each cell can be empty or filled with a piece kind.
//! Uses a flat row-major vector whose dimensions are fixed at construction.
//! Coordinates: (x, y) where x grows left to right and y grows top to bottom.
//! Row 0 is the top row; rows above it (negative y) exist only for spawning pieces.

use crate::config::MAX_BOARD_SIDE;
use crate::pieces::Shape;
use crate::types::{Cell, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

/// The game board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: u8,
    height: u8,
    /// Flat array of cells, row-major order (y * width + x)
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board with the default dimensions
    pub fn new() -> Self {
        Self::with_size(BOARD_WIDTH, BOARD_HEIGHT)
    }

    /// Create a new empty board with the given dimensions
    ///
    /// # Panics
    ///
    /// Panics if either side exceeds [`MAX_BOARD_SIDE`]; coordinates are `i8`.
    pub fn with_size(width: u8, height: u8) -> Self {
        assert!(
            width <= MAX_BOARD_SIDE && height <= MAX_BOARD_SIDE,
            "board {}x{} too large",
            width,
            height
        );
        Self {
            width,
            height,
            cells: vec![None; width as usize * height as usize],
        }
    }

    /// Build a board from text rows, top row first.
    ///
    /// `.` (or space) is empty, a piece letter is a filled cell. All rows must
    /// have the same length.
    ///
    /// # Panics
    ///
    /// Panics on ragged rows or unknown characters.
    pub fn from_rows(rows: &[&str]) -> Self {
        let height = rows.len();
        let width = rows.first().map(|r| r.chars().count()).unwrap_or(0);
        let mut board = Self::with_size(
            u8::try_from(width).unwrap_or(u8::MAX),
            u8::try_from(height).unwrap_or(u8::MAX),
        );
        for (y, row) in rows.iter().enumerate() {
            assert_eq!(row.chars().count(), width, "ragged row {}", y);
            for (x, ch) in row.chars().enumerate() {
                let cell = match ch {
                    '.' | ' ' => None,
                    other => Some(
                        PieceKind::from_letter(other)
                            .unwrap_or_else(|| panic!("unknown cell {:?}", other)),
                    ),
                };
                board.set(x as i8, y as i8, cell);
            }
        }
        board
    }

    #[inline(always)]
    fn index(&self, x: i8, y: i8) -> Option<usize> {
        if x < 0 || y < 0 || x as i16 >= self.width as i16 || y as i16 >= self.height as i16 {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    /// Get width of the board
    pub fn width(&self) -> u8 {
        self.width
    }

    /// Get height of the board
    pub fn height(&self) -> u8 {
        self.height
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        self.row(y)
            .map(|row| row.iter().all(|cell| cell.is_some()))
            .unwrap_or(false)
    }

    /// Borrow one row
    pub fn row(&self, y: usize) -> Option<&[Cell]> {
        if y >= self.height as usize {
            return None;
        }
        let width = self.width as usize;
        Some(&self.cells[y * width..(y + 1) * width])
    }

    /// Iterate rows from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width.max(1) as usize)
    }

    /// Whether a shape placed with its top-left corner at (x, y) collides.
    ///
    /// A mino collides when its column is outside the board, when it is below
    /// the floor, or when it lands on a filled cell. Minos above row 0 only
    /// collide with the side walls.
    pub fn collides(&self, x: i8, y: i8, shape: &Shape) -> bool {
        shape.minos().iter().any(|&(dx, dy)| {
            let px = x as i16 + dx as i16;
            let py = y as i16 + dy as i16;
            if px < 0 || px >= self.width as i16 || py >= self.height as i16 {
                return true;
            }
            py >= 0 && self.is_occupied(px as i8, py as i8)
        })
    }

    /// Write a shape onto the board.
    ///
    /// Minos outside the board (including those still above row 0) are dropped.
    /// Returns the number of cells written.
    pub fn stamp(&mut self, x: i8, y: i8, shape: &Shape, kind: PieceKind) -> usize {
        let mut written = 0;
        for (dx, dy) in shape.minos() {
            let px = x as i16 + dx as i16;
            let py = y as i16 + dy as i16;
            if px < 0 || py < 0 || px > i8::MAX as i16 || py > i8::MAX as i16 {
                continue;
            }
            if self.set(px as i8, py as i8, Some(kind)) {
                written += 1;
            }
        }
        written
    }

    /// Clear all full rows in place and return how many were removed.
    ///
    /// Remaining rows keep their relative order and sink to the bottom; the
    /// freed rows at the top become empty.
    pub fn clear_full_rows(&mut self) -> usize {
        let width = self.width as usize;
        let height = self.height as usize;
        let mut cleared = 0;
        let mut write_y = height;

        // Scan from bottom to top
        for read_y in (0..height).rev() {
            if self.is_row_full(read_y) {
                cleared += 1;
                continue;
            }
            write_y -= 1;
            if write_y != read_y {
                let src = read_y * width;
                self.cells.copy_within(src..src + width, write_y * width);
            }
        }

        self.cells[..write_y * width].fill(None);
        cleared
    }

    /// Pure form of [`Board::clear_full_rows`]: returns the compacted board and the cleared count.
    pub fn cleared(&self) -> (Board, usize) {
        let mut next = self.clone();
        let lines = next.clear_full_rows();
        (next, lines)
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of filled cells
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
