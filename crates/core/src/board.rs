//! Board module - manages the game grid
//!
//! The board is a 10x20 grid where each cell is empty or holds the color of the
//! piece that locked there. Uses a flat array for cache locality and zero allocation.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19 (top to bottom).
//! Rows above the board (y < 0) are valid for pieces but never stored.

use arrayvec::ArrayVec;

use crate::catalog::get_matrix;
use crate::piece::Piece;
use crate::types::{Cell, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

/// Row indices removed by one clear, top to bottom
pub type ClearedRows = ArrayVec<usize, { BOARD_HEIGHT as usize }>;

/// The game board - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; BOARD_SIZE],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * (BOARD_WIDTH as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Cell::Occupied(_)))
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        self.row(y)
            .is_some_and(|row| row.iter().all(Cell::is_occupied))
    }

    /// Cells of row `y`, left to right
    pub fn row(&self, y: usize) -> Option<&[Cell]> {
        if y >= BOARD_HEIGHT as usize {
            return None;
        }
        let width = BOARD_WIDTH as usize;
        let start = y * width;
        Some(&self.cells[start..start + width])
    }

    /// Iterate rows top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks_exact(BOARD_WIDTH as usize)
    }

    /// Whether `kind` at `rotation` fits with its matrix anchored at (x, y).
    ///
    /// A cell fails when its column is outside the board, its row is at or below
    /// the floor, or it overlaps a locked cell. Cells above the top (y < 0) only
    /// get the column check.
    pub fn is_placement_legal(&self, kind: PieceKind, rotation: usize, x: i8, y: i8) -> bool {
        get_matrix(kind, rotation).cells().all(|(dx, dy)| {
            let px = x + dx;
            let py = y + dy;
            if px < 0 || px >= BOARD_WIDTH as i8 || py >= BOARD_HEIGHT as i8 {
                return false;
            }
            py < 0 || !self.is_occupied(px, py)
        })
    }

    /// Whether `piece` fits at its own position and rotation
    pub fn fits(&self, piece: &Piece) -> bool {
        self.is_placement_legal(piece.kind, piece.rotation, piece.x, piece.y)
    }

    /// Write the piece's visible cells in its color
    ///
    /// Cells above the board are dropped.
    pub fn lock_piece(&mut self, piece: &Piece) {
        let cell = Cell::Occupied(piece.color());
        for (px, py) in piece.cells() {
            if py >= 0 {
                self.set(px, py, cell);
            }
        }
    }

    /// Copy of this board with `piece` locked in; `self` is left untouched.
    pub fn merge(&self, piece: &Piece) -> Board {
        let mut merged = self.clone();
        merged.lock_piece(piece);
        merged
    }

    /// Clear all full rows and return the row indices that were cleared (top to bottom)
    /// Uses a two-pointer algorithm with zero allocation
    pub fn clear_full_rows(&mut self) -> ClearedRows {
        let mut cleared_rows = ClearedRows::new();
        let width = BOARD_WIDTH as usize;
        let mut write_y = BOARD_HEIGHT as usize;

        // Scan from bottom to top
        for read_y in (0..BOARD_HEIGHT as usize).rev() {
            if self.is_row_full(read_y) {
                cleared_rows.push(read_y);
            } else {
                write_y -= 1;
                if write_y != read_y {
                    let src_start = read_y * width;
                    let dst_start = write_y * width;
                    self.cells
                        .copy_within(src_start..src_start + width, dst_start);
                }
            }
        }

        // Rows freed at the top become empty
        self.cells[..write_y * width].fill(Cell::Empty);

        cleared_rows.reverse();
        cleared_rows
    }

    /// Copy of this board with full rows removed, plus how many were removed.
    pub fn cleared(&self) -> (Board, usize) {
        let mut next = self.clone();
        let count = next.clear_full_rows().len();
        (next, count)
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of occupied cells
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_occupied()).count()
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Empty);
    }

    /// Create from a flat array for testing
    #[cfg(test)]
    pub fn from_flat(cells: [Cell; BOARD_SIZE]) -> Self {
        Self { cells }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
