//! Board module - the Tetris well
//!
//! The board is a 10x20 grid where each cell is empty or filled with the kind
//! of the piece that locked there. Storage is a flat row-major array.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19
//! (top to bottom).

use arrayvec::ArrayVec;

use crate::types::{PieceKind, TETRIS_COLS, TETRIS_ROWS};

/// `None` is empty, `Some(kind)` is a locked mino.
pub type Cell = Option<PieceKind>;

const ROWS: usize = TETRIS_ROWS as usize;
const BOARD_SIZE: usize = (TETRIS_COLS as usize) * (TETRIS_ROWS as usize);

#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= TETRIS_COLS as i8 || y < 0 || y >= TETRIS_ROWS as i8 {
            return None;
        }
        Some((y as usize) * (TETRIS_COLS as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        TETRIS_COLS
    }

    pub fn height(&self) -> u8 {
        TETRIS_ROWS
    }

    /// Cell at (x, y), or None when out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at (x, y). Returns false if out of bounds.
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    pub fn is_filled(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Whether a falling mino may occupy (x, y).
    ///
    /// Columns and the floor are hard limits; rows above the top edge are open
    /// sky so a rotated piece may poke out of the well.
    pub fn is_free(&self, x: i8, y: i8) -> bool {
        if x < 0 || x >= TETRIS_COLS as i8 || y >= TETRIS_ROWS as i8 {
            return false;
        }
        y < 0 || matches!(self.get(x, y), Some(None))
    }

    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= TETRIS_ROWS as usize {
            return false;
        }
        let start = y * TETRIS_COLS as usize;
        let end = start + TETRIS_COLS as usize;
        self.cells[start..end].iter().all(|cell| cell.is_some())
    }

    /// Write minos into the board. Minos above the top edge are discarded.
    pub fn merge(&mut self, minos: impl IntoIterator<Item = (i8, i8)>, kind: PieceKind) {
        for (x, y) in minos {
            self.set(x, y, Some(kind));
        }
    }

    /// Remove every full row, shifting the rows above down and opening empty
    /// rows at the top. Returns the removed row indices, bottom to top.
    pub fn clear_full_rows(&mut self) -> ArrayVec<usize, ROWS> {
        let mut cleared_rows = ArrayVec::new();
        let width = TETRIS_COLS as usize;
        let mut write_y = TETRIS_ROWS as usize;

        for read_y in (0..TETRIS_ROWS as usize).rev() {
            if self.is_row_full(read_y) {
                cleared_rows.push(read_y);
            } else {
                write_y -= 1;
                if write_y != read_y {
                    let src_start = read_y * width;
                    let dst_start = write_y * width;
                    self.cells.copy_within(src_start..src_start + width, dst_start);
                }
            }
        }

        for cell in &mut self.cells[..write_y * width] {
            *cell = None;
        }

        cleared_rows
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of filled cells
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
