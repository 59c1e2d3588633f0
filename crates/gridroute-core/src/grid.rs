//! The [`Grid`] type — a rectangular binary occupancy grid.
//!
//! A `Grid` is an owned, immutable-per-search snapshot backed by a flat
//! buffer in row-major order. Construction from wire data validates
//! rectangularity up front so that searches never index out of bounds.

use thiserror::Error;

use crate::cell::Cell;
use crate::coord::Coord;

/// Error building a grid from externally supplied rows.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// A row's length differs from the first row's length.
    #[error("row {row} has {found} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
}

/// A rectangular grid of [`Cell`]s backed by flat row-major storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Cell>,
    rows: usize,
    cols: usize,
}

impl Grid {
    /// Create a grid of the given dimensions with every cell free.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            cells: vec![Cell::default(); rows * cols],
            rows,
            cols,
        }
    }

    /// Build a grid from wire occupancy rows (`0` free, nonzero blocked).
    ///
    /// The first row fixes the column count; any later row with a different
    /// length is rejected as [`GridError::Ragged`]. Zero rows, or rows that
    /// are all zero-length, yield the degenerate empty grid.
    pub fn from_occupancy(rows: &[Vec<u8>]) -> Result<Self, GridError> {
        let cols = rows.first().map_or(0, Vec::len);
        let mut cells = Vec::with_capacity(rows.len() * cols);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(GridError::Ragged {
                    row: i,
                    expected: cols,
                    found: row.len(),
                });
            }
            cells.extend(row.iter().map(|&v| Cell::from_occupancy(v)));
        }
        Ok(Self {
            cells,
            rows: rows.len(),
            cols,
        })
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the grid has zero rows or zero columns.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows == 0 || self.cols == 0
    }

    /// Whether `c` is inside the grid bounds.
    #[inline]
    pub fn contains(&self, c: Coord) -> bool {
        c.row >= 0 && c.col >= 0 && (c.row as usize) < self.rows && (c.col as usize) < self.cols
    }

    /// Convert a coordinate to a flat index. Returns `None` if out of bounds.
    #[inline]
    pub fn index_of(&self, c: Coord) -> Option<usize> {
        if self.contains(c) {
            Some(c.row as usize * self.cols + c.col as usize)
        } else {
            None
        }
    }

    /// Convert a flat index back to a coordinate.
    ///
    /// # Panics
    ///
    /// Panics if `idx >= self.len()` or the grid has zero columns.
    #[inline]
    pub fn coord_of(&self, idx: usize) -> Coord {
        assert!(idx < self.cells.len());
        Coord::new((idx / self.cols) as i32, (idx % self.cols) as i32)
    }

    /// Read the cell at `c`. Returns `None` if out of bounds.
    #[inline]
    pub fn at(&self, c: Coord) -> Option<Cell> {
        self.index_of(c).map(|i| self.cells[i])
    }

    /// Whether `c` is in bounds and traversable.
    #[inline]
    pub fn is_free(&self, c: Coord) -> bool {
        self.at(c).is_some_and(Cell::is_free)
    }

    /// Set the cell at `c`. No-op if `c` is outside bounds.
    pub fn set(&mut self, c: Coord, cell: Cell) {
        if let Some(i) = self.index_of(c) {
            self.cells[i] = cell;
        }
    }
}
