//! The two-dimensional cell grid produced by a rule.
//!
//! Row 0 holds the seed and is always fully defined. Rows below it start
//! [`CellState::Unset`] and are filled in order by the
//! [`Automaton`](crate::automaton::Automaton); a row is only ever written once
//! the row above it is complete.

use std::fmt;

use serde::Serialize;

use crate::error::GridError;
use crate::params::validate_dimension;

/// State of a single grid cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CellState {
    Filled,
    Empty,
    /// Not generated yet.
    #[default]
    Unset,
}

impl CellState {
    /// `true` only for `Filled`; `Unset` counts as not filled.
    pub fn is_filled(self) -> bool {
        self == CellState::Filled
    }

    fn symbol(self) -> char {
        match self {
            CellState::Filled => '#',
            CellState::Empty => '.',
            CellState::Unset => '?',
        }
    }
}

impl From<bool> for CellState {
    fn from(filled: bool) -> Self {
        if filled {
            CellState::Filled
        } else {
            CellState::Empty
        }
    }
}

/// A `rows x cols` grid of cell states in row-major order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<CellState>,
}

impl Grid {
    /// Creates a grid whose seed row is all empty and whose other rows are unset.
    ///
    /// Returns `GridError::InvalidDimension` if either count is outside [5, 50].
    pub fn new(rows: usize, cols: usize) -> Result<Self, GridError> {
        validate_dimension("row", rows)?;
        validate_dimension("column", cols)?;
        let mut cells = vec![CellState::Unset; rows * cols];
        cells[..cols].fill(CellState::Empty);
        Ok(Self { rows, cols, cells })
    }

    /// Creates a grid of `rows` rows seeded with `seed`; the column count is
    /// the seed's length.
    pub fn with_seed(seed: &[bool], rows: usize) -> Result<Self, GridError> {
        let mut grid = Self::new(rows, seed.len())?;
        grid.set_seed(seed)?;
        Ok(grid)
    }

    /// Builds a fully defined grid from explicit rows.
    ///
    /// All rows must share the first row's length.
    pub fn from_rows(rows: &[Vec<bool>]) -> Result<Self, GridError> {
        let cols = rows.first().map_or(0, Vec::len);
        let mut grid = Self::new(rows.len(), cols)?;
        for (r, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(GridError::DimensionMismatch {
                    expected: cols,
                    got: row.len(),
                });
            }
            grid.write_row(r, row);
        }
        Ok(grid)
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Read-only access to the row-major cell data.
    pub fn cells(&self) -> &[CellState] {
        &self.cells
    }

    /// State of the cell at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is outside the grid.
    pub fn get(&self, row: usize, col: usize) -> CellState {
        assert!(
            row < self.rows && col < self.cols,
            "cell ({row}, {col}) out of bounds for {}x{} grid",
            self.rows,
            self.cols
        );
        self.cells[row * self.cols + col]
    }

    /// Whether `(row, col)` is filled. Unset cells are not filled.
    pub fn is_filled(&self, row: usize, col: usize) -> bool {
        self.get(row, col).is_filled()
    }

    /// The cells of row `r`.
    pub fn row(&self, r: usize) -> &[CellState] {
        &self.cells[r * self.cols..(r + 1) * self.cols]
    }

    /// Whether every cell in row `r` has been defined.
    pub fn is_row_defined(&self, r: usize) -> bool {
        self.row(r).iter().all(|&c| c != CellState::Unset)
    }

    /// Row `r` as booleans, or `None` while it still contains unset cells.
    pub fn row_bools(&self, r: usize) -> Option<Vec<bool>> {
        self.is_row_defined(r)
            .then(|| self.row(r).iter().map(|c| c.is_filled()).collect())
    }

    /// Number of leading rows that are fully defined, seed row included.
    pub fn defined_rows(&self) -> usize {
        (0..self.rows)
            .take_while(|&r| self.is_row_defined(r))
            .count()
    }

    /// Total number of filled cells.
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_filled()).count()
    }

    /// Replaces the seed row and clears every generated row back to unset.
    ///
    /// Returns `GridError::DimensionMismatch` if `seed.len()` differs from the
    /// column count; the grid is left untouched in that case.
    pub fn set_seed(&mut self, seed: &[bool]) -> Result<(), GridError> {
        if seed.len() != self.cols {
            return Err(GridError::DimensionMismatch {
                expected: self.cols,
                got: seed.len(),
            });
        }
        self.write_row(0, seed);
        self.invalidate_from(1);
        Ok(())
    }

    /// Overwrites row `r`. The caller guarantees `row.len() == cols`.
    pub(crate) fn write_row(&mut self, r: usize, row: &[bool]) {
        debug_assert_eq!(row.len(), self.cols);
        let start = r * self.cols;
        for (cell, &filled) in self.cells[start..start + self.cols].iter_mut().zip(row) {
            *cell = CellState::from(filled);
        }
    }

    /// Marks rows `from..` as unset.
    pub(crate) fn invalidate_from(&mut self, from: usize) {
        let start = from.min(self.rows) * self.cols;
        self.cells[start..].fill(CellState::Unset);
    }

    /// Text rendering: one line per row, `#` filled, `.` empty, `?` unset.
    pub fn to_text(&self) -> String {
        let mut out = String::with_capacity(self.rows * (self.cols + 1));
        for r in 0..self.rows {
            out.extend(self.row(r).iter().map(|c| c.symbol()));
            out.push('\n');
        }
        out
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}
