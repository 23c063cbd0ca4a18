//! FILENAME: values/src/values2d.rs
//! PURPOSE: The read-only 2D numeric view that aggregation functions consume.
//! CONTEXT: This file defines the `Values2D` trait (row count, column count,
//! bounds-checked value lookup) and `ArrayValues2D`, a minimal dense
//! in-memory implementation. Cells hold `Option<f64>`: `None` is an empty
//! cell, which aggregation treats as contributing zero.

use serde::{Deserialize, Serialize};
use crate::error::DataError;

/// A read-only rectangular view of numeric values, accessed by 0-based
/// (row, column) indices.
///
/// Implementations must keep `value_at` defined exactly on
/// `[0, row_count()) x [0, column_count())`; out-of-range access fails
/// with `DataError::IndexOutOfRange` rather than returning a sentinel.
pub trait Values2D {
    /// Number of rows in the view.
    fn row_count(&self) -> usize;

    /// Number of columns in the view.
    fn column_count(&self) -> usize;

    /// Returns the value at (row, col). `Ok(None)` means the cell is
    /// empty; an index outside the view fails with `IndexOutOfRange`.
    fn value_at(&self, row: usize, col: usize) -> Result<Option<f64>, DataError>;
}

/// A dense, rectangular, in-memory `Values2D` implementation.
///
/// The spreadsheet-style sparse storage used elsewhere pays off when most
/// cells are empty; aggregation inputs are small and dense, so a plain
/// row-major `Vec<Vec<Option<f64>>>` is the right fit here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArrayValues2D {
    /// Row-major cell storage. Every inner vec has length `cols`.
    cells: Vec<Vec<Option<f64>>>,

    /// Number of columns (uniform across rows).
    cols: usize,
}

impl ArrayValues2D {
    /// Creates a grid of the given dimensions with every cell empty.
    pub fn new(rows: usize, cols: usize) -> Self {
        ArrayValues2D {
            cells: vec![vec![None; cols]; rows],
            cols,
        }
    }

    /// Builds a grid from fully-populated rows.
    ///
    /// All rows must have the same length; ragged input fails with
    /// `InvalidArgument`. An empty input produces a 0x0 grid.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, DataError> {
        let cols = rows.first().map_or(0, |r| r.len());
        for (i, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(DataError::InvalidArgument(format!(
                    "row {} has length {}, expected {}",
                    i,
                    row.len(),
                    cols
                )));
            }
        }

        let cells = rows
            .into_iter()
            .map(|row| row.into_iter().map(Some).collect())
            .collect();
        Ok(ArrayValues2D { cells, cols })
    }

    /// Sets a cell, bounds-checked. `None` clears the cell.
    pub fn set_value(
        &mut self,
        row: usize,
        col: usize,
        value: Option<f64>,
    ) -> Result<(), DataError> {
        let rows = self.cells.len();
        if row >= rows {
            return Err(DataError::bad_row(row, rows));
        }
        if col >= self.cols {
            return Err(DataError::bad_column(col, self.cols));
        }
        self.cells[row][col] = value;
        Ok(())
    }
}

impl Values2D for ArrayValues2D {
    fn row_count(&self) -> usize {
        self.cells.len()
    }

    fn column_count(&self) -> usize {
        self.cols
    }

    fn value_at(&self, row: usize, col: usize) -> Result<Option<f64>, DataError> {
        let rows = self.cells.len();
        if row >= rows {
            return Err(DataError::bad_row(row, rows));
        }
        if col >= self.cols {
            return Err(DataError::bad_column(col, self.cols));
        }
        Ok(self.cells[row][col])
    }
}
