//! Dense cost matrix representation
//!
//! The covering step of the Hungarian algorithm reads every cell of the
//! reduced cost matrix, so a flat row-major buffer is the natural layout.
//! The matrix is immutable once built; all per-iteration scratch state
//! lives in [`crate::cover::Mask`] instead.

use std::fmt;

use num_traits::Num;

use crate::error::{Error, Result};

/// An immutable rectangular cost matrix in row-major order
#[derive(Clone, PartialEq, Eq)]
pub struct CostMatrix<T> {
    /// Number of rows in the matrix
    n_rows: usize,

    /// Number of columns in the matrix
    n_cols: usize,

    /// Cell values, row-major (size: n_rows * n_cols)
    data: Vec<T>,
}

impl<T> CostMatrix<T>
where
    T: Copy + Num,
{
    /// Creates a matrix from pre-flattened row-major data
    ///
    /// # Panics
    ///
    /// Panics if the input is inconsistent:
    /// - n_rows and n_cols must both be non-zero
    /// - data.len() must equal n_rows * n_cols
    pub fn new(n_rows: usize, n_cols: usize, data: Vec<T>) -> Self {
        assert!(n_rows > 0, "matrix must have at least one row");
        assert!(n_cols > 0, "matrix must have at least one column");
        assert_eq!(
            data.len(),
            n_rows * n_cols,
            "data.len() must equal n_rows * n_cols"
        );

        Self {
            n_rows,
            n_cols,
            data,
        }
    }

    /// Builds a matrix from nested rows, validating the shape
    ///
    /// This is the fallible entry point for externally supplied grids:
    /// an empty grid or ragged rows yield a shape error rather than a panic.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self> {
        let n_rows = rows.len();
        if n_rows == 0 {
            return Err(Error::EmptyMatrix);
        }

        let n_cols = rows[0].len();
        if n_cols == 0 {
            return Err(Error::EmptyMatrix);
        }

        let mut data = Vec::with_capacity(n_rows * n_cols);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != n_cols {
                return Err(Error::NotRectangular {
                    row: i,
                    got: row.len(),
                    expected: n_cols,
                });
            }
            data.extend(row);
        }

        Ok(Self {
            n_rows,
            n_cols,
            data,
        })
    }

    /// Returns the number of rows
    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    /// Returns the number of columns
    pub fn n_cols(&self) -> usize {
        self.n_cols
    }

    /// Returns the value at (row, col)
    ///
    /// Out-of-range indices are a programming error and panic.
    pub fn value(&self, row: usize, col: usize) -> T {
        assert!(row < self.n_rows, "row index {} out of bounds", row);
        assert!(col < self.n_cols, "column index {} out of bounds", col);
        self.data[row * self.n_cols + col]
    }

    /// Returns row `row` as a slice
    pub fn row(&self, row: usize) -> &[T] {
        assert!(row < self.n_rows, "row index {} out of bounds", row);
        &self.data[row * self.n_cols..(row + 1) * self.n_cols]
    }

    /// Returns an iterator over the coordinates of every zero-valued cell,
    /// row-major order
    pub fn zero_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let n_cols = self.n_cols;
        self.data
            .iter()
            .enumerate()
            .filter(|(_, v)| v.is_zero())
            .map(move |(i, _)| (i / n_cols, i % n_cols))
    }
}

impl<T: fmt::Debug + Copy + Num> fmt::Debug for CostMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "CostMatrix {{")?;
        writeln!(f, "  dimensions: {} × {}", self.n_rows, self.n_cols)?;
        for i in 0..self.n_rows {
            writeln!(f, "  {:?}", self.row(i))?;
        }
        write!(f, "}}")
    }
}
