//! Working mask over a cost matrix
//!
//! A [`Mask`] is the per-iteration scratch grid of the covering algorithm.
//! It never stores cost values; each cell only records whether the
//! corresponding matrix cell is still in play (`Open`), has been crossed
//! out by a covering line (`Crossed`), or holds a tentative assignment
//! (`Starred`). A fresh all-open mask is rebuilt from the matrix
//! dimensions at the start of every phase that needs one.

/// State of a single mask cell
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cell {
    /// Matrix value still visible, not yet decided
    Open,
    /// Excluded from consideration for this iteration
    Crossed,
    /// Selected as part of the tentative row-column matching
    Starred,
}

/// A mutable grid of [`Cell`] states with the same dimensions as the matrix
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Mask {
    n_rows: usize,
    n_cols: usize,
    cells: Vec<Cell>,
}

impl Mask {
    /// Creates an all-open mask with the given dimensions
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    pub fn fresh(n_rows: usize, n_cols: usize) -> Self {
        assert!(n_rows > 0, "mask must have at least one row");
        assert!(n_cols > 0, "mask must have at least one column");
        Self {
            n_rows,
            n_cols,
            cells: vec![Cell::Open; n_rows * n_cols],
        }
    }

    /// Returns the state of cell (row, col)
    pub fn cell(&self, row: usize, col: usize) -> Cell {
        assert!(row < self.n_rows, "row index {} out of bounds", row);
        assert!(col < self.n_cols, "column index {} out of bounds", col);
        self.cells[row * self.n_cols + col]
    }

    /// Stamps `Crossed` over an entire row and/or an entire column
    ///
    /// At least one of `row`/`col` must be supplied; passing neither is a
    /// programming error, as is an out-of-range index.
    pub fn cross_out(&mut self, row: Option<usize>, col: Option<usize>) {
        assert!(
            row.is_some() || col.is_some(),
            "cross_out requires a row or a column"
        );

        if let Some(c) = col {
            assert!(c < self.n_cols, "column index {} out of bounds", c);
            for r in 0..self.n_rows {
                self.cells[r * self.n_cols + c] = Cell::Crossed;
            }
        }
        if let Some(r) = row {
            assert!(r < self.n_rows, "row index {} out of bounds", r);
            for cell in &mut self.cells[r * self.n_cols..(r + 1) * self.n_cols] {
                *cell = Cell::Crossed;
            }
        }
    }

    /// Marks cell (row, col) as starred
    ///
    /// Callers cross out the star's row and column first, then star the
    /// cell itself, so the star overwrites the cross at that position.
    pub fn star(&mut self, row: usize, col: usize) {
        assert!(row < self.n_rows, "row index {} out of bounds", row);
        assert!(col < self.n_cols, "column index {} out of bounds", col);
        self.cells[row * self.n_cols + col] = Cell::Starred;
    }

    /// Returns true if row `row` contains a starred cell
    pub fn row_has_star(&self, row: usize) -> bool {
        assert!(row < self.n_rows, "row index {} out of bounds", row);
        self.cells[row * self.n_cols..(row + 1) * self.n_cols]
            .iter()
            .any(|&c| c == Cell::Starred)
    }
}
