//! Minimum line cover of the zero cells of a cost matrix
//!
//! The algorithm alternates two passes until the derived cover is complete:
//!
//! 1. **Greedy star matching** ([`matcher`]): each row claims the first
//!    zero whose row and column are still free, giving a maximal matching
//!    between rows and columns.
//! 2. **König marking** ([`marker`]): starting from rows the matching left
//!    unassigned, walk zero-edges to columns and starred edges back to
//!    rows.
//!
//! Marked columns accumulate across iterations and are crossed out before
//! the next matching pass, so each repeat of the marker reaches deeper into
//! the alternating structure than a single pass would. The loop stops once
//! every zero lies on a marked column or on a row outside the marked-row
//! set; those columns plus the unmarked rows are the cover.

pub mod lines;
pub mod marker;
pub mod mask;
pub mod matcher;

pub use lines::{Line, LineKind};
pub use mask::{Cell, Mask};

use log::{debug, trace};
use num_traits::Num;

use crate::matrix::CostMatrix;

/// Computes a covering line set for the zero cells of `matrix`
///
/// Always terminates: the accumulated column set grows monotonically and is
/// bounded by the column count. A matrix without zeros skips the loop
/// entirely and is covered by its full row set.
pub fn find_cover<T>(matrix: &CostMatrix<T>) -> Vec<Line>
where
    T: Copy + Num,
{
    cover_counting_passes(matrix).0
}

/// Runs the convergence loop, also reporting how many matcher+marker
/// passes it took. A pass that discovers no new column leaves no zero
/// open, so every continuing pass grows the column set and the count
/// never exceeds the column count.
fn cover_counting_passes<T>(matrix: &CostMatrix<T>) -> (Vec<Line>, usize)
where
    T: Copy + Num,
{
    let n_rows = matrix.n_rows();
    let n_cols = matrix.n_cols();

    let mut marked_rows: Vec<usize> = Vec::new();
    let mut marked_cols: Vec<usize> = Vec::new();

    let mut view = Mask::fresh(n_rows, n_cols);
    let mut pass = 0usize;
    while has_open_zero(matrix, &view) {
        pass += 1;
        trace!("cover pass {pass}: {} columns marked so far", marked_cols.len());

        let mut mask = Mask::fresh(n_rows, n_cols);
        for &c in &marked_cols {
            mask.cross_out(None, Some(c));
        }
        matcher::star_zeros(matrix, &mut mask);

        let (rows, cols) = marker::mark(matrix, &mask);

        // The marker recomputes the row set from scratch each pass; only
        // the column set accumulates.
        marked_rows = rows;
        for c in cols {
            if !marked_cols.contains(&c) {
                marked_cols.push(c);
            }
        }
        debug!(
            "cover pass {pass}: {} marked rows, {} marked columns",
            marked_rows.len(),
            marked_cols.len()
        );

        // Rebuild the test view: unmarked rows and marked columns are the
        // candidate cover; any zero still open means another pass.
        view = Mask::fresh(n_rows, n_cols);
        for r in (0..n_rows).filter(|r| !marked_rows.contains(r)) {
            view.cross_out(Some(r), None);
        }
        for &c in &marked_cols {
            view.cross_out(None, Some(c));
        }
    }

    (
        lines::extract_lines(n_rows, &marked_rows, &marked_cols),
        pass,
    )
}

/// Returns true if any zero cell of the matrix is still open in the mask
fn has_open_zero<T>(matrix: &CostMatrix<T>, mask: &Mask) -> bool
where
    T: Copy + Num,
{
    matrix
        .zero_cells()
        .any(|(r, c)| mask.cell(r, c) == Cell::Open)
}
