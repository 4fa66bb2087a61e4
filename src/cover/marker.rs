//! König-style alternating marking
//!
//! One fixed three-step pass of the marking procedure behind König's
//! theorem (minimum vertex cover from maximum matching in a bipartite
//! graph): start from rows the matching left unassigned, walk zero-edges
//! to columns, then walk starred edges back to rows. Deeper propagation is
//! deliberately left to the convergence loop, which re-runs this pass with
//! the discovered columns folded back in.

use num_traits::Num;

use crate::cover::mask::{Cell, Mask};
use crate::matrix::CostMatrix;

/// Runs one marking pass over a starred mask
///
/// Returns `(rows, cols)`:
/// 1. `rows` starts as every row with no starred cell;
/// 2. `cols` collects, deduplicated in discovery order, every column
///    holding a matrix zero in one of those rows;
/// 3. `rows` is then extended with every row whose star sits in one of
///    those columns.
pub fn mark<T>(matrix: &CostMatrix<T>, mask: &Mask) -> (Vec<usize>, Vec<usize>)
where
    T: Copy + Num,
{
    let mut rows: Vec<usize> = (0..matrix.n_rows())
        .filter(|&r| !mask.row_has_star(r))
        .collect();

    let mut cols: Vec<usize> = Vec::new();
    for &r in &rows {
        for (c, v) in matrix.row(r).iter().enumerate() {
            if v.is_zero() && !cols.contains(&c) {
                cols.push(c);
            }
        }
    }

    // Each row holds at most one star, so these additions cannot duplicate.
    for &c in &cols {
        for r in 0..matrix.n_rows() {
            if mask.cell(r, c) == Cell::Starred {
                rows.push(r);
            }
        }
    }

    (rows, cols)
}
