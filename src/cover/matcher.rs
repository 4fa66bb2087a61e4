//! Greedy star matching over the zero cells
//!
//! One single pass in ascending row order: each row claims the first zero
//! still open in the mask, stars it, and crosses out its row and column so
//! later rows cannot reuse the column. The result is a maximal matching
//! between rows and columns via zeros, not necessarily a maximum one; the
//! convergence loop in [`crate::cover`] re-runs this pass with more columns
//! pre-crossed until the derived cover is complete.

use num_traits::Num;

use crate::cover::mask::{Cell, Mask};
use crate::matrix::CostMatrix;

/// Stars the first open zero of each row, crossing out the claimed row and
/// column as it goes
///
/// `mask` may arrive pre-crossed for previously discovered covering columns;
/// those cells are skipped. Rows with no open zero end up with no star.
pub fn star_zeros<T>(matrix: &CostMatrix<T>, mask: &mut Mask)
where
    T: Copy + Num,
{
    for r in 0..matrix.n_rows() {
        let first_zero = (0..matrix.n_cols())
            .find(|&c| mask.cell(r, c) == Cell::Open && matrix.value(r, c).is_zero());

        if let Some(c) = first_zero {
            mask.cross_out(Some(r), Some(c));
            mask.star(r, c);
        }
    }
}
