//! # linecover: minimum line cover of matrix zeros
//!
//! This library implements the "draw minimum lines through zeros" step of
//! the Hungarian (Munkres) assignment algorithm: given a reduced cost
//! matrix, find a small set of full rows and/or columns such that every
//! zero-valued cell lies on at least one selected line. By König's theorem
//! the minimum size of such a cover equals the size of a maximum matching
//! between rows and columns through zero cells, which is what lets the
//! Hungarian algorithm decide whether an optimal assignment exists yet.
//!
//! The matching inside the loop is greedy rather than augmenting-path
//! maximum, so certain adversarial zero patterns yield a valid but
//! non-minimum cover (one line more than König's bound); typical
//! reduction-produced matrices get the exact minimum.
//!
//! ## Algorithm Components
//!
//! 1. **Greedy star matching**: each row claims the first zero whose row
//!    and column are still free, building a maximal row-column matching.
//!
//! 2. **König marking**: rows the matching left unassigned are marked,
//!    then columns holding their zeros, then rows starred in those
//!    columns.
//!
//! 3. **Convergence loop**: marked columns accumulate and are crossed out
//!    before the next matching pass, repeating until every zero lies on a
//!    marked column or an unmarked row. Those columns and rows are the
//!    cover.
//!
//! Matrix reduction and the assignment itself are out of scope; this crate
//! only covers a given zero pattern.
//!
//! ## Usage
//!
//! ```
//! use linecover::min_line_cover;
//!
//! let grid = vec![
//!     vec![0, 1, 2],
//!     vec![0, 3, 4],
//!     vec![0, 5, 6],
//! ];
//!
//! let lines = min_line_cover(grid).unwrap();
//! // All zeros sit in column 0, so one column line covers them.
//! assert_eq!(lines, vec![linecover::Line::column(0)]);
//! ```

pub mod codec;
pub mod cover;
pub mod error;
pub mod matrix;

// Re-export primary components
pub use codec::{lines_to_json, matrix_from_json};
pub use cover::{find_cover, Cell, Line, LineKind, Mask};
pub use error::{Error, Result};
pub use matrix::CostMatrix;

use num_traits::Num;

/// Computes a minimum line cover for the zeros of a nested-row grid.
///
/// This is the main entry point for the library: it validates the grid
/// shape and runs the covering algorithm.
///
/// # Arguments
///
/// * `rows` - The cost matrix as nested rows of equal length
///
/// # Returns
///
/// The covering lines: column lines first in discovery order, then row
/// lines in ascending index order. Every zero cell of the input lies on at
/// least one returned line. A grid with no zeros is covered by all of its
/// rows. On some adversarial zero patterns the cover is valid but one line
/// larger than the true minimum (see the crate-level docs).
///
/// # Errors
///
/// Returns a shape error if the grid is empty or not rectangular.
///
/// # Examples
///
/// ```
/// use linecover::{min_line_cover, Line};
///
/// let lines = min_line_cover(vec![vec![0, 5], vec![3, 7]]).unwrap();
/// assert_eq!(lines, vec![Line::row(0)]);
/// ```
pub fn min_line_cover<T>(rows: Vec<Vec<T>>) -> Result<Vec<Line>>
where
    T: Copy + Num,
{
    let matrix = CostMatrix::from_rows(rows)?;
    Ok(find_cover(&matrix))
}

/// Version information for the linecover library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
