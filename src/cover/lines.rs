//! Covering line descriptors and final extraction

use serde::{Deserialize, Serialize};

/// Whether a covering line runs along a row or a column
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineKind {
    Row,
    Column,
}

/// A single covering line: a full row or a full column of the matrix
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Line {
    pub kind: LineKind,
    pub index: usize,
}

impl Line {
    /// A line covering row `index`
    pub fn row(index: usize) -> Self {
        Self {
            kind: LineKind::Row,
            index,
        }
    }

    /// A line covering column `index`
    pub fn column(index: usize) -> Self {
        Self {
            kind: LineKind::Column,
            index,
        }
    }

    /// Returns true if this line passes through cell (row, col)
    pub fn covers(&self, row: usize, col: usize) -> bool {
        match self.kind {
            LineKind::Row => self.index == row,
            LineKind::Column => self.index == col,
        }
    }
}

/// Converts the final marking into the output line list
///
/// The König construction inverts the row marking: the minimum cover is the
/// marked columns plus the *unmarked* rows. Column lines come first, in
/// discovery order, then row lines in ascending index order. When nothing
/// is marked (a matrix with no zeros) every row becomes a line.
pub(crate) fn extract_lines(
    n_rows: usize,
    marked_rows: &[usize],
    marked_cols: &[usize],
) -> Vec<Line> {
    let mut lines: Vec<Line> = marked_cols.iter().map(|&c| Line::column(c)).collect();
    lines.extend(
        (0..n_rows)
            .filter(|r| !marked_rows.contains(r))
            .map(Line::row),
    );
    lines
}
