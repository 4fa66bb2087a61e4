//! Error types for linecover

use thiserror::Error;

/// Result type alias using linecover's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or decoding a cost matrix
///
/// The covering algorithm itself has no recoverable failure modes: once a
/// matrix passes shape validation, it always terminates with a valid cover.
#[derive(Error, Debug)]
pub enum Error {
    /// The matrix has no rows
    #[error("matrix must contain at least one row")]
    EmptyMatrix,

    /// A row's length disagrees with the first row's length
    #[error("matrix is not rectangular: row {row} has {got} columns, expected {expected}")]
    NotRectangular {
        /// Index of the offending row
        row: usize,
        /// Length of the offending row
        got: usize,
        /// Length of row 0
        expected: usize,
    },

    /// The persisted JSON representation could not be read or written
    #[error("JSON codec error: {0}")]
    Json(#[from] serde_json::Error),
}
