//! JSON codec for matrices and line lists
//!
//! The covering core is persistence-agnostic; these helpers adapt it to the
//! nested-array JSON representation used by callers: a grid is an array of
//! equal-length numeric arrays, and the result is an array of
//! `[kind, index]` pairs such as `[["column", 0], ["row", 4]]`.

use num_traits::Num;
use serde::de::DeserializeOwned;

use crate::cover::{Line, LineKind};
use crate::error::Result;
use crate::matrix::CostMatrix;

/// Decodes a nested-array JSON grid into a validated cost matrix
///
/// Fails fast with a codec error on malformed JSON or non-numeric entries,
/// and with a shape error on an empty or non-rectangular grid.
pub fn matrix_from_json<T>(input: &str) -> Result<CostMatrix<T>>
where
    T: Copy + Num + DeserializeOwned,
{
    let rows: Vec<Vec<T>> = serde_json::from_str(input)?;
    CostMatrix::from_rows(rows)
}

/// Encodes a line list as a JSON array of `[kind, index]` pairs,
/// preserving line order
pub fn lines_to_json(lines: &[Line]) -> Result<String> {
    let wire: Vec<(LineKind, usize)> = lines.iter().map(|l| (l.kind, l.index)).collect();
    Ok(serde_json::to_string(&wire)?)
}
