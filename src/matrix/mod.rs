// Matrix data structures

pub mod dense;

pub use dense::CostMatrix;
