//! Fixed-size matrix types used by the boundary.
//!
//! Provides `DenseMatrix` (all N×N entries stored) and `DiagMatrix` (only the
//! N diagonal entries stored) plus their addition. Both are plain `Copy`
//! values sized at compile time.
pub mod add;
pub mod dense;
pub mod diag;

pub use add::{add_dense_diag, add_diag_dense};
pub use dense::DenseMatrix;
pub use diag::DiagMatrix;
