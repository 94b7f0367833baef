//! sample-matrix: fixed-size dense + diagonal matrix addition behind a
//! shape-checked buffer boundary.
//!
//! The crate is split into the typed matrix library (`math`), the owned
//! instance that performs the addition (`sample`), and the marshaler that
//! adapts row-major host buffers to and from the typed forms (`marshal`).
//! Matrix sizes are const generics; the boundary defaults them to
//! [`MATRIX_SIZE`].
pub mod config;
pub mod error;
pub mod logging;
pub mod marshal;
pub mod math;
pub mod sample;

pub use config::MarshalConfig;
pub use error::MatrixError;
pub use marshal::MatrixSil;
pub use math::{add_dense_diag, add_diag_dense, DenseMatrix, DiagMatrix};
pub use sample::SampleMatrix;

/// Element type used by the boundary for the whole build.
pub type Float = f64;

/// Compiled-in matrix dimension N.
pub const MATRIX_SIZE: usize = 3;
