//! Adds diag(1, 2, 3) to a 3x3 dense matrix through the buffer boundary.
//!
//! Run with `SAMPLE_MATRIX_LOG=debug` to see the boundary's shape logging.

use anyhow::Result;
use ndarray::{array, Array2};

use sample_matrix::logging::init_logging;
use sample_matrix::{MarshalConfig, MatrixSil};

fn main() -> Result<()> {
    let config = MarshalConfig::default();
    init_logging(&config.log_filter);

    let a = array![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]];
    let b = Array2::from_diag(&array![1.0, 2.0, 3.0]);

    let mut sil: MatrixSil = MatrixSil::with_config(config);
    sil.initialize();

    let c = sil.add(&a, &b)?;
    println!("Matrix Addition, result:\n{}", c);

    Ok(())
}
