use crate::math::{add_dense_diag, DenseMatrix, DiagMatrix};
use crate::{Float, MATRIX_SIZE};

pub type DenseMatrixType<const N: usize> = DenseMatrix<Float, N>;
pub type DiagMatrixType<const N: usize> = DiagMatrix<Float, N>;

/// Owner of the matrix operation exposed at the boundary.
#[derive(Clone, Debug, PartialEq)]
pub struct SampleMatrix<const N: usize = MATRIX_SIZE> {
    data: DenseMatrixType<N>,
}

impl<const N: usize> SampleMatrix<N> {
    pub fn new() -> Self {
        Self {
            data: DenseMatrix::zeros(),
        }
    }

    /// Internal grid; zero for a freshly constructed instance.
    pub fn data(&self) -> &DenseMatrixType<N> {
        &self.data
    }

    pub fn add(&self, a: &DenseMatrixType<N>, b: &DiagMatrixType<N>) -> DenseMatrixType<N> {
        add_dense_diag(a, b)
    }
}

impl<const N: usize> Default for SampleMatrix<N> {
    fn default() -> Self {
        Self::new()
    }
}
