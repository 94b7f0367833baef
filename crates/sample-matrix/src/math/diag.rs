use std::ops::{Index, IndexMut};

use num_traits::Zero;

use super::dense::DenseMatrix;

/// Logical N×N matrix that stores only its diagonal.
///
/// Off-diagonal entries are implicitly zero and can be read through
/// [`DiagMatrix::get_full`] but never written.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DiagMatrix<T, const N: usize> {
    data: [T; N],
}

impl<T, const N: usize> DiagMatrix<T, N> {
    pub fn from_diagonal(data: [T; N]) -> Self {
        Self { data }
    }

    pub fn len(&self) -> usize {
        N
    }

    pub fn is_empty(&self) -> bool {
        N == 0
    }

    pub fn shape(&self) -> (usize, usize) {
        (N, N)
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    #[inline]
    fn check_index(i: usize) {
        assert!(i < N, "diagonal index {} out of bounds for size {}", i, N);
    }

    pub fn set(&mut self, i: usize, value: T) {
        Self::check_index(i);
        self.data[i] = value;
    }
}

impl<T: Copy, const N: usize> DiagMatrix<T, N> {
    pub fn get(&self, i: usize) -> T {
        Self::check_index(i);
        self.data[i]
    }
}

impl<T: Zero + Copy, const N: usize> DiagMatrix<T, N> {
    pub fn zeros() -> Self {
        Self {
            data: [T::zero(); N],
        }
    }

    /// Reads position (row, col) of the logical N×N matrix.
    pub fn get_full(&self, row: usize, col: usize) -> T {
        assert!(
            row < N && col < N,
            "index ({}, {}) out of bounds for {}x{} matrix",
            row,
            col,
            N,
            N
        );
        if row == col {
            self.data[row]
        } else {
            T::zero()
        }
    }

    pub fn to_dense(&self) -> DenseMatrix<T, N> {
        DenseMatrix::from_fn(|row, col| self.get_full(row, col))
    }
}

impl<T: Zero + Copy, const N: usize> Default for DiagMatrix<T, N> {
    fn default() -> Self {
        Self::zeros()
    }
}

impl<T, const N: usize> Index<usize> for DiagMatrix<T, N> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        Self::check_index(index);
        &self.data[index]
    }
}

impl<T, const N: usize> IndexMut<usize> for DiagMatrix<T, N> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        Self::check_index(index);
        &mut self.data[index]
    }
}
