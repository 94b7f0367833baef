use std::fmt;
use std::ops::{Index, IndexMut};

use num_traits::Zero;

/// N×N matrix with every entry stored, row-major.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DenseMatrix<T, const N: usize> {
    data: [[T; N]; N],
}

impl<T, const N: usize> DenseMatrix<T, N> {
    pub fn from_rows(data: [[T; N]; N]) -> Self {
        Self { data }
    }

    /// Builds the matrix by evaluating `f(row, col)` for every position.
    pub fn from_fn<F>(mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        Self {
            data: std::array::from_fn(|row| std::array::from_fn(|col| f(row, col))),
        }
    }

    pub fn nrows(&self) -> usize {
        N
    }

    pub fn ncols(&self) -> usize {
        N
    }

    pub fn shape(&self) -> (usize, usize) {
        (N, N)
    }

    pub fn rows(&self) -> &[[T; N]; N] {
        &self.data
    }

    pub fn row_slice(&self, row: usize) -> &[T] {
        assert!(row < N, "row index {} out of bounds for {}x{} matrix", row, N, N);
        &self.data[row]
    }

    #[inline]
    fn check_index(row: usize, col: usize) {
        assert!(
            row < N && col < N,
            "index ({}, {}) out of bounds for {}x{} matrix",
            row,
            col,
            N,
            N
        );
    }

    pub fn set(&mut self, row: usize, col: usize, value: T) {
        Self::check_index(row, col);
        self.data[row][col] = value;
    }

    pub fn mapv<U, F>(&self, mut f: F) -> DenseMatrix<U, N>
    where
        F: FnMut(&T) -> U,
    {
        DenseMatrix::from_fn(|row, col| f(&self.data[row][col]))
    }
}

impl<T: Copy, const N: usize> DenseMatrix<T, N> {
    pub fn get(&self, row: usize, col: usize) -> T {
        Self::check_index(row, col);
        self.data[row][col]
    }

    /// Main diagonal, `[A(0,0), A(1,1), ..]`.
    pub fn diagonal(&self) -> [T; N] {
        std::array::from_fn(|i| self.data[i][i])
    }

    /// Row-major copy of all N² entries.
    pub fn to_vec(&self) -> Vec<T> {
        let mut values = Vec::with_capacity(N * N);
        for row in &self.data {
            values.extend_from_slice(row);
        }
        values
    }
}

impl<T: Zero + Copy, const N: usize> DenseMatrix<T, N> {
    pub fn zeros() -> Self {
        Self {
            data: [[T::zero(); N]; N],
        }
    }
}

impl<T: Zero + Copy, const N: usize> Default for DenseMatrix<T, N> {
    fn default() -> Self {
        Self::zeros()
    }
}

impl<T, const N: usize> Index<(usize, usize)> for DenseMatrix<T, N> {
    type Output = T;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        Self::check_index(index.0, index.1);
        &self.data[index.0][index.1]
    }
}

impl<T, const N: usize> IndexMut<(usize, usize)> for DenseMatrix<T, N> {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Self::Output {
        Self::check_index(index.0, index.1);
        &mut self.data[index.0][index.1]
    }
}

impl<T: fmt::Display, const N: usize> fmt::Display for DenseMatrix<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (row_idx, row) in self.data.iter().enumerate() {
            write!(f, "[")?;
            for (col_idx, value) in row.iter().enumerate() {
                write!(f, "{}", value)?;
                if col_idx + 1 != N {
                    write!(f, ", ")?;
                }
            }
            write!(f, "]")?;
            if row_idx + 1 != N {
                writeln!(f)?;
                write!(f, " ")?;
            }
        }
        write!(f, "]")
    }
}
