//! Dense + diagonal addition.

use std::ops::Add;

use num_traits::Zero;

use super::{DenseMatrix, DiagMatrix};

/// `result(i, j) = a(i, j) + (i == j ? b(i) : 0)` for every position.
pub fn add_dense_diag<T, const N: usize>(
    a: &DenseMatrix<T, N>,
    b: &DiagMatrix<T, N>,
) -> DenseMatrix<T, N>
where
    T: Copy + Zero + Add<Output = T>,
{
    DenseMatrix::from_fn(|row, col| a[(row, col)] + b.get_full(row, col))
}

/// Same as [`add_dense_diag`] with the operands in the other order.
pub fn add_diag_dense<T, const N: usize>(
    a: &DiagMatrix<T, N>,
    b: &DenseMatrix<T, N>,
) -> DenseMatrix<T, N>
where
    T: Copy + Zero + Add<Output = T>,
{
    DenseMatrix::from_fn(|row, col| a.get_full(row, col) + b[(row, col)])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adds_only_on_the_diagonal() {
        let a = DenseMatrix::from_rows([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]);
        let b = DiagMatrix::from_diagonal([1.0, 2.0, 3.0]);
        let c = add_dense_diag(&a, &b);
        assert_eq!(
            c,
            DenseMatrix::from_rows([[2.0, 2.0, 3.0], [4.0, 7.0, 6.0], [7.0, 8.0, 12.0]])
        );
    }

    #[test]
    fn both_operand_orders_agree() {
        let a = DenseMatrix::from_fn(|r, c| (r * 4 + c) as f64 - 3.5);
        let b = DiagMatrix::from_diagonal([0.25, -1.0, 8.0, 0.0]);
        assert_eq!(add_dense_diag(&a, &b), add_diag_dense(&b, &a));
    }

    #[test]
    fn matches_densified_elementwise_sum() {
        let a = DenseMatrix::from_fn(|r, c| (r + 2 * c) as i64);
        let b = DiagMatrix::from_diagonal([10i64, 20, 30]);
        let dense_b = b.to_dense();
        let expected = DenseMatrix::from_fn(|r, c| a[(r, c)] + dense_b[(r, c)]);
        assert_eq!(add_dense_diag(&a, &b), expected);
    }
}
