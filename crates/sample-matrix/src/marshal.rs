//! Boundary between host-owned row-major buffers and the typed matrices.
//!
//! Every call validates both operand shapes before copying anything, builds a
//! `DenseMatrix` from all of `A` and a `DiagMatrix` from the diagonal
//! positions of `B`, adds them, and copies the result into a freshly
//! allocated `N×N` buffer. Input buffers are only read.
//!
//! `B` is passed as a full `N×N` grid but only `B[i][i]` is read; whatever the
//! caller stores off the diagonal is ignored.

use log::{debug, trace};
use ndarray::{Array2, ArrayBase, ArrayView2, Data, Ix2, IxDyn};

use crate::config::MarshalConfig;
use crate::error::MatrixError;
use crate::math::{DenseMatrix, DiagMatrix};
use crate::sample::{DenseMatrixType, DiagMatrixType, SampleMatrix};
use crate::{Float, MATRIX_SIZE};

/// Boundary handle owning the matrix instance it calls into.
#[derive(Clone, Debug)]
pub struct MatrixSil<const N: usize = MATRIX_SIZE> {
    instance: SampleMatrix<N>,
    config: MarshalConfig,
}

impl<const N: usize> MatrixSil<N> {
    pub fn new() -> Self {
        Self::with_config(MarshalConfig::default())
    }

    pub fn with_config(config: MarshalConfig) -> Self {
        Self {
            instance: SampleMatrix::new(),
            config,
        }
    }

    /// Replace the owned instance with a fresh zero-valued one.
    ///
    /// Calling `add` without ever calling this is fine; so is calling it
    /// repeatedly.
    pub fn initialize(&mut self) {
        debug!("Resetting {}x{} matrix instance", N, N);
        self.instance = SampleMatrix::new();
    }

    pub fn instance(&self) -> &SampleMatrix<N> {
        &self.instance
    }

    pub fn config(&self) -> &MarshalConfig {
        &self.config
    }

    /// Add dense `a` to the diagonal of `b`, returning a new `N×N` array.
    pub fn add<SA, SB>(
        &self,
        a: &ArrayBase<SA, Ix2>,
        b: &ArrayBase<SB, Ix2>,
    ) -> Result<Array2<Float>, MatrixError>
    where
        SA: Data<Elem = Float>,
        SB: Data<Elem = Float>,
    {
        debug!(
            "add: A shape {:?}, B shape {:?}, N = {}",
            a.shape(),
            b.shape(),
            N
        );
        self.check_shape(a.dim())?;
        self.check_shape(b.dim())?;

        let a = dense_from_view(a.view());
        let b = diag_from_view(b.view());

        let result = self.instance.add(&a, &b);
        trace!("add result:\n{}", result);

        Ok(dense_to_array(&result))
    }

    /// Same as [`MatrixSil::add`] for flat row-major slices with an explicit
    /// `(rows, cols)` shape. Returns the result flattened row-major.
    pub fn add_raw(
        &self,
        a: &[Float],
        a_shape: (usize, usize),
        b: &[Float],
        b_shape: (usize, usize),
    ) -> Result<Vec<Float>, MatrixError> {
        let a = view_from_slice(a, a_shape)?;
        let b = view_from_slice(b, b_shape)?;
        let result = self.add(&a, &b)?;
        Ok(result.iter().copied().collect())
    }

    /// Same as [`MatrixSil::add`] for arrays whose dimensionality is only
    /// known at run time, as handed over by a dynamically typed host.
    ///
    /// The first-dimension extent is checked before anything else; a buffer
    /// that then turns out not to be two-dimensional fails with the same
    /// shape error.
    pub fn add_dyn<SA, SB>(
        &self,
        a: &ArrayBase<SA, IxDyn>,
        b: &ArrayBase<SB, IxDyn>,
    ) -> Result<Array2<Float>, MatrixError>
    where
        SA: Data<Elem = Float>,
        SB: Data<Elem = Float>,
    {
        let a = self.matrix_view(a)?;
        let b = self.matrix_view(b)?;
        self.add(&a, &b)
    }

    fn matrix_view<'a, S>(
        &self,
        buf: &'a ArrayBase<S, IxDyn>,
    ) -> Result<ArrayView2<'a, Float>, MatrixError>
    where
        S: Data<Elem = Float>,
    {
        let shape = buf.shape();
        let rows = shape.first().copied().unwrap_or(0);
        if rows != N {
            return Err(MatrixError::Shape {
                expected: N,
                found: rows,
                axis: 0,
            });
        }
        match shape.len() {
            2 => {}
            // missing axis counts as extent 0
            1 => {
                return Err(MatrixError::Shape {
                    expected: N,
                    found: 0,
                    axis: 1,
                })
            }
            _ => {
                return Err(MatrixError::Shape {
                    expected: N,
                    found: shape[2],
                    axis: 2,
                })
            }
        }
        buf.view()
            .into_dimensionality::<Ix2>()
            .map_err(|_| MatrixError::Shape {
                expected: N,
                found: rows,
                axis: 0,
            })
    }

    fn check_shape(&self, (rows, cols): (usize, usize)) -> Result<(), MatrixError> {
        if rows != N {
            return Err(MatrixError::Shape {
                expected: N,
                found: rows,
                axis: 0,
            });
        }
        // A short row can not be read whether or not strict checking is on.
        if cols < N || (self.config.check_columns && cols != N) {
            return Err(MatrixError::Shape {
                expected: N,
                found: cols,
                axis: 1,
            });
        }
        Ok(())
    }
}

impl<const N: usize> Default for MatrixSil<N> {
    fn default() -> Self {
        Self::new()
    }
}

fn view_from_slice(
    data: &[Float],
    shape: (usize, usize),
) -> Result<ArrayView2<'_, Float>, MatrixError> {
    let layout_err = || MatrixError::Layout {
        shape,
        len: data.len(),
    };
    if shape.0.checked_mul(shape.1) != Some(data.len()) {
        return Err(layout_err());
    }
    ArrayView2::from_shape(shape, data).map_err(|_| layout_err())
}

/// Copies the leading `N×N` block, by logical index so any stride works.
fn dense_from_view<const N: usize>(view: ArrayView2<'_, Float>) -> DenseMatrixType<N> {
    DenseMatrix::from_fn(|row, col| view[[row, col]])
}

fn diag_from_view<const N: usize>(view: ArrayView2<'_, Float>) -> DiagMatrixType<N> {
    DiagMatrix::from_diagonal(std::array::from_fn(|i| view[[i, i]]))
}

fn dense_to_array<const N: usize>(matrix: &DenseMatrixType<N>) -> Array2<Float> {
    Array2::from_shape_fn((N, N), |(row, col)| matrix[(row, col)])
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn rejects_wrong_row_count_before_copy() {
        let sil: MatrixSil = MatrixSil::new();
        let a = Array2::<Float>::zeros((4, 3));
        let b = Array2::<Float>::zeros((3, 3));
        let err = sil.add(&a, &b).unwrap_err();
        assert_eq!(
            err,
            MatrixError::Shape {
                expected: 3,
                found: 4,
                axis: 0
            }
        );
    }

    #[test]
    fn wide_buffer_accepted_when_column_check_off() {
        let sil: MatrixSil<2> = MatrixSil::with_config(MarshalConfig::new(false));
        let a = array![[1.0, 2.0, 99.0], [3.0, 4.0, 99.0]];
        let b = array![[10.0, 0.0], [0.0, 20.0]];
        assert_eq!(sil.add(&a, &b).unwrap(), array![[11.0, 2.0], [3.0, 24.0]]);
    }

    #[test]
    fn narrow_buffer_rejected_even_without_column_check() {
        let sil: MatrixSil<2> = MatrixSil::with_config(MarshalConfig::new(false));
        let a = array![[1.0], [3.0]];
        let b = array![[10.0, 0.0], [0.0, 20.0]];
        assert!(matches!(
            sil.add(&a, &b),
            Err(MatrixError::Shape { axis: 1, found: 1, .. })
        ));
    }

    #[test]
    fn reads_transposed_view_by_logical_index() {
        let sil: MatrixSil<2> = MatrixSil::new();
        let a = array![[1.0, 2.0], [3.0, 4.0]];
        let b = Array2::<Float>::zeros((2, 2));
        let out = sil.add(&a.t(), &b).unwrap();
        assert_eq!(out, array![[1.0, 3.0], [2.0, 4.0]]);
    }

    #[test]
    fn dyn_one_dimensional_buffer_is_a_shape_error() {
        let sil: MatrixSil = MatrixSil::new();
        let a = ndarray::ArrayD::<Float>::zeros(IxDyn(&[3]));
        let b = ndarray::ArrayD::<Float>::zeros(IxDyn(&[3, 3]));
        assert_eq!(
            sil.add_dyn(&a, &b).unwrap_err(),
            MatrixError::Shape {
                expected: 3,
                found: 0,
                axis: 1
            }
        );
    }

    #[test]
    fn dyn_checks_first_dimension_before_rank() {
        let sil: MatrixSil = MatrixSil::new();
        let a = ndarray::ArrayD::<Float>::zeros(IxDyn(&[3, 3]));
        let b = ndarray::ArrayD::<Float>::zeros(IxDyn(&[2, 3, 3]));
        assert!(matches!(
            sil.add_dyn(&a, &b),
            Err(MatrixError::Shape { axis: 0, found: 2, .. })
        ));
    }

    #[test]
    fn raw_slice_length_must_match_shape() {
        let sil: MatrixSil = MatrixSil::new();
        let a = vec![0.0; 8];
        let b = vec![0.0; 9];
        assert_eq!(
            sil.add_raw(&a, (3, 3), &b, (3, 3)).unwrap_err(),
            MatrixError::Layout {
                shape: (3, 3),
                len: 8
            }
        );
    }
}
