use numpy::{AllowTypeChange, PyArray2, PyArrayLikeDyn, ToPyArray};
use pyo3::exceptions::PyRuntimeError;
use pyo3::prelude::*;

use sample_matrix::logging::init_logging;
use sample_matrix::{Float, MarshalConfig, MatrixSil, MATRIX_SIZE};

/// Module attribute holding the instance used by the module-level functions.
const INSTANCE_ATTR: &str = "_instance";

/// Anything numpy can turn into a float64 array: float or integer arrays,
/// nested lists. Rank is checked by the boundary, not by the conversion.
type FloatArrayLike<'py> = PyArrayLikeDyn<'py, Float, AllowTypeChange>;

/// Python wrapper around the matrix boundary.
///
/// Each instance owns its own matrix state. The module-level `initialize` and
/// `add` functions go through one instance stored on the module.
#[pyclass(name = "SampleMatrix")]
struct PySampleMatrix {
    inner: MatrixSil,
}

#[pymethods]
impl PySampleMatrix {
    /// Create a new SampleMatrix.
    ///
    /// Args:
    ///     check_columns (bool): Also require both arrays to have exactly
    ///         ``MATRIX_SIZE`` columns. Defaults to False, which checks only
    ///         the first dimension.
    #[new]
    #[pyo3(signature = (check_columns=false))]
    fn new(check_columns: bool) -> Self {
        Self {
            inner: MatrixSil::with_config(MarshalConfig::new(check_columns)),
        }
    }

    /// Reset the instance to a fresh zero-valued state. Safe to call any
    /// number of times.
    fn initialize(&mut self) {
        self.inner.initialize();
    }

    /// Add dense ``A`` to the diagonal of ``B``.
    ///
    /// Only ``B[i, i]`` is read; off-diagonal values of ``B`` are ignored.
    /// Integer input is converted to float64.
    ///
    /// Args:
    ///     A (array_like): shape (MATRIX_SIZE, MATRIX_SIZE).
    ///     B (array_like): shape (MATRIX_SIZE, MATRIX_SIZE).
    ///
    /// Returns:
    ///     numpy.ndarray: New float64 array of shape (MATRIX_SIZE, MATRIX_SIZE).
    ///
    /// Raises:
    ///     RuntimeError: ``ref must have 3 columns.`` when a shape is wrong.
    #[pyo3(signature = (a, b))]
    fn add<'py>(
        &self,
        py: Python<'py>,
        a: FloatArrayLike<'py>,
        b: FloatArrayLike<'py>,
    ) -> PyResult<Bound<'py, PyArray2<Float>>> {
        let result = self
            .inner
            .add_dyn(&a.as_array(), &b.as_array())
            .map_err(|e| PyRuntimeError::new_err(e.to_string()))?;
        Ok(result.to_pyarray_bound(py))
    }

    #[getter]
    fn check_columns(&self) -> bool {
        self.inner.config().check_columns
    }

    fn __repr__(&self) -> String {
        format!(
            "<SampleMatrix: {}x{}, check_columns={}>",
            MATRIX_SIZE,
            MATRIX_SIZE,
            self.inner.config().check_columns
        )
    }
}

fn module_instance<'py>(module: &Bound<'py, PyModule>) -> PyResult<Bound<'py, PySampleMatrix>> {
    Ok(module.getattr(INSTANCE_ATTR)?.downcast_into::<PySampleMatrix>()?)
}

/// Reset the module's instance. Safe to call any number of times.
#[pyfunction]
#[pyo3(pass_module, name = "initialize")]
fn initialize_module(module: &Bound<'_, PyModule>) -> PyResult<()> {
    module_instance(module)?.borrow_mut().initialize();
    Ok(())
}

/// Add dense ``A`` to the diagonal of ``B`` using the module's instance.
#[pyfunction]
#[pyo3(pass_module, name = "add")]
fn add_module<'py>(
    module: &Bound<'py, PyModule>,
    a: FloatArrayLike<'py>,
    b: FloatArrayLike<'py>,
) -> PyResult<Bound<'py, PyArray2<Float>>> {
    let instance = module_instance(module)?;
    let result = instance.borrow().add(module.py(), a, b);
    result
}

/// Python bindings for the sample-matrix dense + diagonal addition.
#[pymodule]
#[pyo3(name = "SampleMatrixSIL")]
fn sample_matrix_sil(m: &Bound<'_, PyModule>) -> PyResult<()> {
    let config = MarshalConfig::default();
    init_logging(&config.log_filter);

    let instance = PySampleMatrix {
        inner: MatrixSil::with_config(config),
    };
    m.add(INSTANCE_ATTR, Bound::new(m.py(), instance)?)?;
    m.add("MATRIX_SIZE", MATRIX_SIZE)?;
    m.add_class::<PySampleMatrix>()?;
    m.add_function(wrap_pyfunction!(initialize_module, m)?)?;
    m.add_function(wrap_pyfunction!(add_module, m)?)?;
    Ok(())
}
