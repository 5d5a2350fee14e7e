//! Python bindings, built with the `python` feature.
//!
//! ```python
//! from labeled_points import LabeledPoint, decode_points
//!
//! p = LabeledPoint([1.0, 2.0, 3.0], 7.0)
//! data = p.to_bytes()            # 16 bytes
//! q = LabeledPoint.zeros(3)
//! q.read_bytes(data)
//! assert p == q
//! ```

use pyo3::exceptions::{PyIndexError, PyIOError, PyValueError};
use pyo3::prelude::*;
use pyo3::types::PyBytes;

use crate::error::StreamError;
use crate::points::{LabeledPoint, UNLABELED};
use crate::stream::PointReader;

#[pyclass(name = "LabeledPoint")]
#[derive(Clone)]
struct PyLabeledPoint {
    inner: LabeledPoint,
}

#[pymethods]
impl PyLabeledPoint {
    #[new]
    #[pyo3(signature = (coordinates, label = UNLABELED))]
    fn new(coordinates: Vec<f32>, label: f32) -> Self {
        PyLabeledPoint { inner: LabeledPoint::new(coordinates, label) }
    }

    /// All-zero point, usually the target of `read_bytes`.
    #[staticmethod]
    #[pyo3(signature = (dimensions, label = UNLABELED))]
    fn zeros(dimensions: usize, label: f32) -> Self {
        PyLabeledPoint { inner: LabeledPoint::zeros(dimensions, label) }
    }

    fn dimensions(&self) -> usize {
        self.inner.dimensions()
    }

    fn get_value(&self, dim: usize) -> PyResult<f64> {
        if dim >= self.inner.dimensions() {
            return Err(PyIndexError::new_err(format!(
                "dimension {} out of range for a {}-dimensional point",
                dim,
                self.inner.dimensions()
            )));
        }
        Ok(self.inner.get_value(dim))
    }

    #[getter]
    fn label(&self) -> f32 {
        self.inner.label()
    }

    #[getter]
    fn features(&self) -> Vec<f32> {
        self.inner.features().to_vec()
    }

    fn to_bytes<'py>(&self, py: Python<'py>) -> Bound<'py, PyBytes> {
        PyBytes::new_bound(py, &self.inner.to_bytes())
    }

    /// Overwrites this point from exactly `4 * (dimensions() + 1)` bytes.
    fn read_bytes(&mut self, data: &[u8]) -> PyResult<()> {
        self.inner
            .read_from_slice(data)
            .map_err(|e| PyValueError::new_err(e.to_string()))
    }

    fn __eq__(&self, other: PyRef<'_, Self>) -> bool {
        self.inner == other.inner
    }

    fn __hash__(&self) -> isize {
        self.inner.hash_code() as isize
    }

    fn __str__(&self) -> String {
        self.inner.to_string()
    }

    fn __repr__(&self) -> String {
        format!(
            "LabeledPoint(features={:?}, label={:?})",
            self.inner.features(),
            self.inner.label()
        )
    }

    fn __copy__(&self) -> Self {
        self.clone()
    }
}

/// Decodes back-to-back points of the given dimensionality.
#[pyfunction]
fn decode_points(data: &[u8], dimensions: usize) -> PyResult<Vec<PyLabeledPoint>> {
    let reader = PointReader::new(data, dimensions).map_err(|e| PyValueError::new_err(e.to_string()))?;
    reader
        .map(|point| {
            point
                .map(|inner| PyLabeledPoint { inner })
                .map_err(|e| match e {
                    StreamError::Io(io) => PyIOError::new_err(io.to_string()),
                    other => PyValueError::new_err(other.to_string()),
                })
        })
        .collect()
}

#[pymodule]
fn labeled_points(_py: Python<'_>, m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyLabeledPoint>()?;
    m.add_function(wrap_pyfunction!(decode_points, m)?)?;
    m.add("UNLABELED", UNLABELED)?;
    Ok(())
}
