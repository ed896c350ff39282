use pyo3::{pyfunction, PyResult};

use crate::method::median::median;

/// Calculate the median of a list of floats.
///
/// The values are copied across the boundary, so the caller's list keeps its
/// original order. An empty list yields `None`.
#[pyfunction]
#[pyo3(name = "median")]
pub fn median_py(mut values: Vec<f64>) -> PyResult<Option<f64>> {
    Ok(median(&mut values))
}
