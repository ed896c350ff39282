#[cfg(feature = "python")]
use pyo3::{Bound, pymodule, PyResult, wrap_pyfunction};
#[cfg(feature = "python")]
use pyo3::prelude::{PyModule, PyModuleMethods};
#[cfg(feature = "python")]
use crate::python::median::median_py;

pub mod method;

#[cfg(feature = "python")]
pub mod python;

pub mod util;
pub mod model;
pub mod stats;


/// A Python module implemented in Rust. The name of this function must match
/// the `lib.name` setting in the `Cargo.toml`, else Python will not be able to
/// import the module.
#[cfg(feature = "python")]
#[pymodule]
fn rs_fastmedian(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(median_py, m)?)?;
    Ok(())
}
