//! PyO3 bindings for Python integration

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::error::FourierError;

mod wave_bindings;
mod series_bindings;

impl From<FourierError> for PyErr {
    fn from(err: FourierError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}

/// Python module definition
#[pymodule]
fn square_fourier(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_class::<wave_bindings::PySquareWave>()?;
    m.add_class::<series_bindings::PyFourierSeries>()?;
    m.add_class::<series_bindings::PyRiemannRule>()?;

    Ok(())
}
