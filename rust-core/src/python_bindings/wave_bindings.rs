//! Python bindings for square waves

use pyo3::prelude::*;
use numpy::{PyArray1, PyReadonlyArray1};
use ndarray::Array1;
use crate::signal::{BitString, SquareWave};

/// Square wave exposed to Python
#[pyclass(name = "SquareWave")]
#[derive(Clone)]
pub struct PySquareWave {
    pub(crate) wave: SquareWave,
}

#[pymethods]
impl PySquareWave {
    /// Create a square wave from a bit string
    /// 
    /// Args:
    ///     bits: Message made of '0' and '1'
    ///     period: Width of one bit slot
    ///     amplitude: Level magnitude
    ///     padding: Trailing zero bits to append
    #[new]
    #[pyo3(signature = (bits, period=1.0, amplitude=1.0, padding=0))]
    fn new(bits: &str, period: f64, amplitude: f64, padding: usize) -> PyResult<Self> {
        let bits = BitString::parse(bits)?.padded(padding);
        Ok(Self {
            wave: SquareWave::new(bits, period, amplitude)?,
        })
    }

    /// Level at time x
    fn evaluate(&self, x: f64) -> f64 {
        self.wave.evaluate(x)
    }

    /// Evaluate over a numpy array of time points
    fn sample<'py>(
        &self,
        py: Python<'py>,
        x: PyReadonlyArray1<f64>,
    ) -> PyResult<&'py PyArray1<f64>> {
        let grid = Array1::from(x.as_slice()?.to_vec());
        Ok(PyArray1::from_owned_array(py, self.wave.sample(&grid)))
    }

    /// Repetition period
    fn period(&self) -> f64 {
        self.wave.period()
    }

    /// Average level over one period
    fn mean(&self) -> f64 {
        self.wave.mean()
    }

    fn bits(&self) -> String {
        self.wave.bits().to_string()
    }

    fn __len__(&self) -> usize {
        self.wave.bits().len()
    }
}
