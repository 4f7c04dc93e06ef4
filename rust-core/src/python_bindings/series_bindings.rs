//! Python bindings for Fourier series

use pyo3::prelude::*;
use numpy::{PyArray1, PyReadonlyArray1};
use ndarray::Array1;
use crate::receiver::{decode_bits, reconstruct};
use crate::series::{FourierCoefficients, FourierSeries, RiemannRule};
use super::wave_bindings::PySquareWave;

/// Riemann rule enum exposed to Python
#[pyclass(name = "RiemannRule")]
#[derive(Clone)]
pub enum PyRiemannRule {
    Left,
    Midpoint,
    Right,
}

impl From<PyRiemannRule> for RiemannRule {
    fn from(py_rule: PyRiemannRule) -> Self {
        match py_rule {
            PyRiemannRule::Left => RiemannRule::Left,
            PyRiemannRule::Midpoint => RiemannRule::Midpoint,
            PyRiemannRule::Right => RiemannRule::Right,
        }
    }
}

/// Truncated Fourier series exposed to Python
#[pyclass(name = "FourierSeries")]
pub struct PyFourierSeries {
    series: FourierSeries,
}

#[pymethods]
impl PyFourierSeries {
    /// Integrate a square wave against the Fourier basis
    /// 
    /// Args:
    ///     wave: Square wave to approximate
    ///     harmonics: Number of cosine/sine pairs
    ///     samples_per_unit: Riemann sub-intervals per unit length
    ///     rule: Riemann sample point
    /// 
    /// Returns:
    ///     New series instance
    #[staticmethod]
    #[pyo3(signature = (wave, harmonics, samples_per_unit=100, rule=PyRiemannRule::Midpoint))]
    fn from_wave(
        wave: PyRef<'_, PySquareWave>,
        harmonics: usize,
        samples_per_unit: usize,
        rule: PyRiemannRule,
    ) -> PyResult<Self> {
        let coeffs = FourierCoefficients::for_wave(&wave.wave, harmonics, samples_per_unit, rule.into())?;
        Ok(Self {
            series: FourierSeries::new(coeffs),
        })
    }

    /// Evaluate g(x)
    fn evaluate(&self, x: f64) -> f64 {
        self.series.evaluate(x)
    }

    /// Evaluate g over a numpy array of time points
    /// 
    /// Args:
    ///     x: Time points as numpy array
    ///     order: Use only the first `order` harmonics (default: all)
    #[pyo3(signature = (x, order=None))]
    fn sample<'py>(
        &self,
        py: Python<'py>,
        x: PyReadonlyArray1<f64>,
        order: Option<usize>,
    ) -> PyResult<&'py PyArray1<f64>> {
        let order = order.unwrap_or(self.series.order());
        let values: Vec<f64> = x
            .as_slice()?
            .iter()
            .map(|&xi| self.series.evaluate_partial(xi, order))
            .collect();
        Ok(PyArray1::from_vec(py, values))
    }

    /// Thresholded receiver trace scaled to +/- display_amplitude
    #[pyo3(signature = (x, display_amplitude=1.0))]
    fn reconstruct<'py>(
        &self,
        py: Python<'py>,
        x: PyReadonlyArray1<f64>,
        display_amplitude: f64,
    ) -> PyResult<&'py PyArray1<f64>> {
        let grid = Array1::from(x.as_slice()?.to_vec());
        let values = reconstruct(&self.series.sample(&grid), display_amplitude);
        Ok(PyArray1::from_owned_array(py, values))
    }

    /// Read bits back by thresholding each slot centre
    #[pyo3(signature = (bit_count, bit_period=1.0))]
    fn decode(&self, bit_count: usize, bit_period: f64) -> PyResult<String> {
        Ok(decode_bits(&self.series, bit_count, bit_period)?.to_string())
    }

    /// Constant term a_0
    fn a0(&self) -> f64 {
        self.series.coefficients().a0()
    }

    /// Cosine coefficients a_1..a_N
    fn cosine_terms<'py>(&self, py: Python<'py>) -> PyResult<&'py PyArray1<f64>> {
        Ok(PyArray1::from_slice(py, self.series.coefficients().cosine_terms()))
    }

    /// Sine coefficients b_1..b_N
    fn sine_terms<'py>(&self, py: Python<'py>) -> PyResult<&'py PyArray1<f64>> {
        Ok(PyArray1::from_slice(py, self.series.coefficients().sine_terms()))
    }

    /// Half range L of the basis
    fn half_range(&self) -> f64 {
        self.series.coefficients().half_range()
    }

    /// Number of harmonics
    fn order(&self) -> usize {
        self.series.order()
    }
}
