//! Truncated Fourier series evaluation

use super::coefficients::FourierCoefficients;
use ndarray::Array1;
use std::f64::consts::PI;

/// `g(x) = a_0 + Σ a_n cos(nπx/L) + b_n sin(nπx/L)`
#[derive(Debug, Clone)]
pub struct FourierSeries {
    coefficients: FourierCoefficients,
}

impl FourierSeries {
    pub fn new(coefficients: FourierCoefficients) -> Self {
        Self { coefficients }
    }

    /// Evaluate the full series at `x`
    pub fn evaluate(&self, x: f64) -> f64 {
        self.evaluate_partial(x, self.coefficients.harmonics())
    }

    /// Evaluate using only the first `order` harmonics
    pub fn evaluate_partial(&self, x: f64, order: usize) -> f64 {
        let c = &self.coefficients;
        let theta = PI * x / c.half_range();

        c.cosine_terms()
            .iter()
            .zip(c.sine_terms())
            .take(order)
            .enumerate()
            .fold(c.a0(), |acc, (i, (&a, &b))| {
                let (sin, cos) = ((i + 1) as f64 * theta).sin_cos();
                acc + a * cos + b * sin
            })
    }

    /// Evaluate over a grid of time points
    pub fn sample(&self, grid: &Array1<f64>) -> Array1<f64> {
        grid.mapv(|x| self.evaluate(x))
    }

    pub fn coefficients(&self) -> &FourierCoefficients {
        &self.coefficients
    }

    pub fn order(&self) -> usize {
        self.coefficients.harmonics()
    }
}

impl From<FourierCoefficients> for FourierSeries {
    fn from(coefficients: FourierCoefficients) -> Self {
        Self::new(coefficients)
    }
}
