//! Periodic square wave built from a bit string

use super::bits::BitString;
use crate::error::{FourierError, Result};
use ndarray::Array1;

/// Square wave holding `+A` for `1` bits and `-A` for `0` bits
///
/// Each bit occupies one slot of width `bit_period`; the pattern repeats
/// every `len * bit_period`.
#[derive(Debug, Clone)]
pub struct SquareWave {
    bits: BitString,
    levels: Vec<f64>,
    bit_period: f64,
    amplitude: f64,
}

impl SquareWave {
    /// Create a square wave
    ///
    /// # Arguments
    /// * `bits` - Message bits, one level per slot
    /// * `bit_period` - Width of one slot (> 0)
    /// * `amplitude` - Level magnitude A (> 0)
    pub fn new(bits: BitString, bit_period: f64, amplitude: f64) -> Result<Self> {
        if !bit_period.is_finite() || bit_period <= 0.0 {
            return Err(FourierError::parameter("bit_period", bit_period));
        }
        if !amplitude.is_finite() || amplitude <= 0.0 {
            return Err(FourierError::parameter("amplitude", amplitude));
        }

        let levels = bits
            .bits()
            .iter()
            .map(|&bit| if bit { amplitude } else { -amplitude })
            .collect();

        Ok(Self {
            bits,
            levels,
            bit_period,
            amplitude,
        })
    }

    /// Level at time `x`
    pub fn evaluate(&self, x: f64) -> f64 {
        let wrapped = x.rem_euclid(self.period());
        // Rounding can land the index on `len`: rem_euclid returns exactly the
        // period for tiny negative x, and the division can round up for x just
        // below a multiple of the period
        let idx = ((wrapped / self.bit_period) as usize).min(self.levels.len() - 1);
        self.levels[idx]
    }

    /// Evaluate over a grid of time points
    pub fn sample(&self, grid: &Array1<f64>) -> Array1<f64> {
        grid.mapv(|x| self.evaluate(x))
    }

    /// Repetition period `len * bit_period`
    pub fn period(&self) -> f64 {
        self.levels.len() as f64 * self.bit_period
    }

    /// Exact average level over one period
    pub fn mean(&self) -> f64 {
        let ones = self.bits.ones() as f64;
        let zeros = (self.bits.len() - self.bits.ones()) as f64;
        self.amplitude * (ones - zeros) / self.bits.len() as f64
    }

    pub fn bits(&self) -> &BitString {
        &self.bits
    }

    pub fn bit_period(&self) -> f64 {
        self.bit_period
    }

    pub fn amplitude(&self) -> f64 {
        self.amplitude
    }
}

/// `points` evenly spaced values from `start` to `end` inclusive
pub fn linspace(start: f64, end: f64, points: usize) -> Array1<f64> {
    Array1::linspace(start, end, points)
}
