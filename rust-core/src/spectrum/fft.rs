//! FFT engine using realfft for real-valued signals
//!
//! Estimates the same Fourier coefficients as the Riemann integrator from a
//! single real FFT, giving an independent cross-check of the series.

use crate::error::{FourierError, Result};
use crate::series::{FourierCoefficients, Partition, RiemannRule};
use num_complex::Complex;
use realfft::{RealFftPlanner, RealToComplex};
use std::f64::consts::PI;
use std::sync::Arc;

/// FFT engine for real-valued signals
pub struct FftEngine {
    /// FFT size (number of samples)
    fft_size: usize,

    /// Real FFT processor
    r2c: Arc<dyn RealToComplex<f64>>,

    /// Reusable input buffer
    input_buffer: Vec<f64>,

    /// Reusable output buffer (complex spectrum)
    output_buffer: Vec<Complex<f64>>,
}

impl FftEngine {
    /// Create new FFT engine
    ///
    /// # Arguments
    /// * `fft_size` - FFT size (number of samples, > 1)
    pub fn new(fft_size: usize) -> Result<Self> {
        if fft_size < 2 {
            return Err(FourierError::parameter("fft_size", fft_size));
        }

        let mut planner = RealFftPlanner::<f64>::new();
        let r2c = planner.plan_fft_forward(fft_size);

        let input_buffer = r2c.make_input_vec();
        let output_buffer = r2c.make_output_vec();

        Ok(Self {
            fft_size,
            r2c,
            input_buffer,
            output_buffer,
        })
    }

    /// Compute the complex spectrum X[k], k = 0..fft_size/2
    ///
    /// # Arguments
    /// * `signal` - Input signal (zero-padded or truncated to fft_size)
    pub fn spectrum(&mut self, signal: &[f64]) -> Result<&[Complex<f64>]> {
        let copy_len = signal.len().min(self.fft_size);
        self.input_buffer[..copy_len].copy_from_slice(&signal[..copy_len]);
        if copy_len < self.fft_size {
            self.input_buffer[copy_len..].fill(0.0);
        }

        self.r2c
            .process(&mut self.input_buffer, &mut self.output_buffer)
            .map_err(|e| FourierError::Fft(e.to_string()))?;

        Ok(&self.output_buffer)
    }

    /// Magnitude spectrum |X[k]| for positive frequencies
    pub fn compute_magnitude(&mut self, signal: &[f64]) -> Result<Vec<f64>> {
        Ok(self.spectrum(signal)?.iter().map(|c| c.norm()).collect())
    }

    /// Estimate Fourier coefficients of `f` on `[-L, L]`
    ///
    /// Samples `f` at the midpoints of `fft_size` equal sub-intervals and
    /// rotates each bin back to the `-L` origin:
    ///
    /// ```text
    /// a_0       = Re X_0 / M
    /// a_n + i b_n = (2/M) e^{iφ_n} conj(X_n),  φ_n = -nπ + nπ/M
    /// ```
    ///
    /// # Arguments
    /// * `f` - Function to approximate
    /// * `harmonics` - Number of cosine/sine pairs (< fft_size / 2)
    /// * `half_range` - L
    pub fn coefficients<F>(&mut self, f: F, harmonics: usize, half_range: f64) -> Result<FourierCoefficients>
    where
        F: Fn(f64) -> f64,
    {
        if harmonics >= self.fft_size / 2 {
            return Err(FourierError::parameter(
                "harmonics",
                format!("{} (fft size {} allows at most {})", harmonics, self.fft_size, self.fft_size / 2 - 1),
            ));
        }

        let partition = Partition::new(-half_range, half_range, self.fft_size, RiemannRule::Midpoint)?;
        let samples: Vec<f64> = partition.points().map(f).collect();

        let m = self.fft_size as f64;
        let spectrum = self.spectrum(&samples)?;

        let a0 = spectrum[0].re / m;
        let (a, b): (Vec<f64>, Vec<f64>) = (1..=harmonics)
            .map(|n| {
                let n = n as f64;
                let phase = Complex::from_polar(1.0, -n * PI + n * PI / m);
                let c = phase * spectrum[n as usize].conj() * (2.0 / m);
                (c.re, c.im)
            })
            .unzip();

        FourierCoefficients::from_parts(a0, a, b, half_range)
    }

    /// Get FFT size
    pub fn fft_size(&self) -> usize {
        self.fft_size
    }

    /// Get number of frequency bins (fft_size/2 + 1 for real FFT)
    pub fn num_bins(&self) -> usize {
        self.fft_size / 2 + 1
    }
}
