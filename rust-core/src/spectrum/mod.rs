//! Spectral cross-check of the series coefficients

pub mod fft;

pub use fft::FftEngine;
