//! Square Fourier - Fourier series approximation of binary square waves
//! 
//! Turns a bit string into a periodic square wave, integrates it against the
//! Fourier basis with Riemann sums, and rebuilds the signal from the
//! truncated series for plotting and receiver-side decoding.

// Suppress PyO3 non-local impl warnings (harmless macro-generated code)
#![cfg_attr(feature = "python", allow(non_local_definitions))]

pub mod error;
pub mod signal;
pub mod series;
pub mod spectrum;
pub mod receiver;
pub mod plot;
pub mod export;
pub mod config;
pub mod pipeline;
#[cfg(feature = "python")]
pub mod python_bindings;

pub use error::{FourierError, Result};
pub use signal::{BitString, SquareWave};
pub use series::{FourierCoefficients, FourierSeries, RiemannRule};
pub use spectrum::FftEngine;
pub use config::ApproximationConfig;
pub use pipeline::{run, ApproximationReport};
