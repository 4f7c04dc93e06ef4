//! Fourier series approximation by Riemann integration

pub mod integrate;
pub mod coefficients;
pub mod approximation;
pub mod metrics;

pub use integrate::{riemann_sum, Partition, RiemannRule};
pub use coefficients::{riemann_steps, CoefficientRow, FourierCoefficients, MAX_RIEMANN_STEPS};
pub use approximation::FourierSeries;
pub use metrics::{convergence_profile, mean_squared_error};
