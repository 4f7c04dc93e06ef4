//! Riemann-sum integration
//!
//! All Fourier integrals are evaluated by summing `f(x_k) * dx` over a
//! uniform partition of the integration range.

use crate::error::{FourierError, Result};

/// Where within each sub-interval the integrand is sampled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RiemannRule {
    /// Left edge of each sub-interval
    Left,

    /// Centre of each sub-interval
    ///
    /// Never lands on a bit edge when the grid is aligned to the bit
    /// period, so step functions integrate exactly.
    #[default]
    Midpoint,

    /// Right edge of each sub-interval
    Right,
}

impl RiemannRule {
    /// Offset of the sample point inside a sub-interval, in units of dx
    fn offset(&self) -> f64 {
        match self {
            RiemannRule::Left => 0.0,
            RiemannRule::Midpoint => 0.5,
            RiemannRule::Right => 1.0,
        }
    }
}

/// Uniform partition of `[start, end]` into `steps` sub-intervals
#[derive(Debug, Clone, Copy)]
pub struct Partition {
    start: f64,
    dx: f64,
    steps: usize,
    rule: RiemannRule,
}

impl Partition {
    pub fn new(start: f64, end: f64, steps: usize, rule: RiemannRule) -> Result<Self> {
        if steps == 0 || !start.is_finite() || !end.is_finite() || end <= start {
            return Err(FourierError::InvalidRange { start, end, steps });
        }

        Ok(Self {
            start,
            dx: (end - start) / steps as f64,
            steps,
            rule,
        })
    }

    /// Width of each sub-interval
    pub fn dx(&self) -> f64 {
        self.dx
    }

    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Sample point of sub-interval `k`
    pub fn point(&self, k: usize) -> f64 {
        self.start + (k as f64 + self.rule.offset()) * self.dx
    }

    /// Iterator over all sample points
    pub fn points(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.steps).map(move |k| self.point(k))
    }

    /// Riemann sum of `f` over this partition
    pub fn integrate<F>(&self, f: F) -> f64
    where
        F: Fn(f64) -> f64,
    {
        self.points().map(f).sum::<f64>() * self.dx
    }
}

/// Riemann sum of `f` over `[start, end]` using `steps` sub-intervals
///
/// # Arguments
/// * `f` - Integrand
/// * `start` - Lower limit
/// * `end` - Upper limit (must exceed `start`)
/// * `steps` - Number of sub-intervals (> 0)
/// * `rule` - Sample point within each sub-interval
pub fn riemann_sum<F>(f: F, start: f64, end: f64, steps: usize, rule: RiemannRule) -> Result<f64>
where
    F: Fn(f64) -> f64,
{
    Ok(Partition::new(start, end, steps, rule)?.integrate(f))
}
