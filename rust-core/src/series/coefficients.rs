//! Fourier coefficients by numerical integration
//!
//! Over the symmetric range `[-L, L]`:
//!
//! ```text
//! a_0 = 1/(2L) ∫ f(x) dx
//! a_n = 1/L    ∫ f(x) cos(nπx/L) dx
//! b_n = 1/L    ∫ f(x) sin(nπx/L) dx
//! ```

use super::integrate::{Partition, RiemannRule};
use crate::error::{FourierError, Result};
use crate::signal::SquareWave;
use rayon::prelude::*;
use serde::Serialize;
use std::f64::consts::PI;

/// One exported coefficient row
///
/// Row `n = 0` carries `a_0` with `b = 0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CoefficientRow {
    pub n: usize,
    pub a: f64,
    pub b: f64,
    pub amplitude: f64,
}

/// Upper bound on Riemann sub-intervals across `[-L, L]`
pub const MAX_RIEMANN_STEPS: usize = 1 << 24;

/// Sub-intervals across `[-L, L]` for a wave of `bit_count` slots
///
/// Each slot gets `round(bit_period * samples_per_unit)` (at least one)
/// sub-intervals, so every bit edge falls on a partition boundary.
pub fn riemann_steps(bit_count: usize, bit_period: f64, samples_per_unit: usize) -> Result<usize> {
    if samples_per_unit == 0 {
        return Err(FourierError::parameter("samples_per_unit", samples_per_unit));
    }
    if !bit_period.is_finite() || bit_period <= 0.0 {
        return Err(FourierError::parameter("bit_period", bit_period));
    }

    let per_bit = (bit_period * samples_per_unit as f64).round().max(1.0);
    let too_many = || {
        FourierError::parameter(
            "riemann_steps",
            format!(
                "{} bits x {} steps per bit exceeds {}",
                bit_count, per_bit, MAX_RIEMANN_STEPS
            ),
        )
    };
    if per_bit > MAX_RIEMANN_STEPS as f64 {
        return Err(too_many());
    }

    let steps = bit_count
        .checked_mul(2)
        .and_then(|n| n.checked_mul(per_bit as usize))
        .filter(|&n| n > 0 && n <= MAX_RIEMANN_STEPS)
        .ok_or_else(too_many)?;

    Ok(steps)
}

/// Truncated Fourier coefficient set `a_0, a_1..a_N, b_1..b_N`
#[derive(Debug, Clone, PartialEq)]
pub struct FourierCoefficients {
    a0: f64,
    /// `a[i]` holds `a_{i+1}`
    a: Vec<f64>,
    /// `b[i]` holds `b_{i+1}`
    b: Vec<f64>,
    half_range: f64,
}

impl FourierCoefficients {
    /// Assemble a coefficient set from precomputed values
    pub fn from_parts(a0: f64, a: Vec<f64>, b: Vec<f64>, half_range: f64) -> Result<Self> {
        if a.len() != b.len() {
            return Err(FourierError::parameter(
                "coefficients",
                format!("{} cosine terms vs {} sine terms", a.len(), b.len()),
            ));
        }
        if !half_range.is_finite() || half_range <= 0.0 {
            return Err(FourierError::parameter("half_range", half_range));
        }

        Ok(Self { a0, a, b, half_range })
    }

    /// Integrate `f` against the Fourier basis on `[-L, L]`
    ///
    /// # Arguments
    /// * `f` - Function to approximate
    /// * `harmonics` - Number of cosine/sine pairs N
    /// * `half_range` - L
    /// * `steps` - Riemann sub-intervals across `[-L, L]`
    /// * `rule` - Sample point within each sub-interval
    pub fn compute<F>(
        f: F,
        harmonics: usize,
        half_range: f64,
        steps: usize,
        rule: RiemannRule,
    ) -> Result<Self>
    where
        F: Fn(f64) -> f64,
    {
        if !half_range.is_finite() || half_range <= 0.0 {
            return Err(FourierError::parameter("half_range", half_range));
        }
        let partition = Partition::new(-half_range, half_range, steps, rule)?;
        let l = half_range;

        // Sample once; every harmonic reuses the same integrand values
        let samples: Vec<(f64, f64)> = partition.points().map(|x| (x, f(x))).collect();
        let dx = partition.dx();

        let a0 = samples.iter().map(|&(_, y)| y).sum::<f64>() * dx / (2.0 * l);

        let pairs: Vec<(f64, f64)> = (1..=harmonics)
            .into_par_iter()
            .map(|n| {
                let w = n as f64 * PI / l;
                let (cos_sum, sin_sum) = samples.iter().fold((0.0, 0.0), |(c, s), &(x, y)| {
                    let (sin, cos) = (w * x).sin_cos();
                    (c + y * cos, s + y * sin)
                });
                (cos_sum * dx / l, sin_sum * dx / l)
            })
            .collect();

        let (a, b): (Vec<f64>, Vec<f64>) = pairs.into_iter().unzip();

        log::debug!(
            "computed {} harmonics over [-{}, {}] with {} steps",
            harmonics,
            l,
            l,
            steps
        );

        Ok(Self { a0, a, b, half_range })
    }

    /// Coefficients of a square wave, integrated over two of its periods
    ///
    /// Uses `L = wave.period()` and a whole number of steps per bit slot,
    /// see [`riemann_steps`].
    pub fn for_wave(
        wave: &SquareWave,
        harmonics: usize,
        samples_per_unit: usize,
        rule: RiemannRule,
    ) -> Result<Self> {
        let half_range = wave.period();
        let steps = riemann_steps(wave.bits().len(), wave.bit_period(), samples_per_unit)?;

        Self::compute(|x| wave.evaluate(x), harmonics, half_range, steps, rule)
    }

    pub fn a0(&self) -> f64 {
        self.a0
    }

    /// Cosine coefficient `a_n`; `a(0)` is `a_0`
    pub fn a(&self, n: usize) -> Option<f64> {
        if n == 0 {
            Some(self.a0)
        } else {
            self.a.get(n - 1).copied()
        }
    }

    /// Sine coefficient `b_n`; `b(0)` is zero
    pub fn b(&self, n: usize) -> Option<f64> {
        if n == 0 {
            Some(0.0)
        } else {
            self.b.get(n - 1).copied()
        }
    }

    /// `a_1..a_N`
    pub fn cosine_terms(&self) -> &[f64] {
        &self.a
    }

    /// `b_1..b_N`
    pub fn sine_terms(&self) -> &[f64] {
        &self.b
    }

    /// Number of harmonics N
    pub fn harmonics(&self) -> usize {
        self.a.len()
    }

    pub fn half_range(&self) -> f64 {
        self.half_range
    }

    /// Magnitude `sqrt(a_n² + b_n²)` of harmonic n
    pub fn amplitude(&self, n: usize) -> Option<f64> {
        Some(self.a(n)?.hypot(self.b(n)?))
    }

    /// Copy keeping only the first `harmonics` pairs
    pub fn truncated(&self, harmonics: usize) -> Self {
        let keep = harmonics.min(self.harmonics());
        Self {
            a0: self.a0,
            a: self.a[..keep].to_vec(),
            b: self.b[..keep].to_vec(),
            half_range: self.half_range,
        }
    }

    /// All coefficients as rows, `n = 0..=N`
    pub fn rows(&self) -> Vec<CoefficientRow> {
        std::iter::once(CoefficientRow {
            n: 0,
            a: self.a0,
            b: 0.0,
            amplitude: self.a0.abs(),
        })
        .chain(
            self.a
                .iter()
                .zip(&self.b)
                .enumerate()
                .map(|(i, (&a, &b))| CoefficientRow {
                    n: i + 1,
                    a,
                    b,
                    amplitude: a.hypot(b),
                }),
        )
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signal::BitString;

    fn wave(bits: &str, amplitude: f64) -> SquareWave {
        SquareWave::new(BitString::parse(bits).unwrap(), 1.0, amplitude).unwrap()
    }

    #[test]
    fn test_a0_is_wave_mean() {
        for bits in ["1011", "100101000111", "0001", "10"] {
            let w = wave(bits, 2.0);
            let coeffs = FourierCoefficients::for_wave(&w, 4, 100, RiemannRule::Midpoint).unwrap();
            assert!(
                (coeffs.a0() - w.mean()).abs() < 1e-9,
                "{}: a0 = {}, mean = {}",
                bits,
                coeffs.a0(),
                w.mean()
            );
        }
    }

    #[test]
    fn test_a0_is_wave_mean_for_fractional_periods() {
        for &period in &[0.1, 0.3, 0.7, 1.3, 2.5] {
            for bits in ["110", "1011", "100101000111"] {
                let w = SquareWave::new(BitString::parse(bits).unwrap(), period, 1.0).unwrap();
                let coeffs =
                    FourierCoefficients::for_wave(&w, 4, 100, RiemannRule::Midpoint).unwrap();
                assert!(
                    (coeffs.a0() - w.mean()).abs() < 1e-9,
                    "{} at T = {}: a0 = {}, mean = {}",
                    bits,
                    period,
                    coeffs.a0(),
                    w.mean()
                );
            }
        }
    }

    #[test]
    fn test_riemann_steps_align_to_bits() {
        // 3 * 0.1 is not exactly 0.3; the count must still be whole slots
        assert_eq!(riemann_steps(3, 0.1, 100).unwrap(), 60);
        assert_eq!(riemann_steps(4, 1.0, 100).unwrap(), 800);
        assert_eq!(riemann_steps(5, 1.3, 10).unwrap(), 130);
        // Never fewer than one step per slot
        assert_eq!(riemann_steps(4, 0.001, 1).unwrap(), 8);
    }

    #[test]
    fn test_riemann_steps_are_bounded() {
        assert!(riemann_steps(4, 1e10, 100).is_err());
        assert!(riemann_steps(4, 1e300, 100).is_err());
        assert!(riemann_steps(usize::MAX, 1.0, 100).is_err());
        assert!(riemann_steps(0, 1.0, 100).is_err());
        assert!(riemann_steps(4, 1.0, 0).is_err());
        assert!(riemann_steps(4, f64::NAN, 100).is_err());

        let w = SquareWave::new(BitString::parse("1101").unwrap(), 1e10, 1.0).unwrap();
        assert!(matches!(
            FourierCoefficients::for_wave(&w, 4, 100, RiemannRule::Midpoint),
            Err(FourierError::InvalidParameter { .. })
        ));
    }

    #[test]
    fn test_constant_inputs_have_no_harmonics() {
        for (bits, level) in [("1111", 5.0), ("000000", -5.0)] {
            let coeffs =
                FourierCoefficients::for_wave(&wave(bits, 5.0), 20, 100, RiemannRule::Midpoint)
                    .unwrap();

            assert!((coeffs.a0() - level).abs() < 1e-9);
            for n in 1..=20 {
                assert!(coeffs.a(n).unwrap().abs() < 1e-9, "a_{} for {}", n, bits);
                assert!(coeffs.b(n).unwrap().abs() < 1e-9, "b_{} for {}", n, bits);
            }
        }
    }

    #[test]
    fn test_known_series_of_sine() {
        // f(x) = 3 sin(2πx/L) has b_2 = 3 and nothing else
        let l = 2.0;
        let coeffs = FourierCoefficients::compute(
            |x| 3.0 * (2.0 * PI * x / l).sin(),
            5,
            l,
            400,
            RiemannRule::Left,
        )
        .unwrap();

        assert!(coeffs.a0().abs() < 1e-9);
        assert!((coeffs.b(2).unwrap() - 3.0).abs() < 1e-9);
        for n in [1, 3, 4, 5] {
            assert!(coeffs.b(n).unwrap().abs() < 1e-9);
        }
        for n in 1..=5 {
            assert!(coeffs.a(n).unwrap().abs() < 1e-9);
        }
    }

    #[test]
    fn test_symmetric_square_wave_matches_closed_form() {
        // "10" repeated: +A on [0,1), -A on [1,2). Over [-2, 2] only even
        // harmonics survive; n = 2k with k odd gives b = 4A/(kπ).
        let a = 1.0;
        let coeffs = FourierCoefficients::for_wave(&wave("10", a), 6, 1000, RiemannRule::Midpoint)
            .unwrap();

        assert!((coeffs.b(2).unwrap() - 4.0 * a / PI).abs() < 1e-3);
        assert!((coeffs.b(6).unwrap() - 4.0 * a / (3.0 * PI)).abs() < 1e-3);
        assert!(coeffs.b(4).unwrap().abs() < 1e-9);
        for n in [1, 3, 5] {
            assert!(coeffs.a(n).unwrap().abs() < 1e-9);
            assert!(coeffs.b(n).unwrap().abs() < 1e-9);
        }
    }

    #[test]
    fn test_truncated_and_rows() {
        let coeffs = FourierCoefficients::for_wave(&wave("1101", 1.0), 8, 50, RiemannRule::Midpoint)
            .unwrap();
        let short = coeffs.truncated(3);

        assert_eq!(short.harmonics(), 3);
        assert_eq!(short.a(3), coeffs.a(3));
        assert_eq!(short.a(4), None);
        assert_eq!(coeffs.truncated(100).harmonics(), 8);

        let rows = short.rows();
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0].n, 0);
        assert_eq!(rows[0].a, coeffs.a0());
        assert_eq!(rows[2].b, coeffs.b(2).unwrap());
        assert!((rows[2].amplitude - coeffs.amplitude(2).unwrap()).abs() < 1e-15);
    }

    #[test]
    fn test_rejects_bad_inputs() {
        let w = wave("10", 1.0);
        assert!(FourierCoefficients::for_wave(&w, 4, 0, RiemannRule::Midpoint).is_err());
        assert!(FourierCoefficients::compute(|x| x, 4, 0.0, 10, RiemannRule::Left).is_err());
        assert!(FourierCoefficients::from_parts(0.0, vec![1.0], vec![], 1.0).is_err());
    }
}
