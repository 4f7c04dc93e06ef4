//! Receiver-side interpretation of the approximated signal
//!
//! The receiver thresholds at zero: anything above is a `1`, anything at or
//! below is a `0`.

use crate::error::{FourierError, Result};
use crate::series::FourierSeries;
use crate::signal::BitString;
use ndarray::Array1;

/// Threshold a single value
pub fn threshold(value: f64) -> bool {
    value > 0.0
}

/// Thresholded trace scaled to `±display_amplitude`
///
/// Drawn over the original for comparison; a larger display amplitude keeps
/// it visually separate from the wave itself.
pub fn reconstruct(values: &Array1<f64>, display_amplitude: f64) -> Array1<f64> {
    values.mapv(|v| {
        if threshold(v) {
            display_amplitude
        } else {
            -display_amplitude
        }
    })
}

/// Read `bit_count` bits from the series by sampling each slot's centre
pub fn decode_bits(series: &FourierSeries, bit_count: usize, bit_period: f64) -> Result<BitString> {
    if !bit_period.is_finite() || bit_period <= 0.0 {
        return Err(FourierError::parameter("bit_period", bit_period));
    }

    let bits = (0..bit_count)
        .map(|i| threshold(series.evaluate((i as f64 + 0.5) * bit_period)))
        .collect();

    BitString::from_bits(bits)
}

/// Positions that differ, counting any length mismatch as errors
pub fn bit_errors(sent: &BitString, received: &BitString) -> usize {
    let mismatched = sent
        .bits()
        .iter()
        .zip(received.bits())
        .filter(|(a, b)| a != b)
        .count();

    mismatched + sent.len().abs_diff(received.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::series::{FourierCoefficients, RiemannRule};
    use crate::signal::SquareWave;

    #[test]
    fn test_threshold_at_zero() {
        assert!(threshold(0.1));
        assert!(!threshold(0.0));
        assert!(!threshold(-3.0));
    }

    #[test]
    fn test_reconstruct_scales() {
        let values = Array1::from(vec![-0.5, 0.0, 4.0]);
        assert_eq!(reconstruct(&values, 20.0).to_vec(), vec![-20.0, -20.0, 20.0]);
    }

    #[test]
    fn test_bit_errors() {
        let a = BitString::parse("1010").unwrap();
        let b = BitString::parse("1000").unwrap();
        let c = BitString::parse("101011").unwrap();

        assert_eq!(bit_errors(&a, &a), 0);
        assert_eq!(bit_errors(&a, &b), 1);
        assert_eq!(bit_errors(&a, &c), 2);
        assert_eq!(bit_errors(&c, &b), 3);
    }

    #[test]
    fn test_decode_recovers_padded_message() {
        let message = BitString::parse("1001011").unwrap();
        let wave = SquareWave::new(message.padded(20), 1.0, 1.0).unwrap();
        let coeffs = FourierCoefficients::for_wave(&wave, 100, 100, RiemannRule::Midpoint).unwrap();
        let series = FourierSeries::new(coeffs);

        let decoded = decode_bits(&series, message.len(), 1.0).unwrap();
        assert_eq!(decoded, message);
        assert_eq!(bit_errors(&message, &decoded), 0);
    }

    #[test]
    fn test_decode_rejects_empty_and_bad_period() {
        let coeffs = FourierCoefficients::from_parts(1.0, vec![], vec![], 1.0).unwrap();
        let series = FourierSeries::new(coeffs);

        assert!(decode_bits(&series, 0, 1.0).is_err());
        assert!(decode_bits(&series, 3, 0.0).is_err());
        assert_eq!(decode_bits(&series, 3, 1.0).unwrap().to_string(), "111");
    }
}
