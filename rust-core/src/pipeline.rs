//! End-to-end run: bits → wave → coefficients → series → receiver

use crate::config::ApproximationConfig;
use crate::error::Result;
use crate::plot::PlotData;
use crate::receiver::{bit_errors, decode_bits};
use crate::series::{mean_squared_error, FourierCoefficients, FourierSeries};
use crate::signal::{linspace, BitString, SquareWave};
use log::{debug, info};

/// MSE grid density, points per bit slot
const MSE_POINTS_PER_BIT: usize = 100;

/// Everything one run produces
#[derive(Debug, Clone)]
pub struct ApproximationReport {
    /// Message before padding
    pub message: BitString,

    /// Padded wave the series approximates
    pub wave: SquareWave,

    pub series: FourierSeries,

    /// Bits read back by the receiver over the message window
    pub decoded: BitString,

    pub bit_errors: usize,

    /// Mean squared error over the message window
    pub mse: f64,
}

impl ApproximationReport {
    pub fn coefficients(&self) -> &FourierCoefficients {
        self.series.coefficients()
    }

    /// Right edge of the message window
    pub fn message_end(&self) -> f64 {
        self.message.len() as f64 * self.wave.bit_period()
    }

    /// Sample the three plot traces over the message window
    pub fn plot_data(&self, points: usize, display_amplitude: f64) -> Result<PlotData> {
        PlotData::sample(&self.wave, &self.series, self.message_end(), points, display_amplitude)
    }
}

/// Run the approximation described by `config`
pub fn run(config: &ApproximationConfig) -> Result<ApproximationReport> {
    config.validate()?;

    let message = BitString::parse(&config.bits)?;
    let padded = message.padded(config.padding);
    info!(
        "approximating {} message bits (+{} padding) with {} harmonics",
        message.len(),
        config.padding,
        config.harmonics
    );

    let wave = SquareWave::new(padded, config.bit_period, config.amplitude)?;
    let coefficients =
        FourierCoefficients::for_wave(&wave, config.harmonics, config.samples_per_unit, config.rule)?;
    debug!("a0 = {:.6} (wave mean {:.6})", coefficients.a0(), wave.mean());

    let series = FourierSeries::new(coefficients);
    let decoded = decode_bits(&series, message.len(), config.bit_period)?;
    let errors = bit_errors(&message, &decoded);

    let end = message.len() as f64 * config.bit_period;
    let grid = linspace(0.0, end, message.len() * MSE_POINTS_PER_BIT + 1);
    let mse = mean_squared_error(&wave, &series, &grid)?;

    info!("decoded {} ({} bit errors), mse {:.6}", decoded, errors, mse);

    Ok(ApproximationReport {
        message,
        wave,
        series,
        decoded,
        bit_errors: errors,
        mse,
    })
}
