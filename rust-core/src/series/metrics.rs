//! Approximation error measures

use super::approximation::FourierSeries;
use super::coefficients::FourierCoefficients;
use crate::error::{FourierError, Result};
use crate::signal::SquareWave;
use ndarray::Array1;

/// Mean squared difference between the wave and the series over `grid`
pub fn mean_squared_error(wave: &SquareWave, series: &FourierSeries, grid: &Array1<f64>) -> Result<f64> {
    if grid.is_empty() {
        return Err(FourierError::parameter("grid", "empty"));
    }

    let err = wave.sample(grid) - series.sample(grid);
    Ok(err.mapv(|e| e * e).sum() / grid.len() as f64)
}

/// MSE of the partial sums of `coefficients` at each requested order
///
/// # Returns
/// `(order, mse)` pairs in the order given; orders beyond the available
/// harmonics are clamped.
pub fn convergence_profile(
    wave: &SquareWave,
    coefficients: &FourierCoefficients,
    orders: &[usize],
    grid: &Array1<f64>,
) -> Result<Vec<(usize, f64)>> {
    if grid.is_empty() {
        return Err(FourierError::parameter("grid", "empty"));
    }

    let target = wave.sample(grid);
    let series = FourierSeries::new(coefficients.clone());

    Ok(orders
        .iter()
        .map(|&order| {
            let order = order.min(coefficients.harmonics());
            let mse = grid
                .iter()
                .zip(target.iter())
                .map(|(&x, &y)| {
                    let e = y - series.evaluate_partial(x, order);
                    e * e
                })
                .sum::<f64>()
                / grid.len() as f64;
            (order, mse)
        })
        .collect())
}
