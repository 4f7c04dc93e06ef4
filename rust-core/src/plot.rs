//! SVG rendering of the wave, its approximation and the receiver's view

use crate::error::{FourierError, Result};
use crate::receiver::reconstruct;
use crate::series::FourierSeries;
use crate::signal::{linspace, SquareWave};
use ndarray::Array1;
use plotters::prelude::*;
use std::path::Path;

const APPROXIMATION_COLOR: RGBColor = RGBColor(230, 170, 0);

/// Plot appearance
#[derive(Debug, Clone)]
pub struct PlotStyle {
    pub width: u32,
    pub height: u32,
    pub caption: String,
}

impl Default for PlotStyle {
    fn default() -> Self {
        Self {
            width: 1250,
            height: 750,
            caption: "Square Wave Function and Fourier Estimation".to_string(),
        }
    }
}

/// Three traces sampled on a shared time grid
#[derive(Debug, Clone)]
pub struct PlotData {
    pub x: Array1<f64>,
    pub original: Array1<f64>,
    pub approximation: Array1<f64>,
    pub reconstruction: Array1<f64>,
}

impl PlotData {
    /// Sample over `[0, end]` with `points` points
    ///
    /// # Arguments
    /// * `wave` - Original square wave f(x)
    /// * `series` - Approximation g(x)
    /// * `end` - Right edge of the window (usually the unpadded message length)
    /// * `points` - Grid size (>= 2)
    /// * `display_amplitude` - Height of the thresholded trace
    pub fn sample(
        wave: &SquareWave,
        series: &FourierSeries,
        end: f64,
        points: usize,
        display_amplitude: f64,
    ) -> Result<Self> {
        if points < 2 {
            return Err(FourierError::parameter("points", points));
        }
        if !end.is_finite() || end <= 0.0 {
            return Err(FourierError::parameter("end", end));
        }

        let x = linspace(0.0, end, points);
        let original = wave.sample(&x);
        let approximation = series.sample(&x);
        let reconstruction = reconstruct(&approximation, display_amplitude);

        Ok(Self {
            x,
            original,
            approximation,
            reconstruction,
        })
    }

    fn y_range(&self) -> (f64, f64) {
        let (lo, hi) = self
            .original
            .iter()
            .chain(self.approximation.iter())
            .chain(self.reconstruction.iter())
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)));
        let pad = ((hi - lo) * 0.05).max(1e-3);
        (lo - pad, hi + pad)
    }

    fn points<'a>(&'a self, y: &'a Array1<f64>) -> impl Iterator<Item = (f64, f64)> + 'a {
        self.x.iter().copied().zip(y.iter().copied())
    }
}

fn plot_err<E: std::fmt::Display>(e: E) -> FourierError {
    FourierError::Plot(e.to_string())
}

/// Render all three traces to an SVG file
pub fn render_svg<P: AsRef<Path>>(path: P, data: &PlotData, style: &PlotStyle) -> Result<()> {
    let x_start = data.x.iter().next().copied().unwrap_or(0.0);
    let x_end = data.x.iter().last().copied().unwrap_or(1.0);
    let (y_lo, y_hi) = data.y_range();

    let root = SVGBackend::new(path.as_ref(), (style.width, style.height)).into_drawing_area();
    root.fill(&WHITE).map_err(plot_err)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(&style.caption, ("sans-serif", 24))
        .margin(15)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(x_start..x_end, y_lo..y_hi)
        .map_err(plot_err)?;

    chart
        .configure_mesh()
        .x_desc("x")
        .y_desc("y, z, r")
        .draw()
        .map_err(plot_err)?;

    chart
        .draw_series(LineSeries::new(data.points(&data.original), &BLUE))
        .map_err(plot_err)?
        .label("f(x) (original binary square wave)")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE));

    chart
        .draw_series(LineSeries::new(data.points(&data.approximation), &APPROXIMATION_COLOR))
        .map_err(plot_err)?
        .label("g(x) (Fourier series approximation)")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], APPROXIMATION_COLOR));

    chart
        .draw_series(LineSeries::new(data.points(&data.reconstruction), &RED))
        .map_err(plot_err)?
        .label("reconstructed(x) (receiver threshold, scaled)")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED));

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(plot_err)?;

    root.present().map_err(plot_err)?;
    log::info!("rendered plot to {}", path.as_ref().display());
    Ok(())
}
