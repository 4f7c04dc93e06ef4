use anyhow::Context;
use log::{info, LevelFilter};
use simple_logger::SimpleLogger;
use square_fourier::config::{Command, USAGE};
use square_fourier::export::write_coefficients_csv;
use square_fourier::plot::{render_svg, PlotStyle};
use square_fourier::{pipeline, ApproximationConfig};
use std::time::Instant;

/// Leading coefficients echoed to the log
const PREVIEW_TERMS: usize = 5;

fn main() -> anyhow::Result<()> {
    let config = match ApproximationConfig::from_args(std::env::args().skip(1))? {
        Command::Help => {
            print!("{}", USAGE);
            return Ok(());
        }
        Command::Run(config) => config,
    };

    let level = if config.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    SimpleLogger::new()
        .with_level(level)
        .init()
        .context("failed to initialise logger")?;

    let start = Instant::now();
    let report = pipeline::run(&config)?;
    info!("Series computed in {:?}", start.elapsed());

    let coeffs = report.coefficients();
    info!("a_0 = {}", coeffs.a0());
    for row in coeffs.rows().iter().skip(1).take(PREVIEW_TERMS) {
        info!("a_{n} = {a:.6}, b_{n} = {b:.6}", n = row.n, a = row.a, b = row.b);
    }
    info!("sent     {}", report.message);
    info!("received {}", report.decoded);

    let data = report.plot_data(config.plot_points, config.display_amplitude)?;
    render_svg(&config.output, &data, &PlotStyle::default())
        .with_context(|| format!("failed to render {}", config.output.display()))?;

    if let Some(path) = &config.csv {
        write_coefficients_csv(path, coeffs)
            .with_context(|| format!("failed to write {}", path.display()))?;
    }

    if report.bit_errors > 0 {
        log::warn!("{} bit errors in the decoded message", report.bit_errors);
    }

    Ok(())
}
