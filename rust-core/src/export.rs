//! Coefficient table export as CSV

use crate::error::Result;
use crate::series::FourierCoefficients;
use std::io::Write;
use std::path::Path;

/// Write one `n,a,b,amplitude` row per harmonic, `a_0` first
pub fn write_coefficients<W: Write>(writer: W, coefficients: &FourierCoefficients) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for row in coefficients.rows() {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Write the coefficient table to `path`
pub fn write_coefficients_csv<P: AsRef<Path>>(path: P, coefficients: &FourierCoefficients) -> Result<()> {
    let file = std::fs::File::create(path.as_ref())?;
    write_coefficients(file, coefficients)?;
    log::info!("wrote {} coefficient rows to {}", coefficients.harmonics() + 1, path.as_ref().display());
    Ok(())
}
