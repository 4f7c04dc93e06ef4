//! Error type shared by every stage of the approximation pipeline

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FourierError {
    #[error("Bit string is empty")]
    EmptyBits,

    #[error("Invalid bit '{found}' at position {position} (expected '0' or '1')")]
    InvalidBit { position: usize, found: char },

    #[error("Invalid value for {name}: {value}")]
    InvalidParameter { name: &'static str, value: String },

    #[error("Integration range [{start}, {end}] with {steps} steps is empty")]
    InvalidRange { start: f64, end: f64, steps: usize },

    #[error("FFT failed: {0}")]
    Fft(String),

    #[error("Failed to render plot: {0}")]
    Plot(String),

    #[error("Failed to write CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid arguments: {0}")]
    Config(String),
}

impl FourierError {
    pub(crate) fn parameter(name: &'static str, value: impl ToString) -> Self {
        FourierError::InvalidParameter {
            name,
            value: value.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, FourierError>;
