//! Binary messages and the square waves they describe

pub mod bits;
pub mod square;

pub use bits::BitString;
pub use square::{linspace, SquareWave};
