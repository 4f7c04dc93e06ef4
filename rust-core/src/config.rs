//! Run configuration and command-line parsing

use crate::error::{FourierError, Result};
use crate::series::{riemann_steps, RiemannRule};
use crate::signal::BitString;
use std::path::PathBuf;
use std::str::FromStr;

pub const USAGE: &str = "\
Usage: square-fourier [OPTIONS]

Approximate a binary square wave with a truncated Fourier series.

Options:
  --bits <BITS>                Message to encode [default: 100101000111011100011110]
  --padding <N>                Trailing zero bits appended to the message [default: 100]
  --amplitude <A>              Square wave level magnitude [default: 10]
  --period <T>                 Width of one bit slot [default: 1]
  --harmonics <N>              Number of cosine/sine pairs [default: 200]
  --samples-per-unit <N>       Riemann sub-intervals per unit length [default: 100]
  --rule <left|midpoint|right> Riemann sample point [default: midpoint]
  --points <N>                 Plot grid size [default: 10000]
  --display-amplitude <A>      Height of the thresholded trace [default: 20]
  --output <PATH>              SVG plot destination [default: fourier.svg]
  --csv <PATH>                 Also write the coefficient table as CSV
  --verbose                    Enable debug logging
  --help                       Print this message
";

/// Upper bound on the plot grid size
pub const MAX_PLOT_POINTS: usize = 1 << 22;

/// Parameters for one approximation run
#[derive(Debug, Clone, PartialEq)]
pub struct ApproximationConfig {
    /// Message bits (before padding)
    pub bits: String,

    /// Trailing `0` bits appended before building the wave
    pub padding: usize,

    /// Square wave level magnitude
    pub amplitude: f64,

    /// Width of one bit slot
    pub bit_period: f64,

    /// Number of cosine/sine pairs N
    pub harmonics: usize,

    /// Riemann sub-intervals per unit length
    pub samples_per_unit: usize,

    /// Riemann sample point
    pub rule: RiemannRule,

    /// Plot grid size
    pub plot_points: usize,

    /// Height of the thresholded trace in the plot
    pub display_amplitude: f64,

    /// SVG plot destination
    pub output: PathBuf,

    /// Optional coefficient table destination
    pub csv: Option<PathBuf>,

    /// Debug logging
    pub verbose: bool,
}

impl Default for ApproximationConfig {
    fn default() -> Self {
        Self {
            bits: "100101000111011100011110".to_string(),
            padding: 100,
            amplitude: 10.0,
            bit_period: 1.0,
            harmonics: 200,
            samples_per_unit: 100,
            rule: RiemannRule::Midpoint,
            plot_points: 10_000,
            display_amplitude: 20.0,
            output: PathBuf::from("fourier.svg"),
            csv: None,
            verbose: false,
        }
    }
}

/// What the command line asked for
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Run(ApproximationConfig),
    Help,
}

impl FromStr for RiemannRule {
    type Err = FourierError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "left" => Ok(RiemannRule::Left),
            "midpoint" | "mid" => Ok(RiemannRule::Midpoint),
            "right" => Ok(RiemannRule::Right),
            other => Err(FourierError::Config(format!("unknown rule '{}'", other))),
        }
    }
}

fn parse_value<T: FromStr>(flag: &str, value: &str) -> Result<T> {
    value
        .parse()
        .map_err(|_| FourierError::Config(format!("invalid value '{}' for {}", value, flag)))
}

impl ApproximationConfig {
    /// Parse command-line arguments (without the program name)
    pub fn from_args<I, S>(args: I) -> Result<Command>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut config = Self::default();
        let mut args = args.into_iter().map(Into::into);

        while let Some(arg) = args.next() {
            // Accept both `--flag value` and `--flag=value`
            let (flag, inline) = match arg.split_once('=') {
                Some((flag, value)) => (flag.to_string(), Some(value.to_string())),
                None => (arg.clone(), None),
            };

            match flag.as_str() {
                "--help" | "-h" => return Ok(Command::Help),
                "--verbose" | "-v" => {
                    config.verbose = true;
                    continue;
                }
                _ => {}
            }

            let value = match inline {
                Some(v) => v,
                None => args
                    .next()
                    .ok_or_else(|| FourierError::Config(format!("missing value for {}", flag)))?,
            };

            match flag.as_str() {
                "--bits" => config.bits = value,
                "--padding" => config.padding = parse_value(&flag, &value)?,
                "--amplitude" => config.amplitude = parse_value(&flag, &value)?,
                "--period" => config.bit_period = parse_value(&flag, &value)?,
                "--harmonics" => config.harmonics = parse_value(&flag, &value)?,
                "--samples-per-unit" => config.samples_per_unit = parse_value(&flag, &value)?,
                "--rule" => config.rule = value.parse()?,
                "--points" => config.plot_points = parse_value(&flag, &value)?,
                "--display-amplitude" => config.display_amplitude = parse_value(&flag, &value)?,
                "--output" => config.output = PathBuf::from(value),
                "--csv" => config.csv = Some(PathBuf::from(value)),
                other => return Err(FourierError::Config(format!("unknown argument '{}'", other))),
            }
        }

        config.validate()?;
        Ok(Command::Run(config))
    }

    /// Check every parameter before any work starts
    pub fn validate(&self) -> Result<()> {
        let message = BitString::parse(&self.bits)?;

        if !self.amplitude.is_finite() || self.amplitude <= 0.0 {
            return Err(FourierError::parameter("amplitude", self.amplitude));
        }
        if !self.bit_period.is_finite() || self.bit_period <= 0.0 {
            return Err(FourierError::parameter("bit_period", self.bit_period));
        }
        if self.samples_per_unit == 0 {
            return Err(FourierError::parameter("samples_per_unit", self.samples_per_unit));
        }
        if self.plot_points < 2 || self.plot_points > MAX_PLOT_POINTS {
            return Err(FourierError::parameter("plot_points", self.plot_points));
        }
        if !self.display_amplitude.is_finite() || self.display_amplitude <= 0.0 {
            return Err(FourierError::parameter("display_amplitude", self.display_amplitude));
        }

        let bit_count = message
            .len()
            .checked_add(self.padding)
            .ok_or_else(|| FourierError::parameter("padding", self.padding))?;
        let steps = riemann_steps(bit_count, self.bit_period, self.samples_per_unit)?;
        // Harmonics past half the sample count only alias lower ones
        if self.harmonics >= steps / 2 {
            return Err(FourierError::parameter("harmonics", self.harmonics));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(args: &[&str]) -> Result<ApproximationConfig> {
        match ApproximationConfig::from_args(args.iter().copied())? {
            Command::Run(config) => Ok(config),
            Command::Help => panic!("unexpected help"),
        }
    }

    #[test]
    fn test_defaults() {
        let config = run(&[]).unwrap();
        assert_eq!(config, ApproximationConfig::default());
        assert_eq!(config.harmonics, 200);
        assert_eq!(config.padding, 100);
        assert_eq!(config.amplitude, 10.0);
    }

    #[test]
    fn test_parses_flags() {
        let config = run(&[
            "--bits", "1101",
            "--padding=4",
            "--harmonics", "12",
            "--amplitude", "2.5",
            "--rule", "left",
            "--csv", "out.csv",
            "--verbose",
        ])
        .unwrap();

        assert_eq!(config.bits, "1101");
        assert_eq!(config.padding, 4);
        assert_eq!(config.harmonics, 12);
        assert_eq!(config.amplitude, 2.5);
        assert_eq!(config.rule, RiemannRule::Left);
        assert_eq!(config.csv, Some(PathBuf::from("out.csv")));
        assert!(config.verbose);
    }

    #[test]
    fn test_help() {
        let cmd = ApproximationConfig::from_args(["--padding", "3", "--help"]).unwrap();
        assert_eq!(cmd, Command::Help);
    }

    #[test]
    fn test_errors() {
        assert!(matches!(run(&["--harmonics"]), Err(FourierError::Config(_))));
        assert!(matches!(run(&["--harmonics", "many"]), Err(FourierError::Config(_))));
        assert!(matches!(run(&["--frobnicate", "1"]), Err(FourierError::Config(_))));
        assert!(matches!(run(&["--rule", "trapezoid"]), Err(FourierError::Config(_))));
        assert!(matches!(run(&["--bits", "10x"]), Err(FourierError::InvalidBit { .. })));
        assert!(matches!(run(&["--amplitude", "0"]), Err(FourierError::InvalidParameter { .. })));
        assert!(matches!(run(&["--points", "1"]), Err(FourierError::InvalidParameter { .. })));
    }

    #[test]
    fn test_rejects_oversized_work() {
        for args in [
            &["--period", "1e10"][..],
            &["--period", "1e300"],
            &["--padding", "18446744073709551615"],
            &["--samples-per-unit", "1000000000"],
            &["--harmonics", "1000000000000"],
            &["--points", "1000000000"],
        ] {
            assert!(
                matches!(run(args), Err(FourierError::InvalidParameter { .. })),
                "{:?} should be rejected",
                args
            );
        }
    }

    #[test]
    fn test_accepts_fractional_period() {
        let config = run(&["--bits", "110", "--padding", "0", "--period", "0.1"]).unwrap();
        assert_eq!(config.bit_period, 0.1);
        // 3 bits x 10 steps per bit x 2 periods = 60 steps, so at most 29 harmonics
        assert!(run(&["--bits", "110", "--padding", "0", "--period", "0.1", "--harmonics", "29"]).is_ok());
        assert!(run(&["--bits", "110", "--padding", "0", "--period", "0.1", "--harmonics", "30"]).is_err());
    }
}
