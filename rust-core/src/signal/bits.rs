//! Binary message parsing

use crate::error::{FourierError, Result};
use std::fmt;
use std::str::FromStr;

/// Ordered sequence of bits making up a message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitString {
    bits: Vec<bool>,
}

impl BitString {
    /// Parse a string of `'0'` and `'1'` characters
    ///
    /// Surrounding whitespace is ignored; any other character is rejected.
    pub fn parse(text: &str) -> Result<Self> {
        let text = text.trim();
        if text.is_empty() {
            return Err(FourierError::EmptyBits);
        }

        let bits = text
            .chars()
            .enumerate()
            .map(|(position, c)| match c {
                '0' => Ok(false),
                '1' => Ok(true),
                found => Err(FourierError::InvalidBit { position, found }),
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { bits })
    }

    /// Build directly from bits
    pub fn from_bits(bits: Vec<bool>) -> Result<Self> {
        if bits.is_empty() {
            return Err(FourierError::EmptyBits);
        }
        Ok(Self { bits })
    }

    /// Append `zeros` trailing `0` bits
    ///
    /// The series treats the message as periodic. Padding gives the
    /// approximation a tail to smear its wrap-around error over, keeping
    /// the head of the message crisp.
    pub fn padded(&self, zeros: usize) -> Self {
        let mut bits = Vec::with_capacity(self.bits.len() + zeros);
        bits.extend_from_slice(&self.bits);
        bits.resize(self.bits.len() + zeros, false);
        Self { bits }
    }

    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Number of `1` bits
    pub fn ones(&self) -> usize {
        self.bits.iter().filter(|&&b| b).count()
    }
}

impl FromStr for BitString {
    type Err = FourierError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for BitString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &bit in &self.bits {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trips_through_display() {
        let bits = BitString::parse("100101").unwrap();
        assert_eq!(bits.len(), 6);
        assert_eq!(bits.ones(), 3);
        assert_eq!(bits.to_string(), "100101");
    }

    #[test]
    fn test_parse_rejects_empty() {
        assert!(matches!(BitString::parse(""), Err(FourierError::EmptyBits)));
        assert!(matches!(BitString::parse("   "), Err(FourierError::EmptyBits)));
    }

    #[test]
    fn test_parse_reports_bad_character() {
        match BitString::parse("10a1") {
            Err(FourierError::InvalidBit { position, found }) => {
                assert_eq!(position, 2);
                assert_eq!(found, 'a');
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_padding_appends_zeros() {
        let bits: BitString = "11".parse().unwrap();
        let padded = bits.padded(3);
        assert_eq!(padded.to_string(), "11000");
        assert_eq!(padded.ones(), 2);

        // Original is untouched
        assert_eq!(bits.len(), 2);
    }
}
