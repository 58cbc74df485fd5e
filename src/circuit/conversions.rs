//! Trait implementations for the circuit types
//!
//! `FromStr` parsing for input words and output names, plus `Display` for
//! input tuples. These are the only fallible surfaces of the crate; the
//! evaluation itself is total.

use super::error::{ParseInputsError, ParseOutputError};
use super::{Inputs, OutputBit};
use std::fmt;
use std::str::FromStr;

impl FromStr for Inputs {
    type Err = ParseInputsError;

    /// Parse an input word in the order `D A1 A0 B1 B0`
    ///
    /// Whitespace between bits is ignored, so `"10101"` and `"1 0 1 0 1"`
    /// parse to the same tuple.
    ///
    /// # Examples
    ///
    /// ```
    /// use bitcalc::Inputs;
    ///
    /// let inputs: Inputs = "10011".parse().unwrap();
    /// assert!(inputs.d);
    /// assert_eq!(inputs.a(), 0);
    /// assert_eq!(inputs.b(), 3);
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut bits = [false; 5];
        let mut count = 0;
        for ch in s.chars() {
            if ch.is_whitespace() {
                continue;
            }
            let bit = match ch {
                '0' => false,
                '1' => true,
                other => {
                    return Err(ParseInputsError::InvalidBit {
                        character: other,
                        position: count,
                    })
                }
            };
            if count < 5 {
                bits[count] = bit;
            }
            count += 1;
        }
        if count != 5 {
            return Err(ParseInputsError::WrongLength { found: count });
        }
        Ok(Inputs {
            d: bits[0],
            a1: bits[1],
            a0: bits[2],
            b1: bits[3],
            b0: bits[4],
        })
    }
}

impl fmt::Display for Inputs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}{}{}",
            self.d as u8, self.a1 as u8, self.a0 as u8, self.b1 as u8, self.b0 as u8
        )
    }
}

impl FromStr for OutputBit {
    type Err = ParseOutputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "C2" | "c2" => Ok(OutputBit::C2),
            "C1" | "c1" => Ok(OutputBit::C1),
            "C0" | "c0" => Ok(OutputBit::C0),
            other => Err(ParseOutputError::UnknownOutput {
                name: other.to_string(),
            }),
        }
    }
}
