//! Error types for parsing circuit inputs and output names

use std::fmt;
use std::io;

/// Errors from parsing an input word such as `"10101"`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseInputsError {
    /// The word did not contain exactly five bits
    WrongLength {
        /// Number of bit characters found
        found: usize,
    },
    /// A character other than `0` or `1` appeared in the word
    InvalidBit {
        /// The offending character
        character: char,
        /// Position of the character within the word (bit positions only)
        position: usize,
    },
}

impl fmt::Display for ParseInputsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseInputsError::WrongLength { found } => {
                write!(f, "expected 5 input bits (D A1 A0 B1 B0), found {}", found)
            }
            ParseInputsError::InvalidBit {
                character,
                position,
            } => write!(
                f,
                "invalid bit {:?} at position {} (expected '0' or '1')",
                character, position
            ),
        }
    }
}

impl std::error::Error for ParseInputsError {}

impl From<ParseInputsError> for io::Error {
    fn from(err: ParseInputsError) -> Self {
        io::Error::new(io::ErrorKind::InvalidInput, err)
    }
}

/// Errors from parsing an output-bit name such as `"C2"`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseOutputError {
    /// The name did not match `C2`, `C1`, or `C0`
    UnknownOutput {
        /// The name that was given
        name: String,
    },
}

impl fmt::Display for ParseOutputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseOutputError::UnknownOutput { name } => {
                write!(f, "unknown output {:?} (expected C2, C1, or C0)", name)
            }
        }
    }
}

impl std::error::Error for ParseOutputError {}

impl From<ParseOutputError> for io::Error {
    fn from(err: ParseOutputError) -> Self {
        io::Error::new(io::ErrorKind::InvalidInput, err)
    }
}
