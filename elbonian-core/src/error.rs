//! Error types for validation and conversion

use crate::symbol::Symbol;
use thiserror::Error;

/// Why a string is not a well-formed numeral
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MalformedReason {
    /// Nothing left after trimming
    #[error("input is empty")]
    Empty,

    /// Whitespace between the first and last non-blank characters
    #[error("whitespace inside the number at position {position}")]
    EmbeddedWhitespace {
        /// Character position within the trimmed input
        position: usize,
    },

    /// A character that is not one of the ten symbols
    #[error("'{symbol}' at position {position} is not an Elbonian symbol")]
    InvalidSymbol {
        /// The offending character
        symbol: char,
        /// Character position within the trimmed input
        position: usize,
    },

    /// A symbol appears more often than its cap allows
    #[error("{symbol} appears {count} times, at most {cap} allowed")]
    MultiplicityExceeded {
        /// The repeated symbol
        symbol: Symbol,
        /// How many times it appears
        count: usize,
        /// Its multiplicity cap
        cap: usize,
    },

    /// A one-like symbol repeated while its five-like partner is present
    #[error("{minor} appears {count} times although {major} is present, at most 1 allowed")]
    CouplingViolated {
        /// The five-like symbol (D, Y or J)
        major: Symbol,
        /// The one-like symbol paired with it (C, X or I)
        minor: Symbol,
        /// How many times the one-like symbol appears
        count: usize,
    },

    /// A smaller symbol placed before a larger one
    #[error("{previous} at position {position} is followed by larger {next}; symbols must be in descending order")]
    OrderViolated {
        /// Position of the first symbol of the offending pair
        position: usize,
        /// The smaller, earlier symbol
        previous: Symbol,
        /// The larger, later symbol
        next: Symbol,
    },

    /// A digit string that is not an integer
    #[error("not a decimal integer")]
    UnparseableDigits,
}

/// Errors raised while constructing or converting a numeral
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    /// The input is not a well-formed numeral in either system
    #[error("malformed number \"{input}\": {reason}")]
    MalformedNumber {
        /// The trimmed input
        input: String,
        /// The rule that rejected it
        reason: MalformedReason,
    },

    /// A decimal integer outside the accepted range
    #[error("value {value} is out of bounds, expected {min}..={max}")]
    ValueOutOfBounds {
        /// The literal as written
        value: String,
        /// Smallest accepted value
        min: u32,
        /// Largest accepted value
        max: u32,
    },

    /// An accepted integer that has no well-formed Elbonian form
    #[error("value {value} has no Elbonian form, the largest numeral is worth {max}")]
    NotRepresentable {
        /// The integer being encoded
        value: u32,
        /// Largest integer an Elbonian numeral can express
        max: u32,
    },
}

/// Coarse category of a [`ConversionError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// See [`ConversionError::MalformedNumber`]
    Malformed,
    /// See [`ConversionError::ValueOutOfBounds`]
    OutOfBounds,
    /// See [`ConversionError::NotRepresentable`]
    NotRepresentable,
}

impl ConversionError {
    pub(crate) fn malformed(input: &str, reason: MalformedReason) -> Self {
        ConversionError::MalformedNumber {
            input: input.to_string(),
            reason,
        }
    }

    /// Category of the error
    pub fn kind(&self) -> ErrorKind {
        match self {
            ConversionError::MalformedNumber { .. } => ErrorKind::Malformed,
            ConversionError::ValueOutOfBounds { .. } => ErrorKind::OutOfBounds,
            ConversionError::NotRepresentable { .. } => ErrorKind::NotRepresentable,
        }
    }

    /// The malformation reason, if this is a malformed-number error
    pub fn malformed_reason(&self) -> Option<&MalformedReason> {
        match self {
            ConversionError::MalformedNumber { reason, .. } => Some(reason),
            _ => None,
        }
    }
}

/// Result type for conversion operations
pub type Result<T> = std::result::Result<T, ConversionError>;
