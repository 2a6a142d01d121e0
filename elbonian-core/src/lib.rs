//! Conversion between Arabic integers and Elbonian numerals
//!
//! Elbonian is a fictional additive numeral system of ten symbols:
//!
//! | Symbol | I | J | K | X  | Y  | Z  | C   | D   | E   | M    |
//! |--------|---|---|---|----|----|----|-----|-----|-----|------|
//! | Value  | 1 | 3 | 5 | 10 | 30 | 50 | 100 | 300 | 500 | 1000 |
//!
//! A well-formed numeral lists its symbols largest first, uses I, X, C and M
//! at most twice and every other symbol at most once, and may not repeat C,
//! X or I while D, Y or J (respectively) is present.
//!
//! # Architecture
//!
//! - [`symbol`]: the symbol table
//! - [`classifier`]: decides which system an input belongs to
//! - [`arabic`]: bounds checks decimal input
//! - [`validator`]: the structural rules for Elbonian input
//! - [`codec`]: additive decoding and greedy encoding
//! - [`converter`]: the facade tying the stages together
//!
//! # Example
//!
//! ```rust
//! use elbonian_core::{Converter, ConversionError};
//!
//! let converter = Converter::new("MCXXI").unwrap();
//! assert_eq!(converter.to_arabic(), 1121);
//!
//! assert!(matches!(
//!     Converter::new("CM"),
//!     Err(ConversionError::MalformedNumber { .. })
//! ));
//! ```

#![warn(missing_docs)]

pub mod arabic;
pub mod classifier;
pub mod codec;
pub mod converter;
pub mod error;
pub mod numeral;
pub mod symbol;
pub mod validator;

// Re-export key types
pub use arabic::{parse_arabic, MAX_VALUE, MIN_VALUE};
pub use classifier::{classify, Candidate};
pub use codec::{decode, encode, MAX_ENCODABLE};
pub use converter::Converter;
pub use error::{ConversionError, ErrorKind, MalformedReason, Result};
pub use numeral::{Numeral, NumeralValue};
pub use symbol::{symbols_by_descending_magnitude, value_of, Symbol};
pub use validator::parse_elbonian;
