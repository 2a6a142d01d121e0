//! Validated numeral values

use crate::classifier::classify;
use crate::error::{ConversionError, Result};
use crate::symbol::Symbol;
use crate::{codec, validator};
use smallvec::SmallVec;
use std::fmt;
use std::str::FromStr;

/// Inline storage for symbol sequences; the longest numeral, `MMEDCZYXKJI`,
/// has 11 symbols
pub(crate) type Symbols = SmallVec<[Symbol; 12]>;

/// A well-formed Elbonian numeral
///
/// Non-empty, in descending magnitude order, and within every multiplicity
/// and coupling limit. The only ways to obtain one are the validator and
/// the encoder, so a `Numeral` is always canonical for its value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct Numeral {
    pub(crate) symbols: Symbols,
}

impl Numeral {
    pub(crate) fn from_validated(symbols: Symbols) -> Self {
        Self { symbols }
    }

    /// The symbols, largest first
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    /// Number of symbols
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Always false; present for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Arabic value of the numeral
    pub fn value(&self) -> u32 {
        codec::decode(self)
    }
}

impl fmt::Display for Numeral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in &self.symbols {
            write!(f, "{symbol}")?;
        }
        Ok(())
    }
}

impl FromStr for Numeral {
    type Err = ConversionError;

    /// Parses an untrimmed Elbonian string. Decimal input is rejected.
    fn from_str(s: &str) -> Result<Self> {
        validator::parse_elbonian(classify(s)?.text())
    }
}

impl TryFrom<String> for Numeral {
    type Error = ConversionError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Numeral> for String {
    fn from(numeral: Numeral) -> Self {
        numeral.to_string()
    }
}

/// The validated content of a converter
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "form", content = "value", rename_all = "lowercase")
)]
pub enum NumeralValue {
    /// A decimal integer within the accepted range
    Arabic(u32),
    /// A well-formed Elbonian numeral
    Elbonian(Numeral),
}

impl NumeralValue {
    /// Integer value, decoding if needed
    pub fn as_arabic(&self) -> u32 {
        match self {
            NumeralValue::Arabic(value) => *value,
            NumeralValue::Elbonian(numeral) => numeral.value(),
        }
    }

    /// Elbonian form, encoding if needed
    pub fn as_elbonian(&self) -> Result<Numeral> {
        match self {
            NumeralValue::Arabic(value) => codec::encode(*value),
            NumeralValue::Elbonian(numeral) => Ok(numeral.clone()),
        }
    }
}

impl fmt::Display for NumeralValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumeralValue::Arabic(value) => write!(f, "{value}"),
            NumeralValue::Elbonian(numeral) => write!(f, "{numeral}"),
        }
    }
}
