//! Converter facade
//!
//! Classifies and validates once at construction, then answers conversion
//! queries from the stored value.

use crate::arabic::parse_arabic;
use crate::classifier::{classify, Candidate};
use crate::error::{ConversionError, Result};
use crate::numeral::{Numeral, NumeralValue};
use crate::validator::parse_elbonian;
use std::str::FromStr;

/// A validated number in either system
///
/// # Example
///
/// ```rust
/// use elbonian_core::Converter;
///
/// let converter = Converter::new(" MCXXI ").unwrap();
/// assert_eq!(converter.to_arabic(), 1121);
///
/// let converter = Converter::new("1121").unwrap();
/// assert_eq!(converter.to_elbonian().unwrap(), "MCXXI");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Converter {
    source: String,
    value: NumeralValue,
}

impl Converter {
    /// Validate `input` as an Arabic integer or an Elbonian numeral
    ///
    /// Surrounding whitespace is ignored. Fails with
    /// [`ConversionError::MalformedNumber`] or
    /// [`ConversionError::ValueOutOfBounds`].
    pub fn new(input: &str) -> Result<Self> {
        let value = match classify(input)? {
            Candidate::Arabic(digits) => NumeralValue::Arabic(parse_arabic(digits)?),
            Candidate::Elbonian(text) => NumeralValue::Elbonian(parse_elbonian(text)?),
        };

        let source = input.trim().to_string();
        log::trace!("constructed {value:?} from {source:?}");
        Ok(Self { source, value })
    }

    /// The trimmed input
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The validated value
    pub fn value(&self) -> &NumeralValue {
        &self.value
    }

    /// Whether the input was a decimal integer
    pub fn is_arabic(&self) -> bool {
        matches!(self.value, NumeralValue::Arabic(_))
    }

    /// Whether the input was an Elbonian numeral
    pub fn is_elbonian(&self) -> bool {
        matches!(self.value, NumeralValue::Elbonian(_))
    }

    /// Integer value of the input
    pub fn to_arabic(&self) -> u32 {
        self.value.as_arabic()
    }

    /// Canonical Elbonian string for the input
    ///
    /// Always succeeds for Elbonian input. Arabic input above
    /// [`MAX_ENCODABLE`](crate::MAX_ENCODABLE) fails with
    /// [`ConversionError::NotRepresentable`].
    pub fn to_elbonian(&self) -> Result<String> {
        self.to_numeral().map(|numeral| numeral.to_string())
    }

    /// Like [`to_elbonian`](Self::to_elbonian), keeping the typed numeral
    pub fn to_numeral(&self) -> Result<Numeral> {
        self.value.as_elbonian()
    }

    /// The input expressed in the other system
    pub fn convert(&self) -> Result<NumeralValue> {
        match &self.value {
            NumeralValue::Arabic(_) => self.to_numeral().map(NumeralValue::Elbonian),
            NumeralValue::Elbonian(numeral) => Ok(NumeralValue::Arabic(numeral.value())),
        }
    }
}

impl FromStr for Converter {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ErrorKind, MalformedReason};

    #[test]
    fn test_elbonian_input() {
        let converter = Converter::new("MCXXI").unwrap();
        assert!(converter.is_elbonian());
        assert!(!converter.is_arabic());
        assert_eq!(converter.to_arabic(), 1121);
        assert_eq!(converter.to_elbonian().unwrap(), "MCXXI");
    }

    #[test]
    fn test_arabic_input() {
        let converter = Converter::new("1121").unwrap();
        assert!(converter.is_arabic());
        assert_eq!(converter.to_arabic(), 1121);
        assert_eq!(converter.to_elbonian().unwrap(), "MCXXI");
    }

    #[test]
    fn test_source_is_trimmed() {
        let converter = Converter::new(" MCXXI ").unwrap();
        assert_eq!(converter.source(), "MCXXI");
        assert_eq!(converter, Converter::new("MCXXI").unwrap());
    }

    #[test]
    fn test_convert_flips_system() {
        let converter: Converter = "KJ".parse().unwrap();
        assert_eq!(converter.convert().unwrap(), NumeralValue::Arabic(8));

        let converter: Converter = "8".parse().unwrap();
        assert_eq!(
            converter.convert().unwrap(),
            NumeralValue::Elbonian("KJ".parse().unwrap())
        );
    }

    #[test]
    fn test_construction_errors_propagate_unchanged() {
        let err = Converter::new("MC XXI").unwrap_err();
        assert_eq!(
            err.malformed_reason(),
            Some(&MalformedReason::EmbeddedWhitespace { position: 2 })
        );

        let err = Converter::new("0").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::OutOfBounds);
    }

    #[test]
    fn test_accepted_but_unencodable() {
        let converter = Converter::new("4997").unwrap();
        assert_eq!(converter.to_arabic(), 4997);
        assert_eq!(
            converter.to_elbonian().unwrap_err().kind(),
            ErrorKind::NotRepresentable
        );
    }
}
