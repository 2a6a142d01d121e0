//! Bounds checking for decimal literals

use crate::error::{ConversionError, MalformedReason, Result};
use std::num::IntErrorKind;

/// Smallest accepted Arabic value
pub const MIN_VALUE: u32 = 1;

/// Largest accepted Arabic value
pub const MAX_VALUE: u32 = 4997;

/// Parse a decimal literal and check it against `MIN_VALUE..=MAX_VALUE`
///
/// Literals too large for the integer type are reported as out of bounds,
/// since they are well-formed decimals that simply exceed the range.
pub fn parse_arabic(digits: &str) -> Result<u32> {
    let value = match digits.parse::<u32>() {
        Ok(value) => value,
        Err(e) if matches!(e.kind(), IntErrorKind::PosOverflow) => {
            return Err(out_of_bounds(digits));
        }
        Err(_) => {
            return Err(ConversionError::malformed(
                digits,
                MalformedReason::UnparseableDigits,
            ));
        }
    };

    check_bounds(value).map_err(|_| out_of_bounds(digits))
}

/// Check an integer against `MIN_VALUE..=MAX_VALUE`
pub fn check_bounds(value: u32) -> Result<u32> {
    if (MIN_VALUE..=MAX_VALUE).contains(&value) {
        Ok(value)
    } else {
        Err(out_of_bounds(&value.to_string()))
    }
}

fn out_of_bounds(literal: &str) -> ConversionError {
    ConversionError::ValueOutOfBounds {
        value: literal.to_string(),
        min: MIN_VALUE,
        max: MAX_VALUE,
    }
}
