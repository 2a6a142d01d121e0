//! Decoding and encoding between numerals and integers
//!
//! Elbonian is purely additive: the value of a numeral is the sum of its
//! symbols. Encoding is greedy over the symbol table, largest first, limited
//! by each symbol's cap and by the coupling rule.

use crate::error::{ConversionError, Result};
use crate::numeral::{Numeral, Symbols};
use crate::symbol::DESCENDING;

/// Largest integer with an Elbonian form (`MMEDCZYXKJI`)
pub const MAX_ENCODABLE: u32 = 2999;

/// Sum of the symbol magnitudes
pub fn decode(numeral: &Numeral) -> u32 {
    numeral.symbols().iter().map(|symbol| symbol.value()).sum()
}

/// Canonical numeral for an integer
///
/// Fails with [`ConversionError::NotRepresentable`] when the symbols run out
/// before the remainder reaches zero, which happens for 0 and for every
/// value above [`MAX_ENCODABLE`].
pub fn encode(value: u32) -> Result<Numeral> {
    let mut remainder = value;
    let mut symbols = Symbols::new();

    for symbol in DESCENDING {
        let mut cap = symbol.cap();
        if let Some(major) = DESCENDING
            .iter()
            .find(|major| major.coupled_minor() == Some(symbol))
        {
            if symbols.contains(major) {
                cap = 1;
            }
        }

        let mut placed = 0;
        while placed < cap && remainder >= symbol.value() {
            symbols.push(symbol);
            remainder -= symbol.value();
            placed += 1;
        }
    }

    if remainder != 0 || symbols.is_empty() {
        log::debug!("{value} has no Elbonian form, {remainder} left over");
        return Err(ConversionError::NotRepresentable {
            value,
            max: MAX_ENCODABLE,
        });
    }

    Ok(Numeral::from_validated(symbols))
}
