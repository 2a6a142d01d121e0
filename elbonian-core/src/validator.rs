//! Structural rules for Elbonian numerals
//!
//! Rules run in a fixed order and stop at the first failure:
//!
//! 1. non-empty
//! 2. every character is a symbol
//! 3. per-symbol multiplicity caps
//! 4. coupling between D/C, Y/X and J/I
//! 5. descending magnitude across every adjacent pair

use crate::error::{ConversionError, MalformedReason, Result};
use crate::numeral::{Numeral, Symbols};
use crate::symbol::{Symbol, DESCENDING};

/// Occurrence count per symbol, indexed by table position
type Counts = [usize; DESCENDING.len()];

/// Validate a trimmed string as an Elbonian numeral
pub fn parse_elbonian(text: &str) -> Result<Numeral> {
    let reject = |reason: MalformedReason| {
        log::debug!("rejected {text:?}: {reason}");
        ConversionError::malformed(text, reason)
    };

    if text.is_empty() {
        return Err(reject(MalformedReason::Empty));
    }

    let symbols = check_alphabet(text).map_err(reject)?;
    let counts = count(&symbols);
    check_multiplicity(&counts).map_err(reject)?;
    check_coupling(&counts).map_err(reject)?;
    check_order(&symbols).map_err(reject)?;

    Ok(Numeral::from_validated(symbols))
}

fn check_alphabet(text: &str) -> std::result::Result<Symbols, MalformedReason> {
    text.chars()
        .enumerate()
        .map(|(position, ch)| {
            Symbol::from_char(ch).ok_or(MalformedReason::InvalidSymbol {
                symbol: ch,
                position,
            })
        })
        .collect()
}

fn count(symbols: &[Symbol]) -> Counts {
    let mut counts = [0; DESCENDING.len()];
    for symbol in symbols {
        counts[symbol.index()] += 1;
    }
    counts
}

fn check_multiplicity(counts: &Counts) -> std::result::Result<(), MalformedReason> {
    for symbol in DESCENDING {
        let count = counts[symbol.index()];
        if count > symbol.cap() {
            return Err(MalformedReason::MultiplicityExceeded {
                symbol,
                count,
                cap: symbol.cap(),
            });
        }
    }
    Ok(())
}

fn check_coupling(counts: &Counts) -> std::result::Result<(), MalformedReason> {
    for major in DESCENDING {
        let Some(minor) = major.coupled_minor() else {
            continue;
        };
        let count = counts[minor.index()];
        if counts[major.index()] == 1 && count > 1 {
            return Err(MalformedReason::CouplingViolated {
                major,
                minor,
                count,
            });
        }
    }
    Ok(())
}

fn check_order(symbols: &[Symbol]) -> std::result::Result<(), MalformedReason> {
    match symbols
        .windows(2)
        .position(|pair| pair[0].value() < pair[1].value())
    {
        Some(position) => Err(MalformedReason::OrderViolated {
            position,
            previous: symbols[position],
            next: symbols[position + 1],
        }),
        None => Ok(()),
    }
}
