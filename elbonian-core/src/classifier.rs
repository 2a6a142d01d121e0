//! Input classification
//!
//! Decides which numeral system a raw string belongs to. No numeric parsing
//! happens here.

use crate::error::{ConversionError, MalformedReason, Result};

/// A trimmed input tagged with the system it appears to belong to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Candidate<'a> {
    /// Every character is an ASCII digit
    Arabic(&'a str),
    /// Anything else, including the empty string
    Elbonian(&'a str),
}

impl<'a> Candidate<'a> {
    /// The trimmed text
    pub fn text(&self) -> &'a str {
        match self {
            Candidate::Arabic(text) | Candidate::Elbonian(text) => text,
        }
    }
}

/// Trim the input and classify it
///
/// Leading and trailing whitespace is dropped. Whitespace left inside the
/// trimmed text is rejected as malformed whichever system the rest of the
/// text resembles.
pub fn classify(raw: &str) -> Result<Candidate<'_>> {
    let trimmed = raw.trim();

    if let Some(position) = trimmed.chars().position(char::is_whitespace) {
        return Err(ConversionError::malformed(
            trimmed,
            MalformedReason::EmbeddedWhitespace { position },
        ));
    }

    let candidate = if !trimmed.is_empty() && trimmed.bytes().all(|b| b.is_ascii_digit()) {
        Candidate::Arabic(trimmed)
    } else {
        Candidate::Elbonian(trimmed)
    };

    log::trace!("classified {raw:?} as {candidate:?}");
    Ok(candidate)
}
