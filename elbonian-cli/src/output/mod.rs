//! Output formatting module

use anyhow::Result;
use elbonian_core::Converter;
use serde::Serialize;

/// Trait for output formatters
pub trait OutputFormatter {
    /// Format and output a single report
    fn write_report(&mut self, report: &Report) -> Result<()>;

    /// Finalize output
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;

/// Numeral system of an input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum System {
    /// Decimal integer
    Arabic,
    /// Elbonian numeral
    Elbonian,
}

/// What a command learned about one input
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    /// The trimmed input
    pub input: String,
    /// System the input is written in
    pub system: System,
    /// Integer value
    pub arabic: u32,
    /// Canonical Elbonian form, absent when the value has none
    pub elbonian: Option<String>,
    /// Result of a conversion, if one was requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub converted: Option<String>,
    /// One-line summary for text output
    #[serde(skip)]
    pub summary: String,
}

impl Report {
    /// Describe a validated converter
    pub fn from_converter(converter: &Converter) -> Self {
        let system = if converter.is_arabic() {
            System::Arabic
        } else {
            System::Elbonian
        };

        Self {
            input: converter.source().to_string(),
            system,
            arabic: converter.to_arabic(),
            elbonian: converter.to_elbonian().ok(),
            converted: None,
            summary: String::new(),
        }
    }

    /// Attach a conversion result, which also becomes the text summary
    pub fn with_converted(mut self, converted: String) -> Self {
        self.summary = converted.clone();
        self.converted = Some(converted);
        self
    }

    /// Set the text summary
    pub fn with_summary(mut self, summary: String) -> Self {
        self.summary = summary;
        self
    }
}
