//! Validate command implementation

use crate::config::{CliConfig, OutputFormat};
use crate::input::read_number;
use crate::output::{Report, System};
use anyhow::Result;
use clap::Args;
use elbonian_core::{ConversionError, Converter};
use std::io::{BufRead, Write};

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Number to validate (default: one line from stdin)
    #[arg(value_name = "NUMBER")]
    pub number: Option<String>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute<R: BufRead, W: Write>(
        &self,
        config: &CliConfig,
        reader: R,
        mut writer: W,
    ) -> Result<()> {
        let number = read_number(self.number.as_deref(), reader)?;
        let format = self.format.unwrap_or(config.output.default_format);

        let converter = match Converter::new(&number) {
            Ok(converter) => converter,
            Err(e) => {
                write_rejection(&mut writer, format, config.output.pretty_json, &number, &e)?;
                return Err(anyhow::anyhow!("Validation failed: {}", e));
            }
        };

        let report = Report::from_converter(&converter);
        let summary = summarize(&report);

        let mut formatter = super::formatter(format, config.output.pretty_json, writer);
        formatter.write_report(&report.with_summary(summary))?;
        formatter.finish()
    }
}

/// Text gets a ✗ line, JSON an object with `valid: false` and the reason
fn write_rejection<W: Write>(
    writer: &mut W,
    format: OutputFormat,
    pretty_json: bool,
    number: &str,
    error: &ConversionError,
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            writeln!(writer, "✗ {:?} is not a valid number", number.trim())?;
        }
        OutputFormat::Json => {
            let rejection = serde_json::json!({
                "input": number.trim(),
                "valid": false,
                "error": error.to_string(),
            });
            if pretty_json {
                serde_json::to_writer_pretty(&mut *writer, &rejection)?;
            } else {
                serde_json::to_writer(&mut *writer, &rejection)?;
            }
            writeln!(writer)?;
        }
    }
    writer.flush()?;
    Ok(())
}

fn summarize(report: &Report) -> String {
    match (report.system, &report.elbonian) {
        (System::Elbonian, _) => format!(
            "✓ {} is a valid Elbonian numeral ({})",
            report.input, report.arabic
        ),
        (System::Arabic, Some(elbonian)) => format!(
            "✓ {} is a valid Arabic number ({elbonian})",
            report.input
        ),
        (System::Arabic, None) => format!(
            "✓ {} is a valid Arabic number (no Elbonian form)",
            report.input
        ),
    }
}
