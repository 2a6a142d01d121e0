//! Convert command implementation

use crate::config::{CliConfig, OutputFormat, Target};
use crate::input::read_number;
use crate::output::Report;
use anyhow::Result;
use clap::Args;
use elbonian_core::Converter;
use std::io::{BufRead, Write};

/// Arguments for the convert command
#[derive(Debug, Args)]
pub struct ConvertArgs {
    /// Number to convert (default: one line from stdin)
    #[arg(value_name = "NUMBER")]
    pub number: Option<String>,

    /// Target numeral system
    #[arg(short, long, value_enum)]
    pub to: Option<Target>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,
}

impl ConvertArgs {
    /// Execute the convert command
    pub fn execute<R: BufRead, W: Write>(
        &self,
        config: &CliConfig,
        reader: R,
        writer: W,
    ) -> Result<()> {
        let number = read_number(self.number.as_deref(), reader)?;
        let converter = Converter::new(&number)?;

        let target = self.to.unwrap_or(config.output.default_target);
        let converted = match resolve_target(target, &converter) {
            Target::Arabic => converter.to_arabic().to_string(),
            _ => converter.to_elbonian()?,
        };
        log::info!("converted {:?} to {converted}", converter.source());

        let format = self.format.unwrap_or(config.output.default_format);
        let report = Report::from_converter(&converter).with_converted(converted);

        let mut formatter = super::formatter(format, config.output.pretty_json, writer);
        formatter.write_report(&report)?;
        formatter.finish()
    }
}

/// `Auto` picks the system the input is not written in
fn resolve_target(target: Target, converter: &Converter) -> Target {
    match target {
        Target::Auto if converter.is_arabic() => Target::Elbonian,
        Target::Auto => Target::Arabic,
        explicit => explicit,
    }
}
