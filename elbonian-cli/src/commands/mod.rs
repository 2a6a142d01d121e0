//! CLI command implementations

use crate::config::OutputFormat;
use crate::output::{JsonFormatter, OutputFormatter, TextFormatter};
use clap::Subcommand;
use std::io::Write;

pub mod convert;
pub mod list;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Convert a number to the other numeral system
    Convert(convert::ConvertArgs),

    /// Check whether a number is well-formed
    Validate(validate::ValidateArgs),

    /// List reference information
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List the Elbonian symbols with their values and caps
    Symbols,

    /// List the accepted and encodable ranges
    Ranges,
}

/// Build the formatter for `format` over `writer`
pub(crate) fn formatter<'a, W: Write + 'a>(
    format: OutputFormat,
    pretty_json: bool,
    writer: W,
) -> Box<dyn OutputFormatter + 'a> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(writer)),
        OutputFormat::Json => Box::new(JsonFormatter::new(writer, pretty_json)),
    }
}
