//! List command implementation

use super::ListCommands;
use anyhow::Result;
use elbonian_core::{symbols_by_descending_magnitude, MAX_ENCODABLE, MAX_VALUE, MIN_VALUE};
use std::io::Write;

impl ListCommands {
    /// Execute the list command
    pub fn execute<W: Write>(&self, mut writer: W) -> Result<()> {
        match self {
            ListCommands::Symbols => {
                writeln!(writer, "Symbol  Value  Max count")?;
                for symbol in symbols_by_descending_magnitude() {
                    let coupling = symbol
                        .coupled_minor()
                        .map(|minor| format!("  (limits {minor} to 1)"))
                        .unwrap_or_default();
                    writeln!(
                        writer,
                        "{:<6}  {:>5}  {:>9}{coupling}",
                        symbol.to_string(),
                        symbol.value(),
                        symbol.cap()
                    )?;
                }
            }
            ListCommands::Ranges => {
                writeln!(writer, "Accepted Arabic input: {MIN_VALUE}..={MAX_VALUE}")?;
                writeln!(writer, "Encodable as Elbonian: {MIN_VALUE}..={MAX_ENCODABLE}")?;
            }
        }
        writer.flush()?;
        Ok(())
    }
}
