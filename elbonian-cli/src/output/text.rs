//! Plain text output formatter

use super::{OutputFormatter, Report};
use anyhow::Result;
use std::io::Write;

/// Plain text formatter - outputs the report summary on one line
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputFormatter for TextFormatter<W> {
    fn write_report(&mut self, report: &Report) -> Result<()> {
        writeln!(self.writer, "{}", report.summary)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
