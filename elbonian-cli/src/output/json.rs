//! JSON output formatter

use super::{OutputFormatter, Report};
use anyhow::Result;
use std::io::Write;

/// JSON formatter - outputs each report as a JSON object
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self { writer, pretty }
    }
}

impl<W: Write> OutputFormatter for JsonFormatter<W> {
    fn write_report(&mut self, report: &Report) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, report)?;
        } else {
            serde_json::to_writer(&mut self.writer, report)?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use elbonian_core::Converter;

    #[test]
    fn test_compact_json() {
        let converter = Converter::new("KJ").unwrap();
        let report = Report::from_converter(&converter).with_converted("8".to_string());

        let mut buffer = Vec::new();
        let mut formatter = JsonFormatter::new(&mut buffer, false);
        formatter.write_report(&report).unwrap();
        formatter.finish().unwrap();

        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "{\"input\":\"KJ\",\"system\":\"elbonian\",\"arabic\":8,\"elbonian\":\"KJ\",\"converted\":\"8\"}\n"
        );
    }

    #[test]
    fn test_pretty_json_parses_back() {
        let converter = Converter::new("4000").unwrap();
        let report = Report::from_converter(&converter);

        let mut buffer = Vec::new();
        JsonFormatter::new(&mut buffer, true)
            .write_report(&report)
            .unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(value["arabic"], 4000);
        assert!(value["elbonian"].is_null());
        assert!(value.get("converted").is_none());
        assert!(value.get("summary").is_none());
    }
}
