//! Input handling module

use crate::error::CliError;
use anyhow::{Context, Result};
use std::io::BufRead;

/// The number to work on: the argument if given, else one line from `reader`
pub fn read_number<R: BufRead>(arg: Option<&str>, mut reader: R) -> Result<String> {
    if let Some(number) = arg {
        return Ok(number.to_string());
    }

    let mut line = String::new();
    let read = reader
        .read_line(&mut line)
        .context("Failed to read from stdin")?;
    if read == 0 {
        return Err(CliError::MissingInput("no number given and stdin is empty".to_string()).into());
    }

    log::debug!("read {line:?} from stdin");
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_argument_wins() {
        let number = read_number(Some("MC"), Cursor::new("1121\n")).unwrap();
        assert_eq!(number, "MC");
    }

    #[test]
    fn test_reads_first_line() {
        let number = read_number(None, Cursor::new(" MCXXI \r\nKJ\n")).unwrap();
        assert_eq!(number, " MCXXI ");
    }

    #[test]
    fn test_empty_stdin() {
        let err = read_number(None, Cursor::new("")).unwrap_err();
        assert!(err.downcast_ref::<CliError>().is_some());
    }
}
