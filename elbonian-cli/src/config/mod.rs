//! Configuration module

use crate::error::CliError;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
pub struct CliConfig {
    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub default_format: OutputFormat,

    /// Pretty print JSON output
    pub pretty_json: bool,

    /// Default conversion target
    pub default_target: Target,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: OutputFormat::Text,
            pretty_json: true,
            default_target: Target::Auto,
        }
    }
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// The bare result on one line
    Text,
    /// A JSON object with the input and both representations
    Json,
}

/// Which representation `convert` produces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Target {
    /// The system the input is not written in
    Auto,
    /// A decimal integer
    Arabic,
    /// An Elbonian numeral
    Elbonian,
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_toml(&content)
            .with_context(|| format!("Failed to load config file {}", path.display()))
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| CliError::ConfigError(e.to_string()).into())
    }

    /// Load from `path` if given, defaults otherwise
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = CliConfig::default();
        assert_eq!(config.output.default_format, OutputFormat::Text);
        assert_eq!(config.output.default_target, Target::Auto);
        assert!(config.output.pretty_json);
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        assert_eq!(CliConfig::from_toml("").unwrap(), CliConfig::default());
    }

    #[test]
    fn test_partial_section() {
        let config = CliConfig::from_toml("[output]\ndefault_format = \"json\"\n").unwrap();
        assert_eq!(config.output.default_format, OutputFormat::Json);
        assert!(config.output.pretty_json);
    }

    #[test]
    fn test_invalid_value() {
        let err = CliConfig::from_toml("[output]\ndefault_target = \"roman\"\n").unwrap_err();
        assert!(err.to_string().starts_with("Configuration error:"));
    }

    #[test]
    fn test_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(
            temp_file,
            "[output]\ndefault_target = \"elbonian\"\npretty_json = false\n"
        )
        .unwrap();

        let config = CliConfig::load(Some(temp_file.path())).unwrap();
        assert_eq!(config.output.default_target, Target::Elbonian);
        assert!(!config.output.pretty_json);
    }

    #[test]
    fn test_missing_file() {
        assert!(CliConfig::from_file(Path::new("does/not/exist.toml")).is_err());
    }
}
