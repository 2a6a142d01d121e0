//! Top-level argument parsing and dispatch

use crate::commands::Commands;
use crate::config::CliConfig;
use anyhow::Result;
use clap::Parser;
use std::io;
use std::path::PathBuf;

/// Convert between Arabic integers and Elbonian numerals
#[derive(Debug, Parser)]
#[command(name = "elbonian", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file
    #[arg(short, long, value_name = "FILE", global = true, env = "ELBONIAN_CONFIG")]
    pub config: Option<PathBuf>,

    /// Suppress log output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

impl Cli {
    /// Run the selected command against stdin and stdout
    pub fn run(&self) -> Result<()> {
        self.init_logging();

        log::debug!("Arguments: {:?}", self);
        let config = CliConfig::load(self.config.as_deref())?;

        let stdin = io::stdin();
        let stdout = io::stdout();
        match &self.command {
            Commands::Convert(args) => args.execute(&config, stdin.lock(), stdout.lock()),
            Commands::Validate(args) => args.execute(&config, stdin.lock(), stdout.lock()),
            Commands::List { subcommand } => subcommand.execute(stdout.lock()),
        }
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        if self.quiet {
            return;
        }

        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        // A logger may already be installed when embedded in another program
        let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
            .try_init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::ListCommands;
    use crate::config::{OutputFormat, Target};

    #[test]
    fn test_parse_convert() {
        let cli = Cli::try_parse_from(["elbonian", "convert", "MCXXI", "--to", "arabic", "-f", "json"])
            .unwrap();
        match cli.command {
            Commands::Convert(args) => {
                assert_eq!(args.number.as_deref(), Some("MCXXI"));
                assert_eq!(args.to, Some(Target::Arabic));
                assert_eq!(args.format, Some(OutputFormat::Json));
            }
            other => panic!("Expected Convert, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["elbonian", "list", "symbols", "-vv", "--quiet"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(cli.quiet);
        assert!(matches!(
            cli.command,
            Commands::List {
                subcommand: ListCommands::Symbols
            }
        ));
    }

    #[test]
    fn test_parse_rejects_unknown_target() {
        assert!(Cli::try_parse_from(["elbonian", "convert", "1", "--to", "roman"]).is_err());
    }

    #[test]
    fn test_verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
