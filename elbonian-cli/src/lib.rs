//! Elbonian CLI library
//!
//! This library provides the command-line interface for converting between
//! Arabic integers and Elbonian numerals.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;

pub use cli::Cli;
pub use error::{CliError, CliResult};
