//! Core library for the `upload-artifacts` CLI.
//!
//! Resolves the repository identity from git, collects build artifacts from
//! disk and uploads each one to a reporting endpoint.

pub mod adapters;
pub mod artifacts;
pub mod cassette;
pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod error;
pub mod identity;
pub mod ports;
pub mod uploader;

use clap::Parser;

use crate::error::RunError;

/// Run the CLI with the provided arguments.
///
/// `--help` and `--version` print their output and succeed.
///
/// # Errors
///
/// Returns [`RunError::Usage`] when argument parsing fails and
/// [`RunError::Command`] when command execution fails.
pub fn run<I, T>(args: I) -> Result<(), RunError>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = match cli::Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(err) if !err.use_stderr() => {
            err.print().map_err(|e| RunError::Command(e.to_string()))?;
            return Ok(());
        }
        Err(err) => return Err(err.into()),
    };
    commands::dispatch(cli.into_command()).map_err(RunError::Command)
}
