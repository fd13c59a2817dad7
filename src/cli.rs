//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::DEFAULT_ENDPOINT;

/// Top-level CLI parser for `upload-artifacts`.
#[derive(Debug, Parser)]
#[command(
    name = "upload-artifacts",
    version,
    about = "Upload build artifacts to the reporting endpoint",
    args_conflicts_with_subcommands = true
)]
pub struct Cli {
    /// The command to execute; `upload` when omitted.
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Upload options used when no subcommand is given.
    #[command(flatten)]
    pub upload: UploadArgs,
}

impl Cli {
    /// The command to run, falling back to `upload` with the top-level options.
    #[must_use]
    pub fn into_command(self) -> Command {
        self.command.unwrap_or(Command::Upload(self.upload))
    }
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Collect artifacts and upload them.
    Upload(UploadArgs),
    /// Print the repository identity uploads would be tagged with.
    Identity,
}

/// Options for the `upload` command.
#[derive(Debug, Clone, Args)]
pub struct UploadArgs {
    /// Endpoint receiving the uploads.
    #[arg(long, env = "ARTIFACT_UPLOAD_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Project root; stripped from file names in the coverage report.
    /// Defaults to the current directory.
    #[arg(long, env = "ARTIFACT_UPLOAD_ROOT")]
    pub root: Option<PathBuf>,

    /// Clover coverage report. Defaults to `<root>/clover`.
    #[arg(long, value_name = "PATH")]
    pub coverage_file: Option<PathBuf>,

    /// Additional artifact to upload unfiltered, as `TYPE=PATH`. Repeatable.
    #[arg(long = "artifact", value_name = "TYPE=PATH")]
    pub artifacts: Vec<String>,

    /// Resolve and collect, but do not upload.
    #[arg(long)]
    pub dry_run: bool,
}
