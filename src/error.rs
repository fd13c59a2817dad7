//! Error types for identity resolution and uploads.
//!
//! Both are fatal to a run; the command layer turns them into the message
//! printed before exiting with status 1.

use thiserror::Error;

/// Why a CLI run failed.
///
/// Usage errors are printed to stderr by `main`; command failures are
/// printed to stdout.
#[derive(Debug, Error)]
pub enum RunError {
    /// The command line could not be parsed.
    #[error(transparent)]
    Usage(#[from] clap::Error),

    /// A command ran and failed.
    #[error("{0}")]
    Command(String),
}

/// The repository identity could not be determined from git.
#[derive(Debug, Error)]
pub enum ResolutionError {
    /// `git rev-parse HEAD` failed or printed nothing.
    #[error("Could not determine the sha of the HEAD revision: {0}")]
    Head(String),

    /// `git remote -v` failed.
    #[error("Could not determine the repository: {0}")]
    Repository(String),

    /// The last remote line is not an `origin` URL ending in `.git`.
    #[error("Could not extract owner/repo from: {output}")]
    UnrecognizedRemote {
        /// Full `git remote -v` output.
        output: String,
    },
}

/// A single artifact upload failed.
#[derive(Debug, Error)]
pub enum UploadError {
    /// The request could not be sent or its response not read.
    #[error("Could not upload \"{artifact_type}\": {source}")]
    Transport {
        /// Artifact being uploaded.
        artifact_type: String,
        /// Underlying transport error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The response was not a JSON envelope with a `status`.
    #[error("Could not upload \"{artifact_type}\". An unknown error occurred. Response: {response}")]
    Unknown {
        /// Artifact being uploaded.
        artifact_type: String,
        /// Raw response body.
        response: String,
    },

    /// The endpoint answered with a status other than `"ok"`.
    #[error("Could not upload \"{artifact_type}\": {message}")]
    Rejected {
        /// Artifact being uploaded.
        artifact_type: String,
        /// The endpoint's `message` field.
        message: String,
    },
}

impl UploadError {
    /// The artifact type whose upload failed.
    #[must_use]
    pub fn artifact_type(&self) -> &str {
        match self {
            Self::Transport { artifact_type, .. }
            | Self::Unknown { artifact_type, .. }
            | Self::Rejected { artifact_type, .. } => artifact_type,
        }
    }
}
