//! Command dispatch and handlers.

pub mod identity;
pub mod upload;

use std::env;
use std::path::PathBuf;

use crate::cassette::session::RecordingSession;
use crate::cli::Command;
use crate::config::RECORD_ENV;
use crate::context::ServiceContext;

/// Dispatch a parsed command to its handler.
///
/// When `ARTIFACT_UPLOAD_RECORD` is set to a directory path, all port
/// interactions are recorded to per-port cassette files under it.
///
/// # Errors
///
/// Returns an error string if the selected command handler fails.
pub fn dispatch(command: Command) -> Result<(), String> {
    let (ctx, session) = match env::var_os(RECORD_ENV) {
        Some(path) => {
            let (ctx, session) = ServiceContext::recording_at(&PathBuf::from(path))?;
            (ctx, Some(session))
        }
        None => (ServiceContext::live()?, None),
    };

    let result = dispatch_with_context(command, &ctx);

    // Finish recording after command completes (even on error)
    if let Some(session) = session {
        drop(ctx);
        finish_recording(session);
    }

    result
}

/// Dispatch a command with the given service context.
///
/// # Errors
///
/// Returns an error string if the command fails.
pub fn dispatch_with_context(command: Command, ctx: &ServiceContext) -> Result<(), String> {
    match command {
        Command::Upload(args) => {
            let cwd = env::current_dir()
                .map_err(|e| format!("Could not determine the current directory: {e}"))?;
            let config = crate::config::UploadConfig::from_args(&args, &cwd)?;
            block_on(upload::run_with_context(ctx, &config))
        }
        Command::Identity => identity::run_with_context(ctx),
    }
}

/// Drive a command future to completion on a current-thread runtime.
fn block_on<F>(future: F) -> Result<(), String>
where
    F: std::future::Future<Output = Result<(), String>>,
{
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| format!("Failed to start async runtime: {e}"))?;
    runtime.block_on(future)
}

/// Finish a recording session and report the output directory.
///
/// A recording that cannot be saved is logged; it never changes the
/// command's outcome.
fn finish_recording(session: RecordingSession) -> Option<PathBuf> {
    match session.finish() {
        Ok(output_dir) => {
            log::info!("Recording saved to: {}", output_dir.display());
            Some(output_dir)
        }
        Err(e) => {
            log::warn!("Failed to save recording: {e}");
            None
        }
    }
}
