//! `upload-artifacts upload` command.

use crate::artifacts::{strip_root_filter, ArtifactCollection};
use crate::config::UploadConfig;
use crate::context::ServiceContext;
use crate::identity;
use crate::uploader::Uploader;

/// Message printed once every artifact has been accepted.
pub const SUCCESS_MESSAGE: &str = "Build artifacts were uploaded.";

/// Read every configured artifact through the context's filesystem.
#[must_use]
pub fn collect(ctx: &ServiceContext, config: &UploadConfig) -> ArtifactCollection {
    let strip_root = strip_root_filter(&config.root);
    let mut artifacts = ArtifactCollection::new();
    for source in &config.sources {
        let filter: Option<&dyn Fn(&str) -> String> =
            if source.strip_root { Some(&strip_root) } else { None };
        artifacts.add(ctx.fs.as_ref(), &source.artifact_type, &source.path, filter);
    }
    artifacts
}

/// Resolve identity, collect artifacts and upload them one by one.
///
/// Stops at the first failed upload; later artifacts are not attempted.
///
/// # Errors
///
/// Returns the message of the resolution or upload failure.
pub async fn run_with_context(ctx: &ServiceContext, config: &UploadConfig) -> Result<(), String> {
    let identity = identity::resolve(ctx.git.as_ref()).map_err(|e| e.to_string())?;
    let artifacts = collect(ctx, config);

    if artifacts.is_empty() {
        log::warn!("No build artifacts found; nothing to upload.");
    }

    if config.dry_run {
        println!("Dry run: would upload to {} as {identity}:", config.endpoint);
        for (artifact_type, content) in artifacts.iter() {
            println!("  {artifact_type} ({} bytes)", content.len());
        }
        return Ok(());
    }

    let uploader = Uploader::new(ctx.http.as_ref(), config.endpoint.as_str(), identity);
    for (artifact_type, content) in artifacts.iter() {
        uploader.upload(artifact_type, content).await.map_err(|e| e.to_string())?;
    }

    println!("{SUCCESS_MESSAGE}");
    Ok(())
}
