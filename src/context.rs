//! Service context bundling all port trait objects.

use std::path::Path;
use std::sync::Arc;

use crate::adapters::live::filesystem::LiveFileSystem;
use crate::adapters::live::git::LiveGitRepo;
use crate::adapters::live::http::LiveUploadTransport;
use crate::adapters::recording::{
    RecordingFileSystem, RecordingGitRepo, RecordingUploadTransport,
};
use crate::adapters::replaying::{ReplayingFileSystem, ReplayingGitRepo, ReplayingUploadTransport};
use crate::cassette::config::CassetteConfig;
use crate::cassette::format::Cassette;
use crate::cassette::replayer::CassetteReplayer;
use crate::cassette::session::RecordingSession;
use crate::ports::{FileSystem, GitRepo, UploadTransport};

/// Bundles all port trait objects into a single context.
///
/// Constructors wire up different adapter implementations (live,
/// recording, replaying).
pub struct ServiceContext {
    /// Filesystem for reading artifacts.
    pub fs: Box<dyn FileSystem>,
    /// Git repository for identity queries.
    pub git: Box<dyn GitRepo>,
    /// Transport for upload requests.
    pub http: Box<dyn UploadTransport>,
}

impl ServiceContext {
    /// Creates a context from explicit port implementations.
    #[must_use]
    pub fn new(
        fs: Box<dyn FileSystem>,
        git: Box<dyn GitRepo>,
        http: Box<dyn UploadTransport>,
    ) -> Self {
        Self { fs, git, http }
    }

    /// Creates a live context with real adapters.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn live() -> Result<Self, String> {
        let http = LiveUploadTransport::new()
            .map_err(|e| format!("Failed to initialize HTTP client: {e}"))?;
        Ok(Self::new(Box::new(LiveFileSystem), Box::new(LiveGitRepo), Box::new(http)))
    }

    /// Creates a live context whose interactions are recorded into per-port
    /// cassettes under `root`.
    ///
    /// Drop the context before calling [`RecordingSession::finish`].
    ///
    /// # Errors
    ///
    /// Returns an error if the session directory or HTTP client cannot be created.
    pub fn recording_at(root: &Path) -> Result<(Self, RecordingSession), String> {
        let commit = LiveGitRepo
            .rev_parse_head()
            .map(|out| out.trim().to_string())
            .unwrap_or_else(|e| {
                log::warn!("Could not get git commit hash for cassette, using 'unknown': {e}");
                "unknown".to_string()
            });
        let session = RecordingSession::at(root, &commit)?;
        let ctx = Self::live()?.recorded_into(&session);
        Ok((ctx, session))
    }

    /// Wraps every port in a recording adapter writing to `session`.
    ///
    /// Drop the returned context before calling [`RecordingSession::finish`].
    #[must_use]
    pub fn recorded_into(self, session: &RecordingSession) -> Self {
        Self::new(
            Box::new(RecordingFileSystem::new(self.fs, Arc::clone(&session.fs))),
            Box::new(RecordingGitRepo::new(self.git, Arc::clone(&session.git))),
            Box::new(RecordingUploadTransport::new(self.http, Arc::clone(&session.http))),
        )
    }

    /// Creates a replaying context from a monolithic cassette file.
    ///
    /// Each port gets its own replayer over the same cassette so per-port
    /// cursors are independent.
    ///
    /// # Errors
    ///
    /// Returns an error if the cassette file cannot be read or parsed.
    pub fn replaying(path: &Path) -> Result<Self, String> {
        let cassette = Cassette::load(path)?;
        Ok(Self::replaying_cassette(&cassette))
    }

    /// Creates a replaying context from a recording directory holding one
    /// `<port>.cassette.yaml` per port, as written by [`RecordingSession`].
    ///
    /// # Errors
    ///
    /// Returns an error if any port cassette cannot be read or parsed.
    pub fn replaying_dir(dir: &Path) -> Result<Self, String> {
        Self::replaying_ports(&CassetteConfig::in_dir(dir))
    }

    /// Creates a replaying context with each port served from its own
    /// cassette. Ports without one panic when called.
    ///
    /// # Errors
    ///
    /// Returns an error if any configured cassette cannot be read or parsed.
    pub fn replaying_ports(config: &CassetteConfig) -> Result<Self, String> {
        let replayers = config.load_all()?;
        Ok(Self::new(
            Box::new(ReplayingFileSystem::new(replayers.fs.unwrap_or_default())),
            Box::new(ReplayingGitRepo::new(replayers.git.unwrap_or_default())),
            Box::new(ReplayingUploadTransport::new(replayers.http.unwrap_or_default())),
        ))
    }

    /// Creates a replaying context from an in-memory cassette.
    #[must_use]
    pub fn replaying_cassette(cassette: &Cassette) -> Self {
        Self::new(
            Box::new(ReplayingFileSystem::new(CassetteReplayer::new(cassette))),
            Box::new(ReplayingGitRepo::new(CassetteReplayer::new(cassette))),
            Box::new(ReplayingUploadTransport::new(CassetteReplayer::new(cassette))),
        )
    }
}
