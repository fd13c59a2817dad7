//! Per-port cassette configuration for replay.

use std::path::{Path, PathBuf};

use super::format::Cassette;
use super::replayer::CassetteReplayer;

/// Per-port cassette file paths. Ports without a path replay from an empty
/// cassette and panic if called.
#[derive(Debug, Clone, Default)]
pub struct CassetteConfig {
    /// Path to the filesystem port cassette file.
    pub fs: Option<PathBuf>,
    /// Path to the git port cassette file.
    pub git: Option<PathBuf>,
    /// Path to the upload transport cassette file.
    pub http: Option<PathBuf>,
}

/// Per-port replayers, each with its own interaction stream.
pub struct PortReplayers {
    /// Replayer for the filesystem port.
    pub fs: Option<CassetteReplayer>,
    /// Replayer for the git port.
    pub git: Option<CassetteReplayer>,
    /// Replayer for the upload transport port.
    pub http: Option<CassetteReplayer>,
}

impl CassetteConfig {
    /// Points every port at `<dir>/<port>.cassette.yaml`, the layout a
    /// [`RecordingSession`](super::session::RecordingSession) writes.
    #[must_use]
    pub fn in_dir(dir: &Path) -> Self {
        let port = |name: &str| Some(dir.join(format!("{name}.cassette.yaml")));
        Self { fs: port("fs"), git: port("git"), http: port("http") }
    }

    /// Load a single per-port cassette file and create a replayer.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_port_cassette(path: &Path) -> Result<CassetteReplayer, String> {
        Ok(CassetteReplayer::new(&Cassette::load(path)?))
    }

    /// Load all configured per-port cassette files and create replayers.
    ///
    /// # Errors
    ///
    /// Returns an error if any configured cassette file cannot be read or parsed.
    pub fn load_all(&self) -> Result<PortReplayers, String> {
        Ok(PortReplayers {
            fs: self.fs.as_deref().map(Self::load_port_cassette).transpose()?,
            git: self.git.as_deref().map(Self::load_port_cassette).transpose()?,
            http: self.http.as_deref().map(Self::load_port_cassette).transpose()?,
        })
    }
}
