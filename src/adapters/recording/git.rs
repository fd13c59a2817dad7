//! Recording adapter for the `GitRepo` port.

use std::sync::{Arc, Mutex};

use super::record_result;
use crate::cassette::recorder::CassetteRecorder;
use crate::ports::GitRepo;

/// Records git interactions while delegating to an inner implementation.
pub struct RecordingGitRepo {
    inner: Box<dyn GitRepo>,
    recorder: Arc<Mutex<CassetteRecorder>>,
}

impl RecordingGitRepo {
    /// Creates a new recording git repo wrapping the given implementation.
    pub fn new(inner: Box<dyn GitRepo>, recorder: Arc<Mutex<CassetteRecorder>>) -> Self {
        Self { inner, recorder }
    }
}

impl GitRepo for RecordingGitRepo {
    fn rev_parse_head(&self) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        let result = self.inner.rev_parse_head();
        record_result(&self.recorder, "git", "rev_parse_head", &(), &result);
        result
    }

    fn list_remotes(&self) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        let result = self.inner.list_remotes();
        record_result(&self.recorder, "git", "list_remotes", &(), &result);
        result
    }
}
