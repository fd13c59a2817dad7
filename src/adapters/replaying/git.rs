//! Replaying adapter for the `GitRepo` port.

use std::sync::Mutex;

use super::{extract_result, next_output};
use crate::cassette::replayer::CassetteReplayer;
use crate::ports::git::GitRepo;

/// Replays recorded git operations from a cassette.
pub struct ReplayingGitRepo {
    replayer: Mutex<CassetteReplayer>,
}

impl ReplayingGitRepo {
    /// Creates a new replaying git repo from a cassette replayer.
    #[must_use]
    pub fn new(replayer: CassetteReplayer) -> Self {
        Self { replayer: Mutex::new(replayer) }
    }
}

impl GitRepo for ReplayingGitRepo {
    fn rev_parse_head(&self) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        let output = next_output(&self.replayer, "git", "rev_parse_head");
        extract_result(&output, "git::rev_parse_head")
    }

    fn list_remotes(&self) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        let output = next_output(&self.replayer, "git", "list_remotes");
        extract_result(&output, "git::list_remotes")
    }
}
