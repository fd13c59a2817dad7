//! Replaying adapter for the `FileSystem` port.

use std::path::Path;
use std::sync::Mutex;

use super::{extract_result, next_output};
use crate::cassette::replayer::CassetteReplayer;
use crate::ports::filesystem::FileSystem;

/// Replays recorded filesystem operations from a cassette.
pub struct ReplayingFileSystem {
    replayer: Mutex<CassetteReplayer>,
}

impl ReplayingFileSystem {
    /// Creates a new replaying filesystem from a cassette replayer.
    #[must_use]
    pub fn new(replayer: CassetteReplayer) -> Self {
        Self { replayer: Mutex::new(replayer) }
    }
}

impl FileSystem for ReplayingFileSystem {
    fn is_file(&self, _path: &Path) -> bool {
        next_output(&self.replayer, "fs", "is_file").as_bool().unwrap_or(false)
    }

    fn read_to_string(
        &self,
        _path: &Path,
    ) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        let output = next_output(&self.replayer, "fs", "read_to_string");
        extract_result(&output, "fs::read_to_string")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cassette::format::{Cassette, Interaction};
    use chrono::Utc;
    use serde_json::json;

    #[test]
    fn replays_is_file_then_read() {
        let cassette = Cassette {
            name: "test".into(),
            recorded_at: Utc::now(),
            commit: "abc".into(),
            interactions: vec![
                Interaction {
                    seq: 0,
                    port: "fs".into(),
                    method: "is_file".into(),
                    input: json!({"path": "/ci/clover"}),
                    output: json!(true),
                },
                Interaction {
                    seq: 1,
                    port: "fs".into(),
                    method: "read_to_string".into(),
                    input: json!({"path": "/ci/clover"}),
                    output: json!({"ok": "<coverage/>"}),
                },
            ],
        };
        let fs = ReplayingFileSystem::new(CassetteReplayer::new(&cassette));
        assert!(fs.is_file(Path::new("/ci/clover")));
        assert_eq!(fs.read_to_string(Path::new("/ci/clover")).unwrap(), "<coverage/>");
    }
}
