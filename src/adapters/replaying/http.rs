//! Replaying adapter for the `UploadTransport` port.

use std::sync::Mutex;

use super::{extract_result, next_output};
use crate::cassette::replayer::CassetteReplayer;
use crate::ports::{PostFuture, UploadTransport};

/// Serves recorded upload responses from a cassette.
pub struct ReplayingUploadTransport {
    replayer: Mutex<CassetteReplayer>,
}

impl ReplayingUploadTransport {
    /// Creates a replaying transport from a cassette replayer.
    #[must_use]
    pub fn new(replayer: CassetteReplayer) -> Self {
        Self { replayer: Mutex::new(replayer) }
    }
}

impl UploadTransport for ReplayingUploadTransport {
    fn post_json(&self, _endpoint: &str, _body: String) -> PostFuture<'_> {
        let output = next_output(&self.replayer, "http", "post_json");
        Box::pin(async move { extract_result(&output, "http::post_json") })
    }
}
