//! Replaying adapters that replay recorded interactions.

pub mod filesystem;
pub mod git;
pub mod http;

pub use filesystem::ReplayingFileSystem;
pub use git::ReplayingGitRepo;
pub use http::ReplayingUploadTransport;

use std::sync::Mutex;

use crate::cassette::replayer::CassetteReplayer;

/// Pull the next recorded output for `port::method` from the replayer.
///
/// # Panics
///
/// Panics if the cassette has no more interactions for the pair, or if the
/// replayer lock is poisoned.
pub(crate) fn next_output(
    replayer: &Mutex<CassetteReplayer>,
    port: &str,
    method: &str,
) -> serde_json::Value {
    let mut replayer = replayer.lock().expect("replayer lock poisoned");
    replayer.next_interaction(port, method).output
}

/// Extracts a Result from a cassette output JSON value.
///
/// Expects `{"ok": <value>}` or `{"err": "message"}`.
pub(crate) fn extract_result<T: serde::de::DeserializeOwned>(
    output: &serde_json::Value,
    context: &str,
) -> Result<T, Box<dyn std::error::Error + Send + Sync>> {
    if let Some(err) = output.get("err") {
        let msg = err.as_str().unwrap_or("unknown error").to_string();
        return Err(msg.into());
    }
    let value = output.get("ok").unwrap_or(output);
    serde_json::from_value(value.clone())
        .map_err(|e| format!("{context}: failed to deserialize: {e}").into())
}
