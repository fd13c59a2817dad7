//! Recording adapters that capture interactions to cassettes.

pub mod filesystem;
pub mod git;
pub mod http;

pub use filesystem::RecordingFileSystem;
pub use git::RecordingGitRepo;
pub use http::RecordingUploadTransport;

use std::sync::{Arc, Mutex};

use serde::Serialize;

use crate::cassette::recorder::CassetteRecorder;

/// Record an interaction with a simple (non-Result) return value.
///
/// Mirror of `replaying::next_output`: records input/output instead of reading.
pub(crate) fn record_interaction<I, O>(
    recorder: &Arc<Mutex<CassetteRecorder>>,
    port: &str,
    method: &str,
    input: &I,
    output: &O,
) where
    I: Serialize,
    O: Serialize,
{
    let input_json = serde_json::to_value(input).unwrap_or(serde_json::Value::Null);
    let output_json = serde_json::to_value(output).unwrap_or(serde_json::Value::Null);

    match recorder.lock() {
        Ok(mut guard) => guard.record(port, method, input_json, output_json),
        Err(e) => log::warn!("dropping {port}::{method} interaction, recorder poisoned: {e}"),
    }
}

/// Record a `Result<T, E>` interaction using the ok/err JSON convention.
///
/// Mirror of `replaying::extract_result`:
/// - `Ok(v)` is serialized as `{"ok": v}`
/// - `Err(e)` is serialized as `{"err": e.to_string()}`
pub(crate) fn record_result<T, E, I>(
    recorder: &Arc<Mutex<CassetteRecorder>>,
    port: &str,
    method: &str,
    input: &I,
    result: &Result<T, E>,
) where
    T: Serialize,
    E: std::fmt::Display,
    I: Serialize,
{
    let output = match result {
        Ok(v) => {
            let inner = serde_json::to_value(v).unwrap_or(serde_json::Value::Null);
            serde_json::json!({ "ok": inner })
        }
        Err(e) => serde_json::json!({ "err": e.to_string() }),
    };
    record_interaction(recorder, port, method, input, &output);
}
