//! Recording adapter for the `UploadTransport` port.

use std::sync::{Arc, Mutex};

use serde::Serialize;

use super::record_result;
use crate::cassette::recorder::CassetteRecorder;
use crate::ports::{PostFuture, UploadTransport};

/// Records upload requests and responses while delegating to an inner transport.
pub struct RecordingUploadTransport {
    inner: Box<dyn UploadTransport>,
    recorder: Arc<Mutex<CassetteRecorder>>,
}

impl RecordingUploadTransport {
    /// Creates a new recording transport wrapping the given implementation.
    pub fn new(inner: Box<dyn UploadTransport>, recorder: Arc<Mutex<CassetteRecorder>>) -> Self {
        Self { inner, recorder }
    }
}

#[derive(Serialize)]
struct PostInput {
    endpoint: String,
    body: serde_json::Value,
}

impl UploadTransport for RecordingUploadTransport {
    fn post_json(&self, endpoint: &str, body: String) -> PostFuture<'_> {
        let input = PostInput {
            endpoint: endpoint.to_string(),
            body: serde_json::from_str(&body)
                .unwrap_or_else(|_| serde_json::Value::String(body.clone())),
        };
        let endpoint = endpoint.to_string();

        Box::pin(async move {
            let result = self.inner.post_json(&endpoint, body).await;
            record_result(&self.recorder, "http", "post_json", &input, &result);
            result
        })
    }
}
