//! Artifact upload over the JSON envelope protocol.
//!
//! Request: `{"login","repo","sha","type","content"}` with base64 content.
//! Response: `{"status":"ok"}` or `{"status":<other>,"message":<text>}`.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde::{Deserialize, Serialize};

use crate::error::UploadError;
use crate::identity::RepositoryIdentity;
use crate::ports::UploadTransport;

/// JSON body sent for one artifact.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UploadRequest {
    /// Repository owner.
    pub login: String,
    /// Repository name.
    pub repo: String,
    /// Commit hash the artifact was built from.
    pub sha: String,
    /// Artifact type.
    #[serde(rename = "type")]
    pub artifact_type: String,
    /// Base64-encoded artifact content.
    pub content: String,
}

impl UploadRequest {
    /// Builds the request for `content`, base64-encoding it.
    #[must_use]
    pub fn new(identity: &RepositoryIdentity, artifact_type: &str, content: &str) -> Self {
        Self {
            login: identity.owner.clone(),
            repo: identity.repo_name.clone(),
            sha: identity.commit_hash.clone(),
            artifact_type: artifact_type.to_string(),
            content: BASE64.encode(content),
        }
    }
}

/// Response envelope returned by the endpoint.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct UploadResponse {
    /// `"ok"` on success; anything else is a failure. Absent or `null`
    /// means the endpoint did not answer with an envelope at all.
    #[serde(default)]
    pub status: Option<serde_json::Value>,
    /// Failure reason, meaningful only when `status` is not `"ok"`.
    #[serde(default)]
    pub message: Option<serde_json::Value>,
}

impl UploadResponse {
    /// Parses a response body, returning `None` unless it is a JSON object
    /// carrying a non-null `status`.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        serde_json::from_str::<serde_json::Value>(raw)
            .ok()
            .filter(serde_json::Value::is_object)
            .and_then(|value| serde_json::from_value::<Self>(value).ok())
            .filter(Self::has_status)
    }

    fn has_status(&self) -> bool {
        self.status.as_ref().is_some_and(|s| !s.is_null())
    }

    fn is_ok(&self) -> bool {
        self.status.as_ref().and_then(serde_json::Value::as_str) == Some("ok")
    }

    fn message(&self) -> String {
        match &self.message {
            Some(serde_json::Value::String(msg)) => msg.clone(),
            Some(serde_json::Value::Null) | None => String::new(),
            Some(other) => other.to_string(),
        }
    }
}

/// Uploads artifacts for one repository identity to one endpoint.
pub struct Uploader<'a> {
    transport: &'a dyn UploadTransport,
    endpoint: String,
    identity: RepositoryIdentity,
}

impl<'a> Uploader<'a> {
    /// Creates an uploader posting through `transport`.
    #[must_use]
    pub fn new(
        transport: &'a dyn UploadTransport,
        endpoint: impl Into<String>,
        identity: RepositoryIdentity,
    ) -> Self {
        Self { transport, endpoint: endpoint.into(), identity }
    }

    /// Uploads one artifact and interprets the response envelope.
    ///
    /// # Errors
    ///
    /// Returns an [`UploadError`] on transport failure, on a response that is
    /// not a JSON object with a `status`, or when `status` is not `"ok"`.
    pub async fn upload(&self, artifact_type: &str, content: &str) -> Result<(), UploadError> {
        let request = UploadRequest::new(&self.identity, artifact_type, content);
        let body = serde_json::to_string(&request).map_err(|e| UploadError::Transport {
            artifact_type: artifact_type.to_string(),
            source: Box::new(e),
        })?;
        log::debug!("posting {artifact_type} ({} bytes) to {}", body.len(), self.endpoint);

        let raw = self.transport.post_json(&self.endpoint, body).await.map_err(|source| {
            UploadError::Transport { artifact_type: artifact_type.to_string(), source }
        })?;

        let Some(response) = UploadResponse::parse(&raw) else {
            return Err(UploadError::Unknown {
                artifact_type: artifact_type.to_string(),
                response: raw,
            });
        };

        if !response.is_ok() {
            return Err(UploadError::Rejected {
                artifact_type: artifact_type.to_string(),
                message: response.message(),
            });
        }

        log::info!("uploaded {artifact_type} for {}", self.identity);
        Ok(())
    }
}
