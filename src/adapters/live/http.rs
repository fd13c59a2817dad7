//! Live adapter for the `UploadTransport` port using `reqwest`.

use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use reqwest::redirect::Policy;
use reqwest::Client;

use crate::ports::http::{PostFuture, UploadTransport};

/// Request timeout applied to every upload.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Live HTTP transport.
///
/// Redirects are not followed and non-2xx responses are returned as
/// ordinary bodies; the upload envelope decides success.
pub struct LiveUploadTransport {
    client: Client,
}

impl LiveUploadTransport {
    /// Creates a transport with the upload timeout and redirect policy applied.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized (e.g. TLS
    /// backend failure).
    pub fn new() -> Result<Self, reqwest::Error> {
        let client =
            Client::builder().timeout(REQUEST_TIMEOUT).redirect(Policy::none()).build()?;
        Ok(Self { client })
    }
}

impl UploadTransport for LiveUploadTransport {
    fn post_json(&self, endpoint: &str, body: String) -> PostFuture<'_> {
        let endpoint = endpoint.to_string();

        Box::pin(async move {
            let response = self
                .client
                .post(&endpoint)
                .header(CONTENT_TYPE, "application/json")
                .body(body)
                .send()
                .await
                .map_err(|e| -> Box<dyn std::error::Error + Send + Sync> {
                    format!("request to {endpoint} failed: {e}").into()
                })?;

            let status = response.status();
            log::debug!("{endpoint} answered with HTTP {}", status.as_u16());

            response.text().await.map_err(|e| -> Box<dyn std::error::Error + Send + Sync> {
                format!("failed to read response from {endpoint}: {e}").into()
            })
        })
    }
}
