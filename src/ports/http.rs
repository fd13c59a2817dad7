//! HTTP transport port for posting upload requests.

use std::error::Error;
use std::future::Future;
use std::pin::Pin;

/// Boxed future type alias used by [`UploadTransport`] to keep the trait dyn-compatible.
///
/// Resolves to the raw response body.
pub type PostFuture<'a> =
    Pin<Box<dyn Future<Output = Result<String, Box<dyn Error + Send + Sync>>> + Send + 'a>>;

/// Sends JSON documents to an HTTP endpoint.
pub trait UploadTransport: Send + Sync {
    /// POSTs `body` to `endpoint` as `application/json` and returns the
    /// response body, whatever the HTTP status code.
    ///
    /// # Errors
    ///
    /// Returns an error on connection failures, timeouts, or when the body
    /// cannot be read.
    fn post_json(&self, endpoint: &str, body: String) -> PostFuture<'_>;
}
