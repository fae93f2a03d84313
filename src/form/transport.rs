use thiserror::Error;

use super::Submission;

/// Fixed externally-owned relay endpoint. The relay handles delivery; the
/// site only POSTs to it and never reads the response body.
pub const RELAY_ENDPOINT: &str = "https://getform.io/f/8b086558-47d4-49d0-852d-ec8c22da40f7";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    #[error("request failed: {0}")]
    Request(String),
}

#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn send(&self, submission: &Submission) -> Result<(), TransportError>;
}

#[cfg(target_arch = "wasm32")]
pub struct RelayTransport {
    endpoint: String,
}

#[cfg(target_arch = "wasm32")]
impl RelayTransport {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }
}

#[cfg(target_arch = "wasm32")]
impl Transport for RelayTransport {
    // Any HTTP response counts as delivered; only network-level failures are
    // errors, matching the relay's fire-and-forget contract.
    async fn send(&self, submission: &Submission) -> Result<(), TransportError> {
        gloo_net::http::Request::post(&self.endpoint)
            .json(submission)
            .map_err(|e| TransportError::Request(e.to_string()))?
            .send()
            .await
            .map(|_| ())
            .map_err(|e| TransportError::Request(e.to_string()))
    }
}
