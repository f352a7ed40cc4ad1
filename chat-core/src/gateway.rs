//! Seam between the conversation and the inference endpoint.

use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GatewayError {
    #[error("request failed: {0}")]
    Transport(String),

    #[error("HTTP error: {0}")]
    Status(u16),

    #[error("malformed response: {0}")]
    Malformed(String),
}

/// Stateless request/response wrapper around `POST /api/infer`.
///
/// Browser futures are not `Send`, so neither is this trait.
#[async_trait(?Send)]
pub trait InferenceGateway {
    /// Returns the `result` text for `text`.
    async fn infer(&self, text: &str) -> Result<String, GatewayError>;
}
