//! API error types

use thiserror::Error;

/// Errors that can occur while talking to the Assistants API
///
/// The first four variants are transport failures, one per phase of a
/// request (encode, send, read, decode). `Extraction` covers a response
/// body that decoded fine but does not carry the field an operation
/// needs - a missing key and a wrong-typed value are the same failure.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("request failed: {0}")]
    Send(#[source] reqwest::Error),

    #[error("failed to read response body: {0}")]
    Read(#[source] reqwest::Error),

    #[error("failed to decode response body: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("response is missing `{field}` (expected {expected})")]
    Extraction {
        field: &'static str,
        expected: &'static str,
    },
}

impl ApiError {
    /// Check if this is a transport failure (as opposed to a response
    /// that arrived but had the wrong shape)
    pub fn is_transport(&self) -> bool {
        !matches!(self, ApiError::Extraction { .. })
    }
}
