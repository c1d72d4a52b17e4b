//! HTTP transport for the Assistants API
//!
//! One method, one network call: `execute` builds the request, attaches
//! the credential and protocol headers, and decodes the body into a
//! generic JSON value. Field projection and any notion of what the
//! response means belong to the operations layer, not here.
//!
//! The HTTP status code is deliberately not inspected: the decoded body
//! is returned as-is and callers notice trouble as missing fields. Error
//! bodies from this API are JSON too, so they decode cleanly.

use std::time::Duration;

use reqwest::{Client, Method};
use serde_json::Value;
use tracing::debug;

use super::ApiError;
use crate::config::Config;

/// Beta opt-in header required by the Assistants v1 API
const BETA_HEADER: &str = "assistants=v1";

/// Thin client over reqwest bound to one base URL and credential
pub struct Transport {
    api_key: String,
    base_url: String,
    http: Client,
}

impl Transport {
    /// Build a transport from configuration
    pub fn new(config: &Config) -> Result<Self, ApiError> {
        let http = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(ApiError::Send)?;

        Ok(Self {
            api_key: config.api_key.clone(),
            base_url: config.base_url.clone(),
            http,
        })
    }

    /// Issue one request and decode the response body
    ///
    /// `path` is relative to the base URL. A payload, when present, is
    /// serialized as the JSON request body. Exactly one network call per
    /// invocation; no retries, no caching.
    pub async fn execute(
        &self,
        method: Method,
        path: &str,
        payload: Option<&Value>,
    ) -> Result<Value, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%method, %url, has_payload = payload.is_some(), "execute: called");

        let mut request = self
            .http
            .request(method, &url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .header("OpenAI-Beta", BETA_HEADER);

        if let Some(payload) = payload {
            let body = serde_json::to_vec(payload).map_err(ApiError::Encode)?;
            request = request.body(body);
        }

        let response = request.send().await.map_err(ApiError::Send)?;
        let status = response.status();

        let body = response.text().await.map_err(ApiError::Read)?;
        debug!(%status, body_len = body.len(), "execute: response received");

        serde_json::from_str(&body).map_err(ApiError::Decode)
    }
}
