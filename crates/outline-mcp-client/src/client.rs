//! HTTP implementation of [`OutlineApi`] over `reqwest`.

use crate::api::OutlineApi;
use async_trait::async_trait;
use outline_mcp_core::{Error, OutlineConfig, Result};
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde_json::Value;
use std::time::Duration;

/// Bearer-token client for one Outline workspace.
///
/// Cloning is cheap and shares the connection pool.
#[derive(Clone)]
pub struct OutlineClient {
    http: reqwest::Client,
    api_url: String,
    api_key: String,
}

impl std::fmt::Debug for OutlineClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OutlineClient")
            .field("api_url", &self.api_url)
            .finish_non_exhaustive()
    }
}

impl OutlineClient {
    /// Build a client from validated configuration
    pub fn new(config: &OutlineConfig) -> Result<Self> {
        config.validate()?;
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| Error::config_error(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            api_url: config.api_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        })
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    fn endpoint_url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.api_url, endpoint.trim_start_matches('/'))
    }
}

fn request_failed(e: impl std::fmt::Display) -> Error {
    Error::client(format!("API request failed: {}", e))
}

#[async_trait]
impl OutlineApi for OutlineClient {
    #[tracing::instrument(skip(self, payload), fields(api_url = %self.api_url))]
    async fn post(&self, endpoint: &str, payload: Value) -> Result<Value> {
        let url = self.endpoint_url(endpoint);
        log::debug!("POST {}", url);

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.api_key)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                log::warn!("Request to {} failed: {}", endpoint, e);
                request_failed(e)
            })?;

        let response = response.error_for_status().map_err(|e| {
            log::warn!("{} returned an error status: {}", endpoint, e);
            request_failed(e)
        })?;

        response.json::<Value>().await.map_err(request_failed)
    }
}
