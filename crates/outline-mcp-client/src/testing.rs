//! In-memory [`OutlineApi`] for tests.
//!
//! Responses are canned per endpoint. Every request is recorded so tests can
//! assert on what was (or was not) sent.

use crate::api::OutlineApi;
use async_trait::async_trait;
use outline_mcp_core::{Error, Result};
use serde_json::{Value, json};
use std::collections::HashMap;
use std::sync::Mutex;

/// Canned outcome for one endpoint
#[derive(Debug, Clone)]
enum Canned {
    Body(Value),
    ClientError(String),
    InvalidResponse(String),
}

/// One recorded request
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub endpoint: String,
    pub payload: Value,
}

/// Thread-safe canned-response API double.
///
/// Unconfigured endpoints answer `{}`.
#[derive(Debug, Default)]
pub struct StaticOutlineApi {
    responses: Mutex<HashMap<String, Canned>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl StaticOutlineApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `endpoint` with the full response `body`
    pub fn with_response(self, endpoint: &str, body: Value) -> Self {
        self.insert(endpoint, Canned::Body(body));
        self
    }

    /// Answer `endpoint` with `{"data": data}`
    pub fn with_data(self, endpoint: &str, data: Value) -> Self {
        self.with_response(endpoint, json!({ "data": data }))
    }

    /// Fail `endpoint` with a client error
    pub fn with_client_error(self, endpoint: &str, message: &str) -> Self {
        self.insert(endpoint, Canned::ClientError(message.to_string()));
        self
    }

    /// Fail `endpoint` with a non-client error
    pub fn with_unexpected_error(self, endpoint: &str, reason: &str) -> Self {
        self.insert(endpoint, Canned::InvalidResponse(reason.to_string()));
        self
    }

    fn insert(&self, endpoint: &str, canned: Canned) {
        if let Ok(mut responses) = self.responses.lock() {
            responses.insert(endpoint.to_string(), canned);
        }
    }

    /// All requests so far, in order
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    /// Requests sent to one endpoint
    pub fn calls_to(&self, endpoint: &str) -> Vec<RecordedCall> {
        self.calls()
            .into_iter()
            .filter(|c| c.endpoint == endpoint)
            .collect()
    }
}

#[async_trait]
impl OutlineApi for StaticOutlineApi {
    async fn post(&self, endpoint: &str, payload: Value) -> Result<Value> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(RecordedCall {
                endpoint: endpoint.to_string(),
                payload,
            });
        }

        let canned = self
            .responses
            .lock()
            .map_err(|_| Error::other("response table poisoned"))?
            .get(endpoint)
            .cloned();

        match canned {
            Some(Canned::Body(body)) => Ok(body),
            Some(Canned::ClientError(message)) => Err(Error::client(message)),
            Some(Canned::InvalidResponse(reason)) => Err(Error::invalid_response(reason)),
            None => Ok(json!({})),
        }
    }
}
