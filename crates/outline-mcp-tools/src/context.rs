//! Shared state for every tool group.

use crate::response_utils::{ResponseBuilder, ResponseEnvelope};
use outline_mcp_client::OutlineApi;
use outline_mcp_core::{Error, FeatureFlags, SizePolicy};
use serde_json::{Map, Value, json};
use std::sync::Arc;

/// API handle, response policy and feature switches.
///
/// Cloning is cheap; all groups built from one server share the same API.
#[derive(Clone)]
pub struct ToolContext {
    api: Arc<dyn OutlineApi>,
    responses: ResponseBuilder,
    features: FeatureFlags,
}

impl ToolContext {
    pub fn new(api: Arc<dyn OutlineApi>, policy: SizePolicy, features: FeatureFlags) -> Self {
        Self {
            api,
            responses: ResponseBuilder::new(policy),
            features,
        }
    }

    pub fn api(&self) -> &dyn OutlineApi {
        self.api.as_ref()
    }

    pub fn responses(&self) -> &ResponseBuilder {
        &self.responses
    }

    pub fn features(&self) -> FeatureFlags {
        self.features
    }

    pub fn respond(&self, text: impl Into<String>) -> ResponseEnvelope {
        self.responses.respond(text)
    }

    pub fn respond_with(&self, text: impl Into<String>, data: Value) -> ResponseEnvelope {
        self.responses.respond_with(text, data)
    }

    /// Turn a failed operation into a normal response.
    ///
    /// `action` completes "Error {action}: ...", e.g. `"reading document"`.
    /// `ids` (an object) is merged after the `error` key.
    pub fn recover(&self, action: &str, error: Error, ids: Value) -> ResponseEnvelope {
        let message = error.to_string();
        let text = if error.is_client() {
            log::warn!("Outline API error while {}: {}", action, message);
            format!("Error {}: {}", action, message)
        } else {
            log::error!("Unexpected error while {}: {}", action, message);
            format!("Unexpected error: {}", message)
        };

        let mut data = Map::new();
        data.insert("error".to_string(), json!(message));
        if let Value::Object(ids) = ids {
            data.extend(ids);
        }
        self.respond_with(text, Value::Object(data))
    }

    /// Reply for a tool switched off by configuration
    pub fn disabled(&self, tool: &str, env_var: &str) -> ResponseEnvelope {
        log::info!("Refused call to disabled tool {}", tool);
        self.respond_with(
            format!("The {} tool is disabled on this server ({} is set).", tool, env_var),
            json!({ "error": "tool_disabled", "tool": tool }),
        )
    }
}

/// Truthiness of an API payload: null, false, empty strings and empty containers are "nothing"
pub(crate) fn has_content(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
        Value::Number(_) => true,
    }
}
