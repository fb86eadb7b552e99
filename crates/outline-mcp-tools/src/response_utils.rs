//! Response size governance and the tool response envelope.
//!
//! Every tool reply goes through [`ResponseBuilder`]. When limits are on, the
//! text is measured against the soft and hard token thresholds of the active
//! [`SizePolicy`]: above soft it gets a warning suffix, above hard it is cut
//! and gets a truncation notice. When structured output is on, the caller's
//! data travels alongside the text, with the size measurement attached as
//! `response_meta`.

use outline_mcp_core::{Result, SizePolicy, char_len, format_thousands, truncate_chars};
use serde::{Serialize, Serializer};
use serde_json::{Map, Value, json};

/// Estimated model tokens in `text` (integer division, Unicode scalar count)
pub fn estimate_tokens(text: &str, policy: &SizePolicy) -> usize {
    char_len(text) / policy.chars_per_token.max(1)
}

/// What the size check did to a response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeOutcome {
    /// At or under the soft limit, text untouched
    Within,
    /// Over soft, at or under hard: warning appended
    Warned,
    /// Over hard: text cut to the hard limit
    Truncated { original_tokens: usize },
}

/// Size measurement taken before any modification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeMeta {
    pub tokens: usize,
    pub chars: usize,
    pub outcome: SizeOutcome,
}

impl SizeMeta {
    pub fn is_truncated(&self) -> bool {
        matches!(self.outcome, SizeOutcome::Truncated { .. })
    }

    /// JSON form: `{tokens, chars}` plus the outcome's flag, if any
    pub fn to_value(&self) -> Value {
        let mut map = Map::new();
        map.insert("tokens".to_string(), json!(self.tokens));
        map.insert("chars".to_string(), json!(self.chars));
        match self.outcome {
            SizeOutcome::Within => {}
            SizeOutcome::Warned => {
                map.insert("warning".to_string(), json!("large_response"));
            }
            SizeOutcome::Truncated { original_tokens } => {
                map.insert("truncated".to_string(), json!(true));
                map.insert("original_tokens".to_string(), json!(original_tokens));
            }
        }
        Value::Object(map)
    }
}

impl Serialize for SizeMeta {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.to_value().serialize(serializer)
    }
}

/// Apply the soft/hard thresholds to `text`.
///
/// The returned meta always describes the original text.
pub fn check_response_size(text: &str, policy: &SizePolicy) -> (String, SizeMeta) {
    let tokens = estimate_tokens(text, policy);
    let chars = char_len(text);

    if tokens > policy.hard_limit_tokens {
        let keep = policy.hard_limit_tokens.saturating_mul(policy.chars_per_token);
        let mut truncated = truncate_chars(text, keep).to_string();
        truncated.push_str(&format!(
            "\n\n⚠️ RESPONSE TRUNCATED ({} → {} tokens)",
            format_thousands(tokens),
            format_thousands(policy.hard_limit_tokens)
        ));
        truncated.push_str("\nUse get_document_outline + read_document_section for large docs.");
        log::debug!(
            "Truncated response from {} to {} tokens",
            tokens,
            policy.hard_limit_tokens
        );
        let meta = SizeMeta {
            tokens,
            chars,
            outcome: SizeOutcome::Truncated {
                original_tokens: tokens,
            },
        };
        return (truncated, meta);
    }

    if tokens > policy.soft_limit_tokens {
        let warned = format!(
            "{}\n\n💡 Large response: ~{} tokens",
            text,
            format_thousands(tokens)
        );
        let meta = SizeMeta {
            tokens,
            chars,
            outcome: SizeOutcome::Warned,
        };
        return (warned, meta);
    }

    (
        text.to_string(),
        SizeMeta {
            tokens,
            chars,
            outcome: SizeOutcome::Within,
        },
    )
}

/// The value every tool returns: human text plus optional machine data
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResponseEnvelope {
    text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    structured_content: Option<Map<String, Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    meta: Option<SizeMeta>,
}

impl ResponseEnvelope {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn structured_content(&self) -> Option<&Map<String, Value>> {
        self.structured_content.as_ref()
    }

    pub fn meta(&self) -> Option<&SizeMeta> {
        self.meta.as_ref()
    }

    pub fn into_text(self) -> String {
        self.text
    }

    /// Serialize for the MCP boundary
    pub fn to_json(&self) -> Result<Value> {
        Ok(serde_json::to_value(self)?)
    }
}

/// Build an envelope under `policy`. `data` is read, never modified.
pub fn build_envelope(
    text: impl Into<String>,
    data: Option<&Map<String, Value>>,
    policy: &SizePolicy,
) -> ResponseEnvelope {
    let mut text = text.into();
    let mut meta = None;

    if policy.limits_enabled {
        let (checked, size) = check_response_size(&text, policy);
        text = checked;
        meta = Some(size);
    }

    let structured_content = if policy.structured_output_enabled {
        let mut structured = data.cloned().unwrap_or_default();
        if let Some(size) = &meta {
            structured.insert("response_meta".to_string(), size.to_value());
        }
        (!structured.is_empty()).then_some(structured)
    } else {
        None
    };

    ResponseEnvelope {
        text,
        structured_content,
        meta,
    }
}

/// Envelope factory bound to one size policy
#[derive(Debug, Clone, Copy, Default)]
pub struct ResponseBuilder {
    policy: SizePolicy,
}

impl ResponseBuilder {
    pub fn new(policy: SizePolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &SizePolicy {
        &self.policy
    }

    /// Text-only response
    pub fn respond(&self, text: impl Into<String>) -> ResponseEnvelope {
        build_envelope(text, None, &self.policy)
    }

    /// Text plus structured data. Non-object `data` is treated as absent.
    pub fn respond_with(&self, text: impl Into<String>, data: Value) -> ResponseEnvelope {
        match data {
            Value::Object(map) => build_envelope(text, Some(&map), &self.policy),
            _ => build_envelope(text, None, &self.policy),
        }
    }
}
