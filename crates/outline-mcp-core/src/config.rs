//! Configuration types for the Outline server.
//!
//! Follows a builder pattern for complex configuration with validation.
//! Everything here is fixed at process start: the binary reads the
//! environment once, builds an [`OutlineConfig`], and hands it to the server.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use url::Url;

/// Default Outline cloud endpoint
pub const DEFAULT_API_URL: &str = "https://app.getoutline.com/api";

/// Parse an environment-style switch. `true`, `1` and `yes` (any case) are on.
pub fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "true" | "1" | "yes"
    )
}

/// Response size governance settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizePolicy {
    /// Characters counted as one model token
    pub chars_per_token: usize,
    /// Above this estimate a warning suffix is appended
    pub soft_limit_tokens: usize,
    /// Above this estimate the text is truncated
    pub hard_limit_tokens: usize,
    /// Apply warnings and truncation at all
    pub limits_enabled: bool,
    /// Emit the structured side-channel alongside text
    pub structured_output_enabled: bool,
}

impl Default for SizePolicy {
    fn default() -> Self {
        Self {
            chars_per_token: 4,
            soft_limit_tokens: 5_000,
            hard_limit_tokens: 22_500,
            limits_enabled: false,
            structured_output_enabled: false,
        }
    }
}

impl SizePolicy {
    /// Start from defaults
    pub fn builder() -> SizePolicyBuilder {
        SizePolicyBuilder::default()
    }

    /// Validate thresholds
    pub fn validate(&self) -> Result<()> {
        if self.chars_per_token == 0 {
            return Err(Error::config_error("chars_per_token must be at least 1"));
        }
        if self.soft_limit_tokens > self.hard_limit_tokens {
            log::warn!(
                "Soft limit ({}) exceeds hard limit ({}); responses will be truncated without a prior warning",
                self.soft_limit_tokens,
                self.hard_limit_tokens
            );
        }
        Ok(())
    }
}

/// Builder for SizePolicy
#[derive(Debug, Default)]
pub struct SizePolicyBuilder {
    policy: SizePolicy,
}

impl SizePolicyBuilder {
    /// Set chars-per-token ratio
    pub fn chars_per_token(mut self, chars: usize) -> Self {
        self.policy.chars_per_token = chars;
        self
    }

    /// Set soft limit
    pub fn soft_limit_tokens(mut self, tokens: usize) -> Self {
        self.policy.soft_limit_tokens = tokens;
        self
    }

    /// Set hard limit
    pub fn hard_limit_tokens(mut self, tokens: usize) -> Self {
        self.policy.hard_limit_tokens = tokens;
        self
    }

    /// Toggle size limits
    pub fn limits_enabled(mut self, enabled: bool) -> Self {
        self.policy.limits_enabled = enabled;
        self
    }

    /// Toggle structured output
    pub fn structured_output_enabled(mut self, enabled: bool) -> Self {
        self.policy.structured_output_enabled = enabled;
        self
    }

    /// Build and validate
    pub fn build(self) -> Result<SizePolicy> {
        self.policy.validate()?;
        Ok(self.policy)
    }
}

/// Capability switches for destructive or optional tools
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureFlags {
    pub delete_enabled: bool,
    pub ai_tools_enabled: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            delete_enabled: true,
            ai_tools_enabled: true,
        }
    }
}

/// Global server configuration
#[derive(Clone)]
pub struct OutlineConfig {
    /// Base URL of the Outline API (no trailing slash)
    pub api_url: String,
    /// Bearer token, never printed
    pub api_key: String,
    pub size_policy: SizePolicy,
    pub features: FeatureFlags,
    /// Per-request timeout for the API client
    pub request_timeout_secs: u64,
}

impl std::fmt::Debug for OutlineConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OutlineConfig")
            .field("api_url", &self.api_url)
            .field("api_key", &"<redacted>")
            .field("size_policy", &self.size_policy)
            .field("features", &self.features)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .finish()
    }
}

impl OutlineConfig {
    /// Create a new config with builder
    pub fn builder(api_key: impl Into<String>) -> OutlineConfigBuilder {
        OutlineConfigBuilder::new(api_key)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.api_key.trim().is_empty() {
            return Err(Error::config_error(
                "Missing API key. Set OUTLINE_API_KEY env var.",
            ));
        }

        let url = Url::parse(&self.api_url).map_err(|e| {
            Error::config_error(format!("Invalid API URL '{}': {}", self.api_url, e))
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::config_error(format!(
                "API URL must use http or https: {}",
                self.api_url
            )));
        }

        if self.request_timeout_secs == 0 {
            return Err(Error::config_error("Request timeout must be at least 1 second"));
        }

        self.size_policy.validate()
    }
}

/// Builder for OutlineConfig
pub struct OutlineConfigBuilder {
    api_url: String,
    api_key: String,
    size_policy: SizePolicy,
    features: FeatureFlags,
    request_timeout_secs: u64,
}

impl OutlineConfigBuilder {
    /// Create a new builder
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            api_key: api_key.into(),
            size_policy: SizePolicy::default(),
            features: FeatureFlags::default(),
            request_timeout_secs: 30,
        }
    }

    /// Override the API base URL
    pub fn api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set the response size policy
    pub fn size_policy(mut self, policy: SizePolicy) -> Self {
        self.size_policy = policy;
        self
    }

    /// Set feature flags
    pub fn features(mut self, features: FeatureFlags) -> Self {
        self.features = features;
        self
    }

    /// Set request timeout
    pub fn request_timeout_secs(mut self, secs: u64) -> Self {
        self.request_timeout_secs = secs;
        self
    }

    /// Build and validate
    pub fn build(self) -> Result<OutlineConfig> {
        let config = OutlineConfig {
            api_url: self.api_url,
            api_key: self.api_key,
            size_policy: self.size_policy,
            features: self.features,
            request_timeout_secs: self.request_timeout_secs,
        };
        config.validate()?;
        Ok(config)
    }
}
