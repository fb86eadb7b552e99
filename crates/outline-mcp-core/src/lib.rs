//! # Outline MCP Core
//!
//! Core data models, error types, and configuration for the Outline MCP server.
//! This crate defines the canonical types that all other crates depend on.
//!
//! ## Architecture Principles
//!
//! - **Immutable Configuration**: [`OutlineConfig`] and [`SizePolicy`] are built once
//!   at startup and passed explicitly, never read from globals
//! - **Defensive Ingestion**: API JSON enters the system through one `From<&Value>`
//!   per entity kind, with defaults for missing fields
//! - **Tagged Results**: [`SectionLookup`] instead of nullable strings
//! - **Zero Panic in Libraries**: All errors are `Result<T, Error>`
//!
//! ## Core Modules
//!
//! - [`models`] - Outline entities (Document, Collection, Comment, ...) and Heading
//! - [`error`] - Error type and Result alias
//! - [`config`] - Server configuration, size policy, feature flags
//! - [`utils`] - Formatting helpers
//!
//! ## Usage Examples
//!
//! ```
//! use outline_mcp_core::prelude::*;
//! use serde_json::json;
//!
//! let doc = Document::from(&json!({"id": "abc", "text": "# Hello"}));
//! assert_eq!(doc.title, "Untitled");
//!
//! let policy = SizePolicy::builder().limits_enabled(true).build().unwrap();
//! assert_eq!(policy.chars_per_token, 4);
//! ```

pub mod config;
pub mod error;
pub mod models;
pub mod utils;

pub use config::*;
pub use error::{Error, Result};
pub use models::*;
pub use utils::{char_len, format_thousands, truncate_chars};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::config::{FeatureFlags, OutlineConfig, SizePolicy};
    pub use crate::error::{Error, Result};
    pub use crate::models::{
        AiAnswer, Collection, Comment, Document, DocumentNode, Heading, SearchHit, SectionLookup,
    };
}
