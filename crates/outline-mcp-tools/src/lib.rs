//! # Outline MCP Tools
//!
//! Tool implementations for the Outline MCP server, independent of the MCP
//! framework. Each group wraps a shared [`ToolContext`] and returns a
//! [`ResponseEnvelope`]; no error escapes a tool.
//!
//! ## Tool Groups
//!
//! ### Reading
//!
//! [`document_reading::DocumentReadingTools`]:
//! - Read a whole document
//! - Export as markdown
//! - Outline (table of contents) for large documents
//! - Read one section by heading
//!
//! ### Search & Discovery
//!
//! [`document_search::DocumentSearchTools`]: full-text search, collection
//! listing, collection trees and document listings.
//!
//! ### Organization, Collaboration, Lifecycle
//!
//! - [`document_organization::DocumentOrganizationTools`]: move documents
//! - [`document_collaboration::DocumentCollaborationTools`]: comments, backlinks
//! - [`document_lifecycle::DocumentLifecycleTools`]: archive, trash, restore
//!
//! ### AI
//!
//! [`ai_tools::AiTools`]: questions answered from workspace content.
//!
//! ### Collection Resources
//!
//! [`collection_resources::CollectionResources`]: plain-text views behind
//! `outline://collection/...` URIs.
//!
//! ## Response Governance
//!
//! [`response_utils`] estimates tokens, appends size warnings, truncates
//! oversized replies, and attaches structured data when enabled.
//!
//! ## Example Usage
//!
//! ```
//! use std::sync::Arc;
//! use outline_mcp_client::StaticOutlineApi;
//! use outline_mcp_tools::{DocumentReadingTools, FeatureFlags, SizePolicy, ToolContext};
//! use serde_json::json;
//!
//! # let rt = tokio::runtime::Builder::new_current_thread().build().unwrap();
//! # rt.block_on(async {
//! let api = StaticOutlineApi::new()
//!     .with_data("documents.info", json!({"title": "Guide", "text": "## Setup\nrun it"}));
//! let ctx = ToolContext::new(Arc::new(api), SizePolicy::default(), FeatureFlags::default());
//!
//! let reply = DocumentReadingTools::new(ctx)
//!     .read_document_section("doc-1", "setup")
//!     .await;
//! assert_eq!(reply.text(), "## setup\n\nrun it");
//! # });
//! ```

pub mod ai_tools;
pub mod collection_resources;
pub mod context;
pub mod document_collaboration;
pub mod document_lifecycle;
pub mod document_organization;
pub mod document_reading;
pub mod document_search;
pub mod output_formatter;
pub mod response_utils;

pub use ai_tools::AiTools;
pub use collection_resources::{CollectionResources, RESOURCE_TEMPLATES, ResourceUri};
pub use context::ToolContext;
pub use document_collaboration::DocumentCollaborationTools;
pub use document_lifecycle::DocumentLifecycleTools;
pub use document_organization::DocumentOrganizationTools;
pub use document_reading::DocumentReadingTools;
pub use document_search::DocumentSearchTools;
pub use outline_mcp_core::prelude::*;
pub use output_formatter::TextFormatter;
pub use response_utils::{
    ResponseBuilder, ResponseEnvelope, SizeMeta, SizeOutcome, build_envelope,
    check_response_size, estimate_tokens,
};
