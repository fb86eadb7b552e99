//! # Outline MCP Client
//!
//! Access to the Outline REST API behind a narrow async trait.
//!
//! - [`OutlineApi`]: the contract the tool layer depends on
//! - [`OutlineClient`]: `reqwest` implementation with bearer auth and a
//!   per-request timeout
//! - [`StaticOutlineApi`]: canned in-memory double for tests
//!
//! All failures surface as [`outline_mcp_core::Error::Client`], never as a
//! panic or a transport-specific type.

pub mod api;
pub mod client;
pub mod testing;

pub use api::{
    DEFAULT_LIST_LIMIT, DEFAULT_SEARCH_LIMIT, DEFAULT_TRASH_LIMIT, OutlineApi, data_or,
};
pub use client::OutlineClient;
pub use testing::{RecordedCall, StaticOutlineApi};
