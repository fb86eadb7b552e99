//! # Outline MCP Server
//!
//! Main server implementation and CLI.

pub mod tools;

pub use outline_mcp_client::{OutlineApi, OutlineClient};
pub use outline_mcp_tools::*;
pub use tools::OutlineMcpServer;
