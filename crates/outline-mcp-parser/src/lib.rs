//! # Outline MCP Parser
//!
//! Markdown structure analysis for navigating large documents without
//! loading them whole.
//!
//! This crate provides:
//! - **Heading extraction** for a table-of-contents view (H1-H4)
//! - **Section extraction** by heading name (H1-H6)
//! - **Outline rendering** as an indented bullet list
//! - **Code fence awareness**: `#` lines inside ``` blocks are never headings
//!
//! The outline view is capped at four levels to keep it brief, while section
//! extraction accepts all six so any heading can be read.
//!
//! ## Quick Start
//!
//! ```
//! use outline_mcp_parser::{extract_headings, extract_section, render_outline, word_count};
//! use outline_mcp_core::SectionLookup;
//!
//! let md = "# Guide\nintro\n## Install\nrun it\n```sh\n# comment\n```\n## Use\nenjoy";
//!
//! let headings = extract_headings(md);
//! assert_eq!(headings.len(), 3);
//!
//! match extract_section(md, "install") {
//!     SectionLookup::Found(body) => assert!(body.starts_with("run it")),
//!     SectionLookup::NotFound => unreachable!(),
//! }
//!
//! let toc = render_outline("Guide", &headings, word_count(md));
//! assert!(toc.contains("  - Install"));
//! ```

pub mod parsers;

pub use parsers::{EMPTY_SECTION, extract_headings, extract_section, render_outline, word_count};

// Re-export core types for consumers
pub use outline_mcp_core::{Heading, SectionLookup};
