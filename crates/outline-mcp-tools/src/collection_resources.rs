//! Read-only collection views addressed by `outline://` URIs.
//!
//! Resources answer with plain markdown, never an envelope:
//!
//! - `outline://collection/{id}`: name, description, document count, color
//! - `outline://collection/{id}/tree`: nested document tree
//! - `outline://collection/{id}/documents`: flat document list

use crate::context::ToolContext;
use crate::output_formatter::TextFormatter;
use outline_mcp_client::{DEFAULT_LIST_LIMIT, DEFAULT_SEARCH_LIMIT};
use outline_mcp_core::models::list_of;
use outline_mcp_core::prelude::*;
use std::fmt;

const SCHEME_PREFIX: &str = "outline://collection/";

/// URI templates, as advertised to clients
pub const RESOURCE_TEMPLATES: [&str; 3] = [
    "outline://collection/{collection_id}",
    "outline://collection/{collection_id}/tree",
    "outline://collection/{collection_id}/documents",
];

/// A parsed collection resource address
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceUri {
    Metadata(String),
    Tree(String),
    Documents(String),
}

impl ResourceUri {
    /// Parse a URI, rejecting anything outside the three templates
    pub fn parse(uri: &str) -> Result<Self> {
        let rest = uri
            .trim()
            .strip_prefix(SCHEME_PREFIX)
            .ok_or_else(|| Error::other(format!("Unknown resource URI: {}", uri)))?;

        let mut parts = rest.split('/');
        let id = parts.next().filter(|id| !id.is_empty());
        let view = parts.next();
        let extra = parts.next();

        match (id, view, extra) {
            (Some(id), None, None) => Ok(ResourceUri::Metadata(id.to_string())),
            (Some(id), Some("tree"), None) => Ok(ResourceUri::Tree(id.to_string())),
            (Some(id), Some("documents"), None) => Ok(ResourceUri::Documents(id.to_string())),
            _ => Err(Error::other(format!("Unknown resource URI: {}", uri))),
        }
    }

    pub fn collection_id(&self) -> &str {
        match self {
            ResourceUri::Metadata(id) | ResourceUri::Tree(id) | ResourceUri::Documents(id) => id,
        }
    }
}

impl fmt::Display for ResourceUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceUri::Metadata(id) => write!(f, "{}{}", SCHEME_PREFIX, id),
            ResourceUri::Tree(id) => write!(f, "{}{}/tree", SCHEME_PREFIX, id),
            ResourceUri::Documents(id) => write!(f, "{}{}/documents", SCHEME_PREFIX, id),
        }
    }
}

/// Collection resource reader
#[derive(Clone)]
pub struct CollectionResources {
    ctx: ToolContext,
}

impl CollectionResources {
    pub fn new(ctx: ToolContext) -> Self {
        Self { ctx }
    }

    /// Render the resource at `uri`
    pub async fn read(&self, uri: &ResourceUri) -> String {
        let rendered = match uri {
            ResourceUri::Metadata(id) => self.metadata(id).await,
            ResourceUri::Tree(id) => self.tree(id).await,
            ResourceUri::Documents(id) => self.documents(id).await,
        };

        rendered.unwrap_or_else(|e| {
            log::warn!("Failed to read resource {}: {}", uri, e);
            if e.is_client() {
                format!("Outline client error: {}", e)
            } else {
                format!("Error: {}", e)
            }
        })
    }

    async fn metadata(&self, collection_id: &str) -> Result<String> {
        // There is no single-collection lookup in use; scan the first page
        let data = self.ctx.api().list_collections(DEFAULT_LIST_LIMIT).await?;
        let collections: Vec<Collection> = list_of(Some(&data));

        Ok(collections
            .iter()
            .find(|c| c.id == collection_id)
            .map(TextFormatter::collection_metadata)
            .unwrap_or_else(|| format!("Error: Collection {} not found", collection_id)))
    }

    async fn tree(&self, collection_id: &str) -> Result<String> {
        let data = self.ctx.api().get_collection_documents(collection_id).await?;
        let nodes: Vec<DocumentNode> = list_of(Some(&data));
        if nodes.is_empty() {
            return Ok("No documents in this collection.\n".to_string());
        }
        Ok(format!(
            "# Document Tree\n\n{}",
            TextFormatter::document_tree(&nodes)
        ))
    }

    async fn documents(&self, collection_id: &str) -> Result<String> {
        let data = self
            .ctx
            .api()
            .search_documents("", Some(collection_id), DEFAULT_SEARCH_LIMIT)
            .await?;
        let documents: Vec<Document> = list_of::<SearchHit>(Some(&data))
            .into_iter()
            .map(|hit| hit.document)
            .collect();
        Ok(TextFormatter::document_bullets(&documents))
    }
}
