//! Search and discovery tools

use crate::context::ToolContext;
use crate::output_formatter::TextFormatter;
use crate::response_utils::ResponseEnvelope;
use outline_mcp_client::{DEFAULT_LIST_LIMIT, DEFAULT_SEARCH_LIMIT};
use outline_mcp_core::models::list_of;
use outline_mcp_core::prelude::*;
use serde_json::{Value, json};

/// Search tools context
#[derive(Clone)]
pub struct DocumentSearchTools {
    ctx: ToolContext,
}

impl DocumentSearchTools {
    pub fn new(ctx: ToolContext) -> Self {
        Self { ctx }
    }

    /// Full-text search across the workspace or one collection
    pub async fn search_documents(
        &self,
        query: &str,
        collection_id: Option<&str>,
        limit: Option<usize>,
    ) -> ResponseEnvelope {
        let limit = limit.unwrap_or(DEFAULT_SEARCH_LIMIT);
        let data = match self
            .ctx
            .api()
            .search_documents(query, collection_id, limit)
            .await
        {
            Ok(data) => data,
            Err(e) => {
                return self
                    .ctx
                    .recover("searching documents", e, json!({ "query": query }));
            }
        };

        let hits: Vec<SearchHit> = list_of(Some(&data));
        let results: Vec<Value> = hits
            .iter()
            .map(|hit| {
                json!({
                    "document_id": hit.document.id,
                    "title": hit.document.title,
                    "context": hit.context,
                })
            })
            .collect();

        self.ctx.respond_with(
            TextFormatter::search_results(&hits),
            json!({
                "query": query,
                "results": results,
                "count": hits.len(),
            }),
        )
    }

    pub async fn list_collections(&self) -> ResponseEnvelope {
        let data = match self.ctx.api().list_collections(DEFAULT_LIST_LIMIT).await {
            Ok(data) => data,
            Err(e) => return self.ctx.recover("listing collections", e, json!({})),
        };

        let collections: Vec<Collection> = list_of(Some(&data));
        self.ctx.respond_with(
            TextFormatter::collections(&collections),
            json!({
                "collections": collections.iter().map(|c| json!({
                    "collection_id": c.id,
                    "name": c.name,
                    "description": c.description,
                    "document_count": c.document_count,
                })).collect::<Vec<_>>(),
                "count": collections.len(),
            }),
        )
    }

    /// Navigation tree of one collection
    pub async fn get_collection_structure(&self, collection_id: &str) -> ResponseEnvelope {
        let data = match self.ctx.api().get_collection_documents(collection_id).await {
            Ok(data) => data,
            Err(e) => {
                return self.ctx.recover(
                    "getting collection structure",
                    e,
                    json!({ "collection_id": collection_id }),
                );
            }
        };

        let tree: Vec<DocumentNode> = list_of(Some(&data));
        let count: usize = tree.iter().map(DocumentNode::node_count).sum();
        self.ctx.respond_with(
            TextFormatter::collection_structure(&tree),
            json!({
                "collection_id": collection_id,
                "tree": tree,
                "count": count,
            }),
        )
    }

    /// Recently updated documents, optionally within one collection
    pub async fn list_documents(
        &self,
        collection_id: Option<&str>,
        limit: Option<usize>,
    ) -> ResponseEnvelope {
        let limit = limit.unwrap_or(DEFAULT_LIST_LIMIT);
        let data = match self.ctx.api().list_documents(collection_id, limit).await {
            Ok(data) => data,
            Err(e) => {
                return self.ctx.recover(
                    "listing documents",
                    e,
                    json!({ "collection_id": collection_id }),
                );
            }
        };

        let documents: Vec<Document> = list_of(Some(&data));
        self.ctx.respond_with(
            TextFormatter::documents_list(&documents, "Documents"),
            json!({
                "documents": documents.iter().map(|d| json!({
                    "document_id": d.id,
                    "title": d.title,
                    "updated_at": d.updated_at,
                })).collect::<Vec<_>>(),
                "count": documents.len(),
            }),
        )
    }
}
