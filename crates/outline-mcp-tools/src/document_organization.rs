//! Moving documents between collections and parents

use crate::context::{ToolContext, has_content};
use crate::response_utils::ResponseEnvelope;
use outline_mcp_core::prelude::*;
use serde_json::json;

/// Organization tools context
#[derive(Clone)]
pub struct DocumentOrganizationTools {
    ctx: ToolContext,
}

impl DocumentOrganizationTools {
    pub fn new(ctx: ToolContext) -> Self {
        Self { ctx }
    }

    /// Relocate a document (children move with it).
    ///
    /// At least one target is required; without one the API is not called.
    pub async fn move_document(
        &self,
        document_id: &str,
        collection_id: Option<&str>,
        parent_document_id: Option<&str>,
    ) -> ResponseEnvelope {
        if collection_id.is_none() && parent_document_id.is_none() {
            return self.ctx.respond_with(
                "Error: You must specify either a collection_id or parent_document_id.",
                json!({ "error": "missing_target", "document_id": document_id }),
            );
        }

        let mut payload = json!({ "id": document_id });
        if let Some(id) = collection_id.filter(|s| !s.is_empty()) {
            payload["collectionId"] = json!(id);
        }
        if let Some(id) = parent_document_id.filter(|s| !s.is_empty()) {
            payload["parentDocumentId"] = json!(id);
        }

        let response = match self.ctx.api().post("documents.move", payload).await {
            Ok(response) => response,
            Err(e) => {
                return self
                    .ctx
                    .recover("moving document", e, json!({ "document_id": document_id }));
            }
        };

        let moved = response.get("data").filter(|d| has_content(d));
        let Some(data) = moved else {
            return self.ctx.respond_with(
                "Failed to move document.",
                json!({ "error": "move_failed", "document_id": document_id }),
            );
        };

        let doc = Document::from(data);
        let mut result = json!({ "document_id": document_id, "title": doc.title });
        if let Some(id) = collection_id.filter(|s| !s.is_empty()) {
            result["new_collection_id"] = json!(id);
        }
        if let Some(id) = parent_document_id.filter(|s| !s.is_empty()) {
            result["new_parent_id"] = json!(id);
        }
        log::info!("Moved document {}", document_id);
        self.ctx.respond_with("Document moved successfully.", result)
    }
}
