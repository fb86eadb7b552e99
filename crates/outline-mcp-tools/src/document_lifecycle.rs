//! Archive, trash and restore.
//!
//! Deletion is gated by [`FeatureFlags::delete_enabled`]; a disabled delete
//! never reaches the API.

use crate::context::{ToolContext, has_content};
use crate::output_formatter::TextFormatter;
use crate::response_utils::ResponseEnvelope;
use outline_mcp_client::{DEFAULT_TRASH_LIMIT, data_or};
use outline_mcp_core::models::list_of;
use outline_mcp_core::prelude::*;
use serde_json::{Value, json};

/// Environment switch that turns deletion off
pub const DISABLE_DELETE_VAR: &str = "OUTLINE_DISABLE_DELETE";

/// Wording for one state transition
struct Transition {
    /// "archive", used in "Failed to archive document." and "archive_failed"
    verb: &'static str,
    /// completes "Document {past} successfully"
    past: &'static str,
    /// completes "Error {doing}: ..."
    doing: &'static str,
    status: &'static str,
    failure: &'static str,
}

const ARCHIVE: Transition = Transition {
    verb: "archive",
    past: "archived",
    doing: "archiving document",
    status: "archived",
    failure: "Failed to archive document.",
};

const UNARCHIVE: Transition = Transition {
    verb: "unarchive",
    past: "unarchived",
    doing: "unarchiving document",
    status: "active",
    failure: "Failed to unarchive document.",
};

const RESTORE: Transition = Transition {
    verb: "restore",
    past: "restored",
    doing: "restoring document",
    status: "restored",
    failure: "Failed to restore document from trash.",
};

/// Lifecycle tools context
#[derive(Clone)]
pub struct DocumentLifecycleTools {
    ctx: ToolContext,
}

impl DocumentLifecycleTools {
    pub fn new(ctx: ToolContext) -> Self {
        Self { ctx }
    }

    fn transitioned(
        &self,
        t: &Transition,
        document_id: &str,
        outcome: Result<Value>,
    ) -> ResponseEnvelope {
        let data = match outcome {
            Ok(data) => data,
            Err(e) => {
                return self
                    .ctx
                    .recover(t.doing, e, json!({ "document_id": document_id }));
            }
        };

        if !has_content(&data) {
            return self.ctx.respond_with(
                t.failure,
                json!({
                    "error": format!("{}_failed", t.verb),
                    "document_id": document_id,
                }),
            );
        }

        let doc = Document::from(&data);
        log::info!("Document {} {}", document_id, t.past);
        self.ctx.respond_with(
            format!("Document {} successfully: {}", t.past, doc.title),
            json!({
                "document_id": document_id,
                "title": doc.title,
                "status": t.status,
            }),
        )
    }

    pub async fn archive_document(&self, document_id: &str) -> ResponseEnvelope {
        let outcome = self.ctx.api().archive_document(document_id).await;
        self.transitioned(&ARCHIVE, document_id, outcome)
    }

    pub async fn unarchive_document(&self, document_id: &str) -> ResponseEnvelope {
        let outcome = self.ctx.api().unarchive_document(document_id).await;
        self.transitioned(&UNARCHIVE, document_id, outcome)
    }

    pub async fn restore_document(&self, document_id: &str) -> ResponseEnvelope {
        let outcome = self.ctx.api().restore_document(document_id).await;
        self.transitioned(&RESTORE, document_id, outcome)
    }

    /// Move to trash, or delete for good with `permanent`
    pub async fn delete_document(&self, document_id: &str, permanent: bool) -> ResponseEnvelope {
        if !self.ctx.features().delete_enabled {
            return self.ctx.disabled("delete_document", DISABLE_DELETE_VAR);
        }

        let outcome = if permanent {
            self.delete_permanently(document_id).await
        } else {
            self.move_to_trash(document_id).await
        };

        outcome.unwrap_or_else(|e| {
            self.ctx
                .recover("deleting document", e, json!({ "document_id": document_id }))
        })
    }

    async fn delete_permanently(&self, document_id: &str) -> Result<ResponseEnvelope> {
        if self.ctx.api().permanently_delete_document(document_id).await? {
            log::info!("Permanently deleted document {}", document_id);
            return Ok(self.ctx.respond_with(
                "Document permanently deleted.",
                json!({
                    "document_id": document_id,
                    "status": "deleted",
                    "permanent": true,
                }),
            ));
        }
        Ok(self.ctx.respond_with(
            "Failed to permanently delete document.",
            json!({ "error": "delete_failed", "document_id": document_id }),
        ))
    }

    async fn move_to_trash(&self, document_id: &str) -> Result<ResponseEnvelope> {
        let doc = Document::from(&self.ctx.api().get_document(document_id).await?);
        let response = self
            .ctx
            .api()
            .post("documents.delete", json!({ "id": document_id }))
            .await?;

        let success = response
            .get("success")
            .and_then(Value::as_bool)
            .unwrap_or(false);
        if !success {
            return Ok(self.ctx.respond_with(
                "Failed to move document to trash.",
                json!({ "error": "delete_failed", "document_id": document_id }),
            ));
        }

        log::info!("Moved document {} to trash", document_id);
        Ok(self.ctx.respond_with(
            format!("Document moved to trash: {}", doc.title),
            json!({
                "document_id": document_id,
                "title": doc.title,
                "status": "deleted",
                "permanent": false,
            }),
        ))
    }

    pub async fn list_archived_documents(&self) -> ResponseEnvelope {
        let response = self
            .ctx
            .api()
            .post("documents.archived", json!({}))
            .await;

        match response {
            Ok(body) => {
                let data = data_or(body, json!([]));
                let documents: Vec<Document> = list_of(Some(&data));
                self.ctx.respond_with(
                    TextFormatter::documents_list(&documents, "Archived Documents"),
                    json!({
                        "documents": documents.iter().map(|d| json!({
                            "document_id": d.id,
                            "title": d.title,
                            "updated_at": d.updated_at.clone().unwrap_or_default(),
                        })).collect::<Vec<_>>(),
                        "count": documents.len(),
                    }),
                )
            }
            Err(e) => self
                .ctx
                .recover("listing archived documents", e, json!({})),
        }
    }

    pub async fn list_trash(&self) -> ResponseEnvelope {
        match self.ctx.api().list_trash(DEFAULT_TRASH_LIMIT).await {
            Ok(data) => {
                let documents: Vec<Document> = list_of(Some(&data));
                self.ctx.respond_with(
                    TextFormatter::documents_list(&documents, "Documents in Trash"),
                    json!({
                        "documents": documents.iter().map(|d| json!({
                            "document_id": d.id,
                            "title": d.title,
                            "deleted_at": d.deleted_at.clone().unwrap_or_default(),
                        })).collect::<Vec<_>>(),
                        "count": documents.len(),
                    }),
                )
            }
            Err(e) => self.ctx.recover("listing trash", e, json!({})),
        }
    }
}
