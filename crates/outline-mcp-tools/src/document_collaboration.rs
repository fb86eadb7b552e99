//! Comments and backlinks

use crate::context::{ToolContext, has_content};
use crate::output_formatter::TextFormatter;
use crate::response_utils::ResponseEnvelope;
use outline_mcp_client::data_or;
use outline_mcp_core::models::list_of;
use outline_mcp_core::prelude::*;
use serde_json::{Value, json};

/// Collaboration tools context
#[derive(Clone)]
pub struct DocumentCollaborationTools {
    ctx: ToolContext,
}

fn comment_summary(comment: &Comment) -> Value {
    json!({
        "comment_id": comment.id,
        "author": comment.author,
        "text": comment.text,
        "created_at": comment.created_at,
    })
}

impl DocumentCollaborationTools {
    pub fn new(ctx: ToolContext) -> Self {
        Self { ctx }
    }

    pub async fn list_document_comments(&self, document_id: &str) -> ResponseEnvelope {
        let response = self
            .ctx
            .api()
            .post("comments.list", json!({ "documentId": document_id }))
            .await;

        match response {
            Ok(body) => {
                let data = data_or(body, json!([]));
                let comments: Vec<Comment> = list_of(Some(&data));
                self.ctx.respond_with(
                    TextFormatter::comments(&comments),
                    json!({
                        "document_id": document_id,
                        "comments": comments.iter().map(comment_summary).collect::<Vec<_>>(),
                        "count": comments.len(),
                    }),
                )
            }
            Err(e) => self
                .ctx
                .recover("listing comments", e, json!({ "document_id": document_id })),
        }
    }

    pub async fn get_comment(&self, comment_id: &str) -> ResponseEnvelope {
        let response = self
            .ctx
            .api()
            .post("comments.info", json!({ "id": comment_id }))
            .await;

        match response {
            Ok(body) => {
                let data = data_or(body, json!({}));
                if !has_content(&data) {
                    return self.ctx.respond_with(
                        "Comment not found.",
                        json!({ "error": "comment_not_found", "comment_id": comment_id }),
                    );
                }
                let comment = Comment::from(&data);
                self.ctx
                    .respond_with(TextFormatter::comment(&comment), comment_summary(&comment))
            }
            Err(e) => self
                .ctx
                .recover("getting comment", e, json!({ "comment_id": comment_id })),
        }
    }

    /// Documents that link to `document_id`
    pub async fn get_document_backlinks(&self, document_id: &str) -> ResponseEnvelope {
        let response = self
            .ctx
            .api()
            .post(
                "documents.list",
                json!({ "backlinkDocumentId": document_id }),
            )
            .await;

        match response {
            Ok(body) => {
                let data = data_or(body, json!([]));
                let documents: Vec<Document> = list_of(Some(&data));
                self.ctx.respond_with(
                    TextFormatter::backlinks(&documents),
                    json!({
                        "document_id": document_id,
                        "backlinks": documents.iter().map(|d| json!({
                            "document_id": d.id,
                            "title": d.title,
                            "updated_at": d.updated_at,
                        })).collect::<Vec<_>>(),
                        "count": documents.len(),
                    }),
                )
            }
            Err(e) => self
                .ctx
                .recover("retrieving backlinks", e, json!({ "document_id": document_id })),
        }
    }
}
