//! Document reading tools: full text, export, outline and single sections.
//!
//! The outline and section tools exist so a model can navigate a large
//! document without pulling all of it into context.

use crate::context::ToolContext;
use crate::output_formatter::TextFormatter;
use crate::response_utils::ResponseEnvelope;
use outline_mcp_core::char_len;
use outline_mcp_core::prelude::*;
use outline_mcp_parser::{extract_headings, extract_section, render_outline, word_count};
use serde_json::{Value, json};

/// Documents shorter than this (in characters) are returned whole by the outline tool
pub const FULL_CONTENT_THRESHOLD: usize = 1000;

/// Reading tools context
#[derive(Clone)]
pub struct DocumentReadingTools {
    ctx: ToolContext,
}

impl DocumentReadingTools {
    pub fn new(ctx: ToolContext) -> Self {
        Self { ctx }
    }

    async fn fetch(&self, document_id: &str) -> Result<Document> {
        let data = self.ctx.api().get_document(document_id).await?;
        Ok(Document::from(&data))
    }

    /// Full document content
    pub async fn read_document(&self, document_id: &str) -> ResponseEnvelope {
        match self.fetch(document_id).await {
            Ok(doc) => self.ctx.respond_with(
                TextFormatter::document(&doc),
                json!({
                    "document_id": document_id,
                    "title": doc.title,
                    "text": doc.text,
                }),
            ),
            Err(e) => self
                .ctx
                .recover("reading document", e, json!({ "document_id": document_id })),
        }
    }

    /// Markdown export as produced by Outline
    pub async fn export_document(&self, document_id: &str) -> ResponseEnvelope {
        let response = self
            .ctx
            .api()
            .post("documents.export", json!({ "id": document_id }))
            .await;

        match response {
            Ok(body) => {
                let content = match body.get("data") {
                    Some(Value::String(s)) => s.clone(),
                    Some(Value::Null) | None => "No content available".to_string(),
                    Some(other) => other.to_string(),
                };
                self.ctx.respond_with(
                    content.clone(),
                    json!({
                        "document_id": document_id,
                        "content": content,
                        "format": "markdown",
                    }),
                )
            }
            Err(e) => self
                .ctx
                .recover("exporting document", e, json!({ "document_id": document_id })),
        }
    }

    /// Table of contents, or the whole text for short documents
    pub async fn get_document_outline(&self, document_id: &str) -> ResponseEnvelope {
        let doc = match self.fetch(document_id).await {
            Ok(doc) => doc,
            Err(e) => return self.ctx.recover("getting document outline", e, json!({})),
        };

        if char_len(&doc.text) < FULL_CONTENT_THRESHOLD {
            return self.ctx.respond_with(
                format!("# {}\n\n{}", doc.title, doc.text),
                json!({
                    "title": doc.title,
                    "full_content": true,
                    "text": doc.text,
                    "document_id": document_id,
                }),
            );
        }

        let headings = extract_headings(&doc.text);
        let words = word_count(&doc.text);
        log::debug!(
            "Outline for {}: {} headings, {} words",
            document_id,
            headings.len(),
            words
        );

        self.ctx.respond_with(
            render_outline(&doc.title, &headings, words),
            json!({
                "title": doc.title,
                "headings": headings,
                "word_count": words,
                "document_id": document_id,
            }),
        )
    }

    /// Content under one heading
    pub async fn read_document_section(&self, document_id: &str, heading: &str) -> ResponseEnvelope {
        let doc = match self.fetch(document_id).await {
            Ok(doc) => doc,
            Err(e) => return self.ctx.recover("reading document section", e, json!({})),
        };

        match extract_section(&doc.text, heading) {
            SectionLookup::Found(section) => self.ctx.respond_with(
                format!("## {}\n\n{}", heading, section),
                json!({
                    "heading": heading,
                    "content": section,
                    "document_id": document_id,
                }),
            ),
            SectionLookup::NotFound => {
                let available: Vec<String> = extract_headings(&doc.text)
                    .into_iter()
                    .map(|h| h.text)
                    .collect();

                let mut text = format!("Heading '{}' not found.", heading);
                if available.is_empty() {
                    text.push_str("\n\nNo headings found in this document.");
                } else {
                    text.push_str("\n\nAvailable headings:\n");
                    let listed: Vec<String> = available.iter().map(|h| format!("- {}", h)).collect();
                    text.push_str(&listed.join("\n"));
                }

                self.ctx.respond_with(
                    text,
                    json!({
                        "error": "heading_not_found",
                        "available_headings": available,
                        "document_id": document_id,
                    }),
                )
            }
        }
    }
}
