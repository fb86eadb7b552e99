//! Natural-language questions answered by Outline's AI search

use crate::context::ToolContext;
use crate::output_formatter::TextFormatter;
use crate::response_utils::ResponseEnvelope;
use outline_mcp_core::prelude::*;
use serde_json::json;

/// Environment switch that turns the AI tool off
pub const DISABLE_AI_TOOLS_VAR: &str = "OUTLINE_DISABLE_AI_TOOLS";

/// AI tools context
#[derive(Clone)]
pub struct AiTools {
    ctx: ToolContext,
}

impl AiTools {
    pub fn new(ctx: ToolContext) -> Self {
        Self { ctx }
    }

    pub async fn ask_ai_about_documents(
        &self,
        question: &str,
        collection_id: Option<&str>,
        document_id: Option<&str>,
    ) -> ResponseEnvelope {
        if !self.ctx.features().ai_tools_enabled {
            return self.ctx.disabled("ask_ai_about_documents", DISABLE_AI_TOOLS_VAR);
        }

        let body = match self
            .ctx
            .api()
            .answer_question(question, collection_id, document_id)
            .await
        {
            Ok(body) => body,
            Err(e) => {
                return self
                    .ctx
                    .recover("getting answer", e, json!({ "question": question }));
            }
        };

        let answer = AiAnswer::from(&body);
        self.ctx.respond_with(
            TextFormatter::ai_answer(&answer),
            json!({
                "answer": answer.answer,
                "sources": answer.sources.iter().map(|d| json!({
                    "document_id": d.id,
                    "title": d.title,
                })).collect::<Vec<_>>(),
                "question": question,
                "collection_id": collection_id,
                "document_id": document_id,
            }),
        )
    }
}
