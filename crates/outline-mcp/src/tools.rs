//! MCP tool surface for the Outline knowledge base

use anyhow::Result;
use outline_mcp_client::{OutlineApi, OutlineClient};
use outline_mcp_core::OutlineConfig;
use outline_mcp_tools::{
    AiTools, CollectionResources, DocumentCollaborationTools, DocumentLifecycleTools,
    DocumentOrganizationTools, DocumentReadingTools, DocumentSearchTools, RESOURCE_TEMPLATES,
    ResourceUri, ResponseEnvelope, ToolContext,
};
use serde_json::json;
use std::sync::Arc;
use turbomcp::prelude::*;

/// Tool reply as it goes on the wire.
///
/// `#[tool]` places a `String` result verbatim in the text content and
/// stringifies anything else, so only the governed text is handed over.
/// Structured data stays with in-process callers of the tool groups.
fn reply(envelope: ResponseEnvelope) -> McpResult<String> {
    Ok(envelope.into_text())
}

/// Outline MCP Server
///
/// Every tool group shares one [`ToolContext`], so the whole server holds a
/// single API client and a single frozen configuration.
#[derive(Clone)]
pub struct OutlineMcpServer {
    config: Arc<OutlineConfig>,
    reading: DocumentReadingTools,
    search: DocumentSearchTools,
    organization: DocumentOrganizationTools,
    collaboration: DocumentCollaborationTools,
    lifecycle: DocumentLifecycleTools,
    ai: AiTools,
    resources: CollectionResources,
}

impl OutlineMcpServer {
    /// Create a server talking to the Outline API described by `config`
    pub fn new(config: OutlineConfig) -> Result<Self> {
        let client = OutlineClient::new(&config)?;
        log::debug!("Outline client ready for {}", client.api_url());
        Ok(Self::with_api(config, Arc::new(client)))
    }

    /// Create a server over any [`OutlineApi`] implementation
    pub fn with_api(config: OutlineConfig, api: Arc<dyn OutlineApi>) -> Self {
        let ctx = ToolContext::new(api, config.size_policy, config.features);
        Self {
            config: Arc::new(config),
            reading: DocumentReadingTools::new(ctx.clone()),
            search: DocumentSearchTools::new(ctx.clone()),
            organization: DocumentOrganizationTools::new(ctx.clone()),
            collaboration: DocumentCollaborationTools::new(ctx.clone()),
            lifecycle: DocumentLifecycleTools::new(ctx.clone()),
            ai: AiTools::new(ctx.clone()),
            resources: CollectionResources::new(ctx),
        }
    }

    pub fn config(&self) -> &OutlineConfig {
        &self.config
    }

    /// Tool names by group, leaving out tools switched off by feature flags
    pub fn enabled_tool_groups(&self) -> serde_json::Value {
        let features = self.config.features;

        let mut lifecycle = vec![
            "archive_document",
            "unarchive_document",
            "restore_document",
            "list_archived_documents",
            "list_trash",
        ];
        if features.delete_enabled {
            lifecycle.push("delete_document");
        }

        let mut tools = json!({
            "context": ["get_server_context"],
            "reading": [
                "read_document",
                "export_document",
                "get_document_outline",
                "read_document_section"
            ],
            "search": [
                "search_documents",
                "list_collections",
                "get_collection_structure",
                "list_documents"
            ],
            "organization": ["move_document"],
            "collaboration": [
                "list_document_comments",
                "get_comment",
                "get_document_backlinks"
            ],
            "lifecycle": lifecycle,
            "resources": ["read_collection_resource"],
        });
        if features.ai_tools_enabled {
            tools["ai"] = json!(["ask_ai_about_documents"]);
        }
        tools
    }

    /// Render an `outline://collection/...` resource as plain text.
    ///
    /// A URI outside the three templates is answered in text like any
    /// other failed read.
    pub async fn render_resource(&self, uri: &str) -> String {
        match ResourceUri::parse(uri) {
            Ok(parsed) => self.resources.read(&parsed).await,
            Err(e) => {
                log::warn!("Rejected resource read: {}", e);
                format!("Error: {}", e)
            }
        }
    }
}

#[turbomcp::server(
    name = "outline-mcp",
    version = "0.4.0",
    transports = ["stdio", "http", "websocket", "tcp", "unix"]
)]
impl OutlineMcpServer {
    // ==================== Server Context (LLM Discovery) ====================

    #[tool(
        description = "Get server context (enabled tools, collection resource templates, response size policy) in a single discovery call",
        usage = "Use as first call after connecting to learn which tools are available and how large replies may get",
        performance = "Instant, no API calls",
        related = ["list_collections", "search_documents"],
        examples = ["Check whether deletion is enabled", "Find resource URI templates"]
    )]
    async fn get_server_context(&self) -> McpResult<serde_json::Value> {
        let policy = self.config.size_policy;
        Ok(json!({
            "server": "outline-mcp",
            "version": env!("CARGO_PKG_VERSION"),
            "api_url": self.config.api_url,
            "tools": self.enabled_tool_groups(),
            "resources": {
                "templates": RESOURCE_TEMPLATES,
                "tool": "read_collection_resource",
                "note": "Use MCP resources if supported by client, otherwise use the tool as fallback"
            },
            "response_policy": {
                "limits_enabled": policy.limits_enabled,
                "soft_limit_tokens": policy.soft_limit_tokens,
                "hard_limit_tokens": policy.hard_limit_tokens,
                "chars_per_token": policy.chars_per_token,
                "structured_output_enabled": policy.structured_output_enabled
            }
        }))
    }

    // ==================== Reading ====================

    #[tool(
        description = "Read the full markdown content of an Outline document",
        usage = "Use for small documents or when the whole text is needed. For large documents call get_document_outline first, then read_document_section",
        performance = "One API call. Reply size grows with the document and may be truncated when response limits are on",
        related = ["get_document_outline", "read_document_section", "export_document"],
        examples = ["hDYep1TPAM"]
    )]
    async fn read_document(&self, document_id: String) -> McpResult<String> {
        reply(self.reading.read_document(&document_id).await)
    }

    #[tool(
        description = "Export an Outline document as raw markdown",
        usage = "Use when the exact markdown source is needed, for example to copy a document elsewhere",
        performance = "One API call",
        related = ["read_document"],
        examples = ["hDYep1TPAM"]
    )]
    async fn export_document(&self, document_id: String) -> McpResult<String> {
        reply(self.reading.export_document(&document_id).await)
    }

    #[tool(
        description = "Get a table of contents (headings and word count) for a document; short documents are returned in full",
        usage = "Use before reading a large document to find the section you need. Documents under 1000 characters come back whole",
        performance = "One API call, reply is small for large documents",
        related = ["read_document_section", "read_document"],
        examples = ["hDYep1TPAM"]
    )]
    async fn get_document_outline(&self, document_id: String) -> McpResult<String> {
        reply(self.reading.get_document_outline(&document_id).await)
    }

    #[tool(
        description = "Read one section of a document by its heading text (case-insensitive), including nested subsections",
        usage = "Use after get_document_outline. Lists the available headings when the heading is not found",
        performance = "One API call, reply limited to the section",
        related = ["get_document_outline", "read_document"],
        examples = ["Installation", "API Reference"]
    )]
    async fn read_document_section(
        &self,
        document_id: String,
        heading: String,
    ) -> McpResult<String> {
        reply(
            self.reading
                .read_document_section(&document_id, &heading)
                .await,
        )
    }

    // ==================== Search & Discovery ====================

    #[tool(
        description = "Full-text search across the workspace, optionally within one collection",
        usage = "Use to locate documents by keyword. Results include document IDs for follow-up reads",
        performance = "One API call, default limit 10",
        related = ["read_document", "get_document_outline", "list_collections"],
        examples = ["deployment checklist", "onboarding"]
    )]
    async fn search_documents(
        &self,
        query: String,
        collection_id: Option<String>,
        limit: Option<usize>,
    ) -> McpResult<String> {
        reply(
            self.search
                .search_documents(&query, collection_id.as_deref(), limit)
                .await,
        )
    }

    #[tool(
        description = "List collections in the workspace with their IDs and document counts",
        usage = "Use to discover collection IDs for scoped search, listing and resources",
        performance = "One API call, first 20 collections",
        related = ["get_collection_structure", "list_documents"],
        examples = []
    )]
    async fn list_collections(&self) -> McpResult<String> {
        reply(self.search.list_collections().await)
    }

    #[tool(
        description = "Get the nested document tree of a collection",
        usage = "Use to see how documents in a collection are organized before moving or reading them",
        performance = "One API call",
        related = ["list_collections", "move_document"],
        examples = []
    )]
    async fn get_collection_structure(
        &self,
        collection_id: String,
    ) -> McpResult<String> {
        reply(self.search.get_collection_structure(&collection_id).await)
    }

    #[tool(
        description = "List recently updated documents, optionally within one collection",
        usage = "Use to browse without a search query",
        performance = "One API call, default limit 20",
        related = ["search_documents", "list_collections"],
        examples = []
    )]
    async fn list_documents(
        &self,
        collection_id: Option<String>,
        limit: Option<usize>,
    ) -> McpResult<String> {
        reply(
            self.search
                .list_documents(collection_id.as_deref(), limit)
                .await,
        )
    }

    // ==================== Organization ====================

    #[tool(
        description = "Move a document (and its children) to another collection or under another parent document",
        usage = "Provide collection_id, parent_document_id, or both. Nothing is moved when neither is given",
        performance = "One API call",
        related = ["get_collection_structure"],
        examples = []
    )]
    async fn move_document(
        &self,
        document_id: String,
        collection_id: Option<String>,
        parent_document_id: Option<String>,
    ) -> McpResult<String> {
        reply(
            self.organization
                .move_document(
                    &document_id,
                    collection_id.as_deref(),
                    parent_document_id.as_deref(),
                )
                .await,
        )
    }

    // ==================== Collaboration ====================

    #[tool(
        description = "List comments on a document",
        usage = "Use to review discussion on a document. Comment IDs can be passed to get_comment",
        performance = "One API call",
        related = ["get_comment", "get_document_backlinks"],
        examples = []
    )]
    async fn list_document_comments(&self, document_id: String) -> McpResult<String> {
        reply(self.collaboration.list_document_comments(&document_id).await)
    }

    #[tool(
        description = "Get a single comment by ID",
        usage = "Use after list_document_comments",
        performance = "One API call",
        related = ["list_document_comments"],
        examples = []
    )]
    async fn get_comment(&self, comment_id: String) -> McpResult<String> {
        reply(self.collaboration.get_comment(&comment_id).await)
    }

    #[tool(
        description = "List documents that link to a document",
        usage = "Use to find related material or check impact before archiving",
        performance = "One API call",
        related = ["list_document_comments", "archive_document"],
        examples = []
    )]
    async fn get_document_backlinks(&self, document_id: String) -> McpResult<String> {
        reply(self.collaboration.get_document_backlinks(&document_id).await)
    }

    // ==================== Lifecycle ====================

    #[tool(
        description = "Archive a document (hidden from search, restorable with unarchive_document)",
        usage = "Use for outdated documents that should be kept",
        performance = "One API call",
        related = ["unarchive_document", "list_archived_documents"],
        examples = []
    )]
    async fn archive_document(&self, document_id: String) -> McpResult<String> {
        reply(self.lifecycle.archive_document(&document_id).await)
    }

    #[tool(
        description = "Bring an archived document back to active",
        usage = "Use with IDs from list_archived_documents",
        performance = "One API call",
        related = ["archive_document", "list_archived_documents"],
        examples = []
    )]
    async fn unarchive_document(&self, document_id: String) -> McpResult<String> {
        reply(self.lifecycle.unarchive_document(&document_id).await)
    }

    #[tool(
        description = "Move a document to trash, or delete it permanently with permanent=true",
        usage = "Trashed documents can be restored with restore_document. Permanent deletion cannot be undone. Disabled when OUTLINE_DISABLE_DELETE is set",
        performance = "One or two API calls",
        related = ["restore_document", "list_trash", "archive_document"],
        examples = []
    )]
    async fn delete_document(
        &self,
        document_id: String,
        permanent: Option<bool>,
    ) -> McpResult<String> {
        reply(
            self.lifecycle
                .delete_document(&document_id, permanent.unwrap_or(false))
                .await,
        )
    }

    #[tool(
        description = "Restore a document from trash",
        usage = "Use with IDs from list_trash",
        performance = "One API call",
        related = ["list_trash", "delete_document"],
        examples = []
    )]
    async fn restore_document(&self, document_id: String) -> McpResult<String> {
        reply(self.lifecycle.restore_document(&document_id).await)
    }

    #[tool(
        description = "List archived documents",
        usage = "Use to find documents to unarchive",
        performance = "One API call",
        related = ["unarchive_document"],
        examples = []
    )]
    async fn list_archived_documents(&self) -> McpResult<String> {
        reply(self.lifecycle.list_archived_documents().await)
    }

    #[tool(
        description = "List documents in trash",
        usage = "Use to find documents to restore",
        performance = "One API call, first 25 documents",
        related = ["restore_document"],
        examples = []
    )]
    async fn list_trash(&self) -> McpResult<String> {
        reply(self.lifecycle.list_trash().await)
    }

    // ==================== AI ====================

    #[tool(
        description = "Ask a natural-language question answered from workspace documents, optionally scoped to a collection or document",
        usage = "Requires AI answers enabled in the Outline workspace. Disabled when OUTLINE_DISABLE_AI_TOOLS is set",
        performance = "One API call, latency depends on Outline's AI backend",
        related = ["search_documents"],
        examples = ["What is our vacation policy?"]
    )]
    async fn ask_ai_about_documents(
        &self,
        question: String,
        collection_id: Option<String>,
        document_id: Option<String>,
    ) -> McpResult<String> {
        reply(
            self.ai
                .ask_ai_about_documents(
                    &question,
                    collection_id.as_deref(),
                    document_id.as_deref(),
                )
                .await,
        )
    }

    // ==================== Collection Resources ====================

    /// Collection name, description, document count and color
    #[resource("outline://collection/{collection_id}")]
    async fn collection_metadata_resource(&self, collection_id: String) -> McpResult<String> {
        Ok(self
            .resources
            .read(&ResourceUri::Metadata(collection_id))
            .await)
    }

    /// Nested document tree of a collection
    #[resource("outline://collection/{collection_id}/tree")]
    async fn collection_tree_resource(&self, collection_id: String) -> McpResult<String> {
        Ok(self.resources.read(&ResourceUri::Tree(collection_id)).await)
    }

    /// Flat document list of a collection
    #[resource("outline://collection/{collection_id}/documents")]
    async fn collection_documents_resource(&self, collection_id: String) -> McpResult<String> {
        Ok(self
            .resources
            .read(&ResourceUri::Documents(collection_id))
            .await)
    }

    // ==================== Collection Resources (tool fallback) ====================

    #[tool(
        description = "Read a collection resource: outline://collection/{id}, outline://collection/{id}/tree or outline://collection/{id}/documents",
        usage = "Use when the client does not support MCP resources. Returns plain markdown text",
        performance = "One API call",
        related = ["get_server_context", "list_collections"],
        examples = ["outline://collection/abc123/tree"]
    )]
    async fn read_collection_resource(&self, uri: String) -> McpResult<String> {
        Ok(self.render_resource(&uri).await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use outline_mcp_client::StaticOutlineApi;
    use outline_mcp_core::{FeatureFlags, SizePolicy};

    fn server(api: StaticOutlineApi, policy: SizePolicy) -> OutlineMcpServer {
        let config = OutlineConfig::builder("test-key")
            .api_url("http://127.0.0.1:9/api")
            .size_policy(policy)
            .features(FeatureFlags::default())
            .build()
            .expect("Failed to build config");
        OutlineMcpServer::with_api(config, Arc::new(api))
    }

    fn governed() -> SizePolicy {
        SizePolicy {
            chars_per_token: 4,
            soft_limit_tokens: 10,
            hard_limit_tokens: 10,
            limits_enabled: true,
            structured_output_enabled: true,
        }
    }

    #[test]
    fn test_registered_surface() {
        assert_eq!(OutlineMcpServer::get_resources_metadata().len(), 3);
        assert_eq!(OutlineMcpServer::get_tools_metadata().len(), 21);
    }

    #[tokio::test]
    async fn test_read_document_reply_is_bounded_by_hard_limit() {
        let big = "x".repeat(100_000);
        let api = StaticOutlineApi::new()
            .with_data("documents.info", json!({"id": "d1", "title": "T", "text": big}));
        let text = server(api, governed())
            .read_document("d1".to_string())
            .await
            .unwrap();

        assert!(text.starts_with("# T\n\n"));
        assert!(text.contains("RESPONSE TRUNCATED (25,001 → 10 tokens)"));
        // 40 kept characters plus the truncation notice
        assert!(text.chars().count() < 40 + 200, "reply was {} chars", text.chars().count());
        assert!(!text.contains("structured_content"));
    }

    #[tokio::test]
    async fn test_export_reply_is_bounded_by_hard_limit() {
        let api = StaticOutlineApi::new()
            .with_response("documents.export", json!({"data": "y".repeat(50_000)}));
        let text = server(api, governed())
            .export_document("d1".to_string())
            .await
            .unwrap();

        assert!(text.starts_with(&"y".repeat(40)));
        assert!(!text.starts_with(&"y".repeat(41)));
        assert!(text.chars().count() < 40 + 200);
    }

    #[tokio::test]
    async fn test_reply_is_plain_text() {
        let api = StaticOutlineApi::new()
            .with_data("documents.info", json!({"id": "d1", "title": "T", "text": "hi"}));
        let text = server(api, SizePolicy::default())
            .read_document("d1".to_string())
            .await
            .unwrap();
        assert_eq!(text, "# T\n\nhi\n");
    }

    #[tokio::test]
    async fn test_resource_handlers_render_views() {
        let api = StaticOutlineApi::new()
            .with_data("collections.documents", json!([{"id": "d1", "title": "Welcome"}]))
            .with_data("collections.list", json!([{"id": "c1", "name": "Eng", "documents": 2}]));
        let server = server(api, SizePolicy::default());

        let tree = server
            .collection_tree_resource("c1".to_string())
            .await
            .unwrap();
        assert_eq!(tree, "# Document Tree\n\n- Welcome (d1)\n");

        let metadata = server
            .collection_metadata_resource("c1".to_string())
            .await
            .unwrap();
        assert_eq!(metadata, "# Eng\n\n**Documents**: 2\n");
    }

    #[tokio::test]
    async fn test_resource_fallback_answers_unknown_uri_in_text() {
        let server = server(StaticOutlineApi::new(), SizePolicy::default());
        let text = server
            .read_collection_resource("outline://document/abc".to_string())
            .await
            .expect("Unknown URIs are a normal reply");
        assert_eq!(text, "Error: Unknown resource URI: outline://document/abc");
    }
}
