//! Integration tests for the Outline MCP server

#[cfg(test)]
mod tests {
    use outline_mcp::{FeatureFlags, OutlineConfig, OutlineMcpServer, SizePolicy};
    use outline_mcp_client::StaticOutlineApi;
    use serde_json::json;
    use std::sync::Arc;

    fn config(features: FeatureFlags) -> OutlineConfig {
        OutlineConfig::builder("test-key")
            .api_url("http://127.0.0.1:9/api")
            .features(features)
            .build()
            .expect("Failed to build config")
    }

    fn server_with(api: StaticOutlineApi, features: FeatureFlags) -> OutlineMcpServer {
        OutlineMcpServer::with_api(config(features), Arc::new(api))
    }

    fn tool_names(tools: &serde_json::Value) -> Vec<String> {
        tools
            .as_object()
            .into_iter()
            .flat_map(|groups| groups.values())
            .filter_map(|names| names.as_array())
            .flatten()
            .filter_map(|name| name.as_str().map(str::to_string))
            .collect()
    }

    #[test]
    fn test_server_creation() {
        let server = OutlineMcpServer::new(config(FeatureFlags::default()))
            .expect("Failed to create server");
        assert_eq!(server.config().api_url, "http://127.0.0.1:9/api");
        assert_eq!(server.config().size_policy, SizePolicy::default());
    }

    #[test]
    fn test_all_tools_listed_by_default() {
        let server = server_with(StaticOutlineApi::new(), FeatureFlags::default());
        let names = tool_names(&server.enabled_tool_groups());
        assert!(names.contains(&"delete_document".to_string()));
        assert!(names.contains(&"ask_ai_about_documents".to_string()));
        assert!(names.contains(&"read_document_section".to_string()));
        assert!(names.contains(&"read_collection_resource".to_string()));
        assert_eq!(names.len(), 21);
    }

    #[test]
    fn test_disabled_tools_hidden_from_context() {
        let features = FeatureFlags {
            delete_enabled: false,
            ai_tools_enabled: false,
        };
        let server = server_with(StaticOutlineApi::new(), features);
        let tools = server.enabled_tool_groups();
        let names = tool_names(&tools);

        assert!(!names.contains(&"delete_document".to_string()));
        assert!(!names.contains(&"ask_ai_about_documents".to_string()));
        assert!(tools.get("ai").is_none());
        assert!(names.contains(&"archive_document".to_string()));
    }

    #[tokio::test]
    async fn test_read_resource_dispatches_by_uri() {
        let api = StaticOutlineApi::new().with_data(
            "collections.documents",
            json!([{"id": "d1", "title": "Welcome"}]),
        );
        let server = server_with(api, FeatureFlags::default());

        let text = server.render_resource("outline://collection/c1/tree").await;
        assert_eq!(text, "# Document Tree\n\n- Welcome (d1)\n");
    }

    #[tokio::test]
    async fn test_read_resource_rejects_unknown_uri() {
        let api = StaticOutlineApi::new();
        let server = server_with(api, FeatureFlags::default());
        let text = server.render_resource("outline://collection/c1/other").await;
        assert_eq!(
            text,
            "Error: Unknown resource URI: outline://collection/c1/other"
        );
    }

    #[test]
    fn test_missing_api_key_rejected() {
        let result = OutlineConfig::builder("").build();
        assert!(result.is_err());
    }
}
