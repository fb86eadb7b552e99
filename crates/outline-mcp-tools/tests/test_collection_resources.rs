//! Collection resource views

use outline_mcp_client::StaticOutlineApi;
use outline_mcp_tools::{CollectionResources, FeatureFlags, ResourceUri, SizePolicy, ToolContext};
use serde_json::json;
use std::sync::Arc;

fn resources(api: StaticOutlineApi) -> (Arc<StaticOutlineApi>, CollectionResources) {
    let api = Arc::new(api);
    let ctx = ToolContext::new(api.clone(), SizePolicy::default(), FeatureFlags::default());
    (api, CollectionResources::new(ctx))
}

fn uri(s: &str) -> ResourceUri {
    ResourceUri::parse(s).unwrap()
}

#[tokio::test]
async fn test_collection_metadata() {
    let (_, res) = resources(StaticOutlineApi::new().with_data(
        "collections.list",
        json!([
            {"id": "other", "name": "Other"},
            {"id": "c1", "name": "Handbook", "description": "Company handbook", "color": "#4E5C6E", "documents": 12}
        ]),
    ));
    let text = res.read(&uri("outline://collection/c1")).await;
    assert_eq!(
        text,
        "# Handbook\n\nCompany handbook\n\n**Documents**: 12\n**Color**: #4E5C6E\n"
    );
}

#[tokio::test]
async fn test_collection_metadata_not_found() {
    let (_, res) = resources(StaticOutlineApi::new().with_data("collections.list", json!([])));
    let text = res.read(&uri("outline://collection/nope")).await;
    assert_eq!(text, "Error: Collection nope not found");
}

#[tokio::test]
async fn test_collection_tree() {
    let (api, res) = resources(StaticOutlineApi::new().with_data(
        "collections.documents",
        json!([
            {"id": "d1", "title": "Getting Started", "children": [
                {"id": "d2", "title": "Install", "children": []}
            ]},
            {"id": "d3", "title": "FAQ"}
        ]),
    ));
    let text = res.read(&uri("outline://collection/c1/tree")).await;
    assert_eq!(
        text,
        "# Document Tree\n\n- Getting Started (d1)\n  - Install (d2)\n- FAQ (d3)\n"
    );
    assert_eq!(
        api.calls_to("collections.documents")[0].payload,
        json!({"id": "c1"})
    );
}

#[tokio::test]
async fn test_empty_collection_tree() {
    let (_, res) = resources(StaticOutlineApi::new().with_data("collections.documents", json!([])));
    let text = res.read(&uri("outline://collection/c1/tree")).await;
    assert_eq!(text, "No documents in this collection.\n");
}

#[tokio::test]
async fn test_collection_documents_uses_scoped_search() {
    let (api, res) = resources(StaticOutlineApi::new().with_data(
        "documents.search",
        json!([{"document": {"id": "d1", "title": "Policy", "updatedAt": "2024-02-02"}}]),
    ));
    let text = res.read(&uri("outline://collection/c1/documents")).await;
    assert_eq!(
        text,
        "# Documents\n\n- **Policy** (`d1`)\n  - Last updated: 2024-02-02\n"
    );
    let payload = &api.calls_to("documents.search")[0].payload;
    assert_eq!(payload["query"], "");
    assert_eq!(payload["collectionId"], "c1");
}

#[tokio::test]
async fn test_resource_errors_are_text() {
    let (_, res) = resources(
        StaticOutlineApi::new()
            .with_client_error("collections.list", "API request failed: 401")
            .with_unexpected_error("collections.documents", "tree was not a list"),
    );
    assert_eq!(
        res.read(&uri("outline://collection/c1")).await,
        "Outline client error: API request failed: 401"
    );
    assert_eq!(
        res.read(&uri("outline://collection/c1/tree")).await,
        "Error: Invalid API response: tree was not a list"
    );
}
