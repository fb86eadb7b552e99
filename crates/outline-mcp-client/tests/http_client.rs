//! OutlineClient against a local mock server

use outline_mcp_client::{OutlineApi, OutlineClient};
use outline_mcp_core::OutlineConfig;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> OutlineClient {
    let config = OutlineConfig::builder("test-token")
        .api_url(format!("{}/api", server.uri()))
        .request_timeout_secs(5)
        .build()
        .unwrap();
    OutlineClient::new(&config).unwrap()
}

#[tokio::test]
async fn test_post_sends_bearer_and_json() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/documents.info"))
        .and(header("authorization", "Bearer test-token"))
        .and(header("accept", "application/json"))
        .and(body_json(json!({"id": "doc-1"})))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"data": {"id": "doc-1", "title": "Hello"}})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let doc = client.get_document("doc-1").await.unwrap();
    assert_eq!(doc["title"], "Hello");
}

#[tokio::test]
async fn test_search_scopes_to_collection() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/documents.search"))
        .and(body_json(
            json!({"query": "deploy", "limit": 10, "collectionId": "col-1"}),
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": [
            {"context": "how to deploy", "document": {"id": "d1", "title": "Ops"}}
        ]})))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let hits = client
        .search_documents("deploy", Some("col-1"), 10)
        .await
        .unwrap();
    assert_eq!(hits.as_array().map(Vec::len), Some(1));
}

#[tokio::test]
async fn test_http_error_is_client_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/documents.info"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.get_document("doc-1").await.unwrap_err();
    assert!(err.is_client());
    assert!(err.to_string().starts_with("API request failed:"));
    assert!(err.to_string().contains("401"));
}

#[tokio::test]
async fn test_undecodable_body_is_client_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/collections.list"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.list_collections(20).await.unwrap_err();
    assert!(err.is_client());
}

#[tokio::test]
async fn test_permanent_delete_reads_success_flag() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/documents.delete"))
        .and(body_json(json!({"id": "doc-9", "permanent": true})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
        .mount(&server)
        .await;

    let client = client_for(&server);
    assert!(client.permanently_delete_document("doc-9").await.unwrap());
}

#[tokio::test]
async fn test_answer_question_returns_whole_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/documents.answerQuestion"))
        .and(body_json(json!({"query": "why?", "documentId": "d1"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "search": {"answer": "because"},
            "documents": []
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let body = client.answer_question("why?", None, Some("d1")).await.unwrap();
    assert_eq!(body["search"]["answer"], "because");
}

#[tokio::test]
async fn test_unreachable_server_is_client_error() {
    let config = OutlineConfig::builder("t")
        .api_url("http://127.0.0.1:9/api")
        .request_timeout_secs(2)
        .build()
        .unwrap();
    let client = OutlineClient::new(&config).unwrap();
    let err = client.auth_info().await.unwrap_err();
    assert!(err.is_client());
}
