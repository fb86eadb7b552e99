//! The remote API contract.
//!
//! Outline exposes an RPC-style API: every call is a `POST` to
//! `{base}/{endpoint}` with a JSON body, and successful responses wrap their
//! payload in a `data` key. Implementors supply [`OutlineApi::post`]; every
//! other method is built on it.

use async_trait::async_trait;
use outline_mcp_core::Result;
use serde_json::{Map, Value, json};

/// Default page size for `documents.search`
pub const DEFAULT_SEARCH_LIMIT: usize = 10;
/// Default page size for collection and document listings
pub const DEFAULT_LIST_LIMIT: usize = 20;
/// Default page size for the trash listing
pub const DEFAULT_TRASH_LIMIT: usize = 25;

/// Pull `data` out of a response envelope, or `fallback` if absent
pub fn data_or(mut response: Value, fallback: Value) -> Value {
    match response.get_mut("data").map(Value::take) {
        Some(Value::Null) | None => fallback,
        Some(data) => data,
    }
}

fn object_data(response: Value) -> Value {
    data_or(response, Value::Object(Map::new()))
}

fn array_data(response: Value) -> Value {
    data_or(response, Value::Array(Vec::new()))
}

/// Operations the server needs from an Outline workspace.
#[async_trait]
pub trait OutlineApi: Send + Sync {
    /// Raw call: POST `payload` to `endpoint` and return the decoded body
    async fn post(&self, endpoint: &str, payload: Value) -> Result<Value>;

    /// Current user and team
    async fn auth_info(&self) -> Result<Value> {
        Ok(object_data(self.post("auth.info", json!({})).await?))
    }

    async fn get_document(&self, document_id: &str) -> Result<Value> {
        Ok(object_data(
            self.post("documents.info", json!({ "id": document_id }))
                .await?,
        ))
    }

    /// Full-text search, optionally scoped to a collection
    async fn search_documents(
        &self,
        query: &str,
        collection_id: Option<&str>,
        limit: usize,
    ) -> Result<Value> {
        let mut payload = json!({ "query": query, "limit": limit });
        if let Some(id) = collection_id.filter(|s| !s.is_empty()) {
            payload["collectionId"] = json!(id);
        }
        Ok(array_data(self.post("documents.search", payload).await?))
    }

    async fn list_collections(&self, limit: usize) -> Result<Value> {
        Ok(array_data(
            self.post("collections.list", json!({ "limit": limit }))
                .await?,
        ))
    }

    /// Navigation tree of a collection
    async fn get_collection_documents(&self, collection_id: &str) -> Result<Value> {
        Ok(array_data(
            self.post("collections.documents", json!({ "id": collection_id }))
                .await?,
        ))
    }

    async fn list_documents(&self, collection_id: Option<&str>, limit: usize) -> Result<Value> {
        let mut payload = json!({ "limit": limit });
        if let Some(id) = collection_id.filter(|s| !s.is_empty()) {
            payload["collectionId"] = json!(id);
        }
        Ok(array_data(self.post("documents.list", payload).await?))
    }

    async fn archive_document(&self, document_id: &str) -> Result<Value> {
        Ok(object_data(
            self.post("documents.archive", json!({ "id": document_id }))
                .await?,
        ))
    }

    async fn unarchive_document(&self, document_id: &str) -> Result<Value> {
        Ok(object_data(
            self.post("documents.unarchive", json!({ "id": document_id }))
                .await?,
        ))
    }

    async fn list_trash(&self, limit: usize) -> Result<Value> {
        Ok(array_data(
            self.post("documents.list", json!({ "limit": limit, "deleted": true }))
                .await?,
        ))
    }

    async fn restore_document(&self, document_id: &str) -> Result<Value> {
        Ok(object_data(
            self.post("documents.restore", json!({ "id": document_id }))
                .await?,
        ))
    }

    /// Delete bypassing the trash. Returns the API's `success` flag.
    async fn permanently_delete_document(&self, document_id: &str) -> Result<bool> {
        let response = self
            .post(
                "documents.delete",
                json!({ "id": document_id, "permanent": true }),
            )
            .await?;
        Ok(response
            .get("success")
            .and_then(Value::as_bool)
            .unwrap_or(false))
    }

    /// Natural-language question over workspace content.
    ///
    /// Returns the whole body: the answer lives under `search`, sources
    /// under `documents`.
    async fn answer_question(
        &self,
        query: &str,
        collection_id: Option<&str>,
        document_id: Option<&str>,
    ) -> Result<Value> {
        let mut payload = json!({ "query": query });
        if let Some(id) = collection_id.filter(|s| !s.is_empty()) {
            payload["collectionId"] = json!(id);
        }
        if let Some(id) = document_id.filter(|s| !s.is_empty()) {
            payload["documentId"] = json!(id);
        }
        self.post("documents.answerQuestion", payload).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_or_unwraps() {
        let data = data_or(json!({"data": {"id": "d1"}}), json!({}));
        assert_eq!(data, json!({"id": "d1"}));
    }

    #[test]
    fn test_data_or_fallback() {
        assert_eq!(data_or(json!({"ok": true}), json!([])), json!([]));
        assert_eq!(data_or(json!({"data": null}), json!({})), json!({}));
        assert_eq!(data_or(json!("not an object"), json!([])), json!([]));
    }

    #[tokio::test]
    async fn test_empty_scope_ids_are_omitted() {
        let api = crate::testing::StaticOutlineApi::new();
        api.search_documents("q", Some(""), 5).await.unwrap();
        api.list_documents(Some(""), 5).await.unwrap();
        api.answer_question("why?", Some(""), Some("")).await.unwrap();

        assert_eq!(
            api.calls_to("documents.search")[0].payload,
            json!({"query": "q", "limit": 5})
        );
        let listed = &api.calls_to("documents.list")[0].payload;
        assert!(listed.get("collectionId").is_none());
        assert_eq!(
            api.calls_to("documents.answerQuestion")[0].payload,
            json!({"query": "why?"})
        );
    }
}
