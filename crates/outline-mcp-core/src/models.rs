//! Core data models representing Outline entities.
//!
//! The Outline API returns loosely shaped JSON. Each entity kind is mapped
//! into a fixed shape exactly once, through its `From<&Value>` impl, which
//! never fails and fills in defaults for anything missing or mistyped.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Title used when the API omits one
pub const DEFAULT_TITLE: &str = "Untitled";

/// Author used when a comment has no creator
pub const DEFAULT_AUTHOR: &str = "Unknown User";

/// A markdown heading found while scanning a document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Heading {
    /// Number of leading `#` markers
    pub level: u8,
    /// Trimmed heading text
    pub text: String,
    /// 1-based line number
    pub line: usize,
}

impl Heading {
    pub fn new(level: u8, text: impl Into<String>, line: usize) -> Self {
        Self {
            level,
            text: text.into(),
            line,
        }
    }
}

/// Outcome of looking up a section by heading
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionLookup {
    /// Heading exists; holds the trimmed body (or the empty-section placeholder)
    Found(String),
    /// No heading with that text anywhere in the document
    NotFound,
}

impl SectionLookup {
    pub fn is_found(&self) -> bool {
        matches!(self, SectionLookup::Found(_))
    }

    /// Borrow the section body if found
    pub fn content(&self) -> Option<&str> {
        match self {
            SectionLookup::Found(content) => Some(content),
            SectionLookup::NotFound => None,
        }
    }
}

fn str_field(value: &Value, key: &str) -> Option<String> {
    value
        .get(key)
        .and_then(Value::as_str)
        .map(str::to_string)
}

fn str_or(value: &Value, key: &str, default: &str) -> String {
    str_field(value, key).unwrap_or_else(|| default.to_string())
}

/// An Outline document (or document summary in list responses)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub title: String,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_document_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl From<&Value> for Document {
    fn from(value: &Value) -> Self {
        Self {
            id: str_or(value, "id", ""),
            title: str_or(value, "title", DEFAULT_TITLE),
            text: str_or(value, "text", ""),
            collection_id: str_field(value, "collectionId"),
            parent_document_id: str_field(value, "parentDocumentId"),
            updated_at: str_field(value, "updatedAt").filter(|s| !s.is_empty()),
            deleted_at: str_field(value, "deletedAt").filter(|s| !s.is_empty()),
            url: str_field(value, "url"),
        }
    }
}

/// An Outline collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Collection {
    pub id: String,
    pub name: String,
    pub description: String,
    pub color: String,
    pub document_count: u64,
}

impl From<&Value> for Collection {
    fn from(value: &Value) -> Self {
        // `documents` is a count on collections.list but may be an array elsewhere
        let document_count = match value.get("documents") {
            Some(Value::Number(n)) => n.as_u64().unwrap_or(0),
            Some(Value::Array(items)) => items.len() as u64,
            _ => 0,
        };
        Self {
            id: str_or(value, "id", ""),
            name: str_or(value, "name", DEFAULT_TITLE),
            description: str_or(value, "description", ""),
            color: str_or(value, "color", ""),
            document_count,
        }
    }
}

/// One node in a collection's navigation tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentNode {
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub children: Vec<DocumentNode>,
}

impl DocumentNode {
    /// Total nodes in this subtree, including self
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(DocumentNode::node_count).sum::<usize>()
    }
}

impl From<&Value> for DocumentNode {
    fn from(value: &Value) -> Self {
        Self {
            id: str_or(value, "id", ""),
            title: str_or(value, "title", DEFAULT_TITLE),
            children: value
                .get("children")
                .and_then(Value::as_array)
                .map(|nodes| nodes.iter().map(DocumentNode::from).collect())
                .unwrap_or_default(),
        }
    }
}

/// A comment on a document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: String,
    pub text: String,
    pub author: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl From<&Value> for Comment {
    fn from(value: &Value) -> Self {
        let author = value
            .get("createdBy")
            .map(|user| str_or(user, "name", DEFAULT_AUTHOR))
            .unwrap_or_else(|| DEFAULT_AUTHOR.to_string());
        Self {
            id: str_or(value, "id", ""),
            text: str_or(value, "text", ""),
            author,
            created_at: str_field(value, "createdAt").filter(|s| !s.is_empty()),
        }
    }
}

/// A single full-text search result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchHit {
    pub document: Document,
    pub context: String,
}

impl From<&Value> for SearchHit {
    fn from(value: &Value) -> Self {
        let null = Value::Null;
        Self {
            document: Document::from(value.get("document").unwrap_or(&null)),
            context: str_or(value, "context", ""),
        }
    }
}

/// Response of `documents.answerQuestion`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AiAnswer {
    /// False when the workspace has AI answers disabled (no `search` key)
    pub available: bool,
    pub answer: String,
    pub sources: Vec<Document>,
}

impl From<&Value> for AiAnswer {
    fn from(value: &Value) -> Self {
        let search = value.get("search");
        Self {
            available: search.is_some(),
            answer: search
                .map(|s| str_or(s, "answer", ""))
                .unwrap_or_default(),
            sources: list_of(value.get("documents")),
        }
    }
}

/// Map an optional JSON array into entities, treating anything else as empty
pub fn list_of<T>(value: Option<&Value>) -> Vec<T>
where
    T: for<'a> From<&'a Value>,
{
    value
        .and_then(Value::as_array)
        .map(|items| items.iter().map(T::from).collect())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_document_defaults() {
        let doc = Document::from(&json!({}));
        assert_eq!(doc.title, DEFAULT_TITLE);
        assert_eq!(doc.text, "");
        assert_eq!(doc.id, "");
        assert!(doc.updated_at.is_none());
    }

    #[test]
    fn test_document_null_title_defaults() {
        let doc = Document::from(&json!({"id": "d1", "title": null, "text": "body"}));
        assert_eq!(doc.title, DEFAULT_TITLE);
        assert_eq!(doc.text, "body");
    }

    #[test]
    fn test_document_fields() {
        let doc = Document::from(&json!({
            "id": "doc123",
            "title": "Test Document",
            "text": "content",
            "collectionId": "col1",
            "updatedAt": "2023-01-01T12:00:00Z"
        }));
        assert_eq!(doc.id, "doc123");
        assert_eq!(doc.collection_id.as_deref(), Some("col1"));
        assert_eq!(doc.updated_at.as_deref(), Some("2023-01-01T12:00:00Z"));
    }

    #[test]
    fn test_collection_document_count() {
        let c = Collection::from(&json!({"id": "c", "name": "Eng", "documents": 7}));
        assert_eq!(c.document_count, 7);
        let c = Collection::from(&json!({"id": "c", "documents": [{}, {}]}));
        assert_eq!(c.document_count, 2);
        assert_eq!(c.name, DEFAULT_TITLE);
    }

    #[test]
    fn test_document_node_tree() {
        let node = DocumentNode::from(&json!({
            "id": "root",
            "title": "Root",
            "children": [
                {"id": "a", "title": "A", "children": [{"id": "a1"}]},
                {"id": "b", "title": "B"}
            ]
        }));
        assert_eq!(node.children.len(), 2);
        assert_eq!(node.children[0].children[0].title, DEFAULT_TITLE);
        assert_eq!(node.node_count(), 4);
    }

    #[test]
    fn test_comment_author_default() {
        let c = Comment::from(&json!({"id": "c1", "text": "hi"}));
        assert_eq!(c.author, DEFAULT_AUTHOR);
        let c = Comment::from(&json!({"id": "c1", "createdBy": {"name": "Ada"}}));
        assert_eq!(c.author, "Ada");
    }

    #[test]
    fn test_ai_answer_availability() {
        let a = AiAnswer::from(&json!({"documents": []}));
        assert!(!a.available);
        let a = AiAnswer::from(&json!({"search": {"answer": "42"}, "documents": [{"id": "d", "title": "T"}]}));
        assert!(a.available);
        assert_eq!(a.answer, "42");
        assert_eq!(a.sources[0].title, "T");
    }

    #[test]
    fn test_list_of_non_array() {
        let docs: Vec<Document> = list_of(Some(&json!({"not": "array"})));
        assert!(docs.is_empty());
        let docs: Vec<Document> = list_of(None);
        assert!(docs.is_empty());
    }

    #[test]
    fn test_section_lookup() {
        let found = SectionLookup::Found("body".into());
        assert!(found.is_found());
        assert_eq!(found.content(), Some("body"));
        assert_eq!(SectionLookup::NotFound.content(), None);
    }
}
