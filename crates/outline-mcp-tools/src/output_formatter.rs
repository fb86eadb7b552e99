//! Human-readable text for tool and resource responses.
//!
//! Tools hand these strings to the model as the primary content, so each
//! format keeps identifiers (`ID: ...`) on their own lines where a follow-up
//! tool call will need them.

use outline_mcp_core::{AiAnswer, Collection, Comment, Document, DocumentNode, SearchHit};

/// Formatter for Outline entities
pub struct TextFormatter;

impl TextFormatter {
    /// Full document: title heading then body
    pub fn document(document: &Document) -> String {
        format!("# {}\n\n{}\n", document.title, document.text)
    }

    pub fn search_results(hits: &[SearchHit]) -> String {
        if hits.is_empty() {
            return "No documents found matching your search.".to_string();
        }

        let mut output = String::from("# Search Results\n\n");
        for (i, hit) in hits.iter().enumerate() {
            let doc = &hit.document;
            output.push_str(&format!("## {}. {}\n", i + 1, doc.title));
            output.push_str(&format!("ID: {}\n", doc.id));
            if let Some(updated) = &doc.updated_at {
                output.push_str(&format!("Updated: {}\n", updated));
            }
            if !hit.context.is_empty() {
                output.push_str(&format!("Context: {}\n", hit.context));
            }
            output.push('\n');
        }
        output
    }

    /// Numbered document list under a `# {heading}` title
    pub fn documents_list(documents: &[Document], heading: &str) -> String {
        if documents.is_empty() {
            return "No documents found.".to_string();
        }

        let mut output = format!("# {}\n\n", heading);
        for (i, doc) in documents.iter().enumerate() {
            output.push_str(&format!("## {}. {}\n", i + 1, doc.title));
            output.push_str(&format!("ID: {}\n", doc.id));
            if let Some(updated) = &doc.updated_at {
                output.push_str(&format!("Last Updated: {}\n", updated));
            }
            output.push('\n');
        }
        output
    }

    pub fn collections(collections: &[Collection]) -> String {
        if collections.is_empty() {
            return "No collections found.".to_string();
        }

        let mut output = String::from("# Collections\n\n");
        for (i, collection) in collections.iter().enumerate() {
            output.push_str(&format!("## {}. {}\n", i + 1, collection.name));
            output.push_str(&format!("ID: {}\n", collection.id));
            if !collection.description.is_empty() {
                output.push_str(&format!("Description: {}\n", collection.description));
            }
            output.push_str(&format!("Documents: {}\n\n", collection.document_count));
        }
        output
    }

    /// Indented `- {title} ({id})` lines, two spaces per depth
    pub fn document_tree(nodes: &[DocumentNode]) -> String {
        let mut output = String::new();
        Self::push_tree(&mut output, nodes, 0);
        output
    }

    fn push_tree(output: &mut String, nodes: &[DocumentNode], depth: usize) {
        for node in nodes {
            output.push_str(&format!("{}- {} ({})\n", "  ".repeat(depth), node.title, node.id));
            Self::push_tree(output, &node.children, depth + 1);
        }
    }

    pub fn collection_structure(nodes: &[DocumentNode]) -> String {
        if nodes.is_empty() {
            return "No documents found in this collection.".to_string();
        }
        format!("# Collection Structure\n\n{}", Self::document_tree(nodes))
    }

    pub fn comments(comments: &[Comment]) -> String {
        if comments.is_empty() {
            return "No comments found for this document.".to_string();
        }

        let mut output = String::from("# Document Comments\n\n");
        for (i, comment) in comments.iter().enumerate() {
            output.push_str(&format!("## {}. Comment by {}\n", i + 1, comment.author));
            output.push_str(&format!("ID: {}\n", comment.id));
            if let Some(date) = &comment.created_at {
                output.push_str(&format!("Date: {}\n", date));
            }
            output.push_str(&format!("\n{}\n\n", comment.text));
        }
        output
    }

    pub fn comment(comment: &Comment) -> String {
        let mut output = format!("# Comment by {}\n", comment.author);
        if let Some(date) = &comment.created_at {
            output.push_str(&format!("Date: {}\n\n", date));
        }
        output.push_str(&format!("{}\n", comment.text));
        output
    }

    pub fn backlinks(documents: &[Document]) -> String {
        if documents.is_empty() {
            return "No documents link to this document.".to_string();
        }
        Self::documents_list(documents, "Documents Linking to This Document")
    }

    pub fn ai_answer(answer: &AiAnswer) -> String {
        if !answer.available {
            return "AI answering is not enabled for this workspace or no relevant information was found."
                .to_string();
        }
        if answer.answer.is_empty() {
            return "No answer was found for your question.".to_string();
        }

        let mut output = format!("# AI Answer\n\n{}\n\n", answer.answer);
        if !answer.sources.is_empty() {
            output.push_str("## Sources\n\n");
            for (i, doc) in answer.sources.iter().enumerate() {
                output.push_str(&format!("{}. {} (ID: {})\n", i + 1, doc.title, doc.id));
            }
        }
        output
    }

    pub fn collection_metadata(collection: &Collection) -> String {
        let mut output = format!("# {}\n\n", collection.name);
        if !collection.description.is_empty() {
            output.push_str(&format!("{}\n\n", collection.description));
        }
        output.push_str(&format!("**Documents**: {}\n", collection.document_count));
        if !collection.color.is_empty() {
            output.push_str(&format!("**Color**: {}\n", collection.color));
        }
        output
    }

    /// Bulleted document list for resource views
    pub fn document_bullets(documents: &[Document]) -> String {
        if documents.is_empty() {
            return "No documents in this collection.\n".to_string();
        }

        let mut output = String::from("# Documents\n\n");
        for doc in documents {
            output.push_str(&format!("- **{}** (`{}`)\n", doc.title, doc.id));
            if let Some(updated) = &doc.updated_at {
                output.push_str(&format!("  - Last updated: {}\n", updated));
            }
        }
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_comments_format() {
        let comments = vec![
            Comment::from(&json!({
                "id": "c1",
                "text": "Looks good",
                "createdBy": {"name": "Ada"},
                "createdAt": "2024-05-01"
            })),
            Comment::from(&json!({"id": "c2", "text": "?"})),
        ];
        insta::assert_snapshot!(TextFormatter::comments(&comments), @r"
# Document Comments

## 1. Comment by Ada
ID: c1
Date: 2024-05-01

Looks good

## 2. Comment by Unknown User
ID: c2

?

");
    }

    #[test]
    fn test_document_tree_nesting() {
        let nodes = vec![DocumentNode::from(&json!({
            "id": "a",
            "title": "Root",
            "children": [{"id": "b", "title": "Child", "children": [{"id": "c"}]}]
        }))];
        assert_eq!(
            TextFormatter::document_tree(&nodes),
            "- Root (a)\n  - Child (b)\n    - Untitled (c)\n"
        );
    }

    #[test]
    fn test_ai_answer_states() {
        let unavailable = AiAnswer::from(&json!({"documents": []}));
        assert!(TextFormatter::ai_answer(&unavailable).starts_with("AI answering is not enabled"));

        let empty = AiAnswer::from(&json!({"search": {"answer": ""}}));
        assert_eq!(
            TextFormatter::ai_answer(&empty),
            "No answer was found for your question."
        );

        let answered = AiAnswer::from(&json!({
            "search": {"answer": "Deploy on Fridays"},
            "documents": [{"id": "d1", "title": "Runbook"}]
        }));
        assert_eq!(
            TextFormatter::ai_answer(&answered),
            "# AI Answer\n\nDeploy on Fridays\n\n## Sources\n\n1. Runbook (ID: d1)\n"
        );
    }

    #[test]
    fn test_collection_metadata() {
        let collection = Collection::from(&json!({
            "id": "col", "name": "Eng", "description": "Engineering", "color": "#fff", "documents": 4
        }));
        assert_eq!(
            TextFormatter::collection_metadata(&collection),
            "# Eng\n\nEngineering\n\n**Documents**: 4\n**Color**: #fff\n"
        );
    }

    #[test]
    fn test_empty_lists() {
        assert_eq!(TextFormatter::search_results(&[]), "No documents found matching your search.");
        assert_eq!(TextFormatter::backlinks(&[]), "No documents link to this document.");
        assert_eq!(TextFormatter::document_bullets(&[]), "No documents in this collection.\n");
    }
}
