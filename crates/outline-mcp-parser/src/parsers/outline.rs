//! Table-of-contents rendering for the outline view.

use outline_mcp_core::{Heading, format_thousands};

/// Approximate word count: whitespace-separated runs
pub fn word_count(markdown: &str) -> usize {
    markdown.split_whitespace().count()
}

/// Render a document's headings as an indented table of contents.
///
/// Indentation is two spaces per level below H1.
pub fn render_outline(title: &str, headings: &[Heading], word_count: usize) -> String {
    let mut output = format!("# {}\n\n", title);
    output.push_str(&format!("Word count: ~{}\n\n", format_thousands(word_count)));
    output.push_str("## Table of Contents\n\n");

    if headings.is_empty() {
        output.push_str("_No headings found in document._\n");
        return output;
    }

    for heading in headings {
        let indent = "  ".repeat(usize::from(heading.level.saturating_sub(1)));
        output.push_str(&format!("{}- {}\n", indent, heading.text));
    }

    output
}
