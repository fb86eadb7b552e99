//! Heading parser for the table-of-contents view: # H1 through #### H4.

use super::is_fence;
use lazy_static::lazy_static;
use outline_mcp_core::Heading;
use regex::Regex;

lazy_static! {
    /// Matches # Heading through #### Heading. Deeper levels are left out of the outline.
    static ref OUTLINE_HEADING_PATTERN: Regex = Regex::new(r"^(#{1,4})\s+(.+)$").unwrap();
}

/// Parse outline headings from markdown, skipping anything inside fenced code blocks.
///
/// Fence delimiter lines toggle the fence state and are never headings
/// themselves. Line numbers are 1-based.
pub fn extract_headings(markdown: &str) -> Vec<Heading> {
    let mut headings = Vec::new();
    let mut in_fence = false;

    for (idx, line) in markdown.split('\n').enumerate() {
        let trimmed = line.trim();

        if is_fence(trimmed) {
            in_fence = !in_fence;
            continue;
        }
        if in_fence {
            continue;
        }

        if let Some(caps) = OUTLINE_HEADING_PATTERN.captures(trimmed) {
            let level = caps[1].len() as u8;
            let text = caps[2].trim();
            if !text.is_empty() {
                headings.push(Heading::new(level, text, idx + 1));
            }
        }
    }

    headings
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_h1_heading() {
        let headings = extract_headings("# Main Title");
        assert_eq!(headings.len(), 1);
        assert_eq!(headings[0].level, 1);
        assert_eq!(headings[0].text, "Main Title");
        assert_eq!(headings[0].line, 1);
    }

    #[test]
    fn test_multiple_headings() {
        let headings = extract_headings("# H1\n## H2\n### H3\n## H2-2");
        assert_eq!(headings.len(), 4);
        assert_eq!(headings[0].level, 1);
        assert_eq!(headings[1].level, 2);
        assert_eq!(headings[2].level, 3);
        assert_eq!(headings[3].line, 4);
    }

    #[test]
    fn test_levels_five_and_six_excluded() {
        let content = "# One\n#### Four\n##### Five\n###### Six";
        let headings = extract_headings(content);
        let texts: Vec<_> = headings.iter().map(|h| h.text.as_str()).collect();
        assert_eq!(texts, vec!["One", "Four"]);
    }

    #[test]
    fn test_heading_in_code_fence_ignored() {
        let content = "# Code Examples\n\nHere is some code:\n\n```python\n# This is not a heading\ndef hello():\n    print(\"Hello\")\n```\n\n## Real Heading\n\nThis is a real section.\n";
        let headings = extract_headings(content);
        let texts: Vec<_> = headings.iter().map(|h| h.text.as_str()).collect();
        assert_eq!(texts, vec!["Code Examples", "Real Heading"]);
        assert_eq!(headings[1].line, 11);
    }

    #[test]
    fn test_unclosed_fence_hides_rest() {
        let content = "# Before\n```\n# Inside\n## Also inside";
        let headings = extract_headings(content);
        assert_eq!(headings.len(), 1);
        assert_eq!(headings[0].text, "Before");
    }

    #[test]
    fn test_indented_fence_toggles() {
        let content = "  ```rust\n# hidden\n  ```\n# shown";
        let headings = extract_headings(content);
        assert_eq!(headings.len(), 1);
        assert_eq!(headings[0].text, "shown");
    }

    #[test]
    fn test_requires_space_after_markers() {
        let headings = extract_headings("#hashtag\n#\n##   \n# ok");
        assert_eq!(headings.len(), 1);
        assert_eq!(headings[0].text, "ok");
    }

    #[test]
    fn test_heading_text_trimmed() {
        let headings = extract_headings("##   Spaced out   ");
        assert_eq!(headings[0].text, "Spaced out");
        assert_eq!(headings[0].level, 2);
    }

    #[test]
    fn test_empty_input() {
        assert!(extract_headings("").is_empty());
    }

    #[test]
    fn test_repeated_calls_are_independent() {
        let unclosed = "```\n# hidden";
        assert!(extract_headings(unclosed).is_empty());
        // fence state from the previous call must not leak
        assert_eq!(extract_headings("# visible").len(), 1);
    }
}
