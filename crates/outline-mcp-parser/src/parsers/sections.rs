//! Section extraction: the body under a heading, up to the next heading of the
//! same or shallower level.

use super::is_fence;
use lazy_static::lazy_static;
use outline_mcp_core::SectionLookup;
use regex::Regex;

lazy_static! {
    /// Sections may start at any ATX level, # through ######.
    static ref SECTION_HEADING_PATTERN: Regex = Regex::new(r"^(#{1,6})\s+(.+)$").unwrap();
}

/// Placeholder returned when a heading exists but has nothing under it
pub const EMPTY_SECTION: &str = "Section has no content.";

/// Extract the content under `heading` (case-insensitive, trimmed match).
///
/// Deeper subheadings are part of the section. Fenced code is copied
/// verbatim, fence lines included. Returns [`SectionLookup::NotFound`] when
/// no heading matches.
pub fn extract_section(markdown: &str, heading: &str) -> SectionLookup {
    let needle = heading.trim().to_lowercase();
    let mut in_fence = false;
    let mut start_level: Option<usize> = None;
    let mut section_lines: Vec<&str> = Vec::new();

    for line in markdown.split('\n') {
        let trimmed = line.trim();

        if is_fence(trimmed) {
            in_fence = !in_fence;
            if start_level.is_some() {
                section_lines.push(line);
            }
            continue;
        }

        if in_fence {
            if start_level.is_some() {
                section_lines.push(line);
            }
            continue;
        }

        match (SECTION_HEADING_PATTERN.captures(trimmed), start_level) {
            (Some(caps), Some(level)) => {
                if caps[1].len() <= level {
                    break;
                }
                section_lines.push(line);
            }
            (Some(caps), None) => {
                if caps[2].trim().to_lowercase() == needle {
                    start_level = Some(caps[1].len());
                }
            }
            (None, Some(_)) => section_lines.push(line),
            (None, None) => {}
        }
    }

    if start_level.is_none() {
        return SectionLookup::NotFound;
    }

    let joined = section_lines.join("\n");
    let content = joined.trim();
    if content.is_empty() {
        SectionLookup::Found(EMPTY_SECTION.to_string())
    } else {
        SectionLookup::Found(content.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract_headings;

    fn found(s: &str) -> SectionLookup {
        SectionLookup::Found(s.to_string())
    }

    #[test]
    fn test_stops_at_same_level() {
        let md = "# A\ntext\n## B\nmore\n## C\nend";
        assert_eq!(extract_section(md, "B"), found("more"));
    }

    #[test]
    fn test_includes_deeper_levels() {
        let md = "## Setup\nintro\n### Install\nsteps\n#### Notes\nfine\n## Next\nskip";
        assert_eq!(
            extract_section(md, "Setup"),
            found("intro\n### Install\nsteps\n#### Notes\nfine")
        );
    }

    #[test]
    fn test_stops_at_shallower_level() {
        let md = "# Top\n### Deep\nbody\n## Mid\nafter";
        assert_eq!(extract_section(md, "Deep"), found("body"));
    }

    #[test]
    fn test_case_insensitive_match() {
        let md = "# Getting Started\nhello";
        assert_eq!(extract_section(md, "getting STARTED"), found("hello"));
        assert_eq!(extract_section(md, "  Getting Started  "), found("hello"));
    }

    #[test]
    fn test_not_found() {
        let md = "# One\nbody";
        assert_eq!(extract_section(md, "Two"), SectionLookup::NotFound);
        assert_eq!(extract_section("", "One"), SectionLookup::NotFound);
    }

    #[test]
    fn test_empty_section_placeholder() {
        let md = "# Doc\n## Empty Section\n\n   \n## Next\ncontent";
        assert_eq!(extract_section(md, "Empty Section"), found(EMPTY_SECTION));
    }

    #[test]
    fn test_empty_section_at_end_of_document() {
        assert_eq!(extract_section("# Last", "Last"), found(EMPTY_SECTION));
    }

    #[test]
    fn test_fenced_headings_copied_verbatim() {
        let md = "## Usage\nRun:\n```bash\n# not a heading\n## nor this\n```\ndone\n## Other\nx";
        assert_eq!(
            extract_section(md, "Usage"),
            found("Run:\n```bash\n# not a heading\n## nor this\n```\ndone")
        );
    }

    #[test]
    fn test_heading_inside_fence_is_not_a_target() {
        let md = "```\n# Hidden\n```\n# Visible\nyes";
        assert_eq!(extract_section(md, "Hidden"), SectionLookup::NotFound);
        assert_eq!(extract_section(md, "Visible"), found("yes"));
    }

    #[test]
    fn test_levels_five_and_six_are_targets() {
        let md = "##### Five\nfive body\n###### Six\nsix body\n##### Five B\nother";
        assert_eq!(extract_section(md, "Five"), found("five body\n###### Six\nsix body"));
        assert_eq!(extract_section(md, "Six"), found("six body"));
    }

    #[test]
    fn test_leading_trailing_blank_lines_stripped() {
        let md = "# S\n\n\n  body line\n\n\n# T";
        assert_eq!(extract_section(md, "S"), found("body line"));
    }

    #[test]
    fn test_first_match_wins() {
        let md = "# Dup\nfirst\n# Dup\nsecond";
        assert_eq!(extract_section(md, "dup"), found("first"));
    }

    #[test]
    fn test_idempotent() {
        let md = "# A\n```\n# x\n```\n## B\nbody";
        let first = extract_section(md, "A");
        let second = extract_section(md, "A");
        assert_eq!(first, second);
    }

    #[test]
    fn test_every_outline_heading_is_extractable() {
        let docs = [
            "# A\ntext\n## B\nmore\n## C\nend",
            "# Title\n```\n# fake\n```\n## Real\n### Deeper\n#### Deepest\n##### Too deep",
            "intro\n## First\n\n## Second\n```sh\necho\n```",
            "   # Indented\nbody\n#### Four",
        ];
        for md in docs {
            for heading in extract_headings(md) {
                assert!(
                    extract_section(md, &heading.text).is_found(),
                    "heading {:?} of {:?} should be extractable",
                    heading.text,
                    md
                );
            }
        }
    }
}
