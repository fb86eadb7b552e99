//! Line-oriented markdown structure parsers.
//!
//! All parsers here scan text line by line with a single fenced-code flag, so
//! heading syntax inside ``` blocks is inert. There is no lookahead: an
//! unclosed fence hides everything after it.

mod headings;
mod outline;
mod sections;

pub use self::headings::extract_headings;
pub use self::outline::{render_outline, word_count};
pub use self::sections::{EMPTY_SECTION, extract_section};

/// True when an already-trimmed line opens or closes a fenced code block
#[inline]
pub(crate) fn is_fence(trimmed: &str) -> bool {
    trimmed.starts_with("```")
}
