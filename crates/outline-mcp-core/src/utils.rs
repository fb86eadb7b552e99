//! Shared formatting helpers used across outline-mcp crates.

/// Format an integer with `,` thousands separators (`12345` -> `12,345`)
pub fn format_thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Number of Unicode scalar values in `text`
#[inline]
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// The first `max_chars` characters of `text`, cut on a char boundary
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}
