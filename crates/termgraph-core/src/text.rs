// File: crates/termgraph-core/src/text.rs
// Summary: Terminal-cell text measurement for label and value column alignment.

use unicode_width::UnicodeWidthStr;

/// Number of terminal cells `text` occupies (wide CJK/emoji count as two).
pub fn display_width(text: &str) -> usize {
    UnicodeWidthStr::width(text)
}

/// Left-align `text` in a column of `width` cells, padding with spaces.
/// Text wider than the column is returned unchanged.
pub fn pad_right(text: &str, width: usize) -> String {
    let w = display_width(text);
    let mut out = String::with_capacity(text.len() + width.saturating_sub(w));
    out.push_str(text);
    out.extend(std::iter::repeat(' ').take(width.saturating_sub(w)));
    out
}

/// A blank column of `width` cells.
pub fn blank(width: usize) -> String {
    " ".repeat(width)
}
