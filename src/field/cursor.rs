//! Cursor math for the field's display text
//!
//! Cursor positions are char offsets (not bytes): separators are
//! configurable and may be multi-byte, so byte offsets would land inside
//! characters. Display columns are computed with `unicode-width` since a
//! separator like a CJK character occupies two terminal cells.

use unicode_width::UnicodeWidthChar;

/// Number of chars in `s` (the valid cursor range is `0..=char_len(s)`).
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Clamp a cursor offset into the valid range for `s`.
pub fn clamp(s: &str, cursor: usize) -> usize {
    cursor.min(char_len(s))
}

/// Terminal-column width of the first `cursor` chars of `s`.
pub fn prefix_width(s: &str, cursor: usize) -> usize {
    s.chars()
        .take(cursor)
        .map(|c| c.width().unwrap_or(0))
        .sum()
}

/// Insert `c` at char offset `cursor`, returning the edited string.
pub fn insert_at(s: &str, cursor: usize, c: char) -> String {
    let mut out = String::with_capacity(s.len() + c.len_utf8());
    let mut inserted = false;
    for (i, ch) in s.chars().enumerate() {
        if i == cursor {
            out.push(c);
            inserted = true;
        }
        out.push(ch);
    }
    if !inserted {
        out.push(c);
    }
    out
}

/// Remove the char at offset `cursor`, returning the edited string.
///
/// Out-of-range offsets return the string unchanged.
pub fn remove_at(s: &str, cursor: usize) -> String {
    s.chars()
        .enumerate()
        .filter(|&(i, _)| i != cursor)
        .map(|(_, c)| c)
        .collect()
}
