//! Pure cursor arithmetic for the InputBox buffer.
//!
//! Offsets are byte offsets into a `&str` and always land on char boundaries.

use unicode_width::UnicodeWidthStr;

/// Border width on each side of the bordered block.
pub(super) const BORDER_OFFSET: u16 = 1;

/// Byte offset of the character before `pos`.
pub(super) fn prev_char_boundary(text: &str, pos: usize) -> usize {
    text[..pos]
        .char_indices()
        .next_back()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

/// Byte offset of the character after `pos`.
pub(super) fn next_char_boundary(text: &str, pos: usize) -> usize {
    text[pos..]
        .char_indices()
        .nth(1)
        .map(|(i, _)| pos + i)
        .unwrap_or(text.len())
}

/// Display columns occupied by `text[..pos]`.
pub(super) fn display_width(text: &str, pos: usize) -> u16 {
    u16::try_from(text[..pos].width()).unwrap_or(u16::MAX)
}

/// First byte offset to draw so that the cursor stays inside `inner_width`
/// columns. Zero while everything fits.
pub(super) fn visible_start(text: &str, pos: usize, inner_width: u16) -> usize {
    if inner_width == 0 {
        return pos;
    }
    let mut start = 0;
    // Leave one column for the cursor itself.
    while start < pos && display_width(&text[start..], pos - start) >= inner_width {
        start = next_char_boundary(text, start);
    }
    start
}
