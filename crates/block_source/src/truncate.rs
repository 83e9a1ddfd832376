//! Display-width truncation of captured source lines.

use std::borrow::Cow;

/// Appended to a source line that was cut to fit the display width.
pub const TRUNCATION_MARKER: &str = "...";

/// Truncates `text` to at most `max_width` characters.
///
/// Lines that already fit are returned borrowed. Longer lines keep as many
/// leading characters as leave room for [`TRUNCATION_MARKER`], so the result
/// is exactly `max_width` characters wide. Returns the text and whether it
/// was truncated.
pub fn truncate_display(text: &str, max_width: usize) -> (Cow<'_, str>, bool) {
    if text.chars().count() <= max_width {
        return (Cow::Borrowed(text), false);
    }

    let marker_width = TRUNCATION_MARKER.chars().count();
    let keep = max_width.saturating_sub(marker_width);
    let cut = text
        .char_indices()
        .nth(keep)
        .map_or(text.len(), |(idx, _)| idx);

    let mut out = String::with_capacity(cut + TRUNCATION_MARKER.len());
    out.push_str(&text[..cut]);
    out.push_str(TRUNCATION_MARKER);
    (Cow::Owned(out), true)
}
