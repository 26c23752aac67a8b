//! Text module - the character budget sent to the model

/// Maximum number of characters forwarded to the model
pub const MAX_INPUT_CHARS: usize = 12_000;

/// Cap `text` at `max_chars` characters
///
/// Counts Unicode scalar values, not bytes, so the cut never lands inside a
/// multi-byte character. Text already within budget is returned unchanged.
///
/// # Examples
///
/// ```
/// use textgist_domain::truncate_chars;
///
/// assert_eq!(truncate_chars("héllo", 2), "hé");
/// assert_eq!(truncate_chars("short", 100), "short");
/// ```
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}
