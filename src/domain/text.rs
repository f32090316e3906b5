/// Returns the first `max_chars` characters of `text`, never splitting a code point.
pub fn char_prefix(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}

/// Like [`char_prefix`], with `...` appended when something was cut off.
pub fn truncate_with_ellipsis(text: &str, max_chars: usize) -> String {
    let prefix = char_prefix(text, max_chars);
    if prefix.len() < text.len() {
        format!("{}...", prefix)
    } else {
        prefix.to_string()
    }
}
