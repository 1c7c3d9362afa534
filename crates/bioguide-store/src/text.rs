//! Char-boundary-safe truncation helpers shared by formatting and search.

/// Keep at most `max_chars` characters, appending "..." when text was cut.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        None => text.to_string(),
        Some((byte_idx, _)) => format!("{}...", text[..byte_idx].trim_end()),
    }
}

/// Keep at most `n` items of a list.
pub fn take_items(items: &[String], n: usize) -> &[String] {
    &items[..items.len().min(n)]
}
