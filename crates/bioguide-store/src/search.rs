//! Free-form keyword search over the knowledge store.
//!
//! No ranking: matching entries are reported in store declaration order.

use bioguide_core::FormatLimits;

use crate::store::KnowledgeStore;
use crate::text::truncate_chars;

const RESULT_HEADER: &str = "Here's relevant information:";

/// Lowercase whitespace tokens. Every token counts, including short words.
pub fn tokenize(query: &str) -> Vec<String> {
    query
        .to_lowercase()
        .split_whitespace()
        .map(|t| t.to_string())
        .collect()
}

/// Search every entry for any query token. Returns `None` when nothing matches.
pub fn search(query: &str, store: &KnowledgeStore, limits: &FormatLimits) -> Option<String> {
    let tokens = tokenize(query);
    if tokens.is_empty() {
        return None;
    }

    let blocks: Vec<String> = store
        .entries()
        .iter()
        .filter(|entry| {
            let haystack = entry.searchable_text();
            tokens.iter().any(|t| haystack.contains(t.as_str()))
        })
        .map(|entry| {
            format!(
                "{}:\n{}",
                entry.title.to_uppercase(),
                truncate_chars(&entry.plain_text(), limits.excerpt_chars)
            )
        })
        .collect();

    if blocks.is_empty() {
        None
    } else {
        Some(format!("{}\n\n{}", RESULT_HEADER, blocks.join("\n\n")))
    }
}
