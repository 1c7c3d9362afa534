//! Keyword-overlap context selection and prompt assembly.

/// Sentences sent to the model per question.
pub const MAX_CONTEXT_SENTENCES: usize = 5;

/// Pick the first `max_sentences` sentences of `text` that mention any word
/// of the question, joined with `". "`.
///
/// Matching is case-insensitive substring containment; there is no ranking.
pub fn extract_relevant_context(question: &str, text: &str, max_sentences: usize) -> String {
    let lowered = question.to_lowercase();
    let keywords: Vec<&str> = lowered.split(' ').filter(|k| !k.is_empty()).collect();
    if keywords.is_empty() {
        return String::new();
    }

    text.split('.')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .filter(|sentence| {
            let sentence = sentence.to_lowercase();
            keywords.iter().any(|k| sentence.contains(k))
        })
        .take(max_sentences)
        .collect::<Vec<_>>()
        .join(". ")
}

/// Combine selected context and the question into one generation prompt.
pub fn build_prompt(context: &str, question: &str) -> String {
    format!(
        "Context from PDF: {}\n\nQuestion: {}\nAnswer:",
        context, question
    )
}
