//! Best-effort market-size extraction.

use once_cell::sync::Lazy;
use regex::Regex;

const FIGURE: &str = r"\$\s?\d[\d,]*(?:\.\d+)?\s*(?:billion|million|bn|mn|b|m)\b(?:\s*\(\d{4}\))?";

/// A dollar figure following the word "market" on the same line.
static NEAR_MARKET: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!(r"(?i)market[^\n$]{{0,120}}({})", FIGURE)).unwrap());

static ANY_FIGURE: Lazy<Regex> = Lazy::new(|| Regex::new(&format!(r"(?i){}", FIGURE)).unwrap());

/// Find the report's headline market size, e.g. `$5.74 billion (2024)`.
///
/// Prefers a figure on a line mentioning "market"; otherwise the first dollar
/// figure in the text.
pub fn extract_market_size(text: &str) -> Option<String> {
    let raw = NEAR_MARKET
        .captures(text)
        .and_then(|c| c.get(1))
        .or_else(|| ANY_FIGURE.find(text))?
        .as_str();
    Some(
        raw.replacen("$ ", "$", 1)
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" "),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_figure_near_market() {
        let text = "Funding of $70 thousand.\nThe biomaterials market reached $5.74 billion (2024) and keeps growing.";
        assert_eq!(extract_market_size(text).as_deref(), Some("$5.74 billion (2024)"));
    }

    #[test]
    fn test_falls_back_to_first_figure() {
        let text = "Healthcare grows to $ 9.44  Bn by 2030.";
        assert_eq!(extract_market_size(text).as_deref(), Some("$9.44 Bn"));
    }

    #[test]
    fn test_no_figure() {
        assert!(extract_market_size("no numbers here").is_none());
        assert!(extract_market_size("").is_none());
    }
}
