//! Section splitting on recognised report headers.
//!
//! A section runs from its header line to the next header line. Markdown
//! headings always delimit; plain lines delimit only when they name a
//! recognised report section.

use once_cell::sync::Lazy;
use regex::Regex;

use bioguide_store::{EntryKey, Sector, Topic};

/// A recognised report section and the store key it populates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderSpec {
    /// Lowercase prefix matched against normalised header lines.
    pub prefix: &'static str,
    /// Display title given to the resulting entry.
    pub title: &'static str,
    pub key: EntryKey,
}

const fn topic(prefix: &'static str, title: &'static str, t: Topic) -> HeaderSpec {
    HeaderSpec {
        prefix,
        title,
        key: EntryKey {
            topic: t,
            sector: None,
        },
    }
}

const fn sector(prefix: &'static str, title: &'static str, s: Sector) -> HeaderSpec {
    HeaderSpec {
        prefix,
        title,
        key: EntryKey {
            topic: Topic::Sector,
            sector: Some(s),
        },
    }
}

/// Headers of the biomaterials market report.
pub const DEFAULT_HEADERS: &[HeaderSpec] = &[
    topic("market overview", "Market Overview", Topic::Overview),
    topic("market size", "Market Overview", Topic::Overview),
    sector("healthcare", "Healthcare", Sector::Healthcare),
    sector("packaging", "Packaging", Sector::Packaging),
    sector("agriculture", "Agriculture", Sector::Agriculture),
    sector("textiles", "Textiles", Sector::Textiles),
    topic("essential partnerships", "Essential Partnerships", Topic::Partnership),
    topic("partnerships", "Essential Partnerships", Topic::Partnership),
    topic("government policies", "Government Policies", Topic::Policy),
    topic("policies", "Government Policies", Topic::Policy),
    topic("case studies", "Successful Case Studies", Topic::Case),
    topic("successful case studies", "Successful Case Studies", Topic::Case),
    topic("market entry", "Market Entry Strategies", Topic::Entry),
    topic("entry strategies", "Market Entry Strategies", Topic::Entry),
    topic("local collaboration", "Local Collaboration Partners", Topic::Local),
    topic("local bodies", "Local Collaboration Partners", Topic::Local),
];

/// Longest header line, in words, that still counts as a header.
const MAX_HEADER_WORDS: usize = 8;

static LEADING_MARKERS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:#{1,6}\s*)?(?:(?:\d+|[ivxIVX]+)[.)]\s*)*").unwrap());

static MARKDOWN_HEADING: Lazy<Regex> = Lazy::new(|| Regex::new(r"^#{1,6}\s+\S").unwrap());

/// One split section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// Header text as it appeared, without markers.
    pub header: String,
    /// Store key when the header is recognised.
    pub spec: Option<HeaderSpec>,
    pub body: String,
}

/// Strip heading markers, numbering and a trailing colon.
fn normalize_header(line: &str) -> String {
    let trimmed = line.trim();
    let stripped = LEADING_MARKERS.replace(trimmed, "");
    stripped.trim().trim_end_matches(':').trim().to_string()
}

fn match_header(normalized: &str, headers: &[HeaderSpec]) -> Option<HeaderSpec> {
    if normalized.is_empty()
        || normalized.ends_with('.')
        || normalized.contains(':')
        || normalized.split_whitespace().count() > MAX_HEADER_WORDS
    {
        return None;
    }
    let lower = normalized.to_lowercase();
    headers
        .iter()
        .filter(|h| lower.starts_with(h.prefix))
        .max_by_key(|h| h.prefix.len())
        .copied()
}

/// Split `text` into sections. Text before the first header is dropped.
pub fn split_sections(text: &str, headers: &[HeaderSpec]) -> Vec<Section> {
    let mut sections: Vec<Section> = Vec::new();
    let mut current: Option<(String, Option<HeaderSpec>, Vec<&str>)> = None;

    for line in text.lines() {
        let is_markdown = MARKDOWN_HEADING.is_match(line.trim_start());
        let normalized = normalize_header(line);
        let spec = match_header(&normalized, headers);

        if spec.is_some() || is_markdown {
            if let Some((header, spec, body)) = current.take() {
                sections.push(Section {
                    header,
                    spec,
                    body: body.join("\n").trim().to_string(),
                });
            }
            current = Some((normalized, spec, Vec::new()));
        } else if let Some((_, _, body)) = current.as_mut() {
            body.push(line);
        }
    }

    if let Some((header, spec, body)) = current {
        sections.push(Section {
            header,
            spec,
            body: body.join("\n").trim().to_string(),
        });
    }

    sections
}

#[cfg(test)]
mod tests {
    use super::*;

    const REPORT: &str = "\
India Biomaterials Report 2024
Prepared for foreign startups.

1. Market Overview
The market is worth $5.74 billion.

## Healthcare:
- PLA implants
- Drug delivery

Healthcare demand keeps growing across hospitals in every state of the country.
### Appendix
Raw tables.
Government Policies
- BioE3 Policy
";

    #[test]
    fn test_split_recognised_and_markdown_headers() {
        let sections = split_sections(REPORT, DEFAULT_HEADERS);
        let headers: Vec<&str> = sections.iter().map(|s| s.header.as_str()).collect();
        assert_eq!(
            headers,
            vec!["Market Overview", "Healthcare", "Appendix", "Government Policies"]
        );
        assert_eq!(sections[0].spec.unwrap().key, EntryKey::topic(Topic::Overview));
        assert_eq!(sections[1].spec.unwrap().key, EntryKey::sector(Sector::Healthcare));
        assert!(sections[2].spec.is_none());
        assert_eq!(sections[3].body, "- BioE3 Policy");
    }

    #[test]
    fn test_prose_lines_are_not_headers() {
        let sections = split_sections(REPORT, DEFAULT_HEADERS);
        // The long "Healthcare demand..." sentence stays in the body.
        assert!(sections[1].body.contains("Healthcare demand keeps growing"));
    }

    #[test]
    fn test_preamble_dropped() {
        let sections = split_sections(REPORT, DEFAULT_HEADERS);
        assert!(sections.iter().all(|s| !s.body.contains("Prepared for")));
    }

    #[test]
    fn test_longest_prefix_wins() {
        let spec = match_header("Successful Case Studies", DEFAULT_HEADERS).unwrap();
        assert_eq!(spec.key, EntryKey::topic(Topic::Case));
        let spec = match_header("Market Entry Strategies", DEFAULT_HEADERS).unwrap();
        assert_eq!(spec.key, EntryKey::topic(Topic::Entry));
    }

    #[test]
    fn test_normalize_header() {
        assert_eq!(normalize_header("## 2. Packaging:"), "Packaging");
        assert_eq!(normalize_header("  IV) Textiles  "), "Textiles");
    }

    #[test]
    fn test_no_headers() {
        assert!(split_sections("just some text\nwith lines", DEFAULT_HEADERS).is_empty());
        assert!(split_sections("", DEFAULT_HEADERS).is_empty());
    }
}
