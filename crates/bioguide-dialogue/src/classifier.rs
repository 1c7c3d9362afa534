//! Ordered keyword classification of free-form input.
//!
//! Predicates are tested in declaration order and the first match wins, so
//! "health policy" resolves by whichever rule comes first.

use bioguide_store::{Sector, Topic};
use once_cell::sync::Lazy;
use regex::Regex;

/// Label returned when no topic predicate matches.
pub const DEFAULT_TOPIC: Topic = Topic::Sector;
/// Label returned when no sector predicate matches.
pub const DEFAULT_SECTOR: Sector = Sector::Healthcare;

static TOPIC_RULES: Lazy<Vec<(Regex, Topic)>> = Lazy::new(|| {
    [
        (r"(?i)market|overview|size", Topic::Overview),
        (r"(?i)sector|opportunity|application", Topic::Sector),
        (r"(?i)partner|collab|network", Topic::Partnership),
        (r"(?i)policy|government|regulation", Topic::Policy),
        (r"(?i)case|study|example", Topic::Case),
        (r"(?i)entry|strategy|how to enter", Topic::Entry),
        (r"(?i)local|body|municipal", Topic::Local),
    ]
    .into_iter()
    .map(|(pattern, topic)| (Regex::new(pattern).unwrap(), topic))
    .collect()
});

static SECTOR_RULES: Lazy<Vec<(Regex, Sector)>> = Lazy::new(|| {
    [
        (r"(?i)health|medical", Sector::Healthcare),
        (r"(?i)packag|consumer", Sector::Packaging),
        (r"(?i)agricult|farm", Sector::Agriculture),
        (r"(?i)textile|fashion", Sector::Textiles),
    ]
    .into_iter()
    .map(|(pattern, sector)| (Regex::new(pattern).unwrap(), sector))
    .collect()
});

fn first_match<T: Copy>(rules: &[(Regex, T)], input: &str) -> Option<T> {
    rules
        .iter()
        .find(|(re, _)| re.is_match(input))
        .map(|(_, label)| *label)
}

/// Map input to a top-level menu topic.
pub fn classify_topic(input: &str) -> Topic {
    first_match(&TOPIC_RULES, input).unwrap_or(DEFAULT_TOPIC)
}

/// Map input to a sector.
pub fn classify_sector(input: &str) -> Sector {
    first_match(&SECTOR_RULES, input).unwrap_or(DEFAULT_SECTOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_topic_keywords() {
        assert_eq!(classify_topic("what's the MARKET size?"), Topic::Overview);
        assert_eq!(classify_topic("Show me applications"), Topic::Sector);
        assert_eq!(classify_topic("who should I collaborate with"), Topic::Partnership);
        assert_eq!(classify_topic("government incentives"), Topic::Policy);
        assert_eq!(classify_topic("any case studies"), Topic::Case);
        assert_eq!(classify_topic("how to enter india"), Topic::Entry);
        assert_eq!(classify_topic("municipal contacts"), Topic::Local);
    }

    #[test]
    fn test_classify_topic_first_match_wins() {
        // "policy" (rule 4) and "network" (rule 3): partnership comes first.
        assert_eq!(classify_topic("policy network"), Topic::Partnership);
        // "size" (rule 1) beats "strategy" (rule 6).
        assert_eq!(classify_topic("strategy by size"), Topic::Overview);
    }

    #[test]
    fn test_classify_topic_default() {
        assert_eq!(classify_topic("I want healthcare"), DEFAULT_TOPIC);
        assert_eq!(classify_topic(""), DEFAULT_TOPIC);
        assert_eq!(classify_topic("🦀 \u{0} ???"), DEFAULT_TOPIC);
    }

    #[test]
    fn test_classify_sector() {
        assert_eq!(classify_sector("Medical devices"), Sector::Healthcare);
        assert_eq!(classify_sector("consumer packaging"), Sector::Packaging);
        assert_eq!(classify_sector("FARMING"), Sector::Agriculture);
        assert_eq!(classify_sector("fashion"), Sector::Textiles);
        assert_eq!(classify_sector("health and fashion"), Sector::Healthcare);
        assert_eq!(classify_sector("nothing relevant"), DEFAULT_SECTOR);
        assert_eq!(classify_sector(""), DEFAULT_SECTOR);
    }

    #[test]
    fn test_classification_is_deterministic() {
        for input in ["partner policy", "textile farm", "", "ready"] {
            assert_eq!(classify_topic(input), classify_topic(input));
            assert_eq!(classify_sector(input), classify_sector(input));
        }
    }
}
