//! Knowledge store data types: topics, sectors, entries.

use serde::{Deserialize, Serialize};

/// Top-level menu category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Topic {
    Overview,
    Sector,
    Partnership,
    Policy,
    Case,
    Entry,
    Local,
}

impl Topic {
    /// Menu order.
    pub const ALL: [Topic; 7] = [
        Topic::Overview,
        Topic::Sector,
        Topic::Partnership,
        Topic::Policy,
        Topic::Case,
        Topic::Entry,
        Topic::Local,
    ];

    /// Human-readable menu label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Overview => "Market Overview",
            Self::Sector => "Sector Opportunities",
            Self::Partnership => "Essential Partnerships",
            Self::Policy => "Government Policies",
            Self::Case => "Successful Case Studies",
            Self::Entry => "Market Entry Strategies",
            Self::Local => "Local Collaboration Partners",
        }
    }
}

impl std::fmt::Display for Topic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Overview => write!(f, "overview"),
            Self::Sector => write!(f, "sector"),
            Self::Partnership => write!(f, "partnership"),
            Self::Policy => write!(f, "policy"),
            Self::Case => write!(f, "case"),
            Self::Entry => write!(f, "entry"),
            Self::Local => write!(f, "local"),
        }
    }
}

/// Biomaterials application domain used for drill-down content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sector {
    Healthcare,
    Packaging,
    Agriculture,
    Textiles,
}

impl Sector {
    /// Menu order.
    pub const ALL: [Sector; 4] = [
        Sector::Healthcare,
        Sector::Packaging,
        Sector::Agriculture,
        Sector::Textiles,
    ];

    /// Capitalized name, e.g. "Healthcare".
    pub fn label(&self) -> &'static str {
        match self {
            Self::Healthcare => "Healthcare",
            Self::Packaging => "Packaging",
            Self::Agriculture => "Agriculture",
            Self::Textiles => "Textiles",
        }
    }
}

impl std::fmt::Display for Sector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Healthcare => write!(f, "healthcare"),
            Self::Packaging => write!(f, "packaging"),
            Self::Agriculture => write!(f, "agriculture"),
            Self::Textiles => write!(f, "textiles"),
        }
    }
}

/// Composite store key. Sector entries live under `Topic::Sector`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntryKey {
    pub topic: Topic,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sector: Option<Sector>,
}

impl EntryKey {
    pub fn topic(topic: Topic) -> Self {
        Self { topic, sector: None }
    }

    pub fn sector(sector: Sector) -> Self {
        Self {
            topic: Topic::Sector,
            sector: Some(sector),
        }
    }
}

impl std::fmt::Display for EntryKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.sector {
            Some(sector) => write!(f, "{}/{}", self.topic, sector),
            None => write!(f, "{}", self.topic),
        }
    }
}

/// A single `Label: value` statistic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fact {
    pub label: String,
    pub value: String,
}

/// A labelled bullet list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryList {
    pub label: String,
    pub items: Vec<String>,
}

/// Display text plus optional statistics and lists for one key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnowledgeEntry {
    pub key: EntryKey,
    pub title: String,
    /// One-line teaser shown next to the entry in menus.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headline: Option<String>,
    #[serde(default)]
    pub facts: Vec<Fact>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default)]
    pub lists: Vec<EntryList>,
}

impl KnowledgeEntry {
    pub fn new(key: EntryKey, title: impl Into<String>) -> Self {
        Self {
            key,
            title: title.into(),
            headline: None,
            facts: Vec::new(),
            text: None,
            lists: Vec::new(),
        }
    }

    pub fn with_headline(mut self, headline: impl Into<String>) -> Self {
        self.headline = Some(headline.into());
        self
    }

    pub fn with_fact(mut self, label: impl Into<String>, value: impl Into<String>) -> Self {
        self.facts.push(Fact {
            label: label.into(),
            value: value.into(),
        });
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_list(mut self, label: impl Into<String>, items: &[&str]) -> Self {
        self.lists.push(EntryList {
            label: label.into(),
            items: items.iter().map(|s| s.to_string()).collect(),
        });
        self
    }

    /// Look up a list by label (case-insensitive).
    pub fn list(&self, label: &str) -> Option<&EntryList> {
        self.lists
            .iter()
            .find(|l| l.label.eq_ignore_ascii_case(label))
    }

    /// Body content (facts, text, lists) as a single line of prose.
    pub fn plain_text(&self) -> String {
        let mut parts: Vec<String> = Vec::new();
        for fact in &self.facts {
            parts.push(format!("{}: {}", fact.label, fact.value));
        }
        if let Some(t) = &self.text {
            parts.push(t.clone());
        }
        for list in self.lists.iter().filter(|l| !l.items.is_empty()) {
            parts.push(format!("{}: {}", list.label, list.items.join("; ")));
        }
        parts.join(". ")
    }

    /// All entry content flattened into one lowercase string for keyword matching.
    pub fn searchable_text(&self) -> String {
        let mut text = self.title.clone();
        if let Some(h) = &self.headline {
            text.push(' ');
            text.push_str(h);
        }
        text.push(' ');
        text.push_str(&self.plain_text());
        text.to_lowercase()
    }
}
