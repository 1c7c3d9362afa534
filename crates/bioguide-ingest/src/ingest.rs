//! Document ingestion pipeline: file → text → sections → knowledge store.

use std::path::Path;

use sha2::{Digest, Sha256};
use tracing::{debug, info};

use crate::file::{self, FileType};
use crate::market::extract_market_size;
use crate::sections::{split_sections, HeaderSpec, Section, DEFAULT_HEADERS};
use bioguide_core::{Error, Result};
use bioguide_store::{EntryKey, EntryList, KnowledgeEntry, KnowledgeStore, StoreSource, Topic};

/// List label for bullets that appear before any `Label:` line.
const DEFAULT_LIST_LABEL: &str = "Highlights";

/// Longest line, in words, treated as a list label.
const MAX_LABEL_WORDS: usize = 6;

/// Output of ingesting one report.
#[derive(Debug, Clone)]
pub struct IngestedDocument {
    /// Source path or name, for logging and status.
    pub source: String,
    /// Full extracted text, kept for model-context extraction.
    pub text: String,
    pub sections: Vec<Section>,
    pub market_size: Option<String>,
    pub content_hash: String,
}

/// Handles report ingestion with a configurable header set.
pub struct Ingester<'a> {
    headers: &'a [HeaderSpec],
}

impl Default for Ingester<'static> {
    fn default() -> Self {
        Self::new(DEFAULT_HEADERS)
    }
}

impl<'a> Ingester<'a> {
    pub fn new(headers: &'a [HeaderSpec]) -> Self {
        Self { headers }
    }

    /// Ingest a report file.
    pub fn ingest_path(&self, path: &Path) -> Result<IngestedDocument> {
        let (bytes, file_type) = file::read_document(path)?;
        self.ingest_bytes(&bytes, file_type, &path.display().to_string())
    }

    /// Ingest a report payload.
    ///
    /// Fails when the document has no text, or has neither a recognised
    /// section nor a market-size figure.
    pub fn ingest_bytes(
        &self,
        bytes: &[u8],
        file_type: FileType,
        source: &str,
    ) -> Result<IngestedDocument> {
        let text = file::extract_text(bytes, file_type)?;
        if text.trim().is_empty() {
            return Err(Error::Ingest(format!("{} contains no text", source)));
        }

        let sections = split_sections(&text, self.headers);
        let market_size = extract_market_size(&text);
        let recognised = sections.iter().filter(|s| s.spec.is_some()).count();
        debug!(
            "{}: {} sections ({} recognised), market size {:?}",
            source,
            sections.len(),
            recognised,
            market_size
        );

        if recognised == 0 && market_size.is_none() {
            return Err(Error::Ingest(format!(
                "{} has no recognised report sections",
                source
            )));
        }

        let doc = IngestedDocument {
            source: source.to_string(),
            content_hash: content_hash(&text),
            text,
            sections,
            market_size,
        };
        info!(
            "Ingested {} ({} recognised sections, hash {})",
            doc.source,
            recognised,
            &doc.content_hash[..12]
        );
        Ok(doc)
    }
}

impl IngestedDocument {
    /// Build the knowledge store from the recognised sections.
    ///
    /// Repeated headers for the same key merge into one entry.
    pub fn to_store(&self) -> Result<KnowledgeStore> {
        let mut entries: Vec<KnowledgeEntry> = Vec::new();

        for section in &self.sections {
            let Some(spec) = section.spec else { continue };
            let index = match entries.iter().position(|e| e.key == spec.key) {
                Some(i) => i,
                None => {
                    entries.push(KnowledgeEntry::new(spec.key, spec.title));
                    entries.len() - 1
                }
            };
            merge_body(&mut entries[index], &section.body);
        }

        if let Some(size) = &self.market_size {
            let key = EntryKey::topic(Topic::Overview);
            match entries.iter_mut().find(|e| e.key == key) {
                Some(entry) => entry.facts.insert(
                    0,
                    bioguide_store::Fact {
                        label: "Current Size".into(),
                        value: size.clone(),
                    },
                ),
                None => entries.insert(
                    0,
                    KnowledgeEntry::new(key, "Market Overview").with_fact("Current Size", size.clone()),
                ),
            }
        }

        for entry in &mut entries {
            entry.lists.retain(|l| !l.items.is_empty());
        }

        KnowledgeStore::from_entries(
            StoreSource::Document {
                path: self.source.clone(),
            },
            entries,
        )
    }
}

/// Sort body lines into bullet lists and free text.
fn merge_body(entry: &mut KnowledgeEntry, body: &str) {
    let mut prose: Vec<&str> = Vec::new();
    let mut current_list: Option<usize> = None;

    for line in body.lines().map(str::trim).filter(|l| !l.is_empty()) {
        if let Some(item) = bullet_item(line) {
            let idx = match current_list {
                Some(i) => i,
                None => list_index(entry, DEFAULT_LIST_LABEL),
            };
            entry.lists[idx].items.push(item.to_string());
            current_list = Some(idx);
        } else if let Some(label) = list_label(line) {
            current_list = Some(list_index(entry, label));
        } else {
            prose.push(line);
            current_list = None;
        }
    }

    if !prose.is_empty() {
        let joined = prose.join(" ");
        entry.text = Some(match entry.text.take() {
            Some(existing) => format!("{} {}", existing, joined),
            None => joined,
        });
    }
}

fn list_index(entry: &mut KnowledgeEntry, label: &str) -> usize {
    match entry.lists.iter().position(|l| l.label == label) {
        Some(i) => i,
        None => {
            entry.lists.push(EntryList {
                label: label.to_string(),
                items: Vec::new(),
            });
            entry.lists.len() - 1
        }
    }
}

fn bullet_item(line: &str) -> Option<&str> {
    ["- ", "• ", "* ", "– "]
        .iter()
        .find_map(|marker| line.strip_prefix(marker))
        .map(str::trim)
        .filter(|item| !item.is_empty())
}

fn list_label(line: &str) -> Option<&str> {
    let label = line.strip_suffix(':')?.trim();
    if label.is_empty() || label.split_whitespace().count() > MAX_LABEL_WORDS {
        None
    } else {
        Some(label)
    }
}

fn content_hash(text: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    hex::encode(hasher.finalize())
}
