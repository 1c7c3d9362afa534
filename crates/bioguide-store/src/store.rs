//! In-memory, read-only knowledge store.

use std::collections::HashSet;

use serde::Serialize;
use tracing::debug;

use crate::types::{EntryKey, KnowledgeEntry, Sector, Topic};
use bioguide_core::{Error, Result};

/// Where the store's content came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase", tag = "kind")]
pub enum StoreSource {
    Builtin,
    Document { path: String },
    Empty,
}

/// Ordered mapping from [`EntryKey`] to [`KnowledgeEntry`].
///
/// Entries keep declaration order, which is also the order search results
/// are reported in. Keys are unique. There are no mutating methods; a store
/// is built once and then shared behind an `Arc`.
#[derive(Debug, Clone, Serialize)]
pub struct KnowledgeStore {
    source: StoreSource,
    entries: Vec<KnowledgeEntry>,
}

impl KnowledgeStore {
    /// Build a store, rejecting duplicate keys.
    pub fn from_entries(source: StoreSource, entries: Vec<KnowledgeEntry>) -> Result<Self> {
        let mut seen = HashSet::new();
        for entry in &entries {
            if !seen.insert(entry.key) {
                return Err(Error::DuplicateKey(entry.key.to_string()));
            }
        }
        debug!("Knowledge store built with {} entries", entries.len());
        Ok(Self { source, entries })
    }

    /// A store with no content. Every lookup misses.
    pub fn empty() -> Self {
        Self {
            source: StoreSource::Empty,
            entries: Vec::new(),
        }
    }

    pub fn source(&self) -> &StoreSource {
        &self.source
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in declaration order.
    pub fn entries(&self) -> &[KnowledgeEntry] {
        &self.entries
    }

    pub fn get(&self, key: EntryKey) -> Option<&KnowledgeEntry> {
        self.entries.iter().find(|e| e.key == key)
    }

    pub fn topic(&self, topic: Topic) -> Option<&KnowledgeEntry> {
        self.get(EntryKey::topic(topic))
    }

    pub fn sector(&self, sector: Sector) -> Option<&KnowledgeEntry> {
        self.get(EntryKey::sector(sector))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_keys_rejected() {
        let entries = vec![
            KnowledgeEntry::new(EntryKey::topic(Topic::Policy), "A"),
            KnowledgeEntry::new(EntryKey::topic(Topic::Policy), "B"),
        ];
        let err = KnowledgeStore::from_entries(StoreSource::Builtin, entries).unwrap_err();
        assert!(matches!(err, Error::DuplicateKey(k) if k == "policy"));
    }

    #[test]
    fn test_lookup_by_topic_and_sector() {
        let entries = vec![
            KnowledgeEntry::new(EntryKey::topic(Topic::Overview), "Overview"),
            KnowledgeEntry::new(EntryKey::sector(Sector::Packaging), "Packaging"),
        ];
        let store = KnowledgeStore::from_entries(StoreSource::Builtin, entries).unwrap();
        assert_eq!(store.len(), 2);
        assert_eq!(store.topic(Topic::Overview).unwrap().title, "Overview");
        assert_eq!(store.sector(Sector::Packaging).unwrap().title, "Packaging");
        assert!(store.sector(Sector::Textiles).is_none());
    }

    #[test]
    fn test_empty_store() {
        let store = KnowledgeStore::empty();
        assert!(store.is_empty());
        assert_eq!(store.source(), &StoreSource::Empty);
        assert!(store.topic(Topic::Overview).is_none());
    }
}
