//! Startup knowledge loading.

use std::path::Path;

use tracing::{info, warn};

use bioguide_core::{BioGuideConfig, Result};
use bioguide_ingest::Ingester;
use bioguide_store::{builtin_store, KnowledgeStore};

/// Shown to new sessions when the configured report could not be loaded.
pub const INGEST_WARNING: &str =
    "Note: the market report could not be loaded, so detailed answers are unavailable right now.";

/// What the server answers from.
pub struct Knowledge {
    pub store: KnowledgeStore,
    /// Plain report text used as model context by `/api/ask`.
    pub corpus: String,
    pub warning: Option<String>,
}

impl Knowledge {
    pub fn builtin() -> Self {
        let store = builtin_store();
        let corpus = corpus_from_store(&store);
        Self {
            store,
            corpus,
            warning: None,
        }
    }

    /// Empty store plus the fixed warning.
    pub fn unavailable() -> Self {
        Self {
            store: KnowledgeStore::empty(),
            corpus: String::new(),
            warning: Some(INGEST_WARNING.to_string()),
        }
    }
}

/// Load the configured report, or the built-in dataset when none is set.
///
/// Never fails: ingestion errors are logged and degrade to an empty store.
pub fn load_knowledge(config: &BioGuideConfig) -> Knowledge {
    let Some(path) = &config.document else {
        info!("No report configured, using built-in dataset");
        return Knowledge::builtin();
    };

    match ingest_document(path) {
        Ok(knowledge) => {
            info!(
                "Loaded {} knowledge entries from {}",
                knowledge.store.len(),
                path.display()
            );
            knowledge
        }
        Err(e) => {
            warn!("Failed to load report {}: {}", path.display(), e);
            Knowledge::unavailable()
        }
    }
}

fn ingest_document(path: &Path) -> Result<Knowledge> {
    let doc = Ingester::default().ingest_path(path)?;
    let store = doc.to_store()?;
    Ok(Knowledge {
        store,
        corpus: doc.text,
        warning: None,
    })
}

/// Flatten a store into sentence-separated text for context extraction.
fn corpus_from_store(store: &KnowledgeStore) -> String {
    store
        .entries()
        .iter()
        .map(|e| format!("{}. {}", e.title, e.plain_text()))
        .collect::<Vec<_>>()
        .join(". ")
}
