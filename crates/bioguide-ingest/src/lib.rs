//! BioGuide Ingest: turn a market report document into a knowledge store.
//!
//! Runs once at startup: file bytes → text → recognised sections → entries.

pub mod file;
pub mod ingest;
pub mod market;
pub mod sections;

pub use file::FileType;
pub use ingest::{IngestedDocument, Ingester};
pub use market::extract_market_size;
pub use sections::{split_sections, HeaderSpec, Section, DEFAULT_HEADERS};
