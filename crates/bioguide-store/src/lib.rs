//! BioGuide Store: the read-only knowledge store behind every formatted answer.

pub mod dataset;
pub mod search;
pub mod store;
pub mod text;
pub mod types;

pub use dataset::builtin_store;
pub use search::search;
pub use store::{KnowledgeStore, StoreSource};
pub use types::*;
