//! Report Q&A through an external language model.
//!
//! Relevant report sentences are picked by keyword overlap, packed into a
//! single prompt, and sent to a hosted text-generation API. No local model
//! and no retries.

pub mod config;
pub mod context;
pub mod providers;
pub mod types;

pub use config::{EnvKeys, LLMConfig};
pub use context::{build_prompt, extract_relevant_context};
pub use types::*;
