//! BioGuide Dialogue: the fixed-depth conversation script.
//!
//! Input text is routed by an ordered keyword classifier, answers are
//! rendered from the knowledge store by pure formatters, and the
//! [`Controller`] ties both together as a total stage-transition function.
//! [`Session`] is the explicit per-conversation context the shells drive.

pub mod classifier;
pub mod controller;
pub mod formatter;
pub mod session;
pub mod types;

pub use classifier::{classify_sector, classify_topic};
pub use controller::{Controller, Turn};
pub use session::Session;
pub use types::*;
