//! BioGuide Core: configuration, formatting limits, error type.

pub mod config;
pub mod error;

pub use config::{BioGuideConfig, DataPaths, DelayRange, FormatLimits, DEFAULT_MAX_SESSIONS};
pub use error::{Error, Result};
