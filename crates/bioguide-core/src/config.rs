//! Configuration and data directory management.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Paths to the BioGuide data directory and the files kept in it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataPaths {
    /// Root data directory (e.g., `data/`).
    pub root: PathBuf,
    /// LLM configuration (`data/llm-config.json`).
    pub llm_config_file: PathBuf,
}

impl DataPaths {
    /// Create data paths from a root directory. Creates the directory if needed.
    pub fn new(root: impl AsRef<Path>) -> std::io::Result<Self> {
        let root = root.as_ref().to_path_buf();
        std::fs::create_dir_all(&root)?;
        Ok(Self {
            llm_config_file: root.join("llm-config.json"),
            root,
        })
    }
}

/// Truncation parameters used by the content formatter and free-form search.
///
/// These shape output length only; they never change which content is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatLimits {
    /// Items kept per list in the roadmap.
    pub list_items: usize,
    /// Characters kept from a free-text paragraph.
    pub text_chars: usize,
    /// Characters kept per search excerpt.
    pub excerpt_chars: usize,
}

impl Default for FormatLimits {
    fn default() -> Self {
        Self {
            list_items: 2,
            text_chars: 300,
            excerpt_chars: 300,
        }
    }
}

/// Bounds of the cosmetic "thinking" delay, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DelayRange {
    pub min_ms: u64,
    pub max_ms: u64,
}

impl DelayRange {
    pub fn new(min_ms: u64, max_ms: u64) -> Self {
        if min_ms <= max_ms {
            Self { min_ms, max_ms }
        } else {
            Self { min_ms: max_ms, max_ms: min_ms }
        }
    }

    /// No delay at all.
    pub fn disabled() -> Self {
        Self { min_ms: 0, max_ms: 0 }
    }

    pub fn is_disabled(&self) -> bool {
        self.max_ms == 0
    }

    /// Pick a duration from the range given a sample in `[0.0, 1.0)`.
    pub fn pick(&self, sample: f64) -> Duration {
        let span = (self.max_ms - self.min_ms) as f64;
        let offset = (span * sample.clamp(0.0, 1.0)).round() as u64;
        Duration::from_millis(self.min_ms + offset)
    }
}

impl Default for DelayRange {
    fn default() -> Self {
        Self { min_ms: 500, max_ms: 1500 }
    }
}

/// Top-level BioGuide configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BioGuideConfig {
    /// HTTP server port.
    pub port: u16,
    /// Data directory paths.
    pub data_paths: DataPaths,
    /// Report document ingested at startup. `None` selects the built-in dataset.
    pub document: Option<PathBuf>,
    /// Cosmetic response delay.
    pub delay: DelayRange,
    /// Formatter truncation limits.
    pub limits: FormatLimits,
    /// Live sessions kept in memory; the oldest is evicted past this.
    pub max_sessions: usize,
}

/// Default cap on live sessions.
pub const DEFAULT_MAX_SESSIONS: usize = 1000;

impl BioGuideConfig {
    /// Create configuration from environment and defaults.
    pub fn from_env(data_dir: impl AsRef<Path>) -> std::io::Result<Self> {
        let port = env_parse("PORT").unwrap_or(3010);

        let data_paths = DataPaths::new(data_dir)?;

        let document = std::env::var("BIOGUIDE_DOCUMENT")
            .ok()
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        let default_delay = DelayRange::default();
        let delay = DelayRange::new(
            env_parse("BIOGUIDE_DELAY_MIN_MS").unwrap_or(default_delay.min_ms),
            env_parse("BIOGUIDE_DELAY_MAX_MS").unwrap_or(default_delay.max_ms),
        );

        let mut limits = FormatLimits::default();
        if let Some(n) = env_parse("BIOGUIDE_LIST_ITEMS") {
            limits.list_items = n;
        }
        if let Some(n) = env_parse("BIOGUIDE_TEXT_CHARS") {
            limits.text_chars = n;
        }

        let max_sessions = env_parse("BIOGUIDE_MAX_SESSIONS")
            .filter(|n: &usize| *n > 0)
            .unwrap_or(DEFAULT_MAX_SESSIONS);

        Ok(Self {
            port,
            data_paths,
            document,
            delay,
            limits,
            max_sessions,
        })
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|v| v.trim().parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_paths_creates_root() {
        let dir = tempfile::TempDir::new().unwrap();
        let root = dir.path().join("nested").join("data");
        let paths = DataPaths::new(&root).unwrap();
        assert!(root.is_dir());
        assert_eq!(paths.llm_config_file, root.join("llm-config.json"));
    }

    #[test]
    fn test_delay_range_normalizes_inverted_bounds() {
        let range = DelayRange::new(1500, 500);
        assert_eq!(range.min_ms, 500);
        assert_eq!(range.max_ms, 1500);
    }

    #[test]
    fn test_delay_pick_stays_in_bounds() {
        let range = DelayRange::default();
        assert_eq!(range.pick(0.0), Duration::from_millis(500));
        assert_eq!(range.pick(1.0), Duration::from_millis(1500));
        assert_eq!(range.pick(7.0), Duration::from_millis(1500));
        assert!(DelayRange::disabled().is_disabled());
        assert_eq!(DelayRange::disabled().pick(0.5), Duration::ZERO);
    }

    #[test]
    fn test_default_limits() {
        let limits = FormatLimits::default();
        assert_eq!(limits.list_items, 2);
        assert_eq!(limits.text_chars, 300);
    }
}
