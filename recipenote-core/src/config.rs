//! Notebook configuration from environment variables.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Default delay before a changed search query takes effect.
pub const DEFAULT_DEBOUNCE_MS: u64 = 300;

#[derive(Debug, Clone)]
pub struct NotebookConfig {
    /// Directory holding the persisted store.
    pub data_dir: PathBuf,
    /// Debounce delay for interactive search input.
    pub debounce: Duration,
}

impl NotebookConfig {
    /// Load configuration from environment variables.
    ///
    /// Optional:
    /// - `RECIPENOTE_DATA_DIR`: store directory (default: "~/.recipenote/data")
    /// - `RECIPENOTE_DEBOUNCE_MS`: search debounce in ms (default: 300)
    pub fn from_env() -> Self {
        let data_dir = env::var("RECIPENOTE_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| Self::default_data_dir());

        let debounce_ms = env::var("RECIPENOTE_DEBOUNCE_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_DEBOUNCE_MS);

        Self {
            data_dir,
            debounce: Duration::from_millis(debounce_ms),
        }
    }

    /// Get the default data directory: ~/.recipenote/data
    pub fn default_data_dir() -> PathBuf {
        dirs::home_dir()
            .map(|h| h.join(".recipenote").join("data"))
            .unwrap_or_else(|| PathBuf::from("data/recipenote"))
    }
}
