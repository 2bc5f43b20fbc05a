use crate::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::warn;

/// Main configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Whether unauthenticated users may run dashboard searches.
    #[serde(default)]
    pub anonymous_access_enabled: bool,

    /// Deployment base path the app is served under (e.g. "/monitoring").
    /// Empty when the app is served from the domain root.
    #[serde(default)]
    pub app_sub_url: String,

    #[serde(default)]
    pub search: SearchConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchConfig {
    /// Debounce window for live-typed palette queries, in milliseconds.
    #[serde(default = "default_debounce")]
    pub debounce_ms: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce(),
        }
    }
}

fn default_debounce() -> u64 {
    200
}

impl Config {
    /// Load config from a JSON file, falling back to defaults when the file
    /// does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or contains invalid JSON.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            warn!("Config file {} not found, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&content)?;
        Ok(config)
    }
}
