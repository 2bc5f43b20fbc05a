//! Translation key resolution for section labels.

use crate::Result;
use std::collections::HashMap;
use std::path::Path;

/// Resolves translation keys to display strings.
///
/// Keys missing from the loaded catalog resolve to the caller-supplied
/// fallback, so an empty translator is always usable.
#[derive(Debug, Clone, Default)]
pub struct Translator {
    messages: HashMap<String, String>,
}

impl Translator {
    #[must_use]
    pub fn new(messages: HashMap<String, String>) -> Self {
        Self { messages }
    }

    /// Load a catalog from a JSON object of key -> translated string.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or contains invalid JSON.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let messages = serde_json::from_str(&content)?;
        Ok(Self { messages })
    }

    /// Resolve `key`, falling back to `fallback` when untranslated.
    #[must_use]
    pub fn t(&self, key: &str, fallback: &str) -> String {
        self.messages
            .get(key)
            .cloned()
            .unwrap_or_else(|| fallback.to_string())
    }
}
