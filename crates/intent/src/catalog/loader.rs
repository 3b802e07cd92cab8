//! YAML catalog loading.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use super::error::Result;
use super::types::{Intent, IntentCatalog};

/// Top-level YAML document: `intents: [...]`.
#[derive(Debug, Deserialize)]
struct CatalogFile {
    intents: Vec<Intent>,
}

impl IntentCatalog {
    /// Parse and validate a catalog from YAML text.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let file: CatalogFile = serde_yaml::from_str(yaml)?;
        Self::new(file.intents)
    }

    /// Read, parse and validate a catalog file.
    pub fn load_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        let catalog = Self::from_yaml_str(&raw)?;
        info!(path = %path.display(), intents = catalog.len(), "loaded intent catalog");
        Ok(catalog)
    }

    /// Serialize back to the YAML shape accepted by [`from_yaml_str`](Self::from_yaml_str).
    pub fn to_yaml_string(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}
