//! Widget configuration, read from TOML. Every field has a default, so an
//! empty document is a valid configuration.
//!
//! ```toml
//! dataset = "fragrance_data.json"
//!
//! [search]
//! threshold = 0.1
//! case_sensitive = false
//! location = 0
//! distance = 100
//!
//! [display]
//! input_id = "searchInput"
//! button_id = "searchButton"
//! results_id = "results"
//! empty_message = "No fragrances found. Try a different search!"
//! link_text = "View Details"
//! ```

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::index::IndexOptions;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CatalogConfig {
    /// Location of the dataset, relative to the page.
    pub dataset: String,
    pub search: IndexOptions,
    pub display: DisplayOptions,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            dataset: "fragrance_data.json".to_string(),
            search: IndexOptions::default(),
            display: DisplayOptions::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DisplayOptions {
    pub input_id: String,
    pub button_id: String,
    pub results_id: String,
    /// Shown instead of cards when nothing matches.
    pub empty_message: String,
    pub link_text: String,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            input_id: "searchInput".to_string(),
            button_id: "searchButton".to_string(),
            results_id: "results".to_string(),
            empty_message: "No fragrances found. Try a different search!".to_string(),
            link_text: "View Details".to_string(),
        }
    }
}

impl CatalogConfig {
    /// Parse from TOML string
    pub fn parse(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse catalog config: {e}"))?;
        config.validate()?;
        Ok(config)
    }

    #[cfg(feature = "native")]
    pub fn from_path(path: &std::path::Path) -> Result<Self> {
        use anyhow::Context;

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("failed to parse {}", path.display()))
    }

    fn validate(&self) -> Result<()> {
        let threshold = self.search.threshold;
        if !(0.0..=1.0).contains(&threshold) {
            anyhow::bail!("search.threshold must be between 0.0 and 1.0, got {threshold}");
        }
        Ok(())
    }
}
