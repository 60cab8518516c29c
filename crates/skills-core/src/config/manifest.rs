//! Parsed form of `config.yaml`

use serde_json::Value;
use skills_fs::{ConfigStore, NormalizedPath};

use crate::Result;

/// Enabled components and destinations, both ordered and free of duplicates
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    components: Vec<String>,
    destinations: Vec<String>,
}

impl Config {
    /// Build a configuration, dropping repeated entries after their first
    /// occurrence.
    pub fn new<C, D>(components: C, destinations: D) -> Self
    where
        C: IntoIterator,
        C::Item: Into<String>,
        D: IntoIterator,
        D::Item: Into<String>,
    {
        Self {
            components: dedup(components.into_iter().map(Into::into)),
            destinations: dedup(destinations.into_iter().map(Into::into)),
        }
    }

    /// Load the configuration file.
    ///
    /// A missing or blank file yields an empty configuration. Malformed YAML
    /// is an error.
    pub fn load(path: &NormalizedPath) -> Result<Self> {
        let document: Value = ConfigStore::new().load_or_default(path)?;
        Ok(Self::from_value(&document))
    }

    /// Extract the two lists from an untyped document.
    ///
    /// Anything that is not a list of strings is filtered out rather than
    /// rejected.
    ///
    /// # Example
    ///
    /// ```
    /// use skills_core::Config;
    ///
    /// let config = Config::from_value(&serde_json::json!({
    ///     "components": ["git-safety", 7, "git-safety"],
    ///     "destinations": "not-a-list",
    /// }));
    ///
    /// assert_eq!(config.components(), ["git-safety"]);
    /// assert!(config.destinations().is_empty());
    /// ```
    pub fn from_value(document: &Value) -> Self {
        Self::new(
            string_items(document.get("components")),
            string_items(document.get("destinations")),
        )
    }

    pub fn components(&self) -> &[String] {
        &self.components
    }

    pub fn destinations(&self) -> &[String] {
        &self.destinations
    }

    pub fn is_enabled(&self, component: &str) -> bool {
        self.components.iter().any(|c| c == component)
    }
}

fn string_items(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|item| item.as_str().map(str::to_string))
            .collect(),
        _ => Vec::new(),
    }
}

fn dedup(items: impl Iterator<Item = String>) -> Vec<String> {
    let mut seen = Vec::new();
    for item in items {
        if !seen.contains(&item) {
            seen.push(item);
        }
    }
    seen
}
