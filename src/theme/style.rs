//! Style registry
//!
//! Fixed mapping from style key to stylesheet definition. Keys keep their
//! insertion order, which is the order of the switcher's dropdown items.

use serde::{Deserialize, Serialize};

/// Key of the style applied when nothing valid is stored
pub const DEFAULT_STYLE: &str = "default";

/// A selectable stylesheet
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StyleSheet {
    /// Display name in the dropdown
    pub name: String,
    /// Stylesheet reference swapped into the document
    pub url: String,
}

/// One registry entry as written in config
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StyleEntry {
    pub key: String,
    pub name: String,
    pub url: String,
}

/// Ordered `key → StyleSheet` registry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleRegistry {
    entries: Vec<(String, StyleSheet)>,
}

impl StyleRegistry {
    /// Empty registry
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Add or replace a style; a replaced key keeps its position
    pub fn insert(&mut self, key: impl Into<String>, sheet: StyleSheet) {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = sheet,
            None => self.entries.push((key, sheet)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&StyleSheet> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, sheet)| sheet)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &StyleSheet)> + '_ {
        self.entries.iter().map(|(k, sheet)| (k.as_str(), sheet))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for StyleRegistry {
    fn default() -> Self {
        let mut registry = Self::empty();
        registry.insert(
            DEFAULT_STYLE,
            StyleSheet {
                name: "Default".to_string(),
                url: "css/themes/default/main.css".to_string(),
            },
        );
        registry
    }
}

impl FromIterator<StyleEntry> for StyleRegistry {
    fn from_iter<I: IntoIterator<Item = StyleEntry>>(iter: I) -> Self {
        let mut registry = Self::empty();
        for entry in iter {
            registry.insert(
                entry.key,
                StyleSheet {
                    name: entry.name,
                    url: entry.url,
                },
            );
        }
        registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sheet(name: &str) -> StyleSheet {
        StyleSheet {
            name: name.to_string(),
            url: format!("css/themes/{}/main.css", name.to_lowercase()),
        }
    }

    #[test]
    fn test_default_registry() {
        let registry = StyleRegistry::default();
        assert_eq!(registry.len(), 1);
        assert_eq!(
            registry.get(DEFAULT_STYLE).unwrap().url,
            "css/themes/default/main.css"
        );
    }

    #[test]
    fn test_insert_keeps_order_and_replaces() {
        let mut registry = StyleRegistry::default();
        registry.insert("paper", sheet("Paper"));
        registry.insert("retro", sheet("Retro"));
        registry.insert("paper", sheet("Paper2"));

        let keys: Vec<_> = registry.keys().collect();
        assert_eq!(keys, vec!["default", "paper", "retro"]);
        assert_eq!(registry.get("paper").unwrap().name, "Paper2");
        assert!(!registry.contains("missing"));
    }
}
