//! Theme preference persistence
//!
//! Two independent persisted fields, `theme` and `preferred-style`, behind a
//! small key/value [`PreferenceStorage`] seam. Backends:
//!
//! - [`MemoryStorage`]: in-process map (tests, hosts without storage)
//! - [`FileStorage`]: JSON file on disk (the CLI)
//! - [`UnavailableStorage`]: a host that has no storage at all
//!
//! The browser frontend adds a `localStorage` backend of its own.

use serde_json::Value;
use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

use super::error::{StorageError, StorageResult};
use super::types::Theme;

/// Persisted key holding `light` or `dark`
pub const THEME_KEY: &str = "theme";

/// Persisted key holding a style registry key
pub const STYLE_KEY: &str = "preferred-style";

/// Key/value storage for preferences
pub trait PreferenceStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> StorageResult<()>;
}

/// In-memory preference storage
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    values: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: preset a value
    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.values.insert(key.to_string(), value.to_string());
        self
    }
}

impl PreferenceStorage for MemoryStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> StorageResult<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Storage for hosts that have none; every call fails
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableStorage;

impl PreferenceStorage for UnavailableStorage {
    fn get(&self, _key: &str) -> StorageResult<Option<String>> {
        Err(StorageError::Unavailable("no storage backend".to_string()))
    }

    fn set(&mut self, _key: &str, _value: &str) -> StorageResult<()> {
        Err(StorageError::Unavailable("no storage backend".to_string()))
    }
}

/// Preferences kept as a flat JSON object in one file
///
/// The file is re-read on every access so concurrent CLI invocations see
/// each other's writes; the last write wins.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<config dir>/sitenav/preferences.json`, if the platform has one
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("sitenav").join("preferences.json"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> StorageResult<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let content = std::fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        // Non-string values are dropped rather than failing the whole file
        let raw: BTreeMap<String, Value> = serde_json::from_str(&content)?;
        Ok(raw
            .into_iter()
            .filter_map(|(k, v)| match v {
                Value::String(s) => Some((k, s)),
                _ => None,
            })
            .collect())
    }
}

impl PreferenceStorage for FileStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.load()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> StorageResult<()> {
        let mut values = match self.load() {
            Ok(values) => values,
            Err(StorageError::Serialization(e)) => {
                tracing::warn!("Replacing unreadable preferences file {:?}: {}", self.path, e);
                BTreeMap::new()
            }
            Err(e) => return Err(e),
        };
        values.insert(key.to_string(), value.to_string());

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, serde_json::to_string_pretty(&values)?)?;
        Ok(())
    }
}

/// Reads and writes the persisted theme and style
#[derive(Debug, Clone)]
pub struct ThemePreferenceStore<S> {
    storage: S,
}

impl<S: PreferenceStorage> ThemePreferenceStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Read a key, treating a failing backend as "nothing stored"
    fn read(&self, key: &str) -> Option<String> {
        match self.storage.get(key) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!("Failed to read preference '{}': {}", key, e);
                None
            }
        }
    }

    /// Stored theme, only if it is exactly `light` or `dark`
    pub fn stored_theme(&self) -> Option<Theme> {
        self.read(THEME_KEY).and_then(|value| value.parse().ok())
    }

    /// Stored theme, else the OS dark-mode signal, else light
    pub fn preferred_theme(&self, os_prefers_dark: bool) -> Theme {
        self.stored_theme().unwrap_or(if os_prefers_dark {
            Theme::Dark
        } else {
            Theme::Light
        })
    }

    pub fn save_theme(&mut self, theme: Theme) -> StorageResult<()> {
        self.storage.set(THEME_KEY, theme.as_str())
    }

    /// Stored style key, unvalidated
    pub fn saved_style(&self) -> Option<String> {
        self.read(STYLE_KEY).filter(|key| !key.is_empty())
    }

    pub fn save_style(&mut self, key: &str) -> StorageResult<()> {
        self.storage.set(STYLE_KEY, key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_preferred_theme_falls_back_to_os() {
        let store = ThemePreferenceStore::new(MemoryStorage::new());
        assert_eq!(store.preferred_theme(true), Theme::Dark);
        assert_eq!(store.preferred_theme(false), Theme::Light);
    }

    #[test]
    fn test_stored_theme_wins_over_os() {
        let store = ThemePreferenceStore::new(MemoryStorage::new().with(THEME_KEY, "light"));
        assert_eq!(store.preferred_theme(true), Theme::Light);

        let store = ThemePreferenceStore::new(MemoryStorage::new().with(THEME_KEY, "dark"));
        assert_eq!(store.preferred_theme(false), Theme::Dark);
    }

    #[test]
    fn test_invalid_stored_theme_ignored() {
        let store = ThemePreferenceStore::new(MemoryStorage::new().with(THEME_KEY, "DARK"));
        assert_eq!(store.stored_theme(), None);
        assert_eq!(store.preferred_theme(false), Theme::Light);
    }

    #[test]
    fn test_unavailable_storage_degrades() {
        let mut store = ThemePreferenceStore::new(UnavailableStorage);
        assert_eq!(store.preferred_theme(true), Theme::Dark);
        assert_eq!(store.saved_style(), None);
        assert!(store.save_theme(Theme::Dark).is_err());
    }

    #[test]
    fn test_file_storage_persists() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("preferences.json");

        let mut store = ThemePreferenceStore::new(FileStorage::new(&path));
        assert_eq!(store.stored_theme(), None);
        store.save_theme(Theme::Dark).unwrap();
        store.save_style("default").unwrap();

        let reopened = ThemePreferenceStore::new(FileStorage::new(&path));
        assert_eq!(reopened.stored_theme(), Some(Theme::Dark));
        assert_eq!(reopened.saved_style().as_deref(), Some("default"));
    }

    #[test]
    fn test_file_storage_skips_non_string_values() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("preferences.json");
        std::fs::write(&path, r#"{"theme": 3, "preferred-style": "default"}"#).unwrap();

        let storage = FileStorage::new(&path);
        assert_eq!(storage.get(THEME_KEY).unwrap(), None);
        assert_eq!(storage.get(STYLE_KEY).unwrap().as_deref(), Some("default"));
    }

    #[test]
    fn test_corrupt_file_reads_as_empty_preferences() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("preferences.json");
        std::fs::write(&path, "not json").unwrap();

        let store = ThemePreferenceStore::new(FileStorage::new(&path));
        assert!(store.storage().get(THEME_KEY).is_err());
        assert_eq!(store.preferred_theme(true), Theme::Dark);
    }

    #[test]
    fn test_write_replaces_corrupt_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("preferences.json");
        std::fs::write(&path, "not json").unwrap();

        let mut store = ThemePreferenceStore::new(FileStorage::new(&path));
        store.save_theme(Theme::Dark).unwrap();
        store.save_style("paper").unwrap();

        assert_eq!(store.stored_theme(), Some(Theme::Dark));
        assert_eq!(store.saved_style().as_deref(), Some("paper"));
    }
}
