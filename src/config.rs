//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::nav::{site, NavError, NavTree, RawNavNode};
use crate::theme::{FileStorage, StyleEntry, StyleRegistry, DEFAULT_STYLE};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub navigation: NavigationConfig,

    #[serde(default)]
    pub styles: StylesConfig,

    #[serde(default)]
    pub preferences: PreferencesConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Navigation tree configuration
#[derive(Debug, Clone, Deserialize)]
pub struct NavigationConfig {
    /// Page tree in display order; the built-in site when omitted
    #[serde(default = "site::default_pages")]
    pub pages: Vec<RawNavNode>,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            pages: site::default_pages(),
        }
    }
}

impl NavigationConfig {
    /// Validated tree built from the configured pages
    pub fn tree(&self) -> Result<NavTree, NavError> {
        NavTree::from_raw(self.pages.clone())
    }
}

/// Style registry configuration
#[derive(Debug, Clone, Deserialize)]
pub struct StylesConfig {
    #[serde(default = "default_style_key")]
    pub default_style: String,

    #[serde(default = "default_style_entries")]
    pub entries: Vec<StyleEntry>,
}

fn default_style_key() -> String {
    DEFAULT_STYLE.to_string()
}

fn default_style_entries() -> Vec<StyleEntry> {
    StyleRegistry::default()
        .iter()
        .map(|(key, sheet)| StyleEntry {
            key: key.to_string(),
            name: sheet.name.clone(),
            url: sheet.url.clone(),
        })
        .collect()
}

impl Default for StylesConfig {
    fn default() -> Self {
        Self {
            default_style: default_style_key(),
            entries: default_style_entries(),
        }
    }
}

impl StylesConfig {
    pub fn registry(&self) -> StyleRegistry {
        self.entries.iter().cloned().collect()
    }
}

/// Preference persistence configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PreferencesConfig {
    /// Preferences file; platform config dir when unset
    pub path: Option<String>,
}

impl PreferencesConfig {
    pub fn storage_path(&self) -> PathBuf {
        self.path
            .as_ref()
            .map(PathBuf::from)
            .or_else(FileStorage::default_path)
            .unwrap_or_else(|| PathBuf::from("./sitenav_preferences.json"))
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    ///
    /// The navigation tree and style settings are validated here so a bad
    /// config fails at startup rather than when the menu is built.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::parse(&content).map_err(|e| match e {
            ConfigError::Parse { error, .. } => ConfigError::Parse {
                path: path.to_path_buf(),
                error,
            },
            other => other,
        })
    }

    /// Parse and validate configuration text
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content).map_err(|e| ConfigError::Parse {
            path: PathBuf::new(),
            error: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Check the navigation tree and the default style
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.navigation.tree()?;
        if !self.styles.registry().contains(&self.styles.default_style) {
            return Err(ConfigError::UnknownDefaultStyle(
                self.styles.default_style.clone(),
            ));
        }
        Ok(())
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("sitenav").join("config.toml")),
            Some(PathBuf::from("./sitenav.toml")),
        ];

        for path_opt in config_paths.iter().flatten() {
            if path_opt.exists() {
                match Self::load_with_env(path_opt) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path_opt);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path_opt, e);
                    }
                }
            }
        }

        tracing::info!("Using default config with environment overrides");
        Self::from_env()
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(path) = std::env::var("SITENAV_PREFERENCES_PATH") {
            self.preferences.path = Some(path);
        }

        if let Ok(level) = std::env::var("SITENAV_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("SITENAV_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },

    #[error("Invalid navigation tree: {0}")]
    Navigation(#[from] NavError),

    #[error("Default style '{0}' is not in the style registry")]
    UnknownDefaultStyle(String),
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Sitenav Configuration
#
# Environment variables override these settings:
# - SITENAV_PREFERENCES_PATH
# - SITENAV_LOG_LEVEL
# - SITENAV_LOG_FORMAT

[styles]
# Style applied when no valid preference is stored
default_style = "default"

[[styles.entries]]
key = "default"
name = "Default"
url = "css/themes/default/main.css"

[preferences]
# Where theme/style preferences are persisted
# path = "~/.config/sitenav/preferences.json"

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"

# Navigation pages replace the built-in site when present.
# Each page has exactly one of text_key/text and exactly one of file/children.
#
# [[navigation.pages]]
# name = "home"
# text_key = "nav_home"
# file = "html/home.html"
# icon = "images/home_16x16.png"
#
# [[navigation.pages]]
# name = "guides"
# text = "Guides"
#
# [[navigation.pages.children]]
# name = "setup"
# text = "Setup"
# file = "html/setup.html"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_generated_config_parses() {
        let config = Config::parse(&generate_default_config()).unwrap();
        assert_eq!(config.styles.default_style, "default");
        assert_eq!(config.styles.registry().len(), 1);
        assert_eq!(config.logging.level, "info");
        // No pages configured: built-in site
        assert_eq!(config.navigation.tree().unwrap().leaf_count(), 10);
    }

    #[test]
    fn test_custom_pages() {
        let config = Config::parse(
            r#"
[[navigation.pages]]
name = "A"
text = "A"
file = "a.html"

[[navigation.pages]]
name = "B"
text_key = "nav_b"

[[navigation.pages.children]]
name = "C"
text = "C"
file = "c.html"
"#,
        )
        .unwrap();

        let tree = config.navigation.tree().unwrap();
        assert_eq!(tree.node_count(), 3);
        assert!(tree.page_info("B").unwrap().has_direct_child("C"));
    }

    #[test]
    fn test_malformed_page_fails_load() {
        let err = Config::parse(
            r#"
[[navigation.pages]]
name = "A"
text = "A"
"#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Navigation(NavError::MalformedNode { .. })));
    }

    #[test]
    fn test_unknown_default_style_rejected() {
        let err = Config::parse("[styles]\ndefault_style = \"neon\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::UnknownDefaultStyle(key) if key == "neon"));
    }

    #[test]
    fn test_load_reports_path() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("sitenav.toml");
        std::fs::write(&path, "[logging\n").unwrap();

        match Config::load(&path) {
            Err(ConfigError::Parse { path: reported, .. }) => assert_eq!(reported, path),
            other => panic!("expected parse error, got {:?}", other),
        }
        assert!(matches!(
            Config::load(&temp_dir.path().join("missing.toml")),
            Err(ConfigError::Io { .. })
        ));
    }

    #[test]
    fn test_preferences_path_override() {
        let prefs = PreferencesConfig {
            path: Some("/tmp/prefs.json".to_string()),
        };
        assert_eq!(prefs.storage_path(), PathBuf::from("/tmp/prefs.json"));
    }
}
