//! # Sitenav
//!
//! Site navigation menu and theme preferences for a small static site.
//!
//! ## Features
//!
//! - **Navigation tree**: Declarative page tree validated at load time
//! - **Active page tracking**: Current link marked, ancestor folders opened
//! - **Theme persistence**: Light/dark theme honoring the OS preference
//! - **Style switching**: Registry of stylesheets with a dropdown switcher
//!
//! ## Modules
//!
//! - [`nav`]: Navigation model, view registry and active-state tracking
//! - [`theme`]: Theme/style preferences and the theme controller
//! - [`config`]: TOML configuration with environment overrides
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use sitenav::nav::{set_active, site, NavTree, NavView};
//! use sitenav::theme::{HeadlessDocument, MemoryStorage, StyleRegistry, Theme, ThemeController};
//!
//! let tree = Arc::new(NavTree::from_raw(site::default_pages()).unwrap());
//! let mut view = NavView::from_tree(tree);
//! set_active(&mut view, "RMBiVD");
//!
//! let mut themes = ThemeController::new(
//!     MemoryStorage::new(),
//!     HeadlessDocument::new().prefers_dark(true),
//!     StyleRegistry::default(),
//! );
//! assert_eq!(themes.init_theme_toggle().unwrap(), Theme::Dark);
//! assert_eq!(themes.toggle_theme(), Theme::Light);
//! ```

pub mod config;
pub mod nav;
pub mod theme;

// Re-export top-level types for convenience
pub use nav::{
    set_active, ActiveOutcome, EntryId, EntryState, Label, Location, NavError, NavNode, NavTree,
    NavView, RawNavNode, ViewEntry,
};

pub use theme::{
    DropdownEvent, HeadlessDocument, PreferenceStorage, StyleRegistry, Theme, ThemeController,
    ThemeDocument, ThemeError, ThemePreferenceStore, Translations,
};

pub use config::{
    Config, ConfigError, LoggingConfig, NavigationConfig, PreferencesConfig, StylesConfig,
};
