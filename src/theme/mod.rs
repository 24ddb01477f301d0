//! Theme and Style Preferences
//!
//! Persisted light/dark theme and stylesheet selection, applied at load time
//! and on demand:
//!
//! - **types**: `Theme` and the header control identities
//! - **style**: Registry of selectable stylesheets
//! - **store**: Preference storage backends and `ThemePreferenceStore`
//! - **document**: Host seams (`ThemeDocument`, `Translations`)
//! - **dropdown**: Style switcher state machine
//! - **controller**: `ThemeController` tying it all together
//! - **error**: Error types
//!
//! # Resolution Order
//!
//! ```text
//! stored "light"/"dark" → OS dark-mode signal → light
//! nothing stored → "default"
//! stored style key → that style, or no change when it is not registered
//! ```
//!
//! Resolved values are applied at load time but only written on a user
//! choice.

pub mod controller;
pub mod document;
pub mod dropdown;
pub mod error;
pub mod store;
pub mod style;
pub mod types;

pub use controller::ThemeController;
pub use document::{HeadlessDocument, ThemeDocument, Translations};
pub use dropdown::{DropdownEvent, DropdownItem, DropdownState, StyleDropdown};
pub use error::{StorageError, StorageResult, ThemeError, ThemeResult};
pub use store::{
    FileStorage, MemoryStorage, PreferenceStorage, ThemePreferenceStore, UnavailableStorage,
    STYLE_KEY, THEME_KEY,
};
pub use style::{StyleEntry, StyleRegistry, StyleSheet, DEFAULT_STYLE};
pub use types::{ControlId, Theme};
