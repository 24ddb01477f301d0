//! Theme controller
//!
//! Wires the header controls to the preference store and the host document.
//! A user choice is persisted first and applied right after, then the
//! translation collaborator runs again. Values resolved at load time are
//! applied without being written back.

use super::document::{ThemeDocument, Translations};
use super::dropdown::{DropdownEvent, StyleDropdown};
use super::error::{ThemeError, ThemeResult};
use super::store::{PreferenceStorage, ThemePreferenceStore};
use super::style::{StyleRegistry, DEFAULT_STYLE};
use super::types::{ControlId, Theme};

/// Drives the theme toggle and the style switcher
pub struct ThemeController<S, D> {
    prefs: ThemePreferenceStore<S>,
    document: D,
    translations: Option<Box<dyn Translations>>,
    styles: StyleRegistry,
    default_style: String,
    switcher: Option<StyleDropdown>,
    toggle_bound: bool,
}

impl<S: PreferenceStorage, D: ThemeDocument> ThemeController<S, D> {
    pub fn new(storage: S, document: D, styles: StyleRegistry) -> Self {
        Self {
            prefs: ThemePreferenceStore::new(storage),
            document,
            translations: None,
            styles,
            default_style: DEFAULT_STYLE.to_string(),
            switcher: None,
            toggle_bound: false,
        }
    }

    /// Builder method: attach the translation collaborator
    pub fn with_translations(mut self, translations: impl Translations + 'static) -> Self {
        self.translations = Some(Box::new(translations));
        self
    }

    /// Builder method: style applied when nothing is stored
    pub fn with_default_style(mut self, key: impl Into<String>) -> Self {
        self.default_style = key.into();
        self
    }

    pub fn document(&self) -> &D {
        &self.document
    }

    pub fn preferences(&self) -> &ThemePreferenceStore<S> {
        &self.prefs
    }

    pub fn styles(&self) -> &StyleRegistry {
        &self.styles
    }

    /// Style dropdown, once the switcher is initialized
    pub fn dropdown(&self) -> Option<&StyleDropdown> {
        self.switcher.as_ref()
    }

    /// Theme currently applied to the document
    pub fn theme(&self) -> Theme {
        self.document.theme().unwrap_or_default()
    }

    /// Whether `init_theme_toggle` has completed
    pub fn is_bound(&self) -> bool {
        self.toggle_bound
    }

    /// Startup: create missing controls, apply the preferred theme, set up
    /// the style switcher
    ///
    /// Safe to call again: existing controls are reused and the switcher is
    /// built only once.
    pub fn init_theme_toggle(&mut self) -> ThemeResult<Theme> {
        if !self.document.has_header() {
            tracing::warn!("Theme controls disabled: document has no header");
            return Err(ThemeError::MissingHost);
        }

        for control in [ControlId::ThemeToggle, ControlId::StyleSwitcher] {
            if !self.document.control_exists(control) {
                self.document.create_control(control);
                tracing::debug!("Created control #{}", control.element_id());
            }
        }

        let theme = self
            .prefs
            .preferred_theme(self.document.prefers_dark_scheme());
        self.apply_theme(theme);

        self.init_style_switcher();

        if !self.toggle_bound {
            self.toggle_bound = true;
            tracing::info!("Theme toggle ready (theme={})", theme);
        }
        Ok(theme)
    }

    /// Set the document-wide theme marker; applying twice changes nothing
    pub fn apply_theme(&mut self, theme: Theme) {
        if self.document.theme() != Some(theme) {
            self.document.set_theme(theme);
        }
    }

    /// Theme toggle click: flip light/dark, persist, apply, re-translate
    pub fn toggle_theme(&mut self) -> Theme {
        let next = match self.document.theme() {
            Some(Theme::Dark) => Theme::Light,
            _ => Theme::Dark,
        };
        self.choose_theme(next);
        next
    }

    /// Persist and apply an explicit theme choice
    pub fn choose_theme(&mut self, theme: Theme) {
        if let Err(e) = self.prefs.save_theme(theme) {
            tracing::warn!("Theme not persisted: {}", e);
        }
        self.apply_theme(theme);
        tracing::debug!("Theme set to {}", theme);
        self.reapply_translations();
    }

    /// Build the style dropdown and apply the saved style
    ///
    /// Returns `false` when the document has no stylesheet link to swap.
    pub fn init_style_switcher(&mut self) -> bool {
        if self.switcher.is_some() {
            return true;
        }
        if !self.document.has_stylesheet_link() {
            tracing::debug!("Style switcher disabled: no stylesheet link");
            return false;
        }

        self.switcher = Some(StyleDropdown::new(
            self.styles
                .iter()
                .map(|(key, sheet)| (key.to_string(), sheet.name.clone())),
        ));

        let saved = self
            .prefs
            .saved_style()
            .unwrap_or_else(|| self.default_style.clone());
        if !self.show_style(&saved) {
            tracing::debug!("Saved style '{}' is not registered, left as-is", saved);
        }
        true
    }

    /// Swap the stylesheet to `key` and persist the choice
    ///
    /// Unknown keys (typically stale stored values) are ignored: no document
    /// change, no write. Returns whether the style was applied.
    pub fn apply_style(&mut self, key: &str) -> bool {
        if !self.styles.contains(key) || !self.document.has_stylesheet_link() {
            return false;
        }
        if let Err(e) = self.prefs.save_style(key) {
            tracing::warn!("Style not persisted: {}", e);
        }
        self.show_style(key)
    }

    fn show_style(&mut self, key: &str) -> bool {
        let Some(sheet) = self.styles.get(key) else {
            return false;
        };
        if !self.document.has_stylesheet_link() {
            return false;
        }

        let url = sheet.url.clone();
        self.document.set_stylesheet_href(&url);
        if let Some(switcher) = self.switcher.as_mut() {
            switcher.mark_active(key);
        }
        tracing::debug!("Style set to {} ({})", key, url);

        self.reapply_translations();
        true
    }

    /// Route a click to the style dropdown, applying a chosen style
    pub fn handle_dropdown(&mut self, event: DropdownEvent) -> Option<String> {
        let chosen = self.switcher.as_mut()?.handle(event)?;
        self.apply_style(&chosen);
        Some(chosen)
    }

    fn reapply_translations(&mut self) {
        match self.translations.as_mut() {
            Some(translations) => {
                if let Err(e) = translations.apply_translations() {
                    tracing::warn!("Re-applying translations failed: {}", e);
                }
            }
            None => tracing::debug!("No translation collaborator, skipping"),
        }
    }
}
