//! Host document seams
//!
//! The theme controller never touches a concrete DOM. It talks to the host
//! through [`ThemeDocument`] (attributes, stylesheet link, header controls,
//! OS color-scheme signal) and [`Translations`] (re-applying translated
//! labels after a visual change).

use super::error::ThemeResult;
use super::types::{ControlId, Theme};

/// The document (and its environment) the theme is applied to
pub trait ThemeDocument {
    /// Whether there is a header to place the controls in
    fn has_header(&self) -> bool;

    fn control_exists(&self, control: ControlId) -> bool;

    /// Append a control to the header
    fn create_control(&mut self, control: ControlId);

    /// Current document-wide theme marker
    fn theme(&self) -> Option<Theme>;

    fn set_theme(&mut self, theme: Theme);

    /// Whether the swappable stylesheet reference exists
    fn has_stylesheet_link(&self) -> bool;

    fn set_stylesheet_href(&mut self, url: &str);

    /// OS/environment dark-mode signal
    fn prefers_dark_scheme(&self) -> bool;
}

/// Translation collaborator
///
/// Must be safe to call repeatedly, at any time after the document exists.
pub trait Translations {
    fn apply_translations(&mut self) -> ThemeResult<()>;
}

impl<F> Translations for F
where
    F: FnMut() -> ThemeResult<()>,
{
    fn apply_translations(&mut self) -> ThemeResult<()> {
        self()
    }
}

/// In-memory document for hosts without a DOM
#[derive(Debug, Clone)]
pub struct HeadlessDocument {
    pub header: bool,
    /// `None` when the document has no stylesheet link
    pub stylesheet_href: Option<String>,
    pub theme: Option<Theme>,
    pub prefers_dark: bool,
    pub controls: Vec<ControlId>,
}

impl HeadlessDocument {
    /// Document with a header and an empty stylesheet link
    pub fn new() -> Self {
        Self {
            header: true,
            stylesheet_href: Some(String::new()),
            theme: None,
            prefers_dark: false,
            controls: Vec::new(),
        }
    }

    /// Builder method: set the OS dark-mode signal
    pub fn prefers_dark(mut self, prefers_dark: bool) -> Self {
        self.prefers_dark = prefers_dark;
        self
    }

    /// Builder method: remove the header
    pub fn without_header(mut self) -> Self {
        self.header = false;
        self
    }

    /// Builder method: remove the stylesheet link
    pub fn without_stylesheet_link(mut self) -> Self {
        self.stylesheet_href = None;
        self
    }

    /// Number of controls with the given identity
    pub fn control_count(&self, control: ControlId) -> usize {
        self.controls.iter().filter(|c| **c == control).count()
    }
}

impl Default for HeadlessDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl ThemeDocument for HeadlessDocument {
    fn has_header(&self) -> bool {
        self.header
    }

    fn control_exists(&self, control: ControlId) -> bool {
        self.controls.contains(&control)
    }

    fn create_control(&mut self, control: ControlId) {
        self.controls.push(control);
    }

    fn theme(&self) -> Option<Theme> {
        self.theme
    }

    fn set_theme(&mut self, theme: Theme) {
        self.theme = Some(theme);
    }

    fn has_stylesheet_link(&self) -> bool {
        self.stylesheet_href.is_some()
    }

    fn set_stylesheet_href(&mut self, url: &str) {
        if let Some(href) = self.stylesheet_href.as_mut() {
            *href = url.to_string();
        }
    }

    fn prefers_dark_scheme(&self) -> bool {
        self.prefers_dark
    }
}
