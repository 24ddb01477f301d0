//! DOM-backed theme document and location

use sitenav::nav::Location;
use sitenav::theme::{ControlId, Theme, ThemeDocument};
use wasm_bindgen::JsCast;

/// Attribute on `<html>` carrying the theme
const THEME_ATTRIBUTE: &str = "data-theme";

/// Id of the swappable `<link rel="stylesheet">`
const STYLESHEET_LINK_ID: &str = "theme-stylesheet";

/// The live browser document
pub struct DomDocument {
    window: web_sys::Window,
    document: web_sys::Document,
}

impl DomDocument {
    /// `None` outside a browser context
    pub fn new() -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;
        Some(Self { window, document })
    }

    fn header(&self) -> Option<web_sys::Element> {
        self.document.query_selector("header").ok().flatten()
    }
}

impl ThemeDocument for DomDocument {
    fn has_header(&self) -> bool {
        self.header().is_some()
    }

    fn control_exists(&self, control: ControlId) -> bool {
        self.document
            .get_element_by_id(control.element_id())
            .is_some()
    }

    fn create_control(&mut self, control: ControlId) {
        let Some(header) = self.header() else {
            return;
        };
        let button = match self.document.create_element("button") {
            Ok(button) => button,
            Err(e) => {
                web_sys::console::error_1(&format!("Failed to create control: {:?}", e).into());
                return;
            }
        };

        button.set_id(control.element_id());
        button.set_class_name("theme-toggle");
        let _ = button.set_attribute("type", "button");
        button.set_text_content(Some(control.glyph()));
        if let Err(e) = header.append_child(&button) {
            web_sys::console::error_1(&format!("Failed to append control: {:?}", e).into());
        }
    }

    fn theme(&self) -> Option<Theme> {
        self.document
            .document_element()?
            .get_attribute(THEME_ATTRIBUTE)?
            .parse()
            .ok()
    }

    fn set_theme(&mut self, theme: Theme) {
        if let Some(root) = self.document.document_element() {
            let _ = root.set_attribute(THEME_ATTRIBUTE, theme.as_str());
        }
    }

    fn has_stylesheet_link(&self) -> bool {
        self.document.get_element_by_id(STYLESHEET_LINK_ID).is_some()
    }

    fn set_stylesheet_href(&mut self, url: &str) {
        let link = self
            .document
            .get_element_by_id(STYLESHEET_LINK_ID)
            .and_then(|el| el.dyn_into::<web_sys::HtmlLinkElement>().ok());
        if let Some(link) = link {
            link.set_href(url);
        }
    }

    fn prefers_dark_scheme(&self) -> bool {
        matches!(
            self.window.match_media("(prefers-color-scheme: dark)"),
            Ok(Some(query)) if query.matches()
        )
    }
}

/// Writes navigation intent to `window.location.hash`
#[derive(Debug, Clone, Copy, Default)]
pub struct HashLocation;

impl HashLocation {
    /// Current fragment, including the leading `#`
    pub fn current() -> String {
        web_sys::window()
            .and_then(|w| w.location().hash().ok())
            .unwrap_or_default()
    }
}

impl Location for HashLocation {
    fn set_fragment(&mut self, fragment: &str) {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().set_hash(fragment) {
                web_sys::console::error_1(&format!("Failed to set location hash: {:?}", e).into());
            }
        }
    }
}
