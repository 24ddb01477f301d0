//! Theme State
//!
//! Owns the core `ThemeController` bound to the live document and mirrors
//! its state into signals for rendering.

use leptos::*;
use std::cell::RefCell;
use std::rc::Rc;

use sitenav::theme::{DropdownEvent, StyleDropdown, StyleRegistry, Theme, ThemeController};

use crate::dom::{DomDocument, JsTranslations, LocalStorage};

pub type DomThemeController = ThemeController<LocalStorage, DomDocument>;

/// Theme state provided to all components
#[derive(Clone)]
pub struct ThemeState {
    /// `None` when there is no document to drive
    controller: Option<Rc<RefCell<DomThemeController>>>,
    /// Theme applied to the document
    pub theme: RwSignal<Theme>,
    /// Style dropdown, once the switcher is initialized
    pub dropdown: RwSignal<Option<StyleDropdown>>,
}

/// Create the controller and provide the state to the component tree
pub fn provide_theme_state(styles: StyleRegistry) -> ThemeState {
    let controller = match DomDocument::new() {
        Some(document) => Some(Rc::new(RefCell::new(
            ThemeController::new(LocalStorage, document, styles).with_translations(JsTranslations),
        ))),
        None => {
            web_sys::console::error_1(&"No document, theme controls disabled".into());
            None
        }
    };

    let state = ThemeState {
        controller,
        theme: create_rw_signal(Theme::default()),
        dropdown: create_rw_signal(None),
    };

    provide_context(state.clone());
    state
}

impl ThemeState {
    /// Run the controller's startup once the header is in the DOM
    pub fn init(&self) {
        if let Some(controller) = &self.controller {
            let result = controller.borrow_mut().init_theme_toggle();
            if let Err(e) = result {
                web_sys::console::error_1(&format!("Theme controls unavailable: {}", e).into());
            }
        }
        self.sync();
    }

    /// Theme toggle click
    pub fn toggle_theme(&self) {
        if let Some(controller) = &self.controller {
            controller.borrow_mut().toggle_theme();
        }
        self.sync();
    }

    /// Style switcher click (button, item or outside)
    pub fn dropdown_event(&self, event: DropdownEvent) {
        if let Some(controller) = &self.controller {
            controller.borrow_mut().handle_dropdown(event);
        }
        self.sync();
    }

    pub fn is_dropdown_open(&self) -> bool {
        self.dropdown
            .with_untracked(|dropdown| dropdown.as_ref().is_some_and(|d| d.is_open()))
    }

    fn sync(&self) {
        let Some(controller) = &self.controller else {
            return;
        };
        let (theme, dropdown) = {
            let controller = controller.borrow();
            (controller.theme(), controller.dropdown().cloned())
        };
        self.theme.set(theme);
        self.dropdown.set(dropdown);
    }
}
