//! Bridge to the page's translation script

use sitenav::theme::{ThemeError, ThemeResult, Translations};
use wasm_bindgen::{JsCast, JsValue};

/// Calls `window.language.applyTranslations()`
#[derive(Debug, Clone, Copy, Default)]
pub struct JsTranslations;

impl JsTranslations {
    /// `(window.language, window.language.applyTranslations)`
    fn apply_fn() -> Option<(JsValue, js_sys::Function)> {
        let window: JsValue = web_sys::window()?.into();
        let language = js_sys::Reflect::get(&window, &JsValue::from_str("language")).ok()?;
        if language.is_undefined() || language.is_null() {
            return None;
        }
        let apply = js_sys::Reflect::get(&language, &JsValue::from_str("applyTranslations"))
            .ok()?
            .dyn_into::<js_sys::Function>()
            .ok()?;
        Some((language, apply))
    }
}

impl Translations for JsTranslations {
    fn apply_translations(&mut self) -> ThemeResult<()> {
        let (language, apply) = Self::apply_fn().ok_or_else(|| {
            ThemeError::MissingCollaborator("window.language.applyTranslations".to_string())
        })?;
        apply.call0(&language).map(|_| ()).map_err(|e| {
            ThemeError::MissingCollaborator(format!("applyTranslations threw: {:?}", e))
        })
    }
}
