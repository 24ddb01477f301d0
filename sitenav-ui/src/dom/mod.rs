//! Browser Host Bindings
//!
//! `web-sys` implementations of the seams the core library exposes:
//! preference storage, the theme document, the translation collaborator and
//! the location fragment.

pub mod document;
pub mod storage;
pub mod translations;

pub use document::{DomDocument, HashLocation};
pub use storage::LocalStorage;
pub use translations::JsTranslations;
