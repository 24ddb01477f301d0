//! State Management
//!
//! Reactive navigation and theme state.

pub mod nav;
pub mod theme;

pub use nav::{init_hash_routing, provide_nav_state, NavState};
pub use theme::{provide_theme_state, ThemeState};
