//! UI Components
//!
//! Leptos components for the site shell.

pub mod nav_menu;
pub mod page_frame;
pub mod theme_controls;

pub use nav_menu::NavMenu;
pub use page_frame::PageFrame;
pub use theme_controls::ThemeControls;
