//! App Root Component
//!
//! Site shell with the header controls, navigation menu and page frame.

use leptos::*;
use std::sync::Arc;

use sitenav::nav::{site, NavTree};
use sitenav::theme::StyleRegistry;

use crate::components::{NavMenu, PageFrame, ThemeControls};
use crate::state::{init_hash_routing, provide_nav_state, provide_theme_state};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    let tree = match NavTree::from_raw(site::default_pages()) {
        Ok(tree) => tree,
        Err(e) => {
            web_sys::console::error_1(&format!("Invalid navigation tree: {}", e).into());
            return view! { <BrokenNavigation message=e.to_string() /> }.into_view();
        }
    };

    let nav = provide_nav_state(Arc::new(tree));
    provide_theme_state(StyleRegistry::default());
    init_hash_routing(nav);

    view! {
        <header class="site-header">
            <a href="#" class="site-title">"Sitenav"</a>
            <ThemeControls />
        </header>

        <div class="site-layout">
            <aside class="site-sidebar">
                <NavMenu />
            </aside>

            <main class="site-content">
                <PageFrame />
            </main>
        </div>
    }
    .into_view()
}

/// Shown instead of the shell when the page tree is malformed
#[component]
fn BrokenNavigation(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="nav-error">
            <h1>"Navigation unavailable"</h1>
            <p>{message}</p>
        </div>
    }
}
