//! Page Frame Component
//!
//! Shows the content file of the current page.

use leptos::*;

use crate::state::NavState;

/// Content area for the current page
#[component]
pub fn PageFrame() -> impl IntoView {
    let state = use_context::<NavState>().expect("NavState not found");

    let file = move || {
        let page = state.current_page.get()?;
        state.view.with(|view| {
            view.tree()
                .page_info(&page)
                .and_then(|node| node.file().map(String::from))
        })
    };

    view! {
        {move || match file() {
            Some(src) => view! {
                <iframe class="page-frame" src=src title="Page content" />
            }.into_view(),
            None => view! {
                <p class="page-missing" data-i18n="page_not_found">"Page not found"</p>
            }.into_view(),
        }}
    }
}
