//! Navigation Menu Component
//!
//! Renders the navigation registry: folders as collapsible groups, pages as
//! fragment links.

use leptos::*;

use sitenav::nav::{EntryId, Label, NavNode};

use crate::dom::HashLocation;
use crate::state::NavState;

/// Sidebar navigation menu
#[component]
pub fn NavMenu() -> impl IntoView {
    let state = use_context::<NavState>().expect("NavState not found");

    let roots = state.view.with_untracked(|view| {
        view.entries()
            .iter()
            .filter(|entry| entry.parent.is_none())
            .map(|entry| entry.id)
            .collect::<Vec<_>>()
    });

    view! {
        <nav class="site-nav" aria-label="Site">
            <NavItems ids=roots />
        </nav>
    }
}

#[component]
fn NavItems(ids: Vec<EntryId>) -> View {
    ids.into_iter()
        .map(|id| view! { <NavItem id=id /> })
        .collect_view()
}

#[component]
fn NavItem(id: EntryId) -> View {
    let state = use_context::<NavState>().expect("NavState not found");

    let (node, is_folder, children) = state.view.with_untracked(|view| {
        let children = view
            .entries()
            .iter()
            .filter(|entry| entry.parent == Some(id))
            .map(|entry| entry.id)
            .collect::<Vec<_>>();
        (
            view.node(id).cloned(),
            view.entry(id).is_some_and(|entry| entry.is_folder()),
            children,
        )
    });
    let Some(node) = node else {
        return ().into_view();
    };

    if is_folder {
        let expanded = move || {
            state
                .view
                .with(|view| view.entry(id).is_some_and(|entry| entry.is_expanded()))
        };
        let toggle = move |_| {
            state.view.update(|view| {
                view.toggle(id);
            });
        };

        view! {
            <div class="nav-folder">
                <button
                    type="button"
                    class="nav-folder-toggle link"
                    aria-expanded=move || expanded().to_string()
                    on:click=toggle
                >
                    <NavLabel node=node.clone() />
                    <NavIcon node=node.clone() />
                </button>
                <div class="nav-folder-content" hidden=move || !expanded()>
                    <NavItems ids=children />
                </div>
            </div>
        }
        .into_view()
    } else {
        let current = move || {
            state
                .view
                .with(|view| view.entry(id).is_some_and(|entry| entry.is_current()))
        };
        let href = state
            .view
            .with_untracked(|view| view.entry(id).and_then(|entry| entry.href.clone()))
            .unwrap_or_default();
        let navigate = move |ev: ev::MouseEvent| {
            ev.prevent_default();
            state.view.with_untracked(|view| view.activate(id, &mut HashLocation));
        };

        view! {
            <a
                href=href
                class="link"
                class:active=current
                aria-current=move || current().then_some("page")
                on:click=navigate
            >
                <NavIcon node=node.clone() />
                <NavLabel node=node />
            </a>
        }
        .into_view()
    }
}

/// Label text; translation keys are filled in by the translation script
#[component]
fn NavLabel(node: NavNode) -> impl IntoView {
    match node.label {
        Label::Key(key) => view! { <span data-i18n=key.clone()>{key}</span> }.into_view(),
        Label::Text(text) => view! { <span>{text}</span> }.into_view(),
    }
}

/// Decorative icon, loaded lazily
#[component]
fn NavIcon(node: NavNode) -> impl IntoView {
    node.icon.map(|src| {
        view! {
            <img src=src alt="" loading="lazy" decoding="async" class="nav-icon" />
        }
    })
}
