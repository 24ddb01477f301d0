//! Navigation State
//!
//! Reactive wrapper around the core `NavView` registry, kept in step with the
//! location hash.

use leptos::*;
use std::sync::Arc;

use sitenav::nav::{fragment_to_page, lookup, set_active, NavTree, NavView};

use crate::dom::HashLocation;

/// Navigation state provided to all components
#[derive(Clone, Copy)]
pub struct NavState {
    /// Registry of rendered entries and their presentation state
    pub view: RwSignal<NavView>,
    /// Page the location currently points at
    pub current_page: RwSignal<Option<String>>,
}

/// Build the view for `tree` and provide it to the component tree
pub fn provide_nav_state(tree: Arc<NavTree>) -> NavState {
    let state = NavState {
        view: create_rw_signal(NavView::from_tree(tree)),
        current_page: create_rw_signal(None),
    };

    provide_context(state);
    state
}

impl NavState {
    /// Mark `page` as current and open its folders
    pub fn show_page(&self, page: &str) {
        self.view.update(|view| {
            set_active(view, page);
        });
        self.current_page.set(Some(page.to_string()));
    }

    /// Re-read the location hash and update the menu
    pub fn sync_with_location(&self) {
        let page = self
            .view
            .with_untracked(|view| resolve_page(view.tree(), &HashLocation::current()));
        if let Some(page) = page {
            self.show_page(&page);
        }
    }
}

/// Page named by `fragment`, else the first page of the tree
pub fn resolve_page(tree: &NavTree, fragment: &str) -> Option<String> {
    fragment_to_page(fragment).or_else(|| {
        lookup::walk(tree.roots())
            .find(|node| node.file().is_some())
            .map(|node| node.name.clone())
    })
}

/// Route hash changes to `set_active`, starting with the current hash
pub fn init_hash_routing(state: NavState) {
    state.sync_with_location();
    let _ = window_event_listener(ev::hashchange, move |_| state.sync_with_location());
}

#[cfg(test)]
mod tests {
    use super::*;
    use sitenav::nav::site;

    #[test]
    fn test_resolve_page_from_fragment() {
        let tree = NavTree::from_raw(site::default_pages()).unwrap();
        assert_eq!(resolve_page(&tree, "#PSPp").as_deref(), Some("PSPp"));
    }

    #[test]
    fn test_resolve_page_defaults_to_first_page() {
        let tree = NavTree::from_raw(site::default_pages()).unwrap();
        assert_eq!(resolve_page(&tree, "").as_deref(), Some("anasayfa"));
        assert_eq!(resolve_page(&tree, "#").as_deref(), Some("anasayfa"));
    }
}
