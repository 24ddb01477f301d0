//! Active page tracking
//!
//! Keeps the view's presentation state in step with the current page.
//!
//! # Algorithm
//!
//! 1. Flat pass over every registry entry, in registry order. A folder whose
//!    node has a *direct* child named after the page is forced open. A link is
//!    marked current iff its node carries the page's name. Folders never get
//!    an active marker. Entries do not read each other's updated state, so the
//!    result does not depend on order.
//! 2. From each link marked current in step 1, walk the parent chain and open
//!    every enclosing folder. Step 1 only reaches the immediate parent; this
//!    walk covers the grandparents of pages nested two or more levels deep.
//!
//! A page name that matches nothing clears every link and leaves folders as
//! the user left them.

use super::view::{EntryId, EntryState, NavView};

/// What a [`set_active`] pass changed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActiveOutcome {
    /// Link now marked as the current page
    pub current: Option<EntryId>,
    /// Folders forced open by this pass, in registry order
    pub expanded: Vec<EntryId>,
}

/// Mark `page` as the current page and open its ancestors
pub fn set_active(view: &mut NavView, page: &str) -> ActiveOutcome {
    let tree = std::sync::Arc::clone(view.tree());
    let mut outcome = ActiveOutcome::default();
    let mut current_links = Vec::new();

    for entry in view.entries_mut().iter_mut() {
        let Some(node) = tree.get(&entry.node) else {
            continue;
        };

        match &mut entry.state {
            EntryState::Folder { expanded } => {
                if node.has_direct_child(page) {
                    *expanded = true;
                    outcome.expanded.push(entry.id);
                }
            }
            EntryState::Link { current } => {
                *current = node.name == page;
                if *current {
                    current_links.push(entry.id);
                }
            }
        }
    }

    for link in &current_links {
        expand_ancestors(view, *link, &mut outcome.expanded);
    }
    outcome.expanded.sort();
    outcome.expanded.dedup();
    outcome.current = current_links.first().copied();

    match outcome.current {
        Some(id) => tracing::debug!(
            "Active page '{}' at entry {}, {} folders opened",
            page,
            id.index(),
            outcome.expanded.len()
        ),
        None => tracing::debug!("Active page '{}' not in navigation", page),
    }

    outcome
}

fn expand_ancestors(view: &mut NavView, link: EntryId, opened: &mut Vec<EntryId>) {
    let mut parent = view.entry(link).and_then(|entry| entry.parent);
    while let Some(folder) = parent {
        let Some(entry) = view.entries_mut().get_mut(folder.index()) else {
            break;
        };
        if let EntryState::Folder { expanded } = &mut entry.state {
            *expanded = true;
        }
        opened.push(folder);
        parent = entry.parent;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::model::{Label, NavNode, NavTree};
    use std::sync::Arc;

    fn text(s: &str) -> Label {
        Label::Text(s.to_string())
    }

    /// `{A, B:[C, D]}`
    fn simple_view() -> NavView {
        let tree = NavTree::new(vec![
            NavNode::page("A", text("A"), "a.html"),
            NavNode::folder(
                "B",
                text("B"),
                vec![
                    NavNode::page("C", text("C"), "c.html"),
                    NavNode::page("D", text("D"), "d.html"),
                ],
            ),
        ])
        .unwrap();
        NavView::from_tree(Arc::new(tree))
    }

    /// `{top:[x, mid:[deep]], other:[y]}`
    fn nested_view() -> NavView {
        let tree = NavTree::new(vec![
            NavNode::folder(
                "top",
                text("Top"),
                vec![
                    NavNode::page("x", text("X"), "x.html"),
                    NavNode::folder(
                        "mid",
                        text("Mid"),
                        vec![NavNode::page("deep", text("Deep"), "deep.html")],
                    ),
                ],
            ),
            NavNode::folder("other", text("Other"), vec![NavNode::page("y", text("Y"), "y.html")]),
        ])
        .unwrap();
        NavView::from_tree(Arc::new(tree))
    }

    fn state_of(view: &NavView, name: &str) -> EntryState {
        view.entry(view.find(name).unwrap()).unwrap().state
    }

    #[test]
    fn test_scenario_child_page() {
        let mut view = simple_view();
        let outcome = set_active(&mut view, "C");

        assert_eq!(state_of(&view, "C"), EntryState::Link { current: true });
        assert_eq!(state_of(&view, "B"), EntryState::Folder { expanded: true });
        assert_eq!(state_of(&view, "A"), EntryState::Link { current: false });
        assert_eq!(state_of(&view, "D"), EntryState::Link { current: false });
        assert_eq!(outcome.current, view.find("C"));
        assert_eq!(outcome.expanded, vec![view.find("B").unwrap()]);
    }

    #[test]
    fn test_idempotent() {
        let mut view = simple_view();
        set_active(&mut view, "D");
        let first: Vec<_> = view.entries().to_vec();
        set_active(&mut view, "D");
        assert_eq!(view.entries(), first.as_slice());
    }

    #[test]
    fn test_switching_pages_moves_marker() {
        let mut view = simple_view();
        set_active(&mut view, "C");
        set_active(&mut view, "A");

        let current: Vec<_> = view.entries().iter().filter(|e| e.is_current()).collect();
        assert_eq!(current.len(), 1);
        assert_eq!(current[0].id, view.find("A").unwrap());
        assert_eq!(view.current(), view.find("A"));
        // The folder opened for C stays open
        assert!(view.entry(view.find("B").unwrap()).unwrap().is_expanded());
    }

    #[test]
    fn test_unknown_page_clears_links_keeps_folders() {
        let mut view = simple_view();
        set_active(&mut view, "C");
        let b = view.find("B").unwrap();
        view.toggle(b);

        let outcome = set_active(&mut view, "nowhere");
        assert_eq!(outcome, ActiveOutcome::default());
        assert!(view.entries().iter().all(|e| !e.is_current()));
        assert_eq!(view.current(), None);
        assert!(!view.entry(b).unwrap().is_expanded());
    }

    #[test]
    fn test_every_direct_child_opens_its_folder() {
        let tree = Arc::clone(nested_view().tree());

        for folder in crate::nav::lookup::walk(tree.roots()).filter(|n| n.is_folder()) {
            for child in folder.children() {
                let mut fresh = NavView::from_tree(Arc::clone(&tree));
                set_active(&mut fresh, &child.name);
                assert!(
                    fresh.entry(fresh.find(&folder.name).unwrap()).unwrap().content_visible(),
                    "{} should open for {}",
                    folder.name,
                    child.name
                );
            }
        }
    }

    #[test]
    fn test_deep_page_opens_all_ancestors() {
        let mut view = nested_view();
        let outcome = set_active(&mut view, "deep");

        assert!(view.entry(view.find("mid").unwrap()).unwrap().is_expanded());
        assert!(view.entry(view.find("top").unwrap()).unwrap().is_expanded());
        assert!(!view.entry(view.find("other").unwrap()).unwrap().is_expanded());
        assert!(view.is_visible(view.find("deep").unwrap()));
        assert_eq!(
            outcome.expanded,
            vec![view.find("top").unwrap(), view.find("mid").unwrap()]
        );
    }

    #[test]
    fn test_folder_name_never_marked_current() {
        let mut view = nested_view();
        let outcome = set_active(&mut view, "mid");

        assert_eq!(outcome.current, None);
        assert!(view.entries().iter().all(|e| !e.is_current()));
        // "mid" is a direct child of "top"
        assert!(view.entry(view.find("top").unwrap()).unwrap().is_expanded());
        assert!(!view.entry(view.find("mid").unwrap()).unwrap().is_expanded());
    }
}
