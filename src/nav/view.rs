//! Navigation view registry
//!
//! Materializes a [`NavTree`] into a flat registry of interactive entries:
//! one [`ViewEntry`] per model node, in display order. Entries are addressed
//! by opaque [`EntryId`] handles so the controllers never depend on a
//! particular rendering technology; a host (the browser frontend, the CLI
//! outline) renders from the registry and feeds user input back through
//! [`NavView::toggle`] and [`NavView::activate`].
//!
//! # Registry layout
//!
//! ```text
//! a            -> [0] Link   parent=None
//! b/           -> [1] Folder parent=None
//!   c          -> [2] Link   parent=Some(1)
//!   d          -> [3] Link   parent=Some(1)
//! ```

use std::sync::Arc;

use super::model::{NavNode, NavTree, NodePath};

/// Opaque handle to one registry entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryId(usize);

impl EntryId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Presentation state of an entry
///
/// A folder's content visibility and its `aria-expanded` attribute are the
/// same bit, as are a link's active marker and `aria-current`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryState {
    Link { current: bool },
    Folder { expanded: bool },
}

/// Runtime record pairing a model node with its rendered control
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewEntry {
    pub id: EntryId,
    /// Back-reference into the model; the view never mutates the model
    pub node: NodePath,
    /// Enclosing folder entry, `None` at the top level
    pub parent: Option<EntryId>,
    /// Fragment target for links, `None` for folders
    pub href: Option<String>,
    pub state: EntryState,
}

impl ViewEntry {
    pub fn is_folder(&self) -> bool {
        matches!(self.state, EntryState::Folder { .. })
    }

    pub fn depth(&self) -> usize {
        self.node.depth()
    }

    /// Link carries the active marker
    pub fn is_current(&self) -> bool {
        matches!(self.state, EntryState::Link { current: true })
    }

    pub fn is_expanded(&self) -> bool {
        matches!(self.state, EntryState::Folder { expanded: true })
    }

    /// Whether the folder's content container is shown
    pub fn content_visible(&self) -> bool {
        self.is_expanded()
    }
}

/// Location collaborator: receives navigation intent as a fragment
///
/// The router behind it is expected to answer with `set_active`.
pub trait Location {
    fn set_fragment(&mut self, fragment: &str);
}

/// Fragment identifier for a page name
pub fn page_fragment(name: &str) -> String {
    format!("#{}", urlencoding::encode(name))
}

/// Page name encoded in a location fragment, `None` when empty
pub fn fragment_to_page(fragment: &str) -> Option<String> {
    let raw = fragment.strip_prefix('#').unwrap_or(fragment);
    if raw.is_empty() {
        return None;
    }
    match urlencoding::decode(raw) {
        Ok(decoded) => Some(decoded.into_owned()),
        Err(_) => Some(raw.to_string()),
    }
}

/// Registry of view entries built from one navigation tree
#[derive(Debug, Clone)]
pub struct NavView {
    tree: Arc<NavTree>,
    entries: Vec<ViewEntry>,
}

impl NavView {
    /// Empty registry over `tree`; call [`NavView::build`] to populate
    pub fn new(tree: Arc<NavTree>) -> Self {
        Self {
            tree,
            entries: Vec::new(),
        }
    }

    /// Registry with every node of `tree` built
    pub fn from_tree(tree: Arc<NavTree>) -> Self {
        let mut view = Self::new(tree);
        view.build();
        view
    }

    /// Append one entry per tree node, folders before their children
    ///
    /// Not idempotent: building twice registers every node twice.
    /// Returns the number of entries appended.
    pub fn build(&mut self) -> usize {
        let before = self.entries.len();
        let tree = Arc::clone(&self.tree);
        self.build_nodes(tree.roots(), None, None);

        let added = self.entries.len() - before;
        tracing::debug!("Built navigation view: {} entries", added);
        added
    }

    fn build_nodes(&mut self, nodes: &[NavNode], base: Option<&NodePath>, parent: Option<EntryId>) {
        for (index, node) in nodes.iter().enumerate() {
            let path = match base {
                Some(base) => base.child(index),
                None => NodePath::root(index),
            };
            let id = EntryId(self.entries.len());

            if node.is_folder() {
                self.entries.push(ViewEntry {
                    id,
                    node: path.clone(),
                    parent,
                    href: None,
                    state: EntryState::Folder { expanded: false },
                });
                self.build_nodes(node.children(), Some(&path), Some(id));
            } else {
                self.entries.push(ViewEntry {
                    id,
                    node: path,
                    parent,
                    href: Some(page_fragment(&node.name)),
                    state: EntryState::Link { current: false },
                });
            }
        }
    }

    pub fn tree(&self) -> &Arc<NavTree> {
        &self.tree
    }

    pub fn entries(&self) -> &[ViewEntry] {
        &self.entries
    }

    pub(crate) fn entries_mut(&mut self) -> &mut [ViewEntry] {
        &mut self.entries
    }

    pub fn entry(&self, id: EntryId) -> Option<&ViewEntry> {
        self.entries.get(id.0)
    }

    /// Model node behind an entry
    pub fn node(&self, id: EntryId) -> Option<&NavNode> {
        self.entry(id).and_then(|entry| self.tree.get(&entry.node))
    }

    /// First entry registered for the node named `name`
    pub fn find(&self, name: &str) -> Option<EntryId> {
        self.entries
            .iter()
            .find(|entry| {
                self.tree
                    .get(&entry.node)
                    .is_some_and(|node| node.name == name)
            })
            .map(|entry| entry.id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry currently marked as the active page
    pub fn current(&self) -> Option<EntryId> {
        self.entries
            .iter()
            .find(|entry| entry.is_current())
            .map(|entry| entry.id)
    }

    /// Folder toggle click: flip the content container and `expanded`
    ///
    /// Returns the new expansion state, or `None` for links and unknown ids.
    pub fn toggle(&mut self, id: EntryId) -> Option<bool> {
        let entry = self.entries.get_mut(id.0)?;
        match &mut entry.state {
            EntryState::Folder { expanded } => {
                *expanded = !*expanded;
                tracing::debug!("Folder {} expanded={}", id.0, expanded);
                Some(*expanded)
            }
            EntryState::Link { .. } => None,
        }
    }

    /// Link activation: hand the fragment to the location collaborator
    ///
    /// Returns `false` for folders and unknown ids.
    pub fn activate(&self, id: EntryId, location: &mut impl Location) -> bool {
        match self.entry(id).and_then(|entry| entry.href.as_deref()) {
            Some(href) => {
                location.set_fragment(href);
                true
            }
            None => false,
        }
    }

    /// Whether every enclosing folder of the entry is expanded
    pub fn is_visible(&self, id: EntryId) -> bool {
        let mut parent = self.entry(id).and_then(|entry| entry.parent);
        while let Some(folder) = parent {
            match self.entry(folder) {
                Some(entry) if entry.is_expanded() => parent = entry.parent,
                _ => return false,
            }
        }
        self.entry(id).is_some()
    }

    /// Entries a reader can currently see, in display order
    pub fn visible_entries(&self) -> impl Iterator<Item = &ViewEntry> + '_ {
        self.entries
            .iter()
            .filter(move |entry| self.is_visible(entry.id))
    }
}
