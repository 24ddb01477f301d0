//! Navigation model
//!
//! The static, immutable description of the site's page tree:
//! - `NavNode`: a page (leaf) or a folder of further nodes
//! - `Label`: translation key or literal display text
//! - `RawNavNode`: the loosely-typed record read from configuration
//! - `NavTree`: validated root sequence with unique names

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::error::{NavError, NavResult};
use super::lookup;

/// Display label of a node
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Label {
    /// Key resolved by the translation collaborator
    Key(String),
    /// Literal text shown as-is
    Text(String),
}

impl Label {
    /// Translation key, if this label is translated
    pub fn key(&self) -> Option<&str> {
        match self {
            Label::Key(key) => Some(key),
            Label::Text(_) => None,
        }
    }

    /// Text to show before (or without) translation
    pub fn fallback_text(&self) -> &str {
        match self {
            Label::Key(key) | Label::Text(key) => key,
        }
    }
}

/// Leaf-xor-folder discriminator
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    /// A page with a content location
    Leaf { file: String },
    /// An expandable group, children in display order
    Folder { children: Vec<NavNode> },
}

/// One entry in the navigation tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavNode {
    /// Unique identifier, also used as the page's fragment
    pub name: String,
    pub label: Label,
    /// Optional decorative icon reference
    pub icon: Option<String>,
    pub kind: NodeKind,
}

impl NavNode {
    /// Create a page node
    pub fn page(name: impl Into<String>, label: Label, file: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label,
            icon: None,
            kind: NodeKind::Leaf { file: file.into() },
        }
    }

    /// Create a folder node
    pub fn folder(name: impl Into<String>, label: Label, children: Vec<NavNode>) -> Self {
        Self {
            name: name.into(),
            label,
            icon: None,
            kind: NodeKind::Folder { children },
        }
    }

    /// Builder method: set icon
    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn is_folder(&self) -> bool {
        matches!(self.kind, NodeKind::Folder { .. })
    }

    /// Content location of a page, `None` for folders
    pub fn file(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Leaf { file } => Some(file),
            NodeKind::Folder { .. } => None,
        }
    }

    /// Children of a folder, empty for pages
    pub fn children(&self) -> &[NavNode] {
        match &self.kind {
            NodeKind::Leaf { .. } => &[],
            NodeKind::Folder { children } => children,
        }
    }

    /// Whether `name` belongs to one of this node's direct children
    pub fn has_direct_child(&self, name: &str) -> bool {
        self.children().iter().any(|child| child.name == name)
    }
}

/// Serialized shape of a node, as written in config files
///
/// Exactly one of `file`/`children` and exactly one of `text_key`/`text`
/// must be present; conversion into [`NavNode`] enforces both.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RawNavNode {
    pub name: String,

    #[serde(default, alias = "textKey", skip_serializing_if = "Option::is_none")]
    pub text_key: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<RawNavNode>>,
}

impl TryFrom<RawNavNode> for NavNode {
    type Error = NavError;

    fn try_from(raw: RawNavNode) -> NavResult<Self> {
        if raw.name.is_empty() {
            return Err(NavError::EmptyName);
        }

        let label = match (raw.text_key, raw.text) {
            (Some(key), None) => Label::Key(key),
            (None, Some(text)) => Label::Text(text),
            (Some(_), Some(_)) => {
                return Err(NavError::InvalidLabel {
                    name: raw.name,
                    reason: "has both text_key and text",
                })
            }
            (None, None) => {
                return Err(NavError::InvalidLabel {
                    name: raw.name,
                    reason: "has neither text_key nor text",
                })
            }
        };

        let kind = match (raw.file, raw.children) {
            (Some(file), None) => NodeKind::Leaf { file },
            (None, Some(children)) => NodeKind::Folder {
                children: children
                    .into_iter()
                    .map(NavNode::try_from)
                    .collect::<NavResult<Vec<_>>>()?,
            },
            (Some(_), Some(_)) => {
                return Err(NavError::MalformedNode {
                    name: raw.name,
                    reason: "has both file and children",
                })
            }
            (None, None) => {
                return Err(NavError::MalformedNode {
                    name: raw.name,
                    reason: "has neither file nor children",
                })
            }
        };

        Ok(Self {
            name: raw.name,
            label,
            icon: raw.icon,
            kind,
        })
    }
}

impl From<&NavNode> for RawNavNode {
    fn from(node: &NavNode) -> Self {
        let (text_key, text) = match &node.label {
            Label::Key(key) => (Some(key.clone()), None),
            Label::Text(text) => (None, Some(text.clone())),
        };
        let (file, children) = match &node.kind {
            NodeKind::Leaf { file } => (Some(file.clone()), None),
            NodeKind::Folder { children } => {
                (None, Some(children.iter().map(RawNavNode::from).collect()))
            }
        };

        Self {
            name: node.name.clone(),
            text_key,
            text,
            icon: node.icon.clone(),
            file,
            children,
        }
    }
}

/// Index path from the tree roots down to one node
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct NodePath(Vec<usize>);

impl NodePath {
    pub fn root(index: usize) -> Self {
        Self(vec![index])
    }

    /// Path of the `index`-th child of this node
    pub fn child(&self, index: usize) -> Self {
        let mut path = self.0.clone();
        path.push(index);
        Self(path)
    }

    pub fn depth(&self) -> usize {
        self.0.len().saturating_sub(1)
    }

    pub fn indices(&self) -> &[usize] {
        &self.0
    }
}

/// Validated navigation tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavTree {
    roots: Vec<NavNode>,
}

impl NavTree {
    /// Build a tree, rejecting duplicate names anywhere in it
    pub fn new(roots: Vec<NavNode>) -> NavResult<Self> {
        let mut seen = HashSet::new();
        let mut stack: Vec<&NavNode> = roots.iter().collect();
        while let Some(node) = stack.pop() {
            if !seen.insert(node.name.as_str()) {
                return Err(NavError::DuplicateName(node.name.clone()));
            }
            stack.extend(node.children());
        }

        Ok(Self { roots })
    }

    /// Convert and validate raw records, failing on the first bad node
    pub fn from_raw(raw: Vec<RawNavNode>) -> NavResult<Self> {
        let roots = raw
            .into_iter()
            .map(NavNode::try_from)
            .collect::<NavResult<Vec<_>>>()?;
        Self::new(roots)
    }

    pub fn roots(&self) -> &[NavNode] {
        &self.roots
    }

    /// Resolve a node path produced by a view over this tree
    pub fn get(&self, path: &NodePath) -> Option<&NavNode> {
        let (first, rest) = path.indices().split_first()?;
        let mut node = self.roots.get(*first)?;
        for index in rest {
            node = node.children().get(*index)?;
        }
        Some(node)
    }

    /// First node named `name`, depth-first in display order
    pub fn page_info(&self, name: &str) -> Option<&NavNode> {
        lookup::find_page(&self.roots, name)
    }

    pub fn node_count(&self) -> usize {
        lookup::walk(&self.roots).count()
    }

    /// Number of pages (nodes with a content location)
    pub fn leaf_count(&self) -> usize {
        lookup::walk(&self.roots)
            .filter(|node| node.file().is_some())
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_page(name: &str) -> RawNavNode {
        RawNavNode {
            name: name.to_string(),
            text: Some(name.to_uppercase()),
            file: Some(format!("html/{}.html", name)),
            ..Default::default()
        }
    }

    #[test]
    fn test_raw_page_converts() {
        let node = NavNode::try_from(raw_page("home")).unwrap();
        assert!(!node.is_folder());
        assert_eq!(node.file(), Some("html/home.html"));
        assert_eq!(node.label, Label::Text("HOME".to_string()));
    }

    #[test]
    fn test_rejects_both_file_and_children() {
        let raw = RawNavNode {
            children: Some(vec![raw_page("a")]),
            ..raw_page("docs")
        };
        let err = NavNode::try_from(raw).unwrap_err();
        assert!(matches!(err, NavError::MalformedNode { name, .. } if name == "docs"));
    }

    #[test]
    fn test_rejects_neither_file_nor_children() {
        let raw = RawNavNode {
            file: None,
            ..raw_page("empty")
        };
        assert!(matches!(
            NavNode::try_from(raw),
            Err(NavError::MalformedNode { .. })
        ));
    }

    #[test]
    fn test_rejects_ambiguous_label() {
        let raw = RawNavNode {
            text_key: Some("nav_home".to_string()),
            ..raw_page("home")
        };
        assert!(matches!(
            NavNode::try_from(raw),
            Err(NavError::InvalidLabel { .. })
        ));
    }

    #[test]
    fn test_malformed_child_fails_whole_tree() {
        let folder = RawNavNode {
            name: "folder".to_string(),
            text: Some("Folder".to_string()),
            children: Some(vec![RawNavNode {
                file: None,
                ..raw_page("broken")
            }]),
            ..Default::default()
        };
        assert!(NavTree::from_raw(vec![folder]).is_err());
    }

    #[test]
    fn test_duplicate_names_rejected_across_levels() {
        let tree = NavTree::new(vec![
            NavNode::page("a", Label::Text("A".into()), "a.html"),
            NavNode::folder(
                "b",
                Label::Text("B".into()),
                vec![NavNode::page("a", Label::Text("A again".into()), "a2.html")],
            ),
        ]);
        assert_eq!(tree.unwrap_err(), NavError::DuplicateName("a".to_string()));
    }

    #[test]
    fn test_counts_and_paths() {
        let tree = NavTree::new(vec![
            NavNode::page("a", Label::Text("A".into()), "a.html"),
            NavNode::folder(
                "b",
                Label::Key("nav_b".into()),
                vec![
                    NavNode::page("c", Label::Text("C".into()), "c.html"),
                    NavNode::page("d", Label::Text("D".into()), "d.html"),
                ],
            ),
        ])
        .unwrap();

        assert_eq!(tree.node_count(), 4);
        assert_eq!(tree.leaf_count(), 3);
        assert_eq!(tree.get(&NodePath::root(1).child(1)).unwrap().name, "d");
        assert!(tree.get(&NodePath::root(0).child(0)).is_none());
        assert!(tree.get(&NodePath::default()).is_none());
    }

    #[test]
    fn test_deserialize_text_key_alias() {
        let json = r#"{"name":"home","textKey":"nav_home","file":"html/home.html"}"#;
        let raw: RawNavNode = serde_json::from_str(json).unwrap();
        let node = NavNode::try_from(raw).unwrap();
        assert_eq!(node.label.key(), Some("nav_home"));
    }
}
