//! Page lookup over the navigation model
//!
//! Read-only searches used by collaborators such as a page-title resolver.
//! Searches run over the model, never over the rendered view.

use super::model::NavNode;

/// First node named `name`, searching each node's children before its later
/// siblings, in display order
pub fn find_page<'a>(nodes: &'a [NavNode], name: &str) -> Option<&'a NavNode> {
    for node in nodes {
        if node.name == name {
            return Some(node);
        }
        if let Some(found) = find_page(node.children(), name) {
            return Some(found);
        }
    }
    None
}

/// Pre-order iterator over every node in `nodes`
pub fn walk(nodes: &[NavNode]) -> Walk<'_> {
    Walk {
        stack: nodes.iter().rev().collect(),
    }
}

/// Iterator returned by [`walk`]
pub struct Walk<'a> {
    stack: Vec<&'a NavNode>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = &'a NavNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children().iter().rev());
        Some(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::model::Label;

    fn text(s: &str) -> Label {
        Label::Text(s.to_string())
    }

    fn sample() -> Vec<NavNode> {
        vec![
            NavNode::page("a", text("A"), "a.html"),
            NavNode::folder(
                "b",
                text("B"),
                vec![
                    NavNode::folder("e", text("E"), vec![NavNode::page("f", text("F"), "f.html")]),
                    NavNode::page("c", text("C"), "c.html"),
                ],
            ),
            NavNode::page("d", text("D"), "d.html"),
        ]
    }

    #[test]
    fn test_find_nested_page() {
        let nodes = sample();
        let found = find_page(&nodes, "f").unwrap();
        assert_eq!(found.file(), Some("f.html"));
    }

    #[test]
    fn test_find_folder() {
        let nodes = sample();
        assert!(find_page(&nodes, "e").unwrap().is_folder());
    }

    #[test]
    fn test_find_missing() {
        assert!(find_page(&sample(), "zzz").is_none());
        assert!(find_page(&[], "a").is_none());
    }

    #[test]
    fn test_children_searched_before_siblings() {
        // Unvalidated input may repeat names; the nested copy comes first.
        let nodes = vec![
            NavNode::folder("b", text("B"), vec![NavNode::page("x", text("inner"), "inner.html")]),
            NavNode::page("x", text("outer"), "outer.html"),
        ];
        assert_eq!(find_page(&nodes, "x").unwrap().file(), Some("inner.html"));
    }

    #[test]
    fn test_walk_is_preorder() {
        let nodes = sample();
        let names: Vec<_> = walk(&nodes).map(|n| n.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b", "e", "f", "c", "d"]);
    }
}
