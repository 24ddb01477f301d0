//! Navigation error types
//!
//! Everything here is a configuration error: the tree handed to the builder
//! does not describe a valid site. These are raised when the tree is
//! constructed, never while the menu is being driven.

use thiserror::Error;

/// Errors that can occur while constructing a navigation tree
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NavError {
    /// A node is neither a page nor a folder, or claims to be both
    #[error("Malformed node '{name}': {reason}")]
    MalformedNode { name: String, reason: &'static str },

    /// A node carries no label, or both a translation key and a literal text
    #[error("Invalid label on node '{name}': {reason}")]
    InvalidLabel { name: String, reason: &'static str },

    /// Two nodes share the same name somewhere in the tree
    #[error("Duplicate node name: {0}")]
    DuplicateName(String),

    /// A node has an empty name
    #[error("Node name must not be empty")]
    EmptyName,
}

/// Result type alias for navigation operations
pub type NavResult<T> = Result<T, NavError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = NavError::DuplicateName("PSPp".to_string());
        assert_eq!(err.to_string(), "Duplicate node name: PSPp");

        let err = NavError::MalformedNode {
            name: "docs".to_string(),
            reason: "has both file and children",
        };
        assert_eq!(
            err.to_string(),
            "Malformed node 'docs': has both file and children"
        );
    }
}
