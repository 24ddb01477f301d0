//! Site Navigation
//!
//! This module renders the hierarchical navigation menu and keeps it in step
//! with the current page:
//!
//! - **model**: The static page tree (`NavNode`, `NavTree`)
//! - **lookup**: Depth-first page search over the model
//! - **view**: Flat registry of rendered entries with opaque handles
//! - **active**: Current-page marking and ancestor expansion
//! - **site**: The built-in page tree
//! - **error**: Error types
//!
//! # Data Flow
//!
//! ```text
//! NavTree → NavView::build (once) → set_active (every navigation)
//!                 ↑                         ↑
//!           toggle / activate         router (fragment change)
//! ```
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use sitenav::nav::{set_active, site, NavTree, NavView};
//!
//! let tree = Arc::new(NavTree::from_raw(site::default_pages()).unwrap());
//! let mut view = NavView::from_tree(tree);
//!
//! set_active(&mut view, "meyve_suyu");
//! let folder = view.find("gundelik-hayat").unwrap();
//! assert!(view.entry(folder).unwrap().is_expanded());
//! ```

pub mod active;
pub mod error;
pub mod lookup;
pub mod model;
pub mod site;
pub mod view;

pub use active::{set_active, ActiveOutcome};
pub use error::{NavError, NavResult};
pub use lookup::find_page;
pub use model::{Label, NavNode, NavTree, NodeKind, NodePath, RawNavNode};
pub use view::{
    fragment_to_page, page_fragment, EntryId, EntryState, Location, NavView, ViewEntry,
};
