//! Read-only traversal.
//!
//! Reads are safe to probe: a missing key, an out-of-range index, or a node
//! of the wrong shape all produce `None`, never an error.
//!
//! ```
//! use treepath::{navigate, node::Node, path::Path};
//!
//! let root: Node = serde_json::from_str(r#"{"user":{"tags":[null,"x"]}}"#)?;
//!
//! let tag = navigate::get(&root, &Path::parse("user.tags[1]")?);
//! assert_eq!(tag, Some(&Node::from("x")));
//!
//! assert_eq!(navigate::get(&root, &Path::parse("user.missing")?), None);
//! assert_eq!(navigate::get(&root, &Path::parse("user.tags.x")?), None);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use crate::{
    node::Node,
    path::{Path, Step},
};

/// Returns the node addressed by `path`, or `None` if it does not exist.
///
/// The empty path returns `root`.
pub fn get<'a>(root: &'a Node, path: &Path) -> Option<&'a Node> {
    path.steps().try_fold(root, step_into)
}

/// Returns a mutable reference to the node addressed by `path`.
///
/// Follows the same rules as [`get`]; nothing is created.
pub fn get_mut<'a>(root: &'a mut Node, path: &Path) -> Option<&'a mut Node> {
    path.steps().try_fold(root, step_into_mut)
}

/// Returns true if `path` addresses an existing node.
pub fn contains(root: &Node, path: &Path) -> bool {
    get(root, path).is_some()
}

pub(crate) fn step_into<'a>(current: &'a Node, step: Step<'_>) -> Option<&'a Node> {
    match (current, step) {
        (Node::Object(object), Step::Name(name)) => object.get(name),
        (Node::Array(items), Step::Index(index)) => items.get(index),
        _ => None,
    }
}

pub(crate) fn step_into_mut<'a>(current: &'a mut Node, step: Step<'_>) -> Option<&'a mut Node> {
    match (current, step) {
        (Node::Object(object), Step::Name(name)) => object.get_mut(name),
        (Node::Array(items), Step::Index(index)) => items.get_mut(index),
        _ => None,
    }
}
