//! Write traversal with auto-vivification.
//!
//! [`set`] walks a path the same way [`navigate::get`](crate::navigate::get)
//! does, but creates whatever containers are missing on the way down. The
//! kind of each new container is decided by looking one step ahead: a name
//! step needs an object, an index step needs an array (padded with nulls up
//! to the index).
//!
//! Existing nodes are never reshaped. A non-null node that does not fit the
//! next step is a [`StructuralError::TypeConflict`].
//!
//! ```
//! use treepath::{mutate, navigate, node::Node, path::Path};
//!
//! let mut root = Node::object();
//! mutate::set(&mut root, &Path::parse("user.name")?, "Ada".into())?;
//! mutate::set(&mut root, &Path::parse("user.tags[1]")?, "x".into())?;
//!
//! assert_eq!(root.to_json_string(), r#"{"user":{"name":"Ada","tags":[null,"x"]}}"#);
//! assert_eq!(
//!     navigate::get(&root, &Path::parse("user.tags[0]")?),
//!     Some(&Node::null())
//! );
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use crate::{
    navigate,
    node::{Node, NodeKind},
    path::{Path, Step},
};

pub mod errors;

pub use errors::StructuralError;

/// The largest array index a write accepts.
///
/// Writes past the end of an array pad it with nulls, so an unchecked index
/// would allocate without bound.
pub const MAX_INDEX: usize = 1 << 20;

/// Sets `value` at `path`, creating missing intermediate containers.
///
/// The root must be an object or an array. A terminal name replaces the
/// key's value in place (or appends a new key); a terminal index overwrites
/// the element, padding the array with nulls first if needed.
///
/// Failures happen before anything is modified: index limits are checked
/// up front, nodes are only created below a missing or null slot, and
/// nothing below a fresh slot can conflict.
///
/// # Errors
/// - [`StructuralError::EmptyPath`] if `path` has no segments
/// - [`StructuralError::IndexTooLarge`] if any index exceeds [`MAX_INDEX`]
/// - [`StructuralError::TypeConflict`] if the root is a scalar, or an
///   existing node along the path has the wrong shape for the next step
pub fn set(root: &mut Node, path: &Path, value: Node) -> Result<(), StructuralError> {
    let steps: Vec<Step<'_>> = path.steps().collect();
    let Some((last, intermediate)) = steps.split_last() else {
        return Err(StructuralError::EmptyPath);
    };
    check_indices(path, &steps)?;

    let mut current = root;
    for (depth, step) in intermediate.iter().enumerate() {
        let next = steps[depth + 1];
        current = descend(current, *step, next, path, depth)?;
    }

    match (current, *last) {
        (Node::Object(object), Step::Name(name)) => {
            object.insert(name, value);
        }
        (Node::Array(items), Step::Index(index)) => {
            pad(items, index);
            items[index] = value;
        }
        (other, step) => return Err(conflict(path, steps.len() - 1, step, other.kind())),
    }
    Ok(())
}

/// Removes and returns the node at `path`.
///
/// Removing an object key keeps the order of the remaining keys; removing
/// an array element shifts later elements down. Returns `None` when the path
/// is empty or does not exist.
pub fn remove(root: &mut Node, path: &Path) -> Option<Node> {
    let steps: Vec<Step<'_>> = path.steps().collect();
    let (last, intermediate) = steps.split_last()?;

    let parent = intermediate
        .iter()
        .try_fold(root, |node, step| navigate::step_into_mut(node, *step))?;

    match (parent, *last) {
        (Node::Object(object), Step::Name(name)) => object.remove(name),
        (Node::Array(items), Step::Index(index)) if index < items.len() => {
            Some(items.remove(index))
        }
        _ => None,
    }
}

/// Steps from `current` into the slot addressed by `step`, making sure the
/// slot is a container suitable for `next`.
fn descend<'a>(
    current: &'a mut Node,
    step: Step<'_>,
    next: Step<'_>,
    path: &Path,
    depth: usize,
) -> Result<&'a mut Node, StructuralError> {
    let slot = match (current, step) {
        (Node::Object(object), Step::Name(name)) => object.slot(name),
        (Node::Array(items), Step::Index(index)) => {
            pad(items, index);
            &mut items[index]
        }
        (other, step) => return Err(conflict(path, depth, step, other.kind())),
    };

    let wanted = container_for(next);
    if slot.is_null() {
        tracing::trace!(
            path = %path.prefix_string(depth + 1),
            kind = %wanted,
            "Creating intermediate container"
        );
        *slot = match wanted {
            NodeKind::Object => Node::object(),
            _ => Node::array(),
        };
    } else if slot.kind() != wanted {
        return Err(conflict(path, depth + 1, next, slot.kind()));
    }
    Ok(slot)
}

/// Rejects any index step past [`MAX_INDEX`], naming the indexed prefix.
fn check_indices(path: &Path, steps: &[Step<'_>]) -> Result<(), StructuralError> {
    let oversized = steps.iter().enumerate().find_map(|(depth, step)| match step {
        Step::Index(index) if *index > MAX_INDEX => Some((depth, *index)),
        _ => None,
    });
    let Some((depth, index)) = oversized else {
        return Ok(());
    };

    let prefix = path.prefix_string(depth);
    let err = StructuralError::IndexTooLarge {
        path: if prefix.is_empty() {
            "(root)".to_string()
        } else {
            prefix
        },
        index,
        max: MAX_INDEX,
    };
    tracing::debug!(path = %path, error = %err, "Rejected write");
    Err(err)
}

/// The container kind a step descends into.
fn container_for(step: Step<'_>) -> NodeKind {
    match step {
        Step::Name(_) => NodeKind::Object,
        Step::Index(_) => NodeKind::Array,
    }
}

fn pad(items: &mut Vec<Node>, index: usize) {
    if items.len() <= index {
        items.resize_with(index + 1, Node::null);
    }
}

/// Builds a conflict for the node reached after `depth` steps, which cannot
/// take `step`.
fn conflict(path: &Path, depth: usize, step: Step<'_>, found: NodeKind) -> StructuralError {
    let prefix = path.prefix_string(depth);
    let err = StructuralError::TypeConflict {
        path: if prefix.is_empty() {
            "(root)".to_string()
        } else {
            prefix
        },
        expected: container_for(step),
        found,
    };
    tracing::debug!(path = %path, error = %err, "Rejected write");
    err
}
