//! Error types for typed node access.

use thiserror::Error;

use super::Node;

/// Errors from converting a [`Node`] into a Rust type.
#[non_exhaustive]
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NodeError {
    /// The node has a different shape than the requested type
    #[error("Node type mismatch: expected {expected}, found {actual}")]
    TypeMismatch {
        expected: &'static str,
        actual: &'static str,
    },
}

impl NodeError {
    pub(crate) fn mismatch(expected: &'static str, node: &Node) -> Self {
        NodeError::TypeMismatch {
            expected,
            actual: node.kind().as_str(),
        }
    }

    /// Check if this error is a type mismatch
    pub fn is_type_error(&self) -> bool {
        matches!(self, NodeError::TypeMismatch { .. })
    }
}

// Conversion from NodeError to the main Error type
impl From<NodeError> for crate::Error {
    fn from(err: NodeError) -> Self {
        crate::Error::Node(err)
    }
}
