//! Error types for path writes.

use thiserror::Error;

use crate::node::NodeKind;

/// Structural errors raised while writing through a path.
///
/// Reads never produce these: a shape mismatch during [`get`](crate::navigate::get)
/// is reported as a missing value instead.
#[non_exhaustive]
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StructuralError {
    /// An existing node has a shape incompatible with the next step
    #[error("Type conflict at '{path}': expected {expected}, found {found}")]
    TypeConflict {
        path: String,
        expected: NodeKind,
        found: NodeKind,
    },

    /// A signed index below zero
    #[error("Negative index {index}")]
    NegativeIndex { index: i64 },

    /// An index step beyond the padding limit
    #[error("Index {index} at '{path}' exceeds the maximum array index {max}")]
    IndexTooLarge {
        path: String,
        index: usize,
        max: usize,
    },

    /// A write with zero segments has no slot to assign
    #[error("Cannot set a value at the empty path")]
    EmptyPath,
}

impl StructuralError {
    /// Check if this error is a type conflict
    pub fn is_type_conflict(&self) -> bool {
        matches!(self, StructuralError::TypeConflict { .. })
    }

    /// Check if this error is an index past the padding limit
    pub fn is_index_too_large(&self) -> bool {
        matches!(self, StructuralError::IndexTooLarge { .. })
    }

    /// Get the offending path prefix, if the error names one
    pub fn path(&self) -> Option<&str> {
        match self {
            StructuralError::TypeConflict { path, .. }
            | StructuralError::IndexTooLarge { path, .. } => Some(path),
            _ => None,
        }
    }
}

// Conversion from StructuralError to the main Error type
impl From<StructuralError> for crate::Error {
    fn from(err: StructuralError) -> Self {
        crate::Error::Structural(err)
    }
}
