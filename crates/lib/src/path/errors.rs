//! Error types for path parsing.

use thiserror::Error;

/// Errors raised while parsing a path string.
///
/// Every variant carries the byte position in the input where the problem
/// was detected. Parse errors are always surfaced to the caller.
#[non_exhaustive]
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PathError {
    /// A '[' without a matching ']'
    #[error("Unterminated index starting at position {position}")]
    UnterminatedIndex { position: usize },

    /// Bracket content that is not a non-negative decimal integer
    #[error("Invalid index '{text}' at position {position}: expected a non-negative integer")]
    InvalidIndex { position: usize, text: String },

    /// A character where '.', '[' or the end of the path was expected
    #[error("Unexpected character '{found}' at position {position}")]
    UnexpectedChar { position: usize, found: char },

    /// An empty segment, e.g. a leading '.' or "a..b"
    #[error("Empty segment at position {position}")]
    EmptyPathWhereSegmentRequired { position: usize },
}

impl PathError {
    /// Get the byte position of the error in the input
    pub fn position(&self) -> usize {
        match self {
            PathError::UnterminatedIndex { position }
            | PathError::InvalidIndex { position, .. }
            | PathError::UnexpectedChar { position, .. }
            | PathError::EmptyPathWhereSegmentRequired { position } => *position,
        }
    }

    /// Check if this error is about bracketed index syntax
    pub fn is_index_error(&self) -> bool {
        matches!(
            self,
            PathError::UnterminatedIndex { .. } | PathError::InvalidIndex { .. }
        )
    }
}

// Conversion from PathError to the main Error type
impl From<PathError> for crate::Error {
    fn from(err: PathError) -> Self {
        crate::Error::Path(err)
    }
}
