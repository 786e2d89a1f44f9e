//! Incremental path construction.

use super::{Path, PathError, Segment};
use crate::mutate::StructuralError;

/// A builder for constructing paths from host values.
///
/// Names start a new segment; indices attach to the current segment, or
/// start a pure index segment when nothing precedes them.
///
/// ```
/// use treepath::path::PathBuilder;
///
/// let path = PathBuilder::new()
///     .name("user")?
///     .name("tags")?
///     .index(1)
///     .build();
/// assert_eq!(path.to_string(), "user.tags[1]");
/// # Ok::<(), treepath::path::PathError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct PathBuilder {
    segments: Vec<Segment>,
}

impl PathBuilder {
    /// Creates a new empty path builder.
    pub fn new() -> Self {
        Self {
            segments: Vec::new(),
        }
    }

    /// Starts a new segment with the given property name.
    pub fn name(mut self, name: impl Into<String>) -> Result<Self, PathError> {
        self.segments.push(Segment::named(name)?);
        Ok(self)
    }

    /// Appends an array index to the current segment.
    pub fn index(mut self, index: usize) -> Self {
        match self.segments.last_mut() {
            Some(segment) => segment.push_index(index),
            None => self.segments.push(Segment::index(index)),
        }
        self
    }

    /// Appends a signed index as handed over by a script host.
    ///
    /// # Errors
    /// Returns [`StructuralError::NegativeIndex`] for negative values.
    pub fn signed_index(self, index: i64) -> Result<Self, StructuralError> {
        let index = usize::try_from(index).map_err(|_| StructuralError::NegativeIndex { index })?;
        Ok(self.index(index))
    }

    /// Builds the final `Path`.
    pub fn build(self) -> Path {
        Path::from_segments(self.segments)
    }
}
