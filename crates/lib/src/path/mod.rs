//! Path types for addressing values inside a document tree.
//!
//! A path is a dot-separated list of segments. Each segment is an optional
//! property name followed by zero or more bracketed array indices:
//!
//! ```text
//! path    := segment ('.' segment)*
//! segment := name? index*
//! name    := any run of characters excluding '.' and '['
//! index   := '[' digits ']'
//! ```
//!
//! # Examples
//!
//! ```rust
//! use treepath::path::{Path, Step};
//!
//! let path = Path::parse("user.tags[1]")?;
//! assert_eq!(path.len(), 2);
//!
//! let steps: Vec<Step> = path.steps().collect();
//! assert_eq!(steps, vec![Step::Name("user"), Step::Name("tags"), Step::Index(1)]);
//!
//! // A purely numeric name is still a name, not an index
//! let path = Path::parse("3")?;
//! assert_eq!(path.steps().next(), Some(Step::Name("3")));
//!
//! // The empty path addresses the root itself
//! assert!(Path::parse("")?.is_empty());
//! # Ok::<(), treepath::path::PathError>(())
//! ```

use std::{fmt, str::FromStr};

mod builder;
pub mod errors;
mod parser;

pub use builder::PathBuilder;
pub use errors::PathError;

/// One step of a [`Path`]: an optional property name plus array indices.
///
/// An empty `name` means "no property step": the indices apply to the
/// current node. A segment always has a name or at least one index.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Segment {
    name: String,
    indices: Vec<usize>,
}

impl Segment {
    /// Creates a name-only segment.
    ///
    /// # Errors
    /// Returns [`PathError::UnexpectedChar`] if the name contains `.` or `[`,
    /// and [`PathError::EmptyPathWhereSegmentRequired`] if it is empty.
    pub fn named(name: impl Into<String>) -> Result<Self, PathError> {
        let name = name.into();
        if name.is_empty() {
            return Err(PathError::EmptyPathWhereSegmentRequired { position: 0 });
        }
        if let Some((position, found)) = name.char_indices().find(|(_, c)| matches!(c, '.' | '['))
        {
            return Err(PathError::UnexpectedChar { position, found });
        }
        Ok(Self {
            name,
            indices: Vec::new(),
        })
    }

    /// Creates a segment that indexes the current node without a name step.
    pub fn index(index: usize) -> Self {
        Self {
            name: String::new(),
            indices: vec![index],
        }
    }

    pub(crate) fn from_parts(name: String, indices: Vec<usize>) -> Self {
        Self { name, indices }
    }

    pub(crate) fn push_index(&mut self, index: usize) {
        self.indices.push(index);
    }

    /// Returns the property name, or `None` for a pure index segment.
    pub fn name(&self) -> Option<&str> {
        if self.name.is_empty() {
            None
        } else {
            Some(&self.name)
        }
    }

    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Returns the steps of this segment in traversal order.
    pub fn steps(&self) -> impl Iterator<Item = Step<'_>> {
        self.name()
            .map(Step::Name)
            .into_iter()
            .chain(self.indices.iter().copied().map(Step::Index))
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        for index in &self.indices {
            write!(f, "[{index}]")?;
        }
        Ok(())
    }
}

/// A single traversal move: descend into an object key or an array index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step<'a> {
    Name(&'a str),
    Index(usize),
}

impl Step<'_> {
    /// Returns true if this step descends into an object.
    pub fn is_name(&self) -> bool {
        matches!(self, Step::Name(_))
    }
}

impl fmt::Display for Step<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Name(name) => f.write_str(name),
            Step::Index(index) => write!(f, "[{index}]"),
        }
    }
}

/// A parsed path: an ordered list of [`Segment`]s.
///
/// A path with zero segments refers to the root itself.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Path {
    segments: Vec<Segment>,
}

impl Path {
    /// Creates the empty path (the root).
    pub fn root() -> Self {
        Self {
            segments: Vec::new(),
        }
    }

    /// Parses a path string.
    ///
    /// # Errors
    /// See [`PathError`] for the rejected forms. Indices are non-negative
    /// decimal integers; anything else inside brackets is rejected here, not
    /// during traversal.
    pub fn parse(input: &str) -> Result<Self, PathError> {
        parser::parse(input).map(Self::from_segments)
    }

    pub fn from_segments(segments: Vec<Segment>) -> Self {
        Self { segments }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Returns the number of segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns true if the path addresses the root.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns every step of every segment in traversal order.
    pub fn steps(&self) -> impl Iterator<Item = Step<'_>> {
        self.segments.iter().flat_map(Segment::steps)
    }

    /// Renders the first `count` steps in canonical form.
    ///
    /// Used to name the offending prefix in errors and logs.
    pub fn prefix_string(&self, count: usize) -> String {
        render_steps(self.steps().take(count))
    }
}

/// Renders steps in canonical path form.
pub(crate) fn render_steps<'a>(steps: impl IntoIterator<Item = Step<'a>>) -> String {
    let mut out = String::new();
    for step in steps {
        match step {
            Step::Name(name) => {
                if !out.is_empty() {
                    out.push('.');
                }
                out.push_str(name);
            }
            Step::Index(index) => {
                out.push('[');
                out.push_str(&index.to_string());
                out.push(']');
            }
        }
    }
    out
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{segment}")?;
        }
        Ok(())
    }
}

impl FromStr for Path {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Path::parse(s)
    }
}

impl TryFrom<&str> for Path {
    type Error = PathError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Path::parse(s)
    }
}

impl AsRef<Path> for Path {
    fn as_ref(&self) -> &Path {
        self
    }
}
