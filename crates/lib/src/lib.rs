//!
//! treepath: read and write values deep inside semi-structured documents.
//! This library provides a single path engine shared by every document format.
//!
//! ## Core Concepts
//!
//! * **Nodes (`node::Node`)**: The tree value. Objects keep insertion order, arrays are dense, scalars hold one leaf value.
//! * **Paths (`path::Path`)**: Parsed `a.b[2].c` strings. A path is a list of segments, each an optional name plus array indices.
//! * **Navigation (`navigate::get`)**: Read-only traversal. Anything missing or mis-shaped is `None`, never an error.
//! * **Mutation (`mutate::set`)**: Write traversal that auto-vivifies missing objects and arrays, and rejects writes through incompatible shapes.
//! * **Coercion (`coerce::from_map`)**: Shapes a host's ordered dynamic map into a tree using the dense-array heuristic.
//! * **Codecs (`codec::TextCodec`)**: Format-specific text parsing and serialization (JSON, YAML).
//! * **Documents (`Document`)**: An owned tree addressed by path strings, the surface script bindings call into.

pub mod codec;
pub mod coerce;
pub mod document;
pub mod mutate;
pub mod navigate;
pub mod node;
pub mod path;

/// Re-export the `Document` struct for easier access.
pub use document::Document;
pub use node::{Node, Object, Scalar};
pub use path::Path;

/// Result type used throughout the treepath library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the treepath library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Structured path parsing errors from the path module
    #[error(transparent)]
    Path(path::PathError),

    /// Structured write errors from the mutate module
    #[error(transparent)]
    Structural(mutate::StructuralError),

    /// Structured codec errors from the codec module
    #[error(transparent)]
    Codec(codec::CodecError),

    /// Typed access errors from the node module
    #[error(transparent)]
    Node(node::NodeError),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Io(_) => "io",
            Error::Path(_) => "path",
            Error::Structural(_) => "mutate",
            Error::Codec(_) => "codec",
            Error::Node(_) => "node",
        }
    }

    /// Check if this error came from parsing a path string.
    pub fn is_path_error(&self) -> bool {
        matches!(self, Error::Path(_))
    }

    /// Check if this error is a structural write failure.
    pub fn is_structural_error(&self) -> bool {
        matches!(self, Error::Structural(_))
    }

    /// Check if this error is a shape conflict, on write or on typed access.
    pub fn is_type_error(&self) -> bool {
        match self {
            Error::Structural(err) => err.is_type_conflict(),
            Error::Node(err) => err.is_type_error(),
            _ => false,
        }
    }

    /// Check if this error came from malformed document text.
    pub fn is_syntax_error(&self) -> bool {
        match self {
            Error::Codec(err) => err.is_syntax_error(),
            _ => false,
        }
    }

    /// Check if this error is I/O related.
    pub fn is_io_error(&self) -> bool {
        matches!(self, Error::Io(_))
    }
}
