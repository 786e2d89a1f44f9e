//! String-path access to an owned document tree.
//!
//! [`Document`] is the surface a plugin layer binds to script routines: it
//! owns a root [`Node`] and takes path strings directly, so a script can
//! read with `get("a.b[2]")` and write with `set("a.b[2]", value)` without
//! handling parsed paths itself.
//!
//! # Examples
//!
//! ```
//! use treepath::Document;
//!
//! let mut doc = Document::new();
//! doc.set("user.name", "Ada")?;
//! doc.set("user.tags[1]", "x")?;
//!
//! assert_eq!(doc.get_as::<&str>("user.name"), Some("Ada"));
//! assert!(doc.get("user.tags[0]")?.is_some_and(|n| n.is_null()));
//! assert_eq!(doc.get("user.missing")?, None);
//!
//! // Writes through an incompatible shape are errors
//! assert!(doc.set("user.name.first", "A").is_err());
//! # Ok::<(), treepath::Error>(())
//! ```
//!
//! Access to a document is not synchronized. Callers sharing one across
//! threads must serialize writes themselves, e.g. behind a mutex.

use std::{fs, path::Path as FsPath};

use crate::{
    Result,
    codec::{TextCodec, codec_for_path},
    coerce::{self, CoercionOptions, DynMap},
    mutate, navigate,
    node::Node,
    path::Path,
};

/// An owned document tree addressed by path strings.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Document {
    root: Node,
}

impl Document {
    /// Creates a document whose root is an empty object.
    pub fn new() -> Self {
        Self {
            root: Node::object(),
        }
    }

    /// Wraps an existing tree.
    pub fn from_node(root: Node) -> Self {
        Self { root }
    }

    /// Builds a document from a host map.
    ///
    /// See [`coerce::from_map`] for the shaping rules.
    pub fn from_map(map: &DynMap, header: Option<&[String]>, options: &CoercionOptions) -> Self {
        Self::from_node(coerce::from_map(map, header, options))
    }

    /// Parses document text with the given codec.
    pub fn parse(codec: &dyn TextCodec, text: &str) -> Result<Self> {
        Ok(Self::from_node(codec.parse(text)?))
    }

    /// Reads a document from a file, choosing the codec by extension.
    pub fn load(path: impl AsRef<FsPath>) -> Result<Self> {
        let path = path.as_ref();
        Self::load_with(path, codec_for_path(path)?.as_ref())
    }

    /// Reads a document from a file with an explicit codec.
    pub fn load_with(path: impl AsRef<FsPath>, codec: &dyn TextCodec) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        let doc = Self::parse(codec, &text)?;
        tracing::debug!(path = %path.display(), format = codec.name(), "Loaded document");
        Ok(doc)
    }

    /// Writes the document to a file, choosing the codec by extension.
    pub fn save(&self, path: impl AsRef<FsPath>) -> Result<()> {
        let path = path.as_ref();
        self.save_with(path, codec_for_path(path)?.as_ref())
    }

    /// Writes the document to a file with an explicit codec.
    pub fn save_with(&self, path: impl AsRef<FsPath>, codec: &dyn TextCodec) -> Result<()> {
        let path = path.as_ref();
        fs::write(path, self.to_text(codec)?)?;
        tracing::debug!(path = %path.display(), format = codec.name(), "Saved document");
        Ok(())
    }

    /// Serializes the document with the given codec.
    pub fn to_text(&self, codec: &dyn TextCodec) -> Result<String> {
        Ok(codec.serialize(&self.root)?)
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut Node {
        &mut self.root
    }

    pub fn into_root(self) -> Node {
        self.root
    }

    /// Gets the node at a path string.
    ///
    /// Returns `Ok(None)` for paths that do not exist and an error only for
    /// malformed path strings.
    pub fn get(&self, path: &str) -> Result<Option<&Node>> {
        Ok(self.get_path(&Path::parse(path)?))
    }

    /// Gets the node at a parsed path.
    pub fn get_path(&self, path: &Path) -> Option<&Node> {
        navigate::get(&self.root, path)
    }

    /// Gets a value by path with type conversion using TryFrom.
    ///
    /// Returns `None` if the path is malformed, missing, or the value does
    /// not convert.
    pub fn get_as<'a, T>(&'a self, path: &str) -> Option<T>
    where
        T: TryFrom<&'a Node>,
    {
        let node = self.get(path).ok()??;
        T::try_from(node).ok()
    }

    /// Returns true if the path string addresses an existing node.
    pub fn contains(&self, path: &str) -> bool {
        matches!(self.get(path), Ok(Some(_)))
    }

    /// Sets a value at a path string, creating intermediate nodes as needed.
    pub fn set(&mut self, path: &str, value: impl Into<Node>) -> Result<()> {
        self.set_path(&Path::parse(path)?, value)
    }

    /// Sets a value at a parsed path, creating intermediate nodes as needed.
    pub fn set_path(&mut self, path: &Path, value: impl Into<Node>) -> Result<()> {
        mutate::set(&mut self.root, path, value.into())?;
        Ok(())
    }

    /// Removes and returns the value at a path string.
    pub fn remove(&mut self, path: &str) -> Result<Option<Node>> {
        Ok(mutate::remove(&mut self.root, &Path::parse(path)?))
    }
}

impl From<Node> for Document {
    fn from(root: Node) -> Self {
        Self::from_node(root)
    }
}
