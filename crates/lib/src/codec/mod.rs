//! Text codecs: document text to and from [`Node`] trees.
//!
//! The path engine never parses or prints text itself. A [`TextCodec`] is the
//! seam where a concrete format plugs in; the codecs here are thin wrappers
//! over serde formats, relying on the `serde` impls of [`Node`].
//!
//! ```
//! use treepath::codec::{JsonCodec, TextCodec};
//!
//! let codec = JsonCodec::compact();
//! let node = codec.parse(r#"{"b":1,"a":[true,null]}"#)?;
//! assert_eq!(codec.serialize(&node)?, r#"{"b":1,"a":[true,null]}"#);
//! # Ok::<(), treepath::codec::CodecError>(())
//! ```

use std::path::Path as FsPath;

use crate::node::Node;

pub mod errors;

pub use errors::CodecError;

/// A format-specific parser and serializer for document trees.
pub trait TextCodec {
    /// Short lowercase format name, e.g. `"json"`.
    fn name(&self) -> &'static str;

    /// Parses document text into a tree.
    fn parse(&self, text: &str) -> Result<Node, CodecError>;

    /// Serializes a tree into document text.
    fn serialize(&self, node: &Node) -> Result<String, CodecError>;
}

/// Supported document formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    Json,
    #[cfg(feature = "yaml")]
    Yaml,
}

impl Format {
    /// Picks a format from a file extension (case-insensitive).
    pub fn from_extension(extension: &str) -> Result<Self, CodecError> {
        match extension.to_ascii_lowercase().as_str() {
            "json" => Ok(Format::Json),
            #[cfg(feature = "yaml")]
            "yaml" | "yml" => Ok(Format::Yaml),
            other => Err(CodecError::UnknownFormat {
                extension: other.to_string(),
            }),
        }
    }

    /// Picks a format from a file path's extension.
    pub fn from_path(path: impl AsRef<FsPath>) -> Result<Self, CodecError> {
        let extension = path
            .as_ref()
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default();
        Self::from_extension(extension)
    }

    /// Returns a codec for this format with default settings.
    pub fn codec(self) -> Box<dyn TextCodec> {
        match self {
            Format::Json => Box::new(JsonCodec::default()),
            #[cfg(feature = "yaml")]
            Format::Yaml => Box::new(YamlCodec),
        }
    }
}

/// Returns the codec matching a file path's extension.
pub fn codec_for_path(path: impl AsRef<FsPath>) -> Result<Box<dyn TextCodec>, CodecError> {
    Format::from_path(path).map(Format::codec)
}

/// JSON codec backed by `serde_json`.
///
/// Object key order round-trips. Non-finite floats serialize as `null`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JsonCodec {
    /// Pretty-print with two-space indentation
    pub pretty: bool,
}

impl JsonCodec {
    pub fn compact() -> Self {
        Self { pretty: false }
    }

    pub fn pretty() -> Self {
        Self { pretty: true }
    }
}

impl Default for JsonCodec {
    fn default() -> Self {
        Self::pretty()
    }
}

impl TextCodec for JsonCodec {
    fn name(&self) -> &'static str {
        "json"
    }

    fn parse(&self, text: &str) -> Result<Node, CodecError> {
        Ok(serde_json::from_str(text)?)
    }

    fn serialize(&self, node: &Node) -> Result<String, CodecError> {
        let text = if self.pretty {
            serde_json::to_string_pretty(node)?
        } else {
            serde_json::to_string(node)?
        };
        Ok(text)
    }
}

/// YAML codec backed by `serde_yaml`.
///
/// Non-string mapping keys (`1: a`) are read as their string form. Tags,
/// anchors and comments are not supported.
#[cfg(feature = "yaml")]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct YamlCodec;

#[cfg(feature = "yaml")]
impl TextCodec for YamlCodec {
    fn name(&self) -> &'static str {
        "yaml"
    }

    fn parse(&self, text: &str) -> Result<Node, CodecError> {
        Ok(serde_yaml::from_str(text)?)
    }

    fn serialize(&self, node: &Node) -> Result<String, CodecError> {
        Ok(serde_yaml::to_string(node)?)
    }
}
