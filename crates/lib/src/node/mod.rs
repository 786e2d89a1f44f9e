//! Tree values addressed by paths.
//!
//! This module provides the [`Node`] type, the tagged tree value that every
//! other part of treepath reads, mutates, coerces into, or serializes.
//!
//! # Core Types
//!
//! - [`Node`] - One of [`Node::Object`], [`Node::Array`] or [`Node::Scalar`]
//! - [`Object`] - An insertion-ordered map from string keys to nodes
//! - [`Scalar`] - A leaf value: null, bool, int, float or string
//! - [`NodeKind`] - The shape of a node, used in errors and logs
//!
//! # Ownership
//!
//! Containers exclusively own their children. There are no back-references,
//! so a tree can never contain a cycle, and every read through the
//! [`navigate`](crate::navigate) module hands out a borrow tied to the root.
//!
//! ```
//! use treepath::node::{Node, Object};
//!
//! let mut user = Object::new();
//! user.insert("name", "Ada");
//! user.insert("tags", Node::Array(vec![Node::null(), "x".into()]));
//!
//! let root = Node::from(user);
//! assert_eq!(root.to_json_string(), r#"{"name":"Ada","tags":[null,"x"]}"#);
//! ```

use std::fmt;

use indexmap::IndexMap;

pub mod errors;
pub mod scalar;
mod serde_impl;

pub use errors::NodeError;
pub use scalar::Scalar;

/// A value inside a document tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// Ordered mapping from string keys to child nodes
    Object(Object),
    /// Dense, zero-indexed sequence of child nodes
    Array(Vec<Node>),
    /// Leaf value
    Scalar(Scalar),
}

/// The shape of a [`Node`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Object,
    Array,
    Null,
    Bool,
    Int,
    Float,
    String,
}

impl NodeKind {
    /// Returns the lowercase name used in error messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Object => "object",
            NodeKind::Array => "array",
            NodeKind::Null => "null",
            NodeKind::Bool => "bool",
            NodeKind::Int => "int",
            NodeKind::Float => "float",
            NodeKind::String => "string",
        }
    }

    /// Returns true for object and array kinds.
    pub fn is_container(&self) -> bool {
        matches!(self, NodeKind::Object | NodeKind::Array)
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Node {
    /// Creates an empty object node.
    pub fn object() -> Self {
        Node::Object(Object::new())
    }

    /// Creates an empty array node.
    pub fn array() -> Self {
        Node::Array(Vec::new())
    }

    /// Creates the null placeholder.
    pub fn null() -> Self {
        Node::Scalar(Scalar::Null)
    }

    /// Creates an empty container of the given kind.
    ///
    /// Returns `None` for scalar kinds.
    pub fn empty_container(kind: NodeKind) -> Option<Self> {
        match kind {
            NodeKind::Object => Some(Node::object()),
            NodeKind::Array => Some(Node::array()),
            _ => None,
        }
    }

    /// Returns the shape of this node.
    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Object(_) => NodeKind::Object,
            Node::Array(_) => NodeKind::Array,
            Node::Scalar(scalar) => scalar.kind(),
        }
    }

    /// Returns true if this is an object or an array.
    pub fn is_container(&self) -> bool {
        matches!(self, Node::Object(_) | Node::Array(_))
    }

    /// Returns true if this is `Scalar(Null)`.
    pub fn is_null(&self) -> bool {
        matches!(self, Node::Scalar(Scalar::Null))
    }

    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Node::Object(object) => Some(object),
            _ => None,
        }
    }

    pub fn as_object_mut(&mut self) -> Option<&mut Object> {
        match self {
            Node::Object(object) => Some(object),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&Vec<Node>> {
        match self {
            Node::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_array_mut(&mut self) -> Option<&mut Vec<Node>> {
        match self {
            Node::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            Node::Scalar(scalar) => Some(scalar),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        self.as_scalar().and_then(Scalar::as_bool)
    }

    pub fn as_i64(&self) -> Option<i64> {
        self.as_scalar().and_then(Scalar::as_i64)
    }

    /// Returns the value as a float, widening integers.
    pub fn as_f64(&self) -> Option<f64> {
        self.as_scalar().and_then(Scalar::as_f64)
    }

    pub fn as_str(&self) -> Option<&str> {
        self.as_scalar().and_then(Scalar::as_str)
    }

    /// Returns the number of direct children, or 0 for scalars.
    pub fn len(&self) -> usize {
        match self {
            Node::Object(object) => object.len(),
            Node::Array(items) => items.len(),
            Node::Scalar(_) => 0,
        }
    }

    /// Returns true if this node has no direct children.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Renders the node as compact JSON-like text for display and logs.
    ///
    /// This is not a codec: floats are printed with Rust's `Display`, and
    /// non-finite floats come out as `NaN`/`inf`. Use
    /// [`JsonCodec`](crate::codec::JsonCodec) for real output.
    pub fn to_json_string(&self) -> String {
        let mut out = String::new();
        self.write_json(&mut out);
        out
    }

    fn write_json(&self, out: &mut String) {
        match self {
            Node::Object(object) => {
                out.push('{');
                for (i, (key, value)) in object.iter().enumerate() {
                    if i > 0 {
                        out.push(',');
                    }
                    write_quoted(out, key);
                    out.push(':');
                    value.write_json(out);
                }
                out.push('}');
            }
            Node::Array(items) => {
                out.push('[');
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        out.push(',');
                    }
                    item.write_json(out);
                }
                out.push(']');
            }
            Node::Scalar(Scalar::String(s)) => write_quoted(out, s),
            Node::Scalar(scalar) => out.push_str(&scalar.to_string()),
        }
    }
}

fn write_quoted(out: &mut String, s: &str) {
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if (c as u32) < 0x20 => out.push_str(&format!("\\u{:04x}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('"');
}

impl Default for Node {
    fn default() -> Self {
        Node::object()
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Scalar(scalar) => write!(f, "{scalar}"),
            container => f.write_str(&container.to_json_string()),
        }
    }
}

/// An insertion-ordered map from string keys to nodes.
///
/// Keys are unique. Replacing the value of an existing key keeps the key in
/// its original position; new keys are appended. Removal keeps the relative
/// order of the remaining keys.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Object {
    entries: IndexMap<String, Node>,
}

impl Object {
    /// Creates a new empty object
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: IndexMap::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<&Node> {
        self.entries.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Node> {
        self.entries.get_mut(key)
    }

    /// Sets `key` to `value`, returning the previous value if the key existed.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Node>) -> Option<Node> {
        self.entries.insert(key.into(), value.into())
    }

    /// Returns the slot for `key`, appending a null placeholder if absent.
    pub fn slot(&mut self, key: &str) -> &mut Node {
        self.entries
            .entry(key.to_string())
            .or_insert_with(Node::null)
    }

    /// Removes `key`, preserving the order of the remaining keys.
    pub fn remove(&mut self, key: &str) -> Option<Node> {
        self.entries.shift_remove(key)
    }

    /// Returns the position of `key` in enumeration order.
    pub fn position(&self, key: &str) -> Option<usize> {
        self.entries.get_index_of(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.entries.keys()
    }

    pub fn values(&self) -> impl Iterator<Item = &Node> {
        self.entries.values()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Node)> {
        self.entries.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&String, &mut Node)> {
        self.entries.iter_mut()
    }
}

impl<K: Into<String>, V: Into<Node>> FromIterator<(K, V)> for Object {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut object = Object::new();
        for (key, value) in iter {
            object.insert(key, value);
        }
        object
    }
}

impl IntoIterator for Object {
    type Item = (String, Node);
    type IntoIter = indexmap::map::IntoIter<String, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a Object {
    type Item = (&'a String, &'a Node);
    type IntoIter = indexmap::map::Iter<'a, String, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl From<Object> for Node {
    fn from(value: Object) -> Self {
        Node::Object(value)
    }
}

impl From<Vec<Node>> for Node {
    fn from(value: Vec<Node>) -> Self {
        Node::Array(value)
    }
}

impl From<Scalar> for Node {
    fn from(value: Scalar) -> Self {
        Node::Scalar(value)
    }
}

impl From<bool> for Node {
    fn from(value: bool) -> Self {
        Node::Scalar(Scalar::Bool(value))
    }
}

impl From<i64> for Node {
    fn from(value: i64) -> Self {
        Node::Scalar(Scalar::Int(value))
    }
}

impl From<i32> for Node {
    fn from(value: i32) -> Self {
        Node::Scalar(Scalar::Int(value as i64))
    }
}

impl From<u32> for Node {
    fn from(value: u32) -> Self {
        Node::Scalar(Scalar::Int(value as i64))
    }
}

impl From<f64> for Node {
    fn from(value: f64) -> Self {
        Node::Scalar(Scalar::Float(value))
    }
}

impl From<String> for Node {
    fn from(value: String) -> Self {
        Node::Scalar(Scalar::String(value))
    }
}

impl From<&str> for Node {
    fn from(value: &str) -> Self {
        Node::Scalar(Scalar::String(value.to_string()))
    }
}

impl From<()> for Node {
    fn from(_: ()) -> Self {
        Node::null()
    }
}

impl<T: Into<Node>> From<Option<T>> for Node {
    fn from(value: Option<T>) -> Self {
        value.map_or_else(Node::null, Into::into)
    }
}

// TryFrom implementations for typed reads
impl TryFrom<&Node> for String {
    type Error = NodeError;

    fn try_from(value: &Node) -> Result<Self, Self::Error> {
        value
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| NodeError::mismatch("string", value))
    }
}

impl<'a> TryFrom<&'a Node> for &'a str {
    type Error = NodeError;

    fn try_from(value: &'a Node) -> Result<Self, Self::Error> {
        value
            .as_str()
            .ok_or_else(|| NodeError::mismatch("string", value))
    }
}

impl TryFrom<&Node> for i64 {
    type Error = NodeError;

    fn try_from(value: &Node) -> Result<Self, Self::Error> {
        value.as_i64().ok_or_else(|| NodeError::mismatch("int", value))
    }
}

impl TryFrom<&Node> for f64 {
    type Error = NodeError;

    fn try_from(value: &Node) -> Result<Self, Self::Error> {
        value
            .as_f64()
            .ok_or_else(|| NodeError::mismatch("float", value))
    }
}

impl TryFrom<&Node> for bool {
    type Error = NodeError;

    fn try_from(value: &Node) -> Result<Self, Self::Error> {
        value
            .as_bool()
            .ok_or_else(|| NodeError::mismatch("bool", value))
    }
}

impl TryFrom<&Node> for Object {
    type Error = NodeError;

    fn try_from(value: &Node) -> Result<Self, Self::Error> {
        value
            .as_object()
            .cloned()
            .ok_or_else(|| NodeError::mismatch("object", value))
    }
}

// PartialEq implementations for comparing Node with primitives
impl PartialEq<str> for Node {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == Some(other)
    }
}

impl PartialEq<&str> for Node {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

impl PartialEq<String> for Node {
    fn eq(&self, other: &String) -> bool {
        self == other.as_str()
    }
}

impl PartialEq<i64> for Node {
    fn eq(&self, other: &i64) -> bool {
        matches!(self, Node::Scalar(Scalar::Int(n)) if n == other)
    }
}

impl PartialEq<i32> for Node {
    fn eq(&self, other: &i32) -> bool {
        *self == *other as i64
    }
}

impl PartialEq<f64> for Node {
    fn eq(&self, other: &f64) -> bool {
        matches!(self, Node::Scalar(Scalar::Float(n)) if n == other)
    }
}

impl PartialEq<bool> for Node {
    fn eq(&self, other: &bool) -> bool {
        self.as_bool() == Some(*other)
    }
}
