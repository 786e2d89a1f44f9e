//! The host's loosely typed values.
//!
//! Script hosts hand over a single ordered map type whose keys may be
//! integers, strings, or anything else the script used. [`DynMap`] models
//! that container: insertion order is preserved and keys are unique.

use std::fmt;

/// A key in a host map.
#[derive(Debug, Clone, PartialEq)]
pub enum DynKey {
    Int(i64),
    Str(String),
    Float(f64),
    Bool(bool),
    Null,
}

impl DynKey {
    /// Returns the key as a non-negative array index, if it is one.
    ///
    /// With `numeric_strings`, canonical decimal strings (`"0"`, `"17"`, but
    /// not `"007"` or `"+1"`) also count.
    pub fn as_index(&self, numeric_strings: bool) -> Option<usize> {
        match self {
            DynKey::Int(n) => usize::try_from(*n).ok(),
            DynKey::Str(s) if numeric_strings && is_canonical_index(s) => s.parse().ok(),
            _ => None,
        }
    }
}

fn is_canonical_index(s: &str) -> bool {
    match s.as_bytes() {
        [] => false,
        [b'0'] => true,
        [b'0', ..] => false,
        bytes => bytes.iter().all(u8::is_ascii_digit),
    }
}

/// Stringification used for object keys. `Null` becomes the empty string.
impl fmt::Display for DynKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DynKey::Int(n) => write!(f, "{n}"),
            DynKey::Str(s) => f.write_str(s),
            DynKey::Float(n) => write!(f, "{n}"),
            DynKey::Bool(b) => write!(f, "{b}"),
            DynKey::Null => Ok(()),
        }
    }
}

impl From<i64> for DynKey {
    fn from(value: i64) -> Self {
        DynKey::Int(value)
    }
}

impl From<i32> for DynKey {
    fn from(value: i32) -> Self {
        DynKey::Int(value as i64)
    }
}

impl From<usize> for DynKey {
    fn from(value: usize) -> Self {
        i64::try_from(value).map_or(DynKey::Float(value as f64), DynKey::Int)
    }
}

impl From<&str> for DynKey {
    fn from(value: &str) -> Self {
        DynKey::Str(value.to_string())
    }
}

impl From<String> for DynKey {
    fn from(value: String) -> Self {
        DynKey::Str(value)
    }
}

impl From<bool> for DynKey {
    fn from(value: bool) -> Self {
        DynKey::Bool(value)
    }
}

impl From<f64> for DynKey {
    fn from(value: f64) -> Self {
        DynKey::Float(value)
    }
}

/// A value handed over by the host.
#[derive(Debug, Clone, PartialEq)]
pub enum DynValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    Map(DynMap),
    List(Vec<DynValue>),
}

impl From<bool> for DynValue {
    fn from(value: bool) -> Self {
        DynValue::Bool(value)
    }
}

impl From<i64> for DynValue {
    fn from(value: i64) -> Self {
        DynValue::Int(value)
    }
}

impl From<i32> for DynValue {
    fn from(value: i32) -> Self {
        DynValue::Int(value as i64)
    }
}

impl From<f64> for DynValue {
    fn from(value: f64) -> Self {
        DynValue::Float(value)
    }
}

impl From<&str> for DynValue {
    fn from(value: &str) -> Self {
        DynValue::Text(value.to_string())
    }
}

impl From<String> for DynValue {
    fn from(value: String) -> Self {
        DynValue::Text(value)
    }
}

impl From<DynMap> for DynValue {
    fn from(value: DynMap) -> Self {
        DynValue::Map(value)
    }
}

impl From<Vec<DynValue>> for DynValue {
    fn from(value: Vec<DynValue>) -> Self {
        DynValue::List(value)
    }
}

/// An insertion-ordered map with arbitrary keys.
///
/// Re-inserting an existing key replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DynMap {
    entries: Vec<(DynKey, DynValue)>,
}

impl DynMap {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sets `key` to `value`, returning the previous value if the key existed.
    pub fn insert(&mut self, key: impl Into<DynKey>, value: impl Into<DynValue>) -> Option<DynValue> {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    pub fn get(&self, key: &DynKey) -> Option<&DynValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<DynKey>, value: impl Into<DynValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (&DynKey, &DynValue)> {
        self.entries.iter().map(|(k, v)| (k, v))
    }
}

impl<K: Into<DynKey>, V: Into<DynValue>> FromIterator<(K, V)> for DynMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = DynMap::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}
