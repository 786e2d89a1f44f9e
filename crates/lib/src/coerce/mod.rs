//! Conversion from host values into document trees.
//!
//! Script hosts use one ordered map type for both lists and records. Turning
//! such a map into a [`Node`] uses the dense-array heuristic: when the map's
//! integer keys are exactly `0..n`, it becomes an [`Node::Array`] in index
//! order; otherwise it becomes an [`Node::Object`] in insertion order with
//! every key stringified.
//!
//! Coercion is total. Every input produces a node, and the ambiguous cases
//! (extra keys on a dense map, keys that stringify to `""`) are resolved by
//! [`CoercionOptions`] and reported through `tracing` rather than returned
//! as errors.
//!
//! ```
//! use treepath::coerce::{self, CoercionOptions, DynMap};
//!
//! let list = DynMap::new().with(0, "a").with(1, "b").with(2, "c");
//! let node = coerce::from_map(&list, None, &CoercionOptions::default());
//! assert_eq!(node.to_json_string(), r#"["a","b","c"]"#);
//!
//! let gappy = DynMap::new().with(0, "a").with(2, "c");
//! let node = coerce::from_map(&gappy, None, &CoercionOptions::default());
//! assert_eq!(node.to_json_string(), r#"{"0":"a","2":"c"}"#);
//! ```

use std::{any::Any, fmt::Debug};

use crate::node::{Node, Object, Scalar};

pub mod dynamic;
pub mod options;

pub use dynamic::{DynKey, DynMap, DynValue};
pub use options::{CoercionOptions, EmptyKeyPolicy, ExtraKeyPolicy};

/// Converts a host map into a tree.
///
/// `header` names the columns of tabular data: every direct child map of
/// `map` that would become an array (a row) becomes an object instead, with
/// `header[i]` as the key for index `i`. Indices past the end of the header
/// keep their stringified index. `map` itself is shaped by the normal rules.
pub fn from_map(map: &DynMap, header: Option<&[String]>, options: &CoercionOptions) -> Node {
    let Some(header) = header else {
        return coerce_map(map, options);
    };

    match dense_values(map, options) {
        Some(rows) => Node::Array(
            rows.into_iter()
                .map(|row| coerce_row(row, header, options))
                .collect(),
        ),
        None => {
            let entries = map.iter().map(|(k, v)| (k, coerce_row(v, header, options)));
            Node::Object(collect_object(entries, options))
        }
    }
}

/// Converts any host value into a tree.
pub fn from_dyn(value: &DynValue, options: &CoercionOptions) -> Node {
    match value {
        DynValue::Null => Node::null(),
        DynValue::Bool(b) => Node::from(*b),
        DynValue::Int(n) => Node::from(*n),
        DynValue::Float(n) => Node::from(*n),
        DynValue::Text(s) => Node::from(s.as_str()),
        DynValue::Map(map) => coerce_map(map, options),
        DynValue::List(items) => Node::Array(items.iter().map(|v| from_dyn(v, options)).collect()),
    }
}

/// Converts an arbitrary leaf value by inspecting its runtime type.
///
/// Booleans, integers, floats, strings and chars map to the matching
/// scalar; integers outside the `i64` range become floats; `()` and `None`
/// are null. `Option`s of those leaf types unwrap to their value. Nodes,
/// scalars and host values pass through. Anything else becomes a string
/// holding its `Debug` rendering.
///
/// ```
/// use treepath::{coerce::from_scalar_like, node::Node};
///
/// assert_eq!(from_scalar_like(&7u8), Node::from(7));
/// assert_eq!(from_scalar_like(&'x'), Node::from("x"));
/// assert_eq!(from_scalar_like(&None::<i64>), Node::null());
/// assert_eq!(from_scalar_like(&u64::MAX), Node::from(u64::MAX as f64));
/// assert_eq!(from_scalar_like(&std::time::Duration::from_secs(1)), Node::from("1s"));
/// ```
pub fn from_scalar_like<T: Any + Debug>(value: &T) -> Node {
    let any = value as &dyn Any;

    macro_rules! signed {
        ($($ty:ty),*) => {$(
            if let Some(v) = any.downcast_ref::<$ty>() {
                return Node::from(*v as i64);
            }
        )*};
    }
    macro_rules! wide {
        ($($ty:ty),*) => {$(
            if let Some(v) = any.downcast_ref::<$ty>() {
                return i64::try_from(*v).map_or(Node::from(*v as f64), Node::from);
            }
        )*};
    }

    signed!(i8, i16, i32, i64, u8, u16, u32);
    wide!(isize, usize, u64, i128, u128);

    if let Some(v) = any.downcast_ref::<bool>() {
        return Node::from(*v);
    }
    if let Some(v) = any.downcast_ref::<f64>() {
        return Node::from(*v);
    }
    if let Some(v) = any.downcast_ref::<f32>() {
        return Node::from(*v as f64);
    }
    if let Some(v) = any.downcast_ref::<String>() {
        return Node::from(v.as_str());
    }
    if let Some(v) = any.downcast_ref::<&str>() {
        return Node::from(*v);
    }
    if let Some(v) = any.downcast_ref::<char>() {
        return Node::from(v.to_string());
    }
    if any.is::<()>() {
        return Node::null();
    }

    macro_rules! optional {
        ($($ty:ty),*) => {$(
            if let Some(v) = any.downcast_ref::<Option<$ty>>() {
                return v.as_ref().map_or_else(Node::null, from_scalar_like);
            }
        )*};
    }

    optional!(bool, i32, i64, u32, u64, usize, f32, f64, char, String, &'static str, Node);

    if let Some(v) = any.downcast_ref::<Node>() {
        return v.clone();
    }
    if let Some(v) = any.downcast_ref::<Scalar>() {
        return Node::Scalar(v.clone());
    }
    if let Some(v) = any.downcast_ref::<DynValue>() {
        return from_dyn(v, &CoercionOptions::default());
    }

    Node::from(format!("{value:?}"))
}

/// Converts a tree back into host values.
///
/// Objects become maps with string keys and arrays become maps with integer
/// keys `0..n`, so [`from_map`] with default options restores the tree,
/// with two exceptions:
///
/// - an empty object comes back as an empty array
/// - entries under the key `""` are dropped by [`EmptyKeyPolicy::Skip`];
///   use [`EmptyKeyPolicy::Keep`] to restore them
pub fn to_dyn(node: &Node) -> DynValue {
    match node {
        Node::Object(object) => DynValue::Map(
            object
                .iter()
                .map(|(k, v)| (DynKey::from(k.as_str()), to_dyn(v)))
                .collect(),
        ),
        Node::Array(items) => DynValue::Map(
            items
                .iter()
                .enumerate()
                .map(|(i, v)| (DynKey::from(i), to_dyn(v)))
                .collect(),
        ),
        Node::Scalar(Scalar::Null) => DynValue::Null,
        Node::Scalar(Scalar::Bool(b)) => DynValue::Bool(*b),
        Node::Scalar(Scalar::Int(n)) => DynValue::Int(*n),
        Node::Scalar(Scalar::Float(n)) => DynValue::Float(*n),
        Node::Scalar(Scalar::String(s)) => DynValue::Text(s.clone()),
    }
}

fn coerce_map(map: &DynMap, options: &CoercionOptions) -> Node {
    match dense_values(map, options) {
        Some(values) => Node::Array(values.into_iter().map(|v| from_dyn(v, options)).collect()),
        None => {
            let entries = map.iter().map(|(k, v)| (k, from_dyn(v, options)));
            Node::Object(collect_object(entries, options))
        }
    }
}

/// Coerces one row of tabular data, naming dense columns from `header`.
fn coerce_row(value: &DynValue, header: &[String], options: &CoercionOptions) -> Node {
    let DynValue::Map(map) = value else {
        return from_dyn(value, options);
    };
    let Some(cells) = dense_values(map, options) else {
        return coerce_map(map, options);
    };

    let mut row = Object::with_capacity(cells.len());
    for (i, cell) in cells.into_iter().enumerate() {
        let key = header.get(i).cloned().unwrap_or_else(|| i.to_string());
        if key.is_empty() && options.empty_keys == EmptyKeyPolicy::Skip {
            tracing::warn!(column = i, "Skipping column with empty header name");
            continue;
        }
        row.insert(key, from_dyn(cell, options));
    }
    Node::Object(row)
}

/// Returns the map's values in index order if its integer keys are dense.
///
/// Integer keys are `DynKey::Int` (and canonical numeric strings when
/// enabled). With `n` integer keys, the map is dense when every index in
/// `0..n` is present. The empty map is dense; a non-empty map without any
/// integer keys is not.
fn dense_values<'a>(map: &'a DynMap, options: &CoercionOptions) -> Option<Vec<&'a DynValue>> {
    let numeric_strings = options.numeric_string_keys;
    let is_integer_key = |key: &DynKey| match key {
        DynKey::Int(_) => true,
        DynKey::Str(_) => key.as_index(numeric_strings).is_some(),
        _ => false,
    };

    let count = map.iter().filter(|(k, _)| is_integer_key(k)).count();
    if count == 0 && !map.is_empty() {
        return None;
    }

    let mut slots: Vec<Option<&DynValue>> = vec![None; count];
    for (key, value) in map.iter().filter(|(k, _)| is_integer_key(k)) {
        let slot = slots.get_mut(key.as_index(numeric_strings)?)?;
        if slot.is_some() {
            // Int(1) and "1" both claim index 1
            return None;
        }
        *slot = Some(value);
    }

    let values: Vec<&DynValue> = slots.into_iter().collect::<Option<_>>()?;

    let extra = map.len() - count;
    if extra > 0 {
        match options.extra_keys {
            ExtraKeyPolicy::KeepObject => return None,
            ExtraKeyPolicy::Drop => {
                tracing::warn!(extra, "Dropping non-index keys from dense map");
            }
        }
    }
    Some(values)
}

fn collect_object<'a>(
    entries: impl Iterator<Item = (&'a DynKey, Node)>,
    options: &CoercionOptions,
) -> Object {
    let mut object = Object::new();
    for (key, value) in entries {
        let key = key.to_string();
        if key.is_empty() && options.empty_keys == EmptyKeyPolicy::Skip {
            tracing::warn!("Skipping map entry whose key stringifies to an empty string");
            continue;
        }
        object.insert(key, value);
    }
    object
}
