//! Coercion policies.
//!
//! Host key semantics differ between integrations, so the ambiguous cases of
//! the dense-array heuristic are policies rather than fixed rules. Options
//! deserialize with every field defaulted, so a host can keep them in its own
//! configuration file:
//!
//! ```
//! use treepath::coerce::{CoercionOptions, EmptyKeyPolicy, ExtraKeyPolicy};
//!
//! let options: CoercionOptions = serde_json::from_str(r#"{"empty_keys": "keep"}"#)?;
//! assert_eq!(options.empty_keys, EmptyKeyPolicy::Keep);
//! assert_eq!(options.extra_keys, ExtraKeyPolicy::Drop);
//! assert!(!options.numeric_string_keys);
//! # Ok::<(), serde_json::Error>(())
//! ```

use serde::{Deserialize, Serialize};

/// What to do with non-index keys on a map whose index keys are dense.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtraKeyPolicy {
    /// Coerce to an array and drop the extra entries
    #[default]
    Drop,
    /// Coerce the whole map to an object instead
    KeepObject,
}

/// What to do with object entries whose key stringifies to `""`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyKeyPolicy {
    /// Leave the entry out
    #[default]
    Skip,
    /// Keep it under the empty key
    Keep,
}

/// Options for [`from_map`](super::from_map) and [`from_dyn`](super::from_dyn).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoercionOptions {
    pub extra_keys: ExtraKeyPolicy,
    pub empty_keys: EmptyKeyPolicy,
    /// Treat canonical decimal string keys ("0", "12") as array indices.
    pub numeric_string_keys: bool,
}
