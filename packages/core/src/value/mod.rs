//! Tree value model
//!
//! Every component in this crate operates on [`Value`], the JSON-shaped tagged
//! union from `serde_json` (null, boolean, number, string, sequence, mapping).
//! The crate enables `preserve_order`, so mapping keys keep their insertion
//! order on read. Ordering is never used for lookup.

mod ext;
mod kind;

pub use ext::{ValueExt, values_equal};
pub use kind::ValueKind;

/// The generic tree value all components operate on
pub type Value = serde_json::Value;

/// Mapping node of a [`Value`] tree (unique string keys, insertion ordered)
pub type Mapping = serde_json::Map<String, Value>;
