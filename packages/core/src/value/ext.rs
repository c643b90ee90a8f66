//! Extension helpers on [`Value`]

use super::{Value, ValueKind};

/// Convenience queries used by traversal, mapper cleanup and validation
pub trait ValueExt {
    /// Kind of this node
    fn kind(&self) -> ValueKind;

    /// Null, empty string, empty sequence or empty mapping
    fn is_empty_value(&self) -> bool;

    /// Number of items for sequences and mappings, characters for strings
    fn count(&self) -> Option<usize>;

    /// Flatten a sequence of sequences by one level
    ///
    /// Nested sequences are spliced into the result, Null elements are dropped
    /// and any other element is kept in place. Non-sequences are returned as-is.
    #[must_use]
    fn flatten_once(self) -> Value;
}

impl ValueExt for Value {
    #[inline]
    fn kind(&self) -> ValueKind {
        ValueKind::of(self)
    }

    fn is_empty_value(&self) -> bool {
        match self {
            Value::Null => true,
            Value::String(s) => s.is_empty(),
            Value::Array(items) => items.is_empty(),
            Value::Object(map) => map.is_empty(),
            Value::Bool(_) | Value::Number(_) => false,
        }
    }

    fn count(&self) -> Option<usize> {
        match self {
            Value::String(s) => Some(s.chars().count()),
            Value::Array(items) => Some(items.len()),
            Value::Object(map) => Some(map.len()),
            _ => None,
        }
    }

    fn flatten_once(self) -> Value {
        let Value::Array(items) = self else {
            return self;
        };
        let mut flat = Vec::with_capacity(items.len());
        for item in items {
            match item {
                Value::Array(inner) => flat.extend(inner),
                Value::Null => {}
                other => flat.push(other),
            }
        }
        Value::Array(flat)
    }
}

/// Structural equality where numbers compare by value
///
/// `2` and `2.0` are equal here, unlike `Value`'s own `==`. Sequences and
/// mappings compare element-wise with the same rule; mapping order is ignored.
#[must_use]
pub fn values_equal(lhs: &Value, rhs: &Value) -> bool {
    match (lhs, rhs) {
        (Value::Number(a), Value::Number(b)) => {
            if let (Some(a), Some(b)) = (a.as_i64(), b.as_i64()) {
                a == b
            } else if let (Some(a), Some(b)) = (a.as_u64(), b.as_u64()) {
                a == b
            } else {
                a.as_f64().zip(b.as_f64()).is_some_and(|(a, b)| a == b)
            }
        }
        (Value::Array(a), Value::Array(b)) => {
            a.len() == b.len() && a.iter().zip(b).all(|(a, b)| values_equal(a, b))
        }
        (Value::Object(a), Value::Object(b)) => {
            a.len() == b.len()
                && a.iter()
                    .all(|(key, value)| b.get(key).is_some_and(|other| values_equal(value, other)))
        }
        _ => lhs == rhs,
    }
}
