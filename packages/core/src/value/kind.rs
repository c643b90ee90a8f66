//! Value kind classification
//!
//! Used by `IsType` checks and by `TypeMismatch` reasons to describe what a
//! traversal step expected and what it actually found.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Value;

/// Shape of a [`Value`] node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueKind {
    /// JSON null
    Null,
    /// Boolean
    Bool,
    /// Integral number (matches `i64`/`u64` representable numbers only)
    Integer,
    /// Any number, integral or floating point
    Number,
    /// String
    String,
    /// Sequence of values
    Sequence,
    /// String-keyed mapping
    Mapping,
}

impl ValueKind {
    /// Classify a value by its most specific kind
    ///
    /// Integral numbers report [`ValueKind::Integer`]; use [`ValueKind::matches`]
    /// when a check should accept any number.
    #[must_use]
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => ValueKind::Null,
            Value::Bool(_) => ValueKind::Bool,
            Value::Number(n) if n.is_i64() || n.is_u64() => ValueKind::Integer,
            Value::Number(_) => ValueKind::Number,
            Value::String(_) => ValueKind::String,
            Value::Array(_) => ValueKind::Sequence,
            Value::Object(_) => ValueKind::Mapping,
        }
    }

    /// Whether `value` is an instance of this kind
    #[must_use]
    pub fn matches(self, value: &Value) -> bool {
        match self {
            ValueKind::Number => value.is_number(),
            kind => ValueKind::of(value) == kind,
        }
    }

    /// Lowercase name used in messages
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ValueKind::Null => "null",
            ValueKind::Bool => "bool",
            ValueKind::Integer => "integer",
            ValueKind::Number => "number",
            ValueKind::String => "string",
            ValueKind::Sequence => "sequence",
            ValueKind::Mapping => "mapping",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
