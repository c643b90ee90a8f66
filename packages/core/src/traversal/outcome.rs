//! Resolution outcomes with found vs missing distinction
//!
//! A deliberate null in the data is `Found(Null)`; a path that leads nowhere
//! is `Missing` with the reason it stopped.

use std::fmt;

use crate::value::{Value, ValueKind};

/// Why a path resolved to nothing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MissingReason {
    /// Mapping had no such key
    KeyNotFound {
        /// The key looked up
        key: String,
    },
    /// Index outside the sequence
    IndexOutOfBounds {
        /// Requested index, possibly negative
        index: i64,
        /// Length of the sequence
        len: usize,
    },
    /// Segment applied to the wrong kind of node
    TypeMismatch {
        /// Kind the segment needs
        expected: ValueKind,
        /// Kind actually found
        found: ValueKind,
    },
    /// Walked into a null before the path was exhausted
    NullEncountered,
    /// `only_if` rejected the value
    Filtered,
    /// An `apply` transform failed, panicked or produced null
    TransformFailed {
        /// Failure description
        message: String,
    },
}

impl fmt::Display for MissingReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MissingReason::KeyNotFound { key } => write!(f, "key '{key}' not found"),
            MissingReason::IndexOutOfBounds { index, len } => {
                write!(f, "index {index} out of bounds for length {len}")
            }
            MissingReason::TypeMismatch { expected, found } => {
                write!(f, "expected {expected}, found {found}")
            }
            MissingReason::NullEncountered => f.write_str("null encountered before end of path"),
            MissingReason::Filtered => f.write_str("value rejected by only_if"),
            MissingReason::TransformFailed { message } => write!(f, "transform failed: {message}"),
        }
    }
}

/// Result of resolving a path against a value
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The path led to this value (which may be a deliberate null)
    Found(Value),
    /// The path led nowhere
    Missing(MissingReason),
}

impl Outcome {
    /// Whether a value was found
    #[inline]
    #[must_use]
    pub fn is_found(&self) -> bool {
        matches!(self, Outcome::Found(_))
    }

    /// Whether the path led nowhere
    #[inline]
    #[must_use]
    pub fn is_missing(&self) -> bool {
        matches!(self, Outcome::Missing(_))
    }

    /// Borrow the found value
    #[inline]
    #[must_use]
    pub fn value(&self) -> Option<&Value> {
        match self {
            Outcome::Found(value) => Some(value),
            Outcome::Missing(_) => None,
        }
    }

    /// The reason when missing
    #[inline]
    #[must_use]
    pub fn reason(&self) -> Option<&MissingReason> {
        match self {
            Outcome::Found(_) => None,
            Outcome::Missing(reason) => Some(reason),
        }
    }

    /// Take the found value, dropping the reason
    ///
    /// Note: this loses the found-null vs missing distinction only if the
    /// caller then maps `None` to null.
    #[inline]
    #[must_use]
    pub fn into_value(self) -> Option<Value> {
        match self {
            Outcome::Found(value) => Some(value),
            Outcome::Missing(_) => None,
        }
    }

    /// Found value, or `default` when missing
    #[inline]
    #[must_use]
    pub fn unwrap_or(self, default: Value) -> Value {
        self.into_value().unwrap_or(default)
    }

    /// Map the found value
    #[inline]
    #[must_use]
    pub fn map(self, f: impl FnOnce(Value) -> Value) -> Self {
        match self {
            Outcome::Found(value) => Outcome::Found(f(value)),
            missing => missing,
        }
    }
}

impl From<Outcome> for Option<Value> {
    fn from(outcome: Outcome) -> Self {
        outcome.into_value()
    }
}
