//! The check capability

use std::fmt::Debug;

use crate::value::Value;

/// The field a check is evaluated against
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Field<'a> {
    /// The path resolved to this value (possibly a deliberate null)
    Present(&'a Value),
    /// The path resolved to nothing
    Missing,
}

impl<'a> Field<'a> {
    /// The value when present and not null
    #[inline]
    #[must_use]
    pub fn value(self) -> Option<&'a Value> {
        match self {
            Field::Present(Value::Null) | Field::Missing => None,
            Field::Present(value) => Some(value),
        }
    }

    /// Missing or null
    #[inline]
    #[must_use]
    pub fn is_absent(self) -> bool {
        self.value().is_none()
    }
}

/// How a check affects the required-field logic of its constraint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Requirement {
    /// Plain value check
    #[default]
    Neutral,
    /// Absence is a failure
    Required,
    /// Absence skips every other check on the field
    Optional,
}

/// An atomic validation predicate
///
/// Implement this to add checks of your own; they compose with the built-ins
/// through [`Constraint`](super::Constraint).
///
/// Value checks should pass on absent fields and leave absence to
/// [`IsRequired`](super::IsRequired).
pub trait Check: Debug + Send + Sync {
    /// `Ok(())` on pass, `Err(message)` on failure
    ///
    /// # Errors
    /// Returns the failure message when the field does not satisfy the check.
    fn evaluate(&self, field: Field<'_>) -> Result<(), String>;

    /// Role of this check in required-field logic
    fn requirement(&self) -> Requirement {
        Requirement::Neutral
    }
}
