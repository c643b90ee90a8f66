//! Built-in checks

use std::fmt;
use std::sync::Arc;

use regex::Regex;

use super::check::{Check, Field, Requirement};
use crate::value::{Value, ValueExt, ValueKind, values_equal};

/// Fails when the field is missing or null
#[derive(Debug, Clone, Copy, Default)]
pub struct IsRequired;

impl Check for IsRequired {
    fn evaluate(&self, field: Field<'_>) -> Result<(), String> {
        match field {
            Field::Missing => Err("field is required".to_string()),
            Field::Present(Value::Null) => Err("field is required but was null".to_string()),
            Field::Present(_) => Ok(()),
        }
    }

    fn requirement(&self) -> Requirement {
        Requirement::Required
    }
}

/// Always passes; an absent field skips the other checks of its constraint
#[derive(Debug, Clone, Copy, Default)]
pub struct IsOptional;

/// Same as [`IsOptional`]
#[derive(Debug, Clone, Copy, Default)]
pub struct NotRequired;

macro_rules! optional_check {
    ($($ty:ty),*) => {
        $(
            impl Check for $ty {
                fn evaluate(&self, _field: Field<'_>) -> Result<(), String> {
                    Ok(())
                }

                fn requirement(&self) -> Requirement {
                    Requirement::Optional
                }
            }
        )*
    };
}

optional_check!(IsOptional, NotRequired);

/// Fails when present and not of the given kind
#[derive(Debug, Clone, Copy)]
pub struct IsType(pub ValueKind);

impl Check for IsType {
    fn evaluate(&self, field: Field<'_>) -> Result<(), String> {
        match field.value() {
            Some(value) if !self.0.matches(value) => Err(format!(
                "expected {}, found {}",
                self.0,
                ValueKind::of(value)
            )),
            _ => Ok(()),
        }
    }
}

/// Inclusive numeric bounds
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InRange {
    pub min: f64,
    pub max: f64,
}

impl InRange {
    #[must_use]
    pub fn new(min: impl Into<f64>, max: impl Into<f64>) -> Self {
        Self {
            min: min.into(),
            max: max.into(),
        }
    }
}

impl Check for InRange {
    fn evaluate(&self, field: Field<'_>) -> Result<(), String> {
        let Some(value) = field.value() else {
            return Ok(());
        };
        match value.as_f64() {
            Some(n) if n >= self.min && n <= self.max => Ok(()),
            Some(n) => Err(format!("{n} is not in range [{}, {}]", self.min, self.max)),
            None => Err(format!("expected number, found {}", ValueKind::of(value))),
        }
    }
}

/// Membership in a fixed set of values
#[derive(Debug, Clone, PartialEq)]
pub struct InSet(pub Vec<Value>);

impl InSet {
    #[must_use]
    pub fn new<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Self(values.into_iter().map(Into::into).collect())
    }
}

impl Check for InSet {
    fn evaluate(&self, field: Field<'_>) -> Result<(), String> {
        match field.value() {
            Some(value) if !self.0.iter().any(|member| values_equal(member, value)) => {
                Err(format!("{value} is not one of {}", Value::Array(self.0.clone())))
            }
            _ => Ok(()),
        }
    }
}

/// Minimum number of items (sequence, mapping) or characters (string)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinCount(pub usize);

impl Check for MinCount {
    fn evaluate(&self, field: Field<'_>) -> Result<(), String> {
        count_within(field, |count| {
            (count >= self.0)
                .then_some(())
                .ok_or_else(|| format!("expected at least {} items, found {count}", self.0))
        })
    }
}

/// Maximum number of items (sequence, mapping) or characters (string)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaxCount(pub usize);

impl Check for MaxCount {
    fn evaluate(&self, field: Field<'_>) -> Result<(), String> {
        count_within(field, |count| {
            (count <= self.0)
                .then_some(())
                .ok_or_else(|| format!("expected at most {} items, found {count}", self.0))
        })
    }
}

fn count_within(field: Field<'_>, bound: impl FnOnce(usize) -> Result<(), String>) -> Result<(), String> {
    let Some(value) = field.value() else {
        return Ok(());
    };
    match value.count() {
        Some(count) => bound(count),
        None => Err(format!("{} has no size", ValueKind::of(value))),
    }
}

/// Exact value
#[derive(Debug, Clone, PartialEq)]
pub struct Equals(pub Value);

impl Equals {
    #[must_use]
    pub fn new(value: impl Into<Value>) -> Self {
        Self(value.into())
    }
}

impl Check for Equals {
    fn evaluate(&self, field: Field<'_>) -> Result<(), String> {
        match field.value() {
            Some(value) if !values_equal(value, &self.0) => {
                Err(format!("expected {}, found {value}", self.0))
            }
            _ => Ok(()),
        }
    }
}

/// String matching a regular expression
#[derive(Debug, Clone)]
pub struct Matches(pub Regex);

impl Matches {
    /// Compile `pattern`
    ///
    /// # Errors
    /// Returns the regex error for invalid patterns.
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        Regex::new(pattern).map(Self)
    }
}

impl Check for Matches {
    fn evaluate(&self, field: Field<'_>) -> Result<(), String> {
        match field.value() {
            None => Ok(()),
            Some(Value::String(s)) if self.0.is_match(s) => Ok(()),
            Some(Value::String(s)) => Err(format!("'{s}' does not match /{}/", self.0.as_str())),
            Some(other) => Err(format!("expected string, found {}", ValueKind::of(other))),
        }
    }
}

/// Named caller-supplied predicate over present values
#[derive(Clone)]
pub struct Predicate {
    name: String,
    test: Arc<dyn Fn(&Value) -> bool + Send + Sync>,
}

impl Predicate {
    pub fn new<F>(name: impl Into<String>, test: F) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            test: Arc::new(test),
        }
    }
}

impl fmt::Debug for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Predicate").field(&self.name).finish()
    }
}

impl Check for Predicate {
    fn evaluate(&self, field: Field<'_>) -> Result<(), String> {
        match field.value() {
            Some(value) if !(self.test)(value) => Err(format!("{} failed for {value}", self.name)),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn in_range_is_inclusive() {
        let check = InRange::new(2, 4);
        assert!(check.evaluate(Field::Present(&json!(2))).is_ok());
        assert!(check.evaluate(Field::Present(&json!(4.0))).is_ok());
        assert!(check.evaluate(Field::Present(&json!(5))).is_err());
        assert!(check.evaluate(Field::Present(&json!("3"))).is_err());
    }

    #[test]
    fn value_checks_pass_on_absent_fields() {
        let absent = [Field::Missing, Field::Present(&Value::Null)];
        for field in absent {
            assert!(InRange::new(0, 1).evaluate(field).is_ok());
            assert!(IsType(ValueKind::String).evaluate(field).is_ok());
            assert!(MinCount(1).evaluate(field).is_ok());
            assert!(IsRequired.evaluate(field).is_err());
        }
    }

    #[test]
    fn counts_and_membership() {
        assert!(MinCount(2).evaluate(Field::Present(&json!([1]))).is_err());
        assert!(MaxCount(1).evaluate(Field::Present(&json!({"a": 1}))).is_ok());
        assert!(MaxCount(1).evaluate(Field::Present(&json!(3))).is_err());
        assert!(InSet::new(["a", "b"]).evaluate(Field::Present(&json!("b"))).is_ok());
        assert!(InSet::new(["a", "b"]).evaluate(Field::Present(&json!("c"))).is_err());
    }

    #[test]
    fn integers_and_floats_of_equal_value_match() {
        assert!(InSet::new([1]).evaluate(Field::Present(&json!(1.0))).is_ok());
        assert!(InSet::new([1.5, 2.0]).evaluate(Field::Present(&json!(2))).is_ok());
        assert!(Equals::new(2).evaluate(Field::Present(&json!(2.0))).is_ok());
        assert!(Equals::new(json!({"n": [1]})).evaluate(Field::Present(&json!({"n": [1.0]}))).is_ok());
        assert!(Equals::new(2).evaluate(Field::Present(&json!(2.5))).is_err());
    }

    #[test]
    fn matches_requires_strings() {
        let check = Matches::new(r"^\d{3}$").unwrap();
        assert!(check.evaluate(Field::Present(&json!("123"))).is_ok());
        assert!(check.evaluate(Field::Present(&json!("12a"))).is_err());
        assert!(check.evaluate(Field::Present(&json!(123))).is_err());
    }
}
