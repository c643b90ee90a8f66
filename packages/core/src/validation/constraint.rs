//! Recursive constraint tree
//!
//! Kept separate from [`Value`]: a nested field mapping here mirrors the
//! shape of the data but is never confused with data.

use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::Arc;

use super::check::{Check, Field, Requirement};
use super::error::ValidationError;
use crate::path::{Path, PathSegment, compile};
use crate::traversal::{Outcome, panic_message, resolve};
use crate::value::{Value, ValueKind};

/// A composable validation constraint
#[derive(Debug, Clone)]
pub enum Constraint {
    /// Leaf check
    Check(Arc<dyn Check>),
    /// Every constraint must pass; errors accumulate in order
    All(Vec<Constraint>),
    /// At least one constraint must pass
    Any(Vec<Constraint>),
    /// Each key path is resolved inside the field under test and checked
    Fields(Vec<(String, Constraint)>),
    /// Every element of a sequence field must pass
    Each(Box<Constraint>),
}

impl<C: Check + 'static> From<C> for Constraint {
    fn from(check: C) -> Self {
        Constraint::Check(Arc::new(check))
    }
}

impl Constraint {
    /// Empty nested-field constraint; add keys with [`Constraint::field`]
    #[must_use]
    pub fn fields() -> Self {
        Constraint::Fields(Vec::new())
    }

    /// Add a key to a [`Constraint::Fields`]; other variants are wrapped first
    ///
    /// `key` is a path relative to the field under test and may be dotted.
    #[must_use]
    pub fn field(self, key: impl Into<String>, constraint: impl Into<Constraint>) -> Self {
        let entry = (key.into(), constraint.into());
        match self {
            Constraint::Fields(mut entries) => {
                entries.push(entry);
                Constraint::Fields(entries)
            }
            other => other.and(Constraint::Fields(vec![entry])),
        }
    }

    /// Apply `constraint` to every element of a sequence
    #[must_use]
    pub fn each(constraint: impl Into<Constraint>) -> Self {
        Constraint::Each(Box::new(constraint.into()))
    }

    /// All-of composition, flattening nested `All`s
    #[must_use]
    pub fn and(self, other: Constraint) -> Self {
        match (self, other) {
            (Constraint::All(mut left), Constraint::All(right)) => {
                left.extend(right);
                Constraint::All(left)
            }
            (Constraint::All(mut left), right) => {
                left.push(right);
                Constraint::All(left)
            }
            (left, Constraint::All(mut right)) => {
                right.insert(0, left);
                Constraint::All(right)
            }
            (left, right) => Constraint::All(vec![left, right]),
        }
    }

    /// Any-of composition, flattening nested `Any`s
    #[must_use]
    pub fn or(self, other: Constraint) -> Self {
        match (self, other) {
            (Constraint::Any(mut left), Constraint::Any(right)) => {
                left.extend(right);
                Constraint::Any(left)
            }
            (Constraint::Any(mut left), right) => {
                left.push(right);
                Constraint::Any(left)
            }
            (left, Constraint::Any(mut right)) => {
                right.insert(0, left);
                Constraint::Any(right)
            }
            (left, right) => Constraint::Any(vec![left, right]),
        }
    }

    /// Whether an absent field skips this constraint entirely
    fn is_optional(&self) -> bool {
        match self {
            Constraint::Check(check) => check.requirement() == Requirement::Optional,
            Constraint::All(constraints) => constraints.iter().any(Constraint::is_optional),
            _ => false,
        }
    }

    /// Evaluate against the field at `at`, appending failures to `errors`
    pub(crate) fn check_field(&self, at: &Path, field: Field<'_>, errors: &mut Vec<ValidationError>) {
        if field.is_absent() && self.is_optional() {
            return;
        }

        match self {
            Constraint::Check(check) => {
                let message = match catch_unwind(AssertUnwindSafe(|| check.evaluate(field))) {
                    Ok(Ok(())) => return,
                    Ok(Err(message)) => message,
                    Err(payload) => {
                        let message = panic_message(payload.as_ref());
                        log::warn!("Check {check:?} at '{at}' {message}");
                        format!("check {message}")
                    }
                };
                errors.push(ValidationError::new(at.clone(), message));
            }
            Constraint::All(constraints) => {
                for constraint in constraints {
                    constraint.check_field(at, field, errors);
                }
            }
            Constraint::Any(alternatives) => {
                let mut collected = Vec::new();
                for alternative in alternatives {
                    let mut attempt = Vec::new();
                    alternative.check_field(at, field, &mut attempt);
                    if attempt.is_empty() {
                        return;
                    }
                    collected.extend(attempt);
                }
                errors.extend(collected);
            }
            Constraint::Fields(entries) => {
                for (key, constraint) in entries {
                    check_nested(at, field, key, constraint, errors);
                }
            }
            Constraint::Each(constraint) => match field {
                Field::Present(Value::Array(items)) => {
                    for (index, item) in items.iter().enumerate() {
                        let index = i64::try_from(index).unwrap_or(i64::MAX);
                        let at = at.child(PathSegment::Index(index));
                        constraint.check_field(&at, Field::Present(item), errors);
                    }
                }
                Field::Present(Value::Null) | Field::Missing => {}
                Field::Present(other) => errors.push(ValidationError::new(
                    at.clone(),
                    format!("expected sequence, found {}", ValueKind::of(other)),
                )),
            },
        }
    }
}

/// Resolve `key` inside the field under test and recurse
fn check_nested(
    at: &Path,
    field: Field<'_>,
    key: &str,
    constraint: &Constraint,
    errors: &mut Vec<ValidationError>,
) {
    let key_path = match compile(key) {
        Ok(path) => path,
        Err(err) => {
            log::warn!("Skipping nested rule with malformed key '{key}': {err}");
            errors.push(ValidationError::new(
                at.join(&Path::verbatim(key)),
                format!("invalid rule path: {err}"),
            ));
            return;
        }
    };

    let nested_at = at.join(&key_path);
    let resolved = field.value().map(|value| resolve(value, &key_path));
    match resolved {
        Some(Outcome::Found(value)) => {
            constraint.check_field(&nested_at, Field::Present(&value), errors);
        }
        Some(Outcome::Missing(_)) | None => {
            constraint.check_field(&nested_at, Field::Missing, errors);
        }
    }
}
