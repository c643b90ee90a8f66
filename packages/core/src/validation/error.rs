//! Validation failures

use std::ops::Deref;

use thiserror::Error;

use crate::path::Path;

/// One failed check, qualified by the full path of the field
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}: {message}", display_field(field))]
pub struct ValidationError {
    /// Field the check ran against
    pub field: Path,
    /// Failure message from the check
    pub message: String,
}

impl ValidationError {
    pub(crate) fn new(field: Path, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

fn display_field(field: &Path) -> String {
    if field.is_empty() {
        "<root>".to_string()
    } else {
        field.to_string()
    }
}

/// Every failure of one `validate` call, in rule declaration order
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("validation failed with {} error(s): {}", .0.len(), join_errors(.0))]
pub struct ValidationErrors(pub Vec<ValidationError>);

impl ValidationErrors {
    /// Consume into the error list
    #[must_use]
    pub fn into_inner(self) -> Vec<ValidationError> {
        self.0
    }
}

impl Deref for ValidationErrors {
    type Target = [ValidationError];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl IntoIterator for ValidationErrors {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
