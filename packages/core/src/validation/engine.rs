//! Validation entry point

use super::check::Field;
use super::constraint::Constraint;
use super::error::{ValidationError, ValidationErrors};
use super::rules::{Rule, RuleGroup};
use crate::path::Path;
use crate::value::Value;

/// Anything `validate` can run: a rule, a rule group or a constraint literal
pub trait Validate {
    /// Append every failure for `data`, in declaration order
    fn collect_errors(&self, data: &Value, errors: &mut Vec<ValidationError>);
}

impl Validate for Rule {
    fn collect_errors(&self, data: &Value, errors: &mut Vec<ValidationError>) {
        Rule::collect_errors(self, data, errors);
    }
}

impl Validate for RuleGroup {
    fn collect_errors(&self, data: &Value, errors: &mut Vec<ValidationError>) {
        RuleGroup::collect_errors(self, data, errors);
    }
}

/// A constraint validates the whole value; nested [`Constraint::Fields`]
/// qualify errors with their key paths
impl Validate for Constraint {
    fn collect_errors(&self, data: &Value, errors: &mut Vec<ValidationError>) {
        self.check_field(&Path::root(), Field::Present(data), errors);
    }
}

/// Validate `data`, returning it unchanged on success
///
/// # Errors
/// Returns every failure, in rule declaration order, when at least one check
/// fails.
pub fn validate<'a, R>(data: &'a Value, rules: &R) -> Result<&'a Value, ValidationErrors>
where
    R: Validate + ?Sized,
{
    let span = tracing::debug_span!("validation.validate");
    let _enter = span.enter();

    let mut errors = Vec::new();
    rules.collect_errors(data, &mut errors);

    tracing::debug!(errors = errors.len(), "validation complete");
    if errors.is_empty() {
        Ok(data)
    } else {
        Err(ValidationErrors(errors))
    }
}
