//! Public retrieval entry points
//!
//! Transform and predicate failures are downgraded to `Missing` here and never
//! propagate. This can hide bugs in the callables themselves; enable debug
//! logging for `dendro_core` to see each downgrade.

use std::any::Any;
use std::panic::{AssertUnwindSafe, catch_unwind};

use super::engine::resolve;
use super::options::{GetOptions, Transform};
use super::outcome::{MissingReason, Outcome};
use super::strict;
use crate::error::{GetError, ParseResult};
use crate::mapper::{DropLevel, Node};
use crate::path::compile;
use crate::value::{Value, ValueExt};

/// Resolve `path` and apply `flatten`, `only_if` and the `apply` chain
///
/// The result still distinguishes found from missing; `strict`, `drop_level`
/// and `default` are boundary concerns handled by [`get`] and [`get_node`].
///
/// # Errors
/// Returns `ParseError::Malformed` when `path` is not a valid path string.
pub fn retrieve(source: &Value, path: &str, options: &GetOptions) -> ParseResult<Outcome> {
    let compiled = compile(path)?;
    Ok(decorate(resolve(source, &compiled), options))
}

/// Retrieve a plain value, defaulting missing results
///
/// # Errors
/// * `GetError::Parse` for malformed paths
/// * `GetError::Strict` when the result is missing and strict retrieval was
///   requested, either through `options` or an enclosing strict mapper
pub fn get(source: &Value, path: &str, options: &GetOptions) -> Result<Value, GetError> {
    match retrieve(source, path, options)? {
        Outcome::Found(value) => Ok(value),
        Outcome::Missing(reason) => {
            enforce_strict(path, reason, options)?;
            Ok(options.default.clone().unwrap_or(Value::Null))
        }
    }
}

/// Retrieve a mapper output node
///
/// Like [`get`], except that a missing result with a drop level other than
/// [`DropLevel::None`] becomes a [`Node::Drop`] marker instead of the default.
///
/// # Errors
/// Same as [`get`].
pub fn get_node(source: &Value, path: &str, options: &GetOptions) -> Result<Node, GetError> {
    match retrieve(source, path, options)? {
        Outcome::Found(value) => Ok(Node::Value(value)),
        Outcome::Missing(reason) => {
            enforce_strict(path, reason, options)?;
            if options.drop_level == DropLevel::None {
                Ok(Node::Value(options.default.clone().unwrap_or(Value::Null)))
            } else {
                Ok(Node::Drop(options.drop_level))
            }
        }
    }
}

fn enforce_strict(path: &str, reason: MissingReason, options: &GetOptions) -> Result<(), GetError> {
    if options.strict || strict::is_active() {
        log::debug!("Strict retrieval of '{path}' failed: {reason}");
        return Err(GetError::Strict {
            path: path.to_string(),
            reason,
        });
    }
    Ok(())
}

pub(crate) fn decorate(outcome: Outcome, options: &GetOptions) -> Outcome {
    let Outcome::Found(mut value) = outcome else {
        return outcome;
    };

    if options.flatten {
        value = value.flatten_once();
    }

    if let Some(predicate) = &options.only_if {
        match catch_unwind(AssertUnwindSafe(|| predicate(&value))) {
            Ok(true) => {}
            Ok(false) => return Outcome::Missing(MissingReason::Filtered),
            Err(payload) => return transform_failed(panic_message(payload.as_ref())),
        }
    }

    for transform in &options.apply {
        value = match run_transform(transform, value) {
            Ok(Value::Null) => return transform_failed("transform returned null".to_string()),
            Ok(next) => next,
            Err(message) => return transform_failed(message),
        };
    }

    Outcome::Found(value)
}

fn run_transform(transform: &Transform, value: Value) -> Result<Value, String> {
    match catch_unwind(AssertUnwindSafe(|| transform(value))) {
        Ok(Ok(next)) => Ok(next),
        Ok(Err(err)) => Err(format!("{err:#}")),
        Err(payload) => Err(panic_message(payload.as_ref())),
    }
}

fn transform_failed(message: String) -> Outcome {
    log::debug!("Retrieval downgraded to missing: {message}");
    Outcome::Missing(MissingReason::TransformFailed { message })
}

pub(crate) fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        format!("panicked: {message}")
    } else if let Some(message) = payload.downcast_ref::<String>() {
        format!("panicked: {message}")
    } else {
        "panicked".to_string()
    }
}
