//! Path resolution
//!
//! Left-to-right fold over the segments carrying a borrowed current node.
//! Projection segments (`[*]`, slices, multi-key) fork the remaining segments
//! over each projected element and recombine the results into a sequence.

use super::outcome::{MissingReason, Outcome};
use super::segments::{access_field, access_index, mismatch, slice_range};
use crate::error::ParseResult;
use crate::path::{Path, PathSegment, compile};
use crate::value::{Value, ValueKind};

/// Resolve a compiled path against `root`
///
/// Read-only and deterministic. Never fails: absence is reported as
/// [`Outcome::Missing`] with the reason the walk stopped.
#[must_use]
pub fn resolve(root: &Value, path: &Path) -> Outcome {
    resolve_segments(root, path.segments())
}

/// Compile `path` through the path cache and resolve it
///
/// # Errors
/// Returns `ParseError::Malformed` when `path` is not a valid path string.
pub fn resolve_str(root: &Value, path: &str) -> ParseResult<Outcome> {
    let compiled = compile(path)?;
    Ok(resolve(root, &compiled))
}

pub(crate) fn resolve_segments(root: &Value, segments: &[PathSegment]) -> Outcome {
    let mut current = root;

    for (i, segment) in segments.iter().enumerate() {
        if current.is_null() {
            return Outcome::Missing(MissingReason::NullEncountered);
        }
        let rest = &segments[i + 1..];

        let step = match segment {
            PathSegment::Field(name) => access_field(current, name),
            PathSegment::Index(index) => access_index(current, *index),
            PathSegment::Wildcard => return expand(current, None, None, rest),
            PathSegment::Slice { start, end } => return expand(current, *start, *end, rest),
            PathSegment::MultiKey(keys) => return project_keys(current, keys, rest),
        };

        match step {
            Ok(next) => current = next,
            Err(reason) => return Outcome::Missing(reason),
        }
    }

    Outcome::Found(current.clone())
}

/// Fork `rest` over the selected elements of a sequence
///
/// Elements whose sub-resolution is missing are dropped silently.
fn expand(current: &Value, start: Option<i64>, end: Option<i64>, rest: &[PathSegment]) -> Outcome {
    let Value::Array(items) = current else {
        return Outcome::Missing(mismatch(ValueKind::Sequence, current));
    };

    let selected = &items[slice_range(items.len(), start, end)];
    if rest.is_empty() {
        return Outcome::Found(Value::Array(selected.to_vec()));
    }

    let found = selected
        .iter()
        .filter_map(|item| resolve_segments(item, rest).into_value())
        .collect();
    Outcome::Found(Value::Array(found))
}

/// Project sibling keys into a sequence, one entry per key
///
/// Keys may be dotted chains. An entry that cannot be resolved becomes null;
/// the projection itself only fails when `current` is not a mapping.
fn project_keys(current: &Value, keys: &[String], rest: &[PathSegment]) -> Outcome {
    if !current.is_object() {
        return Outcome::Missing(mismatch(ValueKind::Mapping, current));
    }

    let projected = keys
        .iter()
        .map(|key| {
            key.split('.')
                .try_fold(current, |node, part| node.get(part))
                .and_then(|node| resolve_segments(node, rest).into_value())
                .unwrap_or(Value::Null)
        })
        .collect();
    Outcome::Found(Value::Array(projected))
}
