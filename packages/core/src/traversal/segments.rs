//! Single-step access helpers
//!
//! Each helper performs one segment against one node and reports the
//! structured reason on failure.

use std::ops::Range;

use super::outcome::MissingReason;
use crate::value::{Value, ValueKind};

/// Mapping key access
#[inline]
pub(super) fn access_field<'v>(current: &'v Value, name: &str) -> Result<&'v Value, MissingReason> {
    match current {
        Value::Object(map) => map.get(name).ok_or_else(|| MissingReason::KeyNotFound {
            key: name.to_string(),
        }),
        other => Err(mismatch(ValueKind::Mapping, other)),
    }
}

/// Sequence index access; negative indices count from the end
#[inline]
pub(super) fn access_index(current: &Value, index: i64) -> Result<&Value, MissingReason> {
    let Value::Array(items) = current else {
        return Err(mismatch(ValueKind::Sequence, current));
    };

    let len = items.len();
    let out_of_bounds = || MissingReason::IndexOutOfBounds { index, len };
    let actual = if index < 0 {
        let back = usize::try_from(index.unsigned_abs()).map_err(|_| out_of_bounds())?;
        len.checked_sub(back).ok_or_else(out_of_bounds)?
    } else {
        usize::try_from(index).map_err(|_| out_of_bounds())?
    };
    items.get(actual).ok_or_else(out_of_bounds)
}

/// Half-open slice range with clamping; never fails on out-of-range bounds
pub(super) fn slice_range(len: usize, start: Option<i64>, end: Option<i64>) -> Range<usize> {
    let clamp = |bound: i64| -> usize {
        if bound < 0 {
            let back = usize::try_from(bound.unsigned_abs()).unwrap_or(usize::MAX);
            len.saturating_sub(back)
        } else {
            usize::try_from(bound).unwrap_or(usize::MAX).min(len)
        }
    };
    let start = start.map_or(0, clamp);
    let end = end.map_or(len, clamp);
    start..end.max(start)
}

#[inline]
pub(super) fn mismatch(expected: ValueKind, found: &Value) -> MissingReason {
    MissingReason::TypeMismatch {
        expected,
        found: ValueKind::of(found),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn negative_index_counts_from_end() {
        let list = json!([1, 2, 3]);
        assert_eq!(access_index(&list, -1), Ok(&json!(3)));
        assert_eq!(
            access_index(&list, -4),
            Err(MissingReason::IndexOutOfBounds { index: -4, len: 3 })
        );
    }

    #[test]
    fn slice_clamps_like_half_open_ranges() {
        assert_eq!(slice_range(5, Some(1), None), 1..5);
        assert_eq!(slice_range(5, None, Some(-1)), 0..4);
        assert_eq!(slice_range(5, Some(-10), Some(100)), 0..5);
        assert_eq!(slice_range(5, Some(4), Some(2)), 4..4);
        assert_eq!(slice_range(0, Some(1), Some(3)), 0..0);
    }

    #[test]
    fn field_on_sequence_is_type_mismatch() {
        assert_eq!(
            access_field(&json!([1]), "a"),
            Err(MissingReason::TypeMismatch {
                expected: ValueKind::Mapping,
                found: ValueKind::Sequence
            })
        );
    }
}
