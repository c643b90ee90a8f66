//! Ordering and membership shared by the predicates

use std::cmp::Ordering;

use dendro_core::Value;
use dendro_core::value::values_equal;

/// Order two scalars of the same family
///
/// Numbers compare numerically (integers exactly), strings lexicographically.
/// Anything else is unordered.
pub(super) fn compare(lhs: &Value, rhs: &Value) -> Option<Ordering> {
    match (lhs, rhs) {
        (Value::Number(a), Value::Number(b)) => match (a.as_i64(), b.as_i64()) {
            (Some(a), Some(b)) => Some(a.cmp(&b)),
            _ => a.as_f64()?.partial_cmp(&b.as_f64()?),
        },
        (Value::String(a), Value::String(b)) => Some(a.cmp(b)),
        _ => None,
    }
}

/// Membership as used by `contains`: element of a sequence, key of a
/// mapping, or substring of a string
pub(super) fn holds(container: &Value, item: &Value) -> bool {
    match (container, item) {
        (Value::Array(items), _) => items.iter().any(|member| values_equal(member, item)),
        (Value::Object(map), Value::String(key)) => map.contains_key(key),
        (Value::String(haystack), Value::String(needle)) => haystack.contains(needle.as_str()),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn mixed_numbers_compare_numerically() {
        assert_eq!(compare(&json!(2), &json!(2.5)), Some(Ordering::Less));
        assert_eq!(compare(&json!(i64::MAX), &json!(i64::MAX - 1)), Some(Ordering::Greater));
        assert_eq!(compare(&json!("b"), &json!("a")), Some(Ordering::Greater));
        assert_eq!(compare(&json!("1"), &json!(1)), None);
        assert_eq!(compare(&json!(null), &json!(null)), None);
    }

    #[test]
    fn membership() {
        assert!(holds(&json!([1, 2]), &json!(2)));
        assert!(holds(&json!([1, 2]), &json!(2.0)));
        assert!(holds(&json!({"a": 1}), &json!("a")));
        assert!(holds(&json!("hello"), &json!("ell")));
        assert!(!holds(&json!({"a": 1}), &json!(1)));
        assert!(!holds(&json!(12), &json!(1)));
    }
}
