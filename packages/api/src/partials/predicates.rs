//! Predicates for `only_if` and `filter_each`

use std::cmp::Ordering;

use dendro_core::value::{ValueExt, values_equal};
use dendro_core::{Value, ValueKind};

use super::compare::{compare, holds};

/// Value equals `expected`; numbers compare by value, so `2` equals `2.0`
#[must_use]
pub fn equals(expected: impl Into<Value>) -> impl Fn(&Value) -> bool + Clone + Send + Sync + 'static {
    let expected = expected.into();
    move |value| values_equal(value, &expected)
}

#[must_use]
pub fn not_equal(expected: impl Into<Value>) -> impl Fn(&Value) -> bool + Clone + Send + Sync + 'static {
    let expected = expected.into();
    move |value| !values_equal(value, &expected)
}

/// Value is greater than `bound`; values of another kind never match
#[must_use]
pub fn gt(bound: impl Into<Value>) -> impl Fn(&Value) -> bool + Clone + Send + Sync + 'static {
    ordered(bound.into(), |ordering| ordering == Ordering::Greater)
}

#[must_use]
pub fn lt(bound: impl Into<Value>) -> impl Fn(&Value) -> bool + Clone + Send + Sync + 'static {
    ordered(bound.into(), |ordering| ordering == Ordering::Less)
}

#[must_use]
pub fn gte(bound: impl Into<Value>) -> impl Fn(&Value) -> bool + Clone + Send + Sync + 'static {
    ordered(bound.into(), |ordering| ordering != Ordering::Less)
}

#[must_use]
pub fn lte(bound: impl Into<Value>) -> impl Fn(&Value) -> bool + Clone + Send + Sync + 'static {
    ordered(bound.into(), |ordering| ordering != Ordering::Greater)
}

fn ordered(
    bound: Value,
    accept: fn(Ordering) -> bool,
) -> impl Fn(&Value) -> bool + Clone + Send + Sync + 'static {
    move |value| compare(value, &bound).is_some_and(accept)
}

/// Value is a sequence holding `item`, a mapping with key `item`, or a string
/// containing `item`
#[must_use]
pub fn contains(item: impl Into<Value>) -> impl Fn(&Value) -> bool + Clone + Send + Sync + 'static {
    let item = item.into();
    move |value| holds(value, &item)
}

#[must_use]
pub fn not_contains(item: impl Into<Value>) -> impl Fn(&Value) -> bool + Clone + Send + Sync + 'static {
    let item = item.into();
    move |value| !holds(value, &item)
}

/// Value is held by `container` (see [`contains`])
#[must_use]
pub fn contained_in(
    container: impl Into<Value>,
) -> impl Fn(&Value) -> bool + Clone + Send + Sync + 'static {
    let container = container.into();
    move |value| holds(&container, value)
}

#[must_use]
pub fn not_contained_in(
    container: impl Into<Value>,
) -> impl Fn(&Value) -> bool + Clone + Send + Sync + 'static {
    let container = container.into();
    move |value| !holds(&container, value)
}

/// Value is of `kind`; [`ValueKind::Number`] accepts integers too
#[must_use]
pub fn is_kind(kind: ValueKind) -> impl Fn(&Value) -> bool + Clone + Send + Sync + 'static {
    move |value| kind.matches(value)
}

/// Sequence or mapping with `n` entries, or a string of `n` characters
#[must_use]
pub fn length_is(n: usize) -> impl Fn(&Value) -> bool + Clone + Send + Sync + 'static {
    move |value| value.count() == Some(n)
}
