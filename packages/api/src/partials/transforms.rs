//! Fallible transforms for `try_apply`

use anyhow::{anyhow, bail};
use dendro_core::value::ValueExt;
use dendro_core::Value;
use serde_json::Number;

/// First `n` elements of a sequence, or first `n` characters of a string
#[must_use]
pub fn keep(n: usize) -> impl Fn(Value) -> anyhow::Result<Value> + Clone + Send + Sync + 'static {
    move |value| match value {
        Value::Array(mut items) => {
            items.truncate(n);
            Ok(Value::Array(items))
        }
        Value::String(s) => Ok(Value::String(s.chars().take(n).collect())),
        other => bail!("cannot keep items of a {}", other.kind()),
    }
}

/// Element `i` of a sequence (or character of a string), negative counting
/// from the end
///
/// An index past either end yields null, which makes the retrieval missing.
#[must_use]
pub fn index(i: i64) -> impl Fn(Value) -> anyhow::Result<Value> + Clone + Send + Sync + 'static {
    move |value| match value {
        Value::Array(mut items) => Ok(position(i, items.len())
            .map(|at| items.swap_remove(at))
            .unwrap_or(Value::Null)),
        Value::String(s) => {
            let chars: Vec<char> = s.chars().collect();
            Ok(position(i, chars.len())
                .map(|at| Value::String(chars[at].to_string()))
                .unwrap_or(Value::Null))
        }
        other => bail!("cannot index into a {}", other.kind()),
    }
}

fn position(i: i64, len: usize) -> Option<usize> {
    let len = i64::try_from(len).ok()?;
    let at = if i < 0 { len + i } else { i };
    if (0..len).contains(&at) {
        usize::try_from(at).ok()
    } else {
        None
    }
}

/// `value + operand`: numeric sum, string concatenation or sequence
/// concatenation
#[must_use]
pub fn add(operand: impl Into<Value>) -> impl Fn(Value) -> anyhow::Result<Value> + Clone + Send + Sync + 'static {
    let operand = operand.into();
    move |value| sum(value, operand.clone())
}

/// `operand + value`, so strings and sequences are prepended
#[must_use]
pub fn add_before(
    operand: impl Into<Value>,
) -> impl Fn(Value) -> anyhow::Result<Value> + Clone + Send + Sync + 'static {
    let operand = operand.into();
    move |value| sum(operand.clone(), value)
}

fn sum(lhs: Value, rhs: Value) -> anyhow::Result<Value> {
    match (lhs, rhs) {
        (Value::String(mut s), Value::String(tail)) => {
            s.push_str(&tail);
            Ok(Value::String(s))
        }
        (Value::Array(mut items), Value::Array(tail)) => {
            items.extend(tail);
            Ok(Value::Array(items))
        }
        (lhs, rhs) => arithmetic("add", &lhs, &rhs, i64::checked_add, |a, b| a + b),
    }
}

/// `value - operand`
#[must_use]
pub fn subtract(
    operand: impl Into<Value>,
) -> impl Fn(Value) -> anyhow::Result<Value> + Clone + Send + Sync + 'static {
    let operand = operand.into();
    move |value| arithmetic("subtract", &value, &operand, i64::checked_sub, |a, b| a - b)
}

/// `operand - value`
#[must_use]
pub fn subtract_before(
    operand: impl Into<Value>,
) -> impl Fn(Value) -> anyhow::Result<Value> + Clone + Send + Sync + 'static {
    let operand = operand.into();
    move |value| arithmetic("subtract", &operand, &value, i64::checked_sub, |a, b| a - b)
}

#[must_use]
pub fn multiply(
    operand: impl Into<Value>,
) -> impl Fn(Value) -> anyhow::Result<Value> + Clone + Send + Sync + 'static {
    let operand = operand.into();
    move |value| arithmetic("multiply", &value, &operand, i64::checked_mul, |a, b| a * b)
}

/// `operand * value`; only differs from [`multiply`] in error messages
#[must_use]
pub fn multiply_before(
    operand: impl Into<Value>,
) -> impl Fn(Value) -> anyhow::Result<Value> + Clone + Send + Sync + 'static {
    let operand = operand.into();
    move |value| arithmetic("multiply", &operand, &value, i64::checked_mul, |a, b| a * b)
}

/// `value / divisor`, always as a float
#[must_use]
pub fn divide(
    divisor: impl Into<Value>,
) -> impl Fn(Value) -> anyhow::Result<Value> + Clone + Send + Sync + 'static {
    let divisor = divisor.into();
    move |value| quotient(&value, &divisor)
}

/// `dividend / value`, always as a float
#[must_use]
pub fn divide_before(
    dividend: impl Into<Value>,
) -> impl Fn(Value) -> anyhow::Result<Value> + Clone + Send + Sync + 'static {
    let dividend = dividend.into();
    move |value| quotient(&dividend, &value)
}

fn quotient(dividend: &Value, divisor: &Value) -> anyhow::Result<Value> {
    let (Some(a), Some(b)) = (dividend.as_f64(), divisor.as_f64()) else {
        bail!("cannot divide a {} by a {}", dividend.kind(), divisor.kind());
    };
    if b == 0.0 {
        bail!("division by zero");
    }
    float(a / b)
}

fn arithmetic(
    op: &str,
    lhs: &Value,
    rhs: &Value,
    int_op: fn(i64, i64) -> Option<i64>,
    float_op: fn(f64, f64) -> f64,
) -> anyhow::Result<Value> {
    if let (Some(a), Some(b)) = (lhs.as_i64(), rhs.as_i64()) {
        if let Some(result) = int_op(a, b) {
            return Ok(Value::from(result));
        }
    }
    match (lhs.as_f64(), rhs.as_f64()) {
        (Some(a), Some(b)) => float(float_op(a, b)),
        _ => bail!("cannot {op} a {} and a {}", lhs.kind(), rhs.kind()),
    }
}

fn float(n: f64) -> anyhow::Result<Value> {
    Number::from_f64(n)
        .map(Value::Number)
        .ok_or_else(|| anyhow!("result {n} is not a finite number"))
}

/// Ignore the input and return `constant`
#[must_use]
pub fn echo(constant: impl Into<Value>) -> impl Fn(Value) -> anyhow::Result<Value> + Clone + Send + Sync + 'static {
    let constant = constant.into();
    move |_| Ok(constant.clone())
}

#[must_use]
pub fn upper() -> impl Fn(Value) -> anyhow::Result<Value> + Clone + Send + Sync + 'static {
    |value| match value {
        Value::String(s) => Ok(Value::String(s.to_uppercase())),
        other => bail!("cannot uppercase a {}", other.kind()),
    }
}

#[must_use]
pub fn lower() -> impl Fn(Value) -> anyhow::Result<Value> + Clone + Send + Sync + 'static {
    |value| match value {
        Value::String(s) => Ok(Value::String(s.to_lowercase())),
        other => bail!("cannot lowercase a {}", other.kind()),
    }
}

/// Apply `f` to every element of a sequence; the first failure fails the whole
#[must_use]
pub fn map_each<F>(f: F) -> impl Fn(Value) -> anyhow::Result<Value> + Clone + Send + Sync + 'static
where
    F: Fn(Value) -> anyhow::Result<Value> + Clone + Send + Sync + 'static,
{
    move |value| match value {
        Value::Array(items) => items
            .into_iter()
            .map(&f)
            .collect::<anyhow::Result<Vec<_>>>()
            .map(Value::Array),
        other => bail!("cannot map over a {}", other.kind()),
    }
}

/// Keep the elements of a sequence that satisfy `predicate`
#[must_use]
pub fn filter_each<P>(predicate: P) -> impl Fn(Value) -> anyhow::Result<Value> + Clone + Send + Sync + 'static
where
    P: Fn(&Value) -> bool + Clone + Send + Sync + 'static,
{
    move |value| match value {
        Value::Array(items) => Ok(Value::Array(
            items.into_iter().filter(|item| predicate(item)).collect(),
        )),
        other => bail!("cannot filter a {}", other.kind()),
    }
}

/// Run `first`, then `then` on its result
///
/// Unlike a retrieval's apply chain, a null in between does not stop the pipe.
#[must_use]
pub fn pipe<F, G>(first: F, then: G) -> impl Fn(Value) -> anyhow::Result<Value> + Clone + Send + Sync + 'static
where
    F: Fn(Value) -> anyhow::Result<Value> + Clone + Send + Sync + 'static,
    G: Fn(Value) -> anyhow::Result<Value> + Clone + Send + Sync + 'static,
{
    move |value| then(first(value)?)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn position_handles_both_ends() {
        assert_eq!(position(0, 3), Some(0));
        assert_eq!(position(-1, 3), Some(2));
        assert_eq!(position(-3, 3), Some(0));
        assert_eq!(position(-4, 3), None);
        assert_eq!(position(3, 3), None);
        assert_eq!(position(0, 0), None);
    }

    #[test]
    fn before_variants_swap_operands() {
        assert_eq!(subtract_before(1)(json!(100)).unwrap(), json!(-99));
        assert_eq!(divide_before(10)(json!(4)).unwrap(), json!(2.5));
        assert_eq!(add_before("re")(json!("do")).unwrap(), json!("redo"));
        assert_eq!(add_before(json!([0]))(json!([1, 2])).unwrap(), json!([0, 1, 2]));
        assert!(divide_before(1)(json!(0)).is_err());
    }

    #[test]
    fn integer_overflow_falls_back_to_float() {
        let result = add(1)(json!(i64::MAX)).unwrap();
        assert!(result.is_f64());
    }
}
