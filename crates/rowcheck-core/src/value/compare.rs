use crate::value::Value;
use std::cmp::Ordering;

/// Strict same-variant equality.
///
/// Returns `None` for mismatched variants. `Null` equals only `Null`;
/// there is no cross-variant coercion anywhere in the comparison surface.
#[must_use]
pub fn strict_eq(left: &Value, right: &Value) -> Option<bool> {
    match (left, right) {
        (Value::Int(a), Value::Int(b)) => Some(a == b),
        (Value::Real(a), Value::Real(b)) => Some(a == b),
        (Value::Text(a), Value::Text(b)) => Some(a == b),
        (Value::Null, Value::Null) => Some(true),
        _ => None,
    }
}

/// Strict comparator for identical orderable variants.
///
/// Returns `None` for mismatched variants or `Null` operands.
#[must_use]
pub fn strict_order_cmp(left: &Value, right: &Value) -> Option<Ordering> {
    match (left, right) {
        (Value::Int(a), Value::Int(b)) => Some(a.cmp(b)),
        (Value::Real(a), Value::Real(b)) => Some(a.cmp(b)),
        (Value::Text(a), Value::Text(b)) => Some(a.cmp(b)),
        _ => None,
    }
}

/// Equality under an optional absolute tolerance for real values.
///
/// Integers and text always compare exactly; the tolerance applies only
/// when both operands are `Real`. Returns `None` for mismatched variants.
#[must_use]
pub fn eq_with_tolerance(
    left: &Value,
    right: &Value,
    real_tolerance: Option<f64>,
) -> Option<bool> {
    match (left, right, real_tolerance) {
        (Value::Real(a), Value::Real(b), Some(tolerance)) => Some(a.abs_diff(*b) <= tolerance),
        _ => strict_eq(left, right),
    }
}
