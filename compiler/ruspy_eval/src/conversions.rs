//! Type conversions: the `as` operator and the `int`, `float`, `bool`,
//! `str` and `string` builtins share these.

use std::sync::Arc;

use crate::errors::{invalid_cast, EvalError};
use crate::Value;

/// Evaluate `value as target`.
pub fn evaluate_cast(value: &Value, target: &str) -> Result<Value, EvalError> {
    match target {
        "int" => to_int(value).map(Value::Int),
        "float" => to_float(value).map(Value::Float),
        "bool" => to_bool(value).map(Value::Bool),
        "str" | "string" => Ok(to_str(value)),
        _ => Err(invalid_cast(value, target)),
    }
}

pub(crate) fn to_int(value: &Value) -> Result<i64, EvalError> {
    match value {
        Value::Int(n) => Ok(*n),
        Value::Float(f) => float_to_int(*f).ok_or_else(|| invalid_cast(value, "int")),
        Value::Bool(b) => Ok(i64::from(*b)),
        Value::Str(s) => s.trim().parse().map_err(|_| invalid_cast(value, "int")),
        _ => Err(invalid_cast(value, "int")),
    }
}

/// Truncate toward zero; `None` for NaN, infinities and values outside
/// the `i64` range.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    reason = "range is checked before the truncating cast"
)]
pub(crate) fn float_to_int(f: f64) -> Option<i64> {
    let t = f.trunc();
    // 2^63 is exactly representable; i64::MAX is not.
    if t.is_finite() && t >= i64::MIN as f64 && t < -(i64::MIN as f64) {
        Some(t as i64)
    } else {
        None
    }
}

pub(crate) fn to_float(value: &Value) -> Result<f64, EvalError> {
    match value {
        Value::Int(_) | Value::Float(_) => value
            .as_f64()
            .ok_or_else(|| invalid_cast(value, "float")),
        Value::Bool(b) => Ok(if *b { 1.0 } else { 0.0 }),
        Value::Str(s) => s.trim().parse().map_err(|_| invalid_cast(value, "float")),
        _ => Err(invalid_cast(value, "float")),
    }
}

pub(crate) fn to_bool(value: &Value) -> Result<bool, EvalError> {
    match value {
        Value::Bool(b) => Ok(*b),
        Value::Int(n) => Ok(*n != 0),
        Value::Float(f) => Ok(*f != 0.0),
        Value::Str(s) => Ok(!s.is_empty()),
        _ => Err(invalid_cast(value, "bool")),
    }
}

pub(crate) fn to_str(value: &Value) -> Value {
    match value {
        Value::Str(_) => value.clone(),
        other => Value::Str(Arc::from(other.to_string())),
    }
}
