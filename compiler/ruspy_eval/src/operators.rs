//! Binary operator implementations.
//!
//! Direct enum dispatch over the fixed value set. Integer arithmetic is
//! checked: overflow is an error, never a silent wrap. Integer division
//! floors and `%` takes the sign of the divisor, so
//! `(a / b) * b + a % b == a` for every `b != 0`.

use std::cmp::Ordering;
use std::sync::Arc;

use ruspy_ir::BinaryOp;

use crate::errors::{
    division_by_zero, integer_overflow, invalid_binary_op, invalid_shift, modulo_by_zero,
    runtime_error, EvalError,
};
use crate::Value;

/// Upper bound on the byte length of a string built by `*`.
const MAX_REPEAT_BYTES: usize = 1 << 30;

/// Evaluate `left op right` for every operator except the short-circuit
/// pair, which the interpreter handles before evaluating the right side.
/// `&&` and `||` reaching here are applied eagerly to two `Bool`s.
pub fn evaluate_binary(op: BinaryOp, left: &Value, right: &Value) -> Result<Value, EvalError> {
    match op {
        BinaryOp::Eq => Ok(Value::Bool(left == right)),
        BinaryOp::NotEq => Ok(Value::Bool(left != right)),
        BinaryOp::Lt | BinaryOp::LtEq | BinaryOp::Gt | BinaryOp::GtEq => {
            let ordering = compare_values(op, left, right)?;
            Ok(Value::Bool(ordering.is_some_and(|o| ordering_satisfies(op, o))))
        }
        _ => eval_arithmetic(op, left, right),
    }
}

fn eval_arithmetic(op: BinaryOp, left: &Value, right: &Value) -> Result<Value, EvalError> {
    match (left, right) {
        (Value::Int(a), Value::Int(b)) => eval_int_binary(op, *a, *b),
        (Value::Float(_) | Value::Int(_), Value::Float(_) | Value::Int(_)) => {
            match (left.as_f64(), right.as_f64()) {
                (Some(a), Some(b)) => eval_float_binary(op, a, b, left, right),
                _ => Err(invalid_binary_op(op, left.type_name(), right.type_name())),
            }
        }
        (Value::Bool(a), Value::Bool(b)) => eval_bool_binary(op, *a, *b),
        (Value::Str(a), Value::Str(b)) if op == BinaryOp::Add => {
            let mut joined = String::with_capacity(a.len() + b.len());
            joined.push_str(a);
            joined.push_str(b);
            Ok(Value::Str(Arc::from(joined)))
        }
        (Value::Str(s), Value::Int(n)) | (Value::Int(n), Value::Str(s)) if op == BinaryOp::Mul => {
            repeat_string(s, *n)
        }
        _ => Err(invalid_binary_op(op, left.type_name(), right.type_name())),
    }
}

fn eval_int_binary(op: BinaryOp, a: i64, b: i64) -> Result<Value, EvalError> {
    let value = match op {
        BinaryOp::Add => a.checked_add(b).ok_or_else(|| integer_overflow("addition"))?,
        BinaryOp::Sub => a
            .checked_sub(b)
            .ok_or_else(|| integer_overflow("subtraction"))?,
        BinaryOp::Mul => a
            .checked_mul(b)
            .ok_or_else(|| integer_overflow("multiplication"))?,
        BinaryOp::Div => floor_div(a, b)?,
        BinaryOp::Mod => floor_mod(a, b)?,
        BinaryOp::BitAnd => a & b,
        BinaryOp::BitOr => a | b,
        BinaryOp::BitXor => a ^ b,
        BinaryOp::Shl => shift_left(a, b)?,
        BinaryOp::Shr => a >> shift_amount(b)?,
        BinaryOp::And
        | BinaryOp::Or
        | BinaryOp::Eq
        | BinaryOp::NotEq
        | BinaryOp::Lt
        | BinaryOp::LtEq
        | BinaryOp::Gt
        | BinaryOp::GtEq => return Err(invalid_binary_op(op, "int", "int")),
    };
    Ok(Value::Int(value))
}

/// `a / b` rounded toward negative infinity.
pub(crate) fn floor_div(a: i64, b: i64) -> Result<i64, EvalError> {
    if b == 0 {
        return Err(division_by_zero());
    }
    let quotient = a
        .checked_div(b)
        .ok_or_else(|| integer_overflow("division"))?;
    if a % b != 0 && ((a < 0) != (b < 0)) {
        Ok(quotient - 1)
    } else {
        Ok(quotient)
    }
}

/// `a % b` with the sign of `b`.
pub(crate) fn floor_mod(a: i64, b: i64) -> Result<i64, EvalError> {
    if b == 0 {
        return Err(modulo_by_zero());
    }
    let rem = a.wrapping_rem(b);
    if rem != 0 && ((rem < 0) != (b < 0)) {
        Ok(rem + b)
    } else {
        Ok(rem)
    }
}

fn shift_amount(b: i64) -> Result<u32, EvalError> {
    u32::try_from(b)
        .ok()
        .filter(|&n| n < 64)
        .ok_or_else(|| invalid_shift(b))
}

/// `a << b`, failing when bits (or the sign) would be lost.
fn shift_left(a: i64, b: i64) -> Result<i64, EvalError> {
    let amount = shift_amount(b)?;
    let shifted = a << amount;
    if shifted >> amount == a {
        Ok(shifted)
    } else {
        Err(integer_overflow("left shift"))
    }
}

fn eval_float_binary(
    op: BinaryOp,
    a: f64,
    b: f64,
    left: &Value,
    right: &Value,
) -> Result<Value, EvalError> {
    let value = match op {
        BinaryOp::Add => a + b,
        BinaryOp::Sub => a - b,
        BinaryOp::Mul => a * b,
        BinaryOp::Div => a / b,
        BinaryOp::Mod => float_floor_mod(a, b),
        _ => return Err(invalid_binary_op(op, left.type_name(), right.type_name())),
    };
    Ok(Value::Float(value))
}

/// Float `%` with the sign of `b`. A finite `a` over an infinite `b` is
/// `a` when the signs agree and `b` otherwise.
fn float_floor_mod(a: f64, b: f64) -> f64 {
    let rem = a % b;
    if rem != 0.0 && ((rem < 0.0) != (b < 0.0)) {
        rem + b
    } else {
        rem
    }
}

/// `&`, `|` and `^` on bools; both sides are already evaluated.
fn eval_bool_binary(op: BinaryOp, a: bool, b: bool) -> Result<Value, EvalError> {
    match op {
        BinaryOp::BitAnd | BinaryOp::And => Ok(Value::Bool(a & b)),
        BinaryOp::BitOr | BinaryOp::Or => Ok(Value::Bool(a | b)),
        BinaryOp::BitXor => Ok(Value::Bool(a ^ b)),
        _ => Err(invalid_binary_op(op, "bool", "bool")),
    }
}

fn repeat_string(s: &str, count: i64) -> Result<Value, EvalError> {
    let count = usize::try_from(count).unwrap_or(0);
    match s.len().checked_mul(count) {
        Some(total) if total <= MAX_REPEAT_BYTES => Ok(Value::Str(Arc::from(s.repeat(count)))),
        _ => Err(runtime_error(format!(
            "string repetition is too large ({count} copies of {} bytes)",
            s.len()
        ))),
    }
}

/// Ordering for `<`, `<=`, `>`, `>=`, `min` and `max`.
///
/// `Ok(None)` means the operands are comparable but unordered (a NaN is
/// involved), so every ordering operator yields `false`. Operands of
/// different kinds (other than int vs float) are a type error.
#[allow(
    clippy::cast_precision_loss,
    reason = "int to float promotion is the language's coercion rule"
)]
pub fn compare_values(
    op: BinaryOp,
    left: &Value,
    right: &Value,
) -> Result<Option<Ordering>, EvalError> {
    match (left, right) {
        (Value::Int(a), Value::Int(b)) => Ok(Some(a.cmp(b))),
        (Value::Float(a), Value::Float(b)) => Ok(a.partial_cmp(b)),
        (Value::Int(a), Value::Float(b)) => Ok((*a as f64).partial_cmp(b)),
        (Value::Float(a), Value::Int(b)) => Ok(a.partial_cmp(&(*b as f64))),
        (Value::Str(a), Value::Str(b)) => Ok(Some(a.cmp(b))),
        (Value::Bool(a), Value::Bool(b)) => Ok(Some(a.cmp(b))),
        _ => Err(invalid_binary_op(op, left.type_name(), right.type_name())),
    }
}

fn ordering_satisfies(op: BinaryOp, ordering: Ordering) -> bool {
    match op {
        BinaryOp::Lt => ordering == Ordering::Less,
        BinaryOp::LtEq => ordering != Ordering::Greater,
        BinaryOp::Gt => ordering == Ordering::Greater,
        BinaryOp::GtEq => ordering != Ordering::Less,
        _ => false,
    }
}
