//! Math builtins.
//!
//! Float functions accept `Int` or `Float` and return `Float`. Arguments
//! outside a function's domain raise a runtime error instead of
//! returning NaN.

use std::cmp::Ordering;

use ruspy_ir::BinaryOp;

use super::BuiltinContext;
use crate::conversions::float_to_int;
use crate::errors::{integer_overflow, runtime_error, type_mismatch, EvalError};
use crate::operators::compare_values;
use crate::Value;

type BuiltinResult = Result<Value, EvalError>;

fn number(value: &Value) -> Result<f64, EvalError> {
    value
        .as_f64()
        .ok_or_else(|| type_mismatch("int or float", value.type_name()))
}

fn integer(value: &Value) -> Result<i64, EvalError> {
    value
        .as_int()
        .ok_or_else(|| type_mismatch("int", value.type_name()))
}

#[cold]
fn domain_error(name: &str) -> EvalError {
    runtime_error(format!("math domain error in `{name}`"))
}

#[cold]
fn range_error(name: &str) -> EvalError {
    runtime_error(format!("math range error in `{name}`"))
}

/// Apply `f` to the single argument, rejecting inputs where `in_domain`
/// fails and finite inputs that overflow.
fn unary(
    name: &str,
    args: &[Value],
    in_domain: fn(f64) -> bool,
    f: fn(f64) -> f64,
) -> BuiltinResult {
    let x = number(&args[0])?;
    if !x.is_nan() && !in_domain(x) {
        return Err(domain_error(name));
    }
    let y = f(x);
    if y.is_infinite() && x.is_finite() {
        return Err(range_error(name));
    }
    Ok(Value::Float(y))
}

fn any(_: f64) -> bool {
    true
}

fn unit_interval(x: f64) -> bool {
    (-1.0..=1.0).contains(&x)
}

pub(super) fn sqrt(_: &BuiltinContext<'_>, args: &[Value]) -> BuiltinResult {
    unary("sqrt", args, |x| x >= 0.0, f64::sqrt)
}

pub(super) fn log(_: &BuiltinContext<'_>, args: &[Value]) -> BuiltinResult {
    let x = number(&args[0])?;
    if x <= 0.0 {
        return Err(domain_error("log"));
    }
    match args.get(1) {
        None => Ok(Value::Float(x.ln())),
        Some(base) => {
            let base = number(base)?;
            if base <= 0.0 || base == 1.0 {
                return Err(domain_error("log"));
            }
            Ok(Value::Float(x.ln() / base.ln()))
        }
    }
}

pub(super) fn log2(_: &BuiltinContext<'_>, args: &[Value]) -> BuiltinResult {
    unary("log2", args, |x| x > 0.0, f64::log2)
}

pub(super) fn log10(_: &BuiltinContext<'_>, args: &[Value]) -> BuiltinResult {
    unary("log10", args, |x| x > 0.0, f64::log10)
}

pub(super) fn exp(_: &BuiltinContext<'_>, args: &[Value]) -> BuiltinResult {
    unary("exp", args, any, f64::exp)
}

pub(super) fn sin(_: &BuiltinContext<'_>, args: &[Value]) -> BuiltinResult {
    unary("sin", args, f64::is_finite, f64::sin)
}

pub(super) fn cos(_: &BuiltinContext<'_>, args: &[Value]) -> BuiltinResult {
    unary("cos", args, f64::is_finite, f64::cos)
}

pub(super) fn tan(_: &BuiltinContext<'_>, args: &[Value]) -> BuiltinResult {
    unary("tan", args, f64::is_finite, f64::tan)
}

pub(super) fn asin(_: &BuiltinContext<'_>, args: &[Value]) -> BuiltinResult {
    unary("asin", args, unit_interval, f64::asin)
}

pub(super) fn acos(_: &BuiltinContext<'_>, args: &[Value]) -> BuiltinResult {
    unary("acos", args, unit_interval, f64::acos)
}

pub(super) fn atan(_: &BuiltinContext<'_>, args: &[Value]) -> BuiltinResult {
    unary("atan", args, any, f64::atan)
}

pub(super) fn atan2(_: &BuiltinContext<'_>, args: &[Value]) -> BuiltinResult {
    let (y, x) = (number(&args[0])?, number(&args[1])?);
    Ok(Value::Float(y.atan2(x)))
}

pub(super) fn sinh(_: &BuiltinContext<'_>, args: &[Value]) -> BuiltinResult {
    unary("sinh", args, any, f64::sinh)
}

pub(super) fn cosh(_: &BuiltinContext<'_>, args: &[Value]) -> BuiltinResult {
    unary("cosh", args, any, f64::cosh)
}

pub(super) fn tanh(_: &BuiltinContext<'_>, args: &[Value]) -> BuiltinResult {
    unary("tanh", args, any, f64::tanh)
}

/// Shared by `floor`, `ceil`, `round` and `trunc`: an `Int` passes through,
/// a `Float` is rounded by `f` and must fit in an `Int`.
fn to_integral(name: &str, args: &[Value], f: fn(f64) -> f64) -> BuiltinResult {
    match &args[0] {
        Value::Int(n) => Ok(Value::Int(*n)),
        Value::Float(x) => float_to_int(f(*x))
            .map(Value::Int)
            .ok_or_else(|| runtime_error(format!("cannot convert {x} to int in `{name}`"))),
        other => Err(type_mismatch("int or float", other.type_name())),
    }
}

pub(super) fn floor(_: &BuiltinContext<'_>, args: &[Value]) -> BuiltinResult {
    to_integral("floor", args, f64::floor)
}

pub(super) fn ceil(_: &BuiltinContext<'_>, args: &[Value]) -> BuiltinResult {
    to_integral("ceil", args, f64::ceil)
}

/// Halves round to the even neighbour.
pub(super) fn round(_: &BuiltinContext<'_>, args: &[Value]) -> BuiltinResult {
    to_integral("round", args, f64::round_ties_even)
}

pub(super) fn trunc(_: &BuiltinContext<'_>, args: &[Value]) -> BuiltinResult {
    to_integral("trunc", args, f64::trunc)
}

pub(super) fn fabs(_: &BuiltinContext<'_>, args: &[Value]) -> BuiltinResult {
    Ok(Value::Float(number(&args[0])?.abs()))
}

pub(super) fn pow(_: &BuiltinContext<'_>, args: &[Value]) -> BuiltinResult {
    let (x, y) = (number(&args[0])?, number(&args[1])?);
    if x == 0.0 && y < 0.0 {
        return Err(domain_error("pow"));
    }
    if x < 0.0 && y.is_finite() && y.fract() != 0.0 {
        return Err(domain_error("pow"));
    }
    let z = x.powf(y);
    if z.is_infinite() && x.is_finite() && y.is_finite() {
        return Err(range_error("pow"));
    }
    Ok(Value::Float(z))
}

pub(super) fn hypot(_: &BuiltinContext<'_>, args: &[Value]) -> BuiltinResult {
    let (x, y) = (number(&args[0])?, number(&args[1])?);
    Ok(Value::Float(x.hypot(y)))
}

pub(super) fn degrees(_: &BuiltinContext<'_>, args: &[Value]) -> BuiltinResult {
    Ok(Value::Float(number(&args[0])?.to_degrees()))
}

pub(super) fn radians(_: &BuiltinContext<'_>, args: &[Value]) -> BuiltinResult {
    Ok(Value::Float(number(&args[0])?.to_radians()))
}

/// Keeps the argument's type.
pub(super) fn abs(_: &BuiltinContext<'_>, args: &[Value]) -> BuiltinResult {
    match &args[0] {
        Value::Int(n) => n
            .checked_abs()
            .map(Value::Int)
            .ok_or_else(|| integer_overflow("abs")),
        Value::Float(x) => Ok(Value::Float(x.abs())),
        other => Err(type_mismatch("int or float", other.type_name())),
    }
}

/// First argument that is `wanted` relative to every other; ties keep the
/// earlier one.
fn extreme(args: &[Value], wanted: Ordering) -> BuiltinResult {
    let mut best = &args[0];
    for candidate in &args[1..] {
        if compare_values(BinaryOp::Lt, candidate, best)? == Some(wanted) {
            best = candidate;
        }
    }
    Ok(best.clone())
}

pub(super) fn min(_: &BuiltinContext<'_>, args: &[Value]) -> BuiltinResult {
    extreme(args, Ordering::Less)
}

pub(super) fn max(_: &BuiltinContext<'_>, args: &[Value]) -> BuiltinResult {
    extreme(args, Ordering::Greater)
}

pub(super) fn factorial(_: &BuiltinContext<'_>, args: &[Value]) -> BuiltinResult {
    let n = integer(&args[0])?;
    if n < 0 {
        return Err(runtime_error("factorial is not defined for negative values"));
    }
    (2..=n)
        .try_fold(1i64, i64::checked_mul)
        .map(Value::Int)
        .ok_or_else(|| integer_overflow("factorial"))
}

/// Always non-negative.
pub(super) fn gcd(_: &BuiltinContext<'_>, args: &[Value]) -> BuiltinResult {
    let (mut a, mut b) = (integer(&args[0])?.unsigned_abs(), integer(&args[1])?.unsigned_abs());
    while b != 0 {
        (a, b) = (b, a % b);
    }
    i64::try_from(a)
        .map(Value::Int)
        .map_err(|_| integer_overflow("gcd"))
}

pub(super) fn isnan(_: &BuiltinContext<'_>, args: &[Value]) -> BuiltinResult {
    Ok(Value::Bool(number(&args[0])?.is_nan()))
}

pub(super) fn isinf(_: &BuiltinContext<'_>, args: &[Value]) -> BuiltinResult {
    Ok(Value::Bool(number(&args[0])?.is_infinite()))
}
