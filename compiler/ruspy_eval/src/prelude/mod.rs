//! Built-in globals.
//!
//! Every builtin is a plain `fn` pointer in the [`BUILTINS`] table, bound
//! as a `Value::Builtin` in the global scope by [`register_prelude`]
//! together with the numeric constants.

mod math;

use std::f64::consts;

use ruspy_ir::StringInterner;

use crate::conversions::{to_bool, to_float, to_int, to_str};
use crate::errors::{integer_overflow, type_mismatch, EvalError};
use crate::print_handler::PrintHandlerImpl;
use crate::{Arity, BuiltinFunction, Environment, RangeValue, Value};

/// What a builtin can reach besides its arguments.
pub struct BuiltinContext<'a> {
    pub print: &'a PrintHandlerImpl,
}

/// Every native function, in registration order.
pub const BUILTINS: &[BuiltinFunction] = &[
    // math
    BuiltinFunction::new("sqrt", Arity::Exact(1), math::sqrt),
    BuiltinFunction::new("log", Arity::Between(1, 2), math::log),
    BuiltinFunction::new("log2", Arity::Exact(1), math::log2),
    BuiltinFunction::new("log10", Arity::Exact(1), math::log10),
    BuiltinFunction::new("exp", Arity::Exact(1), math::exp),
    BuiltinFunction::new("sin", Arity::Exact(1), math::sin),
    BuiltinFunction::new("cos", Arity::Exact(1), math::cos),
    BuiltinFunction::new("tan", Arity::Exact(1), math::tan),
    BuiltinFunction::new("asin", Arity::Exact(1), math::asin),
    BuiltinFunction::new("acos", Arity::Exact(1), math::acos),
    BuiltinFunction::new("atan", Arity::Exact(1), math::atan),
    BuiltinFunction::new("atan2", Arity::Exact(2), math::atan2),
    BuiltinFunction::new("sinh", Arity::Exact(1), math::sinh),
    BuiltinFunction::new("cosh", Arity::Exact(1), math::cosh),
    BuiltinFunction::new("tanh", Arity::Exact(1), math::tanh),
    BuiltinFunction::new("floor", Arity::Exact(1), math::floor),
    BuiltinFunction::new("ceil", Arity::Exact(1), math::ceil),
    BuiltinFunction::new("round", Arity::Exact(1), math::round),
    BuiltinFunction::new("trunc", Arity::Exact(1), math::trunc),
    BuiltinFunction::new("fabs", Arity::Exact(1), math::fabs),
    BuiltinFunction::new("pow", Arity::Exact(2), math::pow),
    BuiltinFunction::new("hypot", Arity::Exact(2), math::hypot),
    BuiltinFunction::new("degrees", Arity::Exact(1), math::degrees),
    BuiltinFunction::new("radians", Arity::Exact(1), math::radians),
    BuiltinFunction::new("abs", Arity::Exact(1), math::abs),
    BuiltinFunction::new("min", Arity::AtLeast(1), math::min),
    BuiltinFunction::new("max", Arity::AtLeast(1), math::max),
    BuiltinFunction::new("factorial", Arity::Exact(1), math::factorial),
    BuiltinFunction::new("gcd", Arity::Exact(2), math::gcd),
    BuiltinFunction::new("isnan", Arity::Exact(1), math::isnan),
    BuiltinFunction::new("isinf", Arity::Exact(1), math::isinf),
    // conversions
    BuiltinFunction::new("int", Arity::Exact(1), builtin_int),
    BuiltinFunction::new("float", Arity::Exact(1), builtin_float),
    BuiltinFunction::new("bool", Arity::Exact(1), builtin_bool),
    BuiltinFunction::new("str", Arity::Exact(1), builtin_str),
    BuiltinFunction::new("string", Arity::Exact(1), builtin_str),
    // misc
    BuiltinFunction::new("len", Arity::Exact(1), builtin_len),
    BuiltinFunction::new("type", Arity::Exact(1), builtin_type),
    BuiltinFunction::new("range", Arity::Exact(2), builtin_range),
    // output
    BuiltinFunction::new("print", Arity::Any, builtin_print),
    BuiltinFunction::new("println", Arity::Any, builtin_print),
];

fn constants() -> [(&'static str, Value); 9] {
    [
        ("pi", Value::Float(consts::PI)),
        ("e", Value::Float(consts::E)),
        ("tau", Value::Float(consts::TAU)),
        ("inf", Value::Float(f64::INFINITY)),
        ("nan", Value::Float(f64::NAN)),
        ("answer", Value::Int(42)),
        ("true", Value::Bool(true)),
        ("false", Value::Bool(false)),
        ("null", Value::Null),
    ]
}

/// Bind the constants and every builtin in the global scope.
pub fn register_prelude(env: &mut Environment, interner: &StringInterner) {
    for (name, value) in constants() {
        env.define_global(interner.intern(name), value);
    }
    for builtin in BUILTINS {
        env.define_global(interner.intern(builtin.name), Value::Builtin(*builtin));
    }
}

fn builtin_int(_: &BuiltinContext<'_>, args: &[Value]) -> Result<Value, EvalError> {
    to_int(&args[0]).map(Value::Int)
}

fn builtin_float(_: &BuiltinContext<'_>, args: &[Value]) -> Result<Value, EvalError> {
    to_float(&args[0]).map(Value::Float)
}

fn builtin_bool(_: &BuiltinContext<'_>, args: &[Value]) -> Result<Value, EvalError> {
    to_bool(&args[0]).map(Value::Bool)
}

fn builtin_str(_: &BuiltinContext<'_>, args: &[Value]) -> Result<Value, EvalError> {
    Ok(to_str(&args[0]))
}

/// Character count of a string, element count of a range.
fn builtin_len(_: &BuiltinContext<'_>, args: &[Value]) -> Result<Value, EvalError> {
    let len = match &args[0] {
        Value::Str(s) => s.chars().count() as u64,
        Value::Range(r) => r.len(),
        other => return Err(type_mismatch("str or range", other.type_name())),
    };
    i64::try_from(len)
        .map(Value::Int)
        .map_err(|_| integer_overflow("len"))
}

fn builtin_type(_: &BuiltinContext<'_>, args: &[Value]) -> Result<Value, EvalError> {
    Ok(Value::string(args[0].type_name()))
}

fn builtin_range(_: &BuiltinContext<'_>, args: &[Value]) -> Result<Value, EvalError> {
    match (&args[0], &args[1]) {
        (Value::Int(start), Value::Int(end)) => {
            Ok(Value::Range(RangeValue::exclusive(*start, *end)))
        }
        (Value::Int(_), other) | (other, _) => Err(type_mismatch("int", other.type_name())),
    }
}

/// Arguments joined by single spaces, then a newline.
fn builtin_print(ctx: &BuiltinContext<'_>, args: &[Value]) -> Result<Value, EvalError> {
    let line = args
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ");
    ctx.print.println(&line);
    Ok(Value::Unit)
}
