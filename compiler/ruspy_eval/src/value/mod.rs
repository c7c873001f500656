//! Runtime values.
//!
//! [`Value`] is a closed enum; every operator is a `match` over it (see
//! `operators.rs`). Values are immutable: strings are `Arc<str>` and an
//! operation always builds a new value.

mod range;

pub use range::{RangeIter, RangeValue};

use std::fmt;
use std::sync::Arc;

use ruspy_ir::{ExprId, ParamRange, SharedArena};

use crate::errors::{arity_mismatch, EvalError};
use crate::prelude::BuiltinContext;
use crate::ScopeRef;

/// A Ruspy runtime value.
#[derive(Clone, Debug)]
pub enum Value {
    Int(i64),
    Float(f64),
    Bool(bool),
    Str(Arc<str>),
    Range(RangeValue),
    /// The `null` literal, and the result of a function with an empty body.
    Null,
    /// The value of statements: `let`, loops, an `if` with no taken branch.
    Unit,
    /// User function or closure.
    Function(FunctionValue),
    /// Native function from the prelude.
    Builtin(BuiltinFunction),
}

impl Value {
    /// Build a string value.
    #[inline]
    pub fn string(s: impl Into<Arc<str>>) -> Self {
        Value::Str(s.into())
    }

    /// Name of the variant, as reported by `type()` and in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Bool(_) => "bool",
            Value::Str(_) => "str",
            Value::Range(_) => "range",
            Value::Null => "null",
            Value::Unit => "unit",
            Value::Function(_) => "function",
            Value::Builtin(_) => "builtin",
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Numeric view used by mixed `Int`/`Float` arithmetic and the math
    /// builtins.
    #[allow(
        clippy::cast_precision_loss,
        reason = "int to float promotion is the language's coercion rule"
    )]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(n) => Some(*n as f64),
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Source-like rendering used in error messages: strings are quoted.
    pub fn repr(&self) -> String {
        match self {
            Value::Str(s) => format!("{:?}", &**s),
            other => other.to_string(),
        }
    }
}

/// Equality as the `==` operator sees it.
///
/// `Int` and `Float` compare numerically; any other pair of different
/// variants is unequal.
impl PartialEq for Value {
    #[allow(
        clippy::cast_precision_loss,
        reason = "int to float promotion is the language's coercion rule"
    )]
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Int(a), Value::Float(b)) | (Value::Float(b), Value::Int(a)) => {
                (*a as f64) == *b
            }
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Range(a), Value::Range(b)) => a == b,
            (Value::Null, Value::Null) | (Value::Unit, Value::Unit) => true,
            (Value::Function(a), Value::Function(b)) => a == b,
            (Value::Builtin(a), Value::Builtin(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(x) => fmt_float(*x, f),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Str(s) => f.write_str(s),
            Value::Range(r) => write!(f, "{r}"),
            Value::Null => f.write_str("null"),
            Value::Unit => f.write_str("()"),
            Value::Function(func) => match &func.name {
                Some(name) => write!(f, "<fn {name}>"),
                None => f.write_str("<closure>"),
            },
            Value::Builtin(b) => write!(f, "<builtin {}>", b.name),
        }
    }
}

/// Floats always show a fractional part (`1.0`), except the non-finite ones.
fn fmt_float(x: f64, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if x.is_finite() && x.fract() == 0.0 && x.abs() < 1e16 {
        write!(f, "{x:.1}")
    } else {
        write!(f, "{x:?}")
    }
}

/// A user function or closure.
///
/// The body lives in `arena`, which may differ from the arena of the code
/// that calls it (functions outlive the evaluation that defined them).
#[derive(Clone)]
pub struct FunctionValue {
    /// Declared name; `None` for lambdas.
    pub name: Option<Arc<str>>,
    pub params: ParamRange,
    pub body: ExprId,
    /// Scope the function was defined in; the parent of every call frame.
    pub captured: ScopeRef,
    pub arena: SharedArena,
}

impl FunctionValue {
    pub fn arity(&self) -> usize {
        self.params.len()
    }

    /// Display name for errors and tracing.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("<closure>")
    }
}

/// Functions are equal when they are the same definition closed over the
/// same scope.
impl PartialEq for FunctionValue {
    fn eq(&self, other: &Self) -> bool {
        self.body == other.body
            && self.captured == other.captured
            && Arc::ptr_eq(&self.arena, &other.arena)
    }
}

impl fmt::Debug for FunctionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionValue")
            .field("name", &self.name)
            .field("arity", &self.arity())
            .field("body", &self.body)
            .field("captured", &self.captured)
            .finish_non_exhaustive()
    }
}

/// Native function signature.
pub type BuiltinFn = fn(&BuiltinContext<'_>, &[Value]) -> Result<Value, EvalError>;

/// How many arguments a builtin accepts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Arity {
    Exact(usize),
    /// Inclusive bounds.
    Between(usize, usize),
    AtLeast(usize),
    Any,
}

impl Arity {
    pub fn accepts(self, count: usize) -> bool {
        match self {
            Arity::Exact(n) => count == n,
            Arity::Between(lo, hi) => (lo..=hi).contains(&count),
            Arity::AtLeast(n) => count >= n,
            Arity::Any => true,
        }
    }

    pub fn check(self, name: &str, count: usize) -> Result<(), EvalError> {
        if self.accepts(count) {
            Ok(())
        } else {
            Err(arity_mismatch(name, self, count))
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let plural = |n: usize| if n == 1 { "argument" } else { "arguments" };
        match *self {
            Arity::Exact(n) => write!(f, "{n} {}", plural(n)),
            Arity::Between(lo, hi) => write!(f, "{lo} to {hi} arguments"),
            Arity::AtLeast(n) => write!(f, "at least {n} {}", plural(n)),
            Arity::Any => f.write_str("any number of arguments"),
        }
    }
}

/// A native function: name, arity and implementation.
#[derive(Clone, Copy)]
pub struct BuiltinFunction {
    pub name: &'static str,
    pub arity: Arity,
    pub func: BuiltinFn,
}

impl BuiltinFunction {
    pub const fn new(name: &'static str, arity: Arity, func: BuiltinFn) -> Self {
        BuiltinFunction { name, arity, func }
    }
}

impl PartialEq for BuiltinFunction {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl fmt::Debug for BuiltinFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BuiltinFunction({}, {:?})", self.name, self.arity)
    }
}

#[cfg(test)]
mod tests;
