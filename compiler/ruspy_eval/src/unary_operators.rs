//! Unary operator implementations.

use ruspy_ir::UnaryOp;

use crate::errors::{integer_overflow, invalid_unary_op, EvalError};
use crate::Value;

/// Evaluate `op value`.
///
/// `-` negates numbers (checked for `Int`). `!` is logical not on `Bool`
/// and bitwise not on `Int`.
pub fn evaluate_unary(op: UnaryOp, value: &Value) -> Result<Value, EvalError> {
    match (op, value) {
        (UnaryOp::Neg, Value::Int(n)) => n
            .checked_neg()
            .map(Value::Int)
            .ok_or_else(|| integer_overflow("negation")),
        (UnaryOp::Neg, Value::Float(f)) => Ok(Value::Float(-f)),
        (UnaryOp::Not, Value::Bool(b)) => Ok(Value::Bool(!b)),
        (UnaryOp::Not, Value::Int(n)) => Ok(Value::Int(!n)),
        _ => Err(invalid_unary_op(op, value.type_name())),
    }
}
