//! Conditionals, loops and short-circuit logic.

use ruspy_ir::{BinaryOp, ExprId, Name};

use super::Interpreter;
use crate::errors::{non_boolean_condition, not_iterable, type_mismatch};
use crate::{ControlAction, EvalResult, Value};

/// What a loop does after one run of its body.
enum LoopStep {
    Next,
    Exit,
}

impl Interpreter {
    /// `&&` and `||`: the right operand is evaluated only when the left one
    /// does not decide the result. Both operands must be `Bool`.
    pub(super) fn eval_logical(&mut self, op: BinaryOp, left: ExprId, right: ExprId) -> EvalResult {
        let lhs = self.eval_bool_operand(left)?;
        match (op, lhs) {
            (BinaryOp::And, false) => Ok(Value::Bool(false)),
            (BinaryOp::Or, true) => Ok(Value::Bool(true)),
            _ => Ok(Value::Bool(self.eval_bool_operand(right)?)),
        }
    }

    fn eval_bool_operand(&mut self, id: ExprId) -> Result<bool, ControlAction> {
        match self.eval(id)? {
            Value::Bool(b) => Ok(b),
            other => Err(type_mismatch("bool", other.type_name())
                .with_span(self.span_of(id))
                .into()),
        }
    }

    /// Evaluate a condition, which must be `Bool`.
    fn eval_condition(&mut self, cond: ExprId) -> Result<bool, ControlAction> {
        match self.eval(cond)? {
            Value::Bool(b) => Ok(b),
            other => Err(non_boolean_condition(other.type_name())
                .with_span(self.span_of(cond))
                .into()),
        }
    }

    /// `if`: at most one branch runs; no taken branch gives `Unit`.
    pub(super) fn eval_if(
        &mut self,
        cond: ExprId,
        then_branch: ExprId,
        else_branch: ExprId,
    ) -> EvalResult {
        if self.eval_condition(cond)? {
            self.eval(then_branch)
        } else if let Some(else_branch) = else_branch.to_option() {
            self.eval(else_branch)
        } else {
            Ok(Value::Unit)
        }
    }

    pub(super) fn eval_while(&mut self, cond: ExprId, body: ExprId) -> EvalResult {
        while self.eval_condition(cond)? {
            if let LoopStep::Exit = loop_step(self.eval(body))? {
                break;
            }
        }
        Ok(Value::Unit)
    }

    /// `for binding in iter`: `iter` is evaluated once. Each element is
    /// bound in a fresh scope, so closures made in the body capture that
    /// iteration's value.
    pub(super) fn eval_for(&mut self, binding: Name, iter: ExprId, body: ExprId) -> EvalResult {
        match self.eval(iter)? {
            Value::Range(range) => {
                for n in range {
                    if let LoopStep::Exit = self.eval_iteration(binding, Value::Int(n), body)? {
                        break;
                    }
                }
            }
            Value::Str(s) => {
                for c in s.chars() {
                    let item = Value::string(c.to_string());
                    if let LoopStep::Exit = self.eval_iteration(binding, item, body)? {
                        break;
                    }
                }
            }
            other => {
                return Err(not_iterable(other.type_name())
                    .with_span(self.span_of(iter))
                    .into())
            }
        }
        Ok(Value::Unit)
    }

    fn eval_iteration(
        &mut self,
        binding: Name,
        item: Value,
        body: ExprId,
    ) -> Result<LoopStep, ControlAction> {
        let mut scoped = self.scoped();
        scoped.env.define(binding, item);
        loop_step(scoped.eval(body))
    }
}

/// `break` ends the loop, `continue` and normal completion move on; errors
/// and `return` keep propagating.
fn loop_step(result: EvalResult) -> Result<LoopStep, ControlAction> {
    match result {
        Ok(_) | Err(ControlAction::Continue(_)) => Ok(LoopStep::Next),
        Err(ControlAction::Break(_)) => Ok(LoopStep::Exit),
        Err(other) => Err(other),
    }
}
