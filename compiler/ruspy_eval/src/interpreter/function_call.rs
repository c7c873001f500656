//! Function calls.

use std::sync::Arc;

use ruspy_ir::{ExprId, ExprKind, ExprRange};

use super::Interpreter;
use crate::errors::{arity_mismatch, not_callable, recursion_limit, EvalError};
use crate::{
    Arity, BuiltinContext, BuiltinFunction, ControlAction, EvalResult, FunctionValue, Value,
};

impl Interpreter {
    /// `callee(args)`: the callee first, then the arguments left to right.
    #[tracing::instrument(level = "trace", skip(self))]
    pub(super) fn eval_call(&mut self, func: ExprId, args: ExprRange) -> EvalResult {
        let callee = self.eval(func)?;
        let arena = Arc::clone(&self.arena);
        let arg_ids = arena.get_expr_list(args);
        let mut values = Vec::with_capacity(arg_ids.len());
        for &arg in arg_ids {
            values.push(self.eval(arg)?);
        }
        Ok(self.call_value(&callee, &values)?)
    }

    /// Call a function value from Rust, e.g. a function returned by
    /// [`Interpreter::load_module`].
    pub fn call_value(&mut self, callee: &Value, args: &[Value]) -> Result<Value, EvalError> {
        match callee {
            Value::Function(func) => self.call_function(func, args),
            Value::Builtin(builtin) => self.call_builtin(builtin, args),
            other => Err(not_callable(other.type_name())),
        }
    }

    fn call_builtin(&self, builtin: &BuiltinFunction, args: &[Value]) -> Result<Value, EvalError> {
        builtin.arity.check(builtin.name, args.len())?;
        let ctx = BuiltinContext {
            print: &self.print_handler,
        };
        (builtin.func)(&ctx, args)
    }

    fn call_function(&mut self, func: &FunctionValue, args: &[Value]) -> Result<Value, EvalError> {
        if args.len() != func.arity() {
            return Err(arity_mismatch(
                func.display_name(),
                Arity::Exact(func.arity()),
                args.len(),
            ));
        }
        if self.call_depth >= self.config.max_call_depth {
            return Err(recursion_limit(self.config.max_call_depth));
        }
        tracing::trace!(function = func.display_name(), depth = self.call_depth, "call");

        let caller_arena = if Arc::ptr_eq(&self.arena, &func.arena) {
            None
        } else {
            Some(std::mem::replace(&mut self.arena, Arc::clone(&func.arena)))
        };
        self.call_depth += 1;
        let result = self.eval_function_body(func, args);
        self.call_depth -= 1;
        if let Some(arena) = caller_arena {
            self.arena = arena;
        }
        result
    }

    /// Bind parameters in a child of the captured scope and run the body.
    /// `return` ends the call with its value; an empty body gives `Null`.
    fn eval_function_body(
        &mut self,
        func: &FunctionValue,
        args: &[Value],
    ) -> Result<Value, EvalError> {
        let arena = Arc::clone(&self.arena);
        let body = arena.try_get_expr(func.body).map(|e| e.kind);
        if let Some(ExprKind::Block { stmts, result }) = body {
            if stmts.is_empty() && !result.is_valid() {
                return Ok(Value::Null);
            }
        }

        let mut scoped = self.scoped_in(func.captured.id());
        for (param, value) in arena.get_params(func.params).iter().zip(args) {
            scoped.env.define(param.name, value.clone());
        }
        match scoped.eval(func.body) {
            Ok(value) | Err(ControlAction::Return(value)) => Ok(value),
            Err(other) => Err(other.into_error()),
        }
    }
}
