//! Tree-walking interpreter for Ruspy.
//!
//! # Architecture
//!
//! All evaluation goes through [`Interpreter::eval`], one exhaustive `match`
//! over [`ExprKind`]. Forms that must not evaluate every child eagerly
//! (`&&`, `||`, `if`, loops, lambdas) are ordinary match arms; there is no
//! registry of special forms. Helpers live in sibling modules:
//!
//! - `control`: conditionals, loops and short-circuit logic
//! - `function_call`: calls to user functions and builtins
//! - `scope_guard`: RAII scope entry and exit
//!
//! # Arena Threading
//!
//! An `ExprId` is only meaningful in the arena it was allocated in, and a
//! function can outlive the parse that produced it (a session parses each
//! line into a new arena). Every [`FunctionValue`] therefore carries its
//! own [`SharedArena`], and a call swaps it in for the duration of the body.

mod builder;
mod control;
mod function_call;
mod scope_guard;

pub use builder::{InterpreterBuilder, InterpreterConfig};
pub use scope_guard::ScopedInterpreter;

use std::sync::Arc;

use ruspy_ir::{ExprId, ExprKind, ExprRange, Name, SharedArena, SharedInterner, Span};
use ruspy_stack::ensure_sufficient_stack;

use crate::errors::{invalid_syntax_node, type_mismatch, undefined_variable};
use crate::{
    evaluate_binary, evaluate_cast, evaluate_unary, ControlAction, Environment, EvalError,
    EvalResult, FunctionValue, RangeValue, SharedPrintHandler, Value,
};

/// Evaluator state: the tree being walked, the scope arena and the
/// configured limits.
pub struct Interpreter {
    pub(crate) interner: SharedInterner,
    /// Arena of the code currently executing.
    pub(crate) arena: SharedArena,
    pub(crate) env: Environment,
    pub(crate) print_handler: SharedPrintHandler,
    pub(crate) config: InterpreterConfig,
    pub(crate) call_depth: usize,
}

impl Interpreter {
    /// Evaluate a script root.
    ///
    /// A root `Block` runs its statements directly in the global scope, so
    /// bindings made by one evaluation are visible to the next. A
    /// `break`, `continue` or `return` that escapes to this level is an
    /// error.
    ///
    /// Captured scopes that nothing can reach anymore are collected before
    /// returning.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn evaluate(&mut self, root: ExprId) -> Result<Value, EvalError> {
        let root_kind = self.arena.try_get_expr(root).map(|e| (e.kind, e.span));
        let result = match root_kind {
            Some((ExprKind::Block { stmts, result }, span)) => self
                .eval_seq(stmts, result)
                .map_err(|action| attach_span(action, span)),
            _ => self.eval(root),
        };
        self.env.collect();
        result.map_err(ControlAction::into_error)
    }

    /// Switch to the arena of a newly parsed source. Functions defined
    /// earlier keep their own arenas.
    pub fn set_arena(&mut self, arena: SharedArena) {
        self.arena = arena;
    }

    pub fn arena(&self) -> &SharedArena {
        &self.arena
    }

    pub fn interner(&self) -> &SharedInterner {
        &self.interner
    }

    pub fn print_handler(&self) -> &SharedPrintHandler {
        &self.print_handler
    }

    pub fn config(&self) -> &InterpreterConfig {
        &self.config
    }

    /// Look up a global binding by name.
    pub fn global(&self, name: &str) -> Option<Value> {
        let name = self.interner.intern(name);
        self.env.lookup(name)
    }

    /// Evaluate one node.
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn eval(&mut self, id: ExprId) -> EvalResult {
        ensure_sufficient_stack(|| self.eval_inner(id))
    }

    fn eval_inner(&mut self, id: ExprId) -> EvalResult {
        let Some(expr) = self.arena.try_get_expr(id).copied() else {
            return Err(invalid_syntax_node().into());
        };
        self.eval_kind(expr.kind, expr.span)
            .map_err(|action| attach_span(action, expr.span))
    }

    fn eval_kind(&mut self, kind: ExprKind, span: Span) -> EvalResult {
        match kind {
            ExprKind::Int(n) => Ok(Value::Int(n)),
            ExprKind::Float(bits) => Ok(Value::Float(f64::from_bits(bits))),
            ExprKind::Bool(b) => Ok(Value::Bool(b)),
            ExprKind::Str(name) => Ok(Value::string(self.interner.lookup(name))),
            ExprKind::Null => Ok(Value::Null),

            ExprKind::Ident(name) => self.lookup(name).map_err(Into::into),

            ExprKind::Let { name, init } => {
                let value = self.eval(init)?;
                self.env.define(name, value);
                Ok(Value::Unit)
            }
            ExprKind::Assign { name, value } => {
                let value = self.eval(value)?;
                self.env.assign(name, value.clone());
                Ok(value)
            }
            ExprKind::AssignOp { name, op, value } => {
                let current = self.lookup(name)?;
                let rhs = self.eval(value)?;
                let updated = evaluate_binary(op, &current, &rhs)?;
                self.env.assign(name, updated.clone());
                Ok(updated)
            }

            ExprKind::Binary { op, left, right } => {
                if op.is_short_circuit() {
                    return self.eval_logical(op, left, right);
                }
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                Ok(evaluate_binary(op, &left, &right)?)
            }
            ExprKind::Unary { op, operand } => {
                let value = self.eval(operand)?;
                Ok(evaluate_unary(op, &value)?)
            }
            ExprKind::Cast { expr, target } => {
                let value = self.eval(expr)?;
                Ok(evaluate_cast(&value, self.interner.lookup(target))?)
            }
            ExprKind::Call { func, args } => self.eval_call(func, args),

            ExprKind::If {
                cond,
                then_branch,
                else_branch,
            } => self.eval_if(cond, then_branch, else_branch),
            ExprKind::For {
                binding,
                iter,
                body,
            } => self.eval_for(binding, iter, body),
            ExprKind::While { cond, body } => self.eval_while(cond, body),

            ExprKind::Lambda { params, body } => {
                let captured = self.env.capture();
                Ok(Value::Function(FunctionValue {
                    name: None,
                    params,
                    body,
                    captured,
                    arena: Arc::clone(&self.arena),
                }))
            }
            ExprKind::FnDecl { name, params, body } => {
                let captured = self.env.capture();
                let function = Value::Function(FunctionValue {
                    name: Some(Arc::from(self.interner.lookup(name))),
                    params,
                    body,
                    captured,
                    arena: Arc::clone(&self.arena),
                });
                self.env.define(name, function);
                Ok(Value::Unit)
            }

            ExprKind::Range {
                start,
                end,
                inclusive,
            } => {
                let start = self.eval_range_bound(start)?;
                let end = self.eval_range_bound(end)?;
                Ok(Value::Range(RangeValue::new(start, end, inclusive)))
            }

            ExprKind::Block { stmts, result } => self.scoped().eval_seq(stmts, result),

            ExprKind::Return(value) => {
                let value = match value.to_option() {
                    Some(id) => self.eval(id)?,
                    None => Value::Null,
                };
                Err(ControlAction::Return(value))
            }
            ExprKind::Break => Err(ControlAction::Break(span)),
            ExprKind::Continue => Err(ControlAction::Continue(span)),

            ExprKind::Error => Err(invalid_syntax_node().into()),
        }
    }

    fn lookup(&self, name: Name) -> Result<Value, EvalError> {
        self.env
            .lookup(name)
            .ok_or_else(|| undefined_variable(self.interner.lookup(name)))
    }

    /// Statements for effect, then the trailing result (`Unit` if absent).
    fn eval_seq(&mut self, stmts: ExprRange, result: ExprId) -> EvalResult {
        let arena = Arc::clone(&self.arena);
        for &stmt in arena.get_expr_list(stmts) {
            self.eval(stmt)?;
        }
        match result.to_option() {
            Some(id) => self.eval(id),
            None => Ok(Value::Unit),
        }
    }

    fn eval_range_bound(&mut self, id: ExprId) -> Result<i64, ControlAction> {
        match self.eval(id)? {
            Value::Int(n) => Ok(n),
            other => Err(type_mismatch("int range bound", other.type_name())
                .or_span(self.span_of(id))
                .into()),
        }
    }

    pub(crate) fn span_of(&self, id: ExprId) -> Span {
        self.arena
            .try_get_expr(id)
            .map_or(Span::DUMMY, |expr| expr.span)
    }
}

/// Give an error the span of the node it escaped from, unless an inner
/// node already set one.
fn attach_span(mut action: ControlAction, span: Span) -> ControlAction {
    if let ControlAction::Error(error) = &mut action {
        error.span.get_or_insert(span);
    }
    action
}

#[cfg(test)]
mod tests;
