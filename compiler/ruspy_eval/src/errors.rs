//! Evaluation errors and control-flow signals.
//!
//! Every error is built by one of the `#[cold]` factory functions below,
//! which fill in both the structured [`EvalErrorKind`] and the message.
//! The evaluator attaches the span of the failing expression afterwards.

use std::fmt;

use ruspy_ir::{BinaryOp, Span, UnaryOp};

use crate::value::{Arity, Value};

/// Result of evaluating one expression.
pub type EvalResult = Result<Value, ControlAction>;

/// User-facing error class.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    NameError,
    TypeError,
    ArityError,
    DivisionError,
    ModuleError,
    SyntaxError,
    RuntimeError,
}

impl ErrorCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCategory::NameError => "NameError",
            ErrorCategory::TypeError => "TypeError",
            ErrorCategory::ArityError => "ArityError",
            ErrorCategory::DivisionError => "DivisionError",
            ErrorCategory::ModuleError => "ModuleError",
            ErrorCategory::SyntaxError => "SyntaxError",
            ErrorCategory::RuntimeError => "RuntimeError",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structured error kind. `Display` produces the error message.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EvalErrorKind {
    #[error("undefined variable `{name}`")]
    UndefinedVariable { name: String },

    #[error("type mismatch: expected {expected}, got {got}")]
    TypeMismatch { expected: String, got: &'static str },

    #[error("operator `{}` cannot be applied to {left} and {right}", .op.as_symbol())]
    InvalidBinaryOp {
        op: BinaryOp,
        left: &'static str,
        right: &'static str,
    },

    #[error("operator `{}` cannot be applied to {operand}", .op.as_symbol())]
    InvalidUnaryOp { op: UnaryOp, operand: &'static str },

    #[error("cannot convert {value} to {target}")]
    InvalidCast { value: String, target: String },

    #[error("{type_name} is not callable")]
    NotCallable { type_name: &'static str },

    #[error("condition must be bool, got {got}")]
    NonBooleanCondition { got: &'static str },

    #[error("cannot iterate over {type_name}")]
    NotIterable { type_name: &'static str },

    #[error("integer overflow in {operation}")]
    IntegerOverflow { operation: &'static str },

    #[error("shift amount {amount} is out of range (0..64)")]
    InvalidShift { amount: i64 },

    #[error("`{name}` takes {expected}, got {got}")]
    ArityMismatch {
        name: String,
        expected: Arity,
        got: usize,
    },

    #[error("division by zero")]
    DivisionByZero,

    #[error("modulo by zero")]
    ModuloByZero,

    #[error("module has no `main` function")]
    MissingMain,

    #[error("`{keyword}` outside of {context}")]
    ControlFlowOutsideContext {
        keyword: &'static str,
        context: &'static str,
    },

    #[error("cannot evaluate a malformed expression")]
    InvalidSyntaxNode,

    #[error("maximum call depth exceeded (limit: {limit})")]
    RecursionLimit { limit: usize },

    #[error("{message}")]
    Custom { message: String },
}

impl EvalErrorKind {
    pub fn category(&self) -> ErrorCategory {
        match self {
            EvalErrorKind::UndefinedVariable { .. } => ErrorCategory::NameError,
            EvalErrorKind::TypeMismatch { .. }
            | EvalErrorKind::InvalidBinaryOp { .. }
            | EvalErrorKind::InvalidUnaryOp { .. }
            | EvalErrorKind::InvalidCast { .. }
            | EvalErrorKind::NotCallable { .. }
            | EvalErrorKind::NonBooleanCondition { .. }
            | EvalErrorKind::NotIterable { .. }
            | EvalErrorKind::IntegerOverflow { .. }
            | EvalErrorKind::InvalidShift { .. } => ErrorCategory::TypeError,
            EvalErrorKind::ArityMismatch { .. } => ErrorCategory::ArityError,
            EvalErrorKind::DivisionByZero | EvalErrorKind::ModuloByZero => {
                ErrorCategory::DivisionError
            }
            EvalErrorKind::MissingMain => ErrorCategory::ModuleError,
            EvalErrorKind::ControlFlowOutsideContext { .. } | EvalErrorKind::InvalidSyntaxNode => {
                ErrorCategory::SyntaxError
            }
            EvalErrorKind::RecursionLimit { .. } | EvalErrorKind::Custom { .. } => {
                ErrorCategory::RuntimeError
            }
        }
    }
}

/// A runtime error.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct EvalError {
    pub kind: EvalErrorKind,
    pub message: String,
    /// Span of the expression that raised the error.
    pub span: Option<Span>,
}

impl EvalError {
    fn from_kind(kind: EvalErrorKind) -> Self {
        let message = kind.to_string();
        EvalError {
            kind,
            message,
            span: None,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        self.kind.category()
    }

    #[must_use]
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }

    /// Attach `span` unless a more precise one is already recorded.
    #[must_use]
    pub fn or_span(mut self, span: Span) -> Self {
        self.span.get_or_insert(span);
        self
    }
}

/// Why evaluation of an expression stopped early.
#[derive(Clone, Debug, PartialEq)]
pub enum ControlAction {
    Error(Box<EvalError>),
    /// `break`, with the span of the keyword.
    Break(Span),
    /// `continue`, with the span of the keyword.
    Continue(Span),
    Return(Value),
}

impl ControlAction {
    /// Turn a signal that escaped every construct that could handle it into
    /// an error.
    pub fn into_error(self) -> EvalError {
        match self {
            ControlAction::Error(e) => *e,
            ControlAction::Break(span) => {
                control_flow_outside_context("break", "a loop").or_span(span)
            }
            ControlAction::Continue(span) => {
                control_flow_outside_context("continue", "a loop").or_span(span)
            }
            ControlAction::Return(_) => control_flow_outside_context("return", "a function"),
        }
    }
}

impl From<EvalError> for ControlAction {
    #[inline]
    fn from(error: EvalError) -> Self {
        ControlAction::Error(Box::new(error))
    }
}

// Factories

#[cold]
pub fn undefined_variable(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UndefinedVariable {
        name: name.to_string(),
    })
}

#[cold]
pub fn type_mismatch(expected: impl Into<String>, got: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::TypeMismatch {
        expected: expected.into(),
        got,
    })
}

#[cold]
pub fn invalid_binary_op(op: BinaryOp, left: &'static str, right: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::InvalidBinaryOp { op, left, right })
}

#[cold]
pub fn invalid_unary_op(op: UnaryOp, operand: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::InvalidUnaryOp { op, operand })
}

#[cold]
pub fn invalid_cast(value: &Value, target: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::InvalidCast {
        value: value.repr(),
        target: target.to_string(),
    })
}

#[cold]
pub fn not_callable(type_name: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NotCallable { type_name })
}

#[cold]
pub fn non_boolean_condition(got: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NonBooleanCondition { got })
}

#[cold]
pub fn not_iterable(type_name: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NotIterable { type_name })
}

#[cold]
pub fn integer_overflow(operation: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::IntegerOverflow { operation })
}

#[cold]
pub fn invalid_shift(amount: i64) -> EvalError {
    EvalError::from_kind(EvalErrorKind::InvalidShift { amount })
}

#[cold]
pub fn arity_mismatch(name: &str, expected: Arity, got: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::ArityMismatch {
        name: name.to_string(),
        expected,
        got,
    })
}

#[cold]
pub fn division_by_zero() -> EvalError {
    EvalError::from_kind(EvalErrorKind::DivisionByZero)
}

#[cold]
pub fn modulo_by_zero() -> EvalError {
    EvalError::from_kind(EvalErrorKind::ModuloByZero)
}

#[cold]
pub fn missing_main() -> EvalError {
    EvalError::from_kind(EvalErrorKind::MissingMain)
}

#[cold]
pub fn control_flow_outside_context(keyword: &'static str, context: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::ControlFlowOutsideContext { keyword, context })
}

#[cold]
pub fn invalid_syntax_node() -> EvalError {
    EvalError::from_kind(EvalErrorKind::InvalidSyntaxNode)
}

#[cold]
pub fn recursion_limit(limit: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::RecursionLimit { limit })
}

/// Builtin failure, e.g. a math domain error.
#[cold]
pub fn runtime_error(message: impl Into<String>) -> EvalError {
    EvalError::from_kind(EvalErrorKind::Custom {
        message: message.into(),
    })
}
