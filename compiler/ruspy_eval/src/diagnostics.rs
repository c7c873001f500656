//! Conversion of runtime errors into diagnostics.

use ruspy_diagnostic::{Diagnostic, ErrorCode};

use crate::{EvalError, EvalErrorKind};

impl EvalErrorKind {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            EvalErrorKind::UndefinedVariable { .. } => ErrorCode::E6001,
            EvalErrorKind::TypeMismatch { .. }
            | EvalErrorKind::InvalidBinaryOp { .. }
            | EvalErrorKind::InvalidUnaryOp { .. }
            | EvalErrorKind::InvalidCast { .. }
            | EvalErrorKind::NotCallable { .. }
            | EvalErrorKind::NonBooleanCondition { .. }
            | EvalErrorKind::NotIterable { .. }
            | EvalErrorKind::IntegerOverflow { .. }
            | EvalErrorKind::InvalidShift { .. } => ErrorCode::E6002,
            EvalErrorKind::ArityMismatch { .. } => ErrorCode::E6003,
            EvalErrorKind::DivisionByZero | EvalErrorKind::ModuloByZero => ErrorCode::E6004,
            EvalErrorKind::MissingMain => ErrorCode::E6005,
            EvalErrorKind::ControlFlowOutsideContext { .. } => ErrorCode::E6006,
            EvalErrorKind::RecursionLimit { .. } => ErrorCode::E6007,
            EvalErrorKind::InvalidSyntaxNode | EvalErrorKind::Custom { .. } => ErrorCode::E6099,
        }
    }
}

impl EvalError {
    /// `error[E6001]: NameError: undefined variable `x``, labeled at the
    /// failing expression when its span is known.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(self.kind.error_code())
            .with_message(format!("{}: {}", self.category(), self.message));
        match self.span {
            Some(span) => diag.with_label(span, self.category().as_str()),
            None => diag,
        }
    }
}
