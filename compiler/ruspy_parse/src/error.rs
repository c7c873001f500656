//! Parse errors.

use ruspy_diagnostic::{Diagnostic, ErrorCode};
use ruspy_ir::{Span, TokenKind};

/// What was being parsed, for "while parsing X" notes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorContext {
    FunctionDef,
    Parameters,
    Block,
    IfExpression,
    ForLoop,
    WhileLoop,
    Closure,
    CallArguments,
    LetBinding,
}

impl ErrorContext {
    pub fn description(self) -> &'static str {
        match self {
            ErrorContext::FunctionDef => "a function definition",
            ErrorContext::Parameters => "a parameter list",
            ErrorContext::Block => "a block",
            ErrorContext::IfExpression => "an if expression",
            ErrorContext::ForLoop => "a for loop",
            ErrorContext::WhileLoop => "a while loop",
            ErrorContext::Closure => "a closure",
            ErrorContext::CallArguments => "call arguments",
            ErrorContext::LetBinding => "a let binding",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ParseError {
    pub code: ErrorCode,
    pub message: String,
    pub span: Span,
    pub context: Option<ErrorContext>,
}

impl ParseError {
    #[cold]
    pub fn new(code: ErrorCode, message: impl Into<String>, span: Span) -> Self {
        ParseError {
            code,
            message: message.into(),
            span,
            context: None,
        }
    }

    #[cold]
    pub fn unexpected(found: TokenKind, expected: &str, span: Span) -> Self {
        ParseError::new(
            ErrorCode::E1001,
            format!("expected {expected}, found {}", found.display_name()),
            span,
        )
    }

    #[cold]
    pub fn expected_expression(found: TokenKind, span: Span) -> Self {
        ParseError::new(
            ErrorCode::E1002,
            format!("expected expression, found {}", found.display_name()),
            span,
        )
    }

    /// Attach a context unless a more specific one is already set.
    #[must_use]
    pub fn in_context(mut self, context: ErrorContext) -> Self {
        self.context.get_or_insert(context);
        self
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(self.code)
            .with_message(self.message.clone())
            .with_label(self.span, "here");
        match self.context {
            Some(ctx) => diag.with_note(format!("while parsing {}", ctx.description())),
            None => diag,
        }
    }
}
