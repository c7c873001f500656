//! Lexer errors.

use ruspy_diagnostic::{Diagnostic, ErrorCode};
use ruspy_ir::Span;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum LexErrorKind {
    /// A character that starts no token, such as `@` or `$`.
    UnexpectedChar,
    /// A `"` with no closing quote.
    UnterminatedString,
    /// A `/*` with no closing `*/`.
    UnterminatedComment,
    /// A numeric literal that is malformed or does not fit in `u64`.
    InvalidNumber,
}

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct LexError {
    pub kind: LexErrorKind,
    pub span: Span,
}

impl LexError {
    /// Classify a rejected slice by how it starts.
    pub(crate) fn classify(slice: &str, span: Span) -> Self {
        let kind = if slice.starts_with('"') {
            LexErrorKind::UnterminatedString
        } else if slice.starts_with("/*") {
            LexErrorKind::UnterminatedComment
        } else if slice.starts_with(|c: char| c.is_ascii_digit()) {
            LexErrorKind::InvalidNumber
        } else {
            LexErrorKind::UnexpectedChar
        };
        LexError { kind, span }
    }

    pub fn message(&self, source: &str) -> String {
        let text = source.get(self.span.to_range()).unwrap_or("");
        match self.kind {
            LexErrorKind::UnexpectedChar => format!("unexpected character `{text}`"),
            LexErrorKind::UnterminatedString => "unterminated string literal".to_string(),
            LexErrorKind::UnterminatedComment => "unterminated block comment".to_string(),
            LexErrorKind::InvalidNumber => format!("invalid numeric literal `{text}`"),
        }
    }

    pub fn to_diagnostic(&self, source: &str) -> Diagnostic {
        let code = match self.kind {
            LexErrorKind::InvalidNumber => ErrorCode::E0002,
            _ => ErrorCode::E0001,
        };
        Diagnostic::error(code)
            .with_message(self.message(source))
            .with_label(self.span, "not a valid token")
    }
}
