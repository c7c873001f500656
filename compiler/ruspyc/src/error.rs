//! Errors from any stage of the pipeline.

use ruspy_diagnostic::emitter::{ColorMode, DiagnosticEmitter, TerminalEmitter};
use ruspy_diagnostic::Diagnostic;
use ruspy_eval::{ErrorCategory, EvalError};
use ruspy_lexer::LexError;
use ruspy_parse::ParseError;

/// Failure to lex, parse or evaluate a source text.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RuspyError {
    /// Lexical or syntax errors, in source order. Never empty.
    #[error("{}", summarize(.0))]
    Parse(Vec<ParseError>),
    #[error("{}: {}", .0.category(), .0)]
    Eval(EvalError),
}

fn summarize(errors: &[ParseError]) -> String {
    match errors {
        [] => "syntax error".to_string(),
        [only] => format!("SyntaxError: {only}"),
        [first, rest @ ..] => format!("SyntaxError: {first} (and {} more)", rest.len()),
    }
}

impl RuspyError {
    /// Lexical errors are reported with the parse errors; the lexer codes
    /// (`E0xxx`) are kept.
    pub(crate) fn from_lex_errors(errors: &[LexError], source: &str) -> Self {
        RuspyError::Parse(
            errors
                .iter()
                .map(|e| {
                    let diag = e.to_diagnostic(source);
                    ParseError::new(diag.code, diag.message, e.span)
                })
                .collect(),
        )
    }

    /// Category in the same vocabulary as runtime errors.
    pub fn category(&self) -> ErrorCategory {
        match self {
            RuspyError::Parse(_) => ErrorCategory::SyntaxError,
            RuspyError::Eval(e) => e.category(),
        }
    }

    pub fn as_eval(&self) -> Option<&EvalError> {
        match self {
            RuspyError::Eval(e) => Some(e),
            RuspyError::Parse(_) => None,
        }
    }

    pub fn to_diagnostics(&self) -> Vec<Diagnostic> {
        match self {
            RuspyError::Parse(errors) => errors.iter().map(ParseError::to_diagnostic).collect(),
            RuspyError::Eval(e) => vec![e.to_diagnostic()],
        }
    }

    /// Render every diagnostic, with snippets from `source`, to `emitter`.
    pub fn emit(&self, emitter: &mut impl DiagnosticEmitter) {
        let diagnostics = self.to_diagnostics();
        emitter.emit_all(&diagnostics);
        emitter.emit_summary(diagnostics.len());
        emitter.flush();
    }

    /// Uncolored rendering, as `ruspy` prints it to a pipe.
    pub fn render(&self, source: &str, path: Option<&str>) -> String {
        let mut emitter =
            TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Never, false).with_source(source);
        if let Some(path) = path {
            emitter = emitter.with_file_path(path);
        }
        self.emit(&mut emitter);
        String::from_utf8_lossy(&emitter.into_inner()).into_owned()
    }
}

impl From<EvalError> for RuspyError {
    fn from(error: EvalError) -> Self {
        RuspyError::Eval(error)
    }
}
