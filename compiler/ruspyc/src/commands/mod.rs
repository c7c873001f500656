//! Command handlers for the `ruspy` CLI.
//!
//! Each submodule implements one command. Argument parsing lives in
//! `args`; shared helpers (`read_file`, `report`) live here.

mod args;
mod debug;
mod explain;
mod run;

pub use args::{parse_args, CliOptions, Command, Invocation};
pub use debug::{lex_file, parse_file};
pub use explain::explain_error;
pub use run::{eval_file, eval_inline, run_file};

use std::io::IsTerminal;

use ruspy_diagnostic::emitter::TerminalEmitter;

use crate::RuspyError;

/// Errors that end a CLI invocation with exit status 1.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("cannot find file '{path}'")]
    FileNotFound { path: String },

    #[error("permission denied reading '{path}'")]
    PermissionDenied { path: String },

    #[error("'{path}' contains invalid UTF-8 data")]
    InvalidUtf8 { path: String },

    #[error("error reading '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("unknown command: {0}")]
    UnknownCommand(String),

    #[error("{0}")]
    Usage(String),

    #[error("invalid value for {flag}: '{value}'")]
    InvalidFlag { flag: &'static str, value: String },

    #[error("unknown error code: {0}")]
    UnknownErrorCode(String),

    /// Diagnostics were already written to stderr.
    #[error("aborting due to previous error")]
    Reported,
}

impl CliError {
    /// Whether the usage text should follow the message.
    pub fn wants_usage(&self) -> bool {
        matches!(self, CliError::UnknownCommand(_) | CliError::Usage(_))
    }
}

/// Dispatch a parsed invocation.
pub fn execute(invocation: &Invocation) -> Result<(), CliError> {
    let options = &invocation.options;
    match &invocation.command {
        Command::Run { path } => run_file(path, options),
        Command::Eval { path } => eval_file(path, options),
        Command::Inline { source } => eval_inline(source, options),
        Command::Lex { path } => lex_file(path),
        Command::Parse { path } => parse_file(path, options),
        Command::Explain { code } => explain_error(code),
        Command::Help | Command::Version => Ok(()),
    }
}

/// Read a source file, mapping I/O failures to user-facing messages.
pub(crate) fn read_file(path: &str) -> Result<String, CliError> {
    std::fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => CliError::FileNotFound {
            path: path.to_string(),
        },
        std::io::ErrorKind::PermissionDenied => CliError::PermissionDenied {
            path: path.to_string(),
        },
        std::io::ErrorKind::InvalidData => CliError::InvalidUtf8 {
            path: path.to_string(),
        },
        _ => CliError::Read {
            path: path.to_string(),
            source: e,
        },
    })
}

/// Render `error` to stderr with snippets from `source`.
pub(crate) fn report(
    error: &RuspyError,
    source: &str,
    path: Option<&str>,
    options: &CliOptions,
) -> CliError {
    let is_tty = std::io::stderr().is_terminal();
    let mut emitter = TerminalEmitter::stderr(options.color, is_tty).with_source(source);
    if let Some(path) = path {
        emitter = emitter.with_file_path(path);
    }
    error.emit(&mut emitter);
    CliError::Reported
}
