//! Ruspy driver: source text in, values out.
//!
//! # Pipeline
//!
//! ```text
//! source ──► ruspy_lexer ──► TokenList
//!                               │
//!                               ▼
//!            ruspy_parse ──► ExprArena + root / Module
//!                               │
//!                               ▼
//!            ruspy_eval  ──► Value
//! ```
//!
//! The free functions ([`eval`], [`module`], [`run`]) each use a fresh
//! [`Session`] printing to stdout. Use a `Session` directly to keep globals
//! between sources or to capture output.
//!
//! ```text
//! eval("42 >> 1 + 1")                     // Ok(Value::Int(10))
//! module("fn incr(n) { n + 1 }")?.call("incr", &[Value::Int(1)])   // Ok(Value::Int(2))
//! run("fn main() { println(\"hello world!\") }")   // prints, Ok(Value::Unit)
//! ```

pub mod commands;
mod error;
mod session;
pub mod tracing_setup;

pub use error::RuspyError;
pub use session::{LoadedModule, Session};

pub use ruspy_diagnostic::emitter::ColorMode;
pub use ruspy_eval::{
    buffer_handler, stdout_handler, ErrorCategory, EvalError, EvalErrorKind, InterpreterConfig,
    ModuleMap, RangeValue, SharedPrintHandler, Value,
};

/// Evaluate `source` as a script and return the value of its last
/// statement.
pub fn eval(source: &str) -> Result<Value, RuspyError> {
    Session::new().eval(source)
}

/// Load `source` as a module of `fn` declarations without running any of
/// them.
pub fn module(source: &str) -> Result<LoadedModule, RuspyError> {
    Session::new().into_module(source)
}

/// Load `source` as a module and call its `main()`.
pub fn run(source: &str) -> Result<Value, RuspyError> {
    Session::new().run(source)
}
