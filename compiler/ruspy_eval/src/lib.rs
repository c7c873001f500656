//! Ruspy Eval - tree-walking evaluator.
//!
//! Walks the flat syntax tree produced by `ruspy_parse` and produces
//! [`Value`]s.
//!
//! # Architecture
//!
//! - [`Environment`]: arena of scopes addressed by [`ScopeId`]; closures
//!   hold a counted [`ScopeRef`], and unreachable captured scopes are
//!   collected
//! - [`evaluate_binary`] / [`evaluate_unary`] / [`evaluate_cast`]: direct
//!   enum dispatch over the fixed value set
//! - [`Interpreter`]: one exhaustive `match` over `ExprKind`; lazy forms
//!   (`&&`, `||`, `if`, loops, lambdas) are ordinary match arms
//! - `prelude`: native functions and constants bound in the global scope
//!
//! Control flow (`break`, `continue`, `return`) and errors share one
//! channel: [`EvalResult`] is `Result<Value, ControlAction>`.

mod conversions;
mod diagnostics;
mod environment;
pub mod errors;
pub mod interpreter;
mod module;
mod operators;
mod prelude;
mod print_handler;
mod unary_operators;
mod value;

pub use conversions::evaluate_cast;
pub use environment::{Environment, ScopeId, ScopeRef};
pub use errors::{ControlAction, ErrorCategory, EvalError, EvalErrorKind, EvalResult};
pub use interpreter::{Interpreter, InterpreterBuilder, InterpreterConfig};
pub use module::ModuleMap;
pub use operators::{compare_values, evaluate_binary};
pub use prelude::{register_prelude, BuiltinContext, BUILTINS};
pub use print_handler::{
    buffer_handler, stdout_handler, BufferPrintHandler, PrintHandlerImpl, SharedPrintHandler,
    StdoutPrintHandler,
};
pub use unary_operators::evaluate_unary;
pub use value::{Arity, BuiltinFn, BuiltinFunction, FunctionValue, RangeIter, RangeValue, Value};

#[cfg(test)]
mod tests;
