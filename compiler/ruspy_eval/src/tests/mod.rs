//! Evaluation tests driven from source text.
//!
//! Each helper lexes and parses a script into a fresh arena and evaluates
//! it with output captured in a buffer.

#![allow(clippy::unwrap_used, clippy::expect_used)]

mod closure_tests;
mod control_tests;

use std::sync::Arc;

use ruspy_ir::{ExprArena, StringInterner};

use crate::{buffer_handler, EvalError, Interpreter, InterpreterBuilder, Value};

pub(crate) fn interpreter() -> Interpreter {
    InterpreterBuilder::new(Arc::new(StringInterner::new()), Arc::new(ExprArena::new()))
        .print_handler(buffer_handler())
        .build()
}

/// Parse `source` into a new arena and evaluate it in `interpreter`.
pub(crate) fn run_in(interpreter: &mut Interpreter, source: &str) -> Result<Value, EvalError> {
    let tokens = ruspy_lexer::lex(source, interpreter.interner());
    let parsed = ruspy_parse::parse_expression(&tokens, interpreter.interner());
    assert!(
        parsed.errors.is_empty(),
        "parse errors in {source:?}: {:?}",
        parsed.errors
    );
    interpreter.set_arena(Arc::new(parsed.arena));
    interpreter.evaluate(parsed.root)
}

pub(crate) fn eval(source: &str) -> Result<Value, EvalError> {
    run_in(&mut interpreter(), source)
}

pub(crate) fn eval_ok(source: &str) -> Value {
    eval(source).unwrap_or_else(|e| panic!("{source:?} failed: {e}"))
}

pub(crate) fn eval_err(source: &str) -> EvalError {
    match eval(source) {
        Ok(value) => panic!("{source:?} evaluated to {value:?}, expected an error"),
        Err(e) => e,
    }
}

/// Result and captured output.
pub(crate) fn eval_output(source: &str) -> (Result<Value, EvalError>, String) {
    let mut interpreter = interpreter();
    let result = run_in(&mut interpreter, source);
    (result, interpreter.print_handler().get_output())
}
