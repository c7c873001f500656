//! Shared helpers for phase tests.

use ruspyc::{RuspyError, Session, Value};

/// Evaluate a script in a fresh session with captured output.
pub fn eval_captured(source: &str) -> (Result<Value, RuspyError>, String) {
    let mut session = Session::buffered();
    let result = session.eval(source);
    (result, session.output())
}

/// Run a module's `main` in a fresh session with captured output.
pub fn run_captured(source: &str) -> (Result<Value, RuspyError>, String) {
    let mut session = Session::buffered();
    let result = session.run(source);
    (result, session.output())
}

pub fn eval_ok(source: &str) -> Value {
    match eval_captured(source).0 {
        Ok(value) => value,
        Err(e) => panic!("{source:?} failed: {e}"),
    }
}

pub fn eval_err(source: &str) -> RuspyError {
    match eval_captured(source).0 {
        Ok(value) => panic!("{source:?} evaluated to {value:?}, expected an error"),
        Err(e) => e,
    }
}

/// The ints a range value iterates over.
pub fn range_items(value: &Value) -> Vec<i64> {
    match value {
        Value::Range(r) => r.iter().collect(),
        other => panic!("expected a range, got {other:?}"),
    }
}
