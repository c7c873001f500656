#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::sync::Arc;

use pretty_assertions::assert_eq;
use ruspy_ir::{ExprArena, StringInterner};

use super::{InterpreterBuilder, InterpreterConfig};
use crate::tests::{interpreter, run_in};
use crate::{buffer_handler, ErrorCategory, EvalErrorKind, Value};

#[test]
fn test_builder_defaults() {
    let interpreter = InterpreterBuilder::new(
        Arc::new(StringInterner::new()),
        Arc::new(ExprArena::new()),
    )
    .build();
    assert_eq!(interpreter.config(), &InterpreterConfig::default());
    assert_eq!(interpreter.config().max_call_depth, 1024);
    assert_eq!(interpreter.call_depth, 0);
}

#[test]
fn test_builder_config() {
    let interpreter = InterpreterBuilder::new(
        Arc::new(StringInterner::new()),
        Arc::new(ExprArena::new()),
    )
    .config(InterpreterConfig { max_call_depth: 7 })
    .build();
    assert_eq!(interpreter.config().max_call_depth, 7);
}

#[test]
fn test_prelude_is_registered() {
    let interpreter = interpreter();
    assert_eq!(interpreter.global("answer"), Some(Value::Int(42)));
    assert!(matches!(interpreter.global("sqrt"), Some(Value::Builtin(_))));
    assert_eq!(interpreter.global("nothing_here"), None);
}

#[test]
fn test_print_handler_captures_output() {
    let handler = buffer_handler();
    let mut interpreter = InterpreterBuilder::new(
        Arc::new(StringInterner::new()),
        Arc::new(ExprArena::new()),
    )
    .print_handler(Arc::clone(&handler))
    .build();
    run_in(&mut interpreter, "println(\"hi\", 1 + 1)").unwrap();
    assert_eq!(handler.get_output(), "hi 2\n");
    handler.clear();
    assert_eq!(interpreter.print_handler().get_output(), "");
}

#[test]
fn test_call_value() {
    let mut interpreter = interpreter();
    run_in(&mut interpreter, "fn add(a, b) { a + b }").unwrap();

    let add = interpreter.global("add").unwrap();
    let result = interpreter
        .call_value(&add, &[Value::Int(2), Value::Int(40)])
        .unwrap();
    assert_eq!(result, Value::Int(42));

    let abs = interpreter.global("abs").unwrap();
    assert_eq!(
        interpreter.call_value(&abs, &[Value::Int(-3)]).unwrap(),
        Value::Int(3)
    );

    let err = interpreter.call_value(&add, &[Value::Int(1)]).unwrap_err();
    assert_eq!(err.category(), ErrorCategory::ArityError);

    let err = interpreter.call_value(&Value::Int(5), &[]).unwrap_err();
    assert_eq!(
        err.kind,
        EvalErrorKind::NotCallable { type_name: "int" }
    );
}

#[test]
fn test_functions_keep_their_arena() {
    let mut interpreter = interpreter();
    run_in(&mut interpreter, "fn triple(n) { n * 3 }").unwrap();
    run_in(&mut interpreter, "add_one = |n| n + 1").unwrap();
    // Each line parses into a new arena; both functions still run.
    assert_eq!(
        run_in(&mut interpreter, "x = 1; triple(add_one(x))").unwrap(),
        Value::Int(6)
    );
    assert_eq!(run_in(&mut interpreter, "add_one(triple(2))").unwrap(), Value::Int(7));
}

#[test]
fn test_arena_restored_after_call_error() {
    let mut interpreter = interpreter();
    run_in(&mut interpreter, "fn boom() { 1 / 0 }").unwrap();
    let err = run_in(&mut interpreter, "y = 5; boom()").unwrap_err();
    assert_eq!(err.category(), ErrorCategory::DivisionError);
    assert_eq!(interpreter.call_depth, 0);
    assert_eq!(run_in(&mut interpreter, "y + 1").unwrap(), Value::Int(6));
}

#[test]
fn test_scopes_are_reclaimed() {
    let mut interpreter = interpreter();
    let baseline = interpreter.env.scope_count();
    run_in(
        &mut interpreter,
        "total = 0; for i in 0..100 { let sq = i * i; { total += sq } }",
    )
    .unwrap();
    run_in(&mut interpreter, "fn id(x) { x } for i in 0..50 { id(i) }").unwrap();
    assert_eq!(interpreter.env.scope_count(), baseline);
    assert_eq!(interpreter.global("total"), Some(Value::Int(328_350)));
}

#[test]
fn test_dead_closure_scopes_are_reclaimed() {
    let mut interpreter = interpreter();
    let baseline = interpreter.env.scope_count();
    run_in(
        &mut interpreter,
        "total = 0; fn helper(n) { fn inner() { n } inner() } \
         for i in 0..10000 { total += helper(i) }",
    )
    .unwrap();
    assert_eq!(interpreter.env.scope_count(), baseline);
    assert_eq!(interpreter.global("total"), Some(Value::Int(49_995_000)));

    run_in(
        &mut interpreter,
        "fs = 0; for i in 0..5000 { let f = || i; fs += f() }",
    )
    .unwrap();
    assert_eq!(interpreter.env.scope_count(), baseline);
    assert_eq!(interpreter.global("fs"), Some(Value::Int(12_497_500)));
}

#[test]
fn test_closure_held_by_host_survives_collection() {
    let mut interpreter = interpreter();
    let counter = run_in(&mut interpreter, "fn make(n) { || n } make(5)").unwrap();
    run_in(&mut interpreter, "for i in 0..1000 { fn tmp() { i } tmp() }").unwrap();
    assert!(interpreter.env.scope_count() > 1);
    assert_eq!(interpreter.call_value(&counter, &[]).unwrap(), Value::Int(5));

    drop(counter);
    run_in(&mut interpreter, "0").unwrap();
    assert_eq!(interpreter.env.scope_count(), 1);
}

#[test]
fn test_captured_scopes_survive() {
    let mut interpreter = interpreter();
    run_in(
        &mut interpreter,
        "fn make(n) { || n } f = make(1); g = make(2)",
    )
    .unwrap();
    assert_eq!(run_in(&mut interpreter, "f() + g()").unwrap(), Value::Int(3));
}

#[test]
fn test_error_leaves_global_scope_current() {
    let mut interpreter = interpreter();
    assert!(run_in(&mut interpreter, "for i in 0..3 { let z = i; z / 0 }").is_err());
    assert_eq!(interpreter.env.current(), crate::ScopeId::GLOBAL);
    run_in(&mut interpreter, "w = 9").unwrap();
    assert_eq!(interpreter.global("w"), Some(Value::Int(9)));
}
