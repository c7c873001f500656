//! Module mode: files of `fn` declarations.

use pretty_assertions::assert_eq;
use ruspy_diagnostic::ErrorCode;
use ruspyc::{module, run, ErrorCategory, EvalErrorKind, RuspyError, Value};

use crate::common::run_captured;

#[test]
fn test_functions_in_declaration_order() {
    let loaded = module("fn b() { 2 } fn a() { 1 } fn c() { 3 }").unwrap();
    assert_eq!(loaded.names().collect::<Vec<_>>(), vec!["b", "a", "c"]);
    assert_eq!(loaded.functions().len(), 3);
}

#[test]
fn test_later_declaration_wins() {
    let mut loaded = module("fn f() { 1 } fn g() { f() } fn f() { 2 }").unwrap();
    assert_eq!(loaded.names().collect::<Vec<_>>(), vec!["f", "g"]);
    assert_eq!(loaded.call("f", &[]).unwrap(), Value::Int(2));
    assert_eq!(loaded.call("g", &[]).unwrap(), Value::Int(2));
}

#[test]
fn test_mutual_recursion() {
    let source = "
        fn is_even(n) { if n == 0 { true } else { is_odd(n - 1) } }
        fn is_odd(n) { if n == 0 { false } else { is_even(n - 1) } }
    ";
    let mut loaded = module(source).unwrap();
    assert_eq!(loaded.call("is_even", &[Value::Int(10)]).unwrap(), Value::Bool(true));
    assert_eq!(loaded.call("is_odd", &[Value::Int(7)]).unwrap(), Value::Bool(true));
}

#[test]
fn test_loading_runs_nothing() {
    let mut session = ruspyc::Session::buffered();
    session
        .load("fn main() { println(\"should not print\") }")
        .unwrap();
    assert_eq!(session.output(), "");
}

#[test]
fn test_unknown_function() {
    let mut loaded = module("fn f() { 1 }").unwrap();
    let err = loaded.call("g", &[]).unwrap_err();
    assert_eq!(err.category(), ErrorCategory::NameError);
}

#[test]
fn test_call_arity() {
    let mut loaded = module("fn add(a, b) { a + b }").unwrap();
    assert_eq!(
        loaded.call("add", &[Value::Int(2), Value::Int(3)]).unwrap(),
        Value::Int(5)
    );
    let err = loaded.call("add", &[Value::Int(2)]).unwrap_err();
    assert_eq!(err.category(), ErrorCategory::ArityError);
}

#[test]
fn test_missing_main() {
    let err = run("fn helper() { 1 }").unwrap_err();
    assert_eq!(err.as_eval().map(|e| &e.kind), Some(&EvalErrorKind::MissingMain));
    assert_eq!(err.category(), ErrorCategory::ModuleError);
}

#[test]
fn test_loose_statements_rejected() {
    let err = module("x = 1").err().unwrap();
    let RuspyError::Parse(errors) = err else {
        panic!("expected a parse error");
    };
    assert_eq!(errors[0].code, ErrorCode::E1004);
}

#[test]
fn test_main_with_program() {
    let source = r#"
        fn fizzbuzz(n) {
            if n % 15 == 0 { "FizzBuzz" }
            else if n % 3 == 0 { "Fizz" }
            else if n % 5 == 0 { "Buzz" }
            else { str(n) }
        }
        fn main() {
            for i in 1..=15 { println(fizzbuzz(i)) }
        }
    "#;
    let (result, output) = run_captured(source);
    assert_eq!(result.unwrap(), Value::Unit);
    let lines: Vec<_> = output.lines().collect();
    assert_eq!(lines.len(), 15);
    assert_eq!(lines[2], "Fizz");
    assert_eq!(lines[4], "Buzz");
    assert_eq!(lines[14], "FizzBuzz");
    assert_eq!(lines[6], "7");
}
