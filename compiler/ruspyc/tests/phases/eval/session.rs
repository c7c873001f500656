//! Sessions keep globals across sources.

use std::sync::Arc;

use pretty_assertions::assert_eq;
use ruspyc::{buffer_handler, InterpreterConfig, Session, Value};

#[test]
fn test_globals_persist() {
    let mut session = Session::buffered();
    session.eval("x = 40").unwrap();
    session.eval("fn add_x(n) { n + x }").unwrap();
    assert_eq!(session.eval("add_x(2)").unwrap(), Value::Int(42));
    assert_eq!(session.global("x"), Some(Value::Int(40)));
}

#[test]
fn test_functions_survive_later_parses() {
    let mut session = Session::buffered();
    session.eval("fn square(n) { n * n } sq = |n| square(n)").unwrap();
    for _ in 0..3 {
        session.eval("filler = 1 + 2 + 3 + 4 + 5").unwrap();
    }
    assert_eq!(session.eval("sq(9)").unwrap(), Value::Int(81));
}

#[test]
fn test_module_then_script() {
    let mut session = Session::buffered();
    let functions = session.load("fn double(n) { n * 2 }").unwrap();
    assert!(functions.contains("double"));
    assert_eq!(session.eval("double(21)").unwrap(), Value::Int(42));
}

#[test]
fn test_custom_print_handler() {
    let handler = buffer_handler();
    let mut session = Session::with_print_handler(Arc::clone(&handler));
    session.eval("println(\"a\", 1); print(2.5)").unwrap();
    assert_eq!(handler.get_output(), "a 1\n2.5\n");
    session.clear_output();
    assert_eq!(session.output(), "");
}

#[test]
fn test_configured_call_depth() {
    let config = InterpreterConfig { max_call_depth: 5 };
    let mut session = Session::with_options(buffer_handler(), config);
    session.eval("fn depth(n) { if n == 0 { 0 } else { 1 + depth(n - 1) } }").unwrap();
    assert_eq!(session.eval("depth(4)").unwrap(), Value::Int(4));
    assert!(session.eval("depth(5)").is_err());
    assert_eq!(session.interpreter().config().max_call_depth, 5);
}

#[test]
fn test_error_does_not_poison_session() {
    let mut session = Session::buffered();
    session.eval("total = 1").unwrap();
    assert!(session.eval("total += \"x\"").is_err());
    assert!(session.eval("total +").is_err());
    assert_eq!(session.eval("total").unwrap(), Value::Int(1));
}

#[test]
fn test_into_module_keeps_output() {
    let session = Session::buffered();
    let mut loaded = session
        .into_module("fn greet(name) { println(\"hi\", name) }")
        .unwrap();
    loaded.call("greet", &[Value::string("ana")]).unwrap();
    assert_eq!(loaded.session().output(), "hi ana\n");
}
