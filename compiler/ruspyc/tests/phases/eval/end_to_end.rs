//! The driver's three entry points on small programs.

use pretty_assertions::assert_eq;
use ruspyc::{eval, module, run, Value};

use crate::common::{eval_ok, range_items, run_captured};

#[test]
fn test_eval_arithmetic() {
    assert_eq!(eval("1 + 2 * 3").unwrap(), Value::Int(7));
    assert_eq!(eval("(1 + 2) * 3").unwrap(), Value::Int(9));
    assert_eq!(eval("42 >> 1 + 1").unwrap(), Value::Int(10));
}

#[test]
fn test_eval_ranges() {
    assert_eq!(range_items(&eval("1..4").unwrap()), vec![1, 2, 3]);
    assert_eq!(range_items(&eval("1..=4").unwrap()), vec![1, 2, 3, 4]);
    assert_eq!(range_items(&eval("3..3").unwrap()), Vec::<i64>::new());
}

#[test]
fn test_reference_parity() {
    let cases = [
        ("42 >> 1 + 1 & 6", Value::Int(2)),
        ("42 >> 1 + 1 | 6", Value::Int(14)),
        ("42 >> 1 + 1 ^ 6", Value::Int(12)),
        ("!42", Value::Int(-43)),
        ("!true", Value::Bool(false)),
        ("42.5 as int", Value::Int(42)),
        ("x = 42; x", Value::Int(42)),
        ("0b001", Value::Int(1)),
        ("1_000", Value::Int(1000)),
        ("1e3", Value::Float(1000.0)),
        ("2f32", Value::Float(2.0)),
    ];
    for (source, expected) in cases {
        assert_eq!(eval_ok(source), expected, "{source}");
    }
}

#[test]
fn test_module_call() {
    let mut incr = module("fn incr(n) { n + 1 }").unwrap();
    assert_eq!(incr.call("incr", &[Value::Int(1)]).unwrap(), Value::Int(2));
    assert!(matches!(incr.get("incr"), Some(Value::Function(_))));
    assert!(incr.get("main").is_none());
}

#[test]
fn test_run_hello_world() {
    let (result, output) = run_captured("fn main() { println(\"hello world!\") }");
    assert_eq!(result.unwrap(), Value::Unit);
    assert_eq!(output, "hello world!\n");
}

#[test]
fn test_run_returns_main_value() {
    assert_eq!(
        run("fn helper(x) { x * 2 } fn main() { helper(21) }").unwrap(),
        Value::Int(42)
    );
}

#[test]
fn test_script_program() {
    let source = r#"
        // Sum of the squares of the odd numbers below 10.
        fn square(x) { x * x }
        total = 0;
        for i in 0..10 {
            if i % 2 == 0 { continue }
            total += square(i)
        }
        total
    "#;
    assert_eq!(eval_ok(source), Value::Int(165));
}

#[test]
fn test_math_prelude() {
    assert_eq!(eval_ok("sqrt(2) * sqrt(2) > 1.99"), Value::Bool(true));
    assert_eq!(eval_ok("round(2.5)"), Value::Int(2));
    assert_eq!(eval_ok("gcd(12, 18)"), Value::Int(6));
    assert_eq!(eval_ok("factorial(5)"), Value::Int(120));
    assert_eq!(eval_ok("int(\"7\") + float(\"0.5\")"), Value::Float(7.5));
    assert_eq!(eval_ok("str(1..3)"), Value::string("1..3"));
}
