use pretty_assertions::assert_eq;

use super::{eval_err, eval_ok};
use crate::{ErrorCategory, Value};

#[test]
fn test_lambda_call() {
    assert_eq!(eval_ok("add = |a, b| a + b; add(2, 3)"), Value::Int(5));
    assert_eq!(eval_ok("(|x| x * x)(7)"), Value::Int(49));
    assert_eq!(eval_ok("f = || 42; f()"), Value::Int(42));
}

#[test]
fn test_nested_function_declaration() {
    assert_eq!(eval_ok("fn add(a, b) { a + b } add(1, 2)"), Value::Int(3));
    assert_eq!(eval_ok("fn noop() { } noop()"), Value::Null);
    assert_eq!(eval_ok("fn unit() { 1; } unit()"), Value::Unit);
    assert_eq!(eval_ok("fn f() { 1 } type(f)"), Value::string("function"));
}

#[test]
fn test_recursion() {
    let source = "
        fn fib(n) { if n < 2 { n } else { fib(n - 1) + fib(n - 2) } }
        fib(15)
    ";
    assert_eq!(eval_ok(source), Value::Int(610));

    let source = "
        fn fact(n) { if n == 0 { return 1 } n * fact(n - 1) }
        fact(20)
    ";
    assert_eq!(eval_ok(source), Value::Int(2_432_902_008_176_640_000));
}

#[test]
fn test_closure_sees_updates_before_call() {
    let source = "
        fn make() {
            let count = 1;
            let get = || count;
            count = 5;
            get
        }
        make()()
    ";
    assert_eq!(eval_ok(source), Value::Int(5));
}

#[test]
fn test_closure_does_not_see_caller_scope() {
    let source = "
        fn make() { || secret }
        f = make();
        fn call_with_secret(g) { let secret = 1; g() }
        call_with_secret(f)
    ";
    assert_eq!(eval_err(source).category(), ErrorCategory::NameError);
}

#[test]
fn test_counter_shares_captured_scope() {
    let source = "
        fn counter() {
            let n = 0;
            || { n += 1; n }
        }
        c = counter();
        c(); c();
        c()
    ";
    assert_eq!(eval_ok(source), Value::Int(3));
}

#[test]
fn test_independent_counters() {
    let source = "
        fn counter() { let n = 0; || { n += 1; n } }
        a = counter();
        b = counter();
        a(); a();
        b() * 10 + a()
    ";
    assert_eq!(eval_ok(source), Value::Int(13));
}

#[test]
fn test_loop_closures_capture_each_iteration() {
    let source = "
        first = null;
        last = null;
        for i in 0..3 {
            f = || i;
            if i == 0 { first = f }
            last = f
        }
        first() * 10 + last()
    ";
    assert_eq!(eval_ok(source), Value::Int(2));
}

#[test]
fn test_higher_order_functions() {
    let source = "
        fn twice(f, x) { f(f(x)) }
        fn adder(n) { |x| x + n }
        twice(adder(5), 1)
    ";
    assert_eq!(eval_ok(source), Value::Int(11));
}

#[test]
fn test_builtins_are_values() {
    assert_eq!(eval_ok("f = sqrt; f(9)"), Value::Float(3.0));
    assert_eq!(eval_ok("fn apply(f, x) { f(x) } apply(abs, -4)"), Value::Int(4));
}

#[test]
fn test_function_display() {
    assert_eq!(eval_ok("fn f() { 1 } str(f)"), Value::string("<fn f>"));
    assert_eq!(eval_ok("str(|x| x)"), Value::string("<closure>"));
    assert_eq!(eval_ok("str(sqrt)"), Value::string("<builtin sqrt>"));
}
