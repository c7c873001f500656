//! Closures and first-class functions.

use pretty_assertions::assert_eq;
use ruspyc::{ErrorCategory, Value};

use crate::common::{eval_err, eval_ok};

#[test]
fn test_updates_before_return_are_visible() {
    let source = "
        fn make() {
            let x = 1;
            let f = || x * 10;
            x = 4;
            f
        }
        make()()
    ";
    assert_eq!(eval_ok(source), Value::Int(40));
}

#[test]
fn test_caller_scope_is_not_visible() {
    let source = "
        fn reader() { hidden }
        fn caller() { let hidden = 1; reader() }
        caller()
    ";
    assert_eq!(eval_err(source).category(), ErrorCategory::NameError);
}

#[test]
fn test_make_adder() {
    let source = "
        fn make_adder(n) { |x| x + n }
        add2 = make_adder(2);
        add10 = make_adder(10);
        add2(1) * 100 + add10(1)
    ";
    assert_eq!(eval_ok(source), Value::Int(311));
}

#[test]
fn test_accumulator() {
    let source = "
        fn accumulator() {
            let total = 0;
            |x| { total += x; total }
        }
        acc = accumulator();
        acc(5); acc(10);
        acc(0)
    ";
    assert_eq!(eval_ok(source), Value::Int(15));
}

#[test]
fn test_compose() {
    let source = "
        fn compose(f, g) { |x| f(g(x)) }
        inc_then_double = compose(|x| x * 2, |x| x + 1);
        inc_then_double(4)
    ";
    assert_eq!(eval_ok(source), Value::Int(10));
}

#[test]
fn test_recursive_closure_through_global() {
    let source = "
        fib = |n| if n < 2 { n } else { fib(n - 1) + fib(n - 2) };
        fib(10)
    ";
    assert_eq!(eval_ok(source), Value::Int(55));
}
