use pretty_assertions::assert_eq;

use super::{eval_err, eval_ok, eval_output};
use crate::{ErrorCategory, Value};

#[test]
fn test_if_chains() {
    assert_eq!(eval_ok("if 1 < 2 { \"yes\" } else { \"no\" }"), Value::string("yes"));
    assert_eq!(eval_ok("if false { 1 }"), Value::Unit);
    assert_eq!(
        eval_ok("x = 0; if x > 0 { 1 } else if x < 0 { -1 } else { 0 }"),
        Value::Int(0)
    );
    assert_eq!(eval_ok("y = if true { 10 } else { 20 }; y + 1"), Value::Int(11));
}

#[test]
fn test_while_loop() {
    assert_eq!(
        eval_ok("i = 0; total = 0; while i < 5 { total += i; i += 1 } total"),
        Value::Int(10)
    );
    assert_eq!(eval_ok("while false { 1 }"), Value::Unit);
}

#[test]
fn test_while_break() {
    assert_eq!(
        eval_ok("i = 0; while true { i += 1; if i == 3 { break } } i"),
        Value::Int(3)
    );
}

#[test]
fn test_for_over_ranges() {
    assert_eq!(eval_ok("total = 0; for i in 1..=4 { total += i } total"), Value::Int(10));
    assert_eq!(eval_ok("total = 0; for i in 4..1 { total += i } total"), Value::Int(0));
    assert_eq!(eval_ok("for i in 0..3 { i }"), Value::Unit);
}

#[test]
fn test_for_over_strings() {
    assert_eq!(eval_ok("n = 0; for c in \"héllo\" { n += 1 } n"), Value::Int(5));
    assert_eq!(eval_ok("s = \"\"; for c in \"abc\" { s = c + s } s"), Value::string("cba"));
}

#[test]
fn test_break_and_continue() {
    let source = "
        total = 0;
        for i in 0..10 {
            if i == 5 { break }
            if i % 2 == 0 { continue }
            total += i
        }
        total
    ";
    assert_eq!(eval_ok(source), Value::Int(4));
}

#[test]
fn test_break_leaves_only_inner_loop() {
    let source = "
        count = 0;
        for i in 0..3 {
            for j in 0..100 {
                if j == 2 { break }
                count += 1
            }
        }
        count
    ";
    assert_eq!(eval_ok(source), Value::Int(6));
}

#[test]
fn test_loop_variable_is_scoped() {
    let err = eval_err("for i in 0..3 { } i");
    assert_eq!(err.category(), ErrorCategory::NameError);
}

#[test]
fn test_return_from_loop_in_function() {
    let source = "
        fn first_square_over(limit) {
            for i in 0..100 {
                if i * i > limit { return i }
            }
            -1
        }
        first_square_over(20)
    ";
    assert_eq!(eval_ok(source), Value::Int(5));
}

#[test]
fn test_and_short_circuits() {
    let (result, output) = eval_output("false && println(\"probe\")");
    assert_eq!(result.unwrap(), Value::Bool(false));
    assert_eq!(output, "");
}

#[test]
fn test_or_short_circuits() {
    let (result, output) = eval_output("true || println(\"probe\")");
    assert_eq!(result.unwrap(), Value::Bool(true));
    assert_eq!(output, "");
}

#[test]
fn test_right_operand_runs_when_needed() {
    let (result, output) = eval_output("true && println(\"probe\")");
    assert_eq!(result.unwrap_err().category(), ErrorCategory::TypeError);
    assert_eq!(output, "probe\n");

    assert_eq!(eval_ok("false || 1 < 2"), Value::Bool(true));
}

#[test]
fn test_print_output() {
    let (result, output) = eval_output("for i in 1..=3 { println(\"line\", i) } print(answer)");
    assert_eq!(result.unwrap(), Value::Unit);
    assert_eq!(output, "line 1\nline 2\nline 3\n42\n");
}
