//! Loops, `break`, `continue` and output ordering.

use pretty_assertions::assert_eq;
use ruspyc::Value;

use crate::common::{eval_captured, eval_ok};

#[test]
fn test_while_with_counter() {
    let source = "
        n = 27; steps = 0;
        while n != 1 {
            if n % 2 == 0 { n = n / 2 } else { n = 3 * n + 1 }
            steps += 1
        }
        steps
    ";
    assert_eq!(eval_ok(source), Value::Int(111));
}

#[test]
fn test_nested_loops_with_break() {
    let source = "
        found = 0;
        for a in 1..20 {
            for b in a..20 {
                if a * b == 91 { found = a * 100 + b; break }
            }
            if found != 0 { break }
        }
        found
    ";
    assert_eq!(eval_ok(source), Value::Int(713));
}

#[test]
fn test_print_order() {
    let (result, output) =
        eval_captured("for i in 0..3 { print(i, i * i) } println(\"done\")");
    assert_eq!(result.unwrap(), Value::Unit);
    assert_eq!(output, "0 0\n1 1\n2 4\ndone\n");
}

#[test]
fn test_short_circuit_probe() {
    let (result, output) =
        eval_captured("fn probe() { println(\"called\"); true } false && probe()");
    assert_eq!(result.unwrap(), Value::Bool(false));
    assert_eq!(output, "");

    let (result, output) = eval_captured("fn probe() { println(\"called\"); true } true || probe()");
    assert_eq!(result.unwrap(), Value::Bool(true));
    assert_eq!(output, "");

    let (result, output) = eval_captured("fn probe() { println(\"called\"); true } true && probe()");
    assert_eq!(result.unwrap(), Value::Bool(true));
    assert_eq!(output, "called\n");
}

#[test]
fn test_string_loop() {
    let source = "
        vowels = 0;
        for c in \"programming language\" {
            if c == \"a\" || c == \"e\" || c == \"i\" || c == \"o\" || c == \"u\" { vowels += 1 }
        }
        vowels
    ";
    assert_eq!(eval_ok(source), Value::Int(7));
}
