//! Error reporting through the driver.

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use ruspy_diagnostic::ErrorCode;
use ruspyc::{eval, ErrorCategory, EvalErrorKind, RuspyError};

use crate::common::eval_err;

#[test]
fn test_runtime_categories() {
    let cases = [
        ("undefined_thing", ErrorCategory::NameError),
        ("1 + \"a\"", ErrorCategory::TypeError),
        ("fn f(a, b) { a } f(1)", ErrorCategory::ArityError),
        ("10 / (5 - 5)", ErrorCategory::DivisionError),
        ("log(-1)", ErrorCategory::RuntimeError),
        ("fn f() { f() } f()", ErrorCategory::RuntimeError),
    ];
    for (source, category) in cases {
        assert_eq!(eval_err(source).category(), category, "{source}");
    }
}

#[test]
fn test_syntax_errors() {
    let err = eval_err("1 +");
    let RuspyError::Parse(errors) = &err else {
        panic!("expected a parse error, got {err:?}");
    };
    assert!(!errors.is_empty());
    assert_eq!(errors[0].code, ErrorCode::E1002);
    assert_eq!(err.category(), ErrorCategory::SyntaxError);
    assert!(err.as_eval().is_none());
}

#[test]
fn test_lexical_errors_keep_their_code() {
    let RuspyError::Parse(errors) = eval_err("x = @") else {
        panic!("expected a parse error");
    };
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].code, ErrorCode::E0001);
    assert_eq!(errors[0].message, "unexpected character `@`");
}

#[test]
fn test_display_names_category() {
    assert_eq!(
        eval_err("missing + 1").to_string(),
        "NameError: undefined variable `missing`"
    );
    assert_eq!(
        eval_err("7 % 0").to_string(),
        "DivisionError: modulo by zero"
    );
}

#[test]
fn test_rendered_diagnostic() {
    let source = "a = 1;\nb = a + nope;";
    let err = eval(source).unwrap_err();
    let rendered = err.render(source, Some("prog.rpy"));
    let expected_head = "error[E6001]: NameError: undefined variable `nope`\n";
    assert!(rendered.starts_with(expected_head), "{rendered}");
    assert!(rendered.contains("--> prog.rpy:2:9"), "{rendered}");
    assert!(rendered.contains("b = a + nope;"), "{rendered}");
    assert!(rendered.contains("^^^^ NameError"), "{rendered}");
    assert!(rendered.ends_with("error: aborting due to previous error\n"), "{rendered}");
}

#[test]
fn test_error_kinds_are_structured() {
    let err = eval_err("if 3 { 1 }");
    assert_eq!(
        err.as_eval().map(|e| &e.kind),
        Some(&EvalErrorKind::NonBooleanCondition { got: "int" })
    );
}

proptest! {
    #[test]
    fn undefined_names_are_name_errors(suffix in "[a-z0-9_]{1,10}") {
        // `zz_` cannot collide with a keyword or builtin.
        let name = format!("zz_{suffix}");
        let err = eval(&name).unwrap_err();
        prop_assert_eq!(err.category(), ErrorCategory::NameError);
    }

    #[test]
    fn floor_division_identity(a in any::<i32>(), b in any::<i32>()) {
        prop_assume!(b != 0);
        let source = format!("a = {a}; b = {b}; (a / b) * b + a % b == a");
        prop_assert_eq!(eval(&source).unwrap(), ruspyc::Value::Bool(true));
    }
}
