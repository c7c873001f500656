#![allow(clippy::unwrap_used, clippy::expect_used)]

use pretty_assertions::assert_eq;

use super::{Arity, RangeValue, Value};

#[test]
fn test_display_forms() {
    assert_eq!(Value::Int(-7).to_string(), "-7");
    assert_eq!(Value::Float(1.0).to_string(), "1.0");
    assert_eq!(Value::Float(2.5).to_string(), "2.5");
    assert_eq!(Value::Float(f64::INFINITY).to_string(), "inf");
    assert_eq!(Value::Float(f64::NAN).to_string(), "NaN");
    assert_eq!(Value::Bool(true).to_string(), "true");
    assert_eq!(Value::string("raw text").to_string(), "raw text");
    assert_eq!(Value::Range(RangeValue::exclusive(1, 4)).to_string(), "1..4");
    assert_eq!(Value::Range(RangeValue::inclusive(1, 4)).to_string(), "1..=4");
    assert_eq!(Value::Null.to_string(), "null");
    assert_eq!(Value::Unit.to_string(), "()");
}

#[test]
fn test_repr_quotes_strings() {
    assert_eq!(Value::string("a\"b").repr(), r#""a\"b""#);
    assert_eq!(Value::Int(3).repr(), "3");
}

#[test]
fn test_equality_across_variants() {
    assert_eq!(Value::Int(1), Value::Float(1.0));
    assert_ne!(Value::Int(1), Value::Bool(true));
    assert_ne!(Value::Null, Value::Unit);
    assert_eq!(Value::Null, Value::Null);
    assert_ne!(Value::Float(f64::NAN), Value::Float(f64::NAN));
    assert_eq!(
        Value::Range(RangeValue::exclusive(0, 3)),
        Value::Range(RangeValue::exclusive(0, 3))
    );
    assert_ne!(
        Value::Range(RangeValue::exclusive(0, 3)),
        Value::Range(RangeValue::inclusive(0, 3))
    );
}

#[test]
fn test_range_iteration() {
    let half_open: Vec<i64> = RangeValue::exclusive(1, 4).iter().collect();
    assert_eq!(half_open, vec![1, 2, 3]);

    let closed: Vec<i64> = RangeValue::inclusive(1, 4).iter().collect();
    assert_eq!(closed, vec![1, 2, 3, 4]);

    assert_eq!(RangeValue::exclusive(3, 3).iter().count(), 0);
    assert_eq!(RangeValue::inclusive(3, 3).iter().count(), 1);
    assert_eq!(RangeValue::exclusive(5, 1).iter().count(), 0);
}

#[test]
fn test_range_is_restartable() {
    let range = RangeValue::exclusive(0, 3);
    assert_eq!(range.iter().sum::<i64>(), 3);
    assert_eq!(range.iter().sum::<i64>(), 3);
}

#[test]
fn test_range_at_integer_limits() {
    let top: Vec<i64> = RangeValue::inclusive(i64::MAX - 1, i64::MAX).iter().collect();
    assert_eq!(top, vec![i64::MAX - 1, i64::MAX]);
    assert_eq!(RangeValue::inclusive(i64::MIN, i64::MAX).len(), u64::MAX);
}

#[test]
fn test_arity() {
    assert!(Arity::Exact(2).accepts(2));
    assert!(!Arity::Exact(2).accepts(1));
    assert!(Arity::Between(1, 2).accepts(2));
    assert!(!Arity::Between(1, 2).accepts(3));
    assert!(Arity::AtLeast(1).accepts(5));
    assert!(!Arity::AtLeast(1).accepts(0));
    assert_eq!(Arity::Exact(1).to_string(), "1 argument");
    assert_eq!(Arity::AtLeast(2).to_string(), "at least 2 arguments");

    let err = Arity::Exact(1).check("sqrt", 2).unwrap_err();
    assert_eq!(err.message, "`sqrt` takes 1 argument, got 2");
}

mod proptest_ranges {
    use proptest::prelude::*;

    use super::RangeValue;

    proptest! {
        #[test]
        fn range_length_matches_formula(a in -1000i64..1000, b in -1000i64..1000) {
            let half_open = RangeValue::exclusive(a, b);
            let closed = RangeValue::inclusive(a, b);
            let expected_half = u64::try_from((b - a).max(0)).unwrap();
            let expected_closed = u64::try_from((b - a + 1).max(0)).unwrap();

            prop_assert_eq!(half_open.len(), expected_half);
            prop_assert_eq!(closed.len(), expected_closed);
            prop_assert_eq!(half_open.iter().count() as u64, expected_half);
            prop_assert_eq!(closed.iter().count() as u64, expected_closed);
        }
    }
}
