mod support;

use support::Scripted;
use unbiased::primitives::MAX_SCALE;
use unbiased::{Decimal, Engine, ParseDecimalError, RandomError};

fn d(text: &str) -> Decimal {
    text.parse().unwrap()
}

#[test]
fn test_unit_draws_stay_in_unit_interval() {
    let engine = Engine::shared();

    for _ in 0..20_000 {
        let value = engine.next_decimal().unwrap();

        assert!(value >= Decimal::ZERO && value < Decimal::ONE);
        assert!(value.scale() <= MAX_SCALE);
    }
}

#[test]
fn test_unit_draw_rounds_to_28_places() {
    // Digits 1, 2, ..., 9, 0, 1, ... with the 29th digit a 9 rounding up.
    let mut script = Scripted::new();
    let digits = [1u32, 2, 3, 4, 5, 6, 7, 8, 9, 0];
    for i in 0..28 {
        script = script.u32(digits[i % 10]);
    }
    let engine = Engine::with_source(script.u32(9));

    assert_eq!(engine.next_decimal().unwrap(), d("0.1234567890123456789012345679"));
}

#[test]
fn test_unit_draw_that_rounds_to_one_is_redrawn() {
    let mut script = Scripted::new();
    for _ in 0..29 {
        script = script.u32(9);
    }
    script = script.u32(5);
    for _ in 0..28 {
        script = script.u32(0);
    }
    let engine = Engine::with_source(script);

    assert_eq!(engine.next_decimal().unwrap(), d("0.5"));
}

#[test]
fn test_trailing_zero_draws_are_normalized() {
    let mut script = Scripted::new().u32(2);
    for _ in 0..28 {
        script = script.u32(0);
    }
    let engine = Engine::with_source(script);

    let value = engine.next_decimal().unwrap();
    assert_eq!(value, d("0.2"));
    assert_eq!(value.scale(), 1);
    assert_eq!(value.to_string(), "0.2");
}

#[test]
fn test_ranged_draws_stay_in_bounds() {
    let engine = Engine::shared();
    let (min, max) = (d("-1.5"), d("2.5"));

    for _ in 0..20_000 {
        let value = engine.next_between(min, max).unwrap();
        assert!(value >= min && value < max, "{value} escaped [{min}, {max})");

        let value = engine.next_below(d("0.001")).unwrap();
        assert!(value >= Decimal::ZERO && value < d("0.001"));
    }
}

#[test]
fn test_smallest_span_never_reaches_max() {
    let engine = Engine::shared();
    let max = d("0.0000000000000000000000000001");

    for _ in 0..2_000 {
        assert_eq!(engine.next_below(max).unwrap(), Decimal::ZERO);
    }
}

#[test]
fn test_full_span_draws_are_representable() {
    let engine = Engine::shared();

    for _ in 0..2_000 {
        let value = engine.next_between(Decimal::MIN, Decimal::MAX).unwrap();
        assert!(value >= Decimal::MIN && value < Decimal::MAX);
    }
}

#[test]
fn test_degenerate_and_invalid_bounds() {
    let engine = Engine::with_source(Scripted::new());

    assert_eq!(engine.next_between(d("3.14"), d("3.140")).unwrap(), d("3.14"));
    assert_eq!(engine.next_below(Decimal::ZERO).unwrap(), Decimal::ZERO);

    let err = engine.next_between(d("1"), d("0.5")).unwrap_err();
    assert!(matches!(err, RandomError::OutOfRange { name: "min_value", ref value, .. } if value == "1"));

    let err = engine.next_below(d("-0.25")).unwrap_err();
    assert!(matches!(err, RandomError::OutOfRange { name: "max_value", ref value, .. } if value == "-0.25"));
}

#[test]
fn test_parse_errors() {
    assert_eq!("".parse::<Decimal>(), Err(ParseDecimalError::Empty));
    assert_eq!("1.2.3".parse::<Decimal>(), Err(ParseDecimalError::InvalidDigit));
    assert_eq!("79228162514264337593543950336".parse::<Decimal>(), Err(ParseDecimalError::Overflow));
}

#[test]
fn test_decimal_serializes_as_string() {
    let value = d("-12.750");

    let json = serde_json::to_string(&value).unwrap();
    assert_eq!(json, "\"-12.75\"");

    let back: Decimal = serde_json::from_str(&json).unwrap();
    assert_eq!(back, value);
}
