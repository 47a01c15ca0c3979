mod support;

use support::Scripted;
use unbiased::{Engine, RandomError};

const TRIALS: usize = 100_000;

macro_rules! assert_between {
    ($engine:expr, $t:ty, $min:expr, $max:expr) => {{
        let (min, max): ($t, $t) = ($min, $max);
        for _ in 0..TRIALS {
            let value = $engine.next_between(min, max).unwrap();
            assert!(
                value >= min && value < max,
                "{} draw {value} escaped [{min}, {max})",
                stringify!($t)
            );
        }
    }};
}

#[test]
fn test_ranged_draws_stay_in_bounds() {
    let engine = Engine::shared();

    assert_between!(engine, u8, 3, 224);
    assert_between!(engine, i8, -128, 127);
    assert_between!(engine, u16, 0, 3);
    assert_between!(engine, i16, -30_155, -10_000);
    assert_between!(engine, u32, 1, u32::MAX);
    assert_between!(engine, i32, -355_541, 2_444);
    assert_between!(engine, u64, u64::MAX - 10, u64::MAX);
    assert_between!(engine, i64, i64::MIN, i64::MAX);
}

#[test]
fn test_bounded_draws_stay_below_max() {
    let engine = Engine::shared();

    for _ in 0..TRIALS {
        assert!(engine.next_below(7u8).unwrap() < 7);
        assert!((0..300).contains(&engine.next_below(300i16).unwrap()));
        assert!((0..1_000_003).contains(&engine.next_below(1_000_003i32).unwrap()));
        assert!(engine.next_below(3_000_000_000u32).unwrap() < 3_000_000_000);
        assert!((0..i64::MAX).contains(&engine.next_below(i64::MAX).unwrap()));
    }
}

#[test]
fn test_unbounded_draws_stay_below_type_max() {
    let engine = Engine::shared();

    for _ in 0..TRIALS {
        assert!(engine.next::<u8>().unwrap() < u8::MAX);
        assert!((0..i8::MAX).contains(&engine.next::<i8>().unwrap()));
        assert!(engine.next::<u16>().unwrap() < u16::MAX);
        assert!((0..i16::MAX).contains(&engine.next::<i16>().unwrap()));
        assert!(engine.next::<u32>().unwrap() < u32::MAX);
        assert!(engine.next::<u64>().unwrap() < u64::MAX);
        assert!((0..i32::MAX).contains(&engine.next::<i32>().unwrap()));
        assert!((0..i64::MAX).contains(&engine.next::<i64>().unwrap()));
    }
}

#[test]
fn test_unbounded_wide_draws_skip_the_maximum() {
    let script = Scripted::new()
        .u32(u32::MAX)
        .u32(u32::MAX - 1)
        .u64(u64::MAX)
        .u64(u64::MAX - 1);
    let engine = Engine::with_source(script);

    assert_eq!(engine.next::<u32>().unwrap(), u32::MAX - 1);
    assert_eq!(engine.next::<u64>().unwrap(), u64::MAX - 1);
}

#[test]
fn test_equal_bounds_consume_no_entropy() {
    let engine = Engine::with_source(Scripted::new());

    assert_eq!(engine.next_between(42u8, 42).unwrap(), 42);
    assert_eq!(engine.next_between(-7i64, -7).unwrap(), -7);
    assert_eq!(engine.next_between(u32::MAX, u32::MAX).unwrap(), u32::MAX);
}

#[test]
fn test_zero_bound_yields_zero_without_entropy() {
    let engine = Engine::with_source(Scripted::new());

    assert_eq!(engine.next_below(0u64).unwrap(), 0);
    assert_eq!(engine.next_below(0i8).unwrap(), 0);
}

#[test]
fn test_reversed_bounds_name_min_value() {
    let engine = Engine::with_source(Scripted::new());

    let err = engine.next_between(10u16, 3).unwrap_err();
    assert_eq!(err.argument_name(), Some("min_value"));
    assert!(matches!(err, RandomError::OutOfRange { ref value, .. } if value == "10"));

    let err = engine.next_between(-1i32, -2).unwrap_err();
    assert!(matches!(err, RandomError::OutOfRange { name: "min_value", ref value, .. } if value == "-1"));
}

#[test]
fn test_negative_bound_names_max_value() {
    let engine = Engine::with_source(Scripted::new());

    let err = engine.next_below(-1i64).unwrap_err();
    assert!(matches!(err, RandomError::OutOfRange { name: "max_value", ref value, .. } if value == "-1"));

    let err = engine.next_below(i8::MIN).unwrap_err();
    assert_eq!(err.argument_name(), Some("max_value"));
}

#[test]
fn test_raw_maximum_is_redrawn() {
    let engine = Engine::with_source(Scripted::new().u32(u32::MAX).u32(12));

    assert_eq!(engine.next_below(5u32).unwrap(), 2);
}

#[test]
fn test_biased_tail_is_redrawn() {
    let script = Scripted::new()
        .u32(3_000_000_000)
        .u32(4_000_000_000)
        .u32(7);
    let engine = Engine::with_source(script);

    assert_eq!(engine.next_below(3_000_000_000u32).unwrap(), 7);
}

#[test]
fn test_signed_draws_fold_and_reject() {
    // -5 folds to i32::MAX - 5, which lies above the threshold for 10.
    let script = Scripted::new()
        .bytes(&(-5i32).to_le_bytes())
        .bytes(&i32::MIN.to_le_bytes())
        .u32(123);
    let engine = Engine::with_source(script);

    assert_eq!(engine.next_below(10i32).unwrap(), 3);
}

#[test]
fn test_negative_ranges_map_zero_draw_to_min() {
    let engine = Engine::with_source(Scripted::new().u32(0).u32(0).u64(0));

    assert_eq!(engine.next_between(-355_541i32, 2_444).unwrap(), -355_541);
    assert_eq!(engine.next_between(-30_155i16, -10_000).unwrap(), -30_155);
    assert_eq!(engine.next_between(i64::MIN, i64::MAX).unwrap(), i64::MIN);
}

#[test]
fn test_narrow_types_route_through_32_bit_draws() {
    let engine = Engine::with_source(Scripted::new().u32(0).u32(250));

    assert_eq!(engine.next_between(3u8, 224).unwrap(), 3);
    assert_eq!(engine.next::<u8>().unwrap(), 250);
}

#[test]
fn test_entropy_failure_surfaces() {
    let engine = Engine::with_source(Scripted::new().bytes(&[1, 2]));

    let err = engine.next::<u32>().unwrap_err();
    assert!(matches!(err, RandomError::Entropy(_)));
}
