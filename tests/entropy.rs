mod support;

use std::sync::Arc;

use support::Scripted;
use unbiased::{ChaCha20Entropy, EntropyError, EntropySource, SystemEntropy};

#[test]
fn test_system_entropy_fills_buffers() {
    let source = SystemEntropy::new();

    let mut a = [0u8; 64];
    let mut b = [0u8; 64];
    source.fill_bytes(&mut a).unwrap();
    source.fill_bytes(&mut b).unwrap();

    assert_ne!(a, b);
    source.fill_bytes(&mut []).unwrap();
}

#[test]
fn test_capability_methods_respect_bounds() {
    let source = ChaCha20Entropy::from_os().unwrap();

    for _ in 0..10_000 {
        assert!(source.next_u32_below(17).unwrap() < 17);
        assert!(source.next_u64_below(1 << 40).unwrap() < 1 << 40);

        let unit = source.next_unit().unwrap();
        assert!((0.0..1.0).contains(&unit));
    }
}

#[test]
fn test_zero_bound_draws_nothing() {
    let source = Scripted::new();

    assert_eq!(source.next_u32_below(0).unwrap(), 0);
    assert_eq!(source.next_u64_below(0).unwrap(), 0);
}

#[test]
fn test_capability_methods_reject_the_biased_tail() {
    let source = Scripted::new().u32(u32::MAX).u32(4_000_000_000).u32(11);

    assert_eq!(source.next_u32_below(3_000_000_000).unwrap(), 11);
    assert_eq!(source.remaining(), 0);
}

#[test]
fn test_shared_handles_forward_release() {
    let source = Arc::new(ChaCha20Entropy::from_os().unwrap());
    let handle: &dyn EntropySource = &source;

    handle.release();

    let mut out = [0u8; 4];
    assert!(matches!(source.fill_bytes(&mut out), Err(EntropyError::Released)));
}
