#![allow(dead_code)]

use std::collections::VecDeque;
use std::io;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use unbiased::{EntropyError, EntropySource, SystemEntropy};

/// Replays a fixed byte script, then fails every further draw.
#[derive(Default)]
pub struct Scripted {
    bytes: Mutex<VecDeque<u8>>,
}

impl Scripted {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn u32(self, word: u32) -> Self {
        self.bytes(&word.to_le_bytes())
    }

    pub fn u64(self, word: u64) -> Self {
        self.bytes(&word.to_le_bytes())
    }

    pub fn bytes(self, bytes: &[u8]) -> Self {
        self.bytes.lock().unwrap().extend(bytes);
        self
    }

    pub fn remaining(&self) -> usize {
        self.bytes.lock().unwrap().len()
    }
}

impl EntropySource for Scripted {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), EntropyError> {
        let mut bytes = self.bytes.lock().unwrap();

        if bytes.len() < dest.len() {
            return Err(EntropyError::Unavailable(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "script exhausted",
            )));
        }

        let len = dest.len();
        for (slot, byte) in dest.iter_mut().zip(bytes.drain(..len)) {
            *slot = byte;
        }

        Ok(())
    }
}

/// System entropy that counts how often it was released.
#[derive(Clone, Default)]
pub struct Counting {
    pub releases: Arc<AtomicUsize>,
    pub fills: Arc<AtomicUsize>,
}

impl Counting {
    pub fn releases(&self) -> usize {
        self.releases.load(Ordering::SeqCst)
    }

    pub fn fills(&self) -> usize {
        self.fills.load(Ordering::SeqCst)
    }
}

impl EntropySource for Counting {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), EntropyError> {
        self.fills.fetch_add(1, Ordering::SeqCst);
        SystemEntropy::new().fill_bytes(dest)
    }

    fn release(&self) {
        self.releases.fetch_add(1, Ordering::SeqCst);
    }
}

/// Pearson's chi-square statistic against a uniform expectation.
pub fn chi_square(counts: &[u64]) -> f64 {
    let total: u64 = counts.iter().sum();
    let expected = total as f64 / counts.len() as f64;

    counts
        .iter()
        .map(|&observed| {
            let diff = observed as f64 - expected;
            diff * diff / expected
        })
        .sum()
}

/// A generous acceptance limit for `chi_square` with `bins - 1` degrees of
/// freedom. A fair source exceeds it with probability well below one in a
/// million.
pub fn chi_square_limit(bins: usize) -> f64 {
    let df = (bins - 1) as f64;
    df + 8.0 * (2.0 * df).sqrt() + 10.0
}
