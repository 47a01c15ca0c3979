//! Entropy sources
//!
//! An [`EntropySource`] is the capability every sampler in this crate is
//! built on: it hands out raw bytes with full entropy, and derives from
//! them the three primitives the rest of the crate consumes (bounded
//! 32-bit draws, bounded 64-bit draws, and the unit interval).
//!
//! Two backends are provided:
//!
//! - [`SystemEntropy`]
//!   Stateless, reads straight from the operating system for every call.
//!
//! - [`ChaCha20Entropy`]
//!   Seeded once from the operating system, then expanded with the ChaCha20
//!   block function and rekeyed after every fill for forward secrecy.
//!
//! Sources are `Send + Sync`: an engine is shared across threads without
//! external locking, so any mutable state must live behind the source's own
//! synchronization.

use std::sync::Arc;

use crate::error::EntropyError;
use crate::sampler;

mod chacha20;
mod drbg;
mod system;

pub use drbg::ChaCha20Entropy;
pub use system::SystemEntropy;

/// A provider of cryptographically strong random bytes.
pub trait EntropySource: Send + Sync {
    /// Fills `dest` entirely with independent uniform bytes.
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), EntropyError>;

    /// Returns a value uniformly distributed over `[0, bound)`.
    ///
    /// A zero bound yields zero without drawing entropy.
    fn next_u32_below(&self, bound: u32) -> Result<u32, EntropyError> {
        if bound == 0 {
            return Ok(0);
        }

        sampler::below_u32(self, bound)
    }

    /// 64-bit counterpart of [`EntropySource::next_u32_below`].
    fn next_u64_below(&self, bound: u64) -> Result<u64, EntropyError> {
        if bound == 0 {
            return Ok(0);
        }

        sampler::below_u64(self, bound)
    }

    /// Returns a value uniformly distributed over `[0, 1)`.
    fn next_unit(&self) -> Result<f64, EntropyError> {
        sampler::unit_f64(self)
    }

    /// Releases any resources held by the source.
    ///
    /// Called at most once, by the engine that owns the source. Stateless
    /// sources keep the default no-op.
    fn release(&self) {}
}

impl<T: EntropySource + ?Sized> EntropySource for Arc<T> {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), EntropyError> {
        (**self).fill_bytes(dest)
    }

    fn release(&self) {
        (**self).release()
    }
}

impl<T: EntropySource + ?Sized> EntropySource for &T {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), EntropyError> {
        (**self).fill_bytes(dest)
    }

    fn release(&self) {
        (**self).release()
    }
}

impl<T: EntropySource + ?Sized> EntropySource for Box<T> {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), EntropyError> {
        (**self).fill_bytes(dest)
    }

    fn release(&self) {
        (**self).release()
    }
}
