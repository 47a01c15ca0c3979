//! ChaCha20-based entropy expansion
//!
//! The generator is seeded once with 256 bits from the operating system
//! and then produces output with the ChaCha20 block function. After every
//! fill it replaces its key with fresh keystream, so a later compromise of
//! the internal state does not reveal earlier output.

use std::sync::{Mutex, MutexGuard};

use log::debug;

use crate::entropy::EntropySource;
use crate::entropy::chacha20::{self, BLOCK_LEN};
use crate::error::EntropyError;
use crate::os::sys_random;

struct DrbgState {
    /// ChaCha20 key (256-bit).
    key: [u8; 32],

    /// Nonce, fixed to zero: uniqueness comes from rekeying.
    nonce: [u8; 12],

    /// Block counter since the last rekey.
    counter: u32,

    released: bool,
}

impl DrbgState {
    fn next_block(&mut self) -> [u8; BLOCK_LEN] {
        if self.counter == u32::MAX {
            self.rekey();
        }

        let block = chacha20::block(&self.key, self.counter, &self.nonce);
        self.counter += 1;

        block
    }

    fn rekey(&mut self) {
        let block = chacha20::block(&self.key, self.counter, &self.nonce);

        self.key.copy_from_slice(&block[..32]);
        self.counter = 0;
    }

    fn wipe(&mut self) {
        self.key.fill(0);
        self.counter = 0;
        self.released = true;
    }
}

/// OS-seeded ChaCha20 entropy source.
///
/// Internally synchronized: concurrent draws serialize on a mutex, each
/// one receiving distinct keystream.
pub struct ChaCha20Entropy {
    state: Mutex<DrbgState>,
}

impl ChaCha20Entropy {
    /// Seeds a new generator from the operating system.
    pub fn from_os() -> Result<Self, EntropyError> {
        let mut seed = [0u8; 32];
        sys_random(&mut seed)?;

        debug!("seeded ChaCha20 entropy source from the operating system");

        Ok(Self::from_seed(seed))
    }

    /// Builds a generator from `seed`, wiping the caller's copy.
    pub(crate) fn from_seed(mut seed: [u8; 32]) -> Self {
        let key = seed;
        seed.fill(0);

        Self {
            state: Mutex::new(DrbgState {
                key,
                nonce: [0u8; 12],
                counter: 0,
                released: false,
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, DrbgState> {
        // The state is plain bytes; a panic elsewhere cannot leave it torn.
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl EntropySource for ChaCha20Entropy {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), EntropyError> {
        let mut state = self.lock();

        if state.released {
            return Err(EntropyError::Released);
        }

        if dest.is_empty() {
            return Ok(());
        }

        for chunk in dest.chunks_mut(BLOCK_LEN) {
            let block = state.next_block();
            chunk.copy_from_slice(&block[..chunk.len()]);
        }

        state.rekey();

        Ok(())
    }

    fn release(&self) {
        self.lock().wipe();
        debug!("released ChaCha20 entropy source");
    }
}

impl Drop for ChaCha20Entropy {
    fn drop(&mut self) {
        self.state
            .get_mut()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .wipe();
    }
}
