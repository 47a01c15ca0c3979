use log::warn;

use crate::entropy::EntropySource;
use crate::error::EntropyError;
use crate::os::sys_random;

/// Entropy read directly from the operating system on every call.
///
/// Holds no state, so a single `static` instance can back any number of
/// engines and threads.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemEntropy;

impl SystemEntropy {
    pub const fn new() -> Self {
        Self
    }
}

impl EntropySource for SystemEntropy {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), EntropyError> {
        if dest.is_empty() {
            return Ok(());
        }

        let len = dest.len();
        sys_random(dest).map_err(|err| {
            warn!("operating system entropy request for {len} bytes failed: {err}");
            EntropyError::Unavailable(err)
        })
    }
}
