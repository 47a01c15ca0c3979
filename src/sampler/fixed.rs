//! Fixed-width rejection sampling.
//!
//! Raw draws read a little-endian word from the entropy source and throw
//! away the word's maximum value, which leaves a domain of exactly `MAX`
//! equally likely values `[0, MAX)`:
//!
//! - unsigned words are used as-is;
//! - signed words also drop `MIN`, and negative draws are folded up by
//!   `MAX`, so every value in `[0, MAX)` has exactly two preimages.
//!
//! Bounded draws then keep only raw values below the largest multiple of
//! the bound that fits in that domain, `MAX - MAX % bound`, and reduce the
//! survivor modulo the bound. Every residue is hit by the same number of
//! accepted raw values, so the result carries no modulo bias. Fewer than
//! half of the raw values are ever rejected, and every retry draws fresh
//! entropy.

use log::trace;

use crate::entropy::EntropySource;
use crate::error::EntropyError;

macro_rules! fixed_width {
    (
        $unsigned:ty, $signed:ty, $bytes:literal,
        $raw_u:ident, $raw_i:ident, $below_u:ident, $below_i:ident
    ) => {
        /// Uniform over `[0, MAX)` of the unsigned word.
        pub(crate) fn $raw_u<S>(source: &S) -> Result<$unsigned, EntropyError>
        where
            S: EntropySource + ?Sized,
        {
            let mut buf = [0u8; $bytes];

            loop {
                source.fill_bytes(&mut buf)?;
                let raw = <$unsigned>::from_le_bytes(buf);

                if raw != <$unsigned>::MAX {
                    return Ok(raw);
                }
            }
        }

        /// Uniform over `[0, MAX)` of the signed word.
        pub(crate) fn $raw_i<S>(source: &S) -> Result<$signed, EntropyError>
        where
            S: EntropySource + ?Sized,
        {
            let mut buf = [0u8; $bytes];

            loop {
                source.fill_bytes(&mut buf)?;
                let raw = <$signed>::from_le_bytes(buf);

                if raw == <$signed>::MIN || raw == <$signed>::MAX {
                    continue;
                }

                return Ok(if raw < 0 { raw + <$signed>::MAX } else { raw });
            }
        }

        /// Uniform over `[0, bound)`. `bound` must be non-zero.
        pub(crate) fn $below_u<S>(source: &S, bound: $unsigned) -> Result<$unsigned, EntropyError>
        where
            S: EntropySource + ?Sized,
        {
            debug_assert!(bound != 0);

            let threshold = <$unsigned>::MAX - <$unsigned>::MAX % bound;

            loop {
                let raw = $raw_u(source)?;

                if raw < threshold {
                    return Ok(raw % bound);
                }

                trace!("rejected {}-bit draw above {threshold}", $bytes * 8);
            }
        }

        /// Uniform over `[0, bound)`. `bound` must be positive.
        pub(crate) fn $below_i<S>(source: &S, bound: $signed) -> Result<$signed, EntropyError>
        where
            S: EntropySource + ?Sized,
        {
            debug_assert!(bound > 0);

            let threshold = <$signed>::MAX - <$signed>::MAX % bound;

            loop {
                let raw = $raw_i(source)?;

                if raw < threshold {
                    return Ok(raw % bound);
                }

                trace!("rejected signed {}-bit draw above {threshold}", $bytes * 8);
            }
        }
    };
}

fixed_width!(u32, i32, 4, raw_u32, raw_i32, below_u32, below_i32);
fixed_width!(u64, i64, 8, raw_u64, raw_i64, below_u64, below_i64);
