//! Range mapping onto `[min, max)`.
//!
//! Callers guarantee `min < max`. Unsigned ranges shift a bounded draw by
//! `min`. Signed ranges starting at or above zero do the same with signed
//! arithmetic. Signed ranges starting below zero are computed on the
//! unsigned bit patterns: the span `max - min` and the final `draw + min`
//! use wrapping arithmetic, which is exact for any span that fits the
//! unsigned width and never overflows at the ends of the signed domain.
//!
//! The 8- and 16-bit types widen into the 32-bit signed mapper and narrow
//! the result back, which is lossless since the result lies in `[min, max)`.

use crate::entropy::EntropySource;
use crate::error::EntropyError;
use crate::sampler::fixed::{below_i32, below_i64, below_u32, below_u64};

macro_rules! unsigned_range {
    ($name:ident, $t:ty, $below:ident) => {
        pub(crate) fn $name<S>(source: &S, min: $t, max: $t) -> Result<$t, EntropyError>
        where
            S: EntropySource + ?Sized,
        {
            debug_assert!(min < max);

            Ok($below(source, max - min)? + min)
        }
    };
}

macro_rules! signed_range {
    ($name:ident, $t:ty, $u:ty, $below_i:ident, $below_u:ident) => {
        pub(crate) fn $name<S>(source: &S, min: $t, max: $t) -> Result<$t, EntropyError>
        where
            S: EntropySource + ?Sized,
        {
            debug_assert!(min < max);

            if min >= 0 {
                return Ok($below_i(source, max - min)? + min);
            }

            let umin = min as $u;
            let span = (max as $u).wrapping_sub(umin);

            Ok($below_u(source, span)?.wrapping_add(umin) as $t)
        }
    };
}

macro_rules! narrow_range {
    ($name:ident, $t:ty) => {
        pub(crate) fn $name<S>(source: &S, min: $t, max: $t) -> Result<$t, EntropyError>
        where
            S: EntropySource + ?Sized,
        {
            Ok(range_i32(source, i32::from(min), i32::from(max))? as $t)
        }
    };
}

unsigned_range!(range_u32, u32, below_u32);
unsigned_range!(range_u64, u64, below_u64);

signed_range!(range_i32, i32, u32, below_i32, below_u32);
signed_range!(range_i64, i64, u64, below_i64, below_u64);

narrow_range!(range_u8, u8);
narrow_range!(range_i8, i8);
narrow_range!(range_u16, u16);
narrow_range!(range_i16, i16);
