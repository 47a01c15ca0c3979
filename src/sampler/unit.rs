//! Unit-interval draws.
//!
//! The top mantissa-width bits of a raw word are scaled by `2^-bits`,
//! which yields every representable multiple of `2^-bits` in `[0, 1)` with
//! equal probability and can never produce `1.0`.

use crate::entropy::EntropySource;
use crate::error::EntropyError;

const F64_BITS: u32 = f64::MANTISSA_DIGITS;
const F32_BITS: u32 = f32::MANTISSA_DIGITS;

pub(crate) fn unit_f64<S>(source: &S) -> Result<f64, EntropyError>
where
    S: EntropySource + ?Sized,
{
    let mut buf = [0u8; 8];
    source.fill_bytes(&mut buf)?;

    let bits = u64::from_le_bytes(buf) >> (64 - F64_BITS);

    Ok(bits as f64 * (1.0 / (1u64 << F64_BITS) as f64))
}

pub(crate) fn unit_f32<S>(source: &S) -> Result<f32, EntropyError>
where
    S: EntropySource + ?Sized,
{
    let mut buf = [0u8; 4];
    source.fill_bytes(&mut buf)?;

    let bits = u32::from_le_bytes(buf) >> (32 - F32_BITS);

    Ok(bits as f32 * (1.0 / (1u32 << F32_BITS) as f32))
}
