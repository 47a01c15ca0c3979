//! Decimal sampling.
//!
//! A unit draw is built from 29 independent base-10 digits, each drawn with
//! the 32-bit sampler below 10, read as `0.d1d2...d29` and rounded to the
//! 28 fractional digits a `Decimal` holds. The rare draw that rounds up to
//! exactly one is redrawn. Normalization makes equal values compare equal
//! regardless of how many zero digits were drawn.

use log::trace;

use crate::dynamic::NumericKind;
use crate::entropy::EntropySource;
use crate::error::{RandomError, Result};
use crate::primitives::{Decimal, U256};
use crate::sampler::below_i32;
use crate::uniform::Uniform;

const UNIT_DIGITS: u32 = 29;

/// Uniform decimal in `[0, 1)`.
pub(crate) fn unit_decimal<S>(source: &S) -> Result<Decimal>
where
    S: EntropySource + ?Sized,
{
    loop {
        let mut digits = 0u128;

        for _ in 0..UNIT_DIGITS {
            digits = digits * 10 + below_i32(source, 10)? as u128;
        }

        match Decimal::from_wide(U256::from_u128(digits), UNIT_DIGITS, false) {
            Some(unit) if unit < Decimal::ONE => return Ok(unit),
            _ => trace!("decimal draw rounded up to one, redrawing"),
        }
    }
}

/// `min + (max - min) * unit`, or the weighted mean
/// `min * (1 - unit) + max * unit` when the span itself overflows.
fn scale(min: Decimal, max: Decimal, unit: Decimal) -> Option<Decimal> {
    match max.checked_sub(min) {
        Some(span) => span.checked_mul(unit)?.checked_add(min),
        None => {
            let low = min.checked_mul(Decimal::ONE.checked_sub(unit)?)?;

            low.checked_add(max.checked_mul(unit)?)
        }
    }
}

impl Uniform for Decimal {
    const KIND: NumericKind = NumericKind::Decimal;

    fn sample<S>(source: &S) -> Result<Self>
    where
        S: EntropySource + ?Sized,
    {
        unit_decimal(source)
    }

    fn sample_below<S>(source: &S, max_value: Self) -> Result<Self>
    where
        S: EntropySource + ?Sized,
    {
        if max_value.is_zero() {
            return Ok(Decimal::ZERO);
        }

        if max_value.is_negative() {
            return Err(RandomError::negative_max(max_value));
        }

        Self::sample_between(source, Decimal::ZERO, max_value)
    }

    fn sample_between<S>(source: &S, min_value: Self, max_value: Self) -> Result<Self>
    where
        S: EntropySource + ?Sized,
    {
        if min_value == max_value {
            return Ok(min_value);
        }

        if min_value > max_value {
            return Err(RandomError::min_above_max(min_value));
        }

        loop {
            let unit = unit_decimal(source)?;

            match scale(min_value, max_value, unit) {
                Some(result) if result >= min_value && result < max_value => return Ok(result),
                _ => trace!("scaled decimal draw fell outside [{min_value}, {max_value})"),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_handles_the_full_decimal_span() {
        let half: Decimal = "0.5".parse().unwrap();

        assert_eq!(scale(Decimal::MIN, Decimal::MAX, Decimal::ZERO), Some(Decimal::MIN));
        assert_eq!(scale(Decimal::MIN, Decimal::MAX, half), Some(Decimal::ZERO));
    }

    #[test]
    fn scale_is_affine_for_ordinary_spans() {
        let min: Decimal = "-1.5".parse().unwrap();
        let max: Decimal = "2.5".parse().unwrap();
        let unit: Decimal = "0.25".parse().unwrap();

        assert_eq!(scale(min, max, unit), Some("-0.5".parse().unwrap()));
    }
}
