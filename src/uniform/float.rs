//! Floating-point sampling.
//!
//! Ranged draws scale a unit draw onto the span. Rounding can land the
//! scaled value exactly on `max_value`, so any result outside
//! `[min_value, max_value)` is discarded and redrawn.

use log::trace;

use crate::dynamic::NumericKind;
use crate::entropy::EntropySource;
use crate::error::{RandomError, Result};
use crate::sampler::{unit_f32, unit_f64};
use crate::uniform::Uniform;

/// `min + (max - min) * unit`, computed in halves when the span overflows.
fn scale(min: f64, max: f64, unit: f64) -> f64 {
    let span = max - min;

    if span.is_finite() {
        span * unit + min
    } else {
        ((max / 2.0 - min / 2.0) * unit + min / 2.0) * 2.0
    }
}

fn check_bounds(min_value: f64, max_value: f64) -> Result<()> {
    if !min_value.is_finite() {
        return Err(RandomError::not_finite("min_value", min_value));
    }

    if !max_value.is_finite() {
        return Err(RandomError::not_finite("max_value", max_value));
    }

    Ok(())
}

macro_rules! uniform_float {
    ($t:ty, $kind:ident, $unit:ident) => {
        impl Uniform for $t {
            const KIND: NumericKind = NumericKind::$kind;

            fn sample<S>(source: &S) -> Result<Self>
            where
                S: EntropySource + ?Sized,
            {
                Ok($unit(source)?)
            }

            fn sample_below<S>(source: &S, max_value: Self) -> Result<Self>
            where
                S: EntropySource + ?Sized,
            {
                if !max_value.is_finite() {
                    return Err(RandomError::not_finite("max_value", max_value));
                }

                if max_value == 0.0 {
                    return Ok(0.0);
                }

                if max_value < 0.0 {
                    return Err(RandomError::negative_max(max_value));
                }

                Self::sample_between(source, 0.0, max_value)
            }

            fn sample_between<S>(source: &S, min_value: Self, max_value: Self) -> Result<Self>
            where
                S: EntropySource + ?Sized,
            {
                check_bounds(min_value as f64, max_value as f64)?;

                if min_value == max_value {
                    return Ok(min_value);
                }

                if min_value > max_value {
                    return Err(RandomError::min_above_max(min_value));
                }

                loop {
                    let unit = unit_f64(source)?;
                    let result = scale(min_value as f64, max_value as f64, unit) as $t;

                    if result >= min_value && result < max_value {
                        return Ok(result);
                    }

                    trace!("scaled {} draw {result} fell outside [{min_value}, {max_value})", stringify!($t));
                }
            }
        }
    };
}

uniform_float!(f32, F32, unit_f32);
uniform_float!(f64, F64, unit_f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_survives_full_width_span() {
        let low = scale(f64::MIN, f64::MAX, 0.0);
        let high = scale(f64::MIN, f64::MAX, 1.0 - f64::EPSILON);

        assert_eq!(low, f64::MIN);
        assert!(high.is_finite() && high <= f64::MAX);
    }

    #[test]
    fn scale_is_affine_for_ordinary_spans() {
        assert_eq!(scale(-2.0, 6.0, 0.5), 2.0);
        assert_eq!(scale(10.0, 11.0, 0.0), 10.0);
    }
}
