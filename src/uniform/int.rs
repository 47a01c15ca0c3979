use crate::dynamic::NumericKind;
use crate::entropy::EntropySource;
use crate::error::{EntropyError, RandomError, Result};
use crate::sampler::range::{
    range_i8, range_i16, range_i32, range_i64, range_u8, range_u16, range_u32, range_u64,
};
use crate::sampler::{below_i32, below_i64, below_u32, below_u64, raw_i32, raw_i64, raw_u32, raw_u64};
use crate::uniform::Uniform;

// 8- and 16-bit draws go through the signed 32-bit sampler and narrow.
macro_rules! narrow_draws {
    ($t:ty, $full:ident, $below:ident) => {
        fn $full<S>(source: &S) -> std::result::Result<$t, EntropyError>
        where
            S: EntropySource + ?Sized,
        {
            Ok(below_i32(source, i32::from(<$t>::MAX))? as $t)
        }

        fn $below<S>(source: &S, max_value: $t) -> std::result::Result<$t, EntropyError>
        where
            S: EntropySource + ?Sized,
        {
            Ok(below_i32(source, i32::from(max_value))? as $t)
        }
    };
}

narrow_draws!(u8, full_u8, below_u8);
narrow_draws!(i8, full_i8, below_i8);
narrow_draws!(u16, full_u16, below_u16);
narrow_draws!(i16, full_i16, below_i16);

macro_rules! uniform_int {
    (@between $range:ident) => {
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

            Ok($range(source, min_value, max_value)?)
        }
    };

    (unsigned $t:ty, $kind:ident, $full:ident, $below:ident, $range:ident) => {
        impl Uniform for $t {
            const KIND: NumericKind = NumericKind::$kind;

            fn sample<S>(source: &S) -> Result<Self>
            where
                S: EntropySource + ?Sized,
            {
                Ok($full(source)?)
            }

            fn sample_below<S>(source: &S, max_value: Self) -> Result<Self>
            where
                S: EntropySource + ?Sized,
            {
                if max_value == 0 {
                    return Ok(0);
                }

                Ok($below(source, max_value)?)
            }

            uniform_int!(@between $range);
        }
    };

    (signed $t:ty, $kind:ident, $full:ident, $below:ident, $range:ident) => {
        impl Uniform for $t {
            const KIND: NumericKind = NumericKind::$kind;

            fn sample<S>(source: &S) -> Result<Self>
            where
                S: EntropySource + ?Sized,
            {
                Ok($full(source)?)
            }

            fn sample_below<S>(source: &S, max_value: Self) -> Result<Self>
            where
                S: EntropySource + ?Sized,
            {
                if max_value == 0 {
                    return Ok(0);
                }

                if max_value < 0 {
                    return Err(RandomError::negative_max(max_value));
                }

                Ok($below(source, max_value)?)
            }

            uniform_int!(@between $range);
        }
    };
}

uniform_int!(unsigned u8, U8, full_u8, below_u8, range_u8);
uniform_int!(unsigned u16, U16, full_u16, below_u16, range_u16);
uniform_int!(unsigned u32, U32, raw_u32, below_u32, range_u32);
uniform_int!(unsigned u64, U64, raw_u64, below_u64, range_u64);

uniform_int!(signed i8, I8, full_i8, below_i8, range_i8);
uniform_int!(signed i16, I16, full_i16, below_i16, range_i16);
uniform_int!(signed i32, I32, raw_i32, below_i32, range_i32);
uniform_int!(signed i64, I64, raw_i64, below_i64, range_i64);
