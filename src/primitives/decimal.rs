//! Fixed-precision decimal primitive
//!
//! A `Decimal` is `(-1)^sign * mantissa / 10^scale` with a 96-bit unsigned
//! mantissa and a scale of at most 28, which gives 28 to 29 significant
//! decimal digits.
//!
//! Values are always stored normalized: trailing fractional zeros are
//! stripped and zero carries no sign. Two decimals that denote the same
//! number therefore have the same representation, so the derived equality
//! and hashing are numeric equality.
//!
//! Arithmetic is exact in a 256-bit intermediate and then rounded half to
//! even into the representable range; it fails with `None` only when the
//! integral part no longer fits.

use std::cmp::Ordering;
use std::fmt::{self, Debug, Display, Formatter};
use std::ops::Neg;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::primitives::U256;

/// Largest number of fractional digits a `Decimal` can carry.
pub const MAX_SCALE: u32 = 28;

const MAX_MANTISSA: u128 = (1 << 96) - 1;

/// Fractional digits kept while parsing; the excess only feeds rounding.
const PARSE_SCALE_LIMIT: u32 = 40;

/// Errors returned when parsing a `Decimal` from text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseDecimalError {
    #[error("cannot parse decimal from empty string")]
    Empty,

    #[error("invalid digit found in decimal string")]
    InvalidDigit,

    #[error("decimal value is outside the representable range")]
    Overflow,
}

/// Signed fixed-precision decimal number.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct Decimal {
    mantissa: u128,
    scale: u8,
    negative: bool,
}

impl Decimal {
    pub const ZERO: Self = Self::raw(0, 0, false);
    pub const ONE: Self = Self::raw(1, 0, false);
    pub const MAX: Self = Self::raw(MAX_MANTISSA, 0, false);
    pub const MIN: Self = Self::raw(MAX_MANTISSA, 0, true);

    const fn raw(mantissa: u128, scale: u8, negative: bool) -> Self {
        Self {
            mantissa,
            scale,
            negative,
        }
    }

    /// Builds `(-1)^negative * mantissa / 10^scale`.
    ///
    /// Returns `None` if the mantissa exceeds 96 bits or the scale exceeds
    /// [`MAX_SCALE`]. The result is normalized.
    pub fn from_parts(mantissa: u128, scale: u32, negative: bool) -> Option<Self> {
        if mantissa > MAX_MANTISSA || scale > MAX_SCALE {
            return None;
        }

        Some(Self::normalized(mantissa, scale, negative))
    }

    fn normalized(mut mantissa: u128, mut scale: u32, negative: bool) -> Self {
        while scale > 0 && mantissa % 10 == 0 {
            mantissa /= 10;
            scale -= 1;
        }

        Self::raw(mantissa, scale as u8, negative && mantissa != 0)
    }

    /// Rounds an exact wide value into range, half to even.
    pub(crate) fn from_wide(mut value: U256, mut scale: u32, negative: bool) -> Option<Self> {
        let mut last = 0u64;
        let mut sticky = false;
        let mut dropped = false;

        loop {
            let fits = value.to_u128().filter(|&m| m <= MAX_MANTISSA);
            if fits.is_some() && scale <= MAX_SCALE {
                break;
            }

            if scale == 0 {
                return None;
            }

            sticky |= last != 0;
            (value, last) = value.div_rem_small(10);
            scale -= 1;
            dropped = true;
        }

        let mut mantissa = value.to_u128()?;

        if dropped && (last > 5 || (last == 5 && (sticky || mantissa & 1 == 1))) {
            mantissa += 1;

            if mantissa > MAX_MANTISSA {
                if scale == 0 {
                    return None;
                }

                mantissa = (mantissa + 5) / 10;
                scale -= 1;
            }
        }

        Some(Self::normalized(mantissa, scale, negative))
    }

    /// The unsigned mantissa of the normalized representation.
    pub fn mantissa(&self) -> u128 {
        self.mantissa
    }

    /// Number of fractional digits of the normalized representation.
    pub fn scale(&self) -> u32 {
        self.scale as u32
    }

    pub fn is_negative(&self) -> bool {
        self.negative
    }

    pub fn is_zero(&self) -> bool {
        self.mantissa == 0
    }

    pub fn abs(self) -> Self {
        Self::raw(self.mantissa, self.scale, false)
    }

    /// Both mantissas expressed at the larger of the two scales.
    fn aligned(&self, other: &Self) -> (U256, U256, u32) {
        let scale = self.scale.max(other.scale) as u32;

        let widen = |d: &Self| U256::widening_mul(d.mantissa, 10u128.pow(scale - d.scale as u32));

        (widen(self), widen(other), scale)
    }

    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        let (a, b, scale) = self.aligned(&rhs);

        if self.negative == rhs.negative {
            return Self::from_wide(a.checked_add(b)?, scale, self.negative);
        }

        match a.cmp(&b) {
            Ordering::Equal => Some(Self::ZERO),
            Ordering::Greater => Self::from_wide(a.checked_sub(b)?, scale, self.negative),
            Ordering::Less => Self::from_wide(b.checked_sub(a)?, scale, rhs.negative),
        }
    }

    pub fn checked_sub(self, rhs: Self) -> Option<Self> {
        self.checked_add(-rhs)
    }

    pub fn checked_mul(self, rhs: Self) -> Option<Self> {
        let product = U256::widening_mul(self.mantissa, rhs.mantissa);
        let scale = self.scale as u32 + rhs.scale as u32;

        Self::from_wide(product, scale, self.negative != rhs.negative)
    }
}

impl Default for Decimal {
    fn default() -> Self {
        Self::ZERO
    }
}

impl Neg for Decimal {
    type Output = Self;

    fn neg(self) -> Self {
        Self::raw(self.mantissa, self.scale, !self.negative && self.mantissa != 0)
    }
}

impl Ord for Decimal {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.negative, other.negative) {
            (false, true) => Ordering::Greater,
            (true, false) => Ordering::Less,
            (negative, _) => {
                let (a, b, _) = self.aligned(other);
                let magnitude = a.cmp(&b);

                if negative { magnitude.reverse() } else { magnitude }
            }
        }
    }
}

impl PartialOrd for Decimal {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Display for Decimal {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let digits = self.mantissa.to_string();
        let scale = self.scale as usize;

        if self.negative {
            f.write_str("-")?;
        }

        if scale == 0 {
            return f.write_str(&digits);
        }

        let padded = format!("{digits:0>width$}", width = scale + 1);
        let (int_part, frac_part) = padded.split_at(padded.len() - scale);

        write!(f, "{int_part}.{frac_part}")
    }
}

impl Debug for Decimal {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Decimal({self})")
    }
}

impl FromStr for Decimal {
    type Err = ParseDecimalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (negative, body) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s.strip_prefix('+').unwrap_or(s)),
        };

        let (int_part, frac_part) = body.split_once('.').unwrap_or((body, ""));
        if int_part.is_empty() && frac_part.is_empty() {
            return Err(ParseDecimalError::Empty);
        }

        let mut value = U256::ZERO;
        let mut scale = 0u32;

        let push = |value: U256, c: char| -> Result<U256, ParseDecimalError> {
            let digit = c.to_digit(10).ok_or(ParseDecimalError::InvalidDigit)?;

            value
                .checked_mul_small(10)
                .and_then(|v| v.checked_add(U256::from_u128(digit as u128)))
                .ok_or(ParseDecimalError::Overflow)
        };

        for c in int_part.chars() {
            value = push(value, c)?;
        }

        for c in frac_part.chars() {
            if scale < PARSE_SCALE_LIMIT {
                value = push(value, c)?;
                scale += 1;
            } else if !c.is_ascii_digit() {
                return Err(ParseDecimalError::InvalidDigit);
            }
        }

        Self::from_wide(value, scale, negative).ok_or(ParseDecimalError::Overflow)
    }
}

macro_rules! from_unsigned {
    ($($t:ty),*) => {$(
        impl From<$t> for Decimal {
            fn from(value: $t) -> Self {
                Self::raw(value as u128, 0, false)
            }
        }
    )*};
}

macro_rules! from_signed {
    ($($t:ty),*) => {$(
        impl From<$t> for Decimal {
            fn from(value: $t) -> Self {
                Self::raw(value.unsigned_abs() as u128, 0, value < 0)
            }
        }
    )*};
}

from_unsigned!(u8, u16, u32, u64);
from_signed!(i8, i16, i32, i64);

impl Serialize for Decimal {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Decimal {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}
