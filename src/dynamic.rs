//! Runtime numeric dispatch
//!
//! When the numeric type is only known at runtime (for example, read from a
//! configuration file), callers name it with a [`NumericKind`] and exchange
//! values as [`NumericValue`]s. The engine resolves the tag against the
//! closed set of supported types and forwards to the same typed samplers
//! used by statically typed code.

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::entropy::EntropySource;
use crate::error::{RandomError, Result, message};
use crate::primitives::Decimal;
use crate::uniform::Uniform;

/// The closed set of numeric types the engine can sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumericKind {
    U8,
    I8,
    U16,
    I16,
    U32,
    I32,
    U64,
    I64,
    F32,
    F64,
    Decimal,
    /// A decimal rendered as text.
    Text,
}

impl NumericKind {
    pub const ALL: [NumericKind; 12] = [
        Self::U8,
        Self::I8,
        Self::U16,
        Self::I16,
        Self::U32,
        Self::I32,
        Self::U64,
        Self::I64,
        Self::F32,
        Self::F64,
        Self::Decimal,
        Self::Text,
    ];

    /// Tag of a statically known type.
    pub fn of<T: Uniform>() -> Self {
        T::KIND
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::U8 => "u8",
            Self::I8 => "i8",
            Self::U16 => "u16",
            Self::I16 => "i16",
            Self::U32 => "u32",
            Self::I32 => "i32",
            Self::U64 => "u64",
            Self::I64 => "i64",
            Self::F32 => "f32",
            Self::F64 => "f64",
            Self::Decimal => "decimal",
            Self::Text => "text",
        }
    }
}

impl Display for NumericKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for NumericKind {
    type Err = RandomError;

    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim();

        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| RandomError::invalid_operation(name, message::UNSUPPORTED_KIND))
    }
}

/// A sampled or configured value tagged with its numeric kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum NumericValue {
    U8(u8),
    I8(i8),
    U16(u16),
    I16(i16),
    U32(u32),
    I32(i32),
    U64(u64),
    I64(i64),
    F32(f32),
    F64(f64),
    Decimal(Decimal),
    Text(String),
}

impl NumericValue {
    pub fn kind(&self) -> NumericKind {
        match self {
            Self::U8(_) => NumericKind::U8,
            Self::I8(_) => NumericKind::I8,
            Self::U16(_) => NumericKind::U16,
            Self::I16(_) => NumericKind::I16,
            Self::U32(_) => NumericKind::U32,
            Self::I32(_) => NumericKind::I32,
            Self::U64(_) => NumericKind::U64,
            Self::I64(_) => NumericKind::I64,
            Self::F32(_) => NumericKind::F32,
            Self::F64(_) => NumericKind::F64,
            Self::Decimal(_) => NumericKind::Decimal,
            Self::Text(_) => NumericKind::Text,
        }
    }

    /// Parses `text` as a value of `kind`.
    ///
    /// `Text` values must hold a decimal number; they are kept verbatim.
    pub fn parse(kind: NumericKind, text: &str) -> Result<Self> {
        let text = text.trim();
        let invalid = || RandomError::invalid_operation(kind.name(), "value cannot be parsed as this kind.");

        Ok(match kind {
            NumericKind::U8 => Self::U8(text.parse().map_err(|_| invalid())?),
            NumericKind::I8 => Self::I8(text.parse().map_err(|_| invalid())?),
            NumericKind::U16 => Self::U16(text.parse().map_err(|_| invalid())?),
            NumericKind::I16 => Self::I16(text.parse().map_err(|_| invalid())?),
            NumericKind::U32 => Self::U32(text.parse().map_err(|_| invalid())?),
            NumericKind::I32 => Self::I32(text.parse().map_err(|_| invalid())?),
            NumericKind::U64 => Self::U64(text.parse().map_err(|_| invalid())?),
            NumericKind::I64 => Self::I64(text.parse().map_err(|_| invalid())?),
            NumericKind::F32 => Self::F32(text.parse().map_err(|_| invalid())?),
            NumericKind::F64 => Self::F64(text.parse().map_err(|_| invalid())?),
            NumericKind::Decimal => Self::Decimal(text.parse()?),
            NumericKind::Text => {
                text.parse::<Decimal>()?;
                Self::Text(text.to_owned())
            }
        })
    }
}

impl Display for NumericValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::U8(v) => write!(f, "{v}"),
            Self::I8(v) => write!(f, "{v}"),
            Self::U16(v) => write!(f, "{v}"),
            Self::I16(v) => write!(f, "{v}"),
            Self::U32(v) => write!(f, "{v}"),
            Self::I32(v) => write!(f, "{v}"),
            Self::U64(v) => write!(f, "{v}"),
            Self::I64(v) => write!(f, "{v}"),
            Self::F32(v) => write!(f, "{v}"),
            Self::F64(v) => write!(f, "{v}"),
            Self::Decimal(v) => write!(f, "{v}"),
            Self::Text(v) => f.write_str(v),
        }
    }
}

macro_rules! from_typed {
    ($($t:ty => $variant:ident),* $(,)?) => {$(
        impl From<$t> for NumericValue {
            fn from(value: $t) -> Self {
                Self::$variant(value)
            }
        }
    )*};
}

from_typed!(
    u8 => U8, i8 => I8, u16 => U16, i16 => I16, u32 => U32, i32 => I32,
    u64 => U64, i64 => I64, f32 => F32, f64 => F64, Decimal => Decimal,
);

pub(crate) fn sample<S>(source: &S, kind: NumericKind) -> Result<NumericValue>
where
    S: EntropySource + ?Sized,
{
    Ok(match kind {
        NumericKind::U8 => NumericValue::U8(u8::sample(source)?),
        NumericKind::I8 => NumericValue::I8(i8::sample(source)?),
        NumericKind::U16 => NumericValue::U16(u16::sample(source)?),
        NumericKind::I16 => NumericValue::I16(i16::sample(source)?),
        NumericKind::U32 => NumericValue::U32(u32::sample(source)?),
        NumericKind::I32 => NumericValue::I32(i32::sample(source)?),
        NumericKind::U64 => NumericValue::U64(u64::sample(source)?),
        NumericKind::I64 => NumericValue::I64(i64::sample(source)?),
        NumericKind::F32 => NumericValue::F32(f32::sample(source)?),
        NumericKind::F64 => NumericValue::F64(f64::sample(source)?),
        NumericKind::Decimal => NumericValue::Decimal(Decimal::sample(source)?),
        NumericKind::Text => NumericValue::Text(Decimal::sample(source)?.to_string()),
    })
}

pub(crate) fn sample_below<S>(source: &S, max_value: &NumericValue) -> Result<NumericValue>
where
    S: EntropySource + ?Sized,
{
    Ok(match max_value {
        NumericValue::U8(max) => NumericValue::U8(u8::sample_below(source, *max)?),
        NumericValue::I8(max) => NumericValue::I8(i8::sample_below(source, *max)?),
        NumericValue::U16(max) => NumericValue::U16(u16::sample_below(source, *max)?),
        NumericValue::I16(max) => NumericValue::I16(i16::sample_below(source, *max)?),
        NumericValue::U32(max) => NumericValue::U32(u32::sample_below(source, *max)?),
        NumericValue::I32(max) => NumericValue::I32(i32::sample_below(source, *max)?),
        NumericValue::U64(max) => NumericValue::U64(u64::sample_below(source, *max)?),
        NumericValue::I64(max) => NumericValue::I64(i64::sample_below(source, *max)?),
        NumericValue::F32(max) => NumericValue::F32(f32::sample_below(source, *max)?),
        NumericValue::F64(max) => NumericValue::F64(f64::sample_below(source, *max)?),
        NumericValue::Decimal(max) => NumericValue::Decimal(Decimal::sample_below(source, *max)?),
        NumericValue::Text(max) => {
            NumericValue::Text(Decimal::sample_below(source, max.parse()?)?.to_string())
        }
    })
}

pub(crate) fn sample_between<S>(
    source: &S,
    min_value: &NumericValue,
    max_value: &NumericValue,
) -> Result<NumericValue>
where
    S: EntropySource + ?Sized,
{
    use NumericValue as V;

    Ok(match (min_value, max_value) {
        (V::U8(min), V::U8(max)) => V::U8(u8::sample_between(source, *min, *max)?),
        (V::I8(min), V::I8(max)) => V::I8(i8::sample_between(source, *min, *max)?),
        (V::U16(min), V::U16(max)) => V::U16(u16::sample_between(source, *min, *max)?),
        (V::I16(min), V::I16(max)) => V::I16(i16::sample_between(source, *min, *max)?),
        (V::U32(min), V::U32(max)) => V::U32(u32::sample_between(source, *min, *max)?),
        (V::I32(min), V::I32(max)) => V::I32(i32::sample_between(source, *min, *max)?),
        (V::U64(min), V::U64(max)) => V::U64(u64::sample_between(source, *min, *max)?),
        (V::I64(min), V::I64(max)) => V::I64(i64::sample_between(source, *min, *max)?),
        (V::F32(min), V::F32(max)) => V::F32(f32::sample_between(source, *min, *max)?),
        (V::F64(min), V::F64(max)) => V::F64(f64::sample_between(source, *min, *max)?),
        (V::Decimal(min), V::Decimal(max)) => V::Decimal(Decimal::sample_between(source, *min, *max)?),
        (V::Text(min), V::Text(max)) => {
            let value = Decimal::sample_between(source, min.parse()?, max.parse()?)?;
            V::Text(value.to_string())
        }
        (min, max) => {
            return Err(RandomError::invalid_operation(
                format!("{} and {}", min.kind(), max.kind()),
                message::KIND_MISMATCH,
            ));
        }
    })
}
