//! Typed uniform sampling
//!
//! [`Uniform`] is implemented for every supported numeric type and gives
//! each one the same three entry points:
//!
//! - `sample`: `[0, MAX)` for integers, `[0, 1)` for floats and decimals.
//! - `sample_below(max_value)`: `[0, max_value)`; a zero bound yields zero,
//!   a negative bound is an error.
//! - `sample_between(min_value, max_value)`: `[min_value, max_value)`;
//!   equal bounds yield `min_value`, reversed bounds are an error that
//!   names `min_value`.
//!
//! All argument checks run before any entropy is drawn. The concrete
//! implementations live in [`int`], [`float`] and [`decimal`].

use std::fmt::Display;

use crate::dynamic::NumericKind;
use crate::entropy::EntropySource;
use crate::error::Result;

mod decimal;
mod float;
mod int;

/// A numeric type that can be sampled uniformly.
pub trait Uniform: Copy + PartialOrd + Display + Send + Sync + 'static {
    /// Runtime tag of the type, for dynamic dispatch.
    const KIND: NumericKind;

    /// Uniform over the type's default domain.
    fn sample<S>(source: &S) -> Result<Self>
    where
        S: EntropySource + ?Sized;

    /// Uniform over `[0, max_value)`.
    fn sample_below<S>(source: &S, max_value: Self) -> Result<Self>
    where
        S: EntropySource + ?Sized;

    /// Uniform over `[min_value, max_value)`.
    fn sample_between<S>(source: &S, min_value: Self, max_value: Self) -> Result<Self>
    where
        S: EntropySource + ?Sized;
}
