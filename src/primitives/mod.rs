//! Primitive types
//!
//! Fixed-size value types with explicit, predictable semantics:
//!
//! - `Decimal`: a signed base-10 fraction with a 96-bit mantissa and up to
//!   28 fractional digits, used for high-precision sampling.
//! - `U256`: an internal 256-bit unsigned integer that holds the exact
//!   intermediates of decimal arithmetic before they are rounded back down.
//!
//! These are intentionally minimal and do not try to replicate full
//! arbitrary-precision libraries.

mod decimal;
mod u256;

pub use decimal::{Decimal, MAX_SCALE, ParseDecimalError};
pub(crate) use u256::U256;
