//! Bias-free integer sampling
//!
//! Two layers live here:
//!
//! - [`fixed`]
//!   Raw fixed-width draws and rejection sampling below an exclusive bound,
//!   for 32- and 64-bit words.
//!
//! - [`range`]
//!   Maps bounded draws onto arbitrary `[min, max)` ranges of every integer
//!   width, using unsigned wraparound arithmetic when the range starts below
//!   zero.
//!
//! Both layers assume their arguments were validated by the caller: bounds
//! are non-zero and `min < max`. Public validation lives in `uniform`.

pub(crate) mod fixed;
pub(crate) mod range;
mod unit;

pub(crate) use fixed::{below_i32, below_i64, below_u32, below_u64, raw_i32, raw_i64, raw_u32, raw_u64};
pub(crate) use unit::{unit_f32, unit_f64};
