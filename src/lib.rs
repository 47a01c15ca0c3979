//! Bias-free uniform sampling over cryptographic entropy
//!
//! This crate turns raw bytes from a cryptographically secure source into
//! uniformly distributed integers, floats, decimals and enumeration values,
//! without the modulo bias that plain `raw % n` reduction introduces.
//!
//! The focus is on **exactness of the distribution**: every bounded draw is
//! produced by rejection sampling, every range is half-open, and every
//! argument is validated before any entropy is consumed.
//!
//! # Module overview
//!
//! - `entropy`
//!   The [`EntropySource`] capability and its two backends: the operating
//!   system ([`SystemEntropy`]) and an OS-seeded ChaCha20 generator with
//!   forward secrecy ([`ChaCha20Entropy`]). Platform calls are isolated in
//!   an internal `os` module.
//!
//! - `uniform`
//!   The [`Uniform`] trait, implemented for every integer width, `f32`,
//!   `f64` and [`Decimal`]. Each type offers an unbounded draw, a draw below
//!   a bound and a draw between two bounds.
//!
//! - `enums`
//!   Uniform choice among the declared values of an enumeration, with
//!   value tables cached per type. See [`enumerable!`].
//!
//! - `dynamic`
//!   Runtime dispatch for numeric types named by a [`NumericKind`] tag,
//!   for callers that only learn the type from configuration.
//!
//! - `engine`
//!   The thread-safe [`Engine`] façade, its process-wide shared instance,
//!   and configuration through [`EngineConfig`] or [`EngineBuilder`].
//!
//! - `primitives`
//!   The [`Decimal`] value type used for high-precision sampling.
//!
//! # Example
//!
//! ```
//! use unbiased::Engine;
//!
//! let engine = Engine::shared();
//!
//! let die = engine.next_between(1u8, 7).unwrap();
//! assert!((1..7).contains(&die));
//!
//! let offset = engine.next_between(-30_155i32, -10_000).unwrap();
//! assert!((-30_155..-10_000).contains(&offset));
//!
//! let unit = engine.next_f64().unwrap();
//! assert!((0.0..1.0).contains(&unit));
//! ```
//!
//! # Design goals
//!
//! - No modulo bias for any bound
//! - Half-open ranges everywhere, including after float rounding
//! - Safe concurrent use of one engine without external locking
//! - A shared default engine that callers cannot dispose

mod os;
mod sampler;

pub mod dynamic;
pub mod engine;
pub mod entropy;
pub mod enums;
pub mod error;
pub mod primitives;
pub mod uniform;

pub use dynamic::{NumericKind, NumericValue};
pub use engine::{Engine, EngineBuilder, EngineConfig, EntropyBackend};
pub use entropy::{ChaCha20Entropy, EntropySource, SystemEntropy};
pub use enums::{EnumRepr, Enumerable};
pub use error::{EntropyError, RandomError, Result};
pub use primitives::{Decimal, ParseDecimalError};
pub use uniform::Uniform;
