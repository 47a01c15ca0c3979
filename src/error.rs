//! Error types
//!
//! Every public sampling entry point validates its arguments before any
//! entropy is consumed. A call either returns a valid value or fails with
//! one of the variants below; there is no partial result.

use std::fmt::Display;

use crate::primitives::ParseDecimalError;

/// Failure of the underlying entropy channel.
#[derive(Debug, thiserror::Error)]
pub enum EntropyError {
    /// The operating system refused to provide random bytes.
    #[error("operating system entropy unavailable: {0}")]
    Unavailable(#[from] std::io::Error),

    /// The source was released by its owning engine.
    #[error("entropy source has been released")]
    Released,
}

/// Errors surfaced by the sampling API.
#[derive(Debug, thiserror::Error)]
pub enum RandomError {
    /// A required argument was not supplied.
    #[error("required argument `{name}` is missing")]
    MissingArgument { name: &'static str },

    /// An argument lies outside the values the operation accepts.
    #[error("argument `{name}` is out of range (actual value: {value}): {reason}")]
    OutOfRange {
        name: &'static str,
        value: String,
        reason: &'static str,
    },

    /// The operation is not defined for the requested type.
    #[error("invalid operation for `{type_name}`: {reason}")]
    InvalidOperation {
        type_name: String,
        reason: &'static str,
    },

    /// The engine was disposed before the call.
    #[error("cannot access a disposed object: {type_name}")]
    Disposed { type_name: &'static str },

    #[error(transparent)]
    Entropy(#[from] EntropyError),

    #[error(transparent)]
    Parse(#[from] ParseDecimalError),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, RandomError>;

pub(crate) mod message {
    pub const MIN_ABOVE_MAX: &str = "min_value must be smaller than or equal to max_value.";
    pub const MAX_BELOW_ZERO: &str = "max_value must be greater than 0.";
    pub const NOT_FINITE: &str = "value must be a finite number.";
    pub const NO_ENUM_VALUES: &str = "type is not an enumeration with declared values.";
    pub const UNSUPPORTED_KIND: &str = "type is not a supported numeric kind.";
    pub const KIND_MISMATCH: &str = "min_value and max_value must be of the same numeric kind.";
}

impl RandomError {
    pub(crate) fn min_above_max(min_value: impl Display) -> Self {
        Self::OutOfRange {
            name: "min_value",
            value: min_value.to_string(),
            reason: message::MIN_ABOVE_MAX,
        }
    }

    pub(crate) fn negative_max(max_value: impl Display) -> Self {
        Self::OutOfRange {
            name: "max_value",
            value: max_value.to_string(),
            reason: message::MAX_BELOW_ZERO,
        }
    }

    pub(crate) fn not_finite(name: &'static str, value: impl Display) -> Self {
        Self::OutOfRange {
            name,
            value: value.to_string(),
            reason: message::NOT_FINITE,
        }
    }

    pub(crate) fn invalid_operation(type_name: impl Into<String>, reason: &'static str) -> Self {
        Self::InvalidOperation {
            type_name: type_name.into(),
            reason,
        }
    }

    /// Name of the offending argument for out-of-range and missing-argument
    /// errors.
    pub fn argument_name(&self) -> Option<&'static str> {
        match self {
            Self::OutOfRange { name, .. } | Self::MissingArgument { name } => Some(name),
            _ => None,
        }
    }
}
