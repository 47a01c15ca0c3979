//! Enumeration sampling
//!
//! An [`Enumerable`] type lists its declared values; sampling picks one of
//! them with equal probability, independent of the underlying integers
//! (which may have gaps).
//!
//! Value tables are built once per type and cached for the life of the
//! process in a concurrent map keyed by `TypeId`. Two threads racing on a
//! cold entry may both build the table; the first insert wins and the other
//! copy is dropped, which only costs time.
//!
//! The enumeration's underlying integer picks the sampling path: `u32`,
//! `i64` and `u64` backed types draw the index with the 64-bit sampler,
//! narrower ones with the 32-bit sampler.

use std::any::{Any, TypeId, type_name};
use std::sync::Arc;

use dashmap::DashMap;
use log::debug;
use once_cell::sync::Lazy;

use crate::entropy::EntropySource;
use crate::error::{RandomError, Result, message};
use crate::sampler::{below_i32, below_i64};

/// Underlying integer type of an enumeration.
pub trait EnumRepr: Copy + 'static {
    /// Whether the type is sampled through the 64-bit path.
    const WIDE: bool;
}

macro_rules! enum_repr {
    ($($t:ty => $wide:literal),* $(,)?) => {$(
        impl EnumRepr for $t {
            const WIDE: bool = $wide;
        }
    )*};
}

enum_repr!(
    u8 => false, i8 => false, u16 => false, i16 => false,
    i32 => false, u32 => true, i64 => true, u64 => true,
);

/// An enumeration whose declared values can be sampled.
///
/// Usually implemented through [`enumerable!`](crate::enumerable).
pub trait Enumerable: Copy + PartialEq + Send + Sync + 'static {
    /// The `#[repr]` integer of the enumeration.
    type Repr: EnumRepr;

    /// Every declared value, in declaration order.
    fn values() -> Vec<Self>;
}

type Table = Arc<dyn Any + Send + Sync>;

static TABLES: Lazy<DashMap<TypeId, Table>> = Lazy::new(DashMap::new);

fn build<E: Enumerable>() -> Vec<E> {
    let mut distinct = Vec::new();

    for value in E::values() {
        if !distinct.contains(&value) {
            distinct.push(value);
        }
    }

    debug!("cached {} values for enumeration {}", distinct.len(), type_name::<E>());

    distinct
}

/// The cached, de-duplicated value table of `E`.
pub(crate) fn values_of<E: Enumerable>() -> Arc<Vec<E>> {
    let key = TypeId::of::<E>();

    let cached = TABLES.get(&key).map(|entry| Arc::clone(entry.value()));
    let table = match cached {
        Some(table) => table,
        None => {
            let built: Table = Arc::new(build::<E>());
            Arc::clone(TABLES.entry(key).or_insert(built).value())
        }
    };

    // The key is the type's own id, so the downcast always succeeds.
    table.downcast::<Vec<E>>().unwrap_or_else(|_| Arc::new(build::<E>()))
}

pub(crate) fn sample<E, S>(source: &S) -> Result<E>
where
    E: Enumerable,
    S: EntropySource + ?Sized,
{
    let values = values_of::<E>();

    if values.is_empty() {
        return Err(RandomError::invalid_operation(type_name::<E>(), message::NO_ENUM_VALUES));
    }

    let index = match (E::Repr::WIDE, i32::try_from(values.len())) {
        (false, Ok(len)) => below_i32(source, len)? as usize,
        _ => below_i64(source, values.len() as i64)? as usize,
    };

    Ok(values[index])
}

/// Declares a fieldless `#[repr]` enumeration and implements
/// [`Enumerable`](crate::Enumerable) for it.
///
/// ```
/// unbiased::enumerable! {
///     #[derive(Debug, Clone, Copy, PartialEq, Eq)]
///     pub enum Suit: u8 {
///         Clubs = 1,
///         Diamonds = 2,
///         Hearts = 4,
///         Spades = 8,
///     }
/// }
///
/// let suit: Suit = unbiased::Engine::shared().next_enum().unwrap();
/// assert!(matches!(suit, Suit::Clubs | Suit::Diamonds | Suit::Hearts | Suit::Spades));
/// ```
#[macro_export]
macro_rules! enumerable {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident : $repr:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $(= $value:expr)?
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[repr($repr)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant $(= $value)?,
            )*
        }

        impl $crate::Enumerable for $name {
            type Repr = $repr;

            fn values() -> ::std::vec::Vec<Self> {
                ::std::vec![$($name::$variant),*]
            }
        }
    };
}
