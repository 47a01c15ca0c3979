//! Sampling engine
//!
//! [`Engine`] is the thread-safe façade over an [`EntropySource`]. It
//! exposes every sampling entry point of the crate and tracks whether it
//! has been disposed.
//!
//! Engines come in three flavors:
//!
//! - [`Engine::shared`]
//!   The process-wide instance. It borrows a static system source and can
//!   never be disposed; dispose requests on it are ignored.
//!
//! - [`Engine::new`]
//!   A disposable engine that also borrows the static system source.
//!
//! - [`Engine::with_source`]
//!   A disposable engine that owns its source and releases it exactly once,
//!   on [`Engine::dispose`] or when dropped.

use std::any::type_name;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};

use log::{debug, trace};
use once_cell::sync::Lazy;

use crate::dynamic::{self, NumericKind, NumericValue};
use crate::entropy::{EntropySource, SystemEntropy};
use crate::enums::{self, Enumerable};
use crate::error::{RandomError, Result};
use crate::primitives::Decimal;
use crate::uniform::Uniform;

mod config;

pub use config::{EngineBuilder, EngineConfig, EntropyBackend};

static SYSTEM: SystemEntropy = SystemEntropy::new();

static SHARED: Lazy<Engine> = Lazy::new(|| {
    debug!("initialized shared engine");

    Engine {
        source: SourceHandle::Borrowed(&SYSTEM),
        lifecycle: Lifecycle::Pinned,
    }
});

enum SourceHandle {
    Owned(Box<dyn EntropySource>),
    Borrowed(&'static dyn EntropySource),
}

impl SourceHandle {
    fn get(&self) -> &dyn EntropySource {
        match self {
            Self::Owned(source) => &**source,
            Self::Borrowed(source) => *source,
        }
    }
}

enum Lifecycle {
    /// Never disposed.
    Pinned,
    Disposable(AtomicBool),
}

/// Uniform random sampling over a cryptographic entropy source.
pub struct Engine {
    source: SourceHandle,
    lifecycle: Lifecycle,
}

impl Engine {
    /// The process-wide engine, backed by operating system entropy.
    pub fn shared() -> &'static Engine {
        &SHARED
    }

    /// Creates a disposable engine backed by operating system entropy.
    pub fn new() -> Self {
        Self::from_handle(SourceHandle::Borrowed(&SYSTEM))
    }

    /// Creates a disposable engine that owns `source`.
    pub fn with_source(source: impl EntropySource + 'static) -> Self {
        Self::from_handle(SourceHandle::Owned(Box::new(source)))
    }

    fn from_handle(source: SourceHandle) -> Self {
        debug!("created engine");

        Self {
            source,
            lifecycle: Lifecycle::Disposable(AtomicBool::new(false)),
        }
    }

    /// Creates an engine from a configuration.
    pub fn from_config(config: &EngineConfig) -> Result<Self> {
        Self::builder().backend(config.backend).build()
    }

    pub fn builder() -> EngineBuilder {
        EngineBuilder::default()
    }

    /// Whether this is the process-wide shared engine.
    pub fn is_shared(&self) -> bool {
        matches!(self.lifecycle, Lifecycle::Pinned)
    }

    pub fn is_disposed(&self) -> bool {
        match &self.lifecycle {
            Lifecycle::Pinned => false,
            Lifecycle::Disposable(disposed) => disposed.load(Ordering::Acquire),
        }
    }

    /// Disposes the engine, releasing an owned source.
    ///
    /// Idempotent. On the shared engine this does nothing.
    pub fn dispose(&self) {
        let Lifecycle::Disposable(disposed) = &self.lifecycle else {
            trace!("ignored dispose request on the shared engine");
            return;
        };

        if disposed
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return;
        }

        if let SourceHandle::Owned(source) = &self.source {
            source.release();
        }

        debug!("disposed engine");
    }

    fn source(&self) -> Result<&dyn EntropySource> {
        if self.is_disposed() {
            return Err(RandomError::Disposed {
                type_name: type_name::<Self>(),
            });
        }

        Ok(self.source.get())
    }

    /// Uniform over `[0, T::MAX)` for integers and `[0, 1)` for floats and
    /// decimals.
    ///
    /// ```
    /// use unbiased::Engine;
    ///
    /// let byte: u8 = Engine::shared().next().unwrap();
    /// assert!(byte < u8::MAX);
    /// ```
    pub fn next<T: Uniform>(&self) -> Result<T> {
        T::sample(self.source()?)
    }

    /// Uniform over `[0, max_value)`. A zero bound yields zero.
    pub fn next_below<T: Uniform>(&self, max_value: T) -> Result<T> {
        T::sample_below(self.source()?, max_value)
    }

    /// Uniform over `[min_value, max_value)`. Equal bounds yield
    /// `min_value`.
    ///
    /// ```
    /// use unbiased::Engine;
    ///
    /// let engine = Engine::new();
    /// let roll = engine.next_between(1u32, 7).unwrap();
    /// assert!((1..7).contains(&roll));
    /// ```
    pub fn next_between<T: Uniform>(&self, min_value: T, max_value: T) -> Result<T> {
        T::sample_between(self.source()?, min_value, max_value)
    }

    /// Uniform over `[0, 1)`.
    pub fn next_f64(&self) -> Result<f64> {
        self.next()
    }

    /// Uniform over `[0, 1)` with 28 decimal places.
    pub fn next_decimal(&self) -> Result<Decimal> {
        self.next()
    }

    /// Fills `dest` with independent uniform bytes.
    pub fn fill_bytes(&self, dest: &mut [u8]) -> Result<()> {
        let source = self.source()?;

        if dest.is_empty() {
            return Ok(());
        }

        source.fill_bytes(dest)?;

        Ok(())
    }

    /// Returns `len` independent uniform bytes.
    pub fn bytes(&self, len: usize) -> Result<Vec<u8>> {
        let source = self.source()?;

        if len == 0 {
            return Ok(Vec::new());
        }

        let mut buf = vec![0u8; len];
        source.fill_bytes(&mut buf)?;

        Ok(buf)
    }

    /// One of the declared values of `E`, each equally likely.
    pub fn next_enum<E: Enumerable>(&self) -> Result<E> {
        enums::sample(self.source()?)
    }

    /// [`Engine::next`] for a type named at runtime.
    pub fn next_value(&self, kind: NumericKind) -> Result<NumericValue> {
        dynamic::sample(self.source()?, kind)
    }

    /// [`Engine::next_below`] for a value whose type is known at runtime.
    pub fn next_value_below(&self, max_value: &NumericValue) -> Result<NumericValue> {
        dynamic::sample_below(self.source()?, max_value)
    }

    /// [`Engine::next_between`] for values whose type is known at runtime.
    /// Both bounds must be of the same kind.
    pub fn next_value_between(
        &self,
        min_value: &NumericValue,
        max_value: &NumericValue,
    ) -> Result<NumericValue> {
        dynamic::sample_between(self.source()?, min_value, max_value)
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Engine {
    fn drop(&mut self) {
        self.dispose();
    }
}

impl fmt::Debug for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Engine")
            .field("shared", &self.is_shared())
            .field("owns_source", &matches!(self.source, SourceHandle::Owned(_)))
            .field("disposed", &self.is_disposed())
            .finish()
    }
}
