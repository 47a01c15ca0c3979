use serde::{Deserialize, Serialize};

use crate::engine::{Engine, SourceHandle};
use crate::entropy::{ChaCha20Entropy, EntropySource};
use crate::error::{RandomError, Result};

/// Which entropy source a configured engine draws from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntropyBackend {
    /// Operating system entropy on every draw.
    #[default]
    System,

    /// ChaCha20 expansion of a seed taken from the operating system.
    #[serde(rename = "chacha20", alias = "cha_cha20")]
    ChaCha20,
}

/// Serializable engine settings.
///
/// ```
/// use unbiased::{EngineConfig, EntropyBackend};
///
/// let config: EngineConfig = serde_json::from_str(r#"{ "backend": "chacha20" }"#).unwrap();
/// assert_eq!(config.backend, EntropyBackend::ChaCha20);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub backend: EntropyBackend,
}

/// Step-by-step engine construction.
///
/// An explicit source takes precedence over a backend. Building with
/// neither fails with [`RandomError::MissingArgument`].
#[derive(Default)]
pub struct EngineBuilder {
    source: Option<Box<dyn EntropySource>>,
    backend: Option<EntropyBackend>,
}

impl EngineBuilder {
    pub fn source(mut self, source: impl EntropySource + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    pub fn backend(mut self, backend: EntropyBackend) -> Self {
        self.backend = Some(backend);
        self
    }

    pub fn build(self) -> Result<Engine> {
        match (self.source, self.backend) {
            (Some(source), _) => Ok(Engine::from_handle(SourceHandle::Owned(source))),
            (None, Some(EntropyBackend::System)) => Ok(Engine::new()),
            (None, Some(EntropyBackend::ChaCha20)) => {
                let source = ChaCha20Entropy::from_os()?;
                Ok(Engine::with_source(source))
            }
            (None, None) => Err(RandomError::MissingArgument { name: "source" }),
        }
    }
}
