//! Resolution context handed to preset handlers

use crate::Result;
use crate::key::PresetKey;
use crate::pipeline::{Registry, decode, encode, fold};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// Read-only view of the pipeline bound to one resolution chain.
///
/// Handlers use it to resolve the other presets they depend on. Each nested
/// resolution extends the chain; asking for a name already on the chain
/// fails with [`crate::Error::CyclicResolution`].
#[derive(Clone)]
pub struct ResolutionContext {
    registry: Arc<Registry>,
    chain: Vec<String>,
}

impl ResolutionContext {
    pub(crate) fn new(registry: Arc<Registry>, chain: Vec<String>) -> Self {
        Self { registry, chain }
    }

    /// Resolve another preset from within this chain.
    pub async fn apply(&self, name: &str, default: Value) -> Result<Value> {
        fold(
            Arc::clone(&self.registry),
            name.to_string(),
            default,
            self.chain.clone(),
        )
        .await
    }

    /// Resolve another preset as `T`.
    pub async fn apply_as<T>(&self, name: &str, default: T) -> Result<T>
    where
        T: Serialize + DeserializeOwned + Send,
    {
        let seed = encode(default)?;
        decode(name, self.apply(name, seed).await?)
    }

    /// Resolve a typed key from within this chain.
    pub async fn resolve<T>(&self, key: &PresetKey<T>, default: T) -> Result<T>
    where
        T: Serialize + DeserializeOwned + Send,
    {
        self.apply_as(key.name(), default).await
    }

    /// Names being resolved, outermost first.
    pub fn chain(&self) -> &[String] {
        &self.chain
    }

    /// The name whose handlers are currently running.
    pub fn current(&self) -> Option<&str> {
        self.chain.last().map(String::as_str)
    }
}

impl fmt::Debug for ResolutionContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolutionContext")
            .field("chain", &self.chain)
            .finish_non_exhaustive()
    }
}
