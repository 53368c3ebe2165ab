//! Preset registration table and resolution fold

use crate::context::ResolutionContext;
use crate::error::{Error, Result};
use crate::handler::{FnHandler, PresetHandler};
use crate::key::PresetKey;
use crate::preset::{Preset, Registrar};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

const ANONYMOUS: &str = "anonymous";

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// A handler registered for a named preset
#[derive(Clone)]
pub struct Registration {
    /// Who registered the handler, used in errors and logs
    pub label: String,
    pub handler: Arc<dyn PresetHandler>,
}

impl fmt::Debug for Registration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registration")
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

/// Name → ordered handler list
#[derive(Clone, Default)]
pub(crate) struct Registry {
    slots: HashMap<String, Vec<Registration>>,
}

impl Registry {
    fn handlers(&self, name: &str) -> &[Registration] {
        self.slots.get(name).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Ordered, asynchronous resolution of named configuration values.
///
/// Handlers are appended with `register*` (which needs `&mut self`) and
/// folded with `apply*` (which only needs `&self`), so the table is fully
/// populated before any resolution can start. Share a populated pipeline
/// behind an [`Arc`] to resolve from several tasks at once.
#[derive(Clone, Default)]
pub struct PresetPipeline {
    registry: Arc<Registry>,
}

impl PresetPipeline {
    /// Create an empty pipeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a pipeline with every preset installed in order.
    pub fn with_presets<'p>(presets: impl IntoIterator<Item = &'p dyn Preset>) -> Self {
        let mut pipeline = Self::new();
        for preset in presets {
            pipeline.add_preset(preset);
        }
        pipeline
    }

    /// Append a handler for `name`.
    ///
    /// Registering the same handler twice runs it twice.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        handler: impl PresetHandler + 'static,
    ) -> &mut Self {
        self.register_labeled(name, ANONYMOUS, handler)
    }

    /// Append a handler for `name`, attributing it to `label`.
    pub fn register_labeled(
        &mut self,
        name: impl Into<String>,
        label: impl Into<String>,
        handler: impl PresetHandler + 'static,
    ) -> &mut Self {
        self.register_arc(name, label, Arc::new(handler))
    }

    /// Append an already shared handler for `name`.
    pub fn register_arc(
        &mut self,
        name: impl Into<String>,
        label: impl Into<String>,
        handler: Arc<dyn PresetHandler>,
    ) -> &mut Self {
        let name = name.into();
        let label = label.into();
        tracing::trace!(name = %name, label = %label, "Registering preset handler");
        Arc::make_mut(&mut self.registry)
            .slots
            .entry(name)
            .or_default()
            .push(Registration { label, handler });
        self
    }

    /// Append an async closure as a handler for `name`.
    pub fn register_fn<F, Fut>(&mut self, name: impl Into<String>, f: F) -> &mut Self
    where
        F: Fn(Value, ResolutionContext) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Value>> + Send + 'static,
    {
        self.register(name, FnHandler::new(f))
    }

    /// Install every handler of a preset, labeled with the preset's name.
    pub fn add_preset(&mut self, preset: &dyn Preset) -> &mut Self {
        tracing::debug!(preset = preset.name(), "Installing preset");
        let mut registrar = Registrar::new(self, preset.name());
        preset.register(&mut registrar);
        self
    }

    /// Resolve `name` by folding its handlers over `default`.
    pub async fn apply(&self, name: &str, default: Value) -> Result<Value> {
        fold(Arc::clone(&self.registry), name.to_string(), default, Vec::new()).await
    }

    /// Resolve `name`, encoding the default and decoding the result as `T`.
    pub async fn apply_as<T>(&self, name: &str, default: T) -> Result<T>
    where
        T: Serialize + DeserializeOwned + Send,
    {
        let seed = encode(default)?;
        decode(name, self.apply(name, seed).await?)
    }

    /// Resolve a typed key.
    pub async fn resolve<T>(&self, key: &PresetKey<T>, default: T) -> Result<T>
    where
        T: Serialize + DeserializeOwned + Send,
    {
        self.apply_as(key.name(), default).await
    }

    /// A context for resolving from outside any handler chain.
    pub fn context(&self) -> ResolutionContext {
        ResolutionContext::new(Arc::clone(&self.registry), Vec::new())
    }

    /// Number of handlers registered for `name`.
    pub fn handler_count(&self, name: &str) -> usize {
        self.registry.handlers(name).len()
    }

    /// Labels of the handlers for `name`, in application order.
    pub fn labels(&self, name: &str) -> Vec<&str> {
        self.registry
            .handlers(name)
            .iter()
            .map(|r| r.label.as_str())
            .collect()
    }

    /// All names with at least one handler (sorted).
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.registry.slots.keys().map(|s| s.as_str()).collect();
        names.sort();
        names
    }

    /// Total number of registrations across all names.
    pub fn len(&self) -> usize {
        self.registry.slots.values().map(Vec::len).sum()
    }

    /// Check if nothing has been registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Debug for PresetPipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let counts: Vec<(&str, usize)> = self
            .names()
            .into_iter()
            .map(|name| (name, self.handler_count(name)))
            .collect();
        f.debug_struct("PresetPipeline")
            .field("slots", &counts)
            .finish()
    }
}

/// Fold the handlers for `name` over `default`.
///
/// `chain` holds the names already being resolved by the caller; finding
/// `name` in it means the resolution would never terminate.
pub(crate) fn fold(
    registry: Arc<Registry>,
    name: String,
    default: Value,
    mut chain: Vec<String>,
) -> BoxFuture<'static, Result<Value>> {
    Box::pin(async move {
        if chain.contains(&name) {
            chain.push(name.clone());
            tracing::debug!(name = %name, chain = ?chain, "Cyclic preset resolution");
            return Err(Error::CyclicResolution { name, chain });
        }

        chain.push(name.clone());
        let context = ResolutionContext::new(Arc::clone(&registry), chain);
        let handlers = registry.handlers(&name);
        tracing::debug!(
            name = %name,
            handlers = handlers.len(),
            depth = context.chain().len(),
            "Resolving preset"
        );

        let mut value = default;
        for (index, registration) in handlers.iter().enumerate() {
            tracing::trace!(
                name = %name,
                index,
                label = %registration.label,
                "Applying preset handler"
            );
            value = match registration.handler.apply(value, context.clone()).await {
                Ok(next) => next,
                Err(err) => {
                    tracing::debug!(
                        name = %name,
                        index,
                        label = %registration.label,
                        error = %err,
                        "Preset handler failed"
                    );
                    return Err(err.within(&name, index, &registration.label));
                }
            };
        }

        Ok(value)
    })
}

pub(crate) fn encode<T: Serialize>(value: T) -> Result<Value> {
    Ok(serde_json::to_value(value)?)
}

pub(crate) fn decode<T: DeserializeOwned>(name: &str, value: Value) -> Result<T> {
    serde_json::from_value(value).map_err(|source| Error::SlotType {
        name: name.to_string(),
        source,
    })
}
