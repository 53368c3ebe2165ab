//! PresetHandler trait and closure adapter

use crate::Result;
use crate::context::ResolutionContext;
use async_trait::async_trait;
use serde_json::Value;
use std::future::Future;

/// A step in the resolution chain of a named preset.
///
/// Receives the value produced by every earlier handler for the same name
/// and returns the value passed to the next one. Use the context to resolve
/// other presets this one depends on.
#[async_trait]
pub trait PresetHandler: Send + Sync {
    async fn apply(&self, value: Value, context: ResolutionContext) -> Result<Value>;
}

/// Adapts an async closure into a [`PresetHandler`]
pub struct FnHandler<F> {
    f: F,
}

impl<F> FnHandler<F> {
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

#[async_trait]
impl<F, Fut> PresetHandler for FnHandler<F>
where
    F: Fn(Value, ResolutionContext) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<Value>> + Send + 'static,
{
    async fn apply(&self, value: Value, context: ResolutionContext) -> Result<Value> {
        (self.f)(value, context).await
    }
}
