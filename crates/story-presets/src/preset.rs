//! Preset bundles

use crate::Result;
use crate::context::ResolutionContext;
use crate::handler::{FnHandler, PresetHandler};
use crate::pipeline::PresetPipeline;
use serde_json::Value;
use std::future::Future;
use std::sync::Arc;

/// A named unit that contributes handlers to one or more presets.
///
/// Presets are installed in list order, so a preset installed later sees the
/// values produced by the ones before it.
pub trait Preset: Send + Sync {
    fn name(&self) -> &str;
    fn register(&self, registrar: &mut Registrar<'_>);
}

/// Registers handlers on behalf of a preset, labeling each with its name
pub struct Registrar<'a> {
    pipeline: &'a mut PresetPipeline,
    label: String,
}

impl<'a> Registrar<'a> {
    pub(crate) fn new(pipeline: &'a mut PresetPipeline, label: impl Into<String>) -> Self {
        Self {
            pipeline,
            label: label.into(),
        }
    }

    /// Label applied to every registration made through this registrar
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn register(
        &mut self,
        name: impl Into<String>,
        handler: impl PresetHandler + 'static,
    ) -> &mut Self {
        self.pipeline.register_labeled(name, self.label.clone(), handler);
        self
    }

    pub fn register_arc(
        &mut self,
        name: impl Into<String>,
        handler: Arc<dyn PresetHandler>,
    ) -> &mut Self {
        self.pipeline.register_arc(name, self.label.clone(), handler);
        self
    }

    pub fn register_fn<F, Fut>(&mut self, name: impl Into<String>, f: F) -> &mut Self
    where
        F: Fn(Value, ResolutionContext) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Value>> + Send + 'static,
    {
        self.register(name, FnHandler::new(f))
    }
}
