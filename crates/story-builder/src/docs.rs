//! Per-framework docs presets
//!
//! A docs preset contributes three presets consumed by the docs renderer:
//! `parameters` (deep-merged), `decorators` and `argTypesEnhancers`
//! (appended). Callbacks are referenced by `"<module>:<export>"` strings;
//! loading them is the renderer's job.

use serde_json::{Value, json};
use story_presets::{AppendHandler, MergeHandler, Preset, PresetKey, Registrar};

pub const PARAMETERS: PresetKey<Value> = PresetKey::new("parameters");
pub const DECORATORS: PresetKey<Vec<String>> = PresetKey::new("decorators");
pub const ARG_TYPES_ENHANCERS: PresetKey<Vec<String>> = PresetKey::new("argTypesEnhancers");

/// Frameworks with a built-in docs preset
pub const FRAMEWORKS: &[&str] = &["vue3"];

/// Docs configuration registered by a renderer framework
#[derive(Debug, Clone)]
pub struct DocsPreset {
    name: String,
    parameters: Value,
    decorators: Vec<String>,
    arg_types_enhancers: Vec<String>,
}

impl DocsPreset {
    /// An empty docs preset for `framework`.
    pub fn new(framework: &str) -> Self {
        Self {
            name: format!("{framework}:docs"),
            parameters: Value::Null,
            decorators: Vec::new(),
            arg_types_enhancers: Vec::new(),
        }
    }

    /// The built-in preset for `framework`, if there is one.
    pub fn for_framework(framework: &str) -> Option<Self> {
        match framework {
            "vue3" => Some(Self::vue3()),
            _ => None,
        }
    }

    /// Vue 3: inline stories, Vue-aware arg type extraction and the source
    /// decorator.
    pub fn vue3() -> Self {
        Self::new("vue3")
            .with_parameters(json!({
                "docs": {
                    "inlineStories": true,
                    "extractArgTypes": "vue3:extractArgTypes",
                    "extractComponentDescription": "docs-tools:extractComponentDescription",
                }
            }))
            .with_decorator("vue3:sourceDecorator")
            .with_arg_types_enhancer("docs-tools:enhanceArgTypes")
    }

    pub fn with_parameters(mut self, parameters: Value) -> Self {
        self.parameters = parameters;
        self
    }

    pub fn with_decorator(mut self, decorator: impl Into<String>) -> Self {
        self.decorators.push(decorator.into());
        self
    }

    pub fn with_arg_types_enhancer(mut self, enhancer: impl Into<String>) -> Self {
        self.arg_types_enhancers.push(enhancer.into());
        self
    }
}

fn strings(items: &[String]) -> Vec<Value> {
    items.iter().map(|s| Value::String(s.clone())).collect()
}

impl Preset for DocsPreset {
    fn name(&self) -> &str {
        &self.name
    }

    fn register(&self, registrar: &mut Registrar<'_>) {
        if !self.parameters.is_null() {
            registrar.register(PARAMETERS.name(), MergeHandler(self.parameters.clone()));
        }
        if !self.decorators.is_empty() {
            registrar.register(DECORATORS.name(), AppendHandler(strings(&self.decorators)));
        }
        if !self.arg_types_enhancers.is_empty() {
            registrar.register(
                ARG_TYPES_ENHANCERS.name(),
                AppendHandler(strings(&self.arg_types_enhancers)),
            );
        }
    }
}
