//! MDX transform plugin
//!
//! Two kinds of MDX module go through the same plugin:
//!
//! - `*stories.mdx` and `*story.mdx` are compiled together with their CSF
//!   stories
//! - any other `*.md`/`*.mdx` is compiled as plain MDX (`skipCsf: true`)
//!
//! The compiler itself is external; this plugin only decides which modules
//! it handles and what options the compiler receives.

use crate::addons::{ADDONS, DOCS_ADDON, addon_options};
use crate::error::{Error, Result};
use async_trait::async_trait;
use regex::Regex;
use serde_json::{Value, json};
use std::sync::{Arc, LazyLock};
use story_presets::{BoxError, PresetPipeline, spread};

/// Plugin name reported to the bundler
pub const PLUGIN_NAME: &str = "story:mdx-plugin";

/// Preset consulted for the final compile options
pub const MDX_LOADER_OPTIONS: &str = "mdxLoaderOptions";

/// Default `providerImportSource` passed to the compiler
pub const PROVIDER_IMPORT_SOURCE: &str = "@story/addon-docs/mdx-react-shim";

static INCLUDE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\.mdx?$").unwrap());

/// When the bundler should run the plugin relative to its core plugins
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Enforce {
    Pre,
    Post,
}

/// External MDX-to-JS compiler
#[async_trait]
pub trait MdxCompiler: Send + Sync {
    async fn compile(&self, src: &str, options: &Value) -> std::result::Result<String, BoxError>;
}

/// Result of transforming one module
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformOutput {
    pub code: String,
    /// Source map; the compiler does not produce one yet
    pub map: Option<String>,
}

/// Whether the plugin transforms the module `id`.
///
/// Virtual modules (ids containing `\0`) are never handled.
pub fn handles(id: &str) -> bool {
    !id.contains('\0') && INCLUDE.is_match(id)
}

/// Whether `id` is an MDX file that also declares stories.
pub fn is_story_mdx(id: &str) -> bool {
    id.ends_with("stories.mdx") || id.ends_with("story.mdx")
}

/// Transforms MDX modules using options resolved through the preset pipeline
pub struct MdxPlugin {
    pipeline: Arc<PresetPipeline>,
    /// `mdxPluginOptions` of the docs addon
    plugin_options: Value,
    /// `jsxOptions` of the docs addon
    jsx_options: Option<Value>,
}

impl MdxPlugin {
    /// Create the plugin, reading the docs addon's options from `addons`.
    pub async fn new(pipeline: Arc<PresetPipeline>) -> Result<Self> {
        let addons = pipeline.apply(ADDONS.name(), json!([])).await?;
        let options = addon_options(&addons, DOCS_ADDON);

        let plugin_options = options.get("mdxPluginOptions").cloned().unwrap_or(Value::Null);
        let jsx_options = options.get("jsxOptions").filter(|v| !v.is_null()).cloned();
        tracing::debug!(
            addons = addons.as_array().map_or(0, Vec::len),
            has_plugin_options = !plugin_options.is_null(),
            has_jsx_options = jsx_options.is_some(),
            "Created MDX plugin"
        );

        Ok(Self {
            pipeline,
            plugin_options,
            jsx_options,
        })
    }

    pub fn name(&self) -> &'static str {
        PLUGIN_NAME
    }

    pub fn enforce(&self) -> Enforce {
        Enforce::Pre
    }

    /// Default for the `mdxLoaderOptions` preset.
    ///
    /// The docs addon's plugin options, with `mdxCompileOptions` layered over
    /// the default provider import source and the addon's `jsxOptions`.
    pub fn loader_defaults(&self) -> Value {
        let user_compile = self
            .plugin_options
            .get("mdxCompileOptions")
            .unwrap_or(&Value::Null);
        let compile = spread(
            json!({ "providerImportSource": PROVIDER_IMPORT_SOURCE }),
            user_compile,
        );

        let mut defaults = spread(Value::Null, &self.plugin_options);
        if let Value::Object(map) = &mut defaults {
            map.insert("mdxCompileOptions".to_string(), compile);
            match &self.jsx_options {
                Some(jsx) => {
                    map.insert("jsxOptions".to_string(), jsx.clone());
                }
                None => {
                    map.remove("jsxOptions");
                }
            }
        }
        defaults
    }

    /// Options the compiler receives for `id`, or `None` if the plugin
    /// does not handle it.
    ///
    /// `skipCsf` is derived from the file name; a `skipCsf` in the resolved
    /// `mdxLoaderOptions` overrides it.
    pub async fn compile_options(&self, id: &str) -> Result<Option<Value>> {
        if !handles(id) {
            tracing::trace!(id, "Skipping module");
            return Ok(None);
        }

        let loader_options = self
            .pipeline
            .apply(MDX_LOADER_OPTIONS, self.loader_defaults())
            .await?;

        Ok(Some(spread(
            json!({ "skipCsf": !is_story_mdx(id) }),
            &loader_options,
        )))
    }

    /// Compile `src` with the external compiler, or return `None` if the
    /// plugin does not handle `id`.
    pub async fn transform<C>(
        &self,
        src: &str,
        id: &str,
        compiler: &C,
    ) -> Result<Option<TransformOutput>>
    where
        C: MdxCompiler + ?Sized,
    {
        let Some(options) = self.compile_options(id).await? else {
            return Ok(None);
        };

        tracing::debug!(id, "Compiling MDX module");
        let code = compiler
            .compile(src, &options)
            .await
            .map_err(|source| Error::Compile {
                id: id.to_string(),
                source,
            })?;

        Ok(Some(TransformOutput { code, map: None }))
    }
}
