//! Integration tests for the MDX plugin against a stub compiler.

use async_trait::async_trait;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use std::sync::Arc;
use story_builder::mdx::PROVIDER_IMPORT_SOURCE;
use story_builder::{Error, MdxCompiler, MdxPlugin, TransformOutput};
use story_presets::{BoxError, PresetConfig, PresetPipeline};
use story_test_utils::Recorder;

/// Records every call and echoes the options it was given.
struct EchoCompiler {
    calls: Recorder,
}

#[async_trait]
impl MdxCompiler for EchoCompiler {
    async fn compile(&self, src: &str, options: &Value) -> Result<String, BoxError> {
        self.calls.record(src);
        Ok(format!("/* {options} */\nexport default {:?};", src))
    }
}

struct BrokenCompiler;

#[async_trait]
impl MdxCompiler for BrokenCompiler {
    async fn compile(&self, _src: &str, _options: &Value) -> Result<String, BoxError> {
        Err("unexpected closing tag".into())
    }
}

fn pipeline_with(toml: &str) -> Arc<PresetPipeline> {
    let preset = PresetConfig::parse(toml).unwrap().into_preset("test");
    let mut pipeline = PresetPipeline::new();
    pipeline.add_preset(&preset);
    Arc::new(pipeline)
}

const DOCS_ADDON_CONFIG: &str = r#"
[[append.addons]]
name = "@story/addon-docs"

[append.addons.options.jsxOptions]
pragma = "h"

[append.addons.options.mdxPluginOptions]
transcludeMarkdown = true

[append.addons.options.mdxPluginOptions.mdxCompileOptions]
remarkPlugins = ["remark-gfm"]
"#;

#[tokio::test]
async fn test_transform_skips_non_mdx() {
    let calls = Recorder::new();
    let plugin = MdxPlugin::new(Arc::new(PresetPipeline::new())).await.unwrap();

    let out = plugin
        .transform("export default 1", "/src/Button.stories.tsx", &EchoCompiler {
            calls: calls.clone(),
        })
        .await
        .unwrap();

    assert_eq!(out, None);
    assert!(calls.is_empty());
}

#[tokio::test]
async fn test_plain_mdx_skips_csf() {
    let plugin = MdxPlugin::new(Arc::new(PresetPipeline::new())).await.unwrap();

    let options = plugin.compile_options("/docs/Intro.mdx").await.unwrap().unwrap();

    assert_eq!(
        options,
        json!({
            "skipCsf": true,
            "mdxCompileOptions": {"providerImportSource": PROVIDER_IMPORT_SOURCE}
        })
    );
}

#[tokio::test]
async fn test_story_mdx_keeps_csf() {
    let plugin = MdxPlugin::new(Arc::new(PresetPipeline::new())).await.unwrap();
    let options = plugin
        .compile_options("/src/Button.stories.mdx")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(options["skipCsf"], json!(false));
}

#[tokio::test]
async fn test_docs_addon_options_feed_defaults() {
    let plugin = MdxPlugin::new(pipeline_with(DOCS_ADDON_CONFIG)).await.unwrap();

    assert_eq!(
        plugin.loader_defaults(),
        json!({
            "transcludeMarkdown": true,
            "mdxCompileOptions": {
                "providerImportSource": PROVIDER_IMPORT_SOURCE,
                "remarkPlugins": ["remark-gfm"]
            },
            "jsxOptions": {"pragma": "h"}
        })
    );
}

#[tokio::test]
async fn test_loader_options_preset_overrides_defaults() {
    let toml = format!(
        "{DOCS_ADDON_CONFIG}\n{}",
        r#"
[merge.mdxLoaderOptions]
skipCsf = false

[merge.mdxLoaderOptions.mdxCompileOptions]
providerImportSource = "custom-shim"
"#
    );
    let plugin = MdxPlugin::new(pipeline_with(&toml)).await.unwrap();

    let options = plugin.compile_options("/docs/Intro.mdx").await.unwrap().unwrap();

    assert_eq!(options["skipCsf"], json!(false));
    assert_eq!(
        options["mdxCompileOptions"],
        json!({"providerImportSource": "custom-shim", "remarkPlugins": ["remark-gfm"]})
    );
    assert_eq!(options["jsxOptions"], json!({"pragma": "h"}));
}

#[tokio::test]
async fn test_transform_forwards_source_and_options() {
    let calls = Recorder::new();
    let compiler = EchoCompiler {
        calls: calls.clone(),
    };
    let plugin = MdxPlugin::new(Arc::new(PresetPipeline::new())).await.unwrap();

    let out = plugin
        .transform("# Hello", "/docs/Intro.mdx", &compiler)
        .await
        .unwrap()
        .expect("mdx should be transformed");

    assert_eq!(calls.events(), vec!["# Hello"]);
    assert!(out.code.contains("\"skipCsf\":true"), "{}", out.code);
    assert_eq!(out.map, None);
}

#[tokio::test]
async fn test_transform_with_dyn_compiler() {
    let compiler: Arc<dyn MdxCompiler> = Arc::new(EchoCompiler {
        calls: Recorder::new(),
    });
    let plugin = MdxPlugin::new(Arc::new(PresetPipeline::new())).await.unwrap();

    let out = plugin
        .transform("# Hi", "/docs/Hi.md", compiler.as_ref())
        .await
        .unwrap();

    assert!(matches!(out, Some(TransformOutput { .. })));
}

#[tokio::test]
async fn test_compiler_failure_names_module() {
    let plugin = MdxPlugin::new(Arc::new(PresetPipeline::new())).await.unwrap();

    let err = plugin
        .transform("<div>", "/docs/Broken.mdx", &BrokenCompiler)
        .await
        .unwrap_err();

    match err {
        Error::Compile { id, source } => {
            assert_eq!(id, "/docs/Broken.mdx");
            assert_eq!(source.to_string(), "unexpected closing tag");
        }
        other => panic!("expected Compile error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_failing_addons_handler_fails_plugin_creation() {
    let mut pipeline = PresetPipeline::new();
    pipeline.register_fn("addons", |_, _| async move {
        Err::<Value, _>(story_presets::Error::handler("addons unavailable"))
    });

    let result = MdxPlugin::new(Arc::new(pipeline)).await;
    assert!(matches!(result, Err(Error::Presets(_))));
}

#[tokio::test]
async fn test_non_list_addons_yields_default_options() {
    let mut pipeline = PresetPipeline::new();
    pipeline.register_fn("addons", |_, _| async move { Ok(json!({"not": "a list"})) });

    let plugin = MdxPlugin::new(Arc::new(pipeline)).await.unwrap();
    assert_eq!(
        plugin.loader_defaults(),
        json!({"mdxCompileOptions": {"providerImportSource": PROVIDER_IMPORT_SOURCE}})
    );
}

#[tokio::test]
async fn test_null_addons_yields_default_options() {
    let mut pipeline = PresetPipeline::new();
    pipeline.register_fn("addons", |_, _| async move { Ok(Value::Null) });

    let plugin = MdxPlugin::new(Arc::new(pipeline)).await.unwrap();

    assert_eq!(
        plugin.loader_defaults(),
        json!({"mdxCompileOptions": {"providerImportSource": PROVIDER_IMPORT_SOURCE}})
    );
}

#[tokio::test]
async fn test_malformed_addon_entries_are_skipped() {
    let mut pipeline = PresetPipeline::new();
    pipeline.register_fn("addons", |_, _| async move {
        Ok(json!([
            {"options": {"jsxOptions": {"pragma": "stray"}}},
            "@story/addon-links",
            {"name": "@story/addon-docs", "options": {"jsxOptions": {"pragma": "h"}}}
        ]))
    });

    let plugin = MdxPlugin::new(Arc::new(pipeline)).await.unwrap();

    assert_eq!(plugin.loader_defaults()["jsxOptions"], json!({"pragma": "h"}));
}
