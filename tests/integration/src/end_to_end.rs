//! End-to-end tests across the preset pipeline and its builder consumers
//!
//! These exercise the complete flow: presets installed in order -> addons
//! resolved -> MDX plugin created -> many modules transformed concurrently.

use async_trait::async_trait;
use serde_json::{Value, json};
use std::sync::Arc;
use std::time::Duration;
use story_builder::{DocsPreset, MdxCompiler, MdxPlugin};
use story_presets::{BoxError, Error, Preset, PresetConfig, PresetPipeline, Registrar};
use story_test_utils::Recorder;

/// Compiler that returns the options it saw, so tests can inspect them.
struct OptionsCompiler;

#[async_trait]
impl MdxCompiler for OptionsCompiler {
    async fn compile(&self, _src: &str, options: &Value) -> Result<String, BoxError> {
        tokio::time::sleep(Duration::from_millis(2)).await;
        Ok(options.to_string())
    }
}

/// An addon preset whose MDX options depend on another preset.
struct JsxAddon {
    calls: Recorder,
}

impl Preset for JsxAddon {
    fn name(&self) -> &str {
        "addon-jsx"
    }

    fn register(&self, registrar: &mut Registrar<'_>) {
        registrar.register_fn("jsxPragma", |_, _| async move { Ok(json!("h")) });

        let calls = self.calls.clone();
        registrar.register_fn("mdxLoaderOptions", move |mut options, ctx| {
            let calls = calls.clone();
            async move {
                calls.record("mdxLoaderOptions");
                tokio::task::yield_now().await;
                let pragma = ctx.apply("jsxPragma", json!("React.createElement")).await?;
                options["jsxOptions"] = json!({ "pragma": pragma });
                Ok::<_, Error>(options)
            }
        });
    }
}

fn project_config() -> PresetConfig {
    PresetConfig::parse(
        r#"
[[append.addons]]
name = "@story/addon-docs"

[append.addons.options.mdxPluginOptions.mdxCompileOptions]
remarkPlugins = ["remark-gfm"]

[merge.mdxLoaderOptions.mdxCompileOptions]
development = true
"#,
    )
    .unwrap()
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_full_flow_with_concurrent_transforms() {
    let calls = Recorder::new();
    let docs = DocsPreset::vue3();
    let addon = JsxAddon {
        calls: calls.clone(),
    };
    let project = project_config().into_preset("project");

    let pipeline = Arc::new(PresetPipeline::with_presets([
        &docs as &dyn Preset,
        &addon,
        &project,
    ]));
    let plugin = Arc::new(MdxPlugin::new(Arc::clone(&pipeline)).await.unwrap());

    let ids: Vec<String> = (0..12)
        .map(|i| {
            if i % 2 == 0 {
                format!("/src/C{i}.stories.mdx")
            } else {
                format!("/docs/Page{i}.mdx")
            }
        })
        .collect();

    let tasks: Vec<_> = ids
        .iter()
        .cloned()
        .map(|id| {
            let plugin = Arc::clone(&plugin);
            tokio::spawn(async move {
                let out = plugin.transform("# Title", &id, &OptionsCompiler).await;
                (id, out)
            })
        })
        .collect();

    for task in tasks {
        let (id, out) = task.await.unwrap();
        let out = out.unwrap().expect("mdx module should be transformed");
        let options: Value = serde_json::from_str(&out.code).unwrap();

        assert_eq!(options["skipCsf"], json!(!id.ends_with("stories.mdx")), "{id}");
        assert_eq!(options["jsxOptions"], json!({"pragma": "h"}), "{id}");
        assert_eq!(
            options["mdxCompileOptions"],
            json!({
                "providerImportSource": "@story/addon-docs/mdx-react-shim",
                "remarkPlugins": ["remark-gfm"],
                "development": true
            }),
            "{id}"
        );
    }

    // No caching: every transform re-runs the chain
    assert_eq!(calls.len(), ids.len());

    // Docs contributions are untouched by MDX resolution
    let decorators = pipeline.apply("decorators", json!([])).await.unwrap();
    assert_eq!(decorators, json!(["vue3:sourceDecorator"]));
}

#[tokio::test]
async fn test_failing_addon_aborts_transform() {
    struct Broken;

    impl Preset for Broken {
        fn name(&self) -> &str {
            "broken-addon"
        }

        fn register(&self, registrar: &mut Registrar<'_>) {
            registrar.register_fn("mdxLoaderOptions", |_, _| async move {
                Err::<Value, _>(Error::handler("cannot load remark plugin"))
            });
        }
    }

    let pipeline = Arc::new(PresetPipeline::with_presets([&Broken as &dyn Preset]));
    let plugin = MdxPlugin::new(pipeline).await.unwrap();

    let err = plugin
        .transform("# Title", "/docs/Intro.mdx", &OptionsCompiler)
        .await
        .unwrap_err();

    let message = err.to_string();
    assert!(message.contains("broken-addon"), "{message}");
    assert!(message.contains("mdxLoaderOptions"), "{message}");
    assert!(message.contains("cannot load remark plugin"), "{message}");
}
