//! Pipeline assembly for a CLI invocation

use crate::config::ConfigLoader;
use crate::error::{CliError, Result};
use std::path::PathBuf;
use story_builder::DocsPreset;
use story_builder::docs::FRAMEWORKS;
use story_presets::PresetPipeline;

/// Framework value that disables the docs preset
pub const NO_FRAMEWORK: &str = "none";

/// Where presets come from for one invocation
#[derive(Debug, Clone)]
pub struct CliContext {
    pub project_root: PathBuf,
    pub config_dir: Option<PathBuf>,
    pub framework: String,
}

impl CliContext {
    fn loader(&self) -> ConfigLoader {
        match &self.config_dir {
            Some(dir) => ConfigLoader::with_global_config_dir(&self.project_root, dir.clone()),
            None => ConfigLoader::new(&self.project_root),
        }
    }

    fn docs_preset(&self) -> Result<Option<DocsPreset>> {
        if self.framework == NO_FRAMEWORK {
            return Ok(None);
        }
        DocsPreset::for_framework(&self.framework)
            .map(Some)
            .ok_or_else(|| {
                CliError::user(format!(
                    "Unknown framework '{}'. Valid: {}, {}",
                    self.framework,
                    FRAMEWORKS.join(", "),
                    NO_FRAMEWORK
                ))
            })
    }

    /// Build the pipeline: the framework docs preset first, then every
    /// config layer in order.
    pub fn pipeline(&self) -> Result<PresetPipeline> {
        let mut pipeline = PresetPipeline::new();
        if let Some(docs) = self.docs_preset()? {
            pipeline.add_preset(&docs);
        }
        for layer in self.loader().load()? {
            pipeline.add_preset(&layer);
        }
        tracing::debug!(registrations = pipeline.len(), "Built preset pipeline");
        Ok(pipeline)
    }
}
