//! Layered presets.toml loading
//!
//! Preset configuration is loaded from up to three layers, each installed
//! as its own preset so later layers are applied after (and win over)
//! earlier ones:
//!
//! 1. Global (`<config_dir>/story-presets/presets.toml`)
//! 2. Project (`<root>/.story/presets.toml`)
//! 3. Local overrides (`<root>/.story/presets.local.toml`) - git-ignored

use crate::error::{CliError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use story_presets::{ConfigPreset, PresetConfig};

/// Name of the directory under the platform config dir
pub const GLOBAL_DIR_NAME: &str = "story-presets";

/// Per-project directory holding preset configs
pub const PROJECT_DIR_NAME: &str = ".story";

const CONFIG_FILE: &str = "presets.toml";
const LOCAL_CONFIG_FILE: &str = "presets.local.toml";

/// Loads preset config layers for a project
pub struct ConfigLoader {
    root: PathBuf,

    /// Override for the global config directory.
    /// When `None`, the platform-appropriate directory is used via `dirs::config_dir()`.
    global_config_dir_override: Option<PathBuf>,
}

impl ConfigLoader {
    /// Create a loader for the project at `root`
    ///
    /// Uses the platform-appropriate global config directory:
    /// - Linux: `~/.config/story-presets/`
    /// - macOS: `~/Library/Application Support/story-presets/`
    /// - Windows: `%APPDATA%\story-presets\`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            global_config_dir_override: None,
        }
    }

    /// Create a loader reading the global layer from `global_config_dir`.
    pub fn with_global_config_dir(root: impl Into<PathBuf>, global_config_dir: PathBuf) -> Self {
        Self {
            root: root.into(),
            global_config_dir_override: Some(global_config_dir),
        }
    }

    fn global_config_dir(&self) -> Option<PathBuf> {
        if let Some(ref override_dir) = self.global_config_dir_override {
            return Some(override_dir.clone());
        }
        dirs::config_dir().map(|d| d.join(GLOBAL_DIR_NAME))
    }

    /// Candidate layer files with their labels, in application order
    pub fn layer_paths(&self) -> Vec<(&'static str, PathBuf)> {
        let mut layers = Vec::with_capacity(3);
        if let Some(global_dir) = self.global_config_dir() {
            layers.push(("global", global_dir.join(CONFIG_FILE)));
        }
        let project_dir = self.root.join(PROJECT_DIR_NAME);
        layers.push(("project", project_dir.join(CONFIG_FILE)));
        layers.push(("local", project_dir.join(LOCAL_CONFIG_FILE)));
        layers
    }

    /// Load every existing layer as a preset.
    ///
    /// Missing layers are skipped. Invalid TOML in any layer is an error.
    pub fn load(&self) -> Result<Vec<ConfigPreset>> {
        let mut presets = Vec::new();
        for (label, path) in self.layer_paths() {
            if !path.is_file() {
                tracing::debug!(?path, layer = label, "No preset config found, skipping");
                continue;
            }
            tracing::debug!(?path, layer = label, "Loading preset config");
            presets.push(load_layer(label, &path)?);
        }
        Ok(presets)
    }
}

fn load_layer(label: &str, path: &Path) -> Result<ConfigPreset> {
    let content = fs::read_to_string(path)?;
    let config = PresetConfig::parse(&content).map_err(|source| CliError::Config {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(config.into_preset(label))
}
