//! Presets defined in TOML
//!
//! A `presets.toml` file describes fixed contributions to named presets:
//!
//! ```toml
//! [replace]
//! staticDirs = ["public"]
//!
//! [merge.mdxLoaderOptions.mdxCompileOptions]
//! providerImportSource = "custom-shim"
//!
//! [append]
//! addons = ["@story/addon-links"]
//! ```
//!
//! Each section becomes one handler per preset name, applied in the order
//! replace, merge, append.

use crate::Result;
use crate::merge::{AppendHandler, MergeHandler, ReplaceHandler};
use crate::preset::{Preset, Registrar};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::{BTreeMap, BTreeSet};

/// Parsed contents of a single `presets.toml`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PresetConfig {
    /// Values that replace the preset outright
    #[serde(default)]
    pub replace: BTreeMap<String, Value>,

    /// Values deep-merged into the preset
    #[serde(default)]
    pub merge: BTreeMap<String, Value>,

    /// Items appended to a list preset
    #[serde(default)]
    pub append: BTreeMap<String, Vec<Value>>,
}

impl PresetConfig {
    /// Parse a preset config from TOML content
    ///
    /// # Example
    ///
    /// ```
    /// use story_presets::PresetConfig;
    ///
    /// let config = PresetConfig::parse(r#"
    /// [append]
    /// addons = ["@story/addon-links"]
    /// "#).unwrap();
    ///
    /// assert_eq!(config.slots(), vec!["addons"]);
    /// ```
    pub fn parse(content: &str) -> Result<Self> {
        let config: PresetConfig = toml::from_str(content)?;
        Ok(config)
    }

    /// Every preset name this config contributes to (sorted)
    pub fn slots(&self) -> Vec<&str> {
        let names: BTreeSet<&str> = self
            .replace
            .keys()
            .chain(self.merge.keys())
            .chain(self.append.keys())
            .map(String::as_str)
            .collect();
        names.into_iter().collect()
    }

    pub fn is_empty(&self) -> bool {
        self.replace.is_empty() && self.merge.is_empty() && self.append.is_empty()
    }

    /// Turn this config into a preset named after its source
    pub fn into_preset(self, name: impl Into<String>) -> ConfigPreset {
        ConfigPreset {
            name: name.into(),
            config: self,
        }
    }
}

/// A [`PresetConfig`] installed as a preset
#[derive(Debug, Clone)]
pub struct ConfigPreset {
    name: String,
    config: PresetConfig,
}

impl ConfigPreset {
    pub fn config(&self) -> &PresetConfig {
        &self.config
    }
}

impl Preset for ConfigPreset {
    fn name(&self) -> &str {
        &self.name
    }

    fn register(&self, registrar: &mut Registrar<'_>) {
        for slot in self.config.slots() {
            if let Some(value) = self.config.replace.get(slot) {
                registrar.register(slot, ReplaceHandler(value.clone()));
            }
            if let Some(value) = self.config.merge.get(slot) {
                registrar.register(slot, MergeHandler(value.clone()));
            }
            if let Some(items) = self.config.append.get(slot) {
                registrar.register(slot, AppendHandler(items.clone()));
            }
        }
    }
}
