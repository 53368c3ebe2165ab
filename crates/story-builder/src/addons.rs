//! Addon entries as they appear in the `addons` preset

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use story_presets::PresetKey;

/// The list of addons installed in a project.
pub const ADDONS: PresetKey<Vec<AddonEntry>> = PresetKey::new("addons");

/// The addon that carries MDX and JSX options for the MDX plugin.
pub const DOCS_ADDON: &str = "@story/addon-docs";

/// One entry of the `addons` list: either a bare name or a name with options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AddonEntry {
    Name(String),
    WithOptions {
        name: String,
        #[serde(default)]
        options: Value,
    },
}

impl AddonEntry {
    pub fn name(&self) -> &str {
        match self {
            Self::Name(name) | Self::WithOptions { name, .. } => name,
        }
    }
}

impl From<&str> for AddonEntry {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

/// Options of the first object entry of `addons` named `name`.
///
/// `addons` is the raw `addons` slot. A `null` or non-list slot has no
/// entries. Bare names and entries without a string `name` are skipped.
/// Returns an empty object when nothing matches or the matching entry has
/// no options.
pub fn addon_options(addons: &Value, name: &str) -> Value {
    addons
        .as_array()
        .into_iter()
        .flatten()
        .find(|addon| addon.get("name").and_then(Value::as_str) == Some(name))
        .and_then(|addon| addon.get("options"))
        .filter(|options| !options.is_null())
        .cloned()
        .unwrap_or_else(|| Value::Object(Map::new()))
}
