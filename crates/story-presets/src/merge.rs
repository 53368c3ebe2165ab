//! Value merging and the built-in handlers built on it

use crate::context::ResolutionContext;
use crate::error::{Error, Result};
use crate::handler::PresetHandler;
use async_trait::async_trait;
use serde_json::{Map, Value};

/// Deep merge two JSON values
///
/// If both values are objects, merge them recursively with `overlay` taking
/// precedence. Otherwise, `overlay` replaces `base`.
pub fn deep_merge(base: &mut Value, overlay: &Value) {
    match (base, overlay) {
        (Value::Object(base_map), Value::Object(overlay_map)) => {
            for (key, overlay_val) in overlay_map {
                if let Some(base_val) = base_map.get_mut(key) {
                    deep_merge(base_val, overlay_val);
                } else {
                    base_map.insert(key.clone(), overlay_val.clone());
                }
            }
        }
        (base, overlay) => {
            *base = overlay.clone();
        }
    }
}

/// Shallow object spread, `{ ...base, ...overlay }`
///
/// Top-level keys of `overlay` replace those of `base` wholesale. A
/// non-object `overlay` contributes nothing; a non-object `base` starts out
/// empty.
pub fn spread(base: Value, overlay: &Value) -> Value {
    let mut map = match base {
        Value::Object(map) => map,
        _ => Map::new(),
    };
    if let Value::Object(overlay_map) = overlay {
        for (key, val) in overlay_map {
            map.insert(key.clone(), val.clone());
        }
    }
    Value::Object(map)
}

/// Extend a list value; `null` counts as an empty list.
///
/// Returns `None` when `base` is neither.
pub fn append(base: Value, items: &[Value]) -> Option<Value> {
    let mut list = match base {
        Value::Array(list) => list,
        Value::Null => Vec::new(),
        _ => return None,
    };
    list.extend(items.iter().cloned());
    Some(Value::Array(list))
}

/// Deep-merges a fixed value into the preset
#[derive(Debug, Clone)]
pub struct MergeHandler(pub Value);

#[async_trait]
impl PresetHandler for MergeHandler {
    async fn apply(&self, mut value: Value, _context: ResolutionContext) -> Result<Value> {
        deep_merge(&mut value, &self.0);
        Ok(value)
    }
}

/// Appends fixed items to a list preset
#[derive(Debug, Clone)]
pub struct AppendHandler(pub Vec<Value>);

#[async_trait]
impl PresetHandler for AppendHandler {
    async fn apply(&self, value: Value, context: ResolutionContext) -> Result<Value> {
        append(value, &self.0).ok_or_else(|| Error::NotAList {
            name: context.current().unwrap_or_default().to_string(),
        })
    }
}

/// Replaces the preset with a fixed value
#[derive(Debug, Clone)]
pub struct ReplaceHandler(pub Value);

#[async_trait]
impl PresetHandler for ReplaceHandler {
    async fn apply(&self, _value: Value, _context: ResolutionContext) -> Result<Value> {
        Ok(self.0.clone())
    }
}
