//! Preset resolution pipeline for story tooling.
//!
//! A [`PresetPipeline`] holds an ordered list of handlers per named
//! configuration slot. Resolving a slot folds every handler registered for
//! it, in registration order, starting from a caller-supplied default:
//!
//! ```text
//! apply("addons", d) == h3(h2(h1(d)))
//! ```
//!
//! Handlers are asynchronous and receive a [`ResolutionContext`] that lets
//! them resolve other slots while guarding against cyclic resolution.
//!
//! # Example
//!
//! ```ignore
//! use serde_json::json;
//! use story_presets::PresetPipeline;
//!
//! let mut pipeline = PresetPipeline::new();
//! pipeline.register_fn("addons", |mut value, _ctx| async move {
//!     value.as_array_mut().unwrap().push(json!("@story/addon-docs"));
//!     Ok(value)
//! });
//!
//! let addons = pipeline.apply("addons", json!([])).await?;
//! assert_eq!(addons, json!(["@story/addon-docs"]));
//! ```

pub mod config;
pub mod context;
pub mod error;
pub mod handler;
pub mod key;
pub mod merge;
pub mod pipeline;
pub mod preset;

pub use config::{ConfigPreset, PresetConfig};
pub use context::ResolutionContext;
pub use error::{BoxError, Error, Result};
pub use handler::{FnHandler, PresetHandler};
pub use key::PresetKey;
pub use merge::{AppendHandler, MergeHandler, ReplaceHandler, deep_merge, spread};
pub use pipeline::{PresetPipeline, Registration};
pub use preset::{Preset, Registrar};
