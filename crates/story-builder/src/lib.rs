//! Builder-side consumers of the story preset pipeline.
//!
//! - [`addons`]: addon entries and per-addon option lookup
//! - [`mdx`]: the MDX transform plugin, which resolves its compile options
//!   through the pipeline and forwards source text to an external compiler
//! - [`docs`]: per-framework docs presets

pub mod addons;
pub mod docs;
pub mod error;
pub mod mdx;

pub use addons::{ADDONS, AddonEntry, addon_options};
pub use docs::DocsPreset;
pub use error::{Error, Result};
pub use mdx::{Enforce, MdxCompiler, MdxPlugin, TransformOutput};
