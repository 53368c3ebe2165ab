//! Error types for story-builder

use story_presets::BoxError;

/// Result type for builder operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in builder operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Preset resolution failed
    #[error(transparent)]
    Presets(#[from] story_presets::Error),

    /// The external compiler rejected a module
    #[error("Failed to compile {id}: {source}")]
    Compile {
        id: String,
        #[source]
        source: BoxError,
    },
}
