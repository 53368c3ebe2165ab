//! Error types for story-cli

use std::path::PathBuf;

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from story-presets
    #[error(transparent)]
    Presets(#[from] story_presets::Error),

    /// Error from story-builder
    #[error(transparent)]
    Builder(#[from] story_builder::Error),

    /// A presets.toml layer could not be parsed
    #[error("Invalid preset config at {}: {source}", .path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: story_presets::Error,
    },

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// User-facing error with a message
    #[error("{message}")]
    User { message: String },
}

impl CliError {
    /// Create a new user error with the given message
    pub fn user(message: impl Into<String>) -> Self {
        Self::User {
            message: message.into(),
        }
    }
}
