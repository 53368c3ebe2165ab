//! Error types for story-presets

/// Boxed error accepted from handlers and external collaborators
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Result type for preset operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while registering or resolving presets
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A registered handler failed; no later handler in the chain ran
    #[error("Preset handler #{index} ({label}) for '{name}' failed: {source}")]
    HandlerFailed {
        name: String,
        index: usize,
        label: String,
        #[source]
        source: Box<Error>,
    },

    /// A slot was requested while it was already being resolved
    #[error("Cyclic resolution of preset '{name}': {}", .chain.join(" -> "))]
    CyclicResolution { name: String, chain: Vec<String> },

    /// Error raised by handler code
    #[error("{message}")]
    Handler { message: String },

    /// A list slot held something other than a list
    #[error("Preset '{name}' does not hold a list")]
    NotAList { name: String },

    /// A resolved value could not be decoded as the requested type
    #[error("Preset '{name}' has an unexpected shape: {source}")]
    SlotType {
        name: String,
        #[source]
        source: serde_json::Error,
    },

    /// Arbitrary error from handler code
    #[error(transparent)]
    Other(BoxError),

    /// JSON serialization/deserialization error
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// TOML deserialization error
    #[error(transparent)]
    TomlDe(#[from] toml::de::Error),
}

impl Error {
    /// Create a handler error with the given message
    pub fn handler(message: impl Into<String>) -> Self {
        Self::Handler {
            message: message.into(),
        }
    }

    /// Wrap an arbitrary error raised by handler code
    pub fn other(err: impl Into<BoxError>) -> Self {
        Self::Other(err.into())
    }

    /// Attribute an error to the handler at `index` of the chain for `name`.
    ///
    /// Failures from nested resolutions already identify their handler and
    /// cycles carry their own chain, so both pass through unchanged.
    pub(crate) fn within(self, name: &str, index: usize, label: &str) -> Self {
        match self {
            err @ (Self::HandlerFailed { .. } | Self::CyclicResolution { .. }) => err,
            other => Self::HandlerFailed {
                name: name.to_string(),
                index,
                label: label.to_string(),
                source: Box::new(other),
            },
        }
    }

    /// The innermost error, looking through handler attribution
    pub fn root_cause(&self) -> &Error {
        match self {
            Self::HandlerFailed { source, .. } => source.root_cause(),
            other => other,
        }
    }

    /// Whether this error is a cyclic resolution
    pub fn is_cyclic(&self) -> bool {
        matches!(self, Self::CyclicResolution { .. })
    }
}
