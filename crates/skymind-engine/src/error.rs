//! Error types for the engine binary.

/// Top-level error for the engine binary.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// Configuration loading failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: skymind_core::ConfigError,
    },

    /// The demo scenario could not reach one of its checkpoints.
    #[error("scenario error: {message}")]
    Scenario {
        /// Which checkpoint failed.
        message: String,
    },
}

impl EngineError {
    pub(crate) fn scenario(message: impl Into<String>) -> Self {
        Self::Scenario {
            message: message.into(),
        }
    }
}
