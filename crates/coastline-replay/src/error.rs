//! Error types for the replay binary.

/// Top-level error for the replay binary.
///
/// `main` wraps these in [`anyhow::Error`] with file context.
#[derive(Debug, thiserror::Error)]
pub enum ReplayError {
    /// The command line could not be understood.
    #[error("usage: coastline-replay <log.json> [round] ({message})")]
    Usage {
        /// What was wrong with the arguments.
        message: String,
    },

    /// The round argument is not a positive integer.
    #[error("invalid round '{value}': expected an integer of at least 1")]
    InvalidRound {
        /// The argument as given.
        value: String,
    },

    /// Configuration loading failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: coastline_core::ConfigError,
    },

    /// The configured catalog could not be loaded or is invalid.
    #[error("rules error: {source}")]
    Rules {
        /// The underlying error.
        #[from]
        source: coastline_core::CoreError,
    },
}
