//! Error type for building [`GameRules`](crate::rules::GameRules).

use coastline_catalog::CatalogError;

use crate::config::ConfigError;

/// Failure to turn configuration into playable game rules.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// Configuration loading failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: ConfigError,
    },

    /// The action catalog could not be loaded or failed validation.
    #[error("catalog error: {source}")]
    Catalog {
        /// The underlying catalog error.
        #[from]
        source: CatalogError,
    },
}
