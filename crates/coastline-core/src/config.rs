//! Configuration loading and typed config structures for a Coastline game.
//!
//! The canonical configuration lives in `coastline-config.yaml` next to the
//! game server. Every section and field has a default, so an empty file (or
//! no file at all) describes the standard three-round game.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use coastline_progression::ScoringRules;
use coastline_types::Round;

/// Environment variable overriding `catalog.path`.
pub const CATALOG_PATH_ENV: &str = "COASTLINE_CATALOG";

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level game configuration.
///
/// Mirrors the structure of `coastline-config.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct GameConfig {
    /// Game length and naming.
    #[serde(default)]
    pub game: GameSection,

    /// Coin allowance and demolition charges.
    #[serde(default)]
    pub economy: ScoringRules,

    /// Where the action catalog comes from.
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl GameConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// `COASTLINE_CATALOG` overrides `catalog.path` when set.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse configuration from a YAML string.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        let mut config: Self = serde_yml::from_str(yaml)?;
        config.catalog.apply_env_overrides();
        Ok(config)
    }
}

/// Game-level settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GameSection {
    /// Human-readable game name, shown in reports.
    #[serde(default = "default_game_name")]
    pub name: String,

    /// Number of rounds in a game.
    #[serde(default = "default_total_rounds")]
    pub total_rounds: Round,
}

impl Default for GameSection {
    fn default() -> Self {
        Self {
            name: default_game_name(),
            total_rounds: default_total_rounds(),
        }
    }
}

/// Action catalog source.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CatalogConfig {
    /// YAML or JSON catalog file. `None` uses the built-in standard catalog.
    #[serde(default)]
    pub path: Option<PathBuf>,

    /// Refuse to start when the catalog has validation issues. When off,
    /// issues are only logged.
    #[serde(default = "default_true")]
    pub strict: bool,
}

impl CatalogConfig {
    /// Override the catalog path with `COASTLINE_CATALOG` when set.
    pub fn apply_env_overrides(&mut self) {
        if let Some(val) = std::env::var(CATALOG_PATH_ENV).ok().filter(|v| !v.is_empty()) {
            self.path = Some(PathBuf::from(val));
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: None,
            strict: true,
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error). `RUST_LOG` wins when set.
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Emit JSON lines instead of human-readable output.
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

// ---------------------------------------------------------------------------
// Default value functions for serde
// ---------------------------------------------------------------------------

fn default_game_name() -> String {
    String::from("Coastline")
}

const fn default_total_rounds() -> Round {
    3
}

fn default_log_level() -> String {
    String::from("info")
}

const fn default_true() -> bool {
    true
}
