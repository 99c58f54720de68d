//! Configuration and game rules for the Coastline progression resolver.
//!
//! This crate binds a validated action catalog to the economy settings of a
//! game and exposes the queries a game server needs per station and round.
//!
//! # Modules
//!
//! - [`config`] -- Configuration loading from `coastline-config.yaml` into
//!   strongly-typed structs.
//! - [`rules`] -- [`GameRules`], the catalog plus economy facade.
//! - [`error`] -- [`CoreError`].
//!
//! [`GameRules`]: rules::GameRules
//! [`CoreError`]: error::CoreError

pub mod config;
pub mod error;
pub mod rules;

pub use config::{CatalogConfig, ConfigError, GameConfig, GameSection, LoggingConfig};
pub use error::CoreError;
pub use rules::{GameBreakdown, GameRules, RoundBreakdown};

#[cfg(test)]
mod tests {
    //! `TypeScript` binding generation for report types.

    #[test]
    fn export_bindings() {
        use ts_rs::TS;

        let _ = crate::rules::RoundBreakdown::export_all();
        let _ = crate::rules::GameBreakdown::export_all();
    }
}
