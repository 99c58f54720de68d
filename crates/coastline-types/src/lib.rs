//! Shared type definitions for the Coastline progression resolver.
//!
//! This crate is the single source of truth for the catalog and log shapes
//! used across the workspace. Types flow downstream to `TypeScript` via
//! `ts-rs` for the game UI.
//!
//! # Modules
//!
//! - [`ids`] -- Identifier newtypes for log entries, actors and actions
//! - [`enums`] -- Categories, sectors, stations and action statuses
//! - [`action`] -- Catalog rows, cost specifications and category rules
//! - [`log`] -- Activity log entries and their typed reading

pub mod action;
pub mod enums;
pub mod ids;
pub mod log;

// Re-export all public types at crate root for convenience.
pub use action::{ActionConfig, CategoryRules, CostRule, CostSpec, DynamicCostSpec, Round};
pub use enums::{ActionStatus, Category, ParseSectorError, Sector, Station};
pub use ids::{ActionId, ActorId, EntryId};
pub use log::{ActivityLogEntry, DEMOLISH_ACTION, EntryKind};

#[cfg(test)]
mod tests {
    //! `TypeScript` binding generation for every wire type.

    #[test]
    fn export_bindings() {
        // Files are written to `bindings/` relative to the crate root.
        use ts_rs::TS;

        // IDs
        let _ = crate::ids::EntryId::export_all();
        let _ = crate::ids::ActorId::export_all();
        let _ = crate::ids::ActionId::export_all();

        // Enums
        let _ = crate::enums::Category::export_all();
        let _ = crate::enums::Sector::export_all();
        let _ = crate::enums::Station::export_all();
        let _ = crate::enums::ActionStatus::export_all();

        // Catalog
        let _ = crate::action::ActionConfig::export_all();
        let _ = crate::action::CostSpec::export_all();
        let _ = crate::action::DynamicCostSpec::export_all();
        let _ = crate::action::CostRule::export_all();
        let _ = crate::action::CategoryRules::export_all();

        // Log
        let _ = crate::log::ActivityLogEntry::export_all();
    }
}
