//! Action catalog for the Coastline progression resolver.
//!
//! The catalog is the leaf of the resolver: a static, declarative table of
//! every action a station can build, with its cost, unlock round,
//! prerequisites, replacements, sector and category, plus the rules that
//! apply to whole categories (conflicts and per-round quotas).
//!
//! # Modules
//!
//! - [`catalog`] -- The [`ActionCatalog`] lookup table, file loading and validation.
//! - [`standard`] -- The built-in catalog generated for every sector.
//! - [`error`] -- [`CatalogError`] for loading and [`CatalogIssue`] for validation.

pub mod catalog;
pub mod error;
pub mod standard;

// Re-export primary types at crate root.
pub use catalog::{ActionCatalog, CatalogFile};
pub use error::{CatalogError, CatalogIssue};
pub use standard::{action_id, standard_catalog};
