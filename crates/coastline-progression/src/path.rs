//! Which category, if any, a sector has committed to.

use coastline_catalog::ActionCatalog;
use coastline_types::{ActionConfig, Category, Sector};

use crate::active_set::ActiveSet;

/// Category of the first row whose action is active, or `None`.
///
/// Only one category can be active per sector, so the first match names the
/// committed path.
pub fn resolve_path<'a>(
    sector_rows: impl IntoIterator<Item = &'a ActionConfig>,
    active: &ActiveSet,
) -> Option<Category> {
    sector_rows
        .into_iter()
        .find(|row| active.contains(row.id.as_str()))
        .map(|row| row.category)
}

/// [`resolve_path`] over the catalog rows of `sector`.
pub fn committed_path(catalog: &ActionCatalog, sector: Sector, active: &ActiveSet) -> Option<Category> {
    resolve_path(catalog.rows_for_sector(sector), active)
}
