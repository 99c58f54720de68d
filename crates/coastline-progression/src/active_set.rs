//! Replaying the activity log into the set of actions currently in effect.
//!
//! The log is the source of truth. Every query folds it from the start:
//! entries are stably sorted by timestamp, then each build inserts its
//! action and drops the actions it replaces, and each demolition clears
//! every active action of its sector.
//!
//! Entries the catalog cannot explain (unknown action ids, demolitions
//! without a valid sector) are skipped, and so are builds the active set
//! no longer admits: a row some active upgrade already replaces, or a row
//! whose category conflicts with the sector's committed path. Skips are
//! logged at `debug` level and never abort the replay.

use std::collections::BTreeSet;

use serde::Serialize;
use tracing::debug;

use coastline_catalog::ActionCatalog;
use coastline_types::{ActionConfig, ActionId, ActivityLogEntry, EntryKind, Sector};

use crate::path::committed_path;
use crate::replacement::is_replaced;

/// The actions in effect after a replay.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ActiveSet {
    ids: BTreeSet<ActionId>,
}

impl ActiveSet {
    /// An empty set.
    pub const fn new() -> Self {
        Self {
            ids: BTreeSet::new(),
        }
    }

    /// Whether `id` is in effect.
    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    /// Whether every id in `ids` is in effect. True for an empty slice.
    pub fn contains_all(&self, ids: &[ActionId]) -> bool {
        ids.iter().all(|id| self.contains(id.as_str()))
    }

    /// Add an action. Returns `false` if it was already active.
    pub fn insert(&mut self, id: ActionId) -> bool {
        self.ids.insert(id)
    }

    /// Remove an action. Returns `false` if it was not active.
    pub fn remove(&mut self, id: &str) -> bool {
        self.ids.remove(id)
    }

    /// Number of active actions.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether nothing is active.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Active ids in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &ActionId> {
        self.ids.iter()
    }

    /// Catalog rows of the active actions that belong to `sector`.
    pub fn in_sector<'a>(
        &'a self,
        catalog: &'a ActionCatalog,
        sector: Sector,
    ) -> impl Iterator<Item = &'a ActionConfig> {
        self.ids
            .iter()
            .filter_map(|id| catalog.get(id.as_str()))
            .filter(move |action| action.sector == sector)
    }
}

impl FromIterator<ActionId> for ActiveSet {
    fn from_iter<I: IntoIterator<Item = ActionId>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().collect(),
        }
    }
}

/// A log entry the catalog could explain, as applied by [`replay`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplayStep<'a> {
    /// A known action was built.
    Build(&'a ActionConfig),
    /// A sector was cleared.
    Demolish(Sector),
}

/// Fold the log in timestamp order.
///
/// `observe` is called for every applied step with the active set as it was
/// *before* the step, which is what cost rules are evaluated against.
/// Skipped entries are never observed. Entries with equal timestamps keep
/// their log order.
pub fn replay<'c, F>(catalog: &'c ActionCatalog, log: &[ActivityLogEntry], mut observe: F) -> ActiveSet
where
    F: FnMut(&ActivityLogEntry, ReplayStep<'c>, &ActiveSet),
{
    let mut ordered: Vec<&ActivityLogEntry> = log.iter().collect();
    ordered.sort_by_key(|entry| entry.timestamp);

    let mut active = ActiveSet::new();
    for entry in ordered {
        let Some(step) = resolve_step(catalog, entry, &active) else {
            continue;
        };
        observe(entry, step, &active);
        apply_step(catalog, &mut active, step);
    }
    active
}

/// Replay the log and return the actions in effect.
pub fn resolve_active_set(catalog: &ActionCatalog, log: &[ActivityLogEntry]) -> ActiveSet {
    replay(catalog, log, |_, _, _| {})
}

/// Whether anything is built in `sector` after replaying the log.
pub fn has_any_construction_in_sector(
    catalog: &ActionCatalog,
    sector: Sector,
    log: &[ActivityLogEntry],
) -> bool {
    resolve_active_set(catalog, log)
        .in_sector(catalog, sector)
        .next()
        .is_some()
}

fn resolve_step<'c>(
    catalog: &'c ActionCatalog,
    entry: &ActivityLogEntry,
    active: &ActiveSet,
) -> Option<ReplayStep<'c>> {
    match entry.kind() {
        EntryKind::Build(action_id) => {
            let Some(action) = catalog.get(action_id) else {
                debug!(entry_id = %entry.id, action_id, "skipping log entry for unknown action");
                return None;
            };
            if !admits_build(catalog, action, active) {
                debug!(
                    entry_id = %entry.id,
                    action_id,
                    sector = %action.sector,
                    "skipping build the sector no longer admits"
                );
                return None;
            }
            Some(ReplayStep::Build(action))
        }
        EntryKind::Demolish(Some(sector)) => Some(ReplayStep::Demolish(sector)),
        EntryKind::Demolish(None) => {
            debug!(
                entry_id = %entry.id,
                value = ?entry.value,
                "ignoring demolition without a valid sector"
            );
            None
        }
    }
}

/// A build is admitted unless an active upgrade already supersedes it or
/// the sector is committed to a conflicting category.
fn admits_build(catalog: &ActionCatalog, action: &ActionConfig, active: &ActiveSet) -> bool {
    if is_replaced(catalog, action.id.as_str(), active) {
        return false;
    }
    !committed_path(catalog, action.sector, active)
        .is_some_and(|path| catalog.categories_conflict(action.category, path))
}

fn apply_step(catalog: &ActionCatalog, active: &mut ActiveSet, step: ReplayStep<'_>) {
    match step {
        ReplayStep::Build(action) => {
            active.insert(action.id.clone());
            for replaced in &action.replaces {
                active.remove(replaced.as_str());
            }
        }
        ReplayStep::Demolish(sector) => {
            active
                .ids
                .retain(|id| !catalog.get(id.as_str()).is_some_and(|a| a.sector == sector));
        }
    }
}
