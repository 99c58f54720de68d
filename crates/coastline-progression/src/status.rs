//! Status classification for catalog actions.
//!
//! Checks run in a fixed order and the first match wins:
//!
//! 1. **Completed** -- the action is active.
//! 2. **Replaced** -- an active upgrade supersedes it (transitively).
//! 3. **Locked by conflict** -- another conflicting category is the
//!    sector's committed path and this is a round-1 base action, or the
//!    category already used its per-round quota in this sector.
//! 4. **Locked by prerequisite** -- no prerequisite group is fully active,
//!    or the action has not unlocked yet.
//! 5. **Selectable** -- otherwise.
//!
//! Completed and replaced come first so that nothing the player already
//! built ever shows as locked.

use std::collections::BTreeMap;

use serde::Serialize;
use ts_rs::TS;

use coastline_catalog::ActionCatalog;
use coastline_types::{
    ActionConfig, ActionStatus, ActivityLogEntry, Category, EntryKind, Round, Sector,
};

use crate::active_set::ActiveSet;
use crate::replacement::is_replaced;

/// Build entries per category recorded in one sector during one round.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoundPicks {
    counts: BTreeMap<Category, u32>,
}

impl RoundPicks {
    /// No picks yet.
    pub const fn new() -> Self {
        Self {
            counts: BTreeMap::new(),
        }
    }

    /// Count the build entries of `sector` logged in `round`. Entries for
    /// unknown actions are ignored; demolitions do not count.
    pub fn count_in(
        catalog: &ActionCatalog,
        log: &[ActivityLogEntry],
        sector: Sector,
        round: Round,
    ) -> Self {
        let mut picks = Self::new();
        log.iter()
            .filter(|entry| entry.round == round)
            .filter_map(|entry| match entry.kind() {
                EntryKind::Build(action_id) => catalog.get(action_id),
                EntryKind::Demolish(_) => None,
            })
            .filter(|action| action.sector == sector)
            .for_each(|action| picks.record(action.category));
        picks
    }

    /// Record one more pick for `category`.
    pub fn record(&mut self, category: Category) {
        let count = self.counts.entry(category).or_insert(0);
        *count = count.saturating_add(1);
    }

    /// Picks recorded for `category`.
    pub fn count(&self, category: Category) -> u32 {
        self.counts.get(&category).copied().unwrap_or(0)
    }
}

/// Everything the classifier needs besides the action itself.
#[derive(Debug, Clone, Copy)]
pub struct StatusContext<'a> {
    /// Actions in effect.
    pub active: &'a ActiveSet,
    /// Committed path of the action's sector.
    pub path: Option<Category>,
    /// Current round.
    pub round: Round,
    /// This round's picks in the action's sector. `None` skips the
    /// per-round quota check.
    pub round_picks: Option<&'a RoundPicks>,
}

/// A catalog row with its current status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct ClassifiedAction {
    /// The catalog row.
    pub action: ActionConfig,
    /// What the player may do with it now.
    pub status: ActionStatus,
}

/// Classify one action.
pub fn classify_action(
    catalog: &ActionCatalog,
    action: &ActionConfig,
    context: &StatusContext<'_>,
) -> ActionStatus {
    if context.active.contains(action.id.as_str()) {
        return ActionStatus::Completed;
    }
    if is_replaced(catalog, action.id.as_str(), context.active) {
        return ActionStatus::Replaced;
    }
    if conflicts_with_path(catalog, action, context.path)
        || quota_exhausted(catalog, action, context.round_picks)
    {
        return ActionStatus::LockedByConflict;
    }
    if !prerequisites_met(action, context.active) || !action.is_unlocked_by(context.round) {
        return ActionStatus::LockedByPrerequisite;
    }
    ActionStatus::Selectable
}

/// Classify a batch of rows without per-round quota information.
pub fn classify_actions<'a>(
    catalog: &ActionCatalog,
    rows: impl IntoIterator<Item = &'a ActionConfig>,
    active: &ActiveSet,
    path: Option<Category>,
    round: Round,
) -> Vec<ClassifiedAction> {
    let context = StatusContext {
        active,
        path,
        round,
        round_picks: None,
    };
    rows.into_iter()
        .map(|action| ClassifiedAction {
            action: action.clone(),
            status: classify_action(catalog, action, &context),
        })
        .collect()
}

/// OR of AND-groups. No groups means no prerequisite. Ids the catalog does
/// not define are never active, so a group naming one cannot be met.
pub fn prerequisites_met(action: &ActionConfig, active: &ActiveSet) -> bool {
    action.prerequisites.is_empty()
        || action
            .prerequisites
            .iter()
            .any(|group| active.contains_all(group))
}

fn conflicts_with_path(catalog: &ActionCatalog, action: &ActionConfig, path: Option<Category>) -> bool {
    path.is_some_and(|committed| {
        action.is_base()
            && action.category != committed
            && catalog.categories_conflict(action.category, committed)
    })
}

fn quota_exhausted(
    catalog: &ActionCatalog,
    action: &ActionConfig,
    round_picks: Option<&RoundPicks>,
) -> bool {
    let Some(picks) = round_picks else {
        return false;
    };
    catalog
        .category_rules(action.category)
        .and_then(|rules| rules.max_selections_per_round)
        .is_some_and(|limit| picks.count(action.category) >= limit)
}
