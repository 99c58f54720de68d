//! The per-sector view a station sees in a round.
//!
//! Before a sector commits, every row unlocked by the round is shown. Once a
//! path is committed the board narrows to that category's ladder, and the
//! base rows of the other categories stay visible as locked so the player can
//! see what demolishing would reopen.

use serde::Serialize;
use ts_rs::TS;

use coastline_catalog::ActionCatalog;
use coastline_types::{ActionConfig, ActionId, ActionStatus, ActivityLogEntry, Category, Round, Sector};

use crate::active_set::{ActiveSet, resolve_active_set};
use crate::path::committed_path;
use crate::status::{ClassifiedAction, RoundPicks, StatusContext, classify_action};

/// Classified rows of one sector in one round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct SectorBoard {
    /// The sector shown.
    pub sector: Sector,
    /// The round the board was classified for.
    pub round: Round,
    /// Committed category, if any.
    pub path: Option<Category>,
    /// Surfaced rows in catalog order.
    pub actions: Vec<ClassifiedAction>,
}

impl SectorBoard {
    /// Status of a surfaced row.
    pub fn status_of(&self, id: &str) -> Option<ActionStatus> {
        self.actions
            .iter()
            .find(|classified| classified.action.id.as_str() == id)
            .map(|classified| classified.status)
    }

    /// Ids the player may build now.
    pub fn selectable(&self) -> impl Iterator<Item = &ActionId> {
        self.actions
            .iter()
            .filter(|classified| classified.status == ActionStatus::Selectable)
            .map(|classified| &classified.action.id)
    }
}

/// Replay the log and classify the surfaced rows of `sector` for `round`.
pub fn sector_board(
    catalog: &ActionCatalog,
    log: &[ActivityLogEntry],
    sector: Sector,
    round: Round,
) -> SectorBoard {
    let active = resolve_active_set(catalog, log);
    let picks = RoundPicks::count_in(catalog, log, sector, round);
    board_from_parts(catalog, sector, round, &active, &picks)
}

/// Build a board from an already resolved active set and round picks.
pub fn board_from_parts(
    catalog: &ActionCatalog,
    sector: Sector,
    round: Round,
    active: &ActiveSet,
    picks: &RoundPicks,
) -> SectorBoard {
    let path = committed_path(catalog, sector, active);
    let context = StatusContext {
        active,
        path,
        round,
        round_picks: Some(picks),
    };
    let actions = catalog
        .rows_for_sector(sector)
        .filter(|row| is_surfaced(row, path, round))
        .map(|row| ClassifiedAction {
            action: row.clone(),
            status: classify_action(catalog, row, &context),
        })
        .collect();
    SectorBoard {
        sector,
        round,
        path,
        actions,
    }
}

/// Whether a row appears on the board.
pub fn is_surfaced(row: &ActionConfig, path: Option<Category>, round: Round) -> bool {
    match path {
        Some(committed) if row.category != committed => row.is_base(),
        _ => row.is_unlocked_by(round),
    }
}
