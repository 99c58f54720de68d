//! The validated catalog bound to a game's economy settings.
//!
//! [`GameRules`] is what a game server or the replay tool holds for the
//! lifetime of a game. It owns no log: every query takes the current log
//! and round explicitly and folds it from scratch.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::{info, warn};
use ts_rs::TS;

use coastline_catalog::{ActionCatalog, CatalogError, standard_catalog};
use coastline_progression::{
    RoundPicks, RoundSectorTotals, ScoreSheet, ScoringRules, SectorBoard, StationBudget,
    board_from_parts, resolve_active_set, score_sheet, sector_board,
};
use coastline_types::{ActivityLogEntry, Round, Sector, Station};

use crate::config::GameConfig;
use crate::error::CoreError;

/// Deductions and budgets of one round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct RoundBreakdown {
    /// The round.
    pub round: Round,
    /// Totals per sector; every sector is listed.
    pub sectors: BTreeMap<Sector, RoundSectorTotals>,
    /// Totals across all sectors.
    pub total: RoundSectorTotals,
    /// Coin budget of each station.
    pub budgets: Vec<StationBudget>,
}

/// Deductions of a whole game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct GameBreakdown {
    /// One entry per configured round.
    pub rounds: Vec<RoundBreakdown>,
    /// Cumulative totals per sector over every configured round.
    pub sectors: BTreeMap<Sector, RoundSectorTotals>,
    /// Cumulative totals across the board.
    pub total: RoundSectorTotals,
}

/// A catalog and economy ready to answer queries about a log.
#[derive(Debug, Clone)]
pub struct GameRules {
    catalog: ActionCatalog,
    scoring: ScoringRules,
    total_rounds: Round,
}

impl GameRules {
    /// Bind an already loaded catalog to the given economy.
    pub const fn new(catalog: ActionCatalog, scoring: ScoringRules, total_rounds: Round) -> Self {
        Self {
            catalog,
            scoring,
            total_rounds,
        }
    }

    /// Load the configured catalog (or the standard one) and validate it.
    ///
    /// Every validation issue is logged. In strict mode any issue is an
    /// error; otherwise the catalog is used as is and the resolver's
    /// fail-safe rules apply to the broken rows.
    pub fn from_config(config: &GameConfig) -> Result<Self, CoreError> {
        let catalog = match &config.catalog.path {
            Some(path) => {
                info!(path = %path.display(), "Loading action catalog");
                ActionCatalog::from_file(path)?
            }
            None => {
                info!("No catalog configured, using the standard catalog");
                standard_catalog()
            }
        };

        let issues = catalog.validate();
        for issue in &issues {
            warn!(%issue, "Catalog validation issue");
        }
        if config.catalog.strict && !issues.is_empty() {
            return Err(CatalogError::Invalid { issues }.into());
        }

        info!(
            actions = catalog.len(),
            total_rounds = config.game.total_rounds,
            coins_per_round = config.economy.coins_per_round,
            "Game rules ready"
        );
        Ok(Self::new(catalog, config.economy, config.game.total_rounds))
    }

    /// The action catalog.
    pub const fn catalog(&self) -> &ActionCatalog {
        &self.catalog
    }

    /// The economy settings.
    pub const fn scoring(&self) -> &ScoringRules {
        &self.scoring
    }

    /// Rounds in a game.
    pub const fn total_rounds(&self) -> Round {
        self.total_rounds
    }

    /// Board of one sector in `round`.
    pub fn board(&self, log: &[ActivityLogEntry], sector: Sector, round: Round) -> SectorBoard {
        sector_board(&self.catalog, log, sector, round)
    }

    /// Boards of both sectors of `station`, from a single replay.
    pub fn boards_for_station(
        &self,
        log: &[ActivityLogEntry],
        station: Station,
        round: Round,
    ) -> Vec<SectorBoard> {
        let active = resolve_active_set(&self.catalog, log);
        station
            .sectors()
            .into_iter()
            .map(|sector| {
                let picks = RoundPicks::count_in(&self.catalog, log, sector, round);
                board_from_parts(&self.catalog, sector, round, &active, &picks)
            })
            .collect()
    }

    /// Coins `station` has left in `round`.
    pub fn station_budget(
        &self,
        log: &[ActivityLogEntry],
        station: Station,
        round: Round,
    ) -> StationBudget {
        self.sheet(log).station_budget(station, round, &self.scoring)
    }

    /// Per-sector deductions and station budgets of one round.
    pub fn round_breakdown(&self, log: &[ActivityLogEntry], round: Round) -> RoundBreakdown {
        self.breakdown_from_sheet(&self.sheet(log), round)
    }

    /// Deductions of every configured round plus cumulative totals.
    pub fn game_breakdown(&self, log: &[ActivityLogEntry]) -> GameBreakdown {
        let sheet = self.sheet(log);
        let rounds: Vec<RoundBreakdown> = (1..=self.total_rounds)
            .map(|round| self.breakdown_from_sheet(&sheet, round))
            .collect();
        let sectors: BTreeMap<Sector, RoundSectorTotals> = Sector::ALL
            .into_iter()
            .map(|sector| (sector, sheet.cumulative(sector, self.total_rounds)))
            .collect();
        let total = rounds
            .iter()
            .fold(RoundSectorTotals::default(), |acc, round| acc.plus(round.total));
        GameBreakdown {
            rounds,
            sectors,
            total,
        }
    }

    fn sheet(&self, log: &[ActivityLogEntry]) -> ScoreSheet {
        score_sheet(&self.catalog, log, &self.scoring)
    }

    fn breakdown_from_sheet(&self, sheet: &ScoreSheet, round: Round) -> RoundBreakdown {
        RoundBreakdown {
            round,
            sectors: sheet.by_sector(round),
            total: sheet.round_total(round),
            budgets: Station::ALL
                .into_iter()
                .map(|station| sheet.station_budget(station, round, &self.scoring))
                .collect(),
        }
    }
}

impl Default for GameRules {
    fn default() -> Self {
        let config = GameConfig::default();
        Self::new(standard_catalog(), config.economy, config.game.total_rounds)
    }
}
