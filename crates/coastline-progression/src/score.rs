//! Coin and score deductions derived from the activity log.
//!
//! A [`ScoreSheet`] is built from a single replay. Every applied build is
//! charged its cost as resolved against the actions active *before* it,
//! plus its score weight. Every valid demolition is charged the configured
//! demolition cost against its target sector. Skipped entries are never
//! charged.
//!
//! All totals saturate instead of overflowing.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::trace;
use ts_rs::TS;

use coastline_catalog::ActionCatalog;
use coastline_types::{ActionId, ActivityLogEntry, ActorId, EntryId, Round, Sector, Station};

use crate::active_set::{ReplayStep, replay};
use crate::cost::action_cost;

// ---------------------------------------------------------------------------
// Rules
// ---------------------------------------------------------------------------

/// Economy settings applied when charging log entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export, export_to = "bindings/")]
pub struct ScoringRules {
    /// Coins each station may spend per round.
    pub coins_per_round: u32,
    /// Coins charged for demolishing a sector.
    pub demolish_cost: u32,
    /// Score deducted for demolishing a sector.
    pub demolish_score_weight: u32,
}

impl Default for ScoringRules {
    fn default() -> Self {
        Self {
            coins_per_round: 10,
            demolish_cost: 1,
            demolish_score_weight: 0,
        }
    }
}

// ---------------------------------------------------------------------------
// Charges
// ---------------------------------------------------------------------------

/// Score and coins deducted for one round in one sector (or any aggregate).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct RoundSectorTotals {
    /// Sum of score weights.
    pub score_deducted: u32,
    /// Sum of coin costs.
    pub coins_spent: u32,
}

impl RoundSectorTotals {
    /// Add one charge.
    pub const fn with_charge(self, charge: &Charge) -> Self {
        Self {
            score_deducted: self.score_deducted.saturating_add(charge.score),
            coins_spent: self.coins_spent.saturating_add(charge.coins),
        }
    }

    /// Sum of two totals.
    pub const fn plus(self, other: Self) -> Self {
        Self {
            score_deducted: self.score_deducted.saturating_add(other.score_deducted),
            coins_spent: self.coins_spent.saturating_add(other.coins_spent),
        }
    }
}

/// What one applied log entry cost.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Charge {
    /// The log entry charged.
    pub entry_id: EntryId,
    /// Who logged it.
    pub actor_id: ActorId,
    /// Round the entry was logged in.
    pub round: Round,
    /// Sector the charge is booked against.
    pub sector: Sector,
    /// The action built, or `None` for a demolition.
    pub action_id: Option<ActionId>,
    /// Coins spent.
    pub coins: u32,
    /// Score deducted.
    pub score: u32,
}

/// Remaining coins of a station in one round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct StationBudget {
    /// The station.
    pub station: Station,
    /// The round.
    pub round: Round,
    /// Coins granted for the round.
    pub allowance: u32,
    /// Coins spent on the station's sectors this round.
    pub spent: u32,
    /// `allowance - spent`, never below zero.
    pub remaining: u32,
}

// ---------------------------------------------------------------------------
// Score sheet
// ---------------------------------------------------------------------------

/// Every charge of a replay, in the order the entries were applied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScoreSheet {
    charges: Vec<Charge>,
}

impl ScoreSheet {
    /// All charges in replay order.
    pub fn charges(&self) -> &[Charge] {
        &self.charges
    }

    /// Totals for one round in one sector.
    pub fn round_sector(&self, round: Round, sector: Sector) -> RoundSectorTotals {
        self.total_where(|c| c.round == round && c.sector == sector)
    }

    /// Totals for one round across every sector.
    pub fn round_total(&self, round: Round) -> RoundSectorTotals {
        self.total_where(|c| c.round == round)
    }

    /// Per-sector totals for one round. Every sector is present, including
    /// those with nothing charged.
    pub fn by_sector(&self, round: Round) -> BTreeMap<Sector, RoundSectorTotals> {
        Sector::ALL
            .into_iter()
            .map(|sector| (sector, self.round_sector(round, sector)))
            .collect()
    }

    /// Totals of `sector` from round 1 through `through_round` inclusive.
    pub fn cumulative(&self, sector: Sector, through_round: Round) -> RoundSectorTotals {
        self.total_where(|c| c.sector == sector && c.round <= through_round)
    }

    /// Coins spent in `round` on the sectors of `station`.
    pub fn station_spent(&self, station: Station, round: Round) -> u32 {
        self.total_where(|c| c.round == round && c.sector.station() == station)
            .coins_spent
    }

    /// Budget of `station` in `round` under `rules`.
    pub fn station_budget(&self, station: Station, round: Round, rules: &ScoringRules) -> StationBudget {
        let spent = self.station_spent(station, round);
        StationBudget {
            station,
            round,
            allowance: rules.coins_per_round,
            spent,
            remaining: rules.coins_per_round.saturating_sub(spent),
        }
    }

    fn total_where(&self, keep: impl Fn(&Charge) -> bool) -> RoundSectorTotals {
        self.charges
            .iter()
            .filter(|&charge| keep(charge))
            .fold(RoundSectorTotals::default(), RoundSectorTotals::with_charge)
    }
}

/// Replay the log once and charge every applied entry.
pub fn score_sheet(catalog: &ActionCatalog, log: &[ActivityLogEntry], rules: &ScoringRules) -> ScoreSheet {
    let mut charges = Vec::new();
    replay(catalog, log, |entry, step, before| {
        let (sector, action_id, coins, score) = match step {
            ReplayStep::Build(action) => (
                action.sector,
                Some(action.id.clone()),
                action_cost(action, entry.round, before),
                action.score_weight,
            ),
            ReplayStep::Demolish(sector) => {
                (sector, None, rules.demolish_cost, rules.demolish_score_weight)
            }
        };
        trace!(
            entry_id = %entry.id,
            round = entry.round,
            %sector,
            coins,
            score,
            "charged log entry"
        );
        charges.push(Charge {
            entry_id: entry.id.clone(),
            actor_id: entry.actor_id.clone(),
            round: entry.round,
            sector,
            action_id,
            coins,
            score,
        });
    });
    ScoreSheet { charges }
}

/// Score and coins deducted in `sector` during `round`.
pub fn aggregate_round_sector_totals(
    catalog: &ActionCatalog,
    log: &[ActivityLogEntry],
    round: Round,
    sector: Sector,
    rules: &ScoringRules,
) -> RoundSectorTotals {
    score_sheet(catalog, log, rules).round_sector(round, sector)
}

/// Coins `station` still has in `round`, saturating at zero.
pub fn coins_remaining(
    catalog: &ActionCatalog,
    log: &[ActivityLogEntry],
    station: Station,
    round: Round,
    rules: &ScoringRules,
) -> u32 {
    score_sheet(catalog, log, rules)
        .station_budget(station, round, rules)
        .remaining
}
