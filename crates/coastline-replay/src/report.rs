//! The JSON report printed after a replay.

use serde::Serialize;

use coastline_core::{GameBreakdown, GameRules, RoundBreakdown};
use coastline_progression::{ActiveSet, SectorBoard, resolve_active_set};
use coastline_types::{ActivityLogEntry, Round, Station};

/// Everything a facilitator needs to review a game at a given round.
#[derive(Debug, Serialize)]
pub struct Report {
    /// Configured game name.
    pub game: String,
    /// Round the boards are classified for.
    pub round: Round,
    /// Entries read from the log file.
    pub entries: usize,
    /// Actions in effect after the whole log.
    pub active: ActiveSet,
    /// Boards of every sector, grouped by station order.
    pub boards: Vec<SectorBoard>,
    /// Deductions and budgets of `round`.
    pub round_breakdown: RoundBreakdown,
    /// Deductions of every configured round.
    pub game_breakdown: GameBreakdown,
}

impl Report {
    /// Replay `log` under `rules` for `round`.
    pub fn build(name: &str, rules: &GameRules, log: &[ActivityLogEntry], round: Round) -> Self {
        let boards = Station::ALL
            .into_iter()
            .flat_map(|station| rules.boards_for_station(log, station, round))
            .collect();
        Self {
            game: name.to_owned(),
            round,
            entries: log.len(),
            active: resolve_active_set(rules.catalog(), log),
            boards,
            round_breakdown: rules.round_breakdown(log, round),
            game_breakdown: rules.game_breakdown(log),
        }
    }
}

/// Round to report when none is given: the latest round in the log, or 1.
pub fn latest_round(log: &[ActivityLogEntry]) -> Round {
    log.iter().map(|entry| entry.round).max().unwrap_or(1).max(1)
}
