//! Pure progression and scoring resolver for Coastline.
//!
//! Every query here is a fold over the shared activity log: nothing is
//! cached and nothing is mutated between calls, so the same log, catalog
//! and round always produce the same answer. Round and sector are explicit
//! parameters throughout.
//!
//! # Modules
//!
//! - [`active_set`] -- Replaying the log into the actions in effect.
//! - [`replacement`] -- Transitive "is this superseded" query.
//! - [`path`] -- The category a sector has committed to.
//! - [`status`] -- Classifying catalog rows for the current round.
//! - [`board`] -- The surfaced, classified rows of one sector.
//! - [`cost`] -- Fixed and round/state dependent coin costs.
//! - [`score`] -- Per round and sector coin and score deductions.

pub mod active_set;
pub mod board;
pub mod cost;
pub mod path;
pub mod replacement;
pub mod score;
pub mod status;

// Re-export primary operations at crate root.
pub use active_set::{
    ActiveSet, ReplayStep, has_any_construction_in_sector, replay, resolve_active_set,
};
pub use board::{SectorBoard, board_from_parts, is_surfaced, sector_board};
pub use cost::{action_cost, evaluate_dynamic_cost, rule_applies};
pub use path::{committed_path, resolve_path};
pub use replacement::{is_replaced, replaced_ids};
pub use score::{
    Charge, RoundSectorTotals, ScoreSheet, ScoringRules, StationBudget,
    aggregate_round_sector_totals, coins_remaining, score_sheet,
};
pub use status::{
    ClassifiedAction, RoundPicks, StatusContext, classify_action, classify_actions,
    prerequisites_met,
};
