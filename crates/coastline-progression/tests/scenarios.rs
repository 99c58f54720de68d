//! End-to-end scenarios over the standard catalog.
//!
//! Each test writes a small activity log the way the realtime store would
//! deliver it and checks what a station sees on its board afterwards.

#![allow(clippy::unwrap_used)]

use coastline_catalog::standard::{
    LAND_RECLAMATION, MANGROVES, SEAWALL_HIGH, SEAWALL_LOW, SEAWALL_MID, SEAWALL_PATH,
    STORM_SURGE_BARRIER,
};
use coastline_catalog::{ActionCatalog, action_id, standard_catalog};
use coastline_progression::{
    ActiveSet, RoundSectorTotals, ScoringRules, aggregate_round_sector_totals, classify_actions,
    committed_path, evaluate_dynamic_cost, has_any_construction_in_sector, resolve_active_set,
    sector_board,
};
use coastline_types::{
    ActionId, ActionStatus, ActivityLogEntry, ActorId, Category, CostRule, CostSpec,
    DynamicCostSpec, Round, Sector,
};

const SECTOR: Sector = Sector::OneA;

fn id(template: &str) -> ActionId {
    action_id(template, SECTOR)
}

fn build(template: &str, round: Round, ts: i64) -> ActivityLogEntry {
    ActivityLogEntry::build(ActorId::new(), id(template).0, round, ts)
}

fn seawall_statuses(catalog: &ActionCatalog, log: &[ActivityLogEntry], round: Round) -> Vec<(String, ActionStatus)> {
    let active = resolve_active_set(catalog, log);
    let path = committed_path(catalog, SECTOR, &active);
    classify_actions(
        catalog,
        catalog.rows_for_category(SECTOR, Category::Seawall),
        &active,
        path,
        round,
    )
    .into_iter()
    .map(|classified| (classified.action.id.0, classified.status))
    .collect()
}

#[test]
fn low_seawall_opens_the_ladder_in_round_two() {
    let catalog = standard_catalog();
    let log = vec![build(SEAWALL_LOW, 1, 1_000)];

    let statuses = seawall_statuses(&catalog, &log, 2);
    assert_eq!(
        statuses,
        vec![
            (id(SEAWALL_LOW).0, ActionStatus::Completed),
            (id(SEAWALL_MID).0, ActionStatus::Selectable),
            (id(SEAWALL_HIGH).0, ActionStatus::Selectable),
            (id(SEAWALL_PATH).0, ActionStatus::Selectable),
        ]
    );

    // The board agrees, quota included: nothing was picked in round 2 yet.
    let board = sector_board(&catalog, &log, SECTOR, 2);
    assert_eq!(board.status_of(id(SEAWALL_MID).as_str()), Some(ActionStatus::Selectable));
    assert_eq!(board.status_of(id(SEAWALL_PATH).as_str()), Some(ActionStatus::Selectable));
}

#[test]
fn high_seawall_in_the_same_round_replaces_the_low_one() {
    let catalog = standard_catalog();
    let log = vec![build(SEAWALL_LOW, 1, 1_000), build(SEAWALL_HIGH, 1, 2_000)];

    let board = sector_board(&catalog, &log, SECTOR, 1);
    assert_eq!(board.path, Some(Category::Seawall));
    assert_eq!(board.status_of(id(SEAWALL_LOW).as_str()), Some(ActionStatus::Replaced));
    assert_eq!(board.status_of(id(SEAWALL_HIGH).as_str()), Some(ActionStatus::Completed));

    for classified in &board.actions {
        if classified.action.category != Category::Seawall {
            assert_ne!(
                classified.status,
                ActionStatus::Selectable,
                "{} should be locked",
                classified.action.id
            );
        }
    }
    assert_eq!(board.selectable().count(), 0);
}

#[test]
fn demolition_reopens_the_sector_for_another_path() {
    let catalog = standard_catalog();
    let log = vec![
        build(MANGROVES, 1, 1_000),
        ActivityLogEntry::demolish(ActorId::new(), SECTOR, 2, 2_000),
        build(SEAWALL_LOW, 2, 3_000),
    ];

    let active = resolve_active_set(&catalog, &log);
    assert!(!active.contains(id(MANGROVES).as_str()));
    assert!(active.contains(id(SEAWALL_LOW).as_str()));

    let board = sector_board(&catalog, &log, SECTOR, 2);
    assert_eq!(board.path, Some(Category::Seawall));
    assert_eq!(board.status_of(id(SEAWALL_LOW).as_str()), Some(ActionStatus::Completed));
    assert_eq!(board.status_of(id(MANGROVES).as_str()), Some(ActionStatus::LockedByConflict));

    // Demolition alone leaves an empty, uncommitted sector.
    let cleared = log.get(..2).unwrap();
    assert!(!has_any_construction_in_sector(&catalog, SECTOR, cleared));
    assert_eq!(sector_board(&catalog, cleared, SECTOR, 2).path, None);
}

#[test]
fn second_tier_in_one_round_exhausts_the_category() {
    let catalog = standard_catalog();
    let log = vec![build(SEAWALL_LOW, 1, 1_000), build(SEAWALL_MID, 1, 2_000)];

    let board = sector_board(&catalog, &log, SECTOR, 1);
    assert_eq!(board.status_of(id(SEAWALL_LOW).as_str()), Some(ActionStatus::Replaced));
    assert_eq!(board.status_of(id(SEAWALL_MID).as_str()), Some(ActionStatus::Completed));
    assert_eq!(
        board.status_of(id(SEAWALL_HIGH).as_str()),
        Some(ActionStatus::LockedByConflict)
    );

    // The quota is per round: the top tier opens up again in round 2.
    let next = sector_board(&catalog, &log, SECTOR, 2);
    assert_eq!(next.status_of(id(SEAWALL_HIGH).as_str()), Some(ActionStatus::Selectable));
}

#[test]
fn dynamic_cost_follows_round_and_active_actions() {
    let spec = CostSpec::Dynamic(
        DynamicCostSpec::new(2).rule(CostRule::in_rounds([2, 3], 1).requiring("X")),
    );
    let with_x: ActiveSet = [ActionId::from("X")].into_iter().collect();

    assert_eq!(evaluate_dynamic_cost(&spec, 2, &with_x), 1);
    assert_eq!(evaluate_dynamic_cost(&spec, 2, &ActiveSet::new()), 2);
    assert_eq!(evaluate_dynamic_cost(&spec, 1, &with_x), 2);
}

#[test]
fn round_totals_charge_each_sector_separately() {
    let catalog = standard_catalog();
    let rules = ScoringRules::default();
    let log = vec![
        build(LAND_RECLAMATION, 1, 1_000),
        ActivityLogEntry::build(
            ActorId::new(),
            action_id(STORM_SURGE_BARRIER, Sector::OneB).0,
            1,
            1_500,
        ),
        build(SEAWALL_LOW, 3, 5_000),
    ];

    let one_a = aggregate_round_sector_totals(&catalog, &log, 1, SECTOR, &rules);
    assert_eq!((one_a.coins_spent, one_a.score_deducted), (5, 3));
    let one_b = aggregate_round_sector_totals(&catalog, &log, 1, Sector::OneB, &rules);
    assert_eq!((one_b.coins_spent, one_b.score_deducted), (8, 2));
    // 1A is committed to land reclamation, so the late seawall is skipped
    // and costs nothing.
    let late = aggregate_round_sector_totals(&catalog, &log, 3, SECTOR, &rules);
    assert_eq!(late, RoundSectorTotals::default());
}

#[test]
fn racing_stations_leave_one_category_completed() {
    let catalog = standard_catalog();
    let log = vec![build(MANGROVES, 1, 10), build(SEAWALL_LOW, 1, 11)];
    let board = sector_board(&catalog, &log, SECTOR, 1);
    let completed: Vec<(&str, Category)> = board
        .actions
        .iter()
        .filter(|row| row.status == ActionStatus::Completed)
        .map(|row| (row.action.id.as_str(), row.action.category))
        .collect();
    assert_eq!(completed, vec![("mangroves-1A", Category::Mangroves)]);
    assert_eq!(board.path, Some(Category::Mangroves));
    assert_eq!(
        board.status_of("seawall-0.5m-1A"),
        Some(ActionStatus::LockedByConflict)
    );
}

#[test]
fn replaying_twice_gives_the_same_answer() {
    let catalog = standard_catalog();
    let log = vec![
        build(SEAWALL_LOW, 1, 1_000),
        build(SEAWALL_MID, 2, 2_000),
        build(SEAWALL_PATH, 3, 3_000),
    ];
    let first = sector_board(&catalog, &log, SECTOR, 3);
    let second = sector_board(&catalog, &log, SECTOR, 3);
    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn store_push_keys_and_seat_names_replay() {
    let catalog = standard_catalog();
    let json = r#"[
        {"id": "-NxAbc123", "actorId": "player-1", "actionId": "mangroves-1A", "timestampMs": 1000, "round": 1},
        {"id": "-NxAbc124", "actorId": "station-2", "actionId": "DEMOLISH", "value": "1A", "timestampMs": 2000, "round": 2},
        {"id": "-NxAbc125", "actorId": "player-1", "actionId": "seawall-0.5m-1A", "timestampMs": 3000, "round": 2}
    ]"#;
    let log: Vec<ActivityLogEntry> = serde_json::from_str(json).unwrap();
    assert_eq!(log.first().map(|entry| entry.actor_id.as_str()), Some("player-1"));

    let active = resolve_active_set(&catalog, &log);
    assert_eq!(active.iter().collect::<Vec<_>>(), vec![&id(SEAWALL_LOW)]);
}
