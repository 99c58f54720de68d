//! The built-in catalog used when no catalog file is configured.
//!
//! Every sector gets the same ladder of measures. Concrete ids append the
//! sector label to the template id (`seawall-0.5m` becomes
//! `seawall-0.5m-1A`), and every reference is resolved inside the same
//! sector, so sectors never point at each other.

use coastline_types::{
    ActionConfig, ActionId, Category, CostRule, CostSpec, DynamicCostSpec, Round, Sector,
};

use crate::catalog::ActionCatalog;

/// 0.5 m seawall, the entry tier.
pub const SEAWALL_LOW: &str = "seawall-0.5m";
/// 1.15 m seawall, replaces the 0.5 m tier.
pub const SEAWALL_MID: &str = "seawall-1.15m";
/// 2 m seawall, replaces both lower tiers.
pub const SEAWALL_HIGH: &str = "seawall-2m";
/// Promenade on top of any seawall tier.
pub const SEAWALL_PATH: &str = "seawall-build-path";
/// Mangrove planting.
pub const MANGROVES: &str = "mangroves";
/// Mature mangrove forest, replaces the planting.
pub const MANGROVES_FOREST: &str = "mangroves-forest";
/// Shoreline fill.
pub const LAND_RECLAMATION: &str = "land-reclamation";
/// Housing on reclaimed land.
pub const LAND_RECLAMATION_HOUSING: &str = "land-reclamation-housing";
/// Fixed storm surge barrier.
pub const STORM_SURGE_BARRIER: &str = "storm-surge-barrier";
/// Movable gates, replace the fixed barrier.
pub const STORM_SURGE_GATES: &str = "storm-surge-barrier-gates";

/// Concrete id of a template action in a sector.
pub fn action_id(template: &str, sector: Sector) -> ActionId {
    ActionId::new(format!("{template}-{sector}"))
}

/// Build the standard catalog for every sector.
pub fn standard_catalog() -> ActionCatalog {
    let mut actions = Vec::with_capacity(Sector::ALL.len().saturating_mul(10));
    for sector in Sector::ALL {
        actions.extend(sector_actions(sector));
    }
    ActionCatalog::new(actions)
}

/// The ladder of one sector. Seawall rows come first.
fn sector_actions(sector: Sector) -> Vec<ActionConfig> {
    let id = |template: &str| action_id(template, sector);

    vec![
        // --- Seawall ---
        action(sector, SEAWALL_LOW, "Seawall 0.5 m", Category::Seawall, CostSpec::Fixed(2), 1, 1),
        ActionConfig {
            replaces: vec![id(SEAWALL_LOW)],
            ..action(
                sector,
                SEAWALL_MID,
                "Seawall 1.15 m",
                Category::Seawall,
                DynamicCostSpec::new(4)
                    .rule(CostRule::in_rounds([2, 3], 3).requiring(id(SEAWALL_LOW)))
                    .into(),
                1,
                2,
            )
        },
        ActionConfig {
            replaces: vec![id(SEAWALL_LOW), id(SEAWALL_MID)],
            ..action(
                sector,
                SEAWALL_HIGH,
                "Seawall 2 m",
                Category::Seawall,
                DynamicCostSpec::new(6)
                    .rule(CostRule::in_rounds([2, 3], 4).requiring(id(SEAWALL_MID)))
                    .rule(CostRule::in_rounds([2, 3], 5).requiring(id(SEAWALL_LOW)))
                    .into(),
                1,
                3,
            )
        },
        ActionConfig {
            prerequisites: vec![
                vec![id(SEAWALL_LOW)],
                vec![id(SEAWALL_MID)],
                vec![id(SEAWALL_HIGH)],
            ],
            ..action(sector, SEAWALL_PATH, "Build path on seawall", Category::Seawall, CostSpec::Fixed(1), 2, 1)
        },
        // --- Mangroves ---
        action(sector, MANGROVES, "Plant mangroves", Category::Mangroves, CostSpec::Fixed(3), 1, 1),
        ActionConfig {
            prerequisites: vec![vec![id(MANGROVES)]],
            replaces: vec![id(MANGROVES)],
            ..action(sector, MANGROVES_FOREST, "Mangrove forest", Category::Mangroves, CostSpec::Fixed(2), 2, 1)
        },
        // --- Land reclamation ---
        action(
            sector,
            LAND_RECLAMATION,
            "Reclaim land",
            Category::LandReclamation,
            DynamicCostSpec::new(5).rule(CostRule::in_rounds([3], 4)).into(),
            1,
            3,
        ),
        ActionConfig {
            prerequisites: vec![vec![id(LAND_RECLAMATION)]],
            ..action(
                sector,
                LAND_RECLAMATION_HOUSING,
                "Housing on reclaimed land",
                Category::LandReclamation,
                CostSpec::Fixed(2),
                3,
                2,
            )
        },
        // --- Storm surge barrier ---
        action(
            sector,
            STORM_SURGE_BARRIER,
            "Storm surge barrier",
            Category::StormSurgeBarrier,
            CostSpec::Fixed(8),
            1,
            2,
        ),
        ActionConfig {
            prerequisites: vec![vec![id(STORM_SURGE_BARRIER)]],
            replaces: vec![id(STORM_SURGE_BARRIER)],
            ..action(
                sector,
                STORM_SURGE_GATES,
                "Movable barrier gates",
                Category::StormSurgeBarrier,
                CostSpec::Fixed(3),
                3,
                1,
            )
        },
    ]
}

/// A row with no prerequisites and no replacements.
fn action(
    sector: Sector,
    template: &str,
    name: &str,
    category: Category,
    cost: CostSpec,
    unlocks_in_round: Round,
    score_weight: u32,
) -> ActionConfig {
    ActionConfig {
        id: action_id(template, sector),
        display_name: name.to_owned(),
        cost,
        unlocks_in_round,
        prerequisites: Vec::new(),
        replaces: Vec::new(),
        sector,
        category,
        score_weight,
    }
}
