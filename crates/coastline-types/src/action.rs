//! Catalog row types: actions, cost specifications and category rules.
//!
//! These are immutable configuration data, defined once when the catalog is
//! loaded. Field defaults let catalog files omit empty lists.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::enums::{Category, Sector};
use crate::ids::ActionId;

/// A game round number. The first round is `1`.
pub type Round = u32;

/// One buildable action in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct ActionConfig {
    /// Unique action id.
    pub id: ActionId,
    /// Label shown on the build button.
    pub display_name: String,
    /// Coin cost, fixed or round/state dependent.
    pub cost: CostSpec,
    /// Smallest round in which the action may first be chosen.
    #[serde(default = "default_unlock_round")]
    pub unlocks_in_round: Round,
    /// OR of AND-groups: permitted when every id of any one group is active.
    /// Empty means no prerequisite.
    #[serde(default)]
    pub prerequisites: Vec<Vec<ActionId>>,
    /// Actions superseded once this one is active.
    #[serde(default)]
    pub replaces: Vec<ActionId>,
    /// Board sector the action is built in.
    pub sector: Sector,
    /// Protection approach the action belongs to.
    pub category: Category,
    /// Score deducted each time the action is built.
    #[serde(default)]
    pub score_weight: u32,
}

impl ActionConfig {
    /// Whether this row is an entry point of its category (unlocks in
    /// round 1). Base rows are the ones a competing path locks out.
    pub const fn is_base(&self) -> bool {
        self.unlocks_in_round <= 1
    }

    /// Whether the action has unlocked by `round`.
    pub const fn is_unlocked_by(&self, round: Round) -> bool {
        self.unlocks_in_round <= round
    }
}

const fn default_unlock_round() -> Round {
    1
}

/// The coin cost of an action.
///
/// Serialized untagged: a bare integer for a fixed cost, or an object with
/// `default_cost` and `rules` for a dynamic one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(untagged)]
#[ts(export, export_to = "bindings/")]
pub enum CostSpec {
    /// The same cost in every round.
    Fixed(u32),
    /// A cost chosen by ordered conditional rules.
    Dynamic(DynamicCostSpec),
}

impl From<u32> for CostSpec {
    fn from(cost: u32) -> Self {
        Self::Fixed(cost)
    }
}

impl From<DynamicCostSpec> for CostSpec {
    fn from(spec: DynamicCostSpec) -> Self {
        Self::Dynamic(spec)
    }
}

/// Ordered cost overrides with a fallback.
///
/// The first rule that matches the round and whose required actions are all
/// active decides the cost; `default_cost` applies otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct DynamicCostSpec {
    /// Cost when no rule matches.
    pub default_cost: u32,
    /// Rules in evaluation order.
    #[serde(default)]
    pub rules: Vec<CostRule>,
}

impl DynamicCostSpec {
    /// A spec with no rules yet.
    pub const fn new(default_cost: u32) -> Self {
        Self {
            default_cost,
            rules: Vec::new(),
        }
    }

    /// Append a rule; rules added first take precedence.
    #[must_use]
    pub fn rule(mut self, rule: CostRule) -> Self {
        self.rules.push(rule);
        self
    }
}

/// A single conditional cost override.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct CostRule {
    /// Rounds in which the rule may apply.
    pub rounds: Vec<Round>,
    /// Cost charged when the rule applies.
    pub cost: u32,
    /// Actions that must all be active. Empty means no requirement.
    #[serde(default)]
    pub required_active_actions: Vec<ActionId>,
}

impl CostRule {
    /// A rule gated on rounds only.
    pub fn in_rounds(rounds: impl IntoIterator<Item = Round>, cost: u32) -> Self {
        Self {
            rounds: rounds.into_iter().collect(),
            cost,
            required_active_actions: Vec::new(),
        }
    }

    /// Additionally require an action to be active.
    #[must_use]
    pub fn requiring(mut self, action: impl Into<ActionId>) -> Self {
        self.required_active_actions.push(action.into());
        self
    }
}

/// Rules that apply to a whole category within a sector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct CategoryRules {
    /// Categories that cannot be the committed path alongside this one.
    #[serde(default)]
    pub conflicts: Vec<Category>,
    /// How many build entries of this category one sector may record in a
    /// single round. `None` means unlimited.
    #[serde(default)]
    pub max_selections_per_round: Option<u32>,
}

impl CategoryRules {
    /// Whether this category declares a conflict with `other`.
    pub fn conflicts_with(&self, other: Category) -> bool {
        self.conflicts.contains(&other)
    }
}

impl Category {
    /// Standard rules: every category excludes every other, and a sector
    /// records at most one action per category per round.
    pub fn default_rules(self) -> CategoryRules {
        CategoryRules {
            conflicts: Self::ALL.into_iter().filter(|other| *other != self).collect(),
            max_selections_per_round: Some(1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_integer_deserializes_as_fixed_cost() {
        let cost: Result<CostSpec, _> = serde_json::from_str("3");
        assert_eq!(cost.ok(), Some(CostSpec::Fixed(3)));
    }

    #[test]
    fn object_deserializes_as_dynamic_cost() {
        let json = r#"{
            "default_cost": 2,
            "rules": [{ "rounds": [2, 3], "cost": 1, "required_active_actions": ["x"] }]
        }"#;
        let cost: Result<CostSpec, _> = serde_json::from_str(json);
        let expected = DynamicCostSpec::new(2).rule(CostRule::in_rounds([2, 3], 1).requiring("x"));
        assert_eq!(cost.ok(), Some(CostSpec::Dynamic(expected)));
    }

    #[test]
    fn dynamic_cost_rules_default_to_empty() {
        let cost: Result<CostSpec, _> = serde_json::from_str(r#"{ "default_cost": 4 }"#);
        assert_eq!(cost.ok(), Some(CostSpec::Dynamic(DynamicCostSpec::new(4))));
    }

    #[test]
    fn action_config_fills_optional_fields() {
        let json = r#"{
            "id": "mangroves-1A",
            "display_name": "Mangroves",
            "cost": 3,
            "sector": "1A",
            "category": "mangroves"
        }"#;
        let config: Result<ActionConfig, _> = serde_json::from_str(json);
        assert!(config.is_ok());
        if let Ok(config) = config {
            assert_eq!(config.unlocks_in_round, 1);
            assert!(config.prerequisites.is_empty());
            assert!(config.replaces.is_empty());
            assert_eq!(config.score_weight, 0);
            assert!(config.is_base());
        }
    }

    #[test]
    fn default_rules_exclude_every_other_category() {
        let rules = Category::Seawall.default_rules();
        assert!(!rules.conflicts_with(Category::Seawall));
        assert!(rules.conflicts_with(Category::Mangroves));
        assert!(rules.conflicts_with(Category::StormSurgeBarrier));
        assert_eq!(rules.max_selections_per_round, Some(1));
    }
}
