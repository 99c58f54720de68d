//! Coin costs, fixed or resolved from ordered conditional rules.
//!
//! A dynamic cost scans its rules in declaration order. The first rule whose
//! rounds include the current round and whose required actions are all
//! active decides the cost; otherwise the default applies. An empty rule
//! list always yields the default.

use coastline_types::{ActionConfig, CostRule, CostSpec, Round};

use crate::active_set::ActiveSet;

/// Resolve a cost specification for `round` against `active`.
pub fn evaluate_dynamic_cost(spec: &CostSpec, round: Round, active: &ActiveSet) -> u32 {
    match spec {
        CostSpec::Fixed(cost) => *cost,
        CostSpec::Dynamic(dynamic) => dynamic
            .rules
            .iter()
            .find(|rule| rule_applies(rule, round, active))
            .map_or(dynamic.default_cost, |rule| rule.cost),
    }
}

/// Whether a single rule matches. A rule with no required actions only
/// checks the round.
pub fn rule_applies(rule: &CostRule, round: Round, active: &ActiveSet) -> bool {
    rule.rounds.contains(&round) && active.contains_all(&rule.required_active_actions)
}

/// Cost of building `action` in `round` given the actions active beforehand.
pub fn action_cost(action: &ActionConfig, round: Round, active: &ActiveSet) -> u32 {
    evaluate_dynamic_cost(&action.cost, round, active)
}

#[cfg(test)]
mod tests {
    use coastline_catalog::standard::{SEAWALL_HIGH, SEAWALL_LOW, SEAWALL_MID};
    use coastline_catalog::{action_id, standard_catalog};
    use coastline_types::{ActionId, DynamicCostSpec, Sector};

    use super::*;

    fn active(ids: &[&str]) -> ActiveSet {
        ids.iter().map(|id| ActionId::from(*id)).collect()
    }

    #[test]
    fn fixed_cost_ignores_round_and_state() {
        let spec = CostSpec::Fixed(7);
        assert_eq!(evaluate_dynamic_cost(&spec, 1, &ActiveSet::new()), 7);
        assert_eq!(evaluate_dynamic_cost(&spec, 9, &active(&["x"])), 7);
    }

    #[test]
    fn rule_needs_round_and_required_actions() {
        let spec = CostSpec::Dynamic(
            DynamicCostSpec::new(2).rule(CostRule::in_rounds([2, 3], 1).requiring("X")),
        );
        assert_eq!(evaluate_dynamic_cost(&spec, 2, &active(&["X"])), 1);
        assert_eq!(evaluate_dynamic_cost(&spec, 2, &ActiveSet::new()), 2);
        assert_eq!(evaluate_dynamic_cost(&spec, 1, &active(&["X"])), 2);
    }

    #[test]
    fn first_matching_rule_wins() {
        let spec = CostSpec::Dynamic(
            DynamicCostSpec::new(9)
                .rule(CostRule::in_rounds([2], 5).requiring("a").requiring("b"))
                .rule(CostRule::in_rounds([2], 3).requiring("a"))
                .rule(CostRule::in_rounds([2], 1)),
        );
        assert_eq!(evaluate_dynamic_cost(&spec, 2, &active(&["a", "b"])), 5);
        assert_eq!(evaluate_dynamic_cost(&spec, 2, &active(&["a"])), 3);
        assert_eq!(evaluate_dynamic_cost(&spec, 2, &ActiveSet::new()), 1);
        assert_eq!(evaluate_dynamic_cost(&spec, 3, &active(&["a", "b"])), 9);
    }

    #[test]
    fn empty_rule_list_falls_back_to_default() {
        let spec = CostSpec::Dynamic(DynamicCostSpec::new(4));
        assert_eq!(evaluate_dynamic_cost(&spec, 1, &ActiveSet::new()), 4);
    }

    #[test]
    fn seawall_upgrades_are_discounted_from_round_two() {
        let catalog = standard_catalog();
        let low = action_id(SEAWALL_LOW, Sector::OneA);
        let mid = action_id(SEAWALL_MID, Sector::OneA);
        let with_low: ActiveSet = [low].into_iter().collect();
        let with_mid: ActiveSet = [mid].into_iter().collect();

        let mid_row = catalog.get("seawall-1.15m-1A");
        let high_row = catalog.get("seawall-2m-1A");
        assert_eq!(mid_row.map(|a| action_cost(a, 1, &with_low)), Some(4));
        assert_eq!(mid_row.map(|a| action_cost(a, 2, &with_low)), Some(3));
        assert_eq!(high_row.map(|a| action_cost(a, 2, &with_mid)), Some(4));
        assert_eq!(high_row.map(|a| action_cost(a, 3, &with_low)), Some(5));
        assert_eq!(high_row.map(|a| action_cost(a, 2, &ActiveSet::new())), Some(6));
        assert!(catalog.get(action_id(SEAWALL_HIGH, Sector::OneA).as_str()).is_some());
    }
}
