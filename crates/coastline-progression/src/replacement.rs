//! Transitive replacement queries.
//!
//! A replaced action is never itself active, but the UI still has to show it
//! as superseded rather than merely absent. Upgrades chain (0.5 m -> 1.15 m
//! -> 2 m), so the query walks `replaces` edges from every active action
//! instead of looking one level deep.

use std::collections::BTreeSet;

use coastline_catalog::ActionCatalog;
use coastline_types::ActionId;

use crate::active_set::ActiveSet;

/// Whether some active action supersedes `candidate`, directly or through a
/// chain of upgrades.
///
/// Cycles in the catalog cannot loop the walk; each action is expanded once.
pub fn is_replaced(catalog: &ActionCatalog, candidate: &str, active: &ActiveSet) -> bool {
    let mut stack: Vec<&str> = active.iter().map(ActionId::as_str).collect();
    let mut expanded: BTreeSet<&str> = BTreeSet::new();

    while let Some(id) = stack.pop() {
        if !expanded.insert(id) {
            continue;
        }
        let Some(action) = catalog.get(id) else {
            continue;
        };
        for replaced in &action.replaces {
            if replaced.as_str() == candidate {
                return true;
            }
            stack.push(replaced.as_str());
        }
    }
    false
}

/// Every id superseded by the active set, for callers classifying many rows
/// at once.
pub fn replaced_ids<'a>(catalog: &'a ActionCatalog, active: &'a ActiveSet) -> BTreeSet<&'a str> {
    let mut stack: Vec<&str> = active.iter().map(ActionId::as_str).collect();
    let mut expanded: BTreeSet<&str> = BTreeSet::new();
    let mut replaced_set = BTreeSet::new();

    while let Some(id) = stack.pop() {
        if !expanded.insert(id) {
            continue;
        }
        if let Some(action) = catalog.get(id) {
            for replaced in &action.replaces {
                replaced_set.insert(replaced.as_str());
                stack.push(replaced.as_str());
            }
        }
    }
    replaced_set
}
