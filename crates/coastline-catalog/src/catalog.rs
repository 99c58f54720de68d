//! The action catalog: every buildable action plus the category rules.
//!
//! The catalog is built once at startup and shared immutably. Rows keep the
//! order they were declared in; the path resolver relies on that order when
//! it picks the first active row of a sector.
//!
//! # Design
//!
//! - Lookups go through an id index, so log entries resolve in `O(log n)`.
//! - Duplicate ids are tolerated at construction (first row wins) and
//!   reported by [`ActionCatalog::validate`].
//! - Every [`Category`] always has a [`CategoryRules`] entry; categories a
//!   catalog file leaves out get [`Category::default_rules`].

use std::collections::{BTreeMap, BTreeSet, VecDeque};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use coastline_types::{ActionConfig, ActionId, Category, CategoryRules, Sector};

use crate::error::{CatalogError, CatalogIssue};

// ---------------------------------------------------------------------------
// File shape
// ---------------------------------------------------------------------------

/// On-disk shape of a catalog (YAML or JSON).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogFile {
    /// Per-category overrides. Missing categories use the defaults.
    #[serde(default)]
    pub categories: BTreeMap<Category, CategoryRules>,
    /// Catalog rows in declaration order.
    #[serde(default)]
    pub actions: Vec<ActionConfig>,
}

// ---------------------------------------------------------------------------
// ActionCatalog
// ---------------------------------------------------------------------------

/// Immutable table of every action a player can build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionCatalog {
    actions: Vec<ActionConfig>,
    index: BTreeMap<ActionId, usize>,
    duplicates: Vec<ActionId>,
    category_rules: BTreeMap<Category, CategoryRules>,
}

impl Default for ActionCatalog {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl ActionCatalog {
    /// Build a catalog with the default rules for every category.
    pub fn new(actions: Vec<ActionConfig>) -> Self {
        Self::with_category_rules(actions, BTreeMap::new())
    }

    /// Build a catalog with explicit category rules. Categories missing
    /// from `rules` fall back to [`Category::default_rules`].
    pub fn with_category_rules(
        actions: Vec<ActionConfig>,
        mut rules: BTreeMap<Category, CategoryRules>,
    ) -> Self {
        for category in Category::ALL {
            rules.entry(category).or_insert_with(|| category.default_rules());
        }

        let mut index = BTreeMap::new();
        let mut duplicates = Vec::new();
        for (position, action) in actions.iter().enumerate() {
            if index.contains_key(&action.id) {
                duplicates.push(action.id.clone());
            } else {
                index.insert(action.id.clone(), position);
            }
        }

        Self {
            actions,
            index,
            duplicates,
            category_rules: rules,
        }
    }

    /// Parse a catalog from YAML.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_yml::from_str(yaml)?;
        Ok(file.into())
    }

    /// Parse a catalog from JSON.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_str(json)?;
        Ok(file.into())
    }

    /// Load a catalog file. `.yaml`/`.yml` and `.json` are supported.
    pub fn from_file(path: &Path) -> Result<Self, CatalogError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        let parse: fn(&str) -> Result<Self, CatalogError> = match extension.as_deref() {
            Some("yaml" | "yml") => Self::from_yaml_str,
            Some("json") => Self::from_json_str,
            _ => {
                return Err(CatalogError::UnsupportedFormat {
                    path: path.to_path_buf(),
                });
            }
        };
        let catalog = parse(&std::fs::read_to_string(path)?)?;
        debug!(path = %path.display(), actions = catalog.len(), "catalog file loaded");
        Ok(catalog)
    }

    /// Export the catalog in its file shape.
    pub fn to_file_shape(&self) -> CatalogFile {
        CatalogFile {
            categories: self.category_rules.clone(),
            actions: self.actions.clone(),
        }
    }

    /// Return the catalog if it has no structural issues.
    pub fn validated(self) -> Result<Self, CatalogError> {
        let issues = self.validate();
        if issues.is_empty() {
            Ok(self)
        } else {
            Err(CatalogError::Invalid { issues })
        }
    }

    /// Look up an action by id.
    pub fn get(&self, id: &str) -> Option<&ActionConfig> {
        self.index.get(id).and_then(|&position| self.actions.get(position))
    }

    /// Whether the catalog defines `id`.
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Number of rows, duplicates included.
    pub const fn len(&self) -> usize {
        self.actions.len()
    }

    /// Whether the catalog has no rows.
    pub const fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// All rows in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &ActionConfig> {
        self.actions.iter()
    }

    /// Rows of one sector, in declaration order.
    pub fn rows_for_sector(&self, sector: Sector) -> impl Iterator<Item = &ActionConfig> {
        self.actions.iter().filter(move |action| action.sector == sector)
    }

    /// Rows of one category within one sector, in declaration order.
    pub fn rows_for_category(
        &self,
        sector: Sector,
        category: Category,
    ) -> impl Iterator<Item = &ActionConfig> {
        self.rows_for_sector(sector)
            .filter(move |action| action.category == category)
    }

    /// Rules for a category.
    pub fn category_rules(&self, category: Category) -> Option<&CategoryRules> {
        self.category_rules.get(&category)
    }

    /// Whether two categories may not share a sector. A conflict declared
    /// on either side counts.
    pub fn categories_conflict(&self, a: Category, b: Category) -> bool {
        a != b
            && (self.category_rules(a).is_some_and(|rules| rules.conflicts_with(b))
                || self.category_rules(b).is_some_and(|rules| rules.conflicts_with(a)))
    }

    /// Check the catalog for structural problems.
    ///
    /// Returns every issue found; an empty list means the catalog is valid.
    /// Unknown prerequisites are reported here but remain legal at runtime,
    /// where they simply make the action unsatisfiable.
    pub fn validate(&self) -> Vec<CatalogIssue> {
        let mut issues: Vec<CatalogIssue> = self
            .duplicates
            .iter()
            .cloned()
            .map(CatalogIssue::DuplicateId)
            .collect();

        for action in &self.actions {
            if action.unlocks_in_round == 0 {
                issues.push(CatalogIssue::ZeroUnlockRound(action.id.clone()));
            }

            for group in &action.prerequisites {
                if group.is_empty() {
                    issues.push(CatalogIssue::EmptyPrerequisiteGroup(action.id.clone()));
                }
                for required in group {
                    match self.get(required.as_str()) {
                        None => issues.push(CatalogIssue::UnknownPrerequisite {
                            action: action.id.clone(),
                            missing: required.clone(),
                        }),
                        Some(target) => self.check_same_sector(action, target, &mut issues),
                    }
                }
            }

            for replaced in &action.replaces {
                if *replaced == action.id {
                    issues.push(CatalogIssue::SelfReplacement(action.id.clone()));
                    continue;
                }
                match self.get(replaced.as_str()) {
                    None => issues.push(CatalogIssue::UnknownReplacement {
                        action: action.id.clone(),
                        missing: replaced.clone(),
                    }),
                    Some(target) => {
                        self.check_same_sector(action, target, &mut issues);
                        if target.category != action.category {
                            issues.push(CatalogIssue::CrossCategoryReplacement {
                                action: action.id.clone(),
                                category: action.category,
                                target: target.id.clone(),
                                target_category: target.category,
                            });
                        }
                    }
                }
            }
        }

        issues.extend(
            self.replacement_cycle_members()
                .into_iter()
                .map(CatalogIssue::ReplacementCycle),
        );
        issues.extend(self.missing_base_rows());
        issues
    }

    fn check_same_sector(
        &self,
        action: &ActionConfig,
        target: &ActionConfig,
        issues: &mut Vec<CatalogIssue>,
    ) {
        if target.sector != action.sector {
            issues.push(CatalogIssue::CrossSectorReference {
                action: action.id.clone(),
                sector: action.sector,
                target: target.id.clone(),
                target_sector: target.sector,
            });
        }
    }

    /// Kahn's algorithm over the replacement graph. Whatever cannot be
    /// topologically ordered sits on (or behind) a cycle.
    fn replacement_cycle_members(&self) -> Vec<ActionId> {
        let mut in_degree: BTreeMap<&str, usize> = BTreeMap::new();
        let mut adjacency: BTreeMap<&str, Vec<&str>> = BTreeMap::new();

        for action in &self.actions {
            in_degree.entry(action.id.as_str()).or_insert(0);
            adjacency.entry(action.id.as_str()).or_default();
            for replaced in &action.replaces {
                if replaced != &action.id && self.contains(replaced.as_str()) {
                    adjacency
                        .entry(action.id.as_str())
                        .or_default()
                        .push(replaced.as_str());
                    let entry = in_degree.entry(replaced.as_str()).or_insert(0);
                    *entry = entry.saturating_add(1);
                }
            }
        }

        let mut queue: VecDeque<&str> = in_degree
            .iter()
            .filter(|&(_, &degree)| degree == 0)
            .map(|(&id, _)| id)
            .collect();

        let mut ordered: BTreeSet<&str> = BTreeSet::new();
        while let Some(node) = queue.pop_front() {
            ordered.insert(node);
            if let Some(neighbors) = adjacency.get(node) {
                for &neighbor in neighbors {
                    if let Some(degree) = in_degree.get_mut(neighbor) {
                        *degree = degree.saturating_sub(1);
                        if *degree == 0 {
                            queue.push_back(neighbor);
                        }
                    }
                }
            }
        }

        in_degree
            .keys()
            .filter(|id| !ordered.contains(*id))
            .map(|id| ActionId::from(*id))
            .collect()
    }

    fn missing_base_rows(&self) -> Vec<CatalogIssue> {
        let mut seen: BTreeMap<(Sector, Category), bool> = BTreeMap::new();
        for action in &self.actions {
            let has_base = seen.entry((action.sector, action.category)).or_insert(false);
            *has_base = *has_base || action.is_base();
        }
        seen.into_iter()
            .filter(|&(_, has_base)| !has_base)
            .map(|((sector, category), _)| CatalogIssue::MissingBaseRow { sector, category })
            .collect()
    }
}

impl From<CatalogFile> for ActionCatalog {
    fn from(file: CatalogFile) -> Self {
        Self::with_category_rules(file.actions, file.categories)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use coastline_types::CostSpec;

    use super::*;

    fn row(id: &str, category: Category, unlocks: u32) -> ActionConfig {
        ActionConfig {
            id: ActionId::from(id),
            display_name: id.to_owned(),
            cost: CostSpec::Fixed(1),
            unlocks_in_round: unlocks,
            prerequisites: Vec::new(),
            replaces: Vec::new(),
            sector: Sector::OneA,
            category,
            score_weight: 1,
        }
    }

    #[test]
    fn lookup_by_str() {
        let catalog = ActionCatalog::new(vec![row("a", Category::Seawall, 1)]);
        assert_eq!(catalog.get("a").map(|a| a.category), Some(Category::Seawall));
        assert!(catalog.get("b").is_none());
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn every_category_has_rules() {
        let catalog = ActionCatalog::default();
        for category in Category::ALL {
            assert!(catalog.category_rules(category).is_some());
        }
        assert!(catalog.categories_conflict(Category::Seawall, Category::Mangroves));
        assert!(!catalog.categories_conflict(Category::Seawall, Category::Seawall));
    }

    #[test]
    fn conflict_declared_on_one_side_is_enough() {
        let mut rules = BTreeMap::new();
        for category in Category::ALL {
            rules.insert(
                category,
                CategoryRules {
                    conflicts: Vec::new(),
                    max_selections_per_round: None,
                },
            );
        }
        if let Some(seawall) = rules.get_mut(&Category::Seawall) {
            seawall.conflicts.push(Category::Mangroves);
        }
        let catalog = ActionCatalog::with_category_rules(Vec::new(), rules);
        assert!(catalog.categories_conflict(Category::Mangroves, Category::Seawall));
        assert!(!catalog.categories_conflict(Category::Mangroves, Category::LandReclamation));
    }

    #[test]
    fn duplicate_ids_keep_first_row_and_are_reported() {
        let catalog = ActionCatalog::new(vec![
            row("a", Category::Seawall, 1),
            row("a", Category::Mangroves, 1),
        ]);
        assert_eq!(catalog.get("a").map(|a| a.category), Some(Category::Seawall));
        assert!(
            catalog
                .validate()
                .contains(&CatalogIssue::DuplicateId(ActionId::from("a")))
        );
    }

    #[test]
    fn unknown_references_are_reported() {
        let mut upgrade = row("b", Category::Seawall, 1);
        upgrade.prerequisites = vec![vec![ActionId::from("ghost")]];
        upgrade.replaces = vec![ActionId::from("phantom")];
        let catalog = ActionCatalog::new(vec![upgrade]);
        let issues = catalog.validate();
        assert!(issues.iter().any(|i| matches!(i, CatalogIssue::UnknownPrerequisite { .. })));
        assert!(issues.iter().any(|i| matches!(i, CatalogIssue::UnknownReplacement { .. })));
    }

    #[test]
    fn replacement_cycles_are_detected() {
        let mut a = row("a", Category::Seawall, 1);
        let mut b = row("b", Category::Seawall, 1);
        a.replaces = vec![ActionId::from("b")];
        b.replaces = vec![ActionId::from("a")];
        let catalog = ActionCatalog::new(vec![a, b]);
        let cycles: Vec<_> = catalog
            .validate()
            .into_iter()
            .filter(|i| matches!(i, CatalogIssue::ReplacementCycle(_)))
            .collect();
        assert_eq!(cycles.len(), 2);
    }

    #[test]
    fn cross_category_and_self_replacement_are_reported() {
        let mut wall = row("wall", Category::Seawall, 1);
        wall.replaces = vec![ActionId::from("wall"), ActionId::from("trees")];
        let trees = row("trees", Category::Mangroves, 1);
        let issues = ActionCatalog::new(vec![wall, trees]).validate();
        assert!(issues.contains(&CatalogIssue::SelfReplacement(ActionId::from("wall"))));
        assert!(issues.iter().any(|i| matches!(i, CatalogIssue::CrossCategoryReplacement { .. })));
    }

    #[test]
    fn categories_need_a_round_one_base() {
        let catalog = ActionCatalog::new(vec![row("late", Category::Mangroves, 2)]);
        assert_eq!(
            catalog.validate(),
            vec![CatalogIssue::MissingBaseRow {
                sector: Sector::OneA,
                category: Category::Mangroves,
            }]
        );
    }

    #[test]
    fn yaml_catalog_parses_with_category_overrides() {
        let yaml = r"
categories:
  seawall:
    conflicts: [mangroves]
    max_selections_per_round: 2
actions:
  - id: wall-1A
    display_name: Wall
    cost: 2
    sector: 1A
    category: seawall
  - id: trees-1A
    display_name: Trees
    cost:
      default_cost: 3
      rules:
        - rounds: [2]
          cost: 1
    sector: 1A
    category: mangroves
";
        let catalog = ActionCatalog::from_yaml_str(yaml);
        assert!(catalog.is_ok(), "{catalog:?}");
        if let Ok(catalog) = catalog {
            assert_eq!(catalog.len(), 2);
            assert_eq!(
                catalog
                    .category_rules(Category::Seawall)
                    .and_then(|r| r.max_selections_per_round),
                Some(2)
            );
            assert_eq!(
                catalog
                    .category_rules(Category::Mangroves)
                    .and_then(|r| r.max_selections_per_round),
                Some(1)
            );
            assert!(catalog.validate().is_empty());
        }
    }

    #[test]
    fn file_shape_survives_a_yaml_round_trip() {
        let catalog = crate::standard::standard_catalog();
        let yaml = serde_yml::to_string(&catalog.to_file_shape());
        assert!(yaml.is_ok(), "{yaml:?}");
        let reloaded = yaml.ok().map(|text| ActionCatalog::from_yaml_str(&text));
        assert!(matches!(reloaded, Some(Ok(ref copy)) if *copy == catalog));
    }

    #[test]
    fn validated_passes_clean_catalogs_and_rejects_broken_ones() {
        assert!(crate::standard::standard_catalog().validated().is_ok());
        let broken = ActionCatalog::new(vec![row("late", Category::Mangroves, 2)]).validated();
        assert!(matches!(broken, Err(CatalogError::Invalid { ref issues }) if issues.len() == 1));
    }

    #[test]
    fn unsupported_extension_is_rejected() {
        let result = ActionCatalog::from_file(Path::new("catalog.toml"));
        assert!(matches!(result, Err(CatalogError::UnsupportedFormat { .. })));
    }
}
