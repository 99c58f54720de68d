//! Error types for the `coastline-catalog` crate.
//!
//! Loading a catalog can fail on I/O or parsing. A catalog that parses but
//! breaks structural rules is reported through [`CatalogIssue`] values,
//! which [`CatalogError::Invalid`] wraps when the caller asks for a strict
//! load.

use std::path::PathBuf;

use coastline_types::{ActionId, Category, Sector};

/// Errors that can occur when loading a catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Failed to read the catalog file from disk.
    #[error("failed to read catalog file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse catalog YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },

    /// Failed to parse JSON content.
    #[error("failed to parse catalog JSON: {source}")]
    Json {
        /// The underlying JSON parse error.
        #[from]
        source: serde_json::Error,
    },

    /// The file extension is neither YAML nor JSON.
    #[error("unsupported catalog format: {}", path.display())]
    UnsupportedFormat {
        /// The offending path.
        path: PathBuf,
    },

    /// The catalog parsed but failed validation.
    #[error("catalog failed validation with {} issue(s)", issues.len())]
    Invalid {
        /// Every issue found.
        issues: Vec<CatalogIssue>,
    },
}

impl From<serde_yml::Error> for CatalogError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// A structural problem found by [`ActionCatalog::validate`].
///
/// [`ActionCatalog::validate`]: crate::ActionCatalog::validate
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogIssue {
    /// Two rows share an id. The first row wins lookups.
    #[error("duplicate action id '{0}'")]
    DuplicateId(ActionId),

    /// A prerequisite names an action that is not in the catalog.
    #[error("action '{action}' requires unknown action '{missing}'")]
    UnknownPrerequisite {
        /// The action declaring the prerequisite.
        action: ActionId,
        /// The id that could not be found.
        missing: ActionId,
    },

    /// An AND-group with no ids, which would always be satisfied.
    #[error("action '{0}' declares an empty prerequisite group")]
    EmptyPrerequisiteGroup(ActionId),

    /// A replacement names an action that is not in the catalog.
    #[error("action '{action}' replaces unknown action '{missing}'")]
    UnknownReplacement {
        /// The upgrading action.
        action: ActionId,
        /// The id that could not be found.
        missing: ActionId,
    },

    /// A prerequisite or replacement points into another sector.
    #[error("action '{action}' in sector {sector} references '{target}' in sector {target_sector}")]
    CrossSectorReference {
        /// The referencing action.
        action: ActionId,
        /// Its sector.
        sector: Sector,
        /// The referenced action.
        target: ActionId,
        /// The referenced action's sector.
        target_sector: Sector,
    },

    /// An upgrade replaces an action of a different category.
    #[error("action '{action}' ({category}) replaces '{target}' ({target_category})")]
    CrossCategoryReplacement {
        /// The upgrading action.
        action: ActionId,
        /// Its category.
        category: Category,
        /// The replaced action.
        target: ActionId,
        /// The replaced action's category.
        target_category: Category,
    },

    /// An action lists itself in `replaces`.
    #[error("action '{0}' replaces itself")]
    SelfReplacement(ActionId),

    /// The action sits on a cycle of replacement edges.
    #[error("action '{0}' is part of a replacement cycle")]
    ReplacementCycle(ActionId),

    /// Rounds start at 1.
    #[error("action '{0}' unlocks in round 0")]
    ZeroUnlockRound(ActionId),

    /// A category has rows in a sector but none that unlocks in round 1,
    /// so no competing path could ever lock it out.
    #[error("category {category} has no round-1 base action in sector {sector}")]
    MissingBaseRow {
        /// The sector.
        sector: Sector,
        /// The category without a base row.
        category: Category,
    },
}
