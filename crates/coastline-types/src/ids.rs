//! Type-safe identifier wrappers.
//!
//! Log entries and actors carry identifiers assigned by the realtime store.
//! Their format is the store's business (push keys, UUIDs, seat names), so
//! they are kept as opaque strings; ids minted locally are UUID v7. Catalog
//! actions are keyed by human-readable string ids such as `seawall-0.5m-1A`,
//! wrapped in [`ActionId`] so they cannot be confused with free-form log
//! payloads.

use std::borrow::Borrow;

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// Generates an opaque string identifier newtype with standard derives.
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
        #[ts(export, export_to = "bindings/")]
        pub struct $name(pub String);

        impl $name {
            /// Create a new identifier from a UUID v7 (time-ordered).
            pub fn new() -> Self {
                Self(Uuid::now_v7().to_string())
            }

            /// View the id as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<Uuid> for $name {
            fn from(id: Uuid) -> Self {
                Self(id.to_string())
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_owned())
            }
        }
    };
}

define_id! {
    /// Identifier of an entry in the shared activity log.
    EntryId
}

define_id! {
    /// Identifier of the player (or station operator) who logged an entry.
    ActorId
}

/// Identifier of a catalog action, e.g. `seawall-0.5m-1A`.
///
/// Unique within a catalog. Implements [`Borrow<str>`] so maps keyed by
/// `ActionId` can be queried with a plain `&str` taken from a log entry.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct ActionId(pub String);

impl ActionId {
    /// Wrap an owned or borrowed string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// View the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for ActionId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ActionId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for ActionId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ActionId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<String> for ActionId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;

    #[test]
    fn minted_ids_are_uuid_v7() {
        let entry = EntryId::new();
        let parsed = Uuid::parse_str(entry.as_str()).ok();
        assert_eq!(parsed.map(|id| id.get_version_num()), Some(7));
        assert_ne!(EntryId::new(), entry);
    }

    #[test]
    fn store_ids_need_not_be_uuids() {
        let actor: Result<ActorId, _> = serde_json::from_str("\"player-1\"");
        assert_eq!(actor.ok(), Some(ActorId::from("player-1")));
    }

    #[test]
    fn action_id_serializes_as_plain_string() {
        let id = ActionId::from("seawall-0.5m-1A");
        let json = serde_json::to_string(&id).ok();
        assert_eq!(json.as_deref(), Some("\"seawall-0.5m-1A\""));
    }

    #[test]
    fn action_id_set_is_queryable_by_str() {
        let set: BTreeSet<ActionId> = [ActionId::from("mangroves-2B")].into_iter().collect();
        assert!(set.contains("mangroves-2B"));
        assert!(!set.contains("mangroves-2A"));
    }

    #[test]
    fn entry_id_display_is_the_raw_id() {
        let id = EntryId::from("-NxAbc123");
        assert_eq!(id.to_string(), "-NxAbc123");
    }
}
