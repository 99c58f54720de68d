//! Entries of the shared activity log.
//!
//! The log is owned by the external realtime store and arrives in its wire
//! shape (`camelCase`, epoch-millisecond timestamps). [`ActivityLogEntry::kind`]
//! gives the typed reading of an entry without rejecting anything: the
//! resolver decides what to do with entries it cannot use.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::action::Round;
use crate::enums::Sector;
use crate::ids::{ActorId, EntryId};

/// Action id the realtime store writes for a demolition.
pub const DEMOLISH_ACTION: &str = "DEMOLISH";

/// One append-only record of a player action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct ActivityLogEntry {
    /// Entry id assigned by the store.
    pub id: EntryId,
    /// Who logged the entry.
    pub actor_id: ActorId,
    /// A catalog action id, or [`DEMOLISH_ACTION`].
    pub action_id: String,
    /// Free-form payload. For demolitions, the target sector label.
    #[serde(default)]
    pub value: Option<String>,
    /// When the entry was logged. Replay order is by this field.
    #[serde(rename = "timestampMs", with = "chrono::serde::ts_milliseconds")]
    #[ts(type = "number")]
    pub timestamp: DateTime<Utc>,
    /// Round the entry was logged in.
    pub round: Round,
}

/// Typed reading of a log entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind<'a> {
    /// Build the named catalog action. The id may be unknown to the catalog.
    Build(&'a str),
    /// Clear a sector. `None` when the payload is missing or not a sector.
    Demolish(Option<Sector>),
}

impl ActivityLogEntry {
    /// A build entry with a fresh entry id.
    pub fn build(
        actor_id: ActorId,
        action_id: impl Into<String>,
        round: Round,
        timestamp_ms: i64,
    ) -> Self {
        Self {
            id: EntryId::new(),
            actor_id,
            action_id: action_id.into(),
            value: None,
            timestamp: timestamp_from_millis(timestamp_ms),
            round,
        }
    }

    /// A demolition entry targeting `sector`, with a fresh entry id.
    pub fn demolish(actor_id: ActorId, sector: Sector, round: Round, timestamp_ms: i64) -> Self {
        Self {
            id: EntryId::new(),
            actor_id,
            action_id: DEMOLISH_ACTION.to_owned(),
            value: Some(sector.as_str().to_owned()),
            timestamp: timestamp_from_millis(timestamp_ms),
            round,
        }
    }

    /// Interpret the entry.
    pub fn kind(&self) -> EntryKind<'_> {
        if self.action_id == DEMOLISH_ACTION {
            EntryKind::Demolish(self.value.as_deref().and_then(Sector::parse_label))
        } else {
            EntryKind::Build(&self.action_id)
        }
    }

    /// Milliseconds since the Unix epoch.
    pub fn timestamp_ms(&self) -> i64 {
        self.timestamp.timestamp_millis()
    }
}

/// Convert epoch milliseconds, clamping out-of-range values to the epoch.
fn timestamp_from_millis(ms: i64) -> DateTime<Utc> {
    DateTime::from_timestamp_millis(ms).unwrap_or_default()
}
