//! Closed enumerations shared by the catalog, the resolver and the UI.
//!
//! Categories and sectors are fixed by the board layout, so they are plain
//! enums with lookup tables keyed by the variant rather than strings
//! compared at runtime.

use core::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// ---------------------------------------------------------------------------
// Categories (measure types)
// ---------------------------------------------------------------------------

/// A coastal-protection approach a sector can commit to.
///
/// Only one category may be the committed path of a sector at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "kebab-case")]
#[ts(export, export_to = "bindings/")]
pub enum Category {
    /// Hard sea defence raised in height tiers.
    Seawall,
    /// Planted mangrove belt that dampens waves.
    Mangroves,
    /// Raising and extending the shoreline with fill.
    LandReclamation,
    /// Movable barrier closing off the estuary during surges.
    StormSurgeBarrier,
}

impl Category {
    /// Every category, in catalog order.
    pub const ALL: [Self; 4] = [
        Self::Seawall,
        Self::Mangroves,
        Self::LandReclamation,
        Self::StormSurgeBarrier,
    ];

    /// Wire name of the category (`kebab-case`).
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Seawall => "seawall",
            Self::Mangroves => "mangroves",
            Self::LandReclamation => "land-reclamation",
            Self::StormSurgeBarrier => "storm-surge-barrier",
        }
    }

    /// Human-readable label for breakdown screens.
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Seawall => "Seawall",
            Self::Mangroves => "Mangroves",
            Self::LandReclamation => "Land reclamation",
            Self::StormSurgeBarrier => "Storm surge barrier",
        }
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Sectors and stations
// ---------------------------------------------------------------------------

/// An independent sub-area of the board.
///
/// Serialized as the short board label (`"1A"` .. `"3B"`). The digit is the
/// owning player station.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum Sector {
    /// Station 1, western sector.
    #[serde(rename = "1A")]
    OneA,
    /// Station 1, eastern sector.
    #[serde(rename = "1B")]
    OneB,
    /// Station 2, western sector.
    #[serde(rename = "2A")]
    TwoA,
    /// Station 2, eastern sector.
    #[serde(rename = "2B")]
    TwoB,
    /// Station 3, western sector.
    #[serde(rename = "3A")]
    ThreeA,
    /// Station 3, eastern sector.
    #[serde(rename = "3B")]
    ThreeB,
}

impl Sector {
    /// Every sector, in board order.
    pub const ALL: [Self; 6] = [
        Self::OneA,
        Self::OneB,
        Self::TwoA,
        Self::TwoB,
        Self::ThreeA,
        Self::ThreeB,
    ];

    /// Board label, identical to the serialized form.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OneA => "1A",
            Self::OneB => "1B",
            Self::TwoA => "2A",
            Self::TwoB => "2B",
            Self::ThreeA => "3A",
            Self::ThreeB => "3B",
        }
    }

    /// The player station that owns this sector.
    pub const fn station(self) -> Station {
        match self {
            Self::OneA | Self::OneB => Station::One,
            Self::TwoA | Self::TwoB => Station::Two,
            Self::ThreeA | Self::ThreeB => Station::Three,
        }
    }

    /// Parse a board label, tolerating surrounding whitespace and a
    /// lowercase letter. Returns `None` for anything else.
    pub fn parse_label(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::ALL
            .into_iter()
            .find(|sector| sector.as_str().eq_ignore_ascii_case(label))
    }
}

impl core::fmt::Display for Sector {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is not a known sector label.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown sector label: {0:?}")]
pub struct ParseSectorError(pub String);

impl FromStr for Sector {
    type Err = ParseSectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_label(s).ok_or_else(|| ParseSectorError(s.to_owned()))
    }
}

/// A player seat. Each station owns two sectors and its own coin allowance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum Station {
    /// Owns sectors 1A and 1B.
    One,
    /// Owns sectors 2A and 2B.
    Two,
    /// Owns sectors 3A and 3B.
    Three,
}

impl Station {
    /// Every station, in seat order.
    pub const ALL: [Self; 3] = [Self::One, Self::Two, Self::Three];

    /// The two sectors owned by this station.
    pub const fn sectors(self) -> [Sector; 2] {
        match self {
            Self::One => [Sector::OneA, Sector::OneB],
            Self::Two => [Sector::TwoA, Sector::TwoB],
            Self::Three => [Sector::ThreeA, Sector::ThreeB],
        }
    }

    /// Seat number, starting at 1.
    pub const fn number(self) -> u8 {
        match self {
            Self::One => 1,
            Self::Two => 2,
            Self::Three => 3,
        }
    }

    /// Station for a seat number, if it exists.
    pub const fn from_number(number: u8) -> Option<Self> {
        match number {
            1 => Some(Self::One),
            2 => Some(Self::Two),
            3 => Some(Self::Three),
            _ => None,
        }
    }
}

impl core::fmt::Display for Station {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "station {}", self.number())
    }
}

// ---------------------------------------------------------------------------
// Action status
// ---------------------------------------------------------------------------

/// What a player may do with a catalog action right now.
///
/// Derived on every render from the log; never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "kebab-case")]
#[ts(export, export_to = "bindings/")]
pub enum ActionStatus {
    /// The action is currently in effect.
    Completed,
    /// The action may be chosen this round.
    Selectable,
    /// Another category owns the sector, or this category's per-round
    /// quota is used up.
    LockedByConflict,
    /// Prerequisites are unmet or the action has not unlocked yet.
    LockedByPrerequisite,
    /// An active upgrade supersedes this action.
    Replaced,
}

impl ActionStatus {
    /// Whether the status is one of the two locked variants.
    pub const fn is_locked(self) -> bool {
        matches!(self, Self::LockedByConflict | Self::LockedByPrerequisite)
    }
}
