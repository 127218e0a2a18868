//! Per-segment door pattern state machine.
//!
//! Every 256 px wall segment group holds one pattern. Patterns set by a user
//! toggle are tagged `Manual` and survive regeneration unchanged; `Auto`
//! patterns are freely reset. The left/right naming is inverted relative to
//! naive expectation: `DoorLeft` means the door occupies the left half
//! (quarters A+B) and wall the right half (C+D).

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

use crate::grid::Orientation;

/// Door/wall configuration of one segment group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SegmentPattern {
    #[serde(rename = "SOLID_256")]
    Solid256,
    #[serde(rename = "DOOR_LEFT")]
    DoorLeft,
    #[serde(rename = "DOOR_RIGHT")]
    DoorRight,
    #[serde(rename = "DOOR_BOTH")]
    DoorBoth,
    /// Centered door with 64 px of solid wall on both sides. Only set on
    /// corner-adjacent groups by the explicit center-door operation; the
    /// toggle cycle never produces it.
    #[serde(rename = "DOOR_CENTER")]
    DoorCenter,
}

/// Which half of a segment group a toggle targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DoorSide {
    Left,
    Right,
}

impl SegmentPattern {
    /// Applies one user toggle.
    ///
    /// The cycle is closed: every state has a defined successor for both
    /// sides. `DoorCenter` has no row in the toggle table and behaves as
    /// `Solid256`.
    #[must_use]
    pub fn toggled(self, side: DoorSide) -> Self {
        match (self, side) {
            (Self::Solid256 | Self::DoorCenter, DoorSide::Left) => Self::DoorLeft,
            (Self::Solid256 | Self::DoorCenter, DoorSide::Right) => Self::DoorRight,
            (Self::DoorLeft, DoorSide::Left) | (Self::DoorRight, DoorSide::Right) => Self::Solid256,
            (Self::DoorLeft, DoorSide::Right) | (Self::DoorRight, DoorSide::Left) => Self::DoorBoth,
            (Self::DoorBoth, DoorSide::Left) => Self::DoorRight,
            (Self::DoorBoth, DoorSide::Right) => Self::DoorLeft,
        }
    }

    /// Whether this pattern contains a door opening.
    #[must_use]
    pub fn has_door(self) -> bool {
        !matches!(self, Self::Solid256)
    }
}

/// Provenance of a segment state.
///
/// `Manual` state is authoritative: regeneration copies it forward unchanged
/// and only further user toggles may replace it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatternSource {
    Auto,
    Manual,
}

/// Pattern plus provenance for one segment group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentState {
    pub pattern: SegmentPattern,
    pub source: PatternSource,
}

impl SegmentState {
    /// The state every newly created group starts in.
    pub const AUTO_SOLID: Self = Self {
        pattern: SegmentPattern::Solid256,
        source: PatternSource::Auto,
    };
}

/// Geometric identity of a wall segment group.
///
/// The key is derived from the grid line the group sits on, not from the
/// rooms that own it, so segment state survives a shared edge being
/// reclassified as external (or vice versa) when rooms come and go.
/// Serializes as `"<h|v>:<position_px>:<start_px>"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SegmentKey {
    pub orientation: Orientation,
    /// Pixel coordinate of the grid line the edge lies on.
    pub position_px: i32,
    /// Pixel offset of the group's start along the edge.
    pub start_px: i32,
}

impl fmt::Display for SegmentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}",
            self.orientation.letter(),
            self.position_px,
            self.start_px
        )
    }
}

/// Failure to parse a segment key string.
#[derive(Debug, Error)]
#[error("malformed segment key: {0}")]
pub struct SegmentKeyParseError(String);

impl FromStr for SegmentKey {
    type Err = SegmentKeyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || SegmentKeyParseError(s.to_owned());
        let mut parts = s.splitn(3, ':');
        let orientation = parts
            .next()
            .and_then(|p| p.chars().next())
            .and_then(Orientation::from_letter)
            .ok_or_else(bad)?;
        let position_px = parts.next().and_then(|p| p.parse().ok()).ok_or_else(bad)?;
        let start_px = parts.next().and_then(|p| p.parse().ok()).ok_or_else(bad)?;
        Ok(Self {
            orientation,
            position_px,
            start_px,
        })
    }
}

impl Serialize for SegmentKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for SegmentKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(D::Error::custom)
    }
}

/// Segment states keyed by geometric segment key.
pub type SegmentStateMap = BTreeMap<SegmentKey, SegmentState>;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn toggle_table_matches_transition_rules() {
        use DoorSide::{Left, Right};
        use SegmentPattern::{DoorBoth, DoorLeft, DoorRight, Solid256};

        assert_eq!(Solid256.toggled(Left), DoorLeft);
        assert_eq!(Solid256.toggled(Right), DoorRight);
        assert_eq!(DoorLeft.toggled(Left), Solid256);
        assert_eq!(DoorLeft.toggled(Right), DoorBoth);
        assert_eq!(DoorRight.toggled(Left), DoorBoth);
        assert_eq!(DoorRight.toggled(Right), Solid256);
        assert_eq!(DoorBoth.toggled(Left), DoorRight);
        assert_eq!(DoorBoth.toggled(Right), DoorLeft);
    }

    #[test]
    fn toggle_cycle_is_closed() {
        // Four toggles on the same side always return to the start.
        for side in [DoorSide::Left, DoorSide::Right] {
            let mut p = SegmentPattern::Solid256;
            for _ in 0..4 {
                p = p.toggled(side);
            }
            assert_eq!(p, SegmentPattern::Solid256);
        }
    }

    #[test]
    fn center_toggles_like_solid() {
        assert_eq!(
            SegmentPattern::DoorCenter.toggled(DoorSide::Left),
            SegmentPattern::DoorLeft
        );
        assert_eq!(
            SegmentPattern::DoorCenter.toggled(DoorSide::Right),
            SegmentPattern::DoorRight
        );
    }

    #[test]
    fn key_string_round_trip() {
        let key = SegmentKey {
            orientation: Orientation::Vertical,
            position_px: 256,
            start_px: -128,
        };
        assert_eq!(key.to_string(), "v:256:-128");
        assert_eq!("v:256:-128".parse::<SegmentKey>().unwrap(), key);
    }

    #[test]
    fn malformed_keys_fail_to_parse() {
        assert!("x:1:2".parse::<SegmentKey>().is_err());
        assert!("h:1".parse::<SegmentKey>().is_err());
        assert!("h:one:2".parse::<SegmentKey>().is_err());
    }

    #[test]
    fn pattern_serializes_with_wire_names() {
        let json = serde_json::to_value(SegmentPattern::Solid256).unwrap();
        assert_eq!(json, "SOLID_256");
        let json = serde_json::to_value(SegmentPattern::DoorCenter).unwrap();
        assert_eq!(json, "DOOR_CENTER");
    }

    #[test]
    fn state_map_round_trips_through_json() {
        let mut map = SegmentStateMap::new();
        map.insert(
            SegmentKey {
                orientation: Orientation::Horizontal,
                position_px: 512,
                start_px: 0,
            },
            SegmentState {
                pattern: SegmentPattern::DoorLeft,
                source: PatternSource::Manual,
            },
        );
        let json = serde_json::to_string(&map).unwrap();
        let back: SegmentStateMap = serde_json::from_str(&json).unwrap();
        assert_eq!(back, map);
    }
}
