use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Painted terrain, keyed by grid-tile coordinate.
///
/// Keys serialize as `"x:y"` strings to match the persisted map shape.
pub type TerrainMap = BTreeMap<TileCoord, TerrainTile>;

/// One painted terrain tile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TerrainTile {
    pub texture_id: String,
    /// Quarter-turn rotation, 0..=3.
    pub rotation: u8,
}

/// A grid-tile coordinate used as a terrain key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TileCoord {
    pub x: i32,
    pub y: i32,
}

impl TileCoord {
    #[must_use]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for TileCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.x, self.y)
    }
}

/// Failure to parse a `"x:y"` coordinate string.
#[derive(Debug, Error)]
#[error("malformed tile coordinate: {0}")]
pub struct TileCoordParseError(String);

impl FromStr for TileCoord {
    type Err = TileCoordParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (x, y) = s
            .split_once(':')
            .ok_or_else(|| TileCoordParseError(s.to_owned()))?;
        let x = x.parse().map_err(|_| TileCoordParseError(s.to_owned()))?;
        let y = y.parse().map_err(|_| TileCoordParseError(s.to_owned()))?;
        Ok(Self { x, y })
    }
}

impl Serialize for TileCoord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TileCoord {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(D::Error::custom)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn coord_string_round_trip() {
        let coord = TileCoord::new(-3, 12);
        assert_eq!(coord.to_string(), "-3:12");
        assert_eq!("-3:12".parse::<TileCoord>().unwrap(), coord);
    }

    #[test]
    fn malformed_coord_fails_to_parse() {
        assert!("12".parse::<TileCoord>().is_err());
        assert!("a:b".parse::<TileCoord>().is_err());
    }

    #[test]
    fn terrain_map_uses_string_keys() {
        let mut map = TerrainMap::new();
        map.insert(
            TileCoord::new(2, 5),
            TerrainTile {
                texture_id: "grass".into(),
                rotation: 1,
            },
        );
        let json = serde_json::to_value(&map).unwrap();
        assert_eq!(json["2:5"]["textureId"], "grass");

        let back: TerrainMap = serde_json::from_value(json).unwrap();
        assert_eq!(back, map);
    }
}
