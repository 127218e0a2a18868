use serde::{Deserialize, Serialize};
use slotmap::SlotMap;

use crate::grid::{TileRect, TILE_PX};
use crate::walls::pattern::SegmentStateMap;

slotmap::new_key_type! {
    /// Unique identifier for a wall group.
    pub struct WallGroupId;
}

/// A rectangular floor tile placed on the grid.
///
/// The origin is in pixels (kept grid-aligned by the editor), the size in
/// tiles. Wall geometry is not stored here — it is derived from adjacency and
/// lives in the scene's [`ModularRoomsState`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModularRoom {
    pub x_px: i32,
    pub y_px: i32,
    pub tiles_w: i32,
    pub tiles_h: i32,
    pub floor_style_id: String,
    pub wall_group: WallGroupId,
}

impl ModularRoom {
    #[must_use]
    pub fn new(
        x_px: i32,
        y_px: i32,
        tiles_w: i32,
        tiles_h: i32,
        floor_style_id: String,
        wall_group: WallGroupId,
    ) -> Self {
        Self {
            x_px,
            y_px,
            tiles_w,
            tiles_h,
            floor_style_id,
            wall_group,
        }
    }

    /// Tile-grid footprint of the room, or `None` for malformed sizes.
    ///
    /// Malformed rooms are skipped by the adjacency classifier rather than
    /// raised as errors.
    #[must_use]
    pub fn tile_rect(&self) -> Option<TileRect> {
        TileRect::new(
            self.x_px.div_euclid(TILE_PX),
            self.y_px.div_euclid(TILE_PX),
            self.tiles_w,
            self.tiles_h,
        )
    }
}

/// A connected cluster of rooms sharing one wall visual style.
///
/// `room_count` decides which style wins when two clusters become adjacent:
/// the larger count dominates, equal counts fall back to the smaller group id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WallGroup {
    pub wall_style_id: String,
    pub room_count: u32,
}

/// Persistent modular-room bookkeeping for one scene.
///
/// Segment states keyed by geometric segment keys are the authoritative door
/// representation; the walls layout itself is derived and never persisted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModularRoomsState {
    pub wall_groups: SlotMap<WallGroupId, WallGroup>,
    pub segment_states: SegmentStateMap,
}
