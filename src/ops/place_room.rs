use crate::error::{OpError, Result};
use crate::scene::{ElementId, MapElement, ModularRoom, Scene, WallGroup};
use crate::walls;

/// Places a modular room on the grid.
///
/// The room gets a fresh wall group of its own; if the drop lands adjacent to
/// existing rooms, the pipeline immediately merges the clusters under the
/// dominant style.
pub struct PlaceRoom {
    x_px: i32,
    y_px: i32,
    tiles_w: i32,
    tiles_h: i32,
    floor_style_id: String,
    wall_style_id: String,
}

impl PlaceRoom {
    /// Creates a new `PlaceRoom` operation.
    #[must_use]
    pub fn new(
        x_px: i32,
        y_px: i32,
        tiles_w: i32,
        tiles_h: i32,
        floor_style_id: String,
        wall_style_id: String,
    ) -> Self {
        Self {
            x_px,
            y_px,
            tiles_w,
            tiles_h,
            floor_style_id,
            wall_style_id,
        }
    }

    /// Executes the operation, placing the room and regenerating walls.
    ///
    /// # Errors
    ///
    /// Returns an error if the room size is not at least one tile on both
    /// axes.
    pub fn execute(&self, scene: &mut Scene) -> Result<ElementId> {
        if self.tiles_w <= 0 || self.tiles_h <= 0 {
            return Err(OpError::InvalidInput(format!(
                "room size must be at least 1x1 tiles, got {}x{}",
                self.tiles_w, self.tiles_h
            ))
            .into());
        }

        let wall_group = scene.modular_rooms_state.wall_groups.insert(WallGroup {
            wall_style_id: self.wall_style_id.clone(),
            room_count: 1,
        });
        let id = scene.add_element(MapElement::ModularRoom(ModularRoom::new(
            self.x_px,
            self.y_px,
            self.tiles_w,
            self.tiles_h,
            self.floor_style_id.clone(),
            wall_group,
        )));
        walls::regenerate(scene);
        Ok(id)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::RoomGridError;

    #[test]
    fn placing_a_room_creates_its_wall_group() {
        let mut scene = Scene::new();
        let id = PlaceRoom::new(0, 0, 4, 4, "floor".into(), "brick".into())
            .execute(&mut scene)
            .unwrap();
        let room = scene.modular_room(id).unwrap();
        let group = &scene.modular_rooms_state().wall_groups[room.wall_group];
        assert_eq!(group.wall_style_id, "brick");
        assert_eq!(group.room_count, 1);
    }

    #[test]
    fn degenerate_size_is_rejected() {
        let mut scene = Scene::new();
        let result = PlaceRoom::new(0, 0, 0, 4, "floor".into(), "brick".into()).execute(&mut scene);
        assert!(matches!(result, Err(RoomGridError::Op(_))));
        assert_eq!(scene.modular_room_rects().len(), 0);
        assert!(scene.modular_rooms_state().wall_groups.is_empty());
    }
}
