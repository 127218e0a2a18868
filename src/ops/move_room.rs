use crate::error::Result;
use crate::scene::{ElementId, Scene};
use crate::walls;

/// Moves a modular room to a new pixel origin.
pub struct MoveRoom {
    id: ElementId,
    x_px: i32,
    y_px: i32,
}

impl MoveRoom {
    /// Creates a new `MoveRoom` operation.
    #[must_use]
    pub fn new(id: ElementId, x_px: i32, y_px: i32) -> Self {
        Self { id, x_px, y_px }
    }

    /// Executes the operation and regenerates walls.
    ///
    /// # Errors
    ///
    /// Returns an error if the element is missing or is not a modular room.
    pub fn execute(&self, scene: &mut Scene) -> Result<()> {
        let room = scene.modular_room_mut(self.id)?;
        room.x_px = self.x_px;
        room.y_px = self.y_px;
        walls::regenerate(scene);
        Ok(())
    }
}
