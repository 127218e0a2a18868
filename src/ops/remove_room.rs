use crate::error::Result;
use crate::scene::{ElementId, Scene};
use crate::walls;

/// Removes a modular room from the scene.
///
/// The room's wall group disappears with its last member; neighbours get
/// their shared edges reclassified as external, with manual door state
/// carried across the reclassification.
pub struct RemoveRoom {
    id: ElementId,
}

impl RemoveRoom {
    /// Creates a new `RemoveRoom` operation.
    #[must_use]
    pub fn new(id: ElementId) -> Self {
        Self { id }
    }

    /// Executes the operation and regenerates walls.
    ///
    /// # Errors
    ///
    /// Returns an error if the element is missing or is not a modular room.
    pub fn execute(&self, scene: &mut Scene) -> Result<()> {
        scene.modular_room(self.id)?;
        scene.remove_element(self.id)?;
        walls::regenerate(scene);
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::{RoomGridError, SceneError};
    use crate::ops::{PlaceRoom, ToggleDoor};
    use crate::walls::pattern::{DoorSide, PatternSource, SegmentPattern};

    #[test]
    fn removing_the_last_member_drops_the_group() {
        let mut scene = Scene::new();
        let id = PlaceRoom::new(0, 0, 4, 4, "floor".into(), "brick".into())
            .execute(&mut scene)
            .unwrap();
        RemoveRoom::new(id).execute(&mut scene).unwrap();
        assert!(scene.modular_rooms_state().wall_groups.is_empty());
        assert!(scene.walls().is_empty());
        assert!(matches!(
            RemoveRoom::new(id).execute(&mut scene),
            Err(RoomGridError::Scene(SceneError::EntityNotFound(_)))
        ));
    }

    #[test]
    fn manual_door_survives_shared_to_external_reclassification() {
        let mut scene = Scene::new();
        PlaceRoom::new(0, 0, 4, 4, "floor".into(), "brick".into())
            .execute(&mut scene)
            .unwrap();
        let neighbour = PlaceRoom::new(256, 0, 4, 4, "floor".into(), "brick".into())
            .execute(&mut scene)
            .unwrap();

        let key = scene
            .walls()
            .iter()
            .find(|g| g.is_shared)
            .map(|g| g.key)
            .unwrap();
        ToggleDoor::new(key, DoorSide::Right).execute(&mut scene).unwrap();

        RemoveRoom::new(neighbour).execute(&mut scene).unwrap();

        // The edge is now external but sits on the same grid line, so the
        // manual pattern must still be there.
        let group = scene.walls().iter().find(|g| g.key == key).unwrap();
        assert!(!group.is_shared);
        assert_eq!(group.pattern, SegmentPattern::DoorRight);
        assert_eq!(group.source, PatternSource::Manual);
    }
}
