//! Drop/merge preview for an in-flight drag.
//!
//! Runs the real placement pipeline against a throwaway clone of the scene so
//! the preview can never leak into persisted state. On commit the caller runs
//! [`crate::ops::PlaceRoom`] for real and gets the same outcome.

use std::collections::BTreeSet;

use crate::ops::PlaceRoom;
use crate::scene::Scene;

use super::pattern::SegmentKey;
use super::segment::WallSegmentGroup;

/// Non-committing preview of dropping a floor tile at a candidate position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropSimulation {
    pub x_px: i32,
    pub y_px: i32,
    pub tiles_w: i32,
    pub tiles_h: i32,
    /// Whether the drop would join the new room to an existing cluster.
    pub merges: bool,
    /// Wall style the new room would end up with after dominance resolution.
    pub dominant_wall_style_id: String,
    /// Door-bearing segments that would appear.
    pub doors_added: Vec<SegmentKey>,
    /// Door-bearing segments that would disappear.
    pub doors_removed: Vec<SegmentKey>,
}

/// Simulates dropping a room without mutating the scene.
#[must_use]
pub fn simulate_drop(
    scene: &Scene,
    x_px: i32,
    y_px: i32,
    tiles_w: i32,
    tiles_h: i32,
    floor_style_id: &str,
    wall_style_id: &str,
) -> DropSimulation {
    let before = door_keys(scene.walls());

    let mut preview = scene.clone();
    let placed = PlaceRoom::new(
        x_px,
        y_px,
        tiles_w,
        tiles_h,
        floor_style_id.to_owned(),
        wall_style_id.to_owned(),
    )
    .execute(&mut preview);

    let Ok(room_id) = placed else {
        // Malformed candidates preview as a plain no-merge drop.
        return DropSimulation {
            x_px,
            y_px,
            tiles_w,
            tiles_h,
            merges: false,
            dominant_wall_style_id: wall_style_id.to_owned(),
            doors_added: Vec::new(),
            doors_removed: Vec::new(),
        };
    };

    let after = door_keys(preview.walls());
    let (merges, dominant_wall_style_id) = preview
        .modular_room(room_id)
        .ok()
        .and_then(|room| preview.modular_rooms_state().wall_groups.get(room.wall_group))
        .map_or_else(
            || (false, wall_style_id.to_owned()),
            |group| (group.room_count > 1, group.wall_style_id.clone()),
        );

    DropSimulation {
        x_px,
        y_px,
        tiles_w,
        tiles_h,
        merges,
        dominant_wall_style_id,
        doors_added: after.difference(&before).copied().collect(),
        doors_removed: before.difference(&after).copied().collect(),
    }
}

/// Keys of all groups currently rendering a door. Short remainder groups
/// render solid whatever their recorded pattern says, so they never count.
fn door_keys(walls: &[WallSegmentGroup]) -> BTreeSet<SegmentKey> {
    walls
        .iter()
        .filter(|group| group.supports_doors() && group.pattern.has_door())
        .map(|group| group.key)
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::ops::{PlaceRoom, ToggleDoor};
    use crate::walls::pattern::DoorSide;

    fn place(scene: &mut Scene, x_tiles: i32, y_tiles: i32, w: i32, h: i32, style: &str) {
        PlaceRoom::new(x_tiles * 64, y_tiles * 64, w, h, "floor".into(), style.into())
            .execute(scene)
            .unwrap();
    }

    #[test]
    fn simulation_never_mutates_the_scene() {
        let mut scene = Scene::new();
        place(&mut scene, 0, 0, 4, 4, "stone");
        let snapshot = serde_json::to_string(&scene).unwrap();

        let sim = simulate_drop(&scene, 256, 0, 4, 4, "floor", "brick");
        assert!(sim.merges);
        assert_eq!(serde_json::to_string(&scene).unwrap(), snapshot);
    }

    #[test]
    fn isolated_drop_does_not_merge() {
        let mut scene = Scene::new();
        place(&mut scene, 0, 0, 4, 4, "stone");
        let sim = simulate_drop(&scene, 10 * 64, 10 * 64, 4, 4, "floor", "brick");
        assert!(!sim.merges);
        assert_eq!(sim.dominant_wall_style_id, "brick");
        assert!(sim.doors_added.is_empty() && sim.doors_removed.is_empty());
    }

    #[test]
    fn merging_drop_reports_dominant_style() {
        let mut scene = Scene::new();
        place(&mut scene, 0, 0, 4, 4, "stone");
        place(&mut scene, 4, 0, 4, 4, "stone");
        let sim = simulate_drop(&scene, 8 * 64, 0, 4, 4, "floor", "brick");
        assert!(sim.merges);
        assert_eq!(sim.dominant_wall_style_id, "stone");
    }

    #[test]
    fn malformed_candidate_previews_as_plain_drop() {
        let scene = Scene::new();
        let sim = simulate_drop(&scene, 0, 0, 0, 4, "floor", "brick");
        assert!(!sim.merges);
        assert!(sim.doors_added.is_empty());
    }

    #[test]
    fn drop_that_repartitions_a_doored_edge_reports_removal() {
        let mut scene = Scene::new();
        place(&mut scene, 0, 0, 4, 4, "stone");
        // Put a manual door on the room's right side.
        let key = scene
            .walls()
            .iter()
            .find(|g| g.position_px == 256)
            .map(|g| g.key)
            .unwrap();
        ToggleDoor::new(key, DoorSide::Left)
            .execute(&mut scene)
            .unwrap();
        assert!(!door_keys(scene.walls()).is_empty());

        // A room dropped flush against that side shifts nothing: the key is
        // geometric, so the door survives the shared reclassification.
        let sim = simulate_drop(&scene, 256, 0, 4, 4, "floor", "stone");
        assert!(sim.doors_removed.is_empty());

        // A room dropped offset by one tile splits the edge: the group at the
        // door's key shrinks below 256 px and stops rendering its door.
        let sim = simulate_drop(&scene, 256, 64, 4, 4, "floor", "stone");
        assert!(sim.doors_removed.contains(&key));
    }
}
