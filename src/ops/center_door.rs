use crate::error::Result;
use crate::scene::Scene;
use crate::walls;
use crate::walls::pattern::{PatternSource, SegmentKey, SegmentPattern, SegmentState};

/// Places a centered door on a corner-adjacent segment group.
///
/// The centered pattern keeps 64 px of solid wall on both sides, so it is the
/// only door shape allowed right next to a corner pillar. It is never
/// produced by the toggle cycle.
pub struct PlaceCenterDoor {
    key: SegmentKey,
}

impl PlaceCenterDoor {
    /// Creates a new `PlaceCenterDoor` operation.
    #[must_use]
    pub fn new(key: SegmentKey) -> Self {
        Self { key }
    }

    /// Executes the operation, returning whether anything was applied.
    ///
    /// No-ops when the group is missing, too short for a door, or not
    /// corner-adjacent.
    ///
    /// # Errors
    ///
    /// Currently infallible; the `Result` keeps the operation signature
    /// uniform with the other scene mutations.
    pub fn execute(&self, scene: &mut Scene) -> Result<bool> {
        let Some(group) = scene.walls.iter().find(|g| g.key == self.key) else {
            return Ok(false);
        };
        if !group.supports_doors() || !group.is_corner_adjacent() {
            return Ok(false);
        }

        scene.modular_rooms_state.segment_states.insert(
            self.key,
            SegmentState {
                pattern: SegmentPattern::DoorCenter,
                source: PatternSource::Manual,
            },
        );
        walls::regenerate(scene);
        Ok(true)
    }
}
