use crate::error::Result;
use crate::scene::Scene;
use crate::walls;
use crate::walls::pattern::{DoorSide, PatternSource, SegmentKey, SegmentState};

/// Toggles a door on one half of a wall segment group.
///
/// Always records `Manual` provenance: once a user touches a segment, the
/// pipeline may never silently reset it. Toggling a segment that does not
/// exist (or cannot host a door) is a no-op, not an error.
pub struct ToggleDoor {
    key: SegmentKey,
    side: DoorSide,
}

impl ToggleDoor {
    /// Creates a new `ToggleDoor` operation.
    #[must_use]
    pub fn new(key: SegmentKey, side: DoorSide) -> Self {
        Self { key, side }
    }

    /// Executes the toggle, returning whether anything was applied.
    ///
    /// # Errors
    ///
    /// Currently infallible; the `Result` keeps the operation signature
    /// uniform with the other scene mutations.
    pub fn execute(&self, scene: &mut Scene) -> Result<bool> {
        let Some(group) = scene.walls.iter().find(|g| g.key == self.key) else {
            return Ok(false);
        };
        if !group.supports_doors() {
            return Ok(false);
        }

        let current = scene
            .modular_rooms_state
            .segment_states
            .get(&self.key)
            .map_or(SegmentState::AUTO_SOLID.pattern, |state| state.pattern);
        scene.modular_rooms_state.segment_states.insert(
            self.key,
            SegmentState {
                pattern: current.toggled(self.side),
                source: PatternSource::Manual,
            },
        );
        walls::regenerate(scene);
        Ok(true)
    }
}
