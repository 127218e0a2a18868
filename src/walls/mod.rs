//! The modular wall/door pipeline.
//!
//! Room placement or movement triggers a full synchronous recompute:
//! adjacency classification, wall-group merging, edge derivation, 256 px
//! segment partitioning, then pattern overlay. Manually toggled segment
//! states are copied forward unchanged; automatic states are regenerated from
//! scratch. The whole pipeline runs to completion inside one mutation.

pub mod adjacency;
pub mod edge;
pub mod groups;
pub mod pattern;
pub mod segment;
pub mod simulate;

pub use adjacency::{classify_adjacencies, Adjacency};
pub use edge::{collect_edges, EdgeDescriptor};
pub use pattern::{
    DoorSide, PatternSource, SegmentKey, SegmentPattern, SegmentState, SegmentStateMap,
};
pub use segment::{
    components_for, partition_edge, ComponentKind, SegmentComponent, WallSegmentGroup,
};
pub use simulate::{simulate_drop, DropSimulation};

use tracing::trace;

use crate::scene::Scene;

/// Rebuilds the derived walls layout of a scene.
///
/// Also rewrites the segment state map: manual entries whose key still exists
/// are carried forward untouched, auto entries reset to solid, and entries
/// whose key no longer matches any group are pruned.
pub fn regenerate(scene: &mut Scene) {
    let rooms = scene.modular_room_rects();
    let adjacencies = adjacency::classify_adjacencies(&rooms);
    groups::merge_wall_groups(scene, &adjacencies);

    let edges = edge::collect_edges(&rooms, &adjacencies);
    let mut walls = Vec::new();
    for descriptor in &edges {
        let style = scene
            .modular_room(descriptor.room_a)
            .ok()
            .and_then(|room| scene.modular_rooms_state.wall_groups.get(room.wall_group))
            .map(|group| group.wall_style_id.clone())
            .unwrap_or_default();
        walls.extend(segment::partition_edge(descriptor, &style));
    }

    let mut next_states = SegmentStateMap::new();
    for group in &mut walls {
        let state = match scene.modular_rooms_state.segment_states.get(&group.key) {
            Some(state) if state.source == PatternSource::Manual => *state,
            _ => SegmentState::AUTO_SOLID,
        };
        group.pattern = state.pattern;
        group.source = state.source;
        group.components = segment::components_for(state.pattern, group.span_px());
        next_states.insert(group.key, state);
    }
    scene.modular_rooms_state.segment_states = next_states;

    trace!(
        rooms = rooms.len(),
        shared_edges = adjacencies.len(),
        segment_groups = walls.len(),
        "regenerated walls layout"
    );
    scene.walls = walls;
}
