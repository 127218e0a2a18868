//! Wall-group clustering and style dominance.
//!
//! Rooms connected through adjacency form one cluster and must share one wall
//! style. When clusters meet, the group with the larger room count wins; on a
//! tie the smaller group id wins. Groups are never deleted directly — they
//! disappear when no room references them anymore.

use std::collections::{HashMap, VecDeque};

use tracing::debug;

use crate::scene::{ElementId, Scene, WallGroupId};

use super::adjacency::Adjacency;

/// Reassigns every room's wall group according to the current adjacency,
/// merging clusters under their dominant group and pruning orphaned groups.
pub fn merge_wall_groups(scene: &mut Scene, adjacencies: &[Adjacency]) {
    let room_ids: Vec<ElementId> = scene
        .elements()
        .filter(|(_, element)| element.as_modular_room().is_some())
        .map(|(id, _)| id)
        .collect();
    if room_ids.is_empty() {
        scene.modular_rooms_state.wall_groups.clear();
        return;
    }

    let components = connected_components(&room_ids, adjacencies);

    let mut merges = 0_usize;
    for component in &components {
        let Some(dominant) = dominant_group(scene, component) else {
            continue;
        };
        for &room_id in component {
            if let Ok(room) = scene.modular_room_mut(room_id) {
                if room.wall_group != dominant {
                    room.wall_group = dominant;
                    merges += 1;
                }
            }
        }
    }

    // Recount members and drop groups nothing references anymore.
    let mut counts: HashMap<WallGroupId, u32> = HashMap::new();
    for &room_id in &room_ids {
        if let Ok(room) = scene.modular_room(room_id) {
            *counts.entry(room.wall_group).or_insert(0) += 1;
        }
    }
    let groups = &mut scene.modular_rooms_state.wall_groups;
    groups.retain(|id, group| match counts.get(&id) {
        Some(&count) => {
            group.room_count = count;
            true
        }
        None => false,
    });

    if merges > 0 {
        debug!(clusters = components.len(), reassigned = merges, "merged wall groups");
    }
}

/// Groups room IDs into adjacency-connected components (BFS).
fn connected_components(room_ids: &[ElementId], adjacencies: &[Adjacency]) -> Vec<Vec<ElementId>> {
    let index: HashMap<ElementId, usize> = room_ids
        .iter()
        .enumerate()
        .map(|(i, &id)| (id, i))
        .collect();

    let mut neighbors: Vec<Vec<usize>> = vec![Vec::new(); room_ids.len()];
    for adj in adjacencies {
        if let (Some(&a), Some(&b)) = (index.get(&adj.room_a), index.get(&adj.room_b)) {
            neighbors[a].push(b);
            neighbors[b].push(a);
        }
    }

    let mut visited = vec![false; room_ids.len()];
    let mut components = Vec::new();
    for start in 0..room_ids.len() {
        if visited[start] {
            continue;
        }
        visited[start] = true;
        let mut component = vec![room_ids[start]];
        let mut queue = VecDeque::from([start]);
        while let Some(current) = queue.pop_front() {
            for &next in &neighbors[current] {
                if !visited[next] {
                    visited[next] = true;
                    component.push(room_ids[next]);
                    queue.push_back(next);
                }
            }
        }
        components.push(component);
    }
    components
}

/// Picks the dominant wall group of a cluster by the counts recorded before
/// this merge pass: larger `room_count` wins, ties go to the smaller id.
fn dominant_group(scene: &Scene, component: &[ElementId]) -> Option<WallGroupId> {
    let mut best: Option<(u32, WallGroupId)> = None;
    for &room_id in component {
        let Ok(room) = scene.modular_room(room_id) else {
            continue;
        };
        let count = scene
            .modular_rooms_state
            .wall_groups
            .get(room.wall_group)
            .map_or(0, |g| g.room_count);
        let candidate = (count, room.wall_group);
        best = Some(match best {
            None => candidate,
            Some(current) => {
                if candidate.0 > current.0 || (candidate.0 == current.0 && candidate.1 < current.1)
                {
                    candidate
                } else {
                    current
                }
            }
        });
    }
    best.map(|(_, id)| id)
}
