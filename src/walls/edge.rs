//! Edge derivation: every wall-bearing span in the scene.
//!
//! Each adjacency record contributes one shared edge. Everything left of a
//! room's perimeter after subtracting its shared ranges contributes external
//! edges. The partitioner consumes these descriptors one at a time.

use crate::grid::{subtract_intervals, Orientation, TileRect};
use crate::scene::ElementId;

use super::adjacency::Adjacency;

/// One wall-bearing edge, in tile units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeDescriptor {
    pub orientation: Orientation,
    /// Grid line the edge lies on.
    pub position: i32,
    pub range_start: i32,
    pub range_end: i32,
    /// Owning room; for shared edges, the one with the smaller ID.
    pub room_a: ElementId,
    /// Second owner for shared edges, `None` for external perimeter.
    pub room_b: Option<ElementId>,
}

impl EdgeDescriptor {
    /// Whether this edge is shared between two rooms.
    #[must_use]
    pub fn is_shared(&self) -> bool {
        self.room_b.is_some()
    }
}

/// Derives all edges for the given rooms and their adjacency records.
#[must_use]
pub fn collect_edges(
    rooms: &[(ElementId, TileRect)],
    adjacencies: &[Adjacency],
) -> Vec<EdgeDescriptor> {
    let mut edges: Vec<EdgeDescriptor> = adjacencies
        .iter()
        .map(|adj| EdgeDescriptor {
            orientation: adj.orientation,
            position: adj.position,
            range_start: adj.range_start,
            range_end: adj.range_end,
            room_a: adj.room_a,
            room_b: Some(adj.room_b),
        })
        .collect();

    for &(id, rect) in rooms {
        // Left, right, top, bottom sides in that order.
        let sides = [
            (Orientation::Vertical, rect.x, rect.y, rect.bottom()),
            (Orientation::Vertical, rect.right(), rect.y, rect.bottom()),
            (Orientation::Horizontal, rect.y, rect.x, rect.right()),
            (Orientation::Horizontal, rect.bottom(), rect.x, rect.right()),
        ];
        for (orientation, position, start, end) in sides {
            let shared: Vec<(i32, i32)> = adjacencies
                .iter()
                .filter(|adj| {
                    adj.orientation == orientation && adj.position == position && adj.involves(id)
                })
                .map(|adj| (adj.range_start, adj.range_end))
                .collect();
            for (lo, hi) in subtract_intervals(start, end, &shared) {
                edges.push(EdgeDescriptor {
                    orientation,
                    position,
                    range_start: lo,
                    range_end: hi,
                    room_a: id,
                    room_b: None,
                });
            }
        }
    }

    edges
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::walls::adjacency::classify_adjacencies;
    use slotmap::SlotMap;

    fn ids(n: usize) -> Vec<ElementId> {
        let mut arena: SlotMap<ElementId, ()> = SlotMap::with_key();
        (0..n).map(|_| arena.insert(())).collect()
    }

    fn rect(x: i32, y: i32, w: i32, h: i32) -> TileRect {
        TileRect::new(x, y, w, h).unwrap()
    }

    #[test]
    fn lone_room_has_four_external_edges() {
        let ids = ids(1);
        let rooms = vec![(ids[0], rect(0, 0, 4, 4))];
        let edges = collect_edges(&rooms, &[]);
        assert_eq!(edges.len(), 4);
        assert!(edges.iter().all(|e| !e.is_shared()));
        assert!(edges
            .iter()
            .all(|e| e.range_end - e.range_start == 4));
    }

    #[test]
    fn full_shared_side_leaves_no_external_remainder_on_that_line() {
        let ids = ids(2);
        let rooms = vec![(ids[0], rect(0, 0, 4, 4)), (ids[1], rect(4, 0, 4, 4))];
        let adjacencies = classify_adjacencies(&rooms);
        let edges = collect_edges(&rooms, &adjacencies);

        let shared: Vec<_> = edges.iter().filter(|e| e.is_shared()).collect();
        assert_eq!(shared.len(), 1);
        assert_eq!(shared[0].position, 4);

        // Nothing external remains on the x = 4 line.
        assert!(!edges
            .iter()
            .any(|e| !e.is_shared()
                && e.orientation == Orientation::Vertical
                && e.position == 4));

        // 3 external sides per room remain.
        assert_eq!(edges.iter().filter(|e| !e.is_shared()).count(), 6);
    }

    #[test]
    fn partial_share_splits_the_perimeter() {
        let ids = ids(2);
        // Small room attached to the middle of the big room's right side.
        let rooms = vec![(ids[0], rect(0, 0, 4, 4)), (ids[1], rect(4, 1, 2, 2))];
        let adjacencies = classify_adjacencies(&rooms);
        let edges = collect_edges(&rooms, &adjacencies);

        let right_side_externals: Vec<_> = edges
            .iter()
            .filter(|e| {
                !e.is_shared()
                    && e.orientation == Orientation::Vertical
                    && e.position == 4
                    && e.room_a == ids[0]
            })
            .collect();
        let mut ranges: Vec<_> = right_side_externals
            .iter()
            .map(|e| (e.range_start, e.range_end))
            .collect();
        ranges.sort_unstable();
        assert_eq!(ranges, vec![(0, 1), (3, 4)]);
    }
}
