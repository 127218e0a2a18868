//! Adjacency classification between modular rooms on the tile grid.

use serde::{Deserialize, Serialize};

use crate::grid::{Orientation, TileRect};
use crate::scene::ElementId;

/// One shared edge between two rooms.
///
/// `room_a` always carries the smaller element ID, so the record is identical
/// regardless of which room is considered first. All coordinates are tile
/// units; `position` is the grid line both footprints touch and
/// `range_start..range_end` the overlap along it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Adjacency {
    pub room_a: ElementId,
    pub room_b: ElementId,
    pub orientation: Orientation,
    pub position: i32,
    pub range_start: i32,
    pub range_end: i32,
}

impl Adjacency {
    /// Whether this record involves the given room.
    #[must_use]
    pub fn involves(&self, id: ElementId) -> bool {
        self.room_a == id || self.room_b == id
    }
}

/// Classifies every adjacent pair among the given room footprints.
///
/// Two rooms are adjacent iff their footprints touch along exactly one axis
/// with a positive-length overlap on the other axis; corner-only contact is
/// not adjacency. Pairs are ordered by element ID internally, so the output
/// is identical regardless of input order.
#[must_use]
pub fn classify_adjacencies(rooms: &[(ElementId, TileRect)]) -> Vec<Adjacency> {
    let mut records = Vec::new();
    for (i, &(id_a, rect_a)) in rooms.iter().enumerate() {
        for &(id_b, rect_b) in &rooms[i + 1..] {
            if let Some(adjacency) = classify_pair(id_a, rect_a, id_b, rect_b) {
                records.push(adjacency);
            }
        }
    }
    records.sort_unstable_by_key(|adj| (adj.room_a, adj.room_b, adj.orientation, adj.position));
    records
}

/// Classifies one pair; the record always carries the smaller ID as `room_a`.
fn classify_pair(
    id_a: ElementId,
    a: TileRect,
    id_b: ElementId,
    b: TileRect,
) -> Option<Adjacency> {
    let (id_a, a, id_b, b) = if id_a <= id_b {
        (id_a, a, id_b, b)
    } else {
        (id_b, b, id_a, a)
    };
    // Side-by-side contact produces a vertical edge.
    if a.right() == b.x || b.right() == a.x {
        let position = if a.right() == b.x { b.x } else { a.x };
        let (lo, hi) = overlap(a.y, a.bottom(), b.y, b.bottom())?;
        return Some(Adjacency {
            room_a: id_a,
            room_b: id_b,
            orientation: Orientation::Vertical,
            position,
            range_start: lo,
            range_end: hi,
        });
    }

    // Stacked contact produces a horizontal edge.
    if a.bottom() == b.y || b.bottom() == a.y {
        let position = if a.bottom() == b.y { b.y } else { a.y };
        let (lo, hi) = overlap(a.x, a.right(), b.x, b.right())?;
        return Some(Adjacency {
            room_a: id_a,
            room_b: id_b,
            orientation: Orientation::Horizontal,
            position,
            range_start: lo,
            range_end: hi,
        });
    }

    None
}

/// Positive-length overlap of two intervals.
fn overlap(a_lo: i32, a_hi: i32, b_lo: i32, b_hi: i32) -> Option<(i32, i32)> {
    let lo = a_lo.max(b_lo);
    let hi = a_hi.min(b_hi);
    (hi > lo).then_some((lo, hi))
}
