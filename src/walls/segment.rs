//! Wall segment groups: the atomic unit of wall rendering.
//!
//! An edge splits into consecutive 256 px groups. When the edge length is not
//! a multiple of 256, the final group shrinks to the remainder; such short
//! groups always render as solid fill and cannot host doors. Whatever the
//! pattern, component widths sum exactly to the group span.

use serde::{Deserialize, Serialize};

use crate::grid::{Orientation, SEGMENT_SPAN_PX, TILE_PX};
use crate::scene::ElementId;

use super::edge::EdgeDescriptor;
use super::pattern::{PatternSource, SegmentKey, SegmentPattern};

/// Wall piece widths a group may be composed of, in pixels.
pub const COMPONENT_WIDTHS_PX: [i32; 3] = [256, 128, 64];

/// What a segment component draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentKind {
    Wall,
    Door,
}

/// One wall or door piece inside a segment group.
///
/// `offset_px` is relative to the group's range start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentComponent {
    pub kind: ComponentKind,
    pub offset_px: i32,
    pub width_px: i32,
}

impl SegmentComponent {
    fn wall(offset_px: i32, width_px: i32) -> Self {
        Self {
            kind: ComponentKind::Wall,
            offset_px,
            width_px,
        }
    }

    fn door(offset_px: i32, width_px: i32) -> Self {
        Self {
            kind: ComponentKind::Door,
            offset_px,
            width_px,
        }
    }
}

/// A fixed span of wall along one edge, in pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WallSegmentGroup {
    pub key: SegmentKey,
    pub orientation: Orientation,
    pub position_px: i32,
    pub range_start_px: i32,
    pub range_end_px: i32,
    /// First group of its edge; doors must keep 64 px clear of the corner.
    pub is_at_edge_start: bool,
    /// Last group of its edge.
    pub is_at_edge_end: bool,
    pub is_shared: bool,
    pub room_a: ElementId,
    pub room_b: Option<ElementId>,
    pub wall_style_id: String,
    pub pattern: SegmentPattern,
    pub source: PatternSource,
    pub components: Vec<SegmentComponent>,
}

impl WallSegmentGroup {
    /// Length of the group along its edge.
    #[must_use]
    pub fn span_px(&self) -> i32 {
        self.range_end_px - self.range_start_px
    }

    /// Only full 256 px groups can hold doors; remainder groups cannot.
    #[must_use]
    pub fn supports_doors(&self) -> bool {
        self.span_px() == SEGMENT_SPAN_PX
    }

    /// Whether the group touches a corner of its edge.
    #[must_use]
    pub fn is_corner_adjacent(&self) -> bool {
        self.is_at_edge_start || self.is_at_edge_end
    }
}

/// Splits one edge into consecutive segment groups.
///
/// Groups start solid with `Auto` provenance; the regeneration pipeline
/// overlays recorded segment states afterwards.
#[must_use]
pub fn partition_edge(edge: &EdgeDescriptor, wall_style_id: &str) -> Vec<WallSegmentGroup> {
    let position_px = edge.position * TILE_PX;
    let start_px = edge.range_start * TILE_PX;
    let end_px = edge.range_end * TILE_PX;
    if end_px <= start_px {
        return Vec::new();
    }

    let mut groups = Vec::new();
    let mut offset = start_px;
    while offset < end_px {
        let span = SEGMENT_SPAN_PX.min(end_px - offset);
        let range_start_px = offset;
        let range_end_px = offset + span;
        let pattern = SegmentPattern::Solid256;
        groups.push(WallSegmentGroup {
            key: SegmentKey {
                orientation: edge.orientation,
                position_px,
                start_px: range_start_px,
            },
            orientation: edge.orientation,
            position_px,
            range_start_px,
            range_end_px,
            is_at_edge_start: range_start_px == start_px,
            is_at_edge_end: range_end_px == end_px,
            is_shared: edge.is_shared(),
            room_a: edge.room_a,
            room_b: edge.room_b,
            wall_style_id: wall_style_id.to_owned(),
            pattern,
            source: PatternSource::Auto,
            components: components_for(pattern, span),
        });
        offset = range_end_px;
    }
    groups
}

/// Render composition for a pattern over a given span.
///
/// Full groups quarter as A(0–64) B(64–128) C(128–192) D(192–256);
/// `DoorLeft` puts the door on A+B and wall on C+D. Short remainder groups
/// ignore the pattern and fill with solid wall pieces.
#[must_use]
pub fn components_for(pattern: SegmentPattern, span_px: i32) -> Vec<SegmentComponent> {
    if span_px != SEGMENT_SPAN_PX {
        return solid_fill(span_px);
    }
    match pattern {
        SegmentPattern::Solid256 => vec![SegmentComponent::wall(0, 256)],
        SegmentPattern::DoorLeft => vec![
            SegmentComponent::door(0, 128),
            SegmentComponent::wall(128, 128),
        ],
        SegmentPattern::DoorRight => vec![
            SegmentComponent::wall(0, 128),
            SegmentComponent::door(128, 128),
        ],
        SegmentPattern::DoorBoth => vec![
            SegmentComponent::door(0, 128),
            SegmentComponent::door(128, 128),
        ],
        SegmentPattern::DoorCenter => vec![
            SegmentComponent::wall(0, 64),
            SegmentComponent::door(64, 128),
            SegmentComponent::wall(192, 64),
        ],
    }
}

/// Greedy solid-wall fill of a span with 256/128/64 px pieces.
fn solid_fill(span_px: i32) -> Vec<SegmentComponent> {
    let mut components = Vec::new();
    let mut offset = 0;
    let mut remaining = span_px;
    while remaining > 0 {
        match COMPONENT_WIDTHS_PX.iter().find(|&&w| w <= remaining) {
            Some(&width) => {
                components.push(SegmentComponent::wall(offset, width));
                offset += width;
                remaining -= width;
            }
            // Spans are tile multiples, so 64 always fits; bail on garbage.
            None => break,
        }
    }
    components
}
