//! Tile-grid units shared by the whole engine.
//!
//! All room geometry is exact integer arithmetic: rooms live on a tile grid,
//! and tiles convert to pixels by a fixed constant. Wall segmentation works in
//! pixels along a grid line.

use serde::{Deserialize, Serialize};

/// Edge length of one grid tile, in pixels.
pub const TILE_PX: i32 = 64;

/// Span of one wall segment group, in pixels (four tiles).
pub const SEGMENT_SPAN_PX: i32 = 256;

/// Axis an edge runs along.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// The edge runs along the x axis (a top or bottom side).
    Horizontal,
    /// The edge runs along the y axis (a left or right side).
    Vertical,
}

impl Orientation {
    /// Single-letter form used in segment key strings.
    #[must_use]
    pub fn letter(self) -> char {
        match self {
            Self::Horizontal => 'h',
            Self::Vertical => 'v',
        }
    }

    /// Parses the single-letter form.
    #[must_use]
    pub fn from_letter(c: char) -> Option<Self> {
        match c {
            'h' => Some(Self::Horizontal),
            'v' => Some(Self::Vertical),
            _ => None,
        }
    }
}

/// Integer tile-grid footprint of a modular room.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileRect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl TileRect {
    /// Creates a footprint, rejecting zero or negative tile dimensions.
    #[must_use]
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Option<Self> {
        if w <= 0 || h <= 0 {
            return None;
        }
        Some(Self { x, y, w, h })
    }

    /// Tile coordinate of the right side grid line.
    #[must_use]
    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    /// Tile coordinate of the bottom side grid line.
    #[must_use]
    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }
}

/// Subtracts a set of sub-intervals from `[start, end)`.
///
/// Holes are clipped to the range first; overlapping holes are allowed.
/// Returns the remaining intervals in ascending order, empty intervals
/// dropped.
#[must_use]
pub fn subtract_intervals(start: i32, end: i32, holes: &[(i32, i32)]) -> Vec<(i32, i32)> {
    if end <= start {
        return Vec::new();
    }

    let mut clipped: Vec<(i32, i32)> = holes
        .iter()
        .map(|&(lo, hi)| (lo.max(start), hi.min(end)))
        .filter(|&(lo, hi)| hi > lo)
        .collect();
    clipped.sort_unstable();

    let mut remaining = Vec::new();
    let mut cursor = start;
    for (lo, hi) in clipped {
        if lo > cursor {
            remaining.push((cursor, lo));
        }
        cursor = cursor.max(hi);
    }
    if cursor < end {
        remaining.push((cursor, end));
    }
    remaining
}
