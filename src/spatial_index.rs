//! Spatial Index Module
//!
//! R-tree over world-space bounding boxes for hit testing on the canvas.
//! Entries carry a `slot` (the position of the note or stroke in the board's
//! collection at the time the index was built), so an index is only valid for
//! the board revision it was built from.

use crate::types::{Point, Rect};
use rstar::{AABB, RTree, RTreeObject};

/// A bounding box tagged with the collection slot it came from.
#[derive(Debug, Clone, Copy)]
pub struct SpatialEntry {
    pub slot: usize,
    pub min: [f64; 2],
    pub max: [f64; 2],
}

impl SpatialEntry {
    pub fn new(slot: usize, rect: Rect) -> Self {
        Self {
            slot,
            min: [rect.min.x, rect.min.y],
            max: [rect.max.x, rect.max.y],
        }
    }

    #[inline]
    pub fn contains_point(&self, p: Point) -> bool {
        p.x >= self.min[0] && p.x <= self.max[0] && p.y >= self.min[1] && p.y <= self.max[1]
    }
}

impl RTreeObject for SpatialEntry {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners(self.min, self.max)
    }
}

impl PartialEq for SpatialEntry {
    fn eq(&self, other: &Self) -> bool {
        self.slot == other.slot
    }
}

/// O(log n) point and rectangle queries over a fixed set of boxes.
pub struct SpatialIndex {
    tree: RTree<SpatialEntry>,
    len: usize,
}

impl SpatialIndex {
    pub fn new() -> Self {
        Self {
            tree: RTree::new(),
            len: 0,
        }
    }

    /// Bulk-load from `(slot, bounds)` pairs
    pub fn from_rects<I>(rects: I) -> Self
    where
        I: IntoIterator<Item = (usize, Rect)>,
    {
        let entries: Vec<SpatialEntry> = rects
            .into_iter()
            .map(|(slot, rect)| SpatialEntry::new(slot, rect))
            .collect();
        let len = entries.len();
        Self {
            tree: RTree::bulk_load(entries),
            len,
        }
    }

    /// Slots whose box contains the point
    pub fn query_point(&self, p: Point) -> Vec<usize> {
        let envelope = AABB::from_point([p.x, p.y]);
        self.tree
            .locate_in_envelope_intersecting(&envelope)
            .filter(|entry| entry.contains_point(p))
            .map(|entry| entry.slot)
            .collect()
    }

    /// Slots whose box intersects the rectangle
    pub fn query_rect(&self, rect: Rect) -> Vec<usize> {
        let envelope = AABB::from_corners([rect.min.x, rect.min.y], [rect.max.x, rect.max.y]);
        self.tree
            .locate_in_envelope_intersecting(&envelope)
            .map(|entry| entry.slot)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl Default for SpatialIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for SpatialIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpatialIndex").field("len", &self.len).finish()
    }
}
