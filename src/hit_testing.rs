//! Hit testing - what is under a pointer.
//!
//! Notes and strokes are indexed in R-trees ([`SpatialIndex`]) keyed by their
//! slot in the board's collections. The indexes are rebuilt lazily whenever the
//! board revision moves, so a burst of pointer events against an unchanged
//! board costs one build.
//!
//! ## Performance Notes
//!
//! Candidate lookup is O(log n); only candidates are checked exactly (z-order
//! for notes, polyline distance for strokes).

use crate::board::Board;
use crate::constants::{ERASER_TOLERANCE, RESIZE_HANDLE_SIZE};
use crate::geometry::distance_to_polyline;
use crate::profile_scope;
use crate::spatial_index::SpatialIndex;
use crate::types::{NoteId, Point, Rect, StrokeId};

/// Part of a note that was hit
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoteRegion {
    Body,
    /// Bottom-right resize corner
    ResizeHandle,
}

#[derive(Debug, Default)]
pub struct HitTester {
    notes: SpatialIndex,
    strokes: SpatialIndex,
    built_for: Option<u64>,
}

impl HitTester {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop cached indexes; the next query rebuilds them
    pub fn invalidate(&mut self) {
        self.built_for = None;
    }

    fn ensure_fresh(&mut self, board: &Board) {
        if self.built_for == Some(board.revision()) {
            return;
        }
        profile_scope!("rebuild_hit_index");
        self.notes = SpatialIndex::from_rects(
            board.notes().iter().enumerate().map(|(i, n)| (i, n.rect())),
        );
        self.strokes = SpatialIndex::from_rects(
            board
                .strokes()
                .iter()
                .enumerate()
                .filter_map(|(i, s)| s.bounds().map(|b| (i, b.inflate(s.size / 2.0)))),
        );
        self.built_for = Some(board.revision());
    }

    /// Topmost note under a world point, with the region that was hit.
    /// The resize handle is a fixed screen-size square so it stays grabbable
    /// at any zoom.
    pub fn note_at(&mut self, board: &Board, world: Point) -> Option<(NoteId, NoteRegion)> {
        profile_scope!("hit_test_notes");
        self.ensure_fresh(board);

        let notes = board.notes();
        let note = self
            .notes
            .query_point(world)
            .into_iter()
            .filter_map(|slot| notes.get(slot))
            .filter(|n| n.rect().contains(world))
            .max_by_key(|n| n.z_index)?;

        let handle = RESIZE_HANDLE_SIZE / board.viewport().zoom;
        let rect = note.rect();
        let corner = Rect {
            min: rect.max.offset(-handle, -handle),
            max: rect.max,
        };
        let region = if corner.contains(world) {
            NoteRegion::ResizeHandle
        } else {
            NoteRegion::Body
        };
        Some((note.id.clone(), region))
    }

    /// Most recently drawn stroke whose ink passes within reach of the point
    pub fn stroke_at(&mut self, board: &Board, world: Point) -> Option<StrokeId> {
        profile_scope!("hit_test_strokes");
        self.ensure_fresh(board);

        let slack = ERASER_TOLERANCE / board.viewport().zoom;
        let strokes = board.strokes();
        let probe = Rect::from_point(world).inflate(slack);
        let mut candidates = self.strokes.query_rect(probe);
        candidates.sort_unstable();
        candidates
            .into_iter()
            .rev()
            .filter_map(|slot| strokes.get(slot))
            .find(|s| distance_to_polyline(world, &s.points) <= s.size / 2.0 + slack)
            .map(|s| s.id.clone())
    }
}
