//! Interaction state machine - exactly one mode is active at a time.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Panning         (single pointer: middle button, space held, or Hand tool)
//! Idle -> Drawing         (single primary pointer with the Pen tool)
//! Idle -> DraggingNote    (single primary pointer on a note body, Select tool)
//! Idle -> ResizingNote    (single primary pointer on a note's resize corner)
//! Any  -> Gesture         (second pointer lands; not while resizing)
//!
//! Gesture -> Idle         (fewer than two pointers remain)
//! Any     -> Idle         (owning pointer released, or no pointers remain)
//! ```

use crate::types::{NoteId, Point, PointerId, Size};

/// Anchors captured when a two-finger gesture starts. Every later frame is
/// computed from these, never incrementally.
#[derive(Debug, Clone, PartialEq)]
pub struct GestureAnchor {
    pub pointers: [PointerId; 2],
    pub initial_distance: f64,
    pub initial_zoom: f64,
    /// Screen-space midpoint of the two pointers at gesture start
    pub initial_mid: Point,
    pub initial_offset: Point,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum InteractionMode {
    #[default]
    Idle,

    /// Viewport follows the pointer
    Panning {
        pointer: PointerId,
        /// Screen position at pointer-down
        start: Point,
        initial_offset: Point,
    },

    /// Freehand ink; points are world-space and only ever appended
    Drawing {
        pointer: PointerId,
        points: Vec<Point>,
        color: String,
        size: f64,
    },

    /// Note follows the pointer through a transient override; the store is
    /// written once on release
    DraggingNote {
        pointer: PointerId,
        note_id: NoteId,
        start: Point,
        initial_pos: Point,
        live: Point,
    },

    /// Size is written to the store on every move
    ResizingNote {
        pointer: PointerId,
        note_id: NoteId,
        start: Point,
        initial_size: Size,
    },

    /// Two-finger pinch-zoom and pan
    Gesture(GestureAnchor),
}

/// Discriminant-only view of the mode, handy for logging and assertions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeKind {
    Idle,
    Pan,
    Draw,
    DragNote,
    ResizeNote,
    Gesture,
}

impl InteractionMode {
    pub fn kind(&self) -> ModeKind {
        match self {
            Self::Idle => ModeKind::Idle,
            Self::Panning { .. } => ModeKind::Pan,
            Self::Drawing { .. } => ModeKind::Draw,
            Self::DraggingNote { .. } => ModeKind::DragNote,
            Self::ResizingNote { .. } => ModeKind::ResizeNote,
            Self::Gesture(_) => ModeKind::Gesture,
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Pointer that owns a single-pointer mode
    pub fn owner(&self) -> Option<PointerId> {
        match self {
            Self::Panning { pointer, .. }
            | Self::Drawing { pointer, .. }
            | Self::DraggingNote { pointer, .. }
            | Self::ResizingNote { pointer, .. } => Some(*pointer),
            Self::Idle | Self::Gesture(_) => None,
        }
    }

    /// Live drag position for a note, if that note is being dragged
    pub fn drag_override(&self, id: &NoteId) -> Option<Point> {
        match self {
            Self::DraggingNote { note_id, live, .. } if note_id == id => Some(*live),
            _ => None,
        }
    }
}
