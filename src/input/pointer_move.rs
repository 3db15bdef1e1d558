//! Pointer-move handling - per-mode incremental updates.
//!
//! Every moving pointer updates the tracker; only the pointer(s) owning the
//! active mode drive it.
//!
//! ## Performance Notes
//!
//! Pointer-move fires at display rate during drags. Note drags touch only the
//! transient override, never the store.

use super::{Arbiter, GestureAnchor, InteractionMode, PointerEvent};
use crate::board::Board;
use crate::constants::MIN_PINCH_DISTANCE;
use crate::geometry::{delta_screen_to_world, distance, midpoint, screen_to_world};
use crate::profile_scope;
use crate::types::{Point, Size};
use crate::viewport::{Viewport, clamp_zoom};

/// Viewport for the current pinch frame.
///
/// Zoom about the *initial* midpoint first, then translate by how far the
/// midpoint has travelled. Keeping the two steps separate means a pure
/// two-finger pan never changes the zoom.
pub fn gesture_viewport(anchor: &GestureAnchor, p1: Point, p2: Point) -> Viewport {
    let zoom = if anchor.initial_distance > MIN_PINCH_DISTANCE {
        let scale = distance(p1, p2) / anchor.initial_distance;
        clamp_zoom(anchor.initial_zoom * scale)
    } else {
        anchor.initial_zoom
    };

    let mut viewport = Viewport::new(
        anchor.initial_offset.x,
        anchor.initial_offset.y,
        anchor.initial_zoom,
    );
    viewport.zoom_about(anchor.initial_mid, zoom);
    viewport.pan_by(midpoint(p1, p2) - anchor.initial_mid);
    viewport
}

impl Arbiter {
    pub fn pointer_move(&mut self, board: &mut Board, event: &PointerEvent) {
        profile_scope!("pointer_move");

        if !self.pointers.on_move(event.id, event.position) {
            return;
        }

        let pos = event.position;
        match &mut self.mode {
            InteractionMode::Idle => {}

            InteractionMode::Gesture(anchor) => {
                let [a, b] = anchor.pointers;
                if let (Some(p1), Some(p2)) = (self.pointers.get(a), self.pointers.get(b)) {
                    board.set_viewport(gesture_viewport(anchor, p1, p2));
                }
            }

            InteractionMode::Panning {
                pointer,
                start,
                initial_offset,
            } if *pointer == event.id => {
                let mut viewport = board.viewport();
                viewport.set_offset(*initial_offset + (pos - *start));
                board.set_viewport(viewport);
            }

            InteractionMode::Drawing { pointer, points, .. } if *pointer == event.id => {
                points.push(screen_to_world(pos, &board.viewport()));
            }

            InteractionMode::DraggingNote {
                pointer,
                start,
                initial_pos,
                live,
                ..
            } if *pointer == event.id => {
                *live = *initial_pos + delta_screen_to_world(pos - *start, board.viewport().zoom);
            }

            InteractionMode::ResizingNote {
                pointer,
                note_id,
                start,
                initial_size,
            } if *pointer == event.id => {
                let delta = delta_screen_to_world(pos - *start, board.viewport().zoom);
                let size = Size::new(initial_size.width + delta.x, initial_size.height + delta.y);
                board.resize_note(note_id, size);
            }

            _ => {}
        }
    }
}
