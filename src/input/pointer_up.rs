//! Pointer-up handling - finalize operations.
//!
//! Pointer cancel and the pointer leaving the surface end a pointer's
//! lifecycle exactly like a release.

use super::{Arbiter, InteractionMode, ModeKind, PointerEvent};
use crate::board::Board;
use crate::geometry::delta_screen_to_world;
use crate::profile_scope;
use crate::types::Stroke;

impl Arbiter {
    pub fn pointer_up(&mut self, board: &mut Board, event: &PointerEvent) {
        profile_scope!("pointer_up");

        if self.pointers.on_up(event.id).is_none() {
            return;
        }

        if self.mode.kind() == ModeKind::Gesture {
            if self.pointers.count() < 2 {
                self.set_mode(InteractionMode::Idle);
            }
        } else if self.mode.owner() == Some(event.id) {
            let mode = std::mem::take(&mut self.mode);
            self.commit(board, mode, event);
        }

        self.settle();
    }

    pub fn pointer_cancel(&mut self, board: &mut Board, event: &PointerEvent) {
        self.pointer_up(board, event);
    }

    pub fn pointer_leave(&mut self, board: &mut Board, event: &PointerEvent) {
        self.pointer_up(board, event);
    }

    fn commit(&mut self, board: &mut Board, mode: InteractionMode, event: &PointerEvent) {
        match mode {
            InteractionMode::Drawing {
                points,
                color,
                size,
                ..
            } => {
                if !points.is_empty() {
                    board.add_stroke(Stroke::new(points, color, size));
                }
            }
            InteractionMode::DraggingNote {
                note_id,
                start,
                initial_pos,
                ..
            } => {
                let delta = delta_screen_to_world(event.position - start, board.viewport().zoom);
                board.move_note(&note_id, initial_pos + delta);
            }
            // Resize already wrote every step; pan wrote the viewport live
            InteractionMode::ResizingNote { .. }
            | InteractionMode::Panning { .. }
            | InteractionMode::Gesture(_)
            | InteractionMode::Idle => {}
        }
        tracing::trace!("pointer {:?} released", event.id);
    }
}
