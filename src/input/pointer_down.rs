//! Pointer-down handling - mode arbitration, note routing, eraser.
//!
//! Priority order:
//! 1. Second pointer lands (and no resize owns the first) -> two-finger gesture
//! 2. Any further pointer while multi-touch is active -> ignored
//! 3. Single pointer: pan (middle / space / Hand), draw (Pen), erase (Eraser),
//!    then note drag/resize or selection clear (Select)
//!
//! ## Performance Notes
//!
//! Pointer-down is a hot path. Hit testing goes through the R-tree backed
//! [`crate::hit_testing::HitTester`], cached per board revision.

use super::{Arbiter, GestureAnchor, InteractionMode, PointerButton, PointerEvent};
use crate::board::Board;
use crate::geometry::{distance, midpoint, screen_to_world};
use crate::hit_testing::NoteRegion;
use crate::profile_scope;
use crate::types::ToolType;

impl Arbiter {
    pub fn pointer_down(&mut self, board: &mut Board, event: &PointerEvent) {
        profile_scope!("pointer_down");

        self.pointers.on_down(event.id, event.position);
        let count = self.pointers.count();

        if count == 2 {
            if matches!(self.mode, InteractionMode::ResizingNote { .. }) {
                return;
            }
            self.start_gesture(board);
            return;
        }
        if count > 2 {
            return;
        }

        let tool = board.tool();
        let pans = event.button == PointerButton::Middle || self.space_held || tool == ToolType::Hand;
        if pans {
            self.set_mode(InteractionMode::Panning {
                pointer: event.id,
                start: event.position,
                initial_offset: board.viewport().offset(),
            });
            return;
        }

        if event.button != PointerButton::Primary {
            return;
        }

        let world = screen_to_world(event.position, &board.viewport());
        match tool {
            ToolType::Pen => {
                board.clear_selection();
                self.set_mode(InteractionMode::Drawing {
                    pointer: event.id,
                    points: vec![world],
                    color: board.pen_color().to_string(),
                    size: board.pen_size(),
                });
            }
            ToolType::Eraser => {
                if let Some(stroke) = self.hit_tester.stroke_at(board, world) {
                    board.delete_stroke(&stroke);
                }
            }
            ToolType::Select => self.select_tool_down(board, event, world),
            ToolType::Hand => {}
        }
    }

    fn select_tool_down(
        &mut self,
        board: &mut Board,
        event: &PointerEvent,
        world: crate::types::Point,
    ) {
        let Some((note_id, region)) = self.hit_tester.note_at(board, world) else {
            board.clear_selection();
            return;
        };

        board.select_note(Some(&note_id), event.modifiers.shift);
        board.bring_to_front(&note_id);

        let Some(note) = board.note(&note_id) else {
            return;
        };
        let mode = match region {
            NoteRegion::ResizeHandle => InteractionMode::ResizingNote {
                pointer: event.id,
                note_id,
                start: event.position,
                initial_size: note.size(),
            },
            NoteRegion::Body => InteractionMode::DraggingNote {
                pointer: event.id,
                note_id,
                start: event.position,
                initial_pos: note.position(),
                live: note.position(),
            },
        };
        self.set_mode(mode);
    }

    /// Enter the two-finger gesture, cancelling whatever single-pointer mode
    /// was running. An in-progress stroke or note drag is discarded uncommitted.
    fn start_gesture(&mut self, board: &Board) {
        let ids = self.pointers.ids();
        let (Some(&a), Some(&b)) = (ids.first(), ids.get(1)) else {
            return;
        };
        let (Some(pa), Some(pb)) = (self.pointers.get(a), self.pointers.get(b)) else {
            return;
        };

        self.cancel_mode();
        let viewport = board.viewport();
        self.set_mode(InteractionMode::Gesture(GestureAnchor {
            pointers: [a, b],
            initial_distance: distance(pa, pb),
            initial_zoom: viewport.zoom,
            initial_mid: midpoint(pa, pb),
            initial_offset: viewport.offset(),
        }));
    }
}
