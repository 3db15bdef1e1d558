//! Wheel handling - always available, independent of the pointer modes.

use super::{Arbiter, WheelEvent};
use crate::board::Board;
use crate::profile_scope;

impl Arbiter {
    /// Ctrl/Cmd + wheel zooms toward the cursor; a bare wheel pans both axes
    pub fn wheel(&mut self, board: &mut Board, event: &WheelEvent) {
        profile_scope!("wheel");

        let mut viewport = board.viewport();
        viewport.apply_wheel(event.position, event.delta, event.modifiers.command());
        board.set_viewport(viewport);
    }
}
