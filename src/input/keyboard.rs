//! Keyboard shortcuts and the space-bar pan override.
//!
//! Shortcuts are ignored while a text field has focus so typing in a note
//! never deletes or duplicates notes.

use super::{Arbiter, Modifiers};
use crate::board::Board;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Delete,
    Backspace,
    Space,
    Char(char),
    Other,
}

impl Arbiter {
    /// Returns true when the key was consumed
    pub fn key_down(
        &mut self,
        board: &mut Board,
        key: Key,
        modifiers: Modifiers,
        text_focused: bool,
    ) -> bool {
        if text_focused {
            return false;
        }

        match key {
            Key::Space => {
                if !self.space_held {
                    tracing::trace!("space pan override on");
                }
                self.space_held = true;
                true
            }
            Key::Delete | Key::Backspace => {
                board.delete_selected();
                true
            }
            Key::Char(c) if modifiers.command() => match c.to_ascii_lowercase() {
                'd' => {
                    board.duplicate_selected();
                    true
                }
                'c' => {
                    board.copy_selection();
                    true
                }
                'v' => {
                    board.paste_clipboard();
                    true
                }
                _ => false,
            },
            _ => false,
        }
    }

    /// Key releases are honored even with a text field focused so the space
    /// override can never get stuck.
    pub fn key_up(&mut self, key: Key) {
        if key == Key::Space && self.space_held {
            tracing::trace!("space pan override off");
            self.space_held = false;
        }
    }
}
