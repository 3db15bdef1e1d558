use super::{Board, BoardChange};
use crate::constants::PASTE_OFFSET;
use crate::types::NoteId;

impl Board {
    /// Deep-copy the selected notes into the clipboard. An empty selection
    /// leaves the clipboard untouched.
    pub fn copy_selection(&mut self) -> usize {
        let copied: Vec<_> = self
            .notes
            .iter()
            .filter(|n| self.selection.contains(&n.id))
            .cloned()
            .collect();
        if copied.is_empty() {
            return 0;
        }
        tracing::debug!(count = copied.len(), "copy selection");
        self.clipboard = copied;
        self.emit(BoardChange::Clipboard);
        self.clipboard.len()
    }

    /// Paste the clipboard as fresh notes offset by [`PASTE_OFFSET`] from the
    /// clipboard contents, then advance the clipboard by the same offset so a
    /// repeated paste cascades. The pasted notes become the selection.
    pub fn paste_clipboard(&mut self) -> Vec<NoteId> {
        if self.clipboard.is_empty() {
            return Vec::new();
        }

        let mut z = self.next_z_index();
        let mut pasted = Vec::with_capacity(self.clipboard.len());
        for entry in &mut self.clipboard {
            entry.x += PASTE_OFFSET;
            entry.y += PASTE_OFFSET;

            let mut note = entry.clone();
            note.id = NoteId::generate();
            note.z_index = z;
            z += 1;
            pasted.push(note.id.clone());
            self.notes.push(note);
        }

        tracing::debug!(count = pasted.len(), "paste clipboard");
        self.selection = pasted.clone();
        self.emit(BoardChange::Notes);
        self.emit(BoardChange::Selection);
        self.emit(BoardChange::Clipboard);
        pasted
    }
}
