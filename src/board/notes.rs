//! Note operations - add, update, delete, duplicate, selection and z-order.

use super::{Board, BoardChange};
use crate::constants::{DEFAULT_NOTE_SIZE, PASTE_OFFSET};
use crate::geometry::screen_to_world;
use crate::types::{
    JobId, Note, NoteColor, NoteId, NoteUpdate, Point, Priority, Size, TaskStatus, ToolType,
};

impl Board {
    pub fn note(&self, id: &NoteId) -> Option<&Note> {
        self.notes.iter().find(|n| &n.id == id)
    }

    fn note_mut(&mut self, id: &NoteId) -> Option<&mut Note> {
        self.notes.iter_mut().find(|n| &n.id == id)
    }

    /// Next z-index for a note brought to the top of the stack
    pub fn next_z_index(&self) -> i64 {
        self.notes.iter().map(|n| n.z_index).max().unwrap_or(0).max(0) + 1
    }

    /// Add a note. It receives z-index `count + 1`, becomes the selection, and
    /// the tool switches back to Select.
    pub fn add_note(&mut self, mut note: Note) -> NoteId {
        note.z_index = self.notes.len() as i64 + 1;
        note.clamp_size();
        let id = note.id.clone();
        tracing::debug!(note = %id, "add note");
        self.notes.push(note);
        self.selection = vec![id.clone()];
        self.tool = ToolType::Select;
        self.emit(BoardChange::Notes);
        self.emit(BoardChange::Selection);
        self.emit(BoardChange::Tool);
        id
    }

    /// Create a default-sized note centered on a world point, tagged with the
    /// default job and colored after it.
    pub fn create_note_at(&mut self, center: Point) -> NoteId {
        let job_id = self.default_job_id();
        let color = self
            .job(&job_id)
            .map(|job| NoteColor::from_job_color(&job.color))
            .unwrap_or_default();
        let origin = center.offset(-DEFAULT_NOTE_SIZE.0 / 2.0, -DEFAULT_NOTE_SIZE.1 / 2.0);
        let mut note = Note::new(origin, job_id);
        note.color = color;
        self.add_note(note)
    }

    /// Create a note in the middle of the visible surface
    pub fn create_note_in_view(&mut self, surface: Size) -> NoteId {
        let center = screen_to_world(
            Point::new(surface.width / 2.0, surface.height / 2.0),
            &self.viewport,
        );
        self.create_note_at(center)
    }

    /// Field-level update. Returns false when the note does not exist.
    pub fn update_note(&mut self, id: &NoteId, update: NoteUpdate) -> bool {
        let Some(note) = self.note_mut(id) else {
            return false;
        };
        update.apply(note);
        self.emit(BoardChange::Notes);
        true
    }

    pub fn move_note(&mut self, id: &NoteId, position: Point) -> bool {
        self.update_note(id, NoteUpdate::position(position))
    }

    /// Resize, keeping the size floor
    pub fn resize_note(&mut self, id: &NoteId, size: Size) -> bool {
        self.update_note(id, NoteUpdate::size(size))
    }

    /// Move a note to another job; its color follows the job's color tag
    pub fn set_note_job(&mut self, id: &NoteId, job: &JobId) -> bool {
        let mut update = NoteUpdate::default().with_job(job.clone());
        if let Some(j) = self.job(job) {
            update = update.with_color(NoteColor::from_job_color(&j.color));
        }
        self.update_note(id, update)
    }

    pub fn toggle_task(&mut self, id: &NoteId) -> bool {
        let Some(is_task) = self.note(id).map(|n| n.is_task) else {
            return false;
        };
        self.update_note(id, NoteUpdate::default().with_task(!is_task))
    }

    /// Checkbox toggle between done and todo
    pub fn toggle_done(&mut self, id: &NoteId) -> bool {
        let Some(status) = self.note(id).map(|n| n.status) else {
            return false;
        };
        self.update_note(id, NoteUpdate::default().with_status(status.toggled()))
    }

    pub fn set_status(&mut self, id: &NoteId, status: TaskStatus) -> bool {
        self.update_note(id, NoteUpdate::default().with_status(status))
    }

    pub fn set_priority(&mut self, id: &NoteId, priority: Priority) -> bool {
        self.update_note(id, NoteUpdate::default().with_priority(priority))
    }

    pub fn set_content(&mut self, id: &NoteId, content: impl Into<String>) -> bool {
        self.update_note(id, NoteUpdate::content(content))
    }

    /// Delete a note, dropping it from the selection and the clipboard
    pub fn delete_note(&mut self, id: &NoteId) -> bool {
        let before = self.notes.len();
        self.notes.retain(|n| &n.id != id);
        if self.notes.len() == before {
            return false;
        }
        tracing::debug!(note = %id, "delete note");
        self.selection.retain(|sid| sid != id);
        self.clipboard.retain(|n| &n.id != id);
        self.emit(BoardChange::Notes);
        self.emit(BoardChange::Selection);
        true
    }

    /// Delete every selected note; returns how many were removed
    pub fn delete_selected(&mut self) -> usize {
        let ids = self.selection.clone();
        ids.iter().filter(|id| self.delete_note(id)).count()
    }

    /// Copy a note with a fresh id, offset down-right, on top of the stack.
    /// The copy becomes the selection.
    pub fn duplicate_note(&mut self, id: &NoteId) -> Option<NoteId> {
        let source = self.note(id)?;
        let mut copy = source.clone();
        copy.id = NoteId::generate();
        copy.x += PASTE_OFFSET;
        copy.y += PASTE_OFFSET;
        copy.z_index = self.next_z_index();
        let new_id = copy.id.clone();
        self.notes.push(copy);
        self.selection = vec![new_id.clone()];
        self.emit(BoardChange::Notes);
        self.emit(BoardChange::Selection);
        Some(new_id)
    }

    /// Duplicate every selected note; the duplicates become the selection
    pub fn duplicate_selected(&mut self) -> Vec<NoteId> {
        let ids = self.selection.clone();
        let copies: Vec<NoteId> = ids.iter().filter_map(|id| self.duplicate_note(id)).collect();
        if !copies.is_empty() {
            self.selection = copies.clone();
            self.emit(BoardChange::Selection);
        }
        copies
    }

    /// `None` clears the selection. With `multi`, toggles membership;
    /// otherwise replaces the selection with the single note.
    pub fn select_note(&mut self, id: Option<&NoteId>, multi: bool) {
        match id {
            None => self.selection.clear(),
            Some(id) if multi => {
                if let Some(pos) = self.selection.iter().position(|s| s == id) {
                    self.selection.remove(pos);
                } else {
                    self.selection.push(id.clone());
                }
            }
            Some(id) => self.selection = vec![id.clone()],
        }
        self.emit(BoardChange::Selection);
    }

    pub fn clear_selection(&mut self) {
        if !self.selection.is_empty() {
            self.select_note(None, false);
        }
    }

    /// Give the note `max(z) + 1`
    pub fn bring_to_front(&mut self, id: &NoteId) -> bool {
        let z = self.next_z_index();
        let Some(note) = self.note_mut(id) else {
            return false;
        };
        note.z_index = z;
        self.emit(BoardChange::Notes);
        true
    }

    /// Notes sorted back to front
    pub fn notes_by_z(&self) -> Vec<&Note> {
        let mut sorted: Vec<&Note> = self.notes.iter().collect();
        sorted.sort_by_key(|n| n.z_index);
        sorted
    }
}
