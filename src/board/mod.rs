//! Board entity store - notes, strokes, jobs, viewport, selection and clipboard.
//!
//! The store is the single owner of durable board state. It is mutated only
//! through the methods in this module's submodules:
//! - `notes` - note CRUD, selection, z-ordering
//! - `clipboard` - copy/paste of the selection
//! - `jobs` - job CRUD and the default-job rule
//! - `strokes` - ink strokes
//! - `view` - viewport, tool and pen state, fit/focus
//! - `snapshot` - serializable snapshot, load and clear
//! - `events` - typed change notifications
//!
//! Every mutation emits a [`BoardEvent`] to subscribers; side effects such as
//! persistence are driven from those events rather than from the store itself.

mod clipboard;
mod events;
mod jobs;
mod notes;
mod snapshot;
mod strokes;
mod view;

pub use events::{BoardChange, BoardEvent, ChangeOrigin, SubscriptionId};
pub use snapshot::BoardSnapshot;

use crate::constants::{DEFAULT_PEN_COLOR, DEFAULT_PEN_SIZE};
use crate::types::{Job, Note, NoteId, Stroke, ToolType, default_jobs};
use crate::viewport::Viewport;
use events::Subscribers;

/// The authoritative board state.
#[derive(Debug)]
pub struct Board {
    notes: Vec<Note>,
    strokes: Vec<Stroke>,
    jobs: Vec<Job>,
    viewport: Viewport,
    /// Selected note ids; insertion order is kept but carries no meaning
    selection: Vec<NoteId>,
    /// Deep copies taken at copy time, advanced on every paste
    clipboard: Vec<Note>,
    tool: ToolType,
    pen_color: String,
    pen_size: f64,
    dashboard_open: bool,
    /// Bumped on every change to durable state
    revision: u64,
    subscribers: Subscribers,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Empty board with the default jobs and viewport
    pub fn new() -> Self {
        Self {
            notes: Vec::new(),
            strokes: Vec::new(),
            jobs: default_jobs(),
            viewport: Viewport::default(),
            selection: Vec::new(),
            clipboard: Vec::new(),
            tool: ToolType::default(),
            pen_color: DEFAULT_PEN_COLOR.to_string(),
            pen_size: DEFAULT_PEN_SIZE,
            dashboard_open: false,
            revision: 0,
            subscribers: Subscribers::default(),
        }
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn selection(&self) -> &[NoteId] {
        &self.selection
    }

    pub fn clipboard(&self) -> &[Note] {
        &self.clipboard
    }

    pub fn tool(&self) -> ToolType {
        self.tool
    }

    pub fn pen_color(&self) -> &str {
        &self.pen_color
    }

    pub fn pen_size(&self) -> f64 {
        self.pen_size
    }

    pub fn is_dashboard_open(&self) -> bool {
        self.dashboard_open
    }

    /// Revision of durable state; changes whenever notes, strokes, jobs or
    /// the viewport change.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Register a change listener. Dropping the receiver or calling
    /// [`Board::unsubscribe`] tears the subscription down.
    pub fn subscribe(&mut self) -> (SubscriptionId, std::sync::mpsc::Receiver<BoardEvent>) {
        self.subscribers.subscribe()
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.unsubscribe(id)
    }

    pub(crate) fn emit(&mut self, change: BoardChange) {
        self.emit_from(change, ChangeOrigin::Local);
    }

    pub(crate) fn emit_from(&mut self, change: BoardChange, origin: ChangeOrigin) {
        if change.is_persistent() {
            self.revision = self.revision.wrapping_add(1);
        }
        let event = BoardEvent {
            change,
            origin,
            revision: self.revision,
        };
        tracing::trace!(?event, "board change");
        self.subscribers.notify(&event);
    }
}
