//! Session lifecycle - board, gesture arbiter and side-effect subscribers.
//!
//! A [`Session`] is what a host window drives:
//! - `start` loads the last snapshot and registers the sync subscriber
//! - input handlers forward platform events to the [`Arbiter`]
//! - `tick` runs the debounced push, applies remote snapshots and finished
//!   suggestions
//! - `shutdown` flushes pending work and tears the subscriber down

use crate::board::{Board, BoardEvent, ChangeOrigin, SubscriptionId};
use crate::input::{Arbiter, Key, Modifiers, PointerEvent, WheelEvent};
use crate::perf::PerfMonitor;
use crate::persistence::{BoardBackend, SyncScheduler, SyncStatus};
use crate::settings::Settings;
use crate::suggest::{SuggestionProvider, SuggestionRunner, SuggestionStatus, apply_suggestion};
use crate::types::NoteId;
use std::sync::Arc;
use std::sync::mpsc::Receiver;
use std::time::Instant;

pub struct Session<B: BoardBackend> {
    board: Board,
    arbiter: Arbiter,
    backend: B,
    subscription: Option<(SubscriptionId, Receiver<BoardEvent>)>,
    sync: SyncScheduler,
    suggestions: Option<SuggestionRunner>,
    perf: PerfMonitor,
    settings: Settings,
}

impl<B: BoardBackend> Session<B> {
    /// Load the stored board (or start empty) and begin tracking changes.
    /// A backend that fails to load is logged and the board starts empty.
    pub fn start(settings: Settings, mut backend: B) -> Self {
        let mut board = Board::new();
        board.set_pen_color(settings.pen_color.clone());
        board.set_pen_size(settings.pen_size);

        match backend.load() {
            Ok(Some(snapshot)) => {
                tracing::info!(
                    notes = snapshot.notes.len(),
                    strokes = snapshot.strokes.len(),
                    "Restored board"
                );
                // Already stored; nothing to push back
                board.load_board(snapshot, ChangeOrigin::Remote);
            }
            Ok(None) => tracing::info!("No stored board, starting empty"),
            Err(e) => tracing::warn!("Failed to load board, starting empty: {:#}", e),
        }

        let subscription = Some(board.subscribe());
        Self {
            board,
            arbiter: Arbiter::new(),
            backend,
            subscription,
            sync: SyncScheduler::new(settings.sync_debounce()),
            suggestions: None,
            perf: PerfMonitor::new(),
            settings,
        }
    }

    pub fn with_suggestions(mut self, provider: Arc<dyn SuggestionProvider>) -> Self {
        self.suggestions = Some(SuggestionRunner::new(provider));
        self
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Direct store access for toolbar and dashboard actions
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn arbiter(&self) -> &Arbiter {
        &self.arbiter
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn perf(&self) -> &PerfMonitor {
        &self.perf
    }

    pub fn sync_status(&self) -> &SyncStatus {
        self.sync.status()
    }

    pub fn suggestion_status(&self) -> SuggestionStatus {
        self.suggestions
            .as_ref()
            .map(SuggestionRunner::status)
            .unwrap_or_default()
    }

    // ------------------------------------------------------------------
    // Input
    // ------------------------------------------------------------------

    pub fn pointer_down(&mut self, event: &PointerEvent) {
        let (arbiter, board) = (&mut self.arbiter, &mut self.board);
        self.perf
            .time("pointer_down", || arbiter.pointer_down(board, event));
    }

    pub fn pointer_move(&mut self, event: &PointerEvent) {
        let (arbiter, board) = (&mut self.arbiter, &mut self.board);
        self.perf
            .time("pointer_move", || arbiter.pointer_move(board, event));
    }

    pub fn pointer_up(&mut self, event: &PointerEvent) {
        let (arbiter, board) = (&mut self.arbiter, &mut self.board);
        self.perf.time("pointer_up", || arbiter.pointer_up(board, event));
    }

    pub fn pointer_cancel(&mut self, event: &PointerEvent) {
        let (arbiter, board) = (&mut self.arbiter, &mut self.board);
        self.perf
            .time("pointer_up", || arbiter.pointer_cancel(board, event));
    }

    pub fn pointer_leave(&mut self, event: &PointerEvent) {
        let (arbiter, board) = (&mut self.arbiter, &mut self.board);
        self.perf
            .time("pointer_up", || arbiter.pointer_leave(board, event));
    }

    pub fn wheel(&mut self, event: &WheelEvent) {
        let (arbiter, board) = (&mut self.arbiter, &mut self.board);
        self.perf.time("wheel", || arbiter.wheel(board, event));
    }

    pub fn key_down(&mut self, key: Key, modifiers: Modifiers, text_focused: bool) -> bool {
        self.arbiter
            .key_down(&mut self.board, key, modifiers, text_focused)
    }

    pub fn key_up(&mut self, key: Key) {
        self.arbiter.key_up(key);
    }

    // ------------------------------------------------------------------
    // Toolbar actions that need settings
    // ------------------------------------------------------------------

    pub fn create_note_in_view(&mut self) -> NoteId {
        self.board.create_note_in_view(self.settings.surface_size())
    }

    pub fn center_view(&mut self) {
        self.board
            .center_view(self.settings.surface_size(), self.settings.fit_padding);
    }

    pub fn focus_on_note(&mut self, id: &NoteId) -> bool {
        self.board.focus_on_note(id, self.settings.surface_size())
    }

    /// Ask the suggestion provider about a note. Returns false when no
    /// provider is configured, a request is already running, or the note is
    /// missing or blank.
    pub fn request_suggestion(&mut self, id: &NoteId) -> bool {
        let Some(runner) = self.suggestions.as_mut() else {
            return false;
        };
        let Some(note) = self.board.note(id) else {
            return false;
        };
        runner.request(id.clone(), &note.content)
    }

    // ------------------------------------------------------------------
    // Lifecycle
    // ------------------------------------------------------------------

    /// Drive side effects. Call once per frame (or on a timer).
    pub fn tick(&mut self, now: Instant) {
        self.drain_events(now);

        if self.sync.is_due(now) {
            self.push();
        }

        if let Some(snapshot) = self.backend.poll_remote() {
            tracing::info!("Applying remote board snapshot");
            self.arbiter.reset();
            self.board.load_board(snapshot, ChangeOrigin::Remote);
            self.sync.cancel();
            // Discard the remote-tagged events so they never mark us dirty
            self.drain_events(now);
        }

        if let Some(runner) = self.suggestions.as_mut() {
            for result in runner.poll() {
                apply_suggestion(&mut self.board, &result);
            }
            self.drain_events(now);
        }
    }

    /// Push immediately if anything is pending
    pub fn flush(&mut self) {
        self.drain_events(Instant::now());
        if self.sync.is_pending() {
            self.push();
        }
    }

    /// Flush pending changes and unregister the sync subscriber
    pub fn shutdown(mut self) -> Board {
        self.flush();
        if let Some((id, _)) = self.subscription.take() {
            self.board.unsubscribe(id);
        }
        self.perf.log_summary_if_slow();
        tracing::info!("Session closed");
        self.board
    }

    fn drain_events(&mut self, now: Instant) {
        let Some((_, events)) = &self.subscription else {
            return;
        };
        let dirty = events
            .try_iter()
            .fold(false, |dirty, event| dirty | event.needs_sync());
        if dirty {
            self.sync.mark_dirty(now);
        }
    }

    fn push(&mut self) {
        let snapshot = self.board.snapshot();
        let result = self.backend.push(&snapshot);
        match &result {
            Ok(()) => tracing::debug!(revision = self.board.revision(), "Board synced"),
            Err(e) => tracing::error!("Board sync failed: {:#}", e),
        }
        self.sync.complete(&result);
    }
}

impl<B: BoardBackend + std::fmt::Debug> std::fmt::Debug for Session<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("backend", &self.backend)
            .field("mode", &self.arbiter.mode().kind())
            .field("sync", self.sync.status())
            .finish()
    }
}
